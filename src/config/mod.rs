use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

const DEFAULT_DOCUMENT_PATH: &str = "data/izahname.txt";
const DEFAULT_TEXT_MODEL: &str = "ytu-ce-cosmos/turkish-gpt2-large";

#[derive(Debug, Deserialize, Clone)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IzahnameConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    pub document: DocumentConfig,
    pub answer: AnswerConfig,
    pub mcp: McpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerConfig {
    pub mode: AnswerMode,
    /// Hugging Face model id used in remote mode (e.g., ytu-ce-cosmos/turkish-gpt2-large)
    pub text_model: String,
    /// Only present in remote mode.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct McpConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    Keyword,
    Remote,
}

impl FromStr for AnswerMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(AnswerMode::Keyword),
            "remote" => Ok(AnswerMode::Remote),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown answer mode '{}', expected 'keyword' or 'remote'",
                other
            ))),
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::Keyword => write!(f, "keyword"),
            AnswerMode::Remote => write!(f, "remote"),
        }
    }
}

impl IzahnameConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let mode: AnswerMode =
            get_env("IZAHNAME_ANSWER_MODE", Some("keyword"), is_prod)?.parse()?;
        let api_key = match mode {
            AnswerMode::Remote => Some(get_env("HF_API_KEY", None, is_prod)?),
            AnswerMode::Keyword => None,
        };

        Ok(IzahnameConfig {
            common: common_config,
            document: DocumentConfig {
                path: get_env("IZAHNAME_DOCUMENT_PATH", Some(DEFAULT_DOCUMENT_PATH), is_prod)?,
            },
            answer: AnswerConfig {
                mode,
                text_model: get_env("IZAHNAME_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
                api_key,
            },
            mcp: McpConfig {
                enabled: get_env("IZAHNAME_MCP_ENABLED", Some("true"), is_prod)?
                    .parse()
                    .unwrap_or(true),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
