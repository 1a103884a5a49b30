//! MCP resource definitions.
//!
//! The service publishes exactly one resource: the izahname document,
//! listed under its `file://` URI and readable in full.

use rmcp::{
    model::{
        AnnotateAble, Implementation, ListResourcesResult, PaginatedRequestParam, RawResource,
        ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    ErrorData as McpError, ServerHandler,
};
use serde_json::json;

use crate::services::DocumentStore;

const RESOURCE_NAME: &str = "Izahname Document";
const RESOURCE_DESCRIPTION: &str = "Web üzerinden soru-cevap için izahname dokümanı";
const RESOURCE_MIME_TYPE: &str = "text/plain";

/// MCP server handler backed by the document store.
#[derive(Debug, Clone)]
pub struct IzahnameServer {
    store: DocumentStore,
}

impl IzahnameServer {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// The one fixed resource descriptor: URI, name, description, MIME type.
    fn descriptor(&self) -> Resource {
        let mut resource = RawResource::new(self.store.uri(), RESOURCE_NAME.to_string());
        resource.description = Some(RESOURCE_DESCRIPTION.to_string());
        resource.mime_type = Some(RESOURCE_MIME_TYPE.to_string());
        resource.no_annotation()
    }

    /// Resolve a read request against the single known URI.
    async fn read_uri(&self, uri: &str) -> Result<String, McpError> {
        if uri != self.store.uri() {
            return Err(McpError::resource_not_found(
                "Resource not found",
                Some(json!({ "uri": uri })),
            ));
        }

        self.store.read().await.map_err(|e| {
            tracing::error!(uri = %uri, error = %e, "Failed to read resource");
            McpError::internal_error(e.to_string(), None)
        })
    }
}

impl ServerHandler for IzahnameServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Exposes the izahname document as a single read-only resource. \
                 Use resources/list to discover its URI and resources/read to \
                 fetch the full text."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            meta: None,
            resources: vec![self.descriptor()],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri, .. }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let content = self.read_uri(&uri).await?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content, uri)],
        })
    }
}
