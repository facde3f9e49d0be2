//! MCP tool handlers for the contact book server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::State;
use crate::error::ContactBookError;
use crate::models::ContactForm;
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactBookMcpServer {
    service: Arc<Mutex<ContactService>>,
    list_page_size: usize,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-book-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory contact book. Contacts are listed by name; the index shown by list_contacts addresses a contact for view_contact, edit_contact and delete_contact. Indices shift after every change, so list again before reusing one.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct IndexParams {
    /// Position of the contact as shown by list_contacts
    index: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EditContactParams {
    /// Position of the contact as shown by list_contacts
    index: usize,
    /// Replacement values for all six fields
    contact: ContactForm,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListContactsParams {
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    offset: Option<usize>,
}

// Rejected requests are reported as invalid parameters, tagged with the failure kind
fn to_mcp_error(e: ContactBookError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: Some(serde_json::json!({ "kind": e.kind() })),
    }
}

fn to_internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl ContactBookMcpServer {
    /// Create a new contact book server around `service`.
    pub fn new(service: ContactService, list_page_size: usize) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
            list_page_size,
            tool_router: Self::tool_router(),
        }
    }

    /// Add a new contact.
    #[tool(
        description = "Add a new contact. All six fields are required: name and city letters and spaces only, number and zipcode digits only, a valid email, and a state from list_states. Fails if a contact with the same name and number exists."
    )]
    async fn add_contact(
        &self,
        params: Parameters<ContactForm>,
    ) -> Result<CallToolResult, McpError> {
        let form = params.0;

        let mut service = self.service.lock().await;
        let contact = service.add(&form).map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "added": contact,
            "total": service.len(),
        }))
    }

    /// Show a single contact.
    #[tool(description = "Show all fields of the contact at the given list index")]
    async fn view_contact(
        &self,
        params: Parameters<IndexParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let service = self.service.lock().await;
        let contact = service.view(params.index).map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "index": params.index,
            "contact": contact,
        }))
    }

    /// Replace the contact at an index.
    #[tool(
        description = "Replace the contact at the given list index with new field values. The same field rules as add_contact apply."
    )]
    async fn edit_contact(
        &self,
        params: Parameters<EditContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let mut service = self.service.lock().await;
        let contact = service
            .edit(params.index, &params.contact)
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({ "updated": contact }))
    }

    /// Delete the contact at an index.
    #[tool(description = "Delete the contact at the given list index")]
    async fn delete_contact(
        &self,
        params: Parameters<IndexParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let mut service = self.service.lock().await;
        let contact = service.delete(params.index).map_err(to_mcp_error)?;

        json_result(&serde_json::json!({
            "deleted": contact,
            "total": service.len(),
        }))
    }

    /// List contacts ordered by name.
    #[tool(
        description = "List contacts in ascending name order, each with the index used by view_contact, edit_contact and delete_contact"
    )]
    async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.unwrap_or(self.list_page_size);
        let offset = params.offset.unwrap_or(0);

        let service = self.service.lock().await;
        let listing = service.list(limit, offset);

        let value = serde_json::to_value(&listing).map_err(to_internal_error)?;
        json_result(&value)
    }

    /// List the accepted state names.
    #[tool(description = "List the state names accepted in the state field")]
    async fn list_states(&self) -> Result<CallToolResult, McpError> {
        let states: Vec<&str> = State::all().map(|s| s.as_str()).collect();
        json_result(&serde_json::json!({ "states": states }))
    }

    /// Report counters for contact book activity.
    #[tool(description = "Report how many contacts are stored and counters of accepted and rejected operations")]
    async fn contact_book_stats(&self) -> Result<CallToolResult, McpError> {
        let service = self.service.lock().await;
        json_result(&serde_json::json!({
            "contacts": service.len(),
            "metrics": service.metrics().summary(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, number: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            number: number.into(),
            email: "a@b.co".into(),
            zipcode: "10001".into(),
            city: "Pune".into(),
            state: Some("Maharashtra".into()),
        }
    }

    fn result_json(result: CallToolResult) -> serde_json::Value {
        let text = result
            .content
            .first()
            .and_then(|c| c.as_text())
            .map(|t| t.text.clone())
            .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    fn server() -> ContactBookMcpServer {
        ContactBookMcpServer::new(ContactService::default(), 50)
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let server = server();
        server.add_contact(Parameters(form("Bob", "2"))).await.unwrap();
        server.add_contact(Parameters(form("Alice", "1"))).await.unwrap();

        let listing = result_json(
            server
                .list_contacts(Parameters(ListContactsParams {
                    limit: None,
                    offset: None,
                }))
                .await
                .unwrap(),
        );
        assert_eq!(listing["total"], 2);
        assert_eq!(listing["rows"][0]["index"], 0);
        assert_eq!(listing["rows"][0]["contact"]["name"], "Alice");
        assert_eq!(listing["rows"][1]["contact"]["name"], "Bob");
    }

    #[tokio::test]
    async fn test_rejections_carry_kind() {
        let server = server();
        server.add_contact(Parameters(form("Alice", "1"))).await.unwrap();

        let err = server
            .add_contact(Parameters(form("Alice", "1")))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.data, Some(serde_json::json!({ "kind": "DuplicateContact" })));

        let err = server
            .delete_contact(Parameters(IndexParams { index: 9 }))
            .await
            .unwrap_err();
        assert_eq!(err.data, Some(serde_json::json!({ "kind": "IndexOutOfRange" })));

        let err = server
            .add_contact(Parameters(ContactForm::default()))
            .await
            .unwrap_err();
        assert_eq!(err.data, Some(serde_json::json!({ "kind": "MissingField" })));
    }

    #[tokio::test]
    async fn test_view_edit_delete() {
        let server = server();
        server.add_contact(Parameters(form("Alice", "1"))).await.unwrap();

        let viewed = result_json(
            server
                .view_contact(Parameters(IndexParams { index: 0 }))
                .await
                .unwrap(),
        );
        assert_eq!(viewed["contact"]["number"], "1");

        server
            .edit_contact(Parameters(EditContactParams {
                index: 0,
                contact: form("Alicia", "1"),
            }))
            .await
            .unwrap();

        let deleted = result_json(
            server
                .delete_contact(Parameters(IndexParams { index: 0 }))
                .await
                .unwrap(),
        );
        assert_eq!(deleted["deleted"]["name"], "Alicia");
        assert_eq!(deleted["total"], 0);
    }

    #[tokio::test]
    async fn test_states_and_stats() {
        let server = server();
        let states = result_json(server.list_states().await.unwrap());
        assert_eq!(states["states"].as_array().map(Vec::len), Some(28));

        let _ = server.add_contact(Parameters(form("Bob7", "1"))).await;
        let stats = result_json(server.contact_book_stats().await.unwrap());
        assert_eq!(stats["contacts"], 0);
        assert_eq!(stats["metrics"]["validation_failures_total"], 1);
    }
}
