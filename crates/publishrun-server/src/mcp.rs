//! MCP (Model Context Protocol) server implementation.
//!
//! Provides MCP tools for publishing through the remote backend:
//! - `get-account-list` - List accounts linked to a key
//! - `create-publish` - Publish content to one account
//! - `create-publish-list` - Publish content to every linked account
//! - `get-publish-task-list` - Get task statuses for a correlation id
//! - `open-aitoearn-website` - Point the user at the platform website
//! - `get-skKey` - Point the user at the key management page
//!
//! Which of these are served is decided by the [`ToolRegistry`] passed to
//! [`PublishMcpServer::new`].

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use publishrun_core::report::{render_accounts, render_batch, render_tasks, NO_ACCOUNTS_MESSAGE};
use publishrun_core::{BatchResult, ContentKind, ContentPayload, CorrelationId, ValidationError};

use crate::publisher::{PublishError, Publisher};
use crate::registry::{ToolName, ToolRegistry};

/// MCP server for publishing operations.
#[derive(Clone)]
pub struct PublishMcpServer {
    publisher: Publisher,
    website_url: String,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Parameter Types
// ============================================================================

/// Parameters for get-account-list tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountListParams {
    /// Secret key (API key) associated with the user's account.
    pub sk_key: String,
}

/// Content type argument.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KindArg {
    /// Video content; requires mediaUrl.
    Video,
    /// Multi-image article; requires imageUrls.
    Article,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Video => ContentKind::Video,
            KindArg::Article => ContentKind::Article,
        }
    }
}

/// Content fields shared by the publish tools.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentArgs {
    /// Content type: 'video' or 'article'.
    #[serde(alias = "type")]
    pub kind: KindArg,

    /// Title or headline for the published content.
    pub title: String,

    /// Optional description or caption.
    #[serde(default, alias = "desc")]
    pub description: Option<String>,

    /// Video file URL (required for video content).
    #[serde(default, alias = "videoUrl")]
    pub media_url: Option<String>,

    /// Cover image URL for the content thumbnail.
    pub cover_url: String,

    /// Comma-separated image URLs (required for article content).
    #[serde(default, alias = "imgUrlList")]
    pub image_urls: Option<String>,

    /// Optional scheduled publish time, 'YYYY-MM-DD HH:mm:ss'.
    #[serde(default, alias = "publishTime")]
    pub scheduled_at: Option<String>,

    /// Comma-separated topics or hashtags.
    pub topics: String,
}

impl ContentArgs {
    fn into_payload(self) -> ContentPayload {
        ContentPayload::new(self.kind.into(), self.title, self.cover_url, self.topics)
            .with_description(self.description)
            .with_media_url(self.media_url)
            .with_image_urls(self.image_urls.as_deref())
            .with_scheduled_at(self.scheduled_at)
    }
}

/// Parameters for create-publish tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublishParams {
    /// Secret key (API key) for account authentication.
    pub sk_key: String,

    /// Target account ID.
    pub account_id: String,

    #[serde(flatten)]
    pub content: ContentArgs,
}

/// Parameters for create-publish-list tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublishListParams {
    /// Secret key (API key) for account authentication.
    pub sk_key: String,

    #[serde(flatten)]
    pub content: ContentArgs,
}

/// Parameters for get-publish-task-list tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPublishTaskListParams {
    /// Secret key (API key) for account authentication.
    pub sk_key: String,

    /// Correlation ID returned by a publish call.
    #[serde(alias = "flowId")]
    pub correlation_id: String,
}

fn text_contents(lines: Vec<String>) -> Vec<Content> {
    lines.into_iter().map(Content::text).collect()
}

fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::MissingField("mediaUrl") => format!(
            "Validation Error: video content {}. Please provide the video file URL.",
            error
        ),
        ValidationError::MissingField("imageUrls") => format!(
            "Validation Error: article content {}. Please provide a comma-separated list of image URLs.",
            error
        ),
        ValidationError::MissingField(_) => format!("Validation Error: {}", error),
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl PublishMcpServer {
    /// Create a new MCP server serving only the tools enabled in `registry`.
    pub fn new(publisher: Publisher, website_url: impl Into<String>, registry: &ToolRegistry) -> Self {
        let mut tool_router = Self::tool_router();
        for tool in ToolName::ALL {
            if !registry.is_enabled(tool) {
                tool_router.remove_route(tool.as_str());
            }
        }

        Self {
            publisher,
            website_url: website_url.into(),
            tool_router,
        }
    }

    /// Names of the tools this server answers to.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }

    /// List accounts linked to a key.
    #[tool(
        name = "get-account-list",
        description = "Retrieve the social media accounts linked to the provided API key. Returns account IDs and platform types for publishing."
    )]
    async fn get_account_list(
        &self,
        Parameters(params): Parameters<GetAccountListParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.publisher.list_accounts(&params.sk_key).await {
            Ok(accounts) => {
                info!(account_count = accounts.len(), "Listed accounts via MCP");
                Ok(CallToolResult::success(text_contents(render_accounts(
                    &accounts,
                ))))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error retrieving account list: {}",
                e
            ))])),
        }
    }

    /// Publish content to one account.
    #[tool(
        name = "create-publish",
        description = "Create and publish content to a specific social media account. Video content requires mediaUrl, article content requires imageUrls."
    )]
    async fn create_publish(
        &self,
        Parameters(params): Parameters<CreatePublishParams>,
    ) -> Result<CallToolResult, McpError> {
        let payload = params.content.into_payload();

        match self
            .publisher
            .publish_one(&params.sk_key, &params.account_id, payload)
            .await
        {
            Ok(single) => {
                info!(
                    correlation_id = %single.correlation_id,
                    account_id = %params.account_id,
                    "Created publication via MCP"
                );
                Ok(CallToolResult::success(vec![Content::text(format!(
                    "Content published successfully! Correlation ID: {}. Result: {}",
                    single.correlation_id, single.result
                ))]))
            }
            Err(PublishError::Validation(e)) => {
                Ok(CallToolResult::error(vec![Content::text(validation_message(&e))]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error creating publication: {}",
                e
            ))])),
        }
    }

    /// Publish content to every linked account.
    #[tool(
        name = "create-publish-list",
        description = "Publish the same content to every social media account linked to the provided API key, one account at a time. Reports success or failure per account under one correlation ID."
    )]
    async fn create_publish_list(
        &self,
        Parameters(params): Parameters<CreatePublishListParams>,
    ) -> Result<CallToolResult, McpError> {
        let payload = params.content.into_payload();

        match self.publisher.publish_to_all(&params.sk_key, payload).await {
            Ok(BatchResult::NoAccounts) => Ok(CallToolResult::success(vec![Content::text(
                NO_ACCOUNTS_MESSAGE,
            )])),
            Ok(BatchResult::Completed(summary)) => {
                let contents = text_contents(render_batch(&summary));
                if summary.has_failures() {
                    Ok(CallToolResult::error(contents))
                } else {
                    Ok(CallToolResult::success(contents))
                }
            }
            Err(PublishError::Validation(e)) => {
                Ok(CallToolResult::error(vec![Content::text(validation_message(&e))]))
            }
            Err(PublishError::Discovery(e)) => Ok(CallToolResult::error(vec![Content::text(
                format!(
                    "Error: Unable to retrieve account data ({}). Please verify your API key and try again.",
                    e
                ),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error during batch publication: {}",
                e
            ))])),
        }
    }

    /// Get publish task statuses for a correlation id.
    #[tool(
        name = "get-publish-task-list",
        description = "Get the per-account publish task statuses recorded under a correlation ID (flowId)."
    )]
    async fn get_publish_task_list(
        &self,
        Parameters(params): Parameters<GetPublishTaskListParams>,
    ) -> Result<CallToolResult, McpError> {
        let correlation_id = CorrelationId::new(params.correlation_id);

        match self
            .publisher
            .list_tasks(&params.sk_key, &correlation_id)
            .await
        {
            Ok(tasks) => {
                info!(
                    correlation_id = %correlation_id,
                    task_count = tasks.len(),
                    "Listed publish tasks via MCP"
                );
                Ok(CallToolResult::success(text_contents(render_tasks(
                    &correlation_id,
                    &tasks,
                ))))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error retrieving publish tasks: {}",
                e
            ))])),
        }
    }

    /// Point the user at the platform website.
    #[tool(
        name = "open-aitoearn-website",
        description = "Open the AiToEarn platform website for account management, content creation, and API key management."
    )]
    async fn open_website(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Opening AiToEarn Platform\n\n\
             Website: {}\n\n\
             Features available on the platform:\n\
             - Account management and configuration\n\
             - Content creation and scheduling\n\
             - Analytics and performance tracking\n\
             - API key management\n\
             - Social media account integration\n\n\
             Tip: link your social media accounts and generate an API key there for use with this server.",
            self.website_url
        ))]))
    }

    /// Point the user at the key management page.
    #[tool(
        name = "get-skKey",
        description = "Get instructions for obtaining the secret key (skKey) used by the other tools."
    )]
    async fn get_sk_key(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(format!(
            "open web {}?type=skKey",
            self.website_url.trim_end_matches('/')
        ))]))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl ServerHandler for PublishMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "publishrun".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                website_url: Some(self.website_url.clone()),
                icons: None,
            },
            instructions: Some(
                "PublishRun MCP Server - Publish content to linked social media accounts. \
                 Use get-account-list to see accounts for a key, create-publish for one account, \
                 create-publish-list for all accounts, and get-publish-task-list with the returned \
                 correlation ID to follow progress."
                    .to_string(),
            ),
        }
    }
}
