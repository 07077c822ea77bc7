//! Server configuration.

use clap::Parser;
use publishrun_client::DEFAULT_BASE_URL;

use crate::registry::{RegistryError, ToolRegistry};

/// Platform website shown to users.
pub const DEFAULT_WEBSITE_URL: &str = "https://aitoearn.ai";

/// PublishRun MCP server over stdio.
#[derive(Parser, Debug)]
#[command(
    name = "publishrun",
    version,
    about = "MCP server for discovering linked social media accounts and publishing to them"
)]
pub struct Args {
    /// Base URL of the publishing backend
    #[arg(long, env = "PUBLISHRUN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Platform website URL used in tool responses
    #[arg(long, env = "PUBLISHRUN_WEBSITE_URL", default_value = DEFAULT_WEBSITE_URL)]
    pub website_url: String,

    /// Comma-separated tool names to enable (default: all tools)
    #[arg(long, env = "PUBLISHRUN_TOOLS", value_delimiter = ',')]
    pub tools: Vec<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL.
    pub base_url: String,

    /// Platform website URL.
    pub website_url: String,

    /// Tools to serve.
    pub tools: ToolRegistry,
}

impl TryFrom<Args> for Config {
    type Error = RegistryError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Self {
            base_url: args.base_url,
            website_url: args.website_url,
            tools: ToolRegistry::from_names(&args.tools)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolName;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["publishrun"]).unwrap();
        let config = Config::try_from(args).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.website_url, DEFAULT_WEBSITE_URL);
        assert_eq!(config.tools, ToolRegistry::all());
    }

    #[test]
    fn test_tools_flag() {
        let args = Args::try_parse_from([
            "publishrun",
            "--base-url",
            "http://localhost:3000",
            "--tools",
            "get-account-list,create-publish-list",
        ])
        .unwrap();
        let config = Config::try_from(args).unwrap();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(
            config.tools.enabled(),
            &[ToolName::GetAccountList, ToolName::CreatePublishList]
        );
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let args = Args::try_parse_from(["publishrun", "--tools", "get-account-list,bogus"]).unwrap();
        assert_eq!(
            Config::try_from(args).unwrap_err(),
            RegistryError::UnknownTool("bogus".to_string())
        );
    }
}
