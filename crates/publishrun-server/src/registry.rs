//! Explicit selection of the MCP tools a server exposes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every tool this server knows how to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetAccountList,
    CreatePublish,
    CreatePublishList,
    GetPublishTaskList,
    OpenWebsite,
    GetSkKey,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        ToolName::GetAccountList,
        ToolName::CreatePublish,
        ToolName::CreatePublishList,
        ToolName::GetPublishTaskList,
        ToolName::OpenWebsite,
        ToolName::GetSkKey,
    ];

    /// Wire name of the tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAccountList => "get-account-list",
            Self::CreatePublish => "create-publish",
            Self::CreatePublishList => "create-publish-list",
            Self::GetPublishTaskList => "get-publish-task-list",
            Self::OpenWebsite => "open-aitoearn-website",
            Self::GetSkKey => "get-skKey",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ToolName::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))
    }
}

/// Registry construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("No tools enabled")]
    Empty,
}

/// The set of enabled tools, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRegistry {
    enabled: Vec<ToolName>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// Registry with every tool enabled.
    pub fn all() -> Self {
        Self {
            enabled: ToolName::ALL.to_vec(),
        }
    }

    /// Build from tool names; an empty list enables every tool.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, RegistryError> {
        if names.is_empty() {
            return Ok(Self::all());
        }
        names
            .iter()
            .try_fold(Self::builder(), |builder, name| {
                name.as_ref().parse().map(|tool| builder.enable(tool))
            })?
            .build()
    }

    pub fn is_enabled(&self, tool: ToolName) -> bool {
        self.enabled.contains(&tool)
    }

    pub fn enabled(&self) -> &[ToolName] {
        &self.enabled
    }
}

/// Builder for [`ToolRegistry`].
#[derive(Debug, Clone, Default)]
pub struct ToolRegistryBuilder {
    enabled: Vec<ToolName>,
}

impl ToolRegistryBuilder {
    /// Enable one tool. Enabling twice is a no-op.
    pub fn enable(mut self, tool: ToolName) -> Self {
        if !self.enabled.contains(&tool) {
            self.enabled.push(tool);
        }
        self
    }

    pub fn build(self) -> Result<ToolRegistry, RegistryError> {
        if self.enabled.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(ToolRegistry {
            enabled: self.enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "delete-account".parse::<ToolName>(),
            Err(RegistryError::UnknownTool("delete-account".to_string()))
        );
    }

    #[test]
    fn test_builder() {
        let registry = ToolRegistry::builder()
            .enable(ToolName::GetAccountList)
            .enable(ToolName::CreatePublishList)
            .enable(ToolName::GetAccountList)
            .build()
            .unwrap();

        assert_eq!(
            registry.enabled(),
            &[ToolName::GetAccountList, ToolName::CreatePublishList]
        );
        assert!(!registry.is_enabled(ToolName::CreatePublish));
        assert_eq!(ToolRegistry::builder().build(), Err(RegistryError::Empty));
    }

    #[test]
    fn test_from_names() {
        let registry = ToolRegistry::from_names(&["create-publish", " get-skKey "]).unwrap();
        assert_eq!(registry.enabled(), &[ToolName::CreatePublish, ToolName::GetSkKey]);

        let empty: [&str; 0] = [];
        assert_eq!(ToolRegistry::from_names(&empty).unwrap(), ToolRegistry::all());

        assert!(ToolRegistry::from_names(&["nope"]).is_err());
    }
}
