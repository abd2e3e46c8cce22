//! The closed catalog of access-controlled resources and actions.
//! Adding an entry is a code change; nothing registers resources at runtime.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// Areas of the console subject to access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Dashboard,
    Widget,
    Models,
    Prompts,
    Analytics,
    Settings,
    Users,
}

/// Operations performable on a resource. Not every action is meaningful for
/// every resource (e.g. export on the dashboard); callers decide which pairs
/// they surface, the model does not restrict them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    Configure,
}

impl Resource {
    pub const ALL: &'static [Resource] = &[
        Resource::Dashboard,
        Resource::Widget,
        Resource::Models,
        Resource::Prompts,
        Resource::Analytics,
        Resource::Settings,
        Resource::Users,
    ];

    /// Canonical identifier used in the backend JSON contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Dashboard => "dashboard",
            Resource::Widget => "widget",
            Resource::Models => "models",
            Resource::Prompts => "prompts",
            Resource::Analytics => "analytics",
            Resource::Settings => "settings",
            Resource::Users => "users",
        }
    }

    /// Display name for console tables and the role editor grid.
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Dashboard => "Dashboard",
            Resource::Widget => "Widget",
            Resource::Models => "AI Models",
            Resource::Prompts => "Prompts",
            Resource::Analytics => "Analytics",
            Resource::Settings => "Settings",
            Resource::Users => "Users & Roles",
        }
    }
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Export,
        Action::Configure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Configure => "configure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::View => "View",
            Action::Create => "Create",
            Action::Edit => "Edit",
            Action::Delete => "Delete",
            Action::Export => "Export",
            Action::Configure => "Configure",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resource {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == value)
            .ok_or_else(|| AccessError::validation("unknown_resource".to_string(), format!("unknown resource: {}", value)))
    }
}

impl std::str::FromStr for Action {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == value)
            .ok_or_else(|| AccessError::validation("unknown_action".to_string(), format!("unknown action: {}", value)))
    }
}
