//! Tab group configuration shared by the widget and whoever builds pages for it.
//!
//! A configuration maps a group name (`"home"`, `"about"`) to the container
//! holding the tab links and the ordered list of panel ids it switches
//! between. The first panel of a group is the one visible after setup.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration embedded in the library, used when the page passes none.
pub const DEFAULT_TABS_CONFIG: &str = r#"
{
    "groups": {
        "home": { "containerId": "my-home-tabs", "panelIds": ["tab-a", "tab-b"] },
        "about": { "containerId": "my-about-tabs", "panelIds": ["tab-c", "tab-d"] }
    }
}
"#;

/// One tab group: the element holding the links plus the panels it controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabConfiguration {
    pub container_id: String,
    pub panel_ids: Vec<String>,
}

impl TabConfiguration {
    pub fn new<I, S>(container_id: impl Into<String>, panel_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            container_id: container_id.into(),
            panel_ids: panel_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Panel shown right after setup.
    pub fn default_panel(&self) -> Option<&str> {
        self.panel_ids.first().map(String::as_str)
    }
}

/// CSS class names forming the contract with the page stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabClasses {
    pub hide: String,
    pub show: String,
    pub selected: String,
}

impl Default for TabClasses {
    fn default() -> Self {
        Self {
            hide: "hideElement".to_string(),
            show: "showElement".to_string(),
            selected: "selected".to_string(),
        }
    }
}

/// What the widget does when asked for a group it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Return quietly, leaving the page untouched.
    #[default]
    Silent,
    /// Report the problem to the caller and warn in the console.
    Loud,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsConfig {
    pub groups: BTreeMap<String, TabConfiguration>,
    #[serde(default)]
    pub classes: TabClasses,
    #[serde(default)]
    pub failure_mode: FailureMode,
}

impl TabsConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: TabsConfig =
            serde_json::from_str(json).context("tab configuration is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded configuration (`home` and `about` groups).
    pub fn default_config() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_TABS_CONFIG)
    }

    pub fn with_group(mut self, name: impl Into<String>, group: TabConfiguration) -> Self {
        self.groups.insert(name.into(), group);
        self
    }

    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn group(&self, name: &str) -> Option<&TabConfiguration> {
        self.groups.get(name)
    }

    /// Every group needs a container and at least one panel.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, group) in &self.groups {
            if group.container_id.is_empty() {
                bail!("tab group `{name}` has an empty container id");
            }
            if group.panel_ids.is_empty() {
                bail!("tab group `{name}` has no panels");
            }
            if let Some(empty) = group.panel_ids.iter().position(String::is_empty) {
                bail!("tab group `{name}` has an empty panel id at position {empty}");
            }
        }
        Ok(())
    }
}
