use crate::shared::metadata::{AttributeFilter, FormError, FormSchemaRegistry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub form: FormSection,
    pub sidebar: SidebarSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FormSection {
    pub default_tab: String,
    pub validation_mode: ValidationMode,
    pub attribute_filter: AttributeFilter,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub collapsible: Collapsible,
    pub default_open: bool,
    pub default_active: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingSection {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace` (any case)
    pub level: log::LevelFilter,
}

/// When field messages become visible
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Live from the first keystroke
    #[default]
    OnChange,
    /// Hidden until the first submit attempt, live afterwards
    OnSubmit,
}

/// What the sidebar rail does when collapsed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Collapsible {
    /// Shrink to an icon strip
    #[default]
    Icon,
    /// Slide out completely
    Offcanvas,
    /// Always expanded
    #[serde(rename = "none")]
    Disabled,
}

/// Default configuration embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[form]
default_tab = "productIdentity"
validation_mode = "on_change"
attribute_filter = "all"

[sidebar]
collapsible = "icon"
default_open = true
default_active = "/catalogue/add"

[logging]
level = "debug"
"#;

/// Load settings: embedded defaults, with `overrides` (TOML) merged on top.
///
/// Keys missing from `overrides` keep their default value.
pub fn load_settings(overrides: Option<&str>) -> anyhow::Result<FormSettings> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_SETTINGS)?;
    if let Some(overrides) = overrides {
        let overrides: toml::Table = toml::from_str(overrides)?;
        merge_tables(&mut merged, overrides);
    }
    let settings: FormSettings = toml::Value::Table(merged).try_into()?;
    Ok(settings)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_section)), toml::Value::Table(section)) => {
                merge_tables(base_section, section);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl Default for FormSettings {
    /// Same values as `DEFAULT_SETTINGS`
    fn default() -> Self {
        Self {
            form: FormSection {
                default_tab: "productIdentity".to_string(),
                validation_mode: ValidationMode::OnChange,
                attribute_filter: AttributeFilter::All,
            },
            sidebar: SidebarSection {
                collapsible: Collapsible::Icon,
                default_open: true,
                default_active: "/catalogue/add".to_string(),
            },
            logging: LoggingSection {
                level: log::LevelFilter::Debug,
            },
        }
    }
}

impl FormSettings {
    /// Check settings that refer to schema entries
    pub fn validate_against(&self, registry: &FormSchemaRegistry) -> Result<(), FormError> {
        registry.get_tab(&self.form.default_tab).map(|_| ())
    }
}
