use toml::Table;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Matches the fixed array size the binding tables have always had; going
/// over it is a misconfiguration the user must fix, so it fails startup.
pub const MAX_BINDINGS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub trigger: String,
    pub action: String,
}

/// Two append-only sequences of bindings, populated once at startup and
/// read-only afterwards. Internal bindings are trusted (key chords inside the
/// window); external ones arrive over the control channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingRegistry {
    internal: Vec<Binding>,
    external: Vec<Binding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingScope {
    Internal,
    External,
}

impl BindingScope {
    fn section(self) -> &'static str {
        match self {
            Self::Internal => "bindings_internal",
            Self::External => "bindings_external",
        }
    }
}

impl BindingRegistry {
    /// Builds the registry from the two binding sections of the config.
    ///
    /// Section keys are action names and values are trigger chords — the
    /// inversion is deliberate and matches the config format. A missing or
    /// malformed section is a `Config` error; the caller may degrade to an
    /// empty registry. Overflowing `MAX_BINDINGS` is fatal to startup.
    pub fn load(config: &Config) -> AppResult<Self> {
        let internal = load_section(config.bindings_internal.as_ref(), BindingScope::Internal)?;
        let external = load_section(config.bindings_external.as_ref(), BindingScope::External)?;
        Ok(Self { internal, external })
    }

    pub fn internal(&self) -> &[Binding] {
        &self.internal
    }

    pub fn external(&self) -> &[Binding] {
        &self.external
    }

    /// First-registered binding whose trigger matches, within one scope.
    pub fn resolve(&self, scope: BindingScope, trigger: &str) -> Option<&str> {
        let sequence = match scope {
            BindingScope::Internal => &self.internal,
            BindingScope::External => &self.external,
        };
        sequence
            .iter()
            .find(|binding| binding.trigger == trigger)
            .map(|binding| binding.action.as_str())
    }

    pub fn log_summary(&self) {
        for binding in &self.internal {
            info!(
                action = %binding.action,
                trigger = %binding.trigger,
                "internal binding"
            );
        }
        for binding in &self.external {
            info!(
                action = %binding.action,
                trigger = %binding.trigger,
                "external binding"
            );
        }
    }
}

fn load_section(table: Option<&Table>, scope: BindingScope) -> AppResult<Vec<Binding>> {
    let section = scope.section();
    let Some(table) = table else {
        return Err(AppError::config(format!("missing [{section}] section")));
    };

    let mut bindings = Vec::with_capacity(table.len());
    for (action, value) in table {
        let Some(trigger) = value.as_str() else {
            return Err(AppError::config(format!(
                "[{section}] {action}: trigger must be a string"
            )));
        };
        if bindings.len() >= MAX_BINDINGS {
            return Err(AppError::CapacityExceeded {
                section: match scope {
                    BindingScope::Internal => "internal",
                    BindingScope::External => "external",
                },
                limit: MAX_BINDINGS,
            });
        }
        bindings.push(Binding {
            trigger: trigger.to_string(),
            action: action.clone(),
        });
    }
    Ok(bindings)
}
