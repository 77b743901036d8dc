//! Schema for a single enumerated option

use crate::error::ConfigError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use vgate_core::Selector;

/// One configuration option whose value is drawn from a closed set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSchema {
    /// Option name, unique within a [`SchemaSet`](crate::SchemaSet)
    pub name: String,

    /// Label used in error text; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Legal values in declaration order
    pub choices: Vec<String>,

    /// Value used when none is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ChoiceSchema {
    /// Create schema with no label or default
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            label: None,
            choices: choices.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// With error label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// With default value
    #[inline]
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Label for error text
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Check choices are non-empty and distinct, and the default is one of them
    ///
    /// # Errors
    /// [`ConfigError::EmptyChoices`], [`ConfigError::DuplicateChoice`] or
    /// [`ConfigError::InvalidDefault`] for the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.choices.is_empty() {
            return Err(ConfigError::EmptyChoices {
                option: self.name.clone(),
            });
        }

        let mut seen = IndexSet::with_capacity(self.choices.len());
        for choice in &self.choices {
            if !seen.insert(choice.as_str()) {
                return Err(ConfigError::DuplicateChoice {
                    option: self.name.clone(),
                    choice: choice.clone(),
                });
            }
        }

        if let Some(default) = &self.default {
            if !seen.contains(default.as_str()) {
                return Err(ConfigError::InvalidDefault {
                    option: self.name.clone(),
                    default: default.clone(),
                });
            }
        }

        Ok(())
    }

    /// Build the selector for this option's choices
    #[must_use]
    pub fn selector(&self) -> Selector<String> {
        Selector::new(self.choices.iter().cloned())
    }
}
