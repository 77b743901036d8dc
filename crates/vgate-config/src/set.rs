//! Named collection of option schemas with prebuilt selectors
//!
//! Selectors are compiled once when the set is loaded, then shared by every
//! resolution.

use crate::error::ConfigError;
use crate::schema::ChoiceSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vgate_core::{LogSink, Selection, Selector};

/// Serialized form of a [`SchemaSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Declared options
    #[serde(default)]
    pub options: Vec<ChoiceSchema>,
}

#[derive(Debug, Clone)]
struct CompiledOption {
    schema: ChoiceSchema,
    selector: Selector<String>,
}

/// Validated option schemas keyed by name
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    options: IndexMap<String, CompiledOption>,
}

impl SchemaSet {
    /// Build from schemas, validating each one
    ///
    /// # Errors
    /// Any [`ChoiceSchema::validate`] failure, or
    /// [`ConfigError::DuplicateOption`] when two schemas share a name.
    pub fn new<I>(schemas: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ChoiceSchema>,
    {
        let mut options = IndexMap::new();
        for schema in schemas {
            schema.validate()?;
            if options.contains_key(&schema.name) {
                return Err(ConfigError::DuplicateOption(schema.name));
            }
            let selector = schema.selector();
            options.insert(schema.name.clone(), CompiledOption { schema, selector });
        }

        tracing::debug!("Loaded {} option schemas", options.len());
        Ok(Self { options })
    }

    /// Parse a JSON schema document
    ///
    /// # Errors
    /// [`ConfigError::InvalidJson`] for malformed input, otherwise as
    /// [`SchemaSet::new`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        Self::new(document.options)
    }

    /// Parse a YAML schema document
    ///
    /// # Errors
    /// [`ConfigError::InvalidYaml`] for malformed input, otherwise as
    /// [`SchemaSet::new`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let document: SchemaDocument = serde_yaml::from_str(yaml)?;
        Self::new(document.options)
    }

    /// Route every selector's unsupported-value errors to `sink`
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        for option in self.options.values_mut() {
            option.selector = option.selector.clone().with_sink(Arc::clone(&sink));
        }
        self
    }

    /// Resolve `value` for option `name`, falling back to its default
    ///
    /// # Errors
    /// - [`ConfigError::UnknownOption`] if `name` is not declared
    /// - [`ConfigError::NoValue`] if `value` is `None` and there is no default
    /// - [`ConfigError::Select`] if the value is not a legal choice (logged)
    pub fn resolve(&self, name: &str, value: Option<&str>) -> Result<Selection<String>, ConfigError> {
        let option = self
            .options
            .get(name)
            .ok_or_else(|| ConfigError::UnknownOption(name.to_string()))?;

        let Some(value) = value.or(option.schema.default.as_deref()) else {
            return Err(ConfigError::NoValue {
                option: name.to_string(),
            });
        };

        option
            .selector
            .choose_with(value, option.schema.label(), ConfigError::Select)
    }

    /// Selector compiled for option `name`
    #[inline]
    #[must_use]
    pub fn selector(&self, name: &str) -> Option<&Selector<String>> {
        self.options.get(name).map(|o| &o.selector)
    }

    /// Schema for option `name`
    #[inline]
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&ChoiceSchema> {
        self.options.get(name).map(|o| &o.schema)
    }

    /// Option names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Number of options
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if no options are declared
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Serializable document for this set
    #[must_use]
    pub fn to_document(&self) -> SchemaDocument {
        SchemaDocument {
            options: self.options.values().map(|o| o.schema.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_format() -> ChoiceSchema {
        ChoiceSchema::new("log_format", ["line", "json"])
            .with_label("log format")
            .with_default("line")
    }

    #[test]
    fn empty_set() {
        let set = SchemaSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let result = SchemaSet::new([log_format(), log_format()]);
        assert!(matches!(result, Err(ConfigError::DuplicateOption(name)) if name == "log_format"));
    }

    #[test]
    fn new_propagates_schema_errors() {
        let bad = ChoiceSchema::new("mode", ["a"]).with_default("b");
        assert!(matches!(
            SchemaSet::new([bad]),
            Err(ConfigError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn resolve_explicit_value() {
        let set = SchemaSet::new([log_format()]).unwrap();
        let selection = set.resolve("log_format", Some("json")).unwrap();
        assert_eq!(selection.tag(), "json");
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let set = SchemaSet::new([log_format()]).unwrap();
        let selection = set.resolve("log_format", None).unwrap();
        assert_eq!(selection.tag(), "line");
    }

    #[test]
    fn resolve_without_default_or_value() {
        let set = SchemaSet::new([ChoiceSchema::new("mode", ["a", "b"])]).unwrap();
        assert!(matches!(
            set.resolve("mode", None),
            Err(ConfigError::NoValue { .. })
        ));
    }

    #[test]
    fn resolve_unknown_option() {
        let set = SchemaSet::new([log_format()]).unwrap();
        assert!(matches!(
            set.resolve("color", Some("red")),
            Err(ConfigError::UnknownOption(name)) if name == "color"
        ));
    }

    #[test]
    fn resolve_illegal_value_uses_label() {
        let set = SchemaSet::new([log_format()]).unwrap();
        let err = set.resolve("log_format", Some("raw")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported log format 'raw'; expected one of [line, json]"
        );
    }

    #[test]
    fn names_in_declaration_order() {
        let set = SchemaSet::new([log_format(), ChoiceSchema::new("mode", ["a"])]).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["log_format", "mode"]);
        assert_eq!(set.schema("mode").map(|s| s.choices.len()), Some(1));
        assert_eq!(set.selector("log_format").map(Selector::len), Some(2));
    }
}
