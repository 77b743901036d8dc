//! Selections bound to one legal tag
//!
//! Provides [`Selection`], the capability returned by
//! [`Selector::choose`]. Dispatching through it always re-checks the caller's
//! mapping against the full legal set.

use crate::error::SelectError;
use crate::map::VariantMap;
use crate::selector::{Selector, VariantTag};
use std::fmt;

/// Immutable binding of one legal tag to its selector
///
/// The tag is guaranteed legal at construction and never changes.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    selector: Selector<T>,
    tag: T,
}

impl<T: VariantTag> Selection<T> {
    /// Bind `tag`; callers must have checked membership
    #[inline]
    pub(crate) fn new(selector: Selector<T>, tag: T) -> Self {
        Self { selector, tag }
    }

    /// Chosen tag
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Originating selector
    #[inline]
    #[must_use]
    pub fn selector(&self) -> &Selector<T> {
        &self.selector
    }

    /// Check if this selection is bound to `tag`
    #[inline]
    #[must_use]
    pub fn is(&self, tag: &T) -> bool {
        self.tag == *tag
    }

    /// Take the value for the chosen tag out of an exhaustive mapping
    ///
    /// # Errors
    /// Propagates [`Selector::validate`] unchanged when the mapping's keys are
    /// not exactly the legal set.
    pub fn value_from<V, M>(&self, options: M) -> Result<V, SelectError>
    where
        M: VariantMap<T, V>,
    {
        self.selector.validate(options.tags())?;
        options
            .into_variant(&self.tag)
            .ok_or_else(|| SelectError::missing([&self.tag]))
    }

    /// Short alias for [`Selection::value_from`]
    ///
    /// # Errors
    /// Same as [`Selection::value_from`].
    #[inline]
    pub fn at<V, M>(&self, options: M) -> Result<V, SelectError>
    where
        M: VariantMap<T, V>,
    {
        self.value_from(options)
    }

    /// Borrow the value for the chosen tag from an exhaustive mapping
    ///
    /// # Errors
    /// Propagates [`Selector::validate`] unchanged when the mapping's keys are
    /// not exactly the legal set.
    pub fn value_ref<'m, V, M>(&self, options: &'m M) -> Result<&'m V, SelectError>
    where
        M: VariantMap<T, V>,
    {
        self.selector.validate(options.tags())?;
        options
            .get_variant(&self.tag)
            .ok_or_else(|| SelectError::missing([&self.tag]))
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeMap, HashMap};

    fn line() -> Selection<&'static str> {
        Selector::new(["line", "json"]).choose("line").unwrap()
    }

    #[test]
    fn value_from_exact_mapping() {
        let value = line()
            .value_from(HashMap::from([("line", "A"), ("json", "B")]))
            .unwrap();
        assert_eq!(value, "A");
    }

    #[test]
    fn value_from_missing_tag() {
        let err = line().value_from(HashMap::from([("line", "A")])).unwrap_err();
        assert_eq!(err.to_string(), "missing options for [json]");
    }

    #[test]
    fn value_from_unknown_tag() {
        let err = line()
            .value_from(HashMap::from([("line", "A"), ("json", "B"), ("raw", "C")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "unsupported options [raw]");
    }

    #[test]
    fn at_matches_value_from() {
        let options = BTreeMap::from([("line", 1), ("json", 2)]);
        assert_eq!(line().at(options.clone()), line().value_from(options));
    }

    #[test]
    fn value_ref_is_repeatable() {
        let selection = line();
        let options: IndexMap<&str, u32> = IndexMap::from([("json", 7), ("line", 3)]);

        assert_eq!(selection.value_ref(&options), Ok(&3));
        assert_eq!(selection.value_ref(&options), Ok(&3));
    }

    #[test]
    fn value_from_dispatches_behavior() {
        let plain: fn(&str) -> String = |s| s.to_string();
        let json: fn(&str) -> String = |s| format!("{{\"msg\":\"{s}\"}}");

        let selection = Selector::new(["line", "json"]).choose("json").unwrap();
        let render = selection
            .value_from(HashMap::from([("line", plain), ("json", json)]))
            .unwrap();

        assert_eq!(render("hi"), "{\"msg\":\"hi\"}");
    }

    #[test]
    fn selection_accessors() {
        let selection = line();
        assert!(selection.is(&"line"));
        assert!(!selection.is(&"json"));
        assert_eq!(selection.selector().len(), 2);
        assert_eq!(selection.to_string(), "line");
    }
}
