//! Closed tag sets and the membership/exhaustiveness gate
//!
//! A [`Selector`] is built once, usually from configuration, and hands out
//! [`Selection`]s for legal tags only. It is also the single source of truth
//! for whether a variant mapping is exhaustive.

use crate::error::SelectError;
use crate::selection::Selection;
use crate::sink::{LogSink, TracingSink};
use indexmap::{Equivalent, IndexSet};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Default label used in unsupported-candidate messages
pub const DEFAULT_LABEL: &str = "choice";

/// Identifier of one variant in a closed set
///
/// Blanket-implemented for every `Eq + Hash + Clone + Display` type.
pub trait VariantTag: Eq + Hash + Clone + fmt::Display {}

impl<T: Eq + Hash + Clone + fmt::Display> VariantTag for T {}

/// Fieldless enums that can enumerate their own variants
///
/// ```rust
/// use std::fmt;
/// use vgate_core::{Selector, Variants};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Format {
///     Line,
///     Json,
/// }
///
/// impl fmt::Display for Format {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             Format::Line => "line",
///             Format::Json => "json",
///         })
///     }
/// }
///
/// impl Variants for Format {
///     const ALL: &'static [Self] = &[Format::Line, Format::Json];
/// }
///
/// let selector = Selector::<Format>::of();
/// assert_eq!(selector.len(), 2);
/// ```
pub trait Variants: Sized + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];
}

/// Immutable holder of the legal tag set
#[derive(Debug, Clone)]
pub struct Selector<T> {
    tags: Arc<IndexSet<T>>,
    sink: Arc<dyn LogSink>,
}

impl<T: VariantTag> Selector<T> {
    /// Create selector over `supported` tags
    ///
    /// Duplicates collapse to their first occurrence. An empty set is allowed
    /// but no candidate can ever be chosen from it.
    #[must_use]
    pub fn new<I>(supported: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            tags: Arc::new(supported.into_iter().collect()),
            sink: Arc::new(TracingSink),
        }
    }

    /// Create selector over every variant of `T`
    #[must_use]
    pub fn of() -> Self
    where
        T: Variants,
    {
        Self::new(T::ALL.iter().cloned())
    }

    /// Replace the sink that receives unsupported-candidate errors
    #[inline]
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Choose `candidate` with the default label
    ///
    /// # Errors
    /// [`SelectError::Unsupported`] if `candidate` is not legal; the message
    /// is logged through the sink first.
    pub fn choose<Q>(&self, candidate: &Q) -> Result<Selection<T>, SelectError>
    where
        Q: Hash + Equivalent<T> + fmt::Display + ?Sized,
    {
        self.choose_with(candidate, DEFAULT_LABEL, |e| e)
    }

    /// Choose `candidate`, naming it `label` in error text
    ///
    /// # Errors
    /// [`SelectError::Unsupported`] if `candidate` is not legal; the message
    /// is logged through the sink first.
    pub fn choose_labeled<Q>(&self, candidate: &Q, label: &str) -> Result<Selection<T>, SelectError>
    where
        Q: Hash + Equivalent<T> + fmt::Display + ?Sized,
    {
        self.choose_with(candidate, label, |e| e)
    }

    /// Choose `candidate`, converting failure with `kind`
    ///
    /// The unsupported-candidate message is sent to the sink before `kind`
    /// runs, so the logged text is always the [`SelectError`] message.
    ///
    /// # Errors
    /// `kind(SelectError::Unsupported { .. })` if `candidate` is not legal.
    pub fn choose_with<Q, E, F>(&self, candidate: &Q, label: &str, kind: F) -> Result<Selection<T>, E>
    where
        Q: Hash + Equivalent<T> + fmt::Display + ?Sized,
        F: FnOnce(SelectError) -> E,
    {
        match self.tags.get(candidate) {
            Some(tag) => {
                tracing::debug!("Selected {} '{}'", label, tag);
                Ok(Selection::new(self.clone(), tag.clone()))
            }
            None => {
                let err = SelectError::unsupported(label, candidate, self.tags.iter());
                self.sink.error(&err.to_string());
                Err(kind(err))
            }
        }
    }

    /// Check that `supplied` is exactly the legal tag set
    ///
    /// Does not log.
    ///
    /// # Errors
    /// - [`SelectError::Missing`] if any legal tag is absent
    /// - [`SelectError::Unknown`] if no tag is missing but extras exist
    pub fn validate<'a, I>(&self, supplied: I) -> Result<(), SelectError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let supplied: IndexSet<&T> = supplied.into_iter().collect();

        let missing: Vec<&T> = self.tags.iter().filter(|t| !supplied.contains(t)).collect();
        if !missing.is_empty() {
            return Err(SelectError::missing(missing));
        }

        let unknown: Vec<&T> = supplied
            .iter()
            .copied()
            .filter(|t| !self.tags.contains(*t))
            .collect();
        if !unknown.is_empty() {
            return Err(SelectError::unknown(unknown));
        }

        Ok(())
    }

    /// Check if `tag` is legal
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, tag: &Q) -> bool
    where
        Q: Hash + Equivalent<T> + ?Sized,
    {
        self.tags.contains(tag)
    }

    /// Iterate legal tags in construction order
    pub fn tags(&self) -> impl Iterator<Item = &T> {
        self.tags.iter()
    }

    /// Number of legal tags
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no tag is legal
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
