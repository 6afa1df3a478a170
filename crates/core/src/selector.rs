//! Selectors — per-element transforms applied before concatenation.
//!
//! A selector renders one element to a string. Several selectors on the same
//! stringifier are applied in order and their outputs appended back to back.

use std::fmt;

use crate::error::SelectorError;

type SelectorFn<'a, T> = dyn Fn(&T) -> Result<String, SelectorError> + 'a;

/// A boxed element-to-string transform.
///
/// Every constructor normalizes to a fallible function so the stringifier
/// has a single calling convention regardless of how the selector was built.
pub struct Selector<'a, T> {
    func: Box<SelectorFn<'a, T>>,
}

impl<'a, T> Selector<'a, T> {
    /// An infallible selector.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + 'a,
    {
        Self {
            func: Box::new(move |item: &T| Ok::<_, SelectorError>(f(item))),
        }
    }

    /// A selector that may fail. The first failure aborts the whole join.
    pub fn try_new<F, E>(f: F) -> Self
    where
        F: Fn(&T) -> Result<String, E> + 'a,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            func: Box::new(move |item: &T| f(item).map_err(SelectorError::new)),
        }
    }

    /// A selector producing any `Display` value, rendered with `to_string`.
    pub fn display<F, D>(f: F) -> Self
    where
        F: Fn(&T) -> D + 'a,
        D: fmt::Display,
    {
        Self::new(move |item: &T| f(item).to_string())
    }

    /// A selector that ignores the element and always yields `text`.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| text.clone())
    }

    /// Render one element.
    pub fn apply(&self, item: &T) -> Result<String, SelectorError> {
        (self.func)(item)
    }
}

impl<T> fmt::Debug for Selector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector").finish_non_exhaustive()
    }
}
