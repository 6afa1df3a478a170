//! Method-call style stringify on any `IntoIterator`.

use std::fmt::Display;

use crate::error::Result;
use crate::selector::Selector;
use crate::stringifier::Stringifier;

/// Extension methods so sequences can be stringified in place:
///
/// ```
/// use stringify_core::{Selector, StringifyExt};
///
/// assert_eq!(vec!["a", "b", "c"].stringify_with("-").unwrap(), "a-b-c");
/// let csv = [1, 2, 3]
///     .stringify_by(Some(","), [Some(Selector::display(|x: &i32| x * 2))])
///     .unwrap();
/// assert_eq!(csv, "2,4,6");
/// ```
pub trait StringifyExt: IntoIterator + Sized {
    /// Concatenate the `Display` forms with no separator.
    fn stringify(self) -> Result<String>
    where
        Self::Item: Display,
    {
        Stringifier::new().stringify(self)
    }

    /// Join the `Display` forms with `separator`.
    fn stringify_with(self, separator: &str) -> Result<String>
    where
        Self::Item: Display,
    {
        Stringifier::new().separator(Some(separator)).stringify(self)
    }

    /// Join with an optional separator and optional selectors.
    fn stringify_by<'a, S>(self, separator: Option<&'a str>, selectors: S) -> Result<String>
    where
        Self::Item: Display,
        S: IntoIterator<Item = Option<Selector<'a, Self::Item>>>,
    {
        Stringifier::new()
            .separator(separator)
            .selectors(selectors)
            .stringify(self)
    }

    /// Join elements that have no `Display` impl; needs at least one selector.
    fn stringify_selected<'a, S>(self, separator: Option<&'a str>, selectors: S) -> Result<String>
    where
        S: IntoIterator<Item = Option<Selector<'a, Self::Item>>>,
    {
        Stringifier::new()
            .separator(separator)
            .selectors(selectors)
            .stringify_selected(self)
    }
}

impl<I: IntoIterator> StringifyExt for I {}
