//! The stringifier — joins a sequence into one string.
//!
//! Rendering depends on how many selectors are configured:
//! - none: each element's `Display` form, joined with the separator
//! - one: the selector's output per element, joined with the separator
//! - several: every selector's output appended per element, elements
//!   separated by the separator

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::selector::Selector;

/// A reusable join configuration: a separator plus an ordered selector list.
///
/// Absent separators and selectors are normalized on the way in, so a built
/// `Stringifier` only ever holds a concrete separator and present selectors.
pub struct Stringifier<'a, T> {
    separator: Cow<'a, str>,
    selectors: Vec<Selector<'a, T>>,
}

impl<'a, T> Stringifier<'a, T> {
    pub fn new() -> Self {
        Self {
            separator: Cow::Borrowed(""),
            selectors: Vec::new(),
        }
    }

    /// Set the separator. `None` means the empty string.
    pub fn separator(mut self, separator: Option<&'a str>) -> Self {
        self.separator = Cow::Borrowed(separator.unwrap_or(""));
        self
    }

    /// Set an owned separator, e.g. one read from configuration.
    pub fn owned_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Cow::Owned(separator.into());
        self
    }

    /// Append one selector.
    pub fn selector(mut self, selector: Selector<'a, T>) -> Self {
        self.selectors.push(selector);
        self
    }

    /// Append several selectors, dropping absent entries and keeping order.
    pub fn selectors<I>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = Option<Selector<'a, T>>>,
    {
        self.selectors.extend(selectors.into_iter().flatten());
        self
    }

    pub fn separator_str(&self) -> &str {
        &self.separator
    }

    /// Number of present selectors.
    pub fn selector_count(&self) -> usize {
        self.selectors.len()
    }

    /// Join `source`, falling back to `Display` when no selectors are set.
    pub fn stringify<I>(&self, source: I) -> Result<String>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let mut out = String::new();
        self.write_to(source, &mut out)?;
        Ok(out)
    }

    /// Join `source` for element types with no default string form.
    ///
    /// Fails with [`Error::InvalidArgument`] when no selector is configured.
    pub fn stringify_selected<I>(&self, source: I) -> Result<String>
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = String::new();
        self.write_selected_to(source, &mut out)?;
        Ok(out)
    }

    /// Append the joined `source` to `out`.
    ///
    /// On error `out` may already hold the output of earlier elements.
    pub fn write_to<I, W>(&self, source: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
        W: Write + ?Sized,
    {
        if self.selectors.is_empty() {
            tracing::trace!(separator = %self.separator, "stringify with display rendering");
            return write_display(source, &self.separator, out);
        }
        self.write_selected_to(source, out)
    }

    /// Append the joined `source` to `out` using the configured selectors.
    pub fn write_selected_to<I, W>(&self, source: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        W: Write + ?Sized,
    {
        tracing::trace!(
            selectors = self.selectors.len(),
            separator = %self.separator,
            "stringify with selectors"
        );

        match self.selectors.as_slice() {
            [] => Err(Error::InvalidArgument(
                "at least one selector is required for elements without a default string form"
                    .into(),
            )),
            [selector] => {
                let pieces = source
                    .into_iter()
                    .map(|item| selector.apply(&item))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                out.write_str(&pieces.join(self.separator.as_ref()))?;
                Ok(())
            }
            selectors => {
                let has_separator = !self.separator.is_empty();
                for (index, item) in source.into_iter().enumerate() {
                    if has_separator && index > 0 {
                        out.write_str(&self.separator)?;
                    }
                    for selector in selectors {
                        out.write_str(&selector.apply(&item)?)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl<T> Default for Stringifier<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stringifier<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stringifier")
            .field("separator", &self.separator)
            .field("selectors", &self.selectors.len())
            .finish()
    }
}

fn write_display<I, W>(source: I, separator: &str, out: &mut W) -> Result<()>
where
    I: IntoIterator,
    I::Item: fmt::Display,
    W: Write + ?Sized,
{
    for (index, item) in source.into_iter().enumerate() {
        if index > 0 {
            out.write_str(separator)?;
        }
        write!(out, "{item}")?;
    }
    Ok(())
}

fn require<I>(source: Option<I>) -> Result<I> {
    source.ok_or_else(|| Error::InvalidArgument("source sequence is absent".into()))
}

/// Join `source` with `separator`, rendering each element through `selectors`.
///
/// This is the full form: every input may be absent. An absent `source` is
/// rejected before anything else happens; an absent `separator` is `""`;
/// absent selectors are skipped. With no selectors left, elements render via
/// `Display`.
///
/// ```
/// use stringify_core::{stringify, Selector};
///
/// let doubled = stringify(
///     Some([1, 2, 3]),
///     Some(","),
///     [Some(Selector::display(|x: &i32| x * 2))],
/// )
/// .unwrap();
/// assert_eq!(doubled, "2,4,6");
/// ```
pub fn stringify<'a, I, S>(
    source: Option<I>,
    separator: Option<&'a str>,
    selectors: S,
) -> Result<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
    S: IntoIterator<Item = Option<Selector<'a, I::Item>>>,
{
    let source = require(source)?;
    Stringifier::new()
        .separator(separator)
        .selectors(selectors)
        .stringify(source)
}

/// Like [`stringify`], for elements without a `Display` impl.
///
/// At least one present selector is required.
pub fn stringify_selected<'a, I, S>(
    source: Option<I>,
    separator: Option<&'a str>,
    selectors: S,
) -> Result<String>
where
    I: IntoIterator,
    S: IntoIterator<Item = Option<Selector<'a, I::Item>>>,
{
    let source = require(source)?;
    Stringifier::new()
        .separator(separator)
        .selectors(selectors)
        .stringify_selected(source)
}

/// Concatenate the `Display` forms of `source` with no separator.
pub fn stringify_default<I>(source: Option<I>) -> Result<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let source = require(source)?;
    Stringifier::new().stringify(source)
}

/// Concatenate the selector outputs for `source` with no separator.
pub fn stringify_by<'a, I, S>(source: Option<I>, selectors: S) -> Result<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
    S: IntoIterator<Item = Option<Selector<'a, I::Item>>>,
{
    stringify(source, None, selectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn none<'a, T>() -> Vec<Option<Selector<'a, T>>> {
        Vec::new()
    }

    #[test]
    fn joins_display_forms_without_selectors() {
        let result = stringify(Some(["a", "b", "c"]), Some("-"), none()).unwrap();
        assert_eq!(result, "a-b-c");
    }

    #[test]
    fn matches_std_join_without_selectors() {
        let words = vec!["x", "yy", "", "zzz"];
        for sep in ["", ",", " | "] {
            let result = stringify(Some(words.iter()), Some(sep), none()).unwrap();
            assert_eq!(result, words.join(sep));
        }
    }

    #[test]
    fn single_selector_maps_then_joins() {
        let result = stringify(
            Some([1, 2, 3]),
            Some(","),
            [Some(Selector::display(|x: &i32| x * 2))],
        )
        .unwrap();
        assert_eq!(result, "2,4,6");
    }

    #[test]
    fn multiple_selectors_concatenate_per_element() {
        let entries = BTreeMap::from([("key1", "value1"), ("key2", "value2")]);
        let result = stringify_selected(
            Some(entries),
            Some(";"),
            [
                Some(Selector::new(|(k, _): &(&str, &str)| k.to_string())),
                Some(Selector::literal(" ")),
                Some(Selector::new(|(_, v): &(&str, &str)| v.to_string())),
            ],
        )
        .unwrap();
        assert_eq!(result, "key1 value1;key2 value2");
    }

    #[test]
    fn multiple_selectors_without_separator() {
        let result = stringify_by(
            Some(["a", "b"]),
            [
                Some(Selector::new(|s: &&str| s.to_uppercase())),
                Some(Selector::new(|s: &&str| s.to_string())),
            ],
        )
        .unwrap();
        assert_eq!(result, "AaBb");
    }

    #[test]
    fn two_selectors_match_pairwise_concatenation() {
        let nums = [3, 10, 7];
        let result = stringify(
            Some(nums),
            Some("/"),
            [
                Some(Selector::display(|n: &i32| n + 1)),
                Some(Selector::display(|n: &i32| n * 10)),
            ],
        )
        .unwrap();
        let expected = nums
            .iter()
            .map(|n| format!("{}{}", n + 1, n * 10))
            .collect::<Vec<_>>()
            .join("/");
        assert_eq!(result, expected);
    }

    #[test]
    fn absent_selectors_are_ignored() {
        let with_none = stringify(
            Some([1, 2]),
            Some("+"),
            [None, Some(Selector::display(|n: &i32| n * 3)), None],
        )
        .unwrap();
        let without = stringify(
            Some([1, 2]),
            Some("+"),
            [Some(Selector::display(|n: &i32| n * 3))],
        )
        .unwrap();
        assert_eq!(with_none, "3+6");
        assert_eq!(with_none, without);
    }

    #[test]
    fn only_absent_selectors_fall_back_to_display() {
        let result = stringify(Some([1, 2, 3]), Some(" "), [None, None]).unwrap();
        assert_eq!(result, "1 2 3");
    }

    #[test]
    fn absent_separator_is_empty() {
        let absent = stringify(Some(["a", "b"]), None, none()).unwrap();
        let empty = stringify(Some(["a", "b"]), Some(""), none()).unwrap();
        assert_eq!(absent, "ab");
        assert_eq!(absent, empty);
    }

    #[test]
    fn empty_source_yields_empty_string() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(stringify(Some(&empty), Some(","), none()).unwrap(), "");
        let result = stringify(
            Some(empty.iter()),
            Some(","),
            [
                Some(Selector::literal("x")),
                Some(Selector::literal("y")),
            ],
        )
        .unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn absent_source_is_invalid_argument() {
        let err = stringify::<Vec<i32>, _>(None, Some(","), none()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = stringify_default::<Vec<i32>>(None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn absent_source_is_rejected_before_selectors_run() {
        let calls = std::cell::Cell::new(0);
        let err = stringify::<Vec<i32>, _>(
            None,
            None,
            [Some(Selector::new(|n: &i32| {
                calls.set(calls.get() + 1);
                n.to_string()
            }))],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn selector_error_aborts_join() {
        let calls = std::cell::Cell::new(0);
        let err = stringify(
            Some([1, 2, 3, 4]),
            Some(","),
            [
                Some(Selector::literal("#")),
                Some(Selector::try_new(|n: &i32| {
                    calls.set(calls.get() + 1);
                    if *n == 2 {
                        Err("two is not allowed")
                    } else {
                        Ok(n.to_string())
                    }
                })),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Selector(_)));
        assert_eq!(err.to_string(), "two is not allowed");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn single_selector_error_propagates() {
        let err = stringify(
            Some(["ok", "bad"]),
            None,
            [Some(Selector::try_new(|s: &&str| {
                if *s == "bad" {
                    Err(format!("cannot render {s}"))
                } else {
                    Ok(s.to_string())
                }
            }))],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "cannot render bad");
    }

    #[test]
    fn selected_without_selectors_is_invalid_argument() {
        let err = stringify_selected(Some([(1, 2)]), Some(","), [None]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn default_concatenates_without_separator() {
        assert_eq!(stringify_default(Some(vec![1, 2, 3])).unwrap(), "123");
    }

    #[test]
    fn stringifier_is_reusable() {
        let stringifier = Stringifier::new()
            .separator(Some(", "))
            .selector(Selector::new(|s: &String| s.to_lowercase()));
        let first = stringifier
            .stringify(vec!["A".to_string(), "B".to_string()])
            .unwrap();
        let second = stringifier.stringify(vec!["C".to_string()]).unwrap();
        assert_eq!(first, "a, b");
        assert_eq!(second, "c");
    }

    #[test]
    fn builder_skips_absent_selector() {
        let stringifier: Stringifier<'_, i32> =
            Stringifier::new().selectors([None, Some(Selector::literal("x")), None]);
        assert_eq!(stringifier.selector_count(), 1);
    }

    #[test]
    fn write_to_appends_to_existing_buffer() {
        let mut out = String::from("values: ");
        Stringifier::new()
            .separator(Some(", "))
            .write_to([1, 2, 3], &mut out)
            .unwrap();
        assert_eq!(out, "values: 1, 2, 3");
    }

    #[test]
    fn write_to_with_multiple_selectors() {
        let mut out = String::from("[");
        Stringifier::new()
            .separator(Some(" "))
            .selector(Selector::literal("<"))
            .selector(Selector::display(|c: &char| c.to_ascii_uppercase()))
            .selector(Selector::literal(">"))
            .write_to("ab".chars(), &mut out)
            .unwrap();
        out.push(']');
        assert_eq!(out, "[<A> <B>]");
    }

    #[test]
    fn owned_separator_from_runtime_value() {
        let sep = String::from("::");
        let result = Stringifier::new()
            .owned_separator(sep)
            .stringify(["a", "b"])
            .unwrap();
        assert_eq!(result, "a::b");
    }
}
