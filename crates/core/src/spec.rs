//! Textual selector specs.
//!
//! Command lines and config files name selectors as short strings such as
//! `upper`, `lit:=` or `field:2:,`. A [`SelectorSpec`] is the parsed form and
//! builds a [`Selector`] over any string-like element.

use std::fmt;
use std::str::FromStr;

use crate::error::SpecError;
use crate::selector::Selector;

/// A built-in selector, parsed from `NAME` or `NAME:ARG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorSpec {
    Identity,
    Upper,
    Lower,
    Trim,
    Len,
    Rev,
    Quote,
    Literal(String),
    Prefix(String),
    Suffix(String),
    /// 1-based field; split on whitespace unless a delimiter is given.
    Field {
        index: usize,
        delimiter: Option<String>,
    },
}

/// Names, usage and descriptions of every built-in selector.
pub const CATALOG: &[(&str, &str, &str)] = &[
    ("id", "id", "the element unchanged"),
    ("upper", "upper", "uppercase"),
    ("lower", "lower", "lowercase"),
    ("trim", "trim", "leading and trailing whitespace removed"),
    ("len", "len", "length in characters"),
    ("rev", "rev", "characters reversed"),
    ("quote", "quote", "wrapped in double quotes, inner quotes escaped"),
    ("lit", "lit:TEXT", "TEXT, ignoring the element"),
    ("prefix", "prefix:TEXT", "TEXT followed by the element"),
    ("suffix", "suffix:TEXT", "the element followed by TEXT"),
    ("field", "field:N[:DELIM]", "the Nth field, split on whitespace or DELIM"),
];

fn usage(name: &str) -> &'static str {
    CATALOG
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, usage, _)| *usage)
        .unwrap_or("")
}

impl SelectorSpec {
    /// Split a comma-separated list of specs.
    ///
    /// A comma only starts a new spec when the text after it names a built-in
    /// selector; otherwise it belongs to the argument of the spec before it, so
    /// `field:2:,` and `lit:a,b` survive intact. Specs without an argument are
    /// trimmed.
    pub fn split_list(list: &str) -> Vec<String> {
        let mut specs: Vec<String> = Vec::new();
        for piece in list.split(',') {
            let name = piece.split(':').next().unwrap_or_default().trim();
            let known = CATALOG.iter().any(|(n, _, _)| *n == name);
            match specs.last_mut() {
                Some(last) if !known => {
                    last.push(',');
                    last.push_str(piece);
                }
                _ => specs.push(piece.trim_start().to_string()),
            }
        }
        specs
            .into_iter()
            .map(|spec| {
                if spec.contains(':') {
                    spec
                } else {
                    spec.trim().to_string()
                }
            })
            .filter(|spec| !spec.is_empty())
            .collect()
    }

    /// Build a selector for string-like elements.
    pub fn to_selector<'a, T: AsRef<str>>(&self) -> Selector<'a, T> {
        match self.clone() {
            Self::Identity => Selector::new(|s: &T| s.as_ref().to_string()),
            Self::Upper => Selector::new(|s: &T| s.as_ref().to_uppercase()),
            Self::Lower => Selector::new(|s: &T| s.as_ref().to_lowercase()),
            Self::Trim => Selector::new(|s: &T| s.as_ref().trim().to_string()),
            Self::Len => Selector::display(|s: &T| s.as_ref().chars().count()),
            Self::Rev => Selector::new(|s: &T| s.as_ref().chars().rev().collect()),
            Self::Quote => {
                Selector::new(|s: &T| format!("\"{}\"", s.as_ref().replace('"', "\\\"")))
            }
            Self::Literal(text) => Selector::literal(text),
            Self::Prefix(text) => Selector::new(move |s: &T| format!("{text}{}", s.as_ref())),
            Self::Suffix(text) => Selector::new(move |s: &T| format!("{}{text}", s.as_ref())),
            Self::Field { index, delimiter } => Selector::try_new(move |s: &T| {
                let Some(skip) = index.checked_sub(1) else {
                    return Err(format!(
                        "invalid field index {index} (fields are numbered from 1)"
                    ));
                };
                let line = s.as_ref();
                let field = match &delimiter {
                    Some(delim) => line.split(delim.as_str()).nth(skip),
                    None => line.split_whitespace().nth(skip),
                };
                field
                    .map(str::to_string)
                    .ok_or_else(|| format!("no field {index} in {line:?}"))
            }),
        }
    }
}

impl FromStr for SelectorSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let no_arg = |spec: SelectorSpec| match arg {
            None => Ok(spec),
            Some(_) => Err(SpecError::UnexpectedArgument { name: name.into() }),
        };
        let with_arg = || {
            arg.map(str::to_string).ok_or_else(|| SpecError::MissingArgument {
                name: name.into(),
                usage: usage(name),
            })
        };

        match name {
            "id" => no_arg(Self::Identity),
            "upper" => no_arg(Self::Upper),
            "lower" => no_arg(Self::Lower),
            "trim" => no_arg(Self::Trim),
            "len" => no_arg(Self::Len),
            "rev" => no_arg(Self::Rev),
            "quote" => no_arg(Self::Quote),
            "lit" => Ok(Self::Literal(with_arg()?)),
            "prefix" => Ok(Self::Prefix(with_arg()?)),
            "suffix" => Ok(Self::Suffix(with_arg()?)),
            "field" => {
                let arg = with_arg()?;
                let (index, delimiter) = match arg.split_once(':') {
                    Some((index, delim)) if !delim.is_empty() => (index, Some(delim.to_string())),
                    Some((index, _)) => (index, None),
                    None => (arg.as_str(), None),
                };
                let index = index
                    .parse::<usize>()
                    .ok()
                    .filter(|i| *i > 0)
                    .ok_or_else(|| SpecError::InvalidFieldIndex(index.to_string()))?;
                Ok(Self::Field { index, delimiter })
            }
            other => Err(SpecError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for SelectorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("id"),
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
            Self::Trim => f.write_str("trim"),
            Self::Len => f.write_str("len"),
            Self::Rev => f.write_str("rev"),
            Self::Quote => f.write_str("quote"),
            Self::Literal(text) => write!(f, "lit:{text}"),
            Self::Prefix(text) => write!(f, "prefix:{text}"),
            Self::Suffix(text) => write!(f, "suffix:{text}"),
            Self::Field { index, delimiter: None } => write!(f, "field:{index}"),
            Self::Field {
                index,
                delimiter: Some(delim),
            } => write!(f, "field:{index}:{delim}"),
        }
    }
}
