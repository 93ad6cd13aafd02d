//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! is a well-formed [BCP47](https://www.rfc-editor.org/rfc/bcp/bcp47.txt)
//! language tag.
//!
//! Language tags are compared, ordered and hashed case-insensitively,
//! as mandated by BCP47.
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// The production of well-formed language tags:
    /// an initial alphabetic subtag followed by alphanumeric subtags,
    /// all of 1 to 8 characters, separated by dashes.
    ///
    /// This regular expression matches the whole input (`^...$`),
    /// therefore it can not be used to capture language tags in an arbitrary string.
    static ref LANG_TAG: Regex = Regex::new(r"^[A-Za-z]{1,8}(?:-[A-Za-z0-9]{1,8})*$").unwrap();
}

/// This wrapper guarantees that the underlying `str`
/// is a well-formed language tag.
#[derive(Clone, Copy, Debug)]
pub struct LanguageTag<T: Borrow<str>>(T);

impl<T: Borrow<str>> LanguageTag<T> {
    /// Build a new [`LanguageTag`], checking that `tag` is well-formed.
    pub fn new(tag: T) -> Result<Self, InvalidLanguageTag> {
        if LANG_TAG.is_match(tag.borrow()) {
            Ok(LanguageTag(tag))
        } else {
            Err(InvalidLanguageTag(tag.borrow().to_string()))
        }
    }

    /// Build a new [`LanguageTag`] without checking that `tag` is well-formed.
    pub fn new_unchecked(tag: T) -> Self {
        LanguageTag(tag)
    }

    /// Get a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Unwrap the inner value.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Get an equivalent [`LanguageTag`] borrowing the underlying `str`.
    pub fn as_ref(&self) -> LanguageTag<&str> {
        LanguageTag(self.0.borrow())
    }

    /// Convert the inner value, keeping the wrapper.
    ///
    /// The caller is responsible for ensuring that `f` preserves the text.
    pub fn map_unchecked<U: Borrow<str>, F: FnOnce(T) -> U>(self, f: F) -> LanguageTag<U> {
        LanguageTag(f(self.0))
    }
}

impl<T: Borrow<str>, U: Borrow<str>> PartialEq<LanguageTag<U>> for LanguageTag<T> {
    fn eq(&self, other: &LanguageTag<U>) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl<T: Borrow<str>> Eq for LanguageTag<T> {}

impl<T: Borrow<str>, U: Borrow<str>> PartialOrd<LanguageTag<U>> for LanguageTag<T> {
    fn partial_cmp(&self, other: &LanguageTag<U>) -> Option<std::cmp::Ordering> {
        let bytes1 = self.as_str().bytes().map(|b| b.to_ascii_lowercase());
        let bytes2 = other.as_str().bytes().map(|b| b.to_ascii_lowercase());
        Some(bytes1.cmp(bytes2))
    }
}

impl<T: Borrow<str>> Ord for LanguageTag<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let bytes1 = self.as_str().bytes().map(|b| b.to_ascii_lowercase());
        let bytes2 = other.as_str().bytes().map(|b| b.to_ascii_lowercase());
        bytes1.cmp(bytes2)
    }
}

impl<T: Borrow<str>> std::hash::Hash for LanguageTag<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for b in self.as_str().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl<T: Borrow<str>> fmt::Display for LanguageTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

/// This error is raised when trying to parse an invalid language tag.
#[derive(Debug, Error)]
#[error("The given language tag '{0}' is not well-formed")]
pub struct InvalidLanguageTag(pub String);
