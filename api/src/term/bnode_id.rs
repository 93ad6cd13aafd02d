//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str`
//! is usable as a [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! label (without the leading `_:`).
use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// A simplified production of Turtle's `BLANK_NODE_LABEL`:
    /// word characters plus inner dots and dashes, not ending with a dot.
    ///
    /// This regular expression matches the whole input (`^...$`),
    /// therefore it can not be used to capture labels in an arbitrary string.
    static ref BNODE_ID: Regex = Regex::new(r"^\w(?:[\w.-]*[\w-])?$").unwrap();
}

/// This wrapper guarantees that the underlying `str`
/// is usable as a blank node label.
#[derive(Clone, Copy, Debug)]
pub struct BnodeId<T: Borrow<str>>(T);

impl<T: Borrow<str>> BnodeId<T> {
    /// Build a new [`BnodeId`], checking that `id` is valid.
    pub fn new(id: T) -> Result<Self, InvalidBnodeId> {
        if BNODE_ID.is_match(id.borrow()) {
            Ok(BnodeId(id))
        } else {
            Err(InvalidBnodeId(id.borrow().to_string()))
        }
    }

    /// Build a new [`BnodeId`] without checking that `id` is valid.
    pub fn new_unchecked(id: T) -> Self {
        BnodeId(id)
    }

    /// Get a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Unwrap the inner value.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Get an equivalent [`BnodeId`] borrowing the underlying `str`.
    pub fn as_ref(&self) -> BnodeId<&str> {
        BnodeId(self.0.borrow())
    }

    /// Convert the inner value, keeping the wrapper.
    ///
    /// The caller is responsible for ensuring that `f` preserves the text.
    pub fn map_unchecked<U: Borrow<str>, F: FnOnce(T) -> U>(self, f: F) -> BnodeId<U> {
        BnodeId(f(self.0))
    }
}

impl<T: Borrow<str>, U: Borrow<str>> PartialEq<BnodeId<U>> for BnodeId<T> {
    fn eq(&self, other: &BnodeId<U>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: Borrow<str>> Eq for BnodeId<T> {}

impl<T: Borrow<str>, U: Borrow<str>> PartialOrd<BnodeId<U>> for BnodeId<T> {
    fn partial_cmp(&self, other: &BnodeId<U>) -> Option<std::cmp::Ordering> {
        Some(Ord::cmp(self.as_str(), other.as_str()))
    }
}

impl<T: Borrow<str>> Ord for BnodeId<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        Ord::cmp(self.as_str(), other.as_str())
    }
}

impl<T: Borrow<str>> std::hash::Hash for BnodeId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_str(), state)
    }
}

impl<T: Borrow<str>> fmt::Display for BnodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "_:{}", self.as_str())
    }
}

/// This error is raised when trying to parse an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' is invalid")]
pub struct InvalidBnodeId(pub String);

impl<T> Term for BnodeId<T>
where
    T: Borrow<str> + std::fmt::Debug,
{
    type BorrowTerm<'x>
        = &'x Self
    where
        T: 'x;

    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }
    fn bnode_id(&self) -> Option<BnodeId<MownStr>> {
        Some(self.as_ref().map_unchecked(MownStr::from_str))
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}
