//! I define the [`IriRef`] wrapper type,
//! which guarantees that the underlying `str`
//! is a valid [IRI reference](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
//! (either an absolute IRI or a relative reference).
//!
//! Validation is delegated to [`oxiri`].
use super::*;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// This wrapper guarantees that the underlying `str` is a valid IRI reference.
#[derive(Clone, Copy, Debug)]
pub struct IriRef<T: Borrow<str>>(T);

impl<T: Borrow<str>> IriRef<T> {
    /// Build a new [`IriRef`], checking that `iri` is valid.
    pub fn new(iri: T) -> Result<Self, InvalidIri> {
        match oxiri::IriRef::parse(iri.borrow()) {
            Ok(_) => Ok(IriRef(iri)),
            Err(err) => Err(InvalidIri(iri.borrow().to_string(), err)),
        }
    }

    /// Build a new [`IriRef`] without checking that `iri` is valid.
    pub fn new_unchecked(iri: T) -> Self {
        IriRef(iri)
    }

    /// Get a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Unwrap the inner value.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Get an equivalent [`IriRef`] borrowing the underlying `str`.
    pub fn as_ref(&self) -> IriRef<&str> {
        IriRef(self.0.borrow())
    }

    /// Convert the inner value, keeping the wrapper.
    ///
    /// The caller is responsible for ensuring that `f` preserves the text.
    pub fn map_unchecked<U: Borrow<str>, F: FnOnce(T) -> U>(self, f: F) -> IriRef<U> {
        IriRef(f(self.0))
    }
}

impl IriRef<&'static str> {
    /// `const` constructor for static IRIs.
    ///
    /// As [`IriRef::new_unchecked`], this does not check that the text is valid.
    pub const fn new_unchecked_const(iri: &'static str) -> Self {
        IriRef(iri)
    }
}

impl<T: Borrow<str>, U: Borrow<str>> PartialEq<IriRef<U>> for IriRef<T> {
    fn eq(&self, other: &IriRef<U>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: Borrow<str>> Eq for IriRef<T> {}

impl<T: Borrow<str>, U: Borrow<str>> PartialOrd<IriRef<U>> for IriRef<T> {
    fn partial_cmp(&self, other: &IriRef<U>) -> Option<std::cmp::Ordering> {
        Some(Ord::cmp(self.as_str(), other.as_str()))
    }
}

impl<T: Borrow<str>> Ord for IriRef<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        Ord::cmp(self.as_str(), other.as_str())
    }
}

impl<T: Borrow<str>> std::hash::Hash for IriRef<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_str(), state)
    }
}

impl<T: Borrow<str>> fmt::Display for IriRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

/// This error is raised when trying to parse an invalid IRI reference.
#[derive(Debug, Error)]
#[error("The given IRI reference '{0}' is invalid: {1}")]
pub struct InvalidIri(pub String, #[source] pub oxiri::IriParseError);

impl<T> Term for IriRef<T>
where
    T: Borrow<str> + std::fmt::Debug,
{
    type BorrowTerm<'x>
        = &'x Self
    where
        T: 'x;

    fn kind(&self) -> TermKind {
        TermKind::Iri
    }
    fn iri(&self) -> Option<IriRef<MownStr>> {
        Some(self.as_ref().map_unchecked(MownStr::from_str))
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}
