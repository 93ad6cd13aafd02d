//! I define the [`VarName`] wrapper type,
//! which guarantees that the underlying `str`
//! is usable as a [SPARQL](https://www.w3.org/TR/sparql11-query/#rVARNAME)
//! or Notation3 variable name (without the leading `?`).
use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// A simplified production of SPARQL's `VARNAME`: one or more word characters.
    ///
    /// This regular expression matches the whole input (`^...$`),
    /// therefore it can not be used to capture variable names in an arbitrary string.
    static ref VARNAME: Regex = Regex::new(r"^\w+$").unwrap();
}

/// This wrapper guarantees that the underlying `str`
/// is usable as a variable name.
#[derive(Clone, Copy, Debug)]
pub struct VarName<T: Borrow<str>>(T);

impl<T: Borrow<str>> VarName<T> {
    /// Build a new [`VarName`], checking that `name` is valid.
    pub fn new(name: T) -> Result<Self, InvalidVarName> {
        if VARNAME.is_match(name.borrow()) {
            Ok(VarName(name))
        } else {
            Err(InvalidVarName(name.borrow().to_string()))
        }
    }

    /// Build a new [`VarName`] without checking that `name` is valid.
    pub fn new_unchecked(name: T) -> Self {
        VarName(name)
    }

    /// Get a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Unwrap the inner value.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Get an equivalent [`VarName`] borrowing the underlying `str`.
    pub fn as_ref(&self) -> VarName<&str> {
        VarName(self.0.borrow())
    }

    /// Convert the inner value, keeping the wrapper.
    ///
    /// The caller is responsible for ensuring that `f` preserves the text.
    pub fn map_unchecked<U: Borrow<str>, F: FnOnce(T) -> U>(self, f: F) -> VarName<U> {
        VarName(f(self.0))
    }
}

impl<T: Borrow<str>, U: Borrow<str>> PartialEq<VarName<U>> for VarName<T> {
    fn eq(&self, other: &VarName<U>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<T: Borrow<str>> Eq for VarName<T> {}

impl<T: Borrow<str>, U: Borrow<str>> PartialOrd<VarName<U>> for VarName<T> {
    fn partial_cmp(&self, other: &VarName<U>) -> Option<std::cmp::Ordering> {
        Some(Ord::cmp(self.as_str(), other.as_str()))
    }
}

impl<T: Borrow<str>> Ord for VarName<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        Ord::cmp(self.as_str(), other.as_str())
    }
}

impl<T: Borrow<str>> std::hash::Hash for VarName<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_str(), state)
    }
}

impl<T: Borrow<str>> fmt::Display for VarName<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "?{}", self.as_str())
    }
}

/// This error is raised when trying to parse an invalid variable name.
#[derive(Debug, Error)]
#[error("The given variable name '{0}' is invalid")]
pub struct InvalidVarName(pub String);

impl<T> Term for VarName<T>
where
    T: Borrow<str> + std::fmt::Debug,
{
    type BorrowTerm<'x>
        = &'x Self
    where
        T: 'x;

    fn kind(&self) -> TermKind {
        TermKind::Variable
    }
    fn variable(&self) -> Option<VarName<MownStr>> {
        Some(self.as_ref().map_unchecked(MownStr::from_str))
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("x")]
    #[test_case("foo_bar_baz")]
    #[test_case("hé_hé")]
    #[test_case("1")]
    #[test_case("abc42")]
    fn valid(name: &str) {
        assert!(VarName::new(name).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("."; "dot")]
    #[test_case("a.b"; "with dot")]
    #[test_case("a,b"; "with comma")]
    #[test_case("a b"; "with space")]
    fn invalid(name: &str) {
        assert!(VarName::new(name).is_err());
    }

    #[test]
    fn var_name_as_term() {
        let v = VarName::new("v1").unwrap();
        assert_eq!(v.kind(), TermKind::Variable);
        assert_eq!(v.variable().unwrap().as_str(), "v1");
        assert_consistent_term_impl(&v);
    }
}
