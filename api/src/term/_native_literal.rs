use super::*;
use crate::vocab::xsd;

/// [`str`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
///
/// E.g.:
/// ```
/// # use quadset_api::term::{SimpleTerm, Term};
/// let lit: SimpleTerm = "hello world".into_term();
/// ```
impl Term for str {
    type BorrowTerm<'x>
        = &'x Self
    where
        Self: 'x;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from_str(self))
    }
    fn datatype(&self) -> Option<IriRef<MownStr>> {
        Some(xsd::STRING.map_unchecked(MownStr::from_str))
    }
    fn language_tag(&self) -> Option<LanguageTag<MownStr>> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}

/// [`i32`] implements [`Term`]
/// so that Rust literals can be used as RDF literals in code.
///
/// E.g.:
/// ```
/// # use quadset_api::term::{SimpleTerm, Term};
/// let lit: SimpleTerm = 42.into_term();
/// ```
impl Term for i32 {
    type BorrowTerm<'x> = Self;

    fn kind(&self) -> TermKind {
        TermKind::Literal
    }
    fn lexical_form(&self) -> Option<MownStr> {
        Some(MownStr::from(format!("{}", self)))
    }
    fn datatype(&self) -> Option<IriRef<MownStr>> {
        Some(xsd::INTEGER.map_unchecked(MownStr::from_str))
    }
    fn language_tag(&self) -> Option<LanguageTag<MownStr>> {
        None
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
}
