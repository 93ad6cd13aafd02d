//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in QuadSet.
//!
//! I provide the main trait [`Term`],
//! and a number of auxiliary types and traits, such as [`TermKind`], [`FromTerm`]...
use std::cmp::{Ord, Ordering};
use std::hash::Hash;

/// This type is re-exported from [`mownstr`] for convenience,
/// as it appears in most accessors of the [`Term`] API.
pub use mownstr::MownStr;

mod _graph_name;
pub use _graph_name::*;
mod _native_literal;
mod _simple;
pub use _simple::*;

pub mod bnode_id;
pub mod iri;
pub mod language_tag;
pub mod matcher;
pub mod var_name;

pub use bnode_id::BnodeId;
pub use iri::IriRef;
pub use language_tag::LanguageTag;
pub use var_name::VarName;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// A SPARQL or Notation3 variable
    Variable,
}

/// An RDF term, as used in the four positions of a [`Quad`](crate::quad::Quad).
///
/// # Implementation
///
/// The only methods without a default implementation are
/// [`kind`](Term::kind) and [`borrow_term`](Term::borrow_term).
///
/// However, while all other methods have a default implementation
/// (returning `None`),
/// those corresponding to the supported kinds MUST be overridden accordingly,
/// otherwise they will panic.
///
/// # Design rationale
///
/// The methods defined by this trait are not independent:
/// depending on the value returned by [`kind`](Term::kind),
/// other methods are expected to return `Some(...)` or `None` accordingly.
///
/// An alternative solution would have been for the variants of [`TermKind`]
/// to *contain* the corresponding values,
/// but that would prevent implementations from producing the underlying text
/// *on demand*, as the [`MownStr`]s returned by, e.g.,
/// [`iri`](Term::iri) or [`lexical_form`](Term::lexical_form) allow.
pub trait Term: std::fmt::Debug {
    /// A type of [`Term`] that can be borrowed from this type
    /// (i.e. that can be obtained from a simple reference to this type).
    /// It is used for sharing this term with a function that expects
    /// `T: Term` (rather than `&T`).
    ///
    /// In "standard" cases, this type is `&Self`.
    /// Exceptions, where this type is `Self` instead,
    /// are [`Term`] implementations that implement [`Copy`].
    ///
    /// # Note to implementors
    /// When in doubt, set this to `&Self`.
    type BorrowTerm<'x>: Term + Copy
    where
        Self: 'x;

    /// Return the kind of RDF term that this [`Term`] represents.
    fn kind(&self) -> TermKind;

    /// Return true if this [`Term`] is an IRI,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::Iri`].
    #[inline]
    fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Return true if this [`Term`] is a blank node,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::BlankNode`].
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::Literal`].
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Return true if this [`Term`] is a variable,
    /// i.e. if [`kind`](Term::kind) returns [`TermKind::Variable`].
    #[inline]
    fn is_variable(&self) -> bool {
        self.kind() == TermKind::Variable
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Iri`],
    /// return this IRI.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_iri`] always returns false.
    /// If that is not the case, this method must be explicitly implemented.
    #[inline]
    fn iri(&self) -> Option<IriRef<MownStr>> {
        self.is_iri()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::BlankNode`],
    /// return the locally unique label of this blank node.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_blank_node`] always returns false.
    /// If that is not the case, this method must be explicitly implemented.
    #[inline]
    fn bnode_id(&self) -> Option<BnodeId<MownStr>> {
        self.is_blank_node()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the lexical form of this literal.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always returns false.
    /// If that is not the case, this method must be explicitly implemented.
    #[inline]
    fn lexical_form(&self) -> Option<MownStr> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the datatype IRI of this literal.
    /// Otherwise return `None`.
    ///
    /// NB: if this literal is a language-tagged string,
    /// then this method MUST return
    /// `http://www.w3.org/1999/02/22-rdf-syntax-ns#langString`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always returns false.
    /// If that is not the case, this method must be explicitly implemented.
    #[inline]
    fn datatype(&self) -> Option<IriRef<MownStr>> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// and if this literal is a language-tagged string,
    /// return its language tag.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always returns false.
    /// If that is not the case, this method must be explicitly implemented.
    #[inline]
    fn language_tag(&self) -> Option<LanguageTag<MownStr>> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Variable`],
    /// return the name of this variable.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_variable`] always returns false.
    /// If that is not the case, this method must be explicitly implemented.
    #[inline]
    fn variable(&self) -> Option<VarName<MownStr>> {
        self.is_variable()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// Get something implementing [`Term`] from a simple reference to `self`.
    ///
    /// See [`Term::BorrowTerm`] for more detail.
    fn borrow_term(&self) -> Self::BorrowTerm<'_>;

    /// Check whether `self` and `other` represent the same RDF term.
    fn eq<T: Term>(&self, other: T) -> bool {
        let k1 = self.kind();
        let k2 = other.kind();
        if k1 != k2 {
            return false;
        }
        match k1 {
            TermKind::Iri => self.iri() == other.iri(),
            TermKind::BlankNode => self.bnode_id() == other.bnode_id(),
            TermKind::Literal => {
                self.lexical_form() == other.lexical_form()
                    && match (self.language_tag(), other.language_tag()) {
                        (None, None) => self.datatype() == other.datatype(),
                        (Some(tag1), Some(tag2)) if tag1 == tag2 => true,
                        _ => false,
                    }
            }
            TermKind::Variable => self.variable() == other.variable(),
        }
    }

    /// Compare two terms:
    /// * IRIs < literals < blank nodes < variables
    /// * IRIs, blank nodes and variables are ordered by their value
    /// * Literals are ordered by their datatype, then their language (if any),
    ///   then their lexical form
    ///
    /// NB: literals are ordered by their *lexical* form,
    /// so for example, `"10"^^xsd:integer` comes *before* `"2"^^xsd:integer`.
    fn cmp<T>(&self, other: T) -> Ordering
    where
        T: Term,
    {
        let k1 = self.kind();
        let k2 = other.kind();
        k1.cmp(&k2).then_with(|| match k1 {
            TermKind::Iri => Ord::cmp(&self.iri().unwrap(), &other.iri().unwrap()),
            TermKind::BlankNode => Ord::cmp(&self.bnode_id().unwrap(), &other.bnode_id().unwrap()),
            TermKind::Variable => Ord::cmp(&self.variable().unwrap(), &other.variable().unwrap()),
            TermKind::Literal => {
                let tag1 = self.language_tag();
                let tag2 = other.language_tag();
                if let (Some(tag1), Some(tag2)) = (tag1, tag2) {
                    tag1.cmp(&tag2).then_with(|| {
                        self.lexical_form()
                            .unwrap()
                            .cmp(&other.lexical_form().unwrap())
                    })
                } else {
                    let dt1 = self.datatype().unwrap();
                    let dt2 = other.datatype().unwrap();
                    Ord::cmp(&dt1, &dt2).then_with(|| {
                        self.lexical_form()
                            .unwrap()
                            .cmp(&other.lexical_form().unwrap())
                    })
                }
            }
        })
    }

    /// Compute an implementation-independent hash of this RDF term.
    ///
    /// Two terms that are [equal](Term::eq) hash identically,
    /// whatever their implementations.
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let k = self.kind();
        k.hash(state);
        match k {
            TermKind::Iri => Hash::hash(self.iri().unwrap().as_str(), state),
            TermKind::BlankNode => Hash::hash(self.bnode_id().unwrap().as_str(), state),
            TermKind::Literal => {
                Hash::hash(&self.lexical_form().unwrap()[..], state);
                match self.language_tag() {
                    None => {
                        Hash::hash(self.datatype().unwrap().as_str(), state);
                    }
                    Some(tag) => {
                        '@'.hash(state);
                        tag.hash(state);
                    }
                }
            }
            TermKind::Variable => Hash::hash(self.variable().unwrap().as_str(), state),
        }
    }

    /// Convert this term into another type.
    ///
    /// This method is to [`FromTerm`] what [`Into::into`] is to [`From`].
    ///
    /// NB: if you want to make a *copy* of this term without consuming it,
    /// you can use `this_term.`[`borrow_term`](Term::borrow_term)`().into_term::<T>()`.
    #[inline]
    fn into_term<T: FromTerm>(self) -> T
    where
        Self: Sized,
    {
        T::from_term(self)
    }

    /// Copy this term into a [`SimpleTerm`], calling [`SimpleTerm::from_term_ref`].
    #[inline]
    fn as_simple(&self) -> SimpleTerm<'_> {
        SimpleTerm::from_term_ref(self)
    }
}

impl<'a, T> Term for &'a T
where
    T: Term<BorrowTerm<'a> = &'a T> + ?Sized,
{
    type BorrowTerm<'x>
        = Self
    where
        'a: 'x;

    fn kind(&self) -> TermKind {
        (*self).kind()
    }
    fn is_iri(&self) -> bool {
        (*self).is_iri()
    }
    fn is_blank_node(&self) -> bool {
        (*self).is_blank_node()
    }
    fn is_literal(&self) -> bool {
        (*self).is_literal()
    }
    fn is_variable(&self) -> bool {
        (*self).is_variable()
    }
    fn iri(&self) -> Option<IriRef<MownStr>> {
        (*self).iri()
    }
    fn bnode_id(&self) -> Option<BnodeId<MownStr>> {
        (*self).bnode_id()
    }
    fn lexical_form(&self) -> Option<MownStr> {
        (*self).lexical_form()
    }
    fn datatype(&self) -> Option<IriRef<MownStr>> {
        (*self).datatype()
    }
    fn language_tag(&self) -> Option<LanguageTag<MownStr>> {
        (*self).language_tag()
    }
    fn variable(&self) -> Option<VarName<MownStr>> {
        (*self).variable()
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        *self
    }
    fn eq<U: Term>(&self, other: U) -> bool {
        (*self).eq(other)
    }
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self).hash(state)
    }
}

//

/// A type that can be built from any term.
pub trait FromTerm: Sized {
    /// Copy `term` into an instance of this type.
    fn from_term<T: Term>(term: T) -> Self;
}

/// Test that the given term is consistent in its implementation of the
/// [`Term`] trait.
///
/// NB: it may be necessary to explicitly specify the parameter `T`,
/// even when the type of `t` is known. E.g.: ``assert_consistent_term_impl::<MyTerm>(&t)``.
pub fn assert_consistent_term_impl<T>(t: &T)
where
    T: Term,
{
    let k = t.kind();
    if k == TermKind::Iri {
        assert!(t.is_iri());
        assert!(t.iri().is_some());
    } else {
        assert!(!t.is_iri());
        assert!(t.iri().is_none());
    }
    if k == TermKind::BlankNode {
        assert!(t.is_blank_node());
        assert!(t.bnode_id().is_some());
    } else {
        assert!(!t.is_blank_node());
        assert!(t.bnode_id().is_none());
    }
    if k == TermKind::Literal {
        assert!(t.is_literal());
        assert!(t.lexical_form().is_some());
        assert!(t.datatype().is_some());
        if t.datatype() == crate::vocab::rdf::LANG_STRING.iri() {
            assert!(t.language_tag().is_some());
        } else {
            assert!(t.language_tag().is_none());
        }
    } else {
        assert!(!t.is_literal());
        assert!(t.lexical_form().is_none());
        assert!(t.datatype().is_none());
        assert!(t.language_tag().is_none());
    }
    if k == TermKind::Variable {
        assert!(t.is_variable());
        assert!(t.variable().is_some());
    } else {
        assert!(!t.is_variable());
        assert!(t.variable().is_none());
    }
    assert!(t.eq(t.borrow_term()));
    assert!(Term::cmp(t, t.borrow_term()).is_eq());
}

#[cfg(test)]
/// Simplistic Term parser, useful for writing test cases.
/// The syntax is a subset of Turtle.
pub(crate) fn ez_term(txt: &str) -> SimpleTerm<'static> {
    match txt.as_bytes() {
        [b'<', .., b'>'] => {
            SimpleTerm::Iri(IriRef::new_unchecked(txt[1..txt.len() - 1].to_string().into()))
        }
        [b':', ..] => {
            let iri = format!("tag:{}", &txt[1..]);
            SimpleTerm::Iri(IriRef::new_unchecked(iri.into()))
        }
        [b'_', b':', ..] => {
            SimpleTerm::BlankNode(BnodeId::new_unchecked(txt[2..].to_string().into()))
        }
        [b'\'', .., b'\'', b'@', _, _] => SimpleTerm::LiteralLanguage(
            txt[1..txt.len() - 4].to_string().into(),
            LanguageTag::new_unchecked(txt[txt.len() - 2..].to_string().into()),
        ),
        [b'\'', .., b'\''] => SimpleTerm::LiteralDatatype(
            txt[1..txt.len() - 1].to_string().into(),
            crate::vocab::xsd::STRING.map_unchecked(|s| MownStr::from(s.to_string())),
        ),
        [c, ..] if c.is_ascii_digit() => SimpleTerm::LiteralDatatype(
            txt.to_string().into(),
            crate::vocab::xsd::INTEGER.map_unchecked(|s| MownStr::from(s.to_string())),
        ),
        [b'?', ..] => SimpleTerm::Variable(VarName::new_unchecked(txt[1..].to_string().into())),
        _ => panic!("Unable to parse term"),
    }
}
