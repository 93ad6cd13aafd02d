use super::*;
use crate::vocab::rdf;

/// A straightforward implementation of [`Term`] as an enum.
#[derive(Clone, Debug)]
pub enum SimpleTerm<'a> {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(IriRef<MownStr<'a>>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(BnodeId<MownStr<'a>>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    LiteralDatatype(MownStr<'a>, IriRef<MownStr<'a>>),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LiteralLanguage(MownStr<'a>, LanguageTag<MownStr<'a>>),
    /// A SPARQL or Notation3 variable
    Variable(VarName<MownStr<'a>>),
}

use SimpleTerm::*;

impl<'a> Term for SimpleTerm<'a> {
    type BorrowTerm<'x>
        = &'x Self
    where
        'a: 'x;

    fn kind(&self) -> TermKind {
        match self {
            Iri(_) => TermKind::Iri,
            BlankNode(_) => TermKind::BlankNode,
            LiteralDatatype(..) | LiteralLanguage(..) => TermKind::Literal,
            Variable(_) => TermKind::Variable,
        }
    }
    fn iri(&self) -> Option<IriRef<MownStr>> {
        if let Iri(iri) = self {
            Some(IriRef::new_unchecked(MownStr::from_str(iri.as_str())))
        } else {
            None
        }
    }
    fn bnode_id(&self) -> Option<BnodeId<MownStr>> {
        if let BlankNode(bnid) = self {
            Some(BnodeId::new_unchecked(MownStr::from_str(bnid.as_str())))
        } else {
            None
        }
    }
    fn lexical_form(&self) -> Option<MownStr> {
        match self {
            LiteralDatatype(val, _) | LiteralLanguage(val, _) => Some(MownStr::from_str(val)),
            _ => None,
        }
    }
    fn datatype(&self) -> Option<IriRef<MownStr>> {
        match self {
            LiteralDatatype(_, iri) => Some(IriRef::new_unchecked(MownStr::from_str(iri.as_str()))),
            LiteralLanguage(..) => Some(rdf::LANG_STRING.map_unchecked(MownStr::from_str)),
            _ => None,
        }
    }
    fn language_tag(&self) -> Option<LanguageTag<MownStr>> {
        if let LiteralLanguage(_, tag) = self {
            Some(LanguageTag::new_unchecked(MownStr::from_str(tag.as_str())))
        } else {
            None
        }
    }
    fn variable(&self) -> Option<VarName<MownStr>> {
        if let Variable(name) = self {
            Some(VarName::new_unchecked(MownStr::from_str(name.as_str())))
        } else {
            None
        }
    }
    fn borrow_term(&self) -> Self::BorrowTerm<'_> {
        self
    }
}

fn ensure_owned(m: MownStr) -> MownStr<'static> {
    MownStr::from(m[..].to_owned())
}

impl FromTerm for SimpleTerm<'static> {
    fn from_term<T: Term>(term: T) -> Self {
        match term.kind() {
            TermKind::Iri => SimpleTerm::Iri(term.iri().unwrap().map_unchecked(ensure_owned)),
            TermKind::BlankNode => {
                SimpleTerm::BlankNode(term.bnode_id().unwrap().map_unchecked(ensure_owned))
            }
            TermKind::Literal => {
                let lex = ensure_owned(term.lexical_form().unwrap());
                if let Some(tag) = term.language_tag() {
                    SimpleTerm::LiteralLanguage(lex, tag.map_unchecked(ensure_owned))
                } else {
                    let dt = term.datatype().unwrap().map_unchecked(ensure_owned);
                    SimpleTerm::LiteralDatatype(lex, dt)
                }
            }
            TermKind::Variable => {
                SimpleTerm::Variable(term.variable().unwrap().map_unchecked(ensure_owned))
            }
        }
    }
}

impl<'a> SimpleTerm<'a> {
    /// Build a [`SimpleTerm`] that borrows as much as possible from the original `term`.
    ///
    /// NB: depending on the implementation of `term`,
    /// some data might still be allocated.
    pub fn from_term_ref<T>(term: &'a T) -> Self
    where
        T: Term + ?Sized,
    {
        match term.kind() {
            TermKind::Iri => SimpleTerm::Iri(term.iri().unwrap()),
            TermKind::BlankNode => SimpleTerm::BlankNode(term.bnode_id().unwrap()),
            TermKind::Literal => {
                let lex = term.lexical_form().unwrap();
                if let Some(tag) = term.language_tag() {
                    SimpleTerm::LiteralLanguage(lex, tag)
                } else {
                    let dt = term.datatype().unwrap();
                    SimpleTerm::LiteralDatatype(lex, dt)
                }
            }
            TermKind::Variable => SimpleTerm::Variable(term.variable().unwrap()),
        }
    }
}

impl<T: Term> PartialEq<T> for SimpleTerm<'_> {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other.borrow_term())
    }
}

impl Eq for SimpleTerm<'_> {}

impl std::hash::Hash for SimpleTerm<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

impl<T: Term> PartialOrd<T> for SimpleTerm<'_> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(Term::cmp(self, other.borrow_term()))
    }
}

impl Ord for SimpleTerm<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        Term::cmp(self, other)
    }
}

impl<'a> From<IriRef<MownStr<'a>>> for SimpleTerm<'a> {
    fn from(other: IriRef<MownStr<'a>>) -> Self {
        SimpleTerm::Iri(other)
    }
}

impl<'a> From<BnodeId<MownStr<'a>>> for SimpleTerm<'a> {
    fn from(other: BnodeId<MownStr<'a>>) -> Self {
        SimpleTerm::BlankNode(other)
    }
}

impl<'a> From<VarName<MownStr<'a>>> for SimpleTerm<'a> {
    fn from(other: VarName<MownStr<'a>>) -> Self {
        SimpleTerm::Variable(other)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vocab::xsd;

    #[test]
    fn iri_from_scratch() {
        let value = IriRef::new_unchecked(MownStr::from_str("http://example.org/"));
        let t = SimpleTerm::Iri(value.clone());
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Iri);
        assert_eq!(t.iri(), Some(value));
    }

    #[test]
    fn bnode_from_scratch() {
        let value = BnodeId::new_unchecked(MownStr::from_str("b1"));
        let t = SimpleTerm::BlankNode(value.clone());
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::BlankNode);
        assert_eq!(t.bnode_id(), Some(value));
    }

    #[test]
    fn literal_dt_from_scratch() {
        let value = MownStr::from_str("hello world");
        let datatype = IriRef::new_unchecked(MownStr::from_str("http://example.org/dt"));
        let t = SimpleTerm::LiteralDatatype(value.clone(), datatype.clone());
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(t.lexical_form(), Some(value));
        assert_eq!(t.datatype(), Some(datatype));
    }

    #[test]
    fn literal_lang_from_scratch() {
        let value = MownStr::from_str("hello world");
        let tag = LanguageTag::new_unchecked(MownStr::from_str("en-US"));
        let t = SimpleTerm::LiteralLanguage(value.clone(), tag.clone());
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(t.lexical_form(), Some(value));
        assert_eq!(t.language_tag(), Some(tag));
        assert_eq!(t.datatype(), rdf::LANG_STRING.iri());
    }

    #[test]
    fn variable_from_scratch() {
        let value = VarName::new_unchecked(MownStr::from_str("x"));
        let t = SimpleTerm::Variable(value.clone());
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Variable);
        assert_eq!(t.variable(), Some(value));
    }

    #[test]
    fn iri_from_term() {
        let i = IriRef::new("http://example.org/").unwrap();
        let t: SimpleTerm = i.into_term();
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Iri);
        assert_eq!(t.iri(), i.iri());
    }

    #[test]
    fn literal_from_term() {
        let t: SimpleTerm = "hello world".into_term();
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(&t.lexical_form().unwrap()[..], "hello world");
        assert_eq!(t.datatype(), xsd::STRING.iri());

        let t: SimpleTerm = 42.into_term();
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(&t.lexical_form().unwrap()[..], "42");
        assert_eq!(t.datatype(), xsd::INTEGER.iri());
    }

    #[test]
    fn bnode_from_term() {
        let b1 = BnodeId::new("b1").unwrap();
        let t: SimpleTerm = b1.into_term();
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::BlankNode);
        assert_eq!(t.bnode_id().unwrap(), b1);
    }

    #[test]
    fn literal_from_term_ref() {
        let l = "hello world";
        let t = SimpleTerm::from_term_ref(&l);
        assert_consistent_term_impl(&t);
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(&t.lexical_form().unwrap()[..], l);
    }

    #[test]
    fn eq_across_implementations() {
        let i = IriRef::new("http://example.org/").unwrap();
        let t: SimpleTerm = i.into_term();
        assert_eq!(t, i);
        assert!(Term::eq(&t, &i));
    }
}
