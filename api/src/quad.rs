//! A quad expresses a single statement within a named or default graph.
//! Quads are RDF triples augmented with an optional graph name,
//! and are the elements of an
//! [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#section-dataset).
use crate::term::matcher::{GraphNameMatcher, TermMatcher};
use crate::term::{graph_name_eq, GraphName, Term};

/// This trait represents an abstract RDF quad,
/// and provides convenient methods for working with quads.
///
/// A quad type may carry more data than its four terms
/// (identifiers, provenance, annotations...);
/// stores are expected to keep such values as given,
/// while identity is defined by [`Quad::eq`] alone.
pub trait Quad: std::fmt::Debug {
    /// The type of [`Term`] contained by this quad.
    type Term: Term;

    /// The subject of this quad.
    fn s(&self) -> &Self::Term;
    /// The predicate of this quad.
    fn p(&self) -> &Self::Term;
    /// The object of this quad.
    fn o(&self) -> &Self::Term;
    /// The graph name of this quad.
    ///
    /// `None` means that the quad belongs to the default graph.
    fn g(&self) -> GraphName<&Self::Term>;

    /// The four components of this quad, as a quadruple.
    #[inline]
    fn spog(&self) -> ([&Self::Term; 3], GraphName<&Self::Term>) {
        ([self.s(), self.p(), self.o()], self.g())
    }

    /// Copy the components of this quad into the canonical owned form
    /// [`Spog`].
    ///
    /// Any extra data carried by `self` is *not* copied.
    #[inline]
    fn to_spog(&self) -> Spog<Self::Term>
    where
        Self::Term: Clone,
    {
        (
            [self.s().clone(), self.p().clone(), self.o().clone()],
            self.g().cloned(),
        )
    }

    /// Check whether `self` and `other` express the same statement,
    /// i.e. whether all four components are pairwise
    /// [equal terms](Term::eq).
    fn eq<Q2: Quad>(&self, other: &Q2) -> bool {
        self.s().eq(other.s().borrow_term())
            && self.p().eq(other.p().borrow_term())
            && self.o().eq(other.o().borrow_term())
            && graph_name_eq(
                self.g().map(Term::borrow_term),
                other.g().map(Term::borrow_term),
            )
    }

    /// Check whether this quad is matched by the given matchers.
    fn matched_by<S, P, O, G>(&self, sm: S, pm: P, om: O, gm: G) -> bool
    where
        S: TermMatcher,
        P: TermMatcher,
        O: TermMatcher,
        G: GraphNameMatcher,
    {
        sm.matches(self.s()) && pm.matches(self.p()) && om.matches(self.o()) && gm.matches(self.g())
    }
}

/// The canonical owned form of a quad: a triple and a graph name.
pub type Spog<T> = ([T; 3], GraphName<T>);

impl<T: Term> Quad for Spog<T> {
    type Term = T;

    #[inline]
    fn s(&self) -> &Self::Term {
        &self.0[0]
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        &self.0[1]
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        &self.0[2]
    }
    #[inline]
    fn g(&self) -> GraphName<&Self::Term> {
        self.1.as_ref()
    }
}

/// Quads with this shape always belong to a named graph.
impl<T: Term> Quad for [T; 4] {
    type Term = T;

    #[inline]
    fn s(&self) -> &Self::Term {
        &self[0]
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        &self[1]
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        &self[2]
    }
    #[inline]
    fn g(&self) -> GraphName<&Self::Term> {
        Some(&self[3])
    }
}

impl<'a, Q: Quad> Quad for &'a Q {
    type Term = Q::Term;

    #[inline]
    fn s(&self) -> &Self::Term {
        (*self).s()
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        (*self).p()
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        (*self).o()
    }
    #[inline]
    fn g(&self) -> GraphName<&Self::Term> {
        (*self).g()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::matcher::Any;
    use crate::term::{ez_term, SimpleTerm};

    fn spog(s: &str, p: &str, o: &str, g: Option<&str>) -> Spog<SimpleTerm<'static>> {
        (
            [ez_term(s), ez_term(p), ez_term(o)],
            g.map(ez_term),
        )
    }

    #[test]
    fn spog_accessors() {
        let q = spog(":s", ":p", ":o", Some(":g"));
        assert!(Term::eq(&q.s(), &ez_term(":s")));
        assert!(Term::eq(&q.p(), &ez_term(":p")));
        assert!(Term::eq(&q.o(), &ez_term(":o")));
        assert!(graph_name_eq(q.g(), Some(&ez_term(":g"))));

        let q = spog(":s", ":p", ":o", None);
        assert!(q.g().is_none());
    }

    #[test]
    fn array_accessors() {
        let q = [ez_term(":s"), ez_term(":p"), ez_term(":o"), ez_term(":g")];
        assert!(Term::eq(&q.s(), &ez_term(":s")));
        assert!(graph_name_eq(q.g(), Some(&ez_term(":g"))));
    }

    #[test]
    fn quad_eq() {
        let q1 = spog(":s", ":p", ":o", None);
        let q2 = spog(":s", ":p", ":o", None);
        let q3 = spog(":s", ":p", ":o", Some(":g"));
        let q4 = [ez_term(":s"), ez_term(":p"), ez_term(":o"), ez_term(":g")];
        assert!(Quad::eq(&q1, &q2));
        assert!(!Quad::eq(&q1, &q3));
        assert!(Quad::eq(&q3, &q4));
        assert!(Quad::eq(&q1, &&q1)); // also via the reference impl
    }

    #[test]
    fn quad_matched_by() {
        let q = spog(":s", ":p", ":o", Some(":g"));
        assert!(q.matched_by(Any, Any, Any, Any));
        assert!(q.matched_by(Some(ez_term(":s")), Any, Any, Any));
        assert!(!q.matched_by(Some(ez_term(":x")), Any, Any, Any));
        assert!(q.matched_by(Any, Any, Any, Some(Some(ez_term(":g")))));
        assert!(!q.matched_by(Any, Any, Any, Some(None::<SimpleTerm>)));

        let q = spog(":s", ":p", ":o", None);
        assert!(q.matched_by(Any, Any, Any, Some(None::<SimpleTerm>)));
    }

    #[test]
    fn to_spog_drops_nothing_but_extras() {
        let q = spog(":s", ":p", ":o", Some(":g"));
        let q2 = q.to_spog();
        assert!(Quad::eq(&q, &q2));
    }
}
