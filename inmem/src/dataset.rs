//! I provide the in-memory indexed implementation of RDF datasets:
//! a deduplicated, mutable set of quads answering any partial-pattern
//! query without a full scan.
//!
//! The main type is [`GenericIndexedDataset`];
//! most users will want one of the [`IndexedDataset`](self::IndexedDataset)
//! or [`small::IndexedDataset`] aliases.
use std::collections::hash_map::Entry;
use std::collections::{btree_set, BTreeSet, HashMap};
use std::iter::empty;

use quadset_api::quad::Quad;
use quadset_api::term::matcher::{GraphNameMatcher, TermMatcher};
use quadset_api::term::Term;

use crate::index::{Index, TermInterner};

/// An in-memory indexed dataset of quads.
///
/// Quads are deduplicated by the structural equality of their four
/// components ([`Quad::eq`]); the quad *value* `Q` is stored as given,
/// so any extra data it carries survives a round trip through the store.
///
/// The dataset maintains, next to its primary table,
/// six orderings of the (subject, predicate, object, graph name) key —
/// `spog`, `posg`, `ospg`, `gspo`, `pgos` and `ogsp` —
/// so that every combination of bound positions in
/// [`quads_matching`](Self::quads_matching) is answered by a prefix range
/// of one of them, in time proportional to the size of the result.
///
/// `I` is the numeric index type used for canonical term keys,
/// typically [`u32`] or [`u16`] (see [`IndexedDataset`] and
/// [`small::IndexedDataset`]).
///
/// Mutating the dataset requires `&mut self`, and its iterators borrow
/// `&self`: sharing a dataset across threads of control must be
/// serialized externally.
#[derive(Clone, Debug)]
pub struct GenericIndexedDataset<I: Index, Q: Quad> {
    terms: TermInterner<I>,
    quads: HashMap<[I; 4], Q>,
    spog: BTreeSet<[I; 4]>,
    posg: BTreeSet<[I; 4]>,
    ospg: BTreeSet<[I; 4]>,
    gspo: BTreeSet<[I; 4]>,
    pgos: BTreeSet<[I; 4]>,
    ogsp: BTreeSet<[I; 4]>,
}

/// The default flavour of [`GenericIndexedDataset`]:
/// `u32` indices support ~4 billion distinct terms.
pub type IndexedDataset<Q> = GenericIndexedDataset<u32, Q>;

impl<I: Index, Q: Quad> GenericIndexedDataset<I, Q> {
    /// Build an empty dataset.
    pub fn new() -> Self {
        GenericIndexedDataset {
            terms: TermInterner::new(),
            quads: HashMap::new(),
            spog: BTreeSet::new(),
            posg: BTreeSet::new(),
            ospg: BTreeSet::new(),
            gspo: BTreeSet::new(),
            pgos: BTreeSet::new(),
            ogsp: BTreeSet::new(),
        }
    }

    /// The number of quads in this dataset.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether this dataset contains no quad.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// The canonical key of `quad`, if all its terms are interned.
    ///
    /// A `None` here proves the quad absent: a quad can not be stored
    /// without all four of its components being interned.
    fn key_of<Q2: Quad>(&self, quad: &Q2) -> Option<[I; 4]> {
        let si = self.terms.get_index(quad.s().borrow_term())?;
        let pi = self.terms.get_index(quad.p().borrow_term())?;
        let oi = self.terms.get_index(quad.o().borrow_term())?;
        let gi = self
            .terms
            .get_graph_index(quad.g().map(Term::borrow_term))?;
        Some([si, pi, oi, gi])
    }

    /// Check whether this dataset contains a quad
    /// [structurally equal](Quad::eq) to `quad`.
    ///
    /// This only consults the primary table, not the orderings.
    pub fn contains<Q2: Quad>(&self, quad: &Q2) -> bool {
        match self.key_of(quad) {
            Some(key) => self.quads.contains_key(&key),
            None => false,
        }
    }

    /// Insert `quad` in this dataset.
    ///
    /// Return `true` iff the quad was not already present.
    /// When a structurally equal quad is already stored,
    /// the stored value is kept and `quad` is dropped.
    pub fn insert(&mut self, quad: Q) -> bool {
        let si = self.terms.ensure_index(quad.s().borrow_term());
        let pi = self.terms.ensure_index(quad.p().borrow_term());
        let oi = self.terms.ensure_index(quad.o().borrow_term());
        let gi = self
            .terms
            .ensure_graph_index(quad.g().map(Term::borrow_term));
        let key = [si, pi, oi, gi];
        match self.quads.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(quad);
                let i = self.spog.insert(key);
                debug_assert!(i);
                let i = self.posg.insert(spog_to_posg(key));
                debug_assert!(i);
                let i = self.ospg.insert(spog_to_ospg(key));
                debug_assert!(i);
                let i = self.gspo.insert(spog_to_gspo(key));
                debug_assert!(i);
                let i = self.pgos.insert(spog_to_pgos(key));
                debug_assert!(i);
                let i = self.ogsp.insert(spog_to_ogsp(key));
                debug_assert!(i);
                true
            }
        }
    }

    /// Remove the quad [structurally equal](Quad::eq) to `quad`, if any.
    ///
    /// Return `true` iff such a quad was present.
    pub fn remove<Q2: Quad>(&mut self, quad: &Q2) -> bool {
        match self.key_of(quad) {
            Some(key) => self.remove_key(key).is_some(),
            None => false,
        }
    }

    /// Remove the quad stored under `key` from the primary table
    /// and from every ordering.
    ///
    /// This is the single mutation routine underlying [`remove`](Self::remove)
    /// and [`remove_matching`](Self::remove_matching).
    fn remove_key(&mut self, key: [I; 4]) -> Option<Q> {
        let removed = self.quads.remove(&key)?;
        let i = self.spog.remove(&key);
        debug_assert!(i);
        let i = self.posg.remove(&spog_to_posg(key));
        debug_assert!(i);
        let i = self.ospg.remove(&spog_to_ospg(key));
        debug_assert!(i);
        let i = self.gspo.remove(&spog_to_gspo(key));
        debug_assert!(i);
        let i = self.pgos.remove(&spog_to_pgos(key));
        debug_assert!(i);
        let i = self.ogsp.remove(&spog_to_ogsp(key));
        debug_assert!(i);
        Some(removed)
    }

    /// Iterate over the quads of this dataset.
    ///
    /// Each stored quad is yielded exactly once,
    /// in canonical key order (stable as long as the dataset is not mutated);
    /// every call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, I, Q> {
        Iter {
            keys: self.spog.iter(),
            quads: &self.quads,
        }
    }

    /// The canonical keys of the quads matched by the given matchers,
    /// in SPOG order of their components.
    ///
    /// This is the query planner:
    /// each combination of bound positions
    /// (positions whose matcher returns a [`constant`](TermMatcher::constant))
    /// is dispatched to the ordering having those positions as a prefix.
    /// When several orderings would do, the dispatch below is the
    /// documented, stable choice (the first of
    /// `spog`, `posg`, `ospg`, `gspo`, `pgos`, `ogsp` that fits).
    ///
    /// A bound term that was never interned proves the result empty
    /// without touching any ordering.
    /// Matchers are re-checked against the surviving quads,
    /// which implements non-constant matchers (arrays, closures, kinds).
    fn match_keys<'s, S, P, O, G>(
        &'s self,
        sm: S,
        pm: P,
        om: O,
        gm: G,
    ) -> Box<dyn Iterator<Item = [I; 4]> + 's>
    where
        S: TermMatcher + 's,
        P: TermMatcher + 's,
        O: TermMatcher + 's,
        G: GraphNameMatcher + 's,
    {
        let si = match sm.constant().map(|t| self.terms.get_index(t.borrow_term())) {
            None => None,
            Some(None) => return Box::new(empty()),
            Some(Some(i)) => Some(i),
        };
        let pi = match pm.constant().map(|t| self.terms.get_index(t.borrow_term())) {
            None => None,
            Some(None) => return Box::new(empty()),
            Some(Some(i)) => Some(i),
        };
        let oi = match om.constant().map(|t| self.terms.get_index(t.borrow_term())) {
            None => None,
            Some(None) => return Box::new(empty()),
            Some(Some(i)) => Some(i),
        };
        let gi = match gm
            .constant()
            .map(|gn| self.terms.get_graph_index(gn.map(Term::borrow_term)))
        {
            None => None,
            Some(None) => return Box::new(empty()),
            Some(Some(i)) => Some(i),
        };
        #[rustfmt::skip]
        let (index, (lo, hi), back): (_, _, fn([I; 4]) -> [I; 4]) = match (si, pi, oi, gi) {
            (Some(s), Some(p), Some(o), Some(g)) => (&self.spog, bounds(&[s, p, o, g]), spog_to_spog),
            (Some(s), Some(p), Some(o), None)    => (&self.spog, bounds(&[s, p, o]), spog_to_spog),
            (Some(s), Some(p), None,    Some(g)) => (&self.gspo, bounds(&[g, s, p]), gspo_to_spog),
            (Some(s), None,    Some(o), Some(g)) => (&self.ogsp, bounds(&[o, g, s]), ogsp_to_spog),
            (None,    Some(p), Some(o), Some(g)) => (&self.pgos, bounds(&[p, g, o]), pgos_to_spog),
            (Some(s), Some(p), None,    None)    => (&self.spog, bounds(&[s, p]), spog_to_spog),
            (Some(s), None,    Some(o), None)    => (&self.ospg, bounds(&[o, s]), ospg_to_spog),
            (Some(s), None,    None,    Some(g)) => (&self.gspo, bounds(&[g, s]), gspo_to_spog),
            (None,    Some(p), Some(o), None)    => (&self.posg, bounds(&[p, o]), posg_to_spog),
            (None,    Some(p), None,    Some(g)) => (&self.pgos, bounds(&[p, g]), pgos_to_spog),
            (None,    None,    Some(o), Some(g)) => (&self.ogsp, bounds(&[o, g]), ogsp_to_spog),
            (Some(s), None,    None,    None)    => (&self.spog, bounds(&[s]), spog_to_spog),
            (None,    Some(p), None,    None)    => (&self.posg, bounds(&[p]), posg_to_spog),
            (None,    None,    Some(o), None)    => (&self.ospg, bounds(&[o]), ospg_to_spog),
            (None,    None,    None,    Some(g)) => (&self.gspo, bounds(&[g]), gspo_to_spog),
            (None,    None,    None,    None)    => (&self.spog, bounds(&[]), spog_to_spog),
        };
        Box::new(index.range(lo..=hi).map(move |k| back(*k)).filter(
            move |key| {
                let q = &self.quads[key];
                sm.matches(q.s())
                    && pm.matches(q.p())
                    && om.matches(q.o())
                    && gm.matches(q.g())
            },
        ))
    }

    /// Iterate over the quads matched by the given matchers.
    ///
    /// A bound position is expressed by a matcher returning a
    /// [`constant`](TermMatcher::constant)
    /// (e.g. `Some(term)`, or `Some(None)` for "default graph only"
    /// in the graph position);
    /// a wildcard position by [`Any`](quadset_api::term::matcher::Any).
    ///
    /// The work done is proportional to the size of the result
    /// (plus the number of bound positions),
    /// not to the size of the dataset;
    /// see [`match_keys`](Self::match_keys) for how.
    pub fn quads_matching<'s, S, P, O, G>(
        &'s self,
        sm: S,
        pm: P,
        om: O,
        gm: G,
    ) -> Box<dyn Iterator<Item = &'s Q> + 's>
    where
        S: TermMatcher + 's,
        P: TermMatcher + 's,
        O: TermMatcher + 's,
        G: GraphNameMatcher + 's,
    {
        Box::new(
            self.match_keys(sm, pm, om, gm)
                .map(move |key| &self.quads[&key]),
        )
    }

    /// Build a new, independent dataset containing the quads matched
    /// by the given matchers (see [`quads_matching`](Self::quads_matching)).
    ///
    /// The result owns copies of the matched quads and shares no state
    /// with `self`: mutating either never affects the other.
    pub fn matching<S, P, O, G>(&self, sm: S, pm: P, om: O, gm: G) -> Self
    where
        Q: Clone,
        S: TermMatcher,
        P: TermMatcher,
        O: TermMatcher,
        G: GraphNameMatcher,
    {
        self.quads_matching(sm, pm, om, gm).cloned().collect()
    }

    /// Remove every quad matched by the given matchers
    /// (see [`quads_matching`](Self::quads_matching)).
    ///
    /// Return the number of quads removed.
    pub fn remove_matching<S, P, O, G>(&mut self, sm: S, pm: P, om: O, gm: G) -> usize
    where
        S: TermMatcher,
        P: TermMatcher,
        O: TermMatcher,
        G: GraphNameMatcher,
    {
        let keys: Vec<[I; 4]> = self.match_keys(sm, pm, om, gm).collect();
        for key in &keys {
            let removed = self.remove_key(*key);
            debug_assert!(removed.is_some());
        }
        keys.len()
    }

    /// Build a new dataset containing the quads of `self` and the quads
    /// of `other`.
    ///
    /// Each structurally distinct quad appears once;
    /// when both sides hold an equal quad, the value stored in `self`
    /// is the one copied.
    pub fn union(&self, other: &Self) -> Self
    where
        Q: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Build a new dataset containing the quads of `self` that are also
    /// in `other`.
    pub fn intersection(&self, other: &Self) -> Self
    where
        Q: Clone,
    {
        self.iter().filter(|q| other.contains(q)).cloned().collect()
    }

    /// Build a new dataset containing the quads of `self` that are not
    /// in `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        Q: Clone,
    {
        self.iter()
            .filter(|q| !other.contains(q))
            .cloned()
            .collect()
    }

    /// Check whether every quad of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|q| self.contains(q))
    }

    /// Check whether every quad of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Build a new dataset containing the quads of `self` satisfying `f`.
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        Q: Clone,
        F: FnMut(&Q) -> bool,
    {
        self.iter().filter(|q| f(q)).cloned().collect()
    }

    /// Build a new dataset containing `f(q)` for every quad `q` of `self`.
    ///
    /// The results are deduplicated like any inserted quad,
    /// so the new dataset may be smaller than `self`.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Q) -> Q,
    {
        self.iter().map(f).collect()
    }

    /// Copy the quads of this dataset into a `Vec`,
    /// in canonical key order (stable for a given dataset state).
    pub fn to_vec(&self) -> Vec<Q>
    where
        Q: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<I: Index, Q: Quad> Default for GenericIndexedDataset<I, Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two datasets are equal iff they contain the same quads,
/// by [structural equality](Quad::eq) —
/// whatever the order in which those quads were inserted.
impl<I: Index, Q: Quad> PartialEq for GenericIndexedDataset<I, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl<I: Index, Q: Quad> Eq for GenericIndexedDataset<I, Q> {}

impl<I: Index, Q: Quad> Extend<Q> for GenericIndexedDataset<I, Q> {
    fn extend<T: IntoIterator<Item = Q>>(&mut self, iter: T) {
        for quad in iter {
            self.insert(quad);
        }
    }
}

impl<I: Index, Q: Quad> FromIterator<Q> for GenericIndexedDataset<I, Q> {
    fn from_iter<T: IntoIterator<Item = Q>>(iter: T) -> Self {
        let mut dataset = Self::new();
        dataset.extend(iter);
        dataset
    }
}

/// The iterator returned by [`GenericIndexedDataset::iter`].
pub struct Iter<'a, I: Index, Q: Quad> {
    keys: btree_set::Iter<'a, [I; 4]>,
    quads: &'a HashMap<[I; 4], Q>,
}

impl<'a, I: Index, Q: Quad> Iterator for Iter<'a, I, Q> {
    type Item = &'a Q;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|key| &self.quads[key])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a, I: Index, Q: Quad> ExactSizeIterator for Iter<'a, I, Q> {}

impl<'a, I: Index, Q: Quad> IntoIterator for &'a GenericIndexedDataset<I, Q> {
    type Item = &'a Q;
    type IntoIter = Iter<'a, I, Q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The iterator returned by
/// [`GenericIndexedDataset::into_iter`](struct.GenericIndexedDataset.html#impl-IntoIterator).
pub struct IntoIter<I: Index, Q: Quad> {
    keys: btree_set::IntoIter<[I; 4]>,
    quads: HashMap<[I; 4], Q>,
}

impl<I: Index, Q: Quad> Iterator for IntoIter<I, Q> {
    type Item = Q;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let quad = self.quads.remove(&key);
        debug_assert!(quad.is_some());
        quad
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<I: Index, Q: Quad> ExactSizeIterator for IntoIter<I, Q> {}

impl<I: Index, Q: Quad> IntoIterator for GenericIndexedDataset<I, Q> {
    type Item = Q;
    type IntoIter = IntoIter<I, Q>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.spog.into_iter(),
            quads: self.quads,
        }
    }
}

/// The range over `prefix` in an ordering:
/// positions beyond the prefix span the whole index space.
fn bounds<I: Index>(prefix: &[I]) -> ([I; 4], [I; 4]) {
    let mut lo = [I::ZERO; 4];
    let mut hi = [I::MAX; 4];
    lo[..prefix.len()].copy_from_slice(prefix);
    hi[..prefix.len()].copy_from_slice(prefix);
    (lo, hi)
}

fn spog_to_spog<I: Index>(key: [I; 4]) -> [I; 4] {
    key
}
fn spog_to_posg<I: Index>([s, p, o, g]: [I; 4]) -> [I; 4] {
    [p, o, s, g]
}
fn spog_to_ospg<I: Index>([s, p, o, g]: [I; 4]) -> [I; 4] {
    [o, s, p, g]
}
fn spog_to_gspo<I: Index>([s, p, o, g]: [I; 4]) -> [I; 4] {
    [g, s, p, o]
}
fn spog_to_pgos<I: Index>([s, p, o, g]: [I; 4]) -> [I; 4] {
    [p, g, o, s]
}
fn spog_to_ogsp<I: Index>([s, p, o, g]: [I; 4]) -> [I; 4] {
    [o, g, s, p]
}
fn posg_to_spog<I: Index>([p, o, s, g]: [I; 4]) -> [I; 4] {
    [s, p, o, g]
}
fn ospg_to_spog<I: Index>([o, s, p, g]: [I; 4]) -> [I; 4] {
    [s, p, o, g]
}
fn gspo_to_spog<I: Index>([g, s, p, o]: [I; 4]) -> [I; 4] {
    [s, p, o, g]
}
fn pgos_to_spog<I: Index>([p, g, o, s]: [I; 4]) -> [I; 4] {
    [s, p, o, g]
}
fn ogsp_to_spog<I: Index>([o, g, s, p]: [I; 4]) -> [I; 4] {
    [s, p, o, g]
}

/// Flavours of [`GenericIndexedDataset`] with a smaller memory footprint.
///
/// The trade-off is that these implementations can only contain a small
/// number (2^16 - 1) of distinct terms.
pub mod small {
    use super::*;

    /// An in-memory indexed dataset over `u16` term indices.
    pub type IndexedDataset<Q> = GenericIndexedDataset<u16, Q>;
}

#[cfg(test)]
impl<I: Index, Q: Quad> GenericIndexedDataset<I, Q> {
    /// Check that the primary table and the six orderings agree exactly:
    /// every stored quad key is reachable from each ordering under the
    /// appropriate permutation, and nothing else is.
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.quads.len(), self.spog.len());
        assert_eq!(self.quads.len(), self.posg.len());
        assert_eq!(self.quads.len(), self.ospg.len());
        assert_eq!(self.quads.len(), self.gspo.len());
        assert_eq!(self.quads.len(), self.pgos.len());
        assert_eq!(self.quads.len(), self.ogsp.len());
        for key in self.quads.keys() {
            assert!(self.spog.contains(key));
            assert!(self.posg.contains(&spog_to_posg(*key)));
            assert!(self.ospg.contains(&spog_to_ospg(*key)));
            assert!(self.gspo.contains(&spog_to_gspo(*key)));
            assert!(self.pgos.contains(&spog_to_pgos(*key)));
            assert!(self.ogsp.contains(&spog_to_ogsp(*key)));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quadset_api::quad::Spog;
    use quadset_api::term::matcher::Any;
    use quadset_api::term::{GraphName, IriRef, SimpleTerm, TermKind};
    use test_case::test_case;

    type MyQuad = Spog<SimpleTerm<'static>>;
    type MyDataset = IndexedDataset<MyQuad>;

    fn iri(suffix: &str) -> SimpleTerm<'static> {
        SimpleTerm::Iri(IriRef::new_unchecked(
            format!("https://example.org/{}", suffix).into(),
        ))
    }

    fn q(s: &str, p: &str, o: &str) -> MyQuad {
        ([iri(s), iri(p), iri(o)], None)
    }

    fn qg(s: &str, p: &str, o: &str, g: &str) -> MyQuad {
        ([iri(s), iri(p), iri(o)], Some(iri(g)))
    }

    /// A grid of dim³ quads in the default graph.
    fn grid(dim: usize) -> MyDataset {
        let mut d = MyDataset::new();
        for i in 0..dim {
            for j in 0..dim {
                for k in 0..dim {
                    d.insert(q(
                        &format!("s{}", i),
                        &format!("p{}", j),
                        &format!("o{}", k),
                    ));
                }
            }
        }
        d
    }

    #[test]
    fn empty_dataset() {
        let d = MyDataset::new();
        assert_eq!(d.len(), 0);
        assert!(d.is_empty());
        assert!(!d.contains(&q("s", "p", "o")));
        assert_eq!(d.iter().count(), 0);
        assert_eq!(d.matching(Any, Any, Any, Any).len(), 0);
        d.check_invariants();
    }

    #[test]
    fn insert_is_idempotent() {
        let mut d = MyDataset::new();
        assert!(d.insert(q("s", "p", "o")));
        assert_eq!(d.len(), 1);
        assert!(d.contains(&q("s", "p", "o")));
        assert!(!d.insert(q("s", "p", "o")));
        assert_eq!(d.len(), 1);
        assert!(d.contains(&q("s", "p", "o")));
        d.check_invariants();
    }

    #[test]
    fn remove_inverts_insert() {
        let mut d = MyDataset::new();
        d.insert(q("s", "p", "o2"));
        assert!(!d.contains(&q("s", "p", "o1")));

        assert!(d.insert(q("s", "p", "o1")));
        assert_eq!(d.len(), 2);
        assert!(d.remove(&q("s", "p", "o1")));
        assert_eq!(d.len(), 1);
        assert!(!d.contains(&q("s", "p", "o1")));
        assert!(d.contains(&q("s", "p", "o2")));

        // removing an absent quad is a no-op
        assert!(!d.remove(&q("s", "p", "o1")));
        assert_eq!(d.len(), 1);
        d.check_invariants();
    }

    #[test]
    fn remove_accepts_any_quad_shape() {
        let mut d = MyDataset::new();
        d.insert(qg("s", "p", "o", "g"));
        // an equivalent quad with a different implementation
        let other = [iri("s"), iri("p"), iri("o"), iri("g")];
        assert!(d.contains(&other));
        assert!(d.remove(&other));
        assert!(d.is_empty());
        d.check_invariants();
    }

    #[derive(Clone, Debug)]
    struct AnnotatedQuad {
        spog: MyQuad,
        note: &'static str,
    }

    impl Quad for AnnotatedQuad {
        type Term = SimpleTerm<'static>;

        fn s(&self) -> &Self::Term {
            self.spog.s()
        }
        fn p(&self) -> &Self::Term {
            self.spog.p()
        }
        fn o(&self) -> &Self::Term {
            self.spog.o()
        }
        fn g(&self) -> GraphName<&Self::Term> {
            self.spog.g()
        }
    }

    #[test]
    fn dedup_is_structural_but_the_stored_value_is_kept() {
        let mut d = IndexedDataset::<AnnotatedQuad>::new();
        assert!(d.insert(AnnotatedQuad {
            spog: q("s", "p", "o"),
            note: "first",
        }));
        assert!(!d.insert(AnnotatedQuad {
            spog: q("s", "p", "o"),
            note: "second",
        }));
        assert_eq!(d.len(), 1);
        for quad in &d {
            assert_eq!(quad.note, "first");
        }
        d.check_invariants();
    }

    #[test_case(3)]
    #[test_case(4)]
    fn match_narrowing_on_a_grid(dim: usize) {
        let d = grid(dim);
        assert_eq!(d.len(), dim * dim * dim);
        d.check_invariants();

        // all three bound: exactly 1 when in the grid
        for i in 0..dim {
            let s = iri(&format!("s{}", i));
            let p = iri(&format!("p{}", i));
            let o = iri(&format!("o{}", i));
            assert_eq!(d.matching(Some(&s), Some(&p), Some(&o), Any).len(), 1);
        }
        // ... and 0 otherwise
        assert_eq!(
            d.matching(Some(iri("s0")), Some(iri("p0")), Some(iri("nope")), Any)
                .len(),
            0
        );

        // two bound: dim results
        for i in 0..dim {
            let s = iri(&format!("s{}", i));
            let p = iri(&format!("p{}", i));
            let o = iri(&format!("o{}", i));
            assert_eq!(d.matching(Some(&s), Some(&p), Any, Any).len(), dim);
            assert_eq!(d.matching(Some(&s), Any, Some(&o), Any).len(), dim);
            assert_eq!(d.matching(Any, Some(&p), Some(&o), Any).len(), dim);
        }

        // one bound: dim² results
        for i in 0..dim {
            let s = iri(&format!("s{}", i));
            let p = iri(&format!("p{}", i));
            let o = iri(&format!("o{}", i));
            assert_eq!(d.matching(Some(&s), Any, Any, Any).len(), dim * dim);
            assert_eq!(d.matching(Any, Some(&p), Any, Any).len(), dim * dim);
            assert_eq!(d.matching(Any, Any, Some(&o), Any).len(), dim * dim);
        }

        // zero bound: a full, independent copy
        let all = d.matching(Any, Any, Any, Any);
        assert_eq!(all.len(), dim * dim * dim);
        assert_eq!(all, d);
    }

    #[test]
    fn match_with_graph_bound() {
        let mut d = MyDataset::new();
        d.insert(q("s", "p", "o"));
        d.insert(qg("s", "p", "o", "g1"));
        d.insert(qg("s", "p", "o", "g2"));
        assert_eq!(d.len(), 3);
        d.check_invariants();

        let g1 = iri("g1");
        let m = d.matching(Any, Any, Any, Some(Some(&g1)));
        assert_eq!(m.len(), 1);
        assert!(m.contains(&qg("s", "p", "o", "g1")));

        // "default graph only" marker
        let m = d.matching(Any, Any, Any, Some(None::<&SimpleTerm>));
        assert_eq!(m.len(), 1);
        assert!(m.contains(&q("s", "p", "o")));

        // graph bound together with other positions
        let s = iri("s");
        assert_eq!(d.matching(Some(&s), Any, Any, Some(Some(&g1))).len(), 1);
        assert_eq!(
            d.matching(Some(&s), Any, Any, Some(None::<&SimpleTerm>)).len(),
            1
        );
    }

    #[test]
    fn match_unknown_term_shortcuts_to_empty() {
        let d = grid(2);
        let unknown = iri("unknown");
        assert_eq!(d.matching(Some(&unknown), Any, Any, Any).len(), 0);
        assert_eq!(d.matching(Any, Any, Any, Some(Some(&unknown))).len(), 0);
    }

    #[test]
    fn match_with_non_constant_matchers() {
        let mut d = MyDataset::new();
        d.insert(q("s1", "p", "o1"));
        d.insert(q("s2", "p", "o2"));
        d.insert(q("s3", "p", "o3"));

        // array matcher
        let m = [iri("s1"), iri("s3")];
        assert_eq!(d.matching(m, Any, Any, Any).len(), 2);

        // closure matcher
        let m = |t: SimpleTerm| !Term::eq(&t, &iri("o2"));
        assert_eq!(d.matching(Any, Any, m, Any).len(), 2);

        // kind matcher
        assert_eq!(d.matching(TermKind::Iri, Any, Any, Any).len(), 3);
        assert_eq!(d.matching(TermKind::BlankNode, Any, Any, Any).len(), 0);
    }

    #[test]
    fn matching_result_is_independent() {
        let mut d = MyDataset::new();
        d.insert(q("s", "p", "o1"));
        d.insert(q("s", "p", "o2"));

        let mut m = d.matching(Any, Any, Any, Any);
        m.insert(q("s", "p", "o3"));
        m.remove(&q("s", "p", "o1"));
        assert_eq!(m.len(), 2);

        // the source is unchanged
        assert_eq!(d.len(), 2);
        assert!(d.contains(&q("s", "p", "o1")));
        assert!(!d.contains(&q("s", "p", "o3")));
    }

    #[test]
    fn quads_matching_is_lazy_and_restartable() {
        let d = grid(2);
        let s = iri("s0");
        let mut it = d.quads_matching(Some(&s), Any, Any, Any);
        assert!(it.next().is_some());
        drop(it);
        assert_eq!(d.quads_matching(Some(&s), Any, Any, Any).count(), 4);
        assert_eq!(d.quads_matching(Some(&s), Any, Any, Any).count(), 4);
    }

    #[test]
    fn remove_matching_prunes_every_ordering() {
        let mut d = grid(3);
        let p1 = iri("p1");
        assert_eq!(d.remove_matching(Any, Some(&p1), Any, Any), 9);
        assert_eq!(d.len(), 18);
        assert_eq!(d.matching(Any, Some(&p1), Any, Any).len(), 0);
        d.check_invariants();

        // no-op on a pattern with no matches
        assert_eq!(d.remove_matching(Any, Some(&p1), Any, Any), 0);
        assert_eq!(d.len(), 18);
    }

    #[test]
    fn union_laws() {
        let mut a = MyDataset::new();
        a.insert(q("s", "p", "o1"));
        a.insert(q("s", "p", "o2"));
        let mut b = MyDataset::new();
        b.insert(q("s", "p", "o2"));
        b.insert(q("s", "p", "o3"));

        let ab = a.union(&b);
        assert_eq!(ab.len(), 3);
        assert_eq!(ab, b.union(&a)); // commutative
        assert_eq!(a.union(&a), a); // idempotent
        assert!(a.is_subset(&ab));
        assert!(b.is_subset(&ab));
    }

    #[test]
    fn intersection_and_difference_laws() {
        let mut a = MyDataset::new();
        a.insert(q("s", "p", "o1"));
        a.insert(q("s", "p", "o2"));
        let mut b = MyDataset::new();
        b.insert(q("s", "p", "o2"));
        b.insert(q("s", "p", "o3"));
        let empty = MyDataset::new();

        let i = a.intersection(&b);
        assert_eq!(i.len(), 1);
        assert!(i.contains(&q("s", "p", "o2")));
        assert_eq!(a.intersection(&empty), empty);

        let d = a.difference(&b);
        assert_eq!(d.len(), 1);
        assert!(d.contains(&q("s", "p", "o1")));
        assert_eq!(a.difference(&a), empty);

        assert_eq!(a, a.union(&a));
    }

    #[test]
    fn equality_is_insertion_order_independent() {
        let quads = [q("s1", "p", "o"), q("s2", "p", "o"), q("s3", "p", "o")];
        let d1: MyDataset = quads.iter().cloned().collect();
        let d2: MyDataset = quads.iter().rev().cloned().collect();
        assert_eq!(d1, d2);

        let mut d3 = d2.clone();
        d3.insert(q("s4", "p", "o"));
        assert_ne!(d1, d3);
    }

    #[test]
    fn from_iterator_deduplicates() {
        let d: MyDataset = vec![
            q("s", "p", "o"),
            q("s", "p", "o"),
            q("s", "p", "o2"),
        ]
        .into_iter()
        .collect();
        assert_eq!(d.len(), 2);
        d.check_invariants();
    }

    #[test]
    fn iteration_is_complete_and_stable() {
        let mut d = MyDataset::new();
        for i in 0..10 {
            d.insert(q(&format!("s{}", i), "p", "o"));
        }
        for i in 0..5 {
            d.remove(&q(&format!("s{}", i * 2), "p", "o"));
        }
        assert_eq!(d.len(), 5);
        assert_eq!(d.iter().len(), 5);
        assert_eq!(d.iter().count(), 5);

        // no duplicates, no omissions
        let collected: MyDataset = d.iter().cloned().collect();
        assert_eq!(collected, d);

        // stable order for a given state
        let v1 = d.to_vec();
        let v2 = d.to_vec();
        assert_eq!(v1.len(), 5);
        assert!(v1
            .iter()
            .zip(v2.iter())
            .all(|(q1, q2)| Quad::eq(q1, q2)));
    }

    #[test]
    fn into_iterator_consumes_in_order() {
        let mut d = MyDataset::new();
        d.insert(q("s1", "p", "o"));
        d.insert(q("s2", "p", "o"));
        let quads: Vec<MyQuad> = d.clone().into_iter().collect();
        assert_eq!(quads.len(), 2);
        let expected = d.to_vec();
        assert!(quads
            .iter()
            .zip(expected.iter())
            .all(|(q1, q2)| Quad::eq(q1, q2)));
    }

    #[test]
    fn filter_map_and_to_vec() {
        let mut d = MyDataset::new();
        d.insert(q("s1", "p", "o"));
        d.insert(q("s2", "p", "o"));
        d.insert(q("s3", "p", "o"));

        let s1 = iri("s1");
        let f = d.filter(|quad| quad.s().eq(&s1));
        assert_eq!(f.len(), 1);

        // map all subjects to the same term: results collapse
        let m = d.map(|quad| {
            (
                [iri("s"), quad.p().clone(), quad.o().clone()],
                quad.g().cloned(),
            )
        });
        assert_eq!(m.len(), 1);
        assert!(m.contains(&q("s", "p", "o")));

        assert_eq!(d.to_vec().len(), 3);

        // the iterator protocol covers the remaining combinators
        assert!(d.iter().any(|quad| quad.s().eq(&s1)));
        assert!(d.iter().all(|quad| quad.p().eq(&iri("p"))));
        assert_eq!(d.iter().fold(0, |acc, _| acc + 1), 3);
    }

    #[test]
    fn small_flavour() {
        let mut d = small::IndexedDataset::<MyQuad>::new();
        d.insert(q("s", "p", "o"));
        d.insert(qg("s", "p", "o", "g"));
        assert_eq!(d.len(), 2);
        assert_eq!(d.matching(Some(iri("s")), Any, Any, Any).len(), 2);
        d.check_invariants();
    }

    #[test]
    fn mixed_term_kinds() {
        use quadset_api::term::{BnodeId, LanguageTag};

        let mut d = MyDataset::new();
        let b: SimpleTerm = BnodeId::new_unchecked("b1").into_term();
        let lit_fr = SimpleTerm::LiteralLanguage(
            "chat".to_string().into(),
            LanguageTag::new_unchecked("fr".to_string().into()),
        );
        d.insert(([b.clone(), iri("p"), lit_fr.clone()], None));
        d.insert(([b.clone(), iri("p"), "chat".into_term()], None));
        assert_eq!(d.len(), 2); // same lexical form, different literals

        // language tags are case-insensitive
        let lit_fr2 = SimpleTerm::LiteralLanguage(
            "chat".to_string().into(),
            LanguageTag::new_unchecked("FR".to_string().into()),
        );
        assert!(d.contains(&([b.clone(), iri("p"), lit_fr2], None)));

        assert_eq!(d.matching(TermKind::BlankNode, Any, Any, Any).len(), 2);
        assert_eq!(d.matching(Any, Any, TermKind::Literal, Any).len(), 2);
        d.check_invariants();
    }

    #[test]
    fn randomized_mutation_keeps_invariants() {
        // a cheap deterministic pseudo-random sequence
        let mut state = 0x2545f491u32;
        let mut rand = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };
        let mut d = MyDataset::new();
        let mut expected = 0usize;
        let mut present = [false; 64];
        for _ in 0..1000 {
            let i = (rand() % 64) as usize;
            let quad = q(&format!("s{}", i % 4), &format!("p{}", (i / 4) % 4), &format!("o{}", i / 16));
            if rand() % 2 == 0 {
                assert_eq!(d.insert(quad), !present[i]);
                if !present[i] {
                    expected += 1;
                    present[i] = true;
                }
            } else {
                assert_eq!(d.remove(&quad), present[i]);
                if present[i] {
                    expected -= 1;
                    present[i] = false;
                }
            }
        }
        assert_eq!(d.len(), expected);
        assert_eq!(d.iter().count(), expected);
        d.check_invariants();
    }
}
