//! A [`TermInterner`] associates [terms](Term) with short numeric
//! [indices](Index), which serve as the store's canonical term keys.
use quadset_api::term::{FromTerm, GraphName, SimpleTerm, Term};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Abstraction of the short numeric indices representing [terms](Term)
/// in a [`TermInterner`].
pub trait Index: Copy + std::fmt::Debug + Ord + std::hash::Hash {
    /// The smallest index.
    ///
    /// It is never assigned to a term:
    /// quad keys use it as the key of the default graph in the graph position.
    const ZERO: Self;
    /// The largest index.
    const MAX: Self;
    /// Convert from a `usize`.
    ///
    /// # Panics
    /// Panics if `other` exceeds [`Index::MAX`].
    fn from_usize(other: usize) -> Self;
    /// Convert to a `usize`.
    fn into_usize(self) -> usize;
}

impl Index for usize {
    const ZERO: Self = 0;
    const MAX: Self = usize::MAX;
    fn from_usize(other: usize) -> Self {
        other
    }
    fn into_usize(self) -> usize {
        self
    }
}

impl Index for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u32")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

impl Index for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u16")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

//

/// A [`TermInterner`] assigns a dense numeric index to every distinct term,
/// where distinctness follows the [`Term::eq`] contract.
///
/// The index is the term's canonical key:
/// two term values get the same index iff they are term-equal,
/// whatever their implementations.
/// Terms are numbered from 1; [`Index::ZERO`] is reserved as the key of the
/// default graph in the graph position of quad keys
/// (see [`get_graph_index`](TermInterner::get_graph_index)).
///
/// Interned terms are never released while the interner lives.
#[derive(Clone, Debug, Default)]
pub struct TermInterner<I: Index> {
    t2i: HashMap<SimpleTerm<'static>, I>,
}

impl<I: Index> TermInterner<I> {
    /// Build an empty interner.
    pub fn new() -> Self {
        TermInterner {
            t2i: HashMap::new(),
        }
    }

    /// The number of interned terms.
    pub fn len(&self) -> usize {
        self.t2i.len()
    }

    /// Whether no term has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    ///
    /// Return `None` if this interner does not contain a term equivalent to `t`.
    pub fn get_index<T: Term>(&self, t: T) -> Option<I> {
        let key = SimpleTerm::from_term_ref(&t);
        self.t2i.get(&key).copied()
    }

    /// Get the index corresponding to term `t`,
    /// interning a copy of it if necessary.
    pub fn ensure_index<T: Term>(&mut self, t: T) -> I {
        let len = self.t2i.len();
        match self.t2i.entry(SimpleTerm::from_term(t)) {
            Entry::Vacant(e) => {
                let i = I::from_usize(len + 1);
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Get the index corresponding to graph name `g`, if it exists.
    ///
    /// The default graph (`None`) always has index [`Index::ZERO`].
    pub fn get_graph_index<T: Term>(&self, g: GraphName<T>) -> Option<I> {
        match g {
            None => Some(I::ZERO),
            Some(t) => self.get_index(t),
        }
    }

    /// Get the index corresponding to graph name `g`,
    /// interning its term if necessary.
    ///
    /// The default graph (`None`) always has index [`Index::ZERO`].
    pub fn ensure_graph_index<T: Term>(&mut self, g: GraphName<T>) -> I {
        match g {
            None => I::ZERO,
            Some(t) => self.ensure_index(t),
        }
    }
}
