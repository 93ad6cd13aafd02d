//! I define generic traits and default implementations for *matchers*,
//! objects that can be used to match zero, one or several terms
//! (or graph names) in a quad pattern.
//!
//! The four arguments of
//! `quads_matching` and `matching` in `quadset_inmem` are matchers:
//! a bound position is a matcher whose [`constant`](TermMatcher::constant)
//! returns that term, a wildcard position is [`Any`].

use super::*;

/// A universal matcher: it matches any [`Term`] or [`GraphName`]
/// (even the default graph).
#[derive(Clone, Copy, Debug)]
pub struct Any;

/// Generic trait for matching [`Term`]s.
pub trait TermMatcher {
    /// The type of term that this matcher contains, if any.
    type Term: Term + ?Sized;

    /// Check whether this matcher matches `term`.
    fn matches<T2: Term + ?Sized>(&self, term: &T2) -> bool;

    /// Return `None`, unless this matcher can only match a single term,
    /// in which case this method may return that term.
    ///
    /// This method is provided for optimization purposes:
    /// a matcher returning `Some(t)` can be resolved against an index
    /// instead of being tested against every candidate.
    /// Implementing it is optional.
    fn constant(&self) -> Option<&Self::Term> {
        None
    }

    /// Convert this [`TermMatcher`] into a [`GraphNameMatcher`]
    /// matching the same terms used as graph names
    /// (and therefore *not* matching the default graph).
    fn gn(self) -> TermMatcherGn<Self>
    where
        Self: Sized,
    {
        TermMatcherGn(self)
    }
}

impl TermMatcher for Any {
    type Term = SimpleTerm<'static>; // not actually used

    fn matches<T2: Term + ?Sized>(&self, _: &T2) -> bool {
        true
    }
}

/// Matches the wrapped term if any, otherwise matches nothing.
impl<T> TermMatcher for Option<T>
where
    T: Term,
{
    type Term = T;

    fn matches<T2: Term + ?Sized>(&self, term: &T2) -> bool {
        match self {
            Some(mine) => mine.eq(term.borrow_term()),
            None => false,
        }
    }
    fn constant(&self) -> Option<&Self::Term> {
        self.as_ref()
    }
}

/// Matches any of the terms in the array.
impl<T, const N: usize> TermMatcher for [T; N]
where
    T: Term,
{
    type Term = T;

    fn matches<T2: Term + ?Sized>(&self, term: &T2) -> bool {
        self.iter().any(|mine| mine.eq(term.borrow_term()))
    }
    fn constant(&self) -> Option<&Self::Term> {
        if N == 1 {
            Some(&self[0])
        } else {
            None
        }
    }
}

/// Matches any of the terms in the slice.
impl<T> TermMatcher for &[T]
where
    T: Term,
{
    type Term = T;

    fn matches<T2: Term + ?Sized>(&self, term: &T2) -> bool {
        self.iter().any(|mine| mine.eq(term.borrow_term()))
    }
    fn constant(&self) -> Option<&Self::Term> {
        if self.len() == 1 {
            Some(&self[0])
        } else {
            None
        }
    }
}

/// Matches any term of the given kind.
impl TermMatcher for TermKind {
    type Term = SimpleTerm<'static>; // not actually used

    fn matches<T2: Term + ?Sized>(&self, term: &T2) -> bool {
        term.kind() == *self
    }
}

/// Matches any term satisfying the function.
impl<F> TermMatcher for F
where
    F: Fn(SimpleTerm<'_>) -> bool + ?Sized,
{
    type Term = SimpleTerm<'static>; // not actually used

    fn matches<T2: Term + ?Sized>(&self, term: &T2) -> bool {
        (self)(term.as_simple())
    }
}

//

/// Generic trait for matching [`GraphName`]s, i.e. optional [`Term`]s.
pub trait GraphNameMatcher {
    /// The type of term that this matcher contains, if any.
    type Term: Term + ?Sized;

    /// Check whether this matcher matches `graph_name`.
    fn matches<T2: Term + ?Sized>(&self, graph_name: GraphName<&T2>) -> bool;

    /// Return `None`, unless this matcher can only match a single graph name,
    /// in which case this method may return that graph name.
    ///
    /// NB: a graph name is already an `Option`, `None` meaning the default graph.
    /// As a consequence, this method returns *an option of option*:
    /// * `None` means that the matcher does *not* match a single graph name,
    /// * `Some(None)` means that the matcher matches only the default graph,
    /// * `Some(Some(term))` means that the matcher matches a single proper graph name.
    ///
    /// This method is provided for optimization purposes
    /// (see [`TermMatcher::constant`]).
    /// Implementing it is optional.
    #[allow(clippy::option_option)]
    fn constant(&self) -> Option<GraphName<&Self::Term>> {
        None
    }
}

impl GraphNameMatcher for Any {
    type Term = SimpleTerm<'static>; // not actually used

    fn matches<T2: Term + ?Sized>(&self, _: GraphName<&T2>) -> bool {
        true
    }
}

/// Matches the wrapped graph name if any, otherwise matches nothing.
///
/// `Some(None)` is the "default graph only" matcher.
impl<T> GraphNameMatcher for Option<GraphName<T>>
where
    T: Term,
{
    type Term = T;

    fn matches<T2: Term + ?Sized>(&self, graph_name: GraphName<&T2>) -> bool {
        match self {
            Some(mine) => graph_name_eq(
                mine.as_ref().map(Term::borrow_term),
                graph_name.map(Term::borrow_term),
            ),
            None => false,
        }
    }
    fn constant(&self) -> Option<GraphName<&Self::Term>> {
        self.as_ref().map(|gn| gn.as_ref())
    }
}

/// Matches any of the graph names in the array.
impl<T, const N: usize> GraphNameMatcher for [GraphName<T>; N]
where
    T: Term,
{
    type Term = T;

    fn matches<T2: Term + ?Sized>(&self, graph_name: GraphName<&T2>) -> bool {
        self.iter().any(|mine| {
            graph_name_eq(
                mine.as_ref().map(Term::borrow_term),
                graph_name.map(Term::borrow_term),
            )
        })
    }
    fn constant(&self) -> Option<GraphName<&Self::Term>> {
        if N == 1 {
            Some(self[0].as_ref())
        } else {
            None
        }
    }
}

/// Matches any graph name satisfying the function.
impl<F> GraphNameMatcher for F
where
    F: Fn(GraphName<SimpleTerm<'_>>) -> bool + ?Sized,
{
    type Term = SimpleTerm<'static>; // not actually used

    fn matches<T2: Term + ?Sized>(&self, graph_name: GraphName<&T2>) -> bool {
        (self)(graph_name.map(|t| t.as_simple()))
    }
}

/// The return type of [`TermMatcher::gn`].
#[derive(Clone, Copy, Debug)]
pub struct TermMatcherGn<M>(M);

impl<M> GraphNameMatcher for TermMatcherGn<M>
where
    M: TermMatcher,
{
    type Term = M::Term;

    fn matches<T2: Term + ?Sized>(&self, graph_name: GraphName<&T2>) -> bool {
        match graph_name {
            Some(term) => self.0.matches(term),
            None => false,
        }
    }
    fn constant(&self) -> Option<GraphName<&Self::Term>> {
        self.0.constant().map(Some)
    }
}
