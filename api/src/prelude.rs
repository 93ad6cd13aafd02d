//! General-use types and traits from the QuadSet API.

pub use crate::quad::{Quad, Spog};
pub use crate::term::matcher::{Any, GraphNameMatcher, TermMatcher};
pub use crate::term::{
    graph_name_eq, BnodeId, FromTerm, GraphName, IriRef, LanguageTag, SimpleTerm, Term, TermKind,
    VarName,
};
