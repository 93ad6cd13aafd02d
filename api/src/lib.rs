//! This crate is part of [QuadSet],
//! an in-memory indexed [RDF dataset] for Rust.
//!
//! It defines the boundary between the store and the term model:
//! the [`Term`](term::Term) trait and its [`SimpleTerm`](term::SimpleTerm)
//! implementation, validating wrapper types for the different term kinds,
//! matchers describing quad patterns, and the [`Quad`](quad::Quad) trait.
//!
//! The store itself lives in the `quadset_inmem` crate.
//!
//! [QuadSet]: https://github.com/quadset/quadset-rs
//! [RDF dataset]: https://www.w3.org/TR/rdf11-concepts/#section-dataset
#![deny(missing_docs)]

pub mod prelude;
pub mod quad;
pub mod term;
pub mod vocab;
