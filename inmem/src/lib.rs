//! This crate is part of [QuadSet],
//! an in-memory indexed [RDF dataset] for Rust.
//!
//! It provides the store itself:
//! [`GenericIndexedDataset`](dataset::GenericIndexedDataset)
//! and its [`TermInterner`](index::TermInterner),
//! which together maintain a deduplicated set of quads
//! answering any partial-pattern query without a full scan.
//!
//! The term model consumed by the store is defined in `quadset_api`.
//!
//! [QuadSet]: https://github.com/quadset/quadset-rs
//! [RDF dataset]: https://www.w3.org/TR/rdf11-concepts/#section-dataset
#![deny(missing_docs)]

pub mod dataset;
pub mod index;
