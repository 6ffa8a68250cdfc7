//! This crate is part of [Bijou],
//! a toolkit for comparing [RDF] graphs and datasets up to blank node renaming.
//!
//! It defines the contracts that graphs, datasets and terms must fulfill
//! in order to be compared by [`bijou_isomorphism`]:
//! * [`term::Term`] for RDF terms, and [`term::SimpleTerm`], a ready-to-use implementation,
//! * [`triple::Triple`] and [`quad::Quad`] for statements,
//! * [`graph::Graph`] and [`dataset::Dataset`] for collections of statements.
//!
//! The traits are implemented for standard collections
//! (e.g. `Vec<[T; 3]>` is a [`Graph`](graph::Graph) as soon as `T` is a [`Term`](term::Term)),
//! so that any in-memory representation can be compared without conversion.
//!
//! # Generalized vs. strict RDF model
//!
//! Blank nodes are accepted in any position of a statement,
//! including the predicate and the graph name.
//! This is a superset of the strict RDF model.
//!
//! [Bijou]: https://docs.rs/bijou/latest/bijou/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [`bijou_isomorphism`]: https://docs.rs/bijou_isomorphism
#![deny(missing_docs)]

pub mod dataset;
pub mod graph;
pub mod ns;
pub mod quad;
pub mod source;
pub mod term;
pub mod triple;

pub use mownstr::MownStr;

/// Re-export std traits and types used in the public API.
pub use std::error::Error;
