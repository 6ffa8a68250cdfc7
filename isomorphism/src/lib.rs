//! This crate is part of [Bijou],
//! a toolkit for comparing [RDF] graphs and datasets up to blank node renaming.
//!
//! This crate provides functions to check if two graphs (resp. two datasets)
//! are [isomorphic], and to compute the [`Bijection`] between their blank nodes
//! that witnesses it.
//!
//! # Algorithm
//!
//! 1. Statements without blank nodes must be the same in both graphs.
//! 2. Each blank node receives a *signature*,
//!    a digest of the statements it appears in,
//!    that incorporates the signatures of its neighbours once those are stable.
//! 3. Blank nodes with identical signatures are paired.
//! 4. When symmetric blank nodes can not be told apart,
//!    a candidate pair is speculatively pinned to the same signature,
//!    and steps 2-3 are retried (backtracking on failure).
//!
//! This is fast for graphs where most blank nodes are distinguished by their neighbourhood,
//! but exponential in the worst case; see [`IsoOptions::with_max_depth`].
//!
//! [Bijou]: https://docs.rs/bijou/latest/bijou/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
#![deny(missing_docs)]

mod bijection;
mod dataset;
mod graph;
mod ground;
mod iso_term;
mod options;
mod refine;
mod signature;

pub mod hash;

pub use bijection::Bijection;
pub use dataset::{
    bijection_with_hash, dataset_bijection, dataset_bijection_with, isomorphic_datasets,
    isomorphic_datasets_with,
};
pub use graph::{graph_bijection, graph_bijection_with, isomorphic_graphs, isomorphic_graphs_with};
pub use options::IsoOptions;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
