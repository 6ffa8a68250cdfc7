//! This crate aims to provide a comprehensive toolkit
//! for comparing [RDF] graphs and datasets in Rust.
//!
//! Two RDF graphs are [isomorphic] if they only differ
//! by the labels of their blank nodes.
//! Since blank node labels are local to a graph
//! (a parser is free to pick any of them),
//! this is the relevant notion of equality for RDF data.
//!
//! Bijou is made of the following crates, re-exported here:
//! * [`api`] defines the contracts that terms, graphs and datasets must fulfill;
//! * [`isomorphism`] checks whether two graphs or datasets are isomorphic,
//!   and builds the mapping between their blank nodes.
//!
//! # Getting Started
//!
//! ```
//! use bijou::api::term::SimpleTerm;
//! use bijou::isomorphism::{graph_bijection, isomorphic_graphs};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let name = SimpleTerm::iri("http://xmlns.com/foaf/0.1/name")?;
//! let knows = SimpleTerm::iri("http://xmlns.com/foaf/0.1/knows")?;
//! let alice = SimpleTerm::literal_lang("Alice", "en")?;
//!
//! let make_graph = |b1: &'static str, b2: &'static str| -> Result<_, Box<dyn std::error::Error>> {
//!     let b1 = SimpleTerm::bnode(b1)?;
//!     let b2 = SimpleTerm::bnode(b2)?;
//!     Ok(vec![
//!         [b1.clone(), name.clone(), alice.clone()],
//!         [b1, knows.clone(), b2],
//!     ])
//! };
//! let g1 = make_graph("alice", "bob")?;
//! let g2 = make_graph("n0", "n1")?;
//!
//! assert!(isomorphic_graphs(&g1, &g2)?);
//! let bijection = graph_bijection(&g1, &g2)?.unwrap();
//! assert_eq!(&*bijection["alice"], "n0");
//! assert_eq!(&*bijection["bob"], "n1");
//! # Ok(())
//! # }
//! ```
//!
//! # Generalized vs. Strict RDF model
//!
//! The data model supported by this crate is in fact
//! a superset of the RDF data model as defined by the W3C.
//! Blank nodes are accepted as predicates and graph names,
//! and they are matched there like anywhere else.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
#![deny(missing_docs)]

pub use bijou_api as api;
pub use bijou_isomorphism as isomorphism;
