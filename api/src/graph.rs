//! An RDF graph, the central notion of the RDF data model,
//! is a collection of triples.
//!
//! This module provides the [`Graph`] trait,
//! which is what the isomorphism functions consume,
//! and implements it for standard collections of triples.
use crate::dataset::adapter::GraphAsDataset;
use crate::term::Term;
use crate::triple::Triple;
use crate::Error;
use resiter::filter::*;

mod _foreign_impl;

#[cfg(test)]
mod test;

/// Type alias for the triples returned by a graph.
pub type GTriple<'a, G> = <G as Graph>::Triple<'a>;
/// Type alias for results produced by a graph.
pub type GResult<G, T> = Result<T, <G as Graph>::Error>;
/// Type alias for fallible triple iterators produced by a graph.
///
/// See [`Graph::triples`] for more information about how to use it.
pub type GTripleSource<'a, G> = Box<dyn Iterator<Item = GResult<G, GTriple<'a, G>>> + 'a>;

/// Generic trait for RDF graphs.
///
/// For convenience, this trait is implemented
/// by standard collections of triples (`Vec`, slices, `HashSet`, `BTreeSet`).
///
/// NB: the semantics of this trait allows a graph to yield duplicate triples.
/// They are counted by the default implementation of [`len`](Graph::len).
pub trait Graph {
    /// Determine the type of [`Triple`]s
    /// that the methods of this graph will yield.
    type Triple<'x>: Triple
    where
        Self: 'x;
    /// The error type that this graph may raise.
    type Error: Error + Send + Sync + 'static;

    /// An iterator visiting all triples of this graph in arbitrary order.
    ///
    /// This iterator is fallible:
    /// its items are `Result`s,
    /// an error may occur at any time during the iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bijou_api::graph::{GResult, Graph};
    /// # use bijou_api::term::Term;
    /// # use bijou_api::triple::Triple;
    /// # fn foo<G: Graph>(g: &G) -> GResult<G, ()> {
    /// for t in g.triples() {
    ///     let t = t?; // rethrow error if any
    ///     if t.p().is_blank_node() {
    ///         // do something
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn triples(&self) -> GTripleSource<Self>;

    /// The number of triples in this graph.
    ///
    /// The default implementation iterates over all triples;
    /// implementors are encouraged to override it.
    fn len(&self) -> GResult<Self, usize> {
        let mut n = 0;
        for t in self.triples() {
            t?;
            n += 1;
        }
        Ok(n)
    }

    /// Return `true` if this graph contains no triple.
    fn is_empty(&self) -> GResult<Self, bool> {
        Ok(self.len()? == 0)
    }

    /// Return `true` if this graph contains the given triple.
    ///
    /// Terms are compared with [`Term::eq`],
    /// so blank nodes match by label.
    fn contains<TS, TP, TO>(&self, s: &TS, p: &TP, o: &TO) -> GResult<Self, bool>
    where
        TS: Term + ?Sized,
        TP: Term + ?Sized,
        TO: Term + ?Sized,
    {
        let mut found = self.triples().filter_ok(|t| {
            Term::eq(t.s(), s) && Term::eq(t.p(), p) && Term::eq(t.o(), o)
        });
        match found.next() {
            None => Ok(false),
            Some(Ok(_)) => Ok(true),
            Some(Err(err)) => Err(err),
        }
    }

    /// [`Dataset`](crate::dataset::Dataset) adapter borrowing this graph
    fn as_dataset(&self) -> GraphAsDataset<&Self> {
        GraphAsDataset::new(self)
    }

    /// [`Dataset`](crate::dataset::Dataset) adapter taking ownership of this graph
    fn into_dataset(self) -> GraphAsDataset<Self>
    where
        Self: Sized,
    {
        GraphAsDataset::new(self)
    }
}
