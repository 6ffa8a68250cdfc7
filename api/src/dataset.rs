//! An RDF dataset is composed of a default graph,
//! and zero or more named graphs, each associated with a graph name.
//!
//! Another way to look at it is as a collection of [quad](crate::quad)s.
//!
//! This module provides the [`Dataset`] trait,
//! and implements it for standard collections of quads.

use crate::quad::Quad;
use crate::term::Term;
use crate::Error;
use resiter::filter::*;

mod _foreign_impl;
pub mod adapter;
#[cfg(test)]
mod test;

/// Type alias for the quads returned by a dataset.
pub type DQuad<'a, D> = <D as Dataset>::Quad<'a>;
/// Type alias for results produced by a dataset.
pub type DResult<D, T> = Result<T, <D as Dataset>::Error>;
/// Type alias for fallible quad iterators produced by a dataset.
///
/// See [`Dataset::quads`] for more information about how to use it.
pub type DQuadSource<'a, D> = Box<dyn Iterator<Item = DResult<D, DQuad<'a, D>>> + 'a>;

/// Generic trait for RDF datasets.
///
/// For convenience, this trait is implemented
/// by standard collections of quads (`Vec`, slices, `HashSet`, `BTreeSet`).
///
/// NB: the semantics of this trait allows a dataset to yield duplicate quads.
pub trait Dataset {
    /// Determine the type of [`Quad`]s
    /// that the methods of this dataset will yield.
    type Quad<'x>: Quad
    where
        Self: 'x;
    /// The error type that this dataset may raise.
    type Error: Error + Send + Sync + 'static;

    /// An iterator visiting all quads of this dataset in arbitrary order.
    ///
    /// This iterator is fallible:
    /// its items are `Result`s,
    /// an error may occur at any time during the iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn test() -> Result<(), Box<dyn bijou_api::Error>> {
    /// # use bijou_api::dataset::Dataset;
    /// # use bijou_api::quad::Spog;
    /// # use bijou_api::term::SimpleTerm;
    /// # let dataset = Vec::<Spog<SimpleTerm>>::new();
    /// #
    /// for q in dataset.quads() {
    ///     let q = q?; // rethrow error if any
    ///     // do something with q
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn quads(&self) -> DQuadSource<Self>;

    /// The number of quads in this dataset.
    ///
    /// The default implementation iterates over all quads;
    /// implementors are encouraged to override it.
    fn len(&self) -> DResult<Self, usize> {
        let mut n = 0;
        for q in self.quads() {
            q?;
            n += 1;
        }
        Ok(n)
    }

    /// Return `true` if this dataset contains no quad.
    fn is_empty(&self) -> DResult<Self, bool> {
        Ok(self.len()? == 0)
    }

    /// Return `true` if this dataset contains the given quad.
    ///
    /// `g` is `None` for the default graph.
    /// Terms are compared with [`Term::eq`],
    /// so blank nodes match by label.
    fn contains<TS, TP, TO, TG>(
        &self,
        s: &TS,
        p: &TP,
        o: &TO,
        g: Option<&TG>,
    ) -> DResult<Self, bool>
    where
        TS: Term + ?Sized,
        TP: Term + ?Sized,
        TO: Term + ?Sized,
        TG: Term + ?Sized,
    {
        let mut found = self.quads().filter_ok(|q| {
            Term::eq(q.s(), s)
                && Term::eq(q.p(), p)
                && Term::eq(q.o(), o)
                && graph_name_eq(q.g(), g)
        });
        match found.next() {
            None => Ok(false),
            Some(Ok(_)) => Ok(true),
            Some(Err(err)) => Err(err),
        }
    }
}

/// Compare two optional graph names, `None` standing for the default graph.
pub fn graph_name_eq<T1, T2>(g1: Option<&T1>, g2: Option<&T2>) -> bool
where
    T1: Term + ?Sized,
    T2: Term + ?Sized,
{
    match (g1, g2) {
        (None, None) => true,
        (Some(g1), Some(g2)) => Term::eq(g1, g2),
        _ => false,
    }
}
