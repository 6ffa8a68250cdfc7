//! A quad expresses a single fact within a context.
//! Quads are like RDF [`triple`](crate::triple)s
//! augmented with an optional graph name.
//!
//! They are the individual statements of an RDF [`dataset`](crate::dataset).

use crate::term::Term;
use crate::triple::Triple;

/// This trait represents an abstract RDF quad,
/// and provides convenient methods for working with quads.
pub trait Quad {
    /// The type of [`Term`] contained by this quad
    type Term: Term + ?Sized;
    /// The subject of this quad.
    fn s(&self) -> &Self::Term;
    /// The predicate of this quad.
    fn p(&self) -> &Self::Term;
    /// The object of this quad.
    fn o(&self) -> &Self::Term;
    /// The (optional) graph name
    fn g(&self) -> Option<&Self::Term>;

    /// The four components of this quad,
    /// as a triple and an optional graph name.
    #[inline]
    fn spog(&self) -> Spog<&Self::Term> {
        ([self.s(), self.p(), self.o()], self.g())
    }
}

/// An owned [`Quad`] as a tuple of an array and an optional name.
pub type Spog<T> = ([T; 3], Option<T>);

impl<T> Quad for [T; 4]
where
    T: Term + Sized,
{
    type Term = T;
    #[inline]
    fn s(&self) -> &Self::Term {
        &self[0]
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        &self[1]
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        &self[2]
    }
    #[inline]
    fn g(&self) -> Option<&Self::Term> {
        Some(&self[3])
    }
}

impl<T> Quad for (T, Option<T::Term>)
where
    T: Triple,
    T::Term: Sized,
{
    type Term = T::Term;
    #[inline]
    fn s(&self) -> &Self::Term {
        self.0.s()
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        self.0.p()
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        self.0.o()
    }
    #[inline]
    fn g(&self) -> Option<&Self::Term> {
        self.1.as_ref()
    }
}

impl<'a, Q: Quad + ?Sized> Quad for &'a Q {
    type Term = Q::Term;
    #[inline]
    fn s(&self) -> &Q::Term {
        (*self).s()
    }
    #[inline]
    fn p(&self) -> &Q::Term {
        (*self).p()
    }
    #[inline]
    fn o(&self) -> &Q::Term {
        (*self).o()
    }
    #[inline]
    fn g(&self) -> Option<&Q::Term> {
        (*self).g()
    }
}
