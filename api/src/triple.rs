//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! In Bijou, any of the three terms may be a blank node,
//! including the predicate (generalized RDF).

use crate::quad::Quad;
use crate::term::Term;

/// This trait represents an abstract RDF triple,
/// and provide convenient methods for working with triples.
pub trait Triple {
    /// The type of [`Term`] contained by this triple
    type Term: Term + ?Sized;
    /// The subject of this triple.
    fn s(&self) -> &Self::Term;
    /// The predicate of this triple.
    fn p(&self) -> &Self::Term;
    /// The object of this triple.
    fn o(&self) -> &Self::Term;

    /// The three components of this triple, as an array.
    #[inline]
    fn spo(&self) -> [&Self::Term; 3] {
        [self.s(), self.p(), self.o()]
    }

    /// [`Quad`] adapter owning this triple,
    /// pretending to belong to the default graph.
    fn wrap_as_quad(self) -> TripleAsQuad<Self>
    where
        Self: Sized,
    {
        TripleAsQuad(self)
    }
}

impl<T> Triple for [T; 3]
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
}

impl<'a, T: Triple + ?Sized> Triple for &'a T {
    type Term = T::Term;
    #[inline]
    fn s(&self) -> &Self::Term {
        (*self).s()
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        (*self).p()
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        (*self).o()
    }
}

/// The adapter returned by [`Triple::wrap_as_quad`].
#[derive(Clone, Copy, Debug)]
pub struct TripleAsQuad<T>(pub(crate) T);

impl<T> TripleAsQuad<T> {
    /// Unwrap this adapter to get the original triple back.
    pub fn unwrap(self) -> T {
        self.0
    }
}

impl<T: Triple> Quad for TripleAsQuad<T> {
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
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::SimpleTerm;

    #[test]
    fn triple_as_quad_is_in_default_graph() {
        let t = [
            SimpleTerm::bnode_unchecked("a"),
            SimpleTerm::iri_unchecked("http://example.org/p"),
            SimpleTerm::bnode_unchecked("b"),
        ];
        let q = (&t).wrap_as_quad();
        assert!(Term::eq(q.s(), t.s()));
        assert!(Term::eq(q.o(), t.o()));
        assert!(q.g().is_none());
    }
}
