use super::*;
use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;

//
// foreign implementations
//

// reference to Dataset

impl<'a, T: Dataset + ?Sized> Dataset for &'a T {
    type Quad<'x> = T::Quad<'x> where Self: 'x;

    type Error = T::Error;

    fn quads(&self) -> DQuadSource<Self> {
        T::quads(*self)
    }

    fn len(&self) -> DResult<Self, usize> {
        T::len(*self)
    }

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
        T::contains(*self, s, p, o, g)
    }
}

// slice of quads

impl<Q: Quad> Dataset for [Q] {
    type Quad<'x> = &'x Q where Self: 'x;
    type Error = Infallible;

    fn quads(&self) -> DQuadSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> DResult<Self, usize> {
        Ok(<[Q]>::len(self))
    }
}

// Vec of quads

impl<Q: Quad> Dataset for Vec<Q> {
    type Quad<'x> = &'x Q where Self: 'x;
    type Error = Infallible;

    fn quads(&self) -> DQuadSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> DResult<Self, usize> {
        Ok(Vec::len(self))
    }
}

// HashSet of quads

impl<Q: Quad, S> Dataset for HashSet<Q, S> {
    type Quad<'x> = &'x Q where Self: 'x;
    type Error = Infallible;

    fn quads(&self) -> DQuadSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> DResult<Self, usize> {
        Ok(HashSet::len(self))
    }
}

// BTreeSet of quads

impl<Q: Quad> Dataset for BTreeSet<Q> {
    type Quad<'x> = &'x Q where Self: 'x;
    type Error = Infallible;

    fn quads(&self) -> DQuadSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> DResult<Self, usize> {
        Ok(BTreeSet::len(self))
    }
}
