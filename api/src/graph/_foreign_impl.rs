use super::*;
use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;

//
// foreign implementations
//

// reference to Graph

impl<'a, T: Graph + ?Sized> Graph for &'a T {
    type Triple<'x> = T::Triple<'x> where Self: 'x;

    type Error = T::Error;

    fn triples(&self) -> GTripleSource<Self> {
        T::triples(*self)
    }

    fn len(&self) -> GResult<Self, usize> {
        T::len(*self)
    }

    fn contains<TS, TP, TO>(&self, s: &TS, p: &TP, o: &TO) -> GResult<Self, bool>
    where
        TS: Term + ?Sized,
        TP: Term + ?Sized,
        TO: Term + ?Sized,
    {
        T::contains(*self, s, p, o)
    }
}

// slice of triples

impl<T: Triple> Graph for [T] {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> GResult<Self, usize> {
        Ok(<[T]>::len(self))
    }
}

// Vec of triples

impl<T: Triple> Graph for Vec<T> {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> GResult<Self, usize> {
        Ok(Vec::len(self))
    }
}

// HashSet of triples

impl<T: Triple, S> Graph for HashSet<T, S> {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> GResult<Self, usize> {
        Ok(HashSet::len(self))
    }
}

// BTreeSet of triples

impl<T: Triple> Graph for BTreeSet<T> {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<Self> {
        Box::new(self.iter().map(Ok))
    }

    fn len(&self) -> GResult<Self, usize> {
        Ok(BTreeSet::len(self))
    }
}
