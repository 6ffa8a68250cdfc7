//! I define adapters for the [`dataset`](super) related traits.
use super::*;
use crate::graph::{GTriple, Graph};
use crate::triple::{Triple, TripleAsQuad};
use resiter::map::*;

/// I wrap a [`Graph`] as a [`Dataset`] containing only that graph as the default graph.
///
/// This is the adapter returned by [`Graph::as_dataset`] and [`Graph::into_dataset`].
#[derive(Clone, Copy, Debug)]
pub struct GraphAsDataset<T>(T);

impl<T> GraphAsDataset<T>
where
    T: Graph,
{
    /// Wrap the given graph as the default graph of a dataset.
    pub fn new(graph: T) -> Self {
        GraphAsDataset(graph)
    }

    /// Unwrap this adapter to get the original graph back.
    pub fn unwrap(self) -> T {
        self.0
    }
}

impl<T> Dataset for GraphAsDataset<T>
where
    T: Graph,
{
    type Quad<'x> = TripleAsQuad<GTriple<'x, T>> where Self: 'x;
    type Error = T::Error;

    fn quads(&self) -> DQuadSource<Self> {
        Box::new(self.0.triples().map_ok(Triple::wrap_as_quad))
    }

    fn len(&self) -> DResult<Self, usize> {
        self.0.len()
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
        match g {
            Some(_) => Ok(false),
            None => self.0.contains(s, p, o),
        }
    }
}
