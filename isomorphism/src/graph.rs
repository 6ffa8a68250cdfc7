use crate::bijection::Bijection;
use crate::IsoOptions;
use bijou_api::graph::Graph;
use bijou_api::source::StreamResult;

/// Computes whether two graphs are isomorphic.
///
/// # Error
/// If an error occurs while traversing `g1`,
/// a [`SourceError`](bijou_api::source::StreamError::SourceError) is returned.
///
/// If an error occurs while traversing `g2`,
/// a [`SinkError`](bijou_api::source::StreamError::SinkError) is returned.
pub fn isomorphic_graphs<G1, G2>(g1: &G1, g2: &G2) -> StreamResult<bool, G1::Error, G2::Error>
where
    G1: Graph,
    G2: Graph,
{
    super::isomorphic_datasets(&g1.as_dataset(), &g2.as_dataset())
}

/// Computes whether two graphs are isomorphic, with the given options.
///
/// See [`isomorphic_graphs`].
pub fn isomorphic_graphs_with<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &IsoOptions,
) -> StreamResult<bool, G1::Error, G2::Error>
where
    G1: Graph,
    G2: Graph,
{
    super::isomorphic_datasets_with(&g1.as_dataset(), &g2.as_dataset(), options)
}

/// Computes a [`Bijection`] between the blank nodes of two graphs,
/// if they are isomorphic.
///
/// ```
/// # use bijou_api::term::SimpleTerm;
/// # use bijou_isomorphism::graph_bijection;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let p = SimpleTerm::iri("http://example.org/p")?;
/// // a 2-cycle: no signature can tell x1 from x2
/// let x1 = SimpleTerm::bnode("x1")?;
/// let x2 = SimpleTerm::bnode("x2")?;
/// let y1 = SimpleTerm::bnode("y1")?;
/// let y2 = SimpleTerm::bnode("y2")?;
/// let g1 = vec![[x1.clone(), p.clone(), x2.clone()], [x2, p.clone(), x1]];
/// let g2 = vec![[y1.clone(), p.clone(), y2.clone()], [y2, p, y1]];
/// let bijection = graph_bijection(&g1, &g2)?.expect("isomorphic graphs");
/// assert_eq!(bijection.len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// # Error
/// If an error occurs while traversing `g1`,
/// a [`SourceError`](bijou_api::source::StreamError::SourceError) is returned.
///
/// If an error occurs while traversing `g2`,
/// a [`SinkError`](bijou_api::source::StreamError::SinkError) is returned.
pub fn graph_bijection<G1, G2>(
    g1: &G1,
    g2: &G2,
) -> StreamResult<Option<Bijection>, G1::Error, G2::Error>
where
    G1: Graph,
    G2: Graph,
{
    super::dataset_bijection(&g1.as_dataset(), &g2.as_dataset())
}

/// Computes a [`Bijection`] between the blank nodes of two graphs,
/// if they are isomorphic, with the given options.
///
/// See [`graph_bijection`].
pub fn graph_bijection_with<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &IsoOptions,
) -> StreamResult<Option<Bijection>, G1::Error, G2::Error>
where
    G1: Graph,
    G2: Graph,
{
    super::dataset_bijection_with(&g1.as_dataset(), &g2.as_dataset(), options)
}
