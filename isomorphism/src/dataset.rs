use crate::bijection::Bijection;
use crate::ground::split_blank_statements;
use crate::hash::{HashFunction, Sha256};
use crate::refine::refine;
use crate::IsoOptions;
use bijou_api::dataset::Dataset;
use bijou_api::source::StreamResult;
use std::collections::BTreeMap;

/// Computes whether two datasets are isomorphic.
///
/// # Error
/// If an error occurs while traversing `d1`,
/// a [`SourceError`](bijou_api::source::StreamError::SourceError) is returned.
///
/// If an error occurs while traversing `d2`,
/// a [`SinkError`](bijou_api::source::StreamError::SinkError) is returned.
pub fn isomorphic_datasets<D1, D2>(d1: &D1, d2: &D2) -> StreamResult<bool, D1::Error, D2::Error>
where
    D1: Dataset,
    D2: Dataset,
{
    isomorphic_datasets_with(d1, d2, &IsoOptions::default())
}

/// Computes whether two datasets are isomorphic, with the given options.
///
/// See [`isomorphic_datasets`].
pub fn isomorphic_datasets_with<D1, D2>(
    d1: &D1,
    d2: &D2,
    options: &IsoOptions,
) -> StreamResult<bool, D1::Error, D2::Error>
where
    D1: Dataset,
    D2: Dataset,
{
    Ok(dataset_bijection_with(d1, d2, options)?.is_some())
}

/// Computes a [`Bijection`] between the blank nodes of two datasets,
/// if they are isomorphic.
///
/// ```
/// # use bijou_api::quad::Spog;
/// # use bijou_api::term::SimpleTerm;
/// # use bijou_isomorphism::dataset_bijection;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let knows = SimpleTerm::iri("http://xmlns.com/foaf/0.1/knows")?;
/// let d1: Vec<Spog<SimpleTerm>> = vec![
///     ([SimpleTerm::bnode("alice")?, knows.clone(), SimpleTerm::bnode("bob")?], None),
/// ];
/// let d2: Vec<Spog<SimpleTerm>> = vec![
///     ([SimpleTerm::bnode("a")?, knows.clone(), SimpleTerm::bnode("b")?], None),
/// ];
/// let bijection = dataset_bijection(&d1, &d2)?.expect("isomorphic datasets");
/// assert_eq!(&*bijection["alice"], "a");
/// assert_eq!(&*bijection["bob"], "b");
/// # Ok(())
/// # }
/// ```
///
/// # Error
/// If an error occurs while traversing `d1`,
/// a [`SourceError`](bijou_api::source::StreamError::SourceError) is returned.
///
/// If an error occurs while traversing `d2`,
/// a [`SinkError`](bijou_api::source::StreamError::SinkError) is returned.
pub fn dataset_bijection<D1, D2>(
    d1: &D1,
    d2: &D2,
) -> StreamResult<Option<Bijection>, D1::Error, D2::Error>
where
    D1: Dataset,
    D2: Dataset,
{
    dataset_bijection_with(d1, d2, &IsoOptions::default())
}

/// Computes a [`Bijection`] between the blank nodes of two datasets,
/// if they are isomorphic, with the given options.
///
/// See [`dataset_bijection`].
pub fn dataset_bijection_with<D1, D2>(
    d1: &D1,
    d2: &D2,
    options: &IsoOptions,
) -> StreamResult<Option<Bijection>, D1::Error, D2::Error>
where
    D1: Dataset,
    D2: Dataset,
{
    bijection_with_hash::<Sha256, D1, D2>(d1, d2, options)
}

/// Computes a [`Bijection`] between the blank nodes of two datasets,
/// if they are isomorphic, using the [hash function](HashFunction) `H` for signatures.
///
/// See [`dataset_bijection`].
pub fn bijection_with_hash<H, D1, D2>(
    d1: &D1,
    d2: &D2,
    options: &IsoOptions,
) -> StreamResult<Option<Bijection>, D1::Error, D2::Error>
where
    H: HashFunction,
    D1: Dataset,
    D2: Dataset,
{
    let Some((b1, b2)) = split_blank_statements(d1, d2, options)? else {
        return Ok(None);
    };
    log::debug!(
        "comparing {} blank statements with {} blank nodes",
        b1.quads().len(),
        b1.node_count()
    );
    Ok(refine::<H>(
        &b1,
        &b2,
        &BTreeMap::new(),
        &BTreeMap::new(),
        options,
        0,
    ))
}
