//! I split datasets into grounded statements (without any blank node)
//! and blank statements (with at least one blank node).
//!
//! Grounded statements must be the same on both sides;
//! blank statements are handed over to the signature hasher.
//!
//! Datasets are compared as multisets:
//! a statement yielded twice counts twice, on both sides.
use crate::iso_term::{IsoQuad, IsoTerm, IsoTermFactory};
use crate::IsoOptions;
use bijou_api::dataset::Dataset;
use bijou_api::quad::Quad;
use bijou_api::source::{SinkError, SourceError, StreamResult};
use bijou_api::term::Term;
use std::collections::BTreeMap;
use std::rc::Rc;

/// The statements of a dataset that contain blank nodes,
/// indexed by blank node.
#[derive(Clone, Debug)]
pub(crate) struct BlankStatements {
    quads: Vec<IsoQuad>,
    /// For each blank node, the indices (in `quads`) of the statements it occurs in.
    incidence: BTreeMap<Rc<str>, Vec<usize>>,
}

impl BlankStatements {
    fn new(mut quads: Vec<IsoQuad>) -> Self {
        quads.sort_unstable();
        let mut incidence = BTreeMap::<_, Vec<usize>>::new();
        for (i, (spo, g)) in quads.iter().enumerate() {
            for term in spo.iter().chain(g) {
                if let IsoTerm::Blank(label) = term {
                    let statements = incidence.entry(label.clone()).or_default();
                    if statements.last() != Some(&i) {
                        statements.push(i);
                    }
                }
            }
        }
        BlankStatements { quads, incidence }
    }

    /// The blank statements, sorted (duplicates are kept).
    pub fn quads(&self) -> &[IsoQuad] {
        &self.quads
    }

    /// All blank nodes, in ascending label order.
    pub fn nodes(&self) -> impl Iterator<Item = &Rc<str>> + '_ {
        self.incidence.keys()
    }

    /// The number of distinct blank nodes.
    pub fn node_count(&self) -> usize {
        self.incidence.len()
    }

    /// All blank nodes, in ascending label order,
    /// with the indices of the statements they occur in.
    pub fn incidence(&self) -> impl Iterator<Item = (&Rc<str>, &[usize])> + '_ {
        self.incidence
            .iter()
            .map(|(node, indices)| (node, &indices[..]))
    }
}

/// Check the grounded statements of `d1` and `d2`,
/// and return their blank statements if they match.
///
/// Returns `None` as soon as the datasets are proved non-isomorphic.
pub(crate) fn split_blank_statements<D1, D2>(
    d1: &D1,
    d2: &D2,
    options: &IsoOptions,
) -> StreamResult<Option<(BlankStatements, BlankStatements)>, D1::Error, D2::Error>
where
    D1: Dataset,
    D2: Dataset,
{
    let len1 = d1.len().map_err(SourceError)?;
    let len2 = d2.len().map_err(SinkError)?;
    if len1 != len2 {
        log::debug!("datasets have different sizes ({len1} != {len2})");
        return Ok(None);
    }

    let (grounded1, blank1) = partition(d1, options).map_err(SourceError)?;
    let (grounded2, blank2) = partition(d2, options).map_err(SinkError)?;
    // keys are exact, so equal sorted lists mean that every grounded statement of d1
    // is contained in d2, with the same multiplicity
    if grounded1 != grounded2 {
        log::debug!(
            "grounded statements differ ({} vs. {})",
            grounded1.len(),
            grounded2.len()
        );
        return Ok(None);
    }

    Ok(Some((BlankStatements::new(blank1), BlankStatements::new(blank2))))
}

/// Split the statements of `d` into
/// the sorted exact keys of its grounded statements,
/// and its blank statements.
fn partition<D: Dataset>(
    d: &D,
    options: &IsoOptions,
) -> Result<(Vec<IsoQuad>, Vec<IsoQuad>), D::Error> {
    let mut factory = IsoTermFactory::new(options.canonicalize_literals);
    let mut grounded = vec![];
    let mut blank = vec![];
    for q in d.quads() {
        let q = q?;
        if has_blank_node(&q) {
            let (spo, g) = q.spog();
            blank.push(factory.quad(spo, g));
        } else {
            grounded.push(grounded_key(&q));
        }
    }
    grounded.sort_unstable();
    Ok((grounded, blank))
}

fn has_blank_node<Q: Quad>(q: &Q) -> bool {
    q.s().is_blank_node()
        || q.p().is_blank_node()
        || q.o().is_blank_node()
        || q.g().map(|g| g.is_blank_node()).unwrap_or(false)
}

/// Exact representation of a grounded statement.
///
/// Two keys are equal iff the statements are equal according to [`Term::eq`].
fn grounded_key<Q: Quad>(q: &Q) -> IsoQuad {
    let ground = |t: &Q::Term| IsoTerm::ground(t, false);
    ([ground(q.s()), ground(q.p()), ground(q.o())], q.g().map(ground))
}
