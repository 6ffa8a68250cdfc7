//! I pair the blank nodes of two datasets according to their signatures.
use crate::ground::BlankStatements;
use crate::hash::HashFunction;
use crate::iso_term::{IsoQuad, IsoTerm};
use crate::signature::Signatures;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

/// A one-to-one mapping from the blank node labels of a graph (or dataset)
/// to the blank node labels of another graph (or dataset).
pub type Bijection = BTreeMap<Rc<str>, Rc<str>>;

/// The outcome of [`extract`].
#[derive(Clone, Debug)]
pub(crate) enum Extraction {
    /// Every node is grounded and paired, and the pairing is an isomorphism.
    Complete(Bijection),
    /// Some nodes could only be paired tentatively.
    Partial {
        /// The tentative pairing of all nodes.
        mapping: Bijection,
        /// The ungrounded nodes of the first dataset, in ascending label order.
        unresolved1: Vec<Rc<str>>,
        /// The ungrounded nodes of the second dataset, in ascending label order.
        unresolved2: Vec<Rc<str>>,
    },
    /// The signatures can not be reconciled.
    Irreconcilable,
}

/// Pair the blank nodes of `b1` and `b2` having identical signatures.
pub(crate) fn extract<H: HashFunction>(
    b1: &BlankStatements,
    s1: &Signatures<H>,
    b2: &BlankStatements,
    s2: &Signatures<H>,
) -> Extraction {
    if b1.node_count() != b2.node_count()
        || sorted_values(&s1.grounded) != sorted_values(&s2.grounded)
        || sorted_values(&s1.tentative) != sorted_values(&s2.tentative)
    {
        return Extraction::Irreconcilable;
    }

    let mut candidates = BTreeMap::<H::Output, VecDeque<&Rc<str>>>::new();
    for node in b2.nodes() {
        candidates
            .entry(s2.tentative[node])
            .or_default()
            .push_back(node);
    }
    let mut mapping = Bijection::new();
    for node in b1.nodes() {
        // multisets of tentative signatures are equal, so a candidate always exists
        let Some(matched) = candidates
            .get_mut(&s1.tentative[node])
            .and_then(VecDeque::pop_front)
        else {
            return Extraction::Irreconcilable;
        };
        mapping.insert(node.clone(), matched.clone());
    }

    if s1.all_grounded() && s2.all_grounded() {
        if verify(b1, b2, &mapping) {
            Extraction::Complete(mapping)
        } else {
            log::debug!("signatures collision: bijection does not preserve statements");
            Extraction::Irreconcilable
        }
    } else {
        let unresolved = |b: &BlankStatements, s: &Signatures<H>| -> Vec<Rc<str>> {
            b.nodes()
                .filter(|node| !s.is_grounded(node))
                .cloned()
                .collect()
        };
        Extraction::Partial {
            mapping,
            unresolved1: unresolved(b1, s1),
            unresolved2: unresolved(b2, s2),
        }
    }
}

/// Check that renaming the blank nodes of `b1` through `mapping` yields exactly `b2`.
pub(crate) fn verify(b1: &BlankStatements, b2: &BlankStatements, mapping: &Bijection) -> bool {
    let rename = |t: &IsoTerm| match t {
        IsoTerm::Blank(label) => mapping.get(label).cloned().map(IsoTerm::Blank),
        IsoTerm::Ground(_) => Some(t.clone()),
    };
    let renamed: Option<Vec<IsoQuad>> = b1
        .quads()
        .iter()
        .map(|(spo, g)| {
            let [s, p, o] = spo;
            let g = match g {
                Some(g) => Some(rename(g)?),
                None => None,
            };
            Some(([rename(s)?, rename(p)?, rename(o)?], g))
        })
        .collect();
    let Some(mut renamed) = renamed else {
        return false;
    };
    renamed.sort_unstable();
    renamed == b2.quads()
}

fn sorted_values<K, V: Copy + Ord>(map: &BTreeMap<K, V>) -> Vec<V> {
    let mut values: Vec<V> = map.values().copied().collect();
    values.sort_unstable();
    values
}
