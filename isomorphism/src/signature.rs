//! I compute the signatures of blank nodes.
//!
//! The signature of a blank node is a digest of the statements it occurs in,
//! where other blank nodes are represented by their own signature once it is *grounded*
//! (i.e. known to be stable), or by a placeholder otherwise.
use crate::ground::BlankStatements;
use crate::hash::{hex, HashFunction};
use crate::iso_term::IsoTerm;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Signatures of blank nodes, indexed by label.
pub(crate) type SignatureMap<H> = BTreeMap<Rc<str>, <H as HashFunction>::Output>;

const ITSELF: &str = "itself";
const UNGROUNDED: &str = "a blank node";
const SEPARATOR: &str = " ";

/// The signatures of all the blank nodes of a dataset.
#[derive(Clone, Debug)]
pub(crate) struct Signatures<H: HashFunction> {
    /// Stable signatures, for the nodes that have one.
    pub grounded: SignatureMap<H>,
    /// Latest signature of every node
    /// (identical to the grounded one for grounded nodes).
    pub tentative: SignatureMap<H>,
}

impl<H: HashFunction> Signatures<H> {
    pub fn is_grounded(&self, node: &str) -> bool {
        self.grounded.contains_key(node)
    }

    /// Whether every node has a grounded signature.
    pub fn all_grounded(&self) -> bool {
        self.grounded.len() == self.tentative.len()
    }
}

/// Compute the signatures of all blank nodes in `statements`.
///
/// Nodes in `seed` keep the signature they have there,
/// and are considered grounded.
pub(crate) fn hash_nodes<H: HashFunction>(
    statements: &BlankStatements,
    seed: &SignatureMap<H>,
) -> Signatures<H> {
    let mut grounded = seed.clone();
    let mut tentative = BTreeMap::new();
    loop {
        // iterate until no more node gets grounded
        loop {
            let mut newly_grounded = vec![];
            for (node, indices) in statements.incidence() {
                if grounded.contains_key(node) {
                    continue;
                }
                let (signature, is_grounded) =
                    node_signature::<H>(node, indices, statements, &grounded);
                tentative.insert(node.clone(), signature);
                if is_grounded {
                    newly_grounded.push(node.clone());
                }
            }
            if newly_grounded.is_empty() {
                break;
            }
            // nodes grounded in this pass only affect the next pass,
            // otherwise the result would depend on the order of labels
            for node in newly_grounded {
                grounded.insert(node.clone(), tentative[&node]);
            }
        }
        if !promote_unique::<H>(&mut grounded, &tentative) {
            break;
        }
    }
    for (node, signature) in &grounded {
        tentative.insert(node.clone(), *signature);
    }
    debug_assert!({
        for (node, signature) in &tentative {
            log::trace!(
                "signature(_:{}) = {}{}",
                node,
                hex(signature),
                if grounded.contains_key(node) { " (grounded)" } else { "" },
            );
        }
        true
    });
    Signatures {
        grounded,
        tentative,
    }
}

/// Ground the ungrounded nodes whose tentative signature is shared by no other ungrounded node.
///
/// Return whether any node was promoted.
fn promote_unique<H: HashFunction>(
    grounded: &mut SignatureMap<H>,
    tentative: &SignatureMap<H>,
) -> bool {
    let mut counts = BTreeMap::<H::Output, usize>::new();
    for (node, signature) in tentative {
        if !grounded.contains_key(node) {
            *counts.entry(*signature).or_default() += 1;
        }
    }
    let unique: Vec<_> = tentative
        .iter()
        .filter(|(node, signature)| !grounded.contains_key(*node) && counts[*signature] == 1)
        .map(|(node, signature)| (node.clone(), *signature))
        .collect();
    let promoted = !unique.is_empty();
    grounded.extend(unique);
    promoted
}

/// Compute the signature of `node`,
/// and whether it only depends on grounded signatures.
fn node_signature<H: HashFunction>(
    node: &Rc<str>,
    indices: &[usize],
    statements: &BlankStatements,
    grounded: &SignatureMap<H>,
) -> (H::Output, bool) {
    let mut is_grounded = true;
    let mut statement_signatures: Vec<H::Output> = indices
        .iter()
        .map(|i| {
            let (spo, g) = &statements.quads()[*i];
            let mut hasher = H::initialize();
            for term in spo.iter().chain(g) {
                match term {
                    IsoTerm::Ground(txt) => hasher.update(txt.as_bytes()),
                    IsoTerm::Blank(label) if label == node => hasher.update(ITSELF),
                    IsoTerm::Blank(label) => match grounded.get(label) {
                        Some(signature) => hasher.update(hex(signature)),
                        None => {
                            is_grounded = false;
                            hasher.update(UNGROUNDED);
                        }
                    },
                }
                hasher.update(SEPARATOR);
            }
            hasher.finalize()
        })
        .collect();
    statement_signatures.sort_unstable();
    let mut hasher = H::initialize();
    for signature in &statement_signatures {
        hasher.update(signature);
    }
    (hasher.finalize(), is_grounded)
}

/// A synthetic signature, assigned to a pair of blank nodes
/// that are speculatively mapped to each other.
///
/// It is derived from the label of the node in the first dataset,
/// so that it is distinct for each pinned pair.
pub(crate) fn pin_signature<H: HashFunction>(node: &str) -> H::Output {
    let mut hasher = H::initialize();
    hasher.update("pinned");
    hasher.update(SEPARATOR);
    hasher.update(node);
    hasher.finalize()
}
