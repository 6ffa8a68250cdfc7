//! I resolve ambiguous blank nodes by backtracking.
//!
//! When some blank nodes can not be told apart by their signatures
//! (typically because of symmetries in the graph),
//! a pair of compatible nodes is speculatively *pinned* to the same synthetic signature,
//! which in turn refines the signatures of their neighbours.
//! If this leads to an inconsistency, another pair is tried.
use crate::bijection::{extract, Bijection, Extraction};
use crate::ground::BlankStatements;
use crate::hash::HashFunction;
use crate::signature::{hash_nodes, pin_signature, SignatureMap};
use crate::IsoOptions;

/// Search for a bijection between the blank nodes of `b1` and `b2`,
/// given the signatures already grounded in the current search branch.
///
/// Depth-first, first success.
/// Only the first unresolved node of `b1` is branched on at each level:
/// once all its candidates in `b2` have failed, no bijection extends the current branch.
pub(crate) fn refine<H: HashFunction>(
    b1: &BlankStatements,
    b2: &BlankStatements,
    seed1: &SignatureMap<H>,
    seed2: &SignatureMap<H>,
    options: &IsoOptions,
    depth: usize,
) -> Option<Bijection> {
    let s1 = hash_nodes::<H>(b1, seed1);
    let s2 = hash_nodes::<H>(b2, seed2);
    match extract(b1, &s1, b2, &s2) {
        Extraction::Complete(bijection) => {
            log::debug!("bijection found at depth {depth}");
            Some(bijection)
        }
        Extraction::Irreconcilable => {
            log::debug!("irreconcilable signatures at depth {depth}");
            None
        }
        Extraction::Partial {
            mapping,
            unresolved1,
            unresolved2,
        } => {
            log::debug!(
                "{} nodes tentatively paired, {} unresolved, at depth {depth}",
                mapping.len(),
                unresolved1.len()
            );
            if !options.may_recurse(depth) {
                log::warn!("maximum depth {depth} reached, giving up this branch");
                return None;
            }
            let n1 = unresolved1.first()?;
            // any bijection extending this branch maps n1 to one of these candidates,
            // so pinning another node of unresolved1 would only repeat the search
            let signature = s1.tentative[n1];
            for n2 in unresolved2.iter().filter(|n2| s2.tentative[*n2] == signature) {
                log::debug!("pinning _:{n1} to _:{n2} at depth {depth}");
                let pin = pin_signature::<H>(n1);
                let mut grounded1 = s1.grounded.clone();
                grounded1.insert(n1.clone(), pin);
                let mut grounded2 = s2.grounded.clone();
                grounded2.insert(n2.clone(), pin);
                let found = refine::<H>(b1, b2, &grounded1, &grounded2, options, depth + 1);
                if found.is_some() {
                    return found;
                }
                log::debug!("backtracking from _:{n1} -> _:{n2} at depth {depth}");
            }
            None
        }
    }
}
