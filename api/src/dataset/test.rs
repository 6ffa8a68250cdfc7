use super::*;
use crate::quad::Spog;
use crate::term::SimpleTerm;
use std::collections::{BTreeSet, HashSet};
use std::error::Error;

fn iri(suffix: &str) -> SimpleTerm<'static> {
    SimpleTerm::iri_unchecked(format!("http://example.org/{suffix}"))
}

fn bnode(id: &str) -> SimpleTerm<'static> {
    SimpleTerm::bnode_unchecked(id.to_string())
}

const DEFAULT: Option<&SimpleTerm<'static>> = None;

fn make_quads() -> Vec<Spog<SimpleTerm<'static>>> {
    vec![
        ([iri("s"), iri("p"), iri("o")], None),
        ([iri("s"), iri("p"), iri("o")], Some(iri("g"))),
        ([iri("s"), iri("p"), bnode("b1")], Some(bnode("g1"))),
    ]
}

fn check_dataset<D: Dataset + ?Sized>(d: &D) -> Result<(), Box<dyn Error>> {
    assert_eq!(d.len()?, 3);
    assert!(!d.is_empty()?);
    assert!(d.contains(&iri("s"), &iri("p"), &iri("o"), DEFAULT)?);
    assert!(d.contains(&iri("s"), &iri("p"), &iri("o"), Some(&iri("g")))?);
    assert!(d.contains(&iri("s"), &iri("p"), &bnode("b1"), Some(&bnode("g1")))?);
    assert!(!d.contains(&iri("s"), &iri("p"), &bnode("b1"), DEFAULT)?);
    assert!(!d.contains(&iri("s"), &iri("p"), &iri("o"), Some(&iri("g2")))?);
    let named = d.quads().filter_ok(|q| q.g().is_some()).count();
    assert_eq!(named, 2);
    Ok(())
}

#[test]
fn vec() -> Result<(), Box<dyn Error>> {
    check_dataset(&make_quads())
}

#[test]
fn slice() -> Result<(), Box<dyn Error>> {
    let v = make_quads();
    check_dataset(&v[..])
}

#[test]
fn hash_set() -> Result<(), Box<dyn Error>> {
    let d: HashSet<_> = make_quads().into_iter().collect();
    check_dataset(&d)
}

#[test]
fn btree_set() -> Result<(), Box<dyn Error>> {
    let d: BTreeSet<_> = make_quads().into_iter().collect();
    check_dataset(&d)
}

#[test]
fn array_quads() -> Result<(), Box<dyn Error>> {
    let d = vec![[iri("s"), iri("p"), iri("o"), iri("g")]];
    assert!(d.contains(&iri("s"), &iri("p"), &iri("o"), Some(&iri("g")))?);
    assert!(!d.contains(&iri("s"), &iri("p"), &iri("o"), DEFAULT)?);
    Ok(())
}

#[test]
fn graph_names() {
    let g = iri("g");
    assert!(graph_name_eq(DEFAULT, DEFAULT));
    assert!(graph_name_eq(Some(&g), Some(&iri("g"))));
    assert!(!graph_name_eq(Some(&g), DEFAULT));
    assert!(!graph_name_eq(DEFAULT, Some(&g)));
}
