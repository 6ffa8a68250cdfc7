use super::*;
use crate::term::SimpleTerm;
use std::collections::{BTreeSet, HashSet};
use std::error::Error;

fn iri(suffix: &str) -> SimpleTerm<'static> {
    SimpleTerm::iri_unchecked(format!("http://example.org/{suffix}"))
}

fn bnode(id: &str) -> SimpleTerm<'static> {
    SimpleTerm::bnode_unchecked(id.to_string())
}

fn make_triples() -> Vec<[SimpleTerm<'static>; 3]> {
    vec![
        [iri("s"), iri("p"), iri("o")],
        [iri("s"), iri("p"), bnode("b1")],
        [bnode("b1"), bnode("b2"), SimpleTerm::literal_lang_unchecked("chat", "fr")],
    ]
}

fn check_graph<G: Graph + ?Sized>(g: &G) -> Result<(), Box<dyn Error>> {
    assert_eq!(g.len()?, 3);
    assert!(!g.is_empty()?);
    assert!(g.contains(&iri("s"), &iri("p"), &iri("o"))?);
    assert!(g.contains(&iri("s"), &iri("p"), &bnode("b1"))?);
    assert!(g.contains(
        &bnode("b1"),
        &bnode("b2"),
        &SimpleTerm::literal_lang_unchecked("chat", "FR")
    )?);
    assert!(!g.contains(&iri("s"), &iri("p"), &bnode("b2"))?);
    assert!(!g.contains(&iri("o"), &iri("p"), &iri("s"))?);
    let blank_predicates = g
        .triples()
        .filter_ok(|t| t.p().is_blank_node())
        .count();
    assert_eq!(blank_predicates, 1);
    Ok(())
}

#[test]
fn vec() -> Result<(), Box<dyn Error>> {
    check_graph(&make_triples())
}

#[test]
fn slice() -> Result<(), Box<dyn Error>> {
    let v = make_triples();
    check_graph(&v[..])
}

#[test]
fn hash_set() -> Result<(), Box<dyn Error>> {
    let g: HashSet<_> = make_triples().into_iter().collect();
    check_graph(&g)
}

#[test]
fn btree_set() -> Result<(), Box<dyn Error>> {
    let g: BTreeSet<_> = make_triples().into_iter().collect();
    check_graph(&g)
}

#[test]
fn reference() -> Result<(), Box<dyn Error>> {
    let v = make_triples();
    let r = &v;
    check_graph(&r)
}

#[test]
fn empty() -> Result<(), Box<dyn Error>> {
    let g: Vec<[SimpleTerm; 3]> = vec![];
    assert!(Graph::is_empty(&g)?);
    assert_eq!(g.triples().count(), 0);
    Ok(())
}
