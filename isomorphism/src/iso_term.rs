//! I define [`IsoTerm`],
//! the closed representation of terms used internally by the algorithm.
use bijou_api::quad::Spog;
use bijou_api::term::canonical::canonical_language_tag;
use bijou_api::term::{write_nq, write_nq_literal, Term, TermKind};
use std::collections::BTreeSet;
use std::rc::Rc;

/// A term, as seen by the isomorphism algorithm.
///
/// Terms other than blank nodes are only ever compared with each other,
/// so they are reduced to their N-Quads form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum IsoTerm {
    Ground(Box<str>),
    Blank(Rc<str>),
}

pub(crate) type IsoQuad = Spog<IsoTerm>;

impl IsoTerm {
    /// Convert a term that is not a blank node.
    ///
    /// Language tags are always lowercased, consistently with [`Term::eq`].
    /// If `canonical` is true, lexical forms are replaced by their canonical form.
    pub fn ground<T: Term + ?Sized>(t: &T, canonical: bool) -> Self {
        let mut buffer = String::new();
        match (t.kind(), t.lexical_form()) {
            (TermKind::Literal, Some(lex)) => {
                let lex = if canonical {
                    t.canonical_lexical_form().unwrap_or(lex)
                } else {
                    lex
                };
                let tag = t.language_tag().map(canonical_language_tag);
                write_nq_literal(&lex, t.datatype().as_deref(), tag.as_deref(), &mut buffer);
            }
            _ => write_nq(t, &mut buffer),
        }
        IsoTerm::Ground(buffer.into())
    }
}

/// Convert terms into [`IsoTerm`]s,
/// sharing the label of each blank node.
#[derive(Debug)]
pub(crate) struct IsoTermFactory {
    canonical: bool,
    labels: BTreeSet<Rc<str>>,
}

impl IsoTermFactory {
    pub fn new(canonical: bool) -> Self {
        IsoTermFactory {
            canonical,
            labels: BTreeSet::new(),
        }
    }

    pub fn term<T: Term + ?Sized>(&mut self, t: &T) -> IsoTerm {
        match t.bnode_id() {
            Some(id) => IsoTerm::Blank(self.label(&id)),
            None => IsoTerm::ground(t, self.canonical),
        }
    }

    pub fn quad<T: Term + ?Sized>(&mut self, spo: [&T; 3], g: Option<&T>) -> IsoQuad {
        (spo.map(|t| self.term(t)), g.map(|t| self.term(t)))
    }

    fn label(&mut self, id: &str) -> Rc<str> {
        if let Some(label) = self.labels.get(id) {
            return label.clone();
        }
        let label: Rc<str> = Rc::from(id);
        self.labels.insert(label.clone());
        label
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bijou_api::ns::xsd;
    use bijou_api::term::SimpleTerm;

    fn ground_str(t: &SimpleTerm, canonical: bool) -> String {
        match IsoTerm::ground(t, canonical) {
            IsoTerm::Ground(txt) => txt.into(),
            IsoTerm::Blank(_) => unreachable!(),
        }
    }

    #[test]
    fn iri() {
        let t = SimpleTerm::iri_unchecked("http://example.org/");
        assert_eq!(ground_str(&t, false), "<http://example.org/>");
    }

    #[test]
    fn literals() {
        let t = SimpleTerm::literal_dt_unchecked("01", xsd::integer.iri_string());
        assert_eq!(
            ground_str(&t, false),
            "\"01\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(
            ground_str(&t, true),
            "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        let t = SimpleTerm::literal_dt_unchecked("a", xsd::string.iri_string());
        assert_eq!(ground_str(&t, true), "\"a\"");
    }

    #[test]
    fn language_tags_are_lowercased() {
        let t = SimpleTerm::literal_lang_unchecked("chat", "FR");
        assert_eq!(ground_str(&t, false), "\"chat\"@fr");
    }

    #[test]
    fn blank_labels_are_shared() {
        let mut factory = IsoTermFactory::new(false);
        let b = SimpleTerm::bnode_unchecked("b");
        let (IsoTerm::Blank(l1), IsoTerm::Blank(l2)) = (factory.term(&b), factory.term(&b)) else {
            panic!("expected blank nodes");
        };
        assert!(Rc::ptr_eq(&l1, &l2));
    }
}
