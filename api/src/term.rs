//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in Bijou.
//!
//! I provide the main trait [`Term`],
//! and a number of auxiliary types and functions, such as [`TermKind`], [`SimpleTerm`],
//! [`term_to_string`]...
use mownstr::MownStr;
use std::cmp::{Ord, Ordering};
use std::hash::{Hash, Hasher};

mod _error;
pub use _error::*;
mod _nq;
pub use _nq::*;
mod _simple;
pub use _simple::*;

pub mod canonical;


/// The IRI of the datatype of language-tagged strings.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// An RDF term.
///
/// # Implementation
///
/// The only method without a default implementation is [`kind`](Term::kind),
/// which indicates what kind of RDF term a given [`Term`] represents.
///
/// However, while all other accessors have a default implementation,
/// those corresponding to the supported kinds MUST be overridden accordingly,
/// otherwise they will panic.
///
/// Accessors return [`MownStr`], so that implementations are free
/// to store their data however they want,
/// and to build the requested string *on demand* if needed.
pub trait Term: std::fmt::Debug {
    /// Return the kind of RDF term that this [`Term`] represents.
    fn kind(&self) -> TermKind;

    /// Return true if this [`Term`] is an IRI,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::Iri`].
    #[inline]
    fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Return true if this [`Term`] is a blank node,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::BlankNode`].
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::Literal`].
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Iri`],
    /// return this IRI.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_iri`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn iri(&self) -> Option<MownStr<'_>> {
        self.is_iri()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::BlankNode`],
    /// return the locally unique label of this blank node.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_blank_node`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn bnode_id(&self) -> Option<MownStr<'_>> {
        self.is_blank_node()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the lexical form of this literal.
    /// Otherwise return `None`.
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn lexical_form(&self) -> Option<MownStr<'_>> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the datatype IRI of this literal.
    /// Otherwise return `None`.
    ///
    /// NB: if this literal is a language-tagged string,
    /// then this method MUST return [`RDF_LANG_STRING`].
    ///
    /// # Note to implementors
    /// The default implementation assumes that [`Term::is_literal`] always return false.
    /// If that is not the case, this method must be explicit implemented.
    #[inline]
    fn datatype(&self) -> Option<MownStr<'_>> {
        self.is_literal()
            .then(|| unimplemented!("Default implementation should have been overridden"))
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// and if this literal is a language-tagged string,
    /// return its language tag.
    /// Otherwise return `None`.
    ///
    /// The default implementation returns `None`,
    /// which is correct for implementations that do not support language-tagged strings.
    #[inline]
    fn language_tag(&self) -> Option<MownStr<'_>> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the [canonical](canonical) lexical form of this literal.
    /// Otherwise return `None`.
    ///
    /// Literals whose datatype has no known canonical representation,
    /// or whose lexical form is not valid for their datatype,
    /// are returned unchanged.
    fn canonical_lexical_form(&self) -> Option<MownStr<'_>> {
        let lex = self.lexical_form()?;
        if self.language_tag().is_some() {
            return Some(lex);
        }
        let datatype = self.datatype()?;
        Some(canonical::canonical_lexical_form(lex, &datatype))
    }

    /// Check whether `self` and `other` represent the same RDF term.
    ///
    /// Blank nodes are compared by label,
    /// which is only meaningful for two terms coming from the same graph.
    fn eq<T: Term + ?Sized>(&self, other: &T) -> bool {
        let k1 = self.kind();
        let k2 = other.kind();
        if k1 != k2 {
            return false;
        }
        match k1 {
            TermKind::Iri => self.iri().as_deref() == other.iri().as_deref(),
            TermKind::BlankNode => self.bnode_id().as_deref() == other.bnode_id().as_deref(),
            TermKind::Literal => {
                self.lexical_form().as_deref() == other.lexical_form().as_deref()
                    && match (self.language_tag(), other.language_tag()) {
                        (None, None) => self.datatype().as_deref() == other.datatype().as_deref(),
                        (Some(tag1), Some(tag2)) => tag1.eq_ignore_ascii_case(&tag2),
                        _ => false,
                    }
            }
        }
    }

    /// Compare two terms:
    /// * IRIs < literals < blank nodes
    /// * IRIs and blank nodes are ordered by their value
    /// * Literals are ordered by their datatype, then their language (if any),
    ///   then their lexical form
    ///
    /// NB: literals are ordered by their *lexical* form,
    /// so for example, `"10"^^xsd:integer` come *before* `"2"^^xsd:integer`.
    fn cmp<T: Term + ?Sized>(&self, other: &T) -> Ordering {
        let k1 = self.kind();
        let k2 = other.kind();
        k1.cmp(&k2).then_with(|| match k1 {
            TermKind::Iri => Ord::cmp(&self.iri().as_deref(), &other.iri().as_deref()),
            TermKind::BlankNode => {
                Ord::cmp(&self.bnode_id().as_deref(), &other.bnode_id().as_deref())
            }
            TermKind::Literal => Ord::cmp(&self.datatype().as_deref(), &other.datatype().as_deref())
                .then_with(|| {
                    let tag1 = self.language_tag().map(|t| t.to_ascii_lowercase());
                    let tag2 = other.language_tag().map(|t| t.to_ascii_lowercase());
                    tag1.cmp(&tag2)
                })
                .then_with(|| {
                    Ord::cmp(
                        &self.lexical_form().as_deref(),
                        &other.lexical_form().as_deref(),
                    )
                }),
        })
    }

    /// Compute an implementation-independant hash of this RDF term,
    /// consistent with [`Term::eq`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        let k = self.kind();
        k.hash(state);
        match k {
            TermKind::Iri => Hash::hash(&*self.iri().unwrap(), state),
            TermKind::BlankNode => Hash::hash(&*self.bnode_id().unwrap(), state),
            TermKind::Literal => {
                Hash::hash(&*self.lexical_form().unwrap(), state);
                match self.language_tag() {
                    None => Hash::hash(&*self.datatype().unwrap(), state),
                    Some(tag) => {
                        '@'.hash(state);
                        Hash::hash(&tag.to_ascii_lowercase(), state);
                    }
                }
            }
        }
    }
}

impl<'a, T> Term for &'a T
where
    T: Term + ?Sized,
{
    fn kind(&self) -> TermKind {
        (*self).kind()
    }
    fn iri(&self) -> Option<MownStr<'_>> {
        (*self).iri()
    }
    fn bnode_id(&self) -> Option<MownStr<'_>> {
        (*self).bnode_id()
    }
    fn lexical_form(&self) -> Option<MownStr<'_>> {
        (*self).lexical_form()
    }
    fn datatype(&self) -> Option<MownStr<'_>> {
        (*self).datatype()
    }
    fn language_tag(&self) -> Option<MownStr<'_>> {
        (*self).language_tag()
    }
    fn canonical_lexical_form(&self) -> Option<MownStr<'_>> {
        (*self).canonical_lexical_form()
    }
}
