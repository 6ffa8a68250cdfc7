// this module is transparently re-exported by its parent `term`
use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle spec](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();

    /// A simplified [BCP47](https://tools.ietf.org/search/bcp47) language tag:
    /// alphabetic primary subtag, followed by any number of alphanumeric subtags.
    ///
    /// NB: it does not check that the subtags are registered codes.
    static ref LANG_TAG: Regex = Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap();
}

/// A straightforward implementation of [`Term`] as an enum.
#[derive(Clone, Debug)]
pub enum SimpleTerm<'a> {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(MownStr<'a>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(MownStr<'a>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    /// with a lexical form and a datatype IRI
    LiteralDatatype(MownStr<'a>, MownStr<'a>),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LiteralLanguage(MownStr<'a>, MownStr<'a>),
}

use SimpleTerm::*;

impl<'a> SimpleTerm<'a> {
    /// Build an IRI term,
    /// checking that `iri` is a valid absolute IRI.
    pub fn iri<M: Into<MownStr<'a>>>(iri: M) -> Result<Self, TermError> {
        let iri = iri.into();
        check_iri(&iri)?;
        Ok(Iri(iri))
    }

    /// Build an IRI term without checking it.
    pub fn iri_unchecked<M: Into<MownStr<'a>>>(iri: M) -> Self {
        Iri(iri.into())
    }

    /// Build a blank node,
    /// checking that `id` complies with Turtle's `BLANK_NODE_LABEL` (without the leading `_:`).
    pub fn bnode<M: Into<MownStr<'a>>>(id: M) -> Result<Self, TermError> {
        let id = id.into();
        if BNODE_ID.is_match(&id) {
            Ok(BlankNode(id))
        } else {
            Err(TermError::InvalidBnodeId(String::from(&*id)))
        }
    }

    /// Build a blank node without checking its label.
    pub fn bnode_unchecked<M: Into<MownStr<'a>>>(id: M) -> Self {
        BlankNode(id.into())
    }

    /// Build a datatyped literal,
    /// checking that `datatype` is a valid absolute IRI.
    ///
    /// NB: the lexical form is *not* checked against the datatype.
    pub fn literal_dt<M1, M2>(lex: M1, datatype: M2) -> Result<Self, TermError>
    where
        M1: Into<MownStr<'a>>,
        M2: Into<MownStr<'a>>,
    {
        let datatype = datatype.into();
        check_iri(&datatype)?;
        Ok(LiteralDatatype(lex.into(), datatype))
    }

    /// Build a datatyped literal without checking its datatype.
    pub fn literal_dt_unchecked<M1, M2>(lex: M1, datatype: M2) -> Self
    where
        M1: Into<MownStr<'a>>,
        M2: Into<MownStr<'a>>,
    {
        LiteralDatatype(lex.into(), datatype.into())
    }

    /// Build a language-tagged string,
    /// checking that `tag` is a valid language tag.
    pub fn literal_lang<M1, M2>(lex: M1, tag: M2) -> Result<Self, TermError>
    where
        M1: Into<MownStr<'a>>,
        M2: Into<MownStr<'a>>,
    {
        let tag = tag.into();
        if LANG_TAG.is_match(&tag) {
            Ok(LiteralLanguage(lex.into(), tag))
        } else {
            Err(TermError::InvalidLanguageTag(String::from(&*tag)))
        }
    }

    /// Build a language-tagged string without checking its tag.
    pub fn literal_lang_unchecked<M1, M2>(lex: M1, tag: M2) -> Self
    where
        M1: Into<MownStr<'a>>,
        M2: Into<MownStr<'a>>,
    {
        LiteralLanguage(lex.into(), tag.into())
    }

    /// Copy any [`Term`] into an owned [`SimpleTerm`].
    pub fn from_term<T: Term + ?Sized>(term: &T) -> SimpleTerm<'static> {
        match term.kind() {
            TermKind::Iri => Iri(owned(term.iri().unwrap())),
            TermKind::BlankNode => BlankNode(owned(term.bnode_id().unwrap())),
            TermKind::Literal => {
                let lex = owned(term.lexical_form().unwrap());
                match term.language_tag() {
                    Some(tag) => LiteralLanguage(lex, owned(tag)),
                    None => LiteralDatatype(lex, owned(term.datatype().unwrap())),
                }
            }
        }
    }

    /// Convert this term into a term that does not borrow any data.
    pub fn into_owned(self) -> SimpleTerm<'static> {
        match self {
            Iri(iri) => Iri(owned(iri)),
            BlankNode(id) => BlankNode(owned(id)),
            LiteralDatatype(lex, dt) => LiteralDatatype(owned(lex), owned(dt)),
            LiteralLanguage(lex, tag) => LiteralLanguage(owned(lex), owned(tag)),
        }
    }
}

fn check_iri(iri: &str) -> Result<(), TermError> {
    oxiri::Iri::parse(iri)
        .map(|_| ())
        .map_err(|err| TermError::InvalidIri {
            iri: iri.to_string(),
            reason: err.to_string(),
        })
}

fn owned(m: MownStr) -> MownStr<'static> {
    String::from(&*m).into()
}

impl<'a> Term for SimpleTerm<'a> {
    fn kind(&self) -> TermKind {
        match self {
            Iri(_) => TermKind::Iri,
            BlankNode(_) => TermKind::BlankNode,
            LiteralDatatype(..) | LiteralLanguage(..) => TermKind::Literal,
        }
    }
    fn iri(&self) -> Option<MownStr<'_>> {
        if let Iri(iri) = self {
            Some(MownStr::from(&iri[..]))
        } else {
            None
        }
    }
    fn bnode_id(&self) -> Option<MownStr<'_>> {
        if let BlankNode(id) = self {
            Some(MownStr::from(&id[..]))
        } else {
            None
        }
    }
    fn lexical_form(&self) -> Option<MownStr<'_>> {
        match self {
            LiteralDatatype(lex, _) | LiteralLanguage(lex, _) => Some(MownStr::from(&lex[..])),
            _ => None,
        }
    }
    fn datatype(&self) -> Option<MownStr<'_>> {
        match self {
            LiteralDatatype(_, dt) => Some(MownStr::from(&dt[..])),
            LiteralLanguage(..) => Some(MownStr::from(RDF_LANG_STRING)),
            _ => None,
        }
    }
    fn language_tag(&self) -> Option<MownStr<'_>> {
        if let LiteralLanguage(_, tag) = self {
            Some(MownStr::from(&tag[..]))
        } else {
            None
        }
    }
}

impl<T: Term + ?Sized> PartialEq<T> for SimpleTerm<'_> {
    fn eq(&self, other: &T) -> bool {
        Term::eq(self, other)
    }
}

impl Eq for SimpleTerm<'_> {}

impl std::hash::Hash for SimpleTerm<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Term::hash(self, state)
    }
}

impl<T: Term + ?Sized> PartialOrd<T> for SimpleTerm<'_> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(Term::cmp(self, other))
    }
}

impl Ord for SimpleTerm<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        Term::cmp(self, other)
    }
}

impl fmt::Display for SimpleTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&term_to_string(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::xsd;
    use test_case::test_case;

    #[test]
    fn iri_from_scratch() {
        let t = SimpleTerm::iri("http://example.org/").unwrap();
        assert_eq!(t.kind(), TermKind::Iri);
        assert_eq!(t.iri().as_deref(), Some("http://example.org/"));
        assert!(t.bnode_id().is_none());
        assert!(t.lexical_form().is_none());
        assert_eq!(t.to_string(), "<http://example.org/>");
    }

    #[test]
    fn bnode_from_scratch() {
        let t = SimpleTerm::bnode("b1").unwrap();
        assert_eq!(t.kind(), TermKind::BlankNode);
        assert_eq!(t.bnode_id().as_deref(), Some("b1"));
        assert!(t.iri().is_none());
        assert_eq!(t.to_string(), "_:b1");
    }

    #[test]
    fn literal_dt_from_scratch() {
        let t = SimpleTerm::literal_dt("42", xsd::integer.iri_string()).unwrap();
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(t.lexical_form().as_deref(), Some("42"));
        assert_eq!(
            t.datatype().as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#integer")
        );
        assert!(t.language_tag().is_none());
        assert_eq!(
            t.to_string(),
            r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#
        );
    }

    #[test]
    fn literal_lang_from_scratch() {
        let t = SimpleTerm::literal_lang("chat", "fr").unwrap();
        assert_eq!(t.kind(), TermKind::Literal);
        assert_eq!(t.lexical_form().as_deref(), Some("chat"));
        assert_eq!(t.datatype().as_deref(), Some(RDF_LANG_STRING));
        assert_eq!(t.language_tag().as_deref(), Some("fr"));
        assert_eq!(t.to_string(), r#""chat"@fr"#);
    }

    #[test]
    fn xsd_string_is_implicit() {
        let t = SimpleTerm::literal_dt("a \"quoted\"\nvalue", xsd::string.iri_string()).unwrap();
        assert_eq!(t.to_string(), r#""a \"quoted\"\nvalue""#);
    }

    #[test_case("x")]
    #[test_case("_"; "underscore")]
    #[test_case("foo_bar_baz")]
    #[test_case("hé_hé")]
    #[test_case("1")]
    #[test_case("a.b"; "with dot")]
    fn valid_bnode(id: &str) {
        assert!(SimpleTerm::bnode(id).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("a."; "trailing dot")]
    #[test_case(".b"; "leading dot")]
    #[test_case("a:b"; "with colon")]
    fn invalid_bnode(id: &str) {
        assert!(matches!(
            SimpleTerm::bnode(id),
            Err(TermError::InvalidBnodeId(_))
        ));
    }

    #[test_case("en")]
    #[test_case("en-US")]
    #[test_case("zh-Hant-TW")]
    fn valid_language_tag(tag: &str) {
        assert!(SimpleTerm::literal_lang("x", tag).is_ok());
    }

    #[test_case(""; "empty")]
    #[test_case("en_US"; "underscore")]
    #[test_case("-en"; "leading dash")]
    fn invalid_language_tag(tag: &str) {
        assert!(matches!(
            SimpleTerm::literal_lang("x", tag),
            Err(TermError::InvalidLanguageTag(_))
        ));
    }

    #[test_case("relative/iri"; "relative")]
    #[test_case("http://example.org/a b"; "space")]
    fn invalid_iri(iri: &str) {
        assert!(matches!(
            SimpleTerm::iri(iri),
            Err(TermError::InvalidIri { .. })
        ));
    }

    #[test]
    fn into_owned_preserves_value() {
        let data = String::from("http://example.org/");
        let owned = SimpleTerm::iri(data.as_str()).unwrap().into_owned();
        drop(data);
        assert_eq!(owned.iri().as_deref(), Some("http://example.org/"));
    }

    #[test]
    fn language_tags_are_case_insensitive() {
        let t1 = SimpleTerm::literal_lang("chat", "en-US").unwrap();
        let t2 = SimpleTerm::literal_lang("chat", "en-us").unwrap();
        assert_eq!(t1, t2);
        assert_eq!(Term::cmp(&t1, &t2), Ordering::Equal);
    }
}
