use super::*;
use crate::term::{Term, TermKind};

/// A [`Term`] produced by the [`namespace!`] macro.
///
/// It stores the IRI in two parts (namespace and suffix),
/// so that the namespace can be shared by multiple distinct terms.
#[derive(Clone, Copy, Debug)]
pub struct NsTerm<'a> {
    pub(crate) ns: &'a str,
    /// NB: suffix must satisfy that ns+suffix is still a valid IRI
    pub(crate) suffix: &'a str,
}

impl fmt::Display for NsTerm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ns, self.suffix)
    }
}

impl<'a> NsTerm<'a> {
    /// Make an NsTerm without checking that it produces a valid IRI.
    pub const fn new_unchecked(ns: &'a str, suffix: &'a str) -> Self {
        NsTerm { ns, suffix }
    }

    /// Check whether `iri` is the IRI of this term.
    ///
    /// This is cheaper than building the IRI with [`iri_string`](NsTerm::iri_string).
    pub fn is(&self, iri: &str) -> bool {
        iri.strip_prefix(self.ns) == Some(self.suffix)
    }

    /// Return the full IRI of this term.
    pub fn iri_string(&self) -> String {
        self.to_string()
    }
}

impl<'a> Term for NsTerm<'a> {
    fn kind(&self) -> TermKind {
        TermKind::Iri
    }
    fn iri(&self) -> Option<MownStr<'_>> {
        Some(if self.suffix.is_empty() {
            self.ns.into()
        } else {
            self.iri_string().into()
        })
    }
}

impl<'a, T: Term> PartialEq<T> for NsTerm<'a> {
    fn eq(&self, other: &T) -> bool {
        match other.iri() {
            Some(iri) => self.is(&iri),
            None => false,
        }
    }
}

impl<'a> Eq for NsTerm<'a> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::SimpleTerm;

    #[test]
    fn ns_term_eq() {
        let ns = "http://example.org/";
        let t1a = NsTerm { ns, suffix: "foo" };
        let t2a = NsTerm {
            ns,
            suffix: "foo/bar",
        };
        let t3a = NsTerm { ns, suffix: "bar" };
        let t1b = SimpleTerm::iri_unchecked("http://example.org/foo");
        let t2b = SimpleTerm::iri_unchecked("http://example.org/foo/bar");
        let t3b = SimpleTerm::iri_unchecked("http://example.org/bar");

        assert!(t1a == t1b);
        assert!(t2a == t2b);
        assert!(t3a == t3b);
        assert!(t1a != t2b);
        assert!(t2a != t3b);
        assert!(t3a != t1b);
    }

    #[test]
    fn ns_term_is_not_a_literal() {
        let lit = SimpleTerm::literal_dt_unchecked("http://example.org/foo", "http://example.org/foo");
        let t = NsTerm::new_unchecked("http://example.org/", "foo");
        assert!(t != lit);
    }
}
