// this module is transparently re-exported by its parent `term`
use super::{Term, TermKind};
use crate::ns::xsd;

/// Serialize a term in N-Quads into `buffer`.
///
/// Unlike the N-Quads serialization of a whole statement,
/// no trailing space is added.
pub fn write_nq<T: Term + ?Sized>(term: &T, buffer: &mut String) {
    match term.kind() {
        TermKind::Iri => {
            buffer.push('<');
            buffer.push_str(&term.iri().unwrap());
            buffer.push('>');
        }
        TermKind::Literal => {
            write_nq_literal(
                &term.lexical_form().unwrap(),
                term.datatype().as_deref(),
                term.language_tag().as_deref(),
                buffer,
            );
        }
        TermKind::BlankNode => {
            buffer.push_str("_:");
            buffer.push_str(&term.bnode_id().unwrap());
        }
    }
}

/// Serialize a literal in N-Quads into `buffer`,
/// from its individual parts.
///
/// If `tag` is `Some`, `datatype` is ignored.
/// If `datatype` is `xsd:string`, it is omitted.
pub fn write_nq_literal(lex: &str, datatype: Option<&str>, tag: Option<&str>, buffer: &mut String) {
    buffer.push('"');
    for c in lex.chars() {
        match c {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            '\t' => buffer.push_str("\\t"),
            '\x08' => buffer.push_str("\\b"),
            '\x0c' => buffer.push_str("\\f"),
            '\x7f' => buffer.push_str("\\u007F"),
            c if c <= '\x1f' => buffer.push_str(&format!("\\u{:04X}", c as u8)),
            _ => buffer.push(c),
        }
    }
    buffer.push('"');
    if let Some(tag) = tag {
        buffer.push('@');
        buffer.push_str(tag);
    } else if let Some(datatype) = datatype {
        if !xsd::string.is(datatype) {
            buffer.push_str("^^<");
            buffer.push_str(datatype);
            buffer.push('>');
        }
    }
}

/// Serialize a term in N-Quads.
///
/// This is the stable string form of terms,
/// used for example to compute signatures.
pub fn term_to_string<T: Term + ?Sized>(term: &T) -> String {
    let mut buffer = String::new();
    write_nq(term, &mut buffer);
    buffer
}
