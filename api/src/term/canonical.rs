//! Canonical lexical forms of literals.
//!
//! Several lexical forms may denote the same value
//! (e.g. `"01"^^xsd:integer` and `"1"^^xsd:integer`).
//! The XML Schema datatypes define, for each value,
//! a *canonical* lexical form.
//! The functions in this module compute it for the most common numeric and boolean datatypes.
//!
//! Lexical forms that are not valid for their datatype,
//! and datatypes that are not supported,
//! are left unchanged.

use crate::ns::xsd;
use lazy_static::lazy_static;
use mownstr::MownStr;
use regex::Regex;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^([+-])?0*([0-9]+)$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^([+-])?([0-9]*)(?:\.([0-9]*))?$").unwrap();
    static ref DOUBLE: Regex =
        Regex::new(r"^([+-])?([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$").unwrap();
}

/// Return the canonical lexical form of `lex`, interpreted with the given `datatype`.
///
/// If `lex` is already canonical, or can not be canonicalized,
/// it is returned unchanged (and no allocation occurs).
pub fn canonical_lexical_form<'a>(lex: MownStr<'a>, datatype: &str) -> MownStr<'a> {
    let Some(local) = datatype.strip_prefix(xsd::PREFIX) else {
        return lex;
    };
    let canonical = match local {
        "integer" | "long" | "int" | "short" | "byte" | "nonNegativeInteger"
        | "nonPositiveInteger" | "positiveInteger" | "negativeInteger" | "unsignedLong"
        | "unsignedInt" | "unsignedShort" | "unsignedByte" => canonical_integer(&lex),
        "decimal" => canonical_decimal(&lex),
        "double" | "float" => canonical_double(&lex),
        "boolean" => canonical_boolean(&lex),
        _ => None,
    };
    match canonical {
        Some(txt) if txt != *lex => txt.into(),
        _ => lex,
    }
}

/// Return the canonical form of a language tag (i.e. lowercase).
pub fn canonical_language_tag(tag: MownStr) -> MownStr {
    if tag.bytes().any(|b| b.is_ascii_uppercase()) {
        tag.to_ascii_lowercase().into()
    } else {
        tag
    }
}

/// Canonical form of `xsd:integer`: no leading `+`, no leading zeros, `0` is unsigned.
pub fn canonical_integer(lex: &str) -> Option<String> {
    let caps = INTEGER.captures(lex.trim())?;
    let digits = &caps[2];
    let negative = caps.get(1).map(|m| m.as_str()) == Some("-");
    if negative && digits != "0" {
        Some(format!("-{digits}"))
    } else {
        Some(digits.to_string())
    }
}

/// Canonical form of `xsd:decimal`: no leading `+`, no leading or trailing zeros,
/// but at least one digit on each side of the decimal point (e.g. `1.0`, `0.5`).
pub fn canonical_decimal(lex: &str) -> Option<String> {
    let caps = DECIMAL.captures(lex.trim())?;
    let int = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let frac = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let int = match int.trim_start_matches('0') {
        "" => "0",
        int => int,
    };
    let frac = match frac.trim_end_matches('0') {
        "" => "0",
        frac => frac,
    };
    let negative = caps.get(1).map(|m| m.as_str()) == Some("-");
    if negative && (int != "0" || frac != "0") {
        Some(format!("-{int}.{frac}"))
    } else {
        Some(format!("{int}.{frac}"))
    }
}

/// Canonical form of `xsd:double` and `xsd:float`:
/// scientific notation with exactly one non-zero digit before the decimal point
/// (e.g. `1.5E2`, `0.0E0`), or one of `INF`, `-INF` and `NaN`.
pub fn canonical_double(lex: &str) -> Option<String> {
    let lex = lex.trim();
    match lex {
        "INF" | "+INF" => return Some("INF".into()),
        "-INF" => return Some("-INF".into()),
        "NaN" => return Some("NaN".into()),
        _ => (),
    }
    let caps = DOUBLE.captures(lex)?;
    let int = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let frac = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let exp: i64 = match caps.get(4) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let sign = if caps.get(1).map(|m| m.as_str()) == Some("-") {
        "-"
    } else {
        ""
    };
    let digits = format!("{int}{frac}");
    let Some(first) = digits.find(|c| c != '0') else {
        return Some(format!("{sign}0.0E0"));
    };
    let significant = digits[first..].trim_end_matches('0');
    let (head, tail) = significant.split_at(1);
    let tail = if tail.is_empty() { "0" } else { tail };
    let exp = exp.checked_add(int.len() as i64 - first as i64 - 1)?;
    Some(format!("{sign}{head}.{tail}E{exp}"))
}

/// Canonical form of `xsd:boolean`: `true` or `false`.
pub fn canonical_boolean(lex: &str) -> Option<String> {
    match lex.trim() {
        "true" | "1" => Some("true".into()),
        "false" | "0" => Some("false".into()),
        _ => None,
    }
}
