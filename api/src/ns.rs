//! Standard namespaces.
//!
//! This module provides:
//! * the [`namespace`] macro, for defining static namespaces;
//! * modules corresponding to the namespaces needed by Bijou
//!   (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use bijou_api::ns::{rdf, xsd};
//! use bijou_api::term::Term;
//!
//! assert!(xsd::integer.is("http://www.w3.org/2001/XMLSchema#integer"));
//! assert_eq!(&*rdf::type_.iri().unwrap(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! ```
use mownstr::MownStr;
use std::fmt;

#[macro_use]
mod _macro;
pub use _macro::*;
mod _term;
pub use _term::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        List,
        Property,
        Statement,
        // datatypes
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
///
/// Only the datatypes supported by [`canonical`](crate::term::canonical) are listed,
/// in addition to `xsd:string`.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        boolean,
        float,
        double,
        string,
        decimal,
            integer,
                nonPositiveInteger,
                    negativeInteger,
                long,
                    int,
                        short,
                            byte,
                nonNegativeInteger,
                    unsignedLong,
                        unsignedInt,
                            unsignedShort,
                                unsignedByte,
                    positiveInteger
    );
}
