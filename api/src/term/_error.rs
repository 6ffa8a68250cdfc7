// this module is transparently re-exported by its parent `term`
use thiserror::Error;

/// An error raised when building a term from invalid data.
#[derive(Debug, Error)]
pub enum TermError {
    /// The given IRI is not a valid absolute IRI.
    #[error("The given IRI '{iri}' is not valid: {reason}")]
    InvalidIri {
        /// The invalid IRI
        iri: String,
        /// Why it is invalid
        reason: String,
    },
    /// The given blank node identifier does not comply with Turtle's `BLANK_NODE_LABEL`.
    #[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
    InvalidBnodeId(String),
    /// The given language tag is not a valid BCP47 language tag.
    #[error("The given language tag '{0}' is not BCP47 compliant")]
    InvalidLanguageTag(String),
}
