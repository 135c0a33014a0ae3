//! Adaptation errors.
//!
//! Every failure carries the offending term or value and the requested
//! type, so callers can report exactly which conversion had no strategy.
//! The variable-to-null degradation is deliberately NOT an error: an
//! unbound variable legitimately carries no value.

use std::fmt;

use tether_term::Term;
use tether_types::TypeDescriptor;

use crate::value::Value;

/// An adaptation failure.
#[derive(Clone, Debug, PartialEq)]
pub enum AdaptError {
    /// No strategy could convert the term to the requested type.
    TermAdaptation { term: Term, ty: TypeDescriptor },
    /// No rule could serialize the value into a term.
    ObjectAdaptation {
        value: Value,
        ty: Option<TypeDescriptor>,
    },
    /// The term's shape matches a declared logic class, but the requested
    /// type is incompatible with that class.
    AmbiguousClass {
        term: Term,
        class: String,
        ty: TypeDescriptor,
    },
    /// A character target requires text of length exactly one.
    InvalidCharacterConversion { text: String },
    /// A single-value composition found no solutions.
    NoSolution,
}

impl fmt::Display for AdaptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdaptError::TermAdaptation { term, ty } => {
                write!(f, "no strategy to adapt term `{}` to type {}", term, ty)
            }
            AdaptError::ObjectAdaptation { value, ty } => match ty {
                Some(ty) => write!(
                    f,
                    "no rule to serialize value {:?} (declared type {}) as a term",
                    value, ty
                ),
                None => write!(f, "no rule to serialize value {:?} as a term", value),
            },
            AdaptError::AmbiguousClass { term, class, ty } => write!(
                f,
                "term `{}` matches logic class {}, which is incompatible with the requested type {}",
                term, class, ty
            ),
            AdaptError::InvalidCharacterConversion { text } => write!(
                f,
                "cannot convert text \"{}\" to a single character",
                text
            ),
            AdaptError::NoSolution => write!(f, "query produced no solutions"),
        }
    }
}

impl std::error::Error for AdaptError {}
