//! Errors raised while declaring or resolving host types.

use std::fmt;

/// An error in a class declaration or a type expression.
///
/// Resolution itself degrades gracefully (an unbound parameter becomes
/// `Unresolved`, never an error); these errors cover structural problems
/// a declaration cannot recover from.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDeclError {
    /// A generic class was applied to the wrong number of arguments.
    ArityMismatch {
        class: String,
        expected: usize,
        found: usize,
    },
    /// A type expression references a named class with no declaration.
    UnknownClass { class: String },
    /// The same class name was declared twice.
    DuplicateClass { class: String },
}

impl fmt::Display for TypeDeclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDeclError::ArityMismatch {
                class,
                expected,
                found,
            } => write!(
                f,
                "class {} expects {} type argument(s), found {}",
                class, expected, found
            ),
            TypeDeclError::UnknownClass { class } => {
                write!(f, "unknown class in type expression: {}", class)
            }
            TypeDeclError::DuplicateClass { class } => {
                write!(f, "class declared twice: {}", class)
            }
        }
    }
}

impl std::error::Error for TypeDeclError {}
