//! Bidirectional term/object adaptation for the tether engine.
//!
//! The crate's center is the dispatcher in [`from_term`]: given a term
//! and a requested type, it selects and executes a conversion strategy
//! against the ambient [`LogicEnv`] (type declarations plus the
//! logic-class registry). [`to_term`] is the inverse direction, and
//! [`solutions`] composes the dispatcher over query solution streams.

mod env;
mod error;
mod from_term;
mod registry;
mod solutions;
mod to_term;
mod value;

pub use env::{AlreadyInitialized, LogicEnv};
pub use error::AdaptError;
pub use from_term::{adapt, adapt_untyped};
pub use registry::{AdaptingContext, ClassDescriptor, ClassRegistry, FieldSpec, TermConverter};
pub use solutions::{
    collect_solutions, first_solution, SolutionCursor, SolutionIter, Solutions,
};
pub use to_term::{adapt_to_term, PAIR_FUNCTOR};
pub use value::{Counter, Instance, Value};
