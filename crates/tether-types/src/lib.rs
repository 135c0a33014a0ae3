//! Host type descriptors for the tether adaptation engine.
//!
//! Defines the host-side type model: `HostClass` tags, use-site type
//! expressions (`TypeExpr`), resolved descriptors (`TypeDescriptor`),
//! class declarations with ancestor instantiations, binding environments,
//! and the resolution and assignability procedures that direct term
//! adaptation.

mod error;
mod resolve;
mod ty;

pub use error::TypeDeclError;
pub use resolve::{
    ancestor_arguments, class_compatible, each_solution_type, is_subclass, resolve,
    BindingEnv, ClassDecl, Declarations,
};
pub use ty::{CounterWidth, FloatWidth, HostClass, IntWidth, TypeDescriptor, TypeExpr};
