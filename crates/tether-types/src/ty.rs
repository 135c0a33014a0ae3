//! The host-side type model.
//!
//! `HostClass` is the closed set of class tags the adaptation engine
//! understands; `TypeExpr` is a possibly-generic type expression as
//! written at a use site (it may reference type parameters); and
//! `TypeDescriptor` is the resolved form the dispatcher works with.

use std::fmt;

use serde::Serialize;

/// Width of an integer target type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
}

/// Width of a floating-point target type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Width of an atomic counter target type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CounterWidth {
    C32,
    C64,
}

/// A host-side class tag.
///
/// `Named` identifies a user-declared logic class by its host name; all
/// other tags are built into the engine. `Any` is the fully generic
/// target (every class is assignable to it), `Term` requests the raw
/// term without conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HostClass {
    /// The fully generic target type.
    Any,
    Bool,
    Char,
    Str,
    Int(IntWidth),
    Float(FloatWidth),
    /// Arbitrary-precision integer, constructed from the term's i64.
    BigInt,
    /// Decimal numeric, constructed from the term's f64.
    Decimal,
    /// Shared atomic counter.
    Counter(CounterWidth),
    /// Calendar-like value, epoch milliseconds.
    Timestamp,
    /// Order-preserving sequence; one type parameter.
    List,
    /// Key-value mapping; two type parameters.
    Map,
    /// A single key-value pair; two type parameters.
    Entry,
    /// The raw term type (no conversion).
    Term,
    /// A user-declared logic class, by host name.
    Named(String),
}

impl HostClass {
    /// The generic arity of a built-in class. `None` for `Named` classes,
    /// whose arity lives in their declaration.
    pub fn builtin_arity(&self) -> Option<usize> {
        match self {
            HostClass::List => Some(1),
            HostClass::Map | HostClass::Entry => Some(2),
            HostClass::Named(_) => None,
            _ => Some(0),
        }
    }
}

impl fmt::Display for HostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostClass::Any => write!(f, "Any"),
            HostClass::Bool => write!(f, "Bool"),
            HostClass::Char => write!(f, "Char"),
            HostClass::Str => write!(f, "Str"),
            HostClass::Int(IntWidth::I8) => write!(f, "Int8"),
            HostClass::Int(IntWidth::I16) => write!(f, "Int16"),
            HostClass::Int(IntWidth::I32) => write!(f, "Int32"),
            HostClass::Int(IntWidth::I64) => write!(f, "Int64"),
            HostClass::Float(FloatWidth::F32) => write!(f, "Float32"),
            HostClass::Float(FloatWidth::F64) => write!(f, "Float64"),
            HostClass::BigInt => write!(f, "BigInt"),
            HostClass::Decimal => write!(f, "Decimal"),
            HostClass::Counter(CounterWidth::C32) => write!(f, "Counter32"),
            HostClass::Counter(CounterWidth::C64) => write!(f, "Counter64"),
            HostClass::Timestamp => write!(f, "Timestamp"),
            HostClass::List => write!(f, "List"),
            HostClass::Map => write!(f, "Map"),
            HostClass::Entry => write!(f, "Entry"),
            HostClass::Term => write!(f, "Term"),
            HostClass::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A type expression as written at a use site.
///
/// Unlike a descriptor, an expression may reference type parameters of
/// an enclosing generic declaration (`Param`). Resolution against a
/// binding environment turns an expression into a `TypeDescriptor`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeExpr {
    /// A class reference with zero or more type arguments.
    Class(HostClass, Vec<TypeExpr>),
    /// An array of some element type.
    Array(Box<TypeExpr>),
    /// A reference to a type parameter, e.g. `T`.
    Param(String),
}

impl TypeExpr {
    /// A non-generic class reference.
    pub fn class(class: HostClass) -> TypeExpr {
        TypeExpr::Class(class, Vec::new())
    }

    /// A generic class reference with arguments.
    pub fn generic(class: HostClass, args: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Class(class, args)
    }

    /// An array-of-element expression.
    pub fn array(elem: TypeExpr) -> TypeExpr {
        TypeExpr::Array(Box::new(elem))
    }

    /// A type parameter reference.
    pub fn param(name: impl Into<String>) -> TypeExpr {
        TypeExpr::Param(name.into())
    }
}

/// A resolved target type.
///
/// Invariant: a `Concrete` descriptor's argument count matches the
/// generic arity of its class (arguments that could not be resolved are
/// present as `Unresolved`, never missing). `Unresolved` is an open
/// request to adapt against the most general applicable type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeDescriptor {
    /// A concrete class with resolved type arguments.
    Concrete {
        class: HostClass,
        args: Vec<TypeDescriptor>,
    },
    /// An array of some element type.
    ArrayOf(Box<TypeDescriptor>),
    /// A type variable with no known binding (erasure fallback).
    Unresolved,
}

impl TypeDescriptor {
    /// A non-generic concrete descriptor.
    pub fn of(class: HostClass) -> TypeDescriptor {
        TypeDescriptor::Concrete {
            class,
            args: Vec::new(),
        }
    }

    /// A generic concrete descriptor.
    pub fn generic(class: HostClass, args: Vec<TypeDescriptor>) -> TypeDescriptor {
        TypeDescriptor::Concrete { class, args }
    }

    /// An array descriptor.
    pub fn array(elem: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::ArrayOf(Box::new(elem))
    }

    /// The fully generic `Any` descriptor.
    pub fn any() -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Any)
    }

    /// The string descriptor.
    pub fn string() -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Str)
    }

    /// A 64-bit integer descriptor.
    pub fn long() -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Int(IntWidth::I64))
    }

    /// A 64-bit float descriptor.
    pub fn double() -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Float(FloatWidth::F64))
    }

    /// The raw-term descriptor.
    pub fn term() -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Term)
    }

    /// The calendar-like descriptor.
    pub fn timestamp() -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Timestamp)
    }

    /// A `List<T>` descriptor.
    pub fn list_of(elem: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::generic(HostClass::List, vec![elem])
    }

    /// A `Map<K, V>` descriptor.
    pub fn map_of(key: TypeDescriptor, value: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::generic(HostClass::Map, vec![key, value])
    }

    /// An `Entry<K, V>` descriptor.
    pub fn entry_of(key: TypeDescriptor, value: TypeDescriptor) -> TypeDescriptor {
        TypeDescriptor::generic(HostClass::Entry, vec![key, value])
    }

    /// A user-declared class descriptor.
    pub fn named(name: impl Into<String>) -> TypeDescriptor {
        TypeDescriptor::of(HostClass::Named(name.into()))
    }

    /// The erased class of this descriptor, when it has one.
    pub fn erasure(&self) -> Option<&HostClass> {
        match self {
            TypeDescriptor::Concrete { class, .. } => Some(class),
            _ => None,
        }
    }

    /// The resolved type arguments (empty for arrays and unresolved).
    pub fn type_args(&self) -> &[TypeDescriptor] {
        match self {
            TypeDescriptor::Concrete { args, .. } => args,
            _ => &[],
        }
    }

    /// Whether this descriptor is the fully generic `Any`.
    pub fn is_any(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Concrete {
                class: HostClass::Any,
                ..
            }
        )
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Concrete { class, args } => {
                write!(f, "{}", class)?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, a) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", a)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeDescriptor::ArrayOf(elem) => write!(f, "{}[]", elem),
            TypeDescriptor::Unresolved => write!(f, "?"),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
