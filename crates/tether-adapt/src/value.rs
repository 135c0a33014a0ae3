//! The host-side value model.
//!
//! `Value` is the closed set of host values the adaptation engine can
//! produce from terms and serialize back into terms. Structural shapes
//! (`Seq`, `Map`, `Entry`, `Instance`) hold further `Value`s; `Term` is
//! the raw passthrough for targets that want the term unconverted.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tether_term::Term;

/// A shared atomic counter value (the adaptation of atomic-counter
/// numeric wrapper targets). Cloning shares the underlying cell.
#[derive(Clone, Debug, Default)]
pub struct Counter(Arc<AtomicI64>);

impl Counter {
    pub fn new(initial: i64) -> Counter {
        Counter(Arc::new(AtomicI64::new(initial)))
    }

    /// The current count.
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Add to the count, returning the new value.
    pub fn add(&self, delta: i64) -> i64 {
        self.0.fetch_add(delta, Ordering::SeqCst) + delta
    }
}

impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

/// An instance of a declared logic class: the class's host name plus its
/// argument values in declared field order.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub class: String,
    pub args: Vec<Value>,
}

impl Instance {
    pub fn new(class: impl Into<String>, args: Vec<Value>) -> Instance {
        Instance {
            class: class.into(),
            args,
        }
    }
}

/// A host value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value (an unbound variable carries no value).
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    Float(f64),
    /// Arbitrary-precision integer, constructed from the term's i64.
    BigInt(i128),
    /// Decimal numeric, constructed from the term's f64.
    Decimal(f64),
    /// Shared atomic counter.
    Counter(Counter),
    Str(String),
    /// An ordered sequence (arrays and collections).
    Seq(Vec<Value>),
    /// An insertion-ordered key-value mapping.
    Map(Vec<(Value, Value)>),
    /// A single key-value pair.
    Entry(Box<Value>, Box<Value>),
    /// A calendar-like value: epoch milliseconds.
    Timestamp(i64),
    /// A raw, unconverted term.
    Term(Term),
    /// An instance of a declared logic class.
    Instance(Instance),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    pub fn entry(key: Value, value: Value) -> Value {
        Value::Entry(Box::new(key), Box::new(value))
    }

    /// Read this value as an `i64` when it carries one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Counter(c) => Some(c.get()),
            _ => None,
        }
    }

    /// Read this value as a string slice when it carries one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
