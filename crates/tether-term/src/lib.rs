//! Term representation for the tether adaptation engine.
//!
//! Defines the core `Term` enum -- the logic engine's native value model:
//! atoms, compounds (including lists), integers, floats, and variables.
//! Terms are immutable value objects, created by the logic engine or by
//! the object-to-term adapter and consumed read-only everywhere else.

mod display;
mod names;

pub use names::{camel_to_functor, functor_to_camel, functor_to_class};

use serde::Serialize;

/// The functor of a list cons cell: `'.'(Head, Tail)`.
pub const LIST_FUNCTOR: &str = ".";

/// The name of the empty-list atom.
pub const NIL_NAME: &str = "[]";

/// A logic-engine term.
///
/// A list is not a separate variant: it is a right-nested `Compound`
/// chain using [`LIST_FUNCTOR`] terminated by the [`NIL_NAME`] atom.
/// List length equals chain depth.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Term {
    /// A named constant: `foo`, `[]`, `'hello world'`.
    Atom(String),
    /// A functor applied to one or more arguments: `point(1, 2)`.
    Compound { functor: String, args: Vec<Term> },
    /// An integer term.
    Int(i64),
    /// A floating-point term.
    Float(f64),
    /// A variable; `None` is the anonymous variable `_`.
    Var(Option<String>),
}

impl Term {
    /// Create an atom term.
    pub fn atom(name: impl Into<String>) -> Term {
        Term::Atom(name.into())
    }

    /// Create a compound term. An empty argument list degrades to an atom,
    /// mirroring the engine's own term construction.
    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Term {
        let functor = functor.into();
        if args.is_empty() {
            Term::Atom(functor)
        } else {
            Term::Compound { functor, args }
        }
    }

    /// Create a named variable term.
    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(Some(name.into()))
    }

    /// Create an anonymous variable term (`_`).
    pub fn anon() -> Term {
        Term::Var(None)
    }

    /// The empty-list atom `[]`.
    pub fn nil() -> Term {
        Term::Atom(NIL_NAME.to_string())
    }

    /// Build a proper list term from elements, right-to-left.
    pub fn list(elems: impl IntoIterator<Item = Term>) -> Term {
        let elems: Vec<Term> = elems.into_iter().collect();
        elems.into_iter().rev().fold(Term::nil(), |tail, head| {
            Term::Compound {
                functor: LIST_FUNCTOR.to_string(),
                args: vec![head, tail],
            }
        })
    }

    /// The functor name of this term: atoms are functor/0, compounds
    /// functor/n. Numeric and variable terms have no functor.
    pub fn functor(&self) -> Option<&str> {
        match self {
            Term::Atom(name) => Some(name),
            Term::Compound { functor, .. } => Some(functor),
            _ => None,
        }
    }

    /// The arity of this term (see [`Term::functor`]).
    pub fn arity(&self) -> Option<usize> {
        match self {
            Term::Atom(_) => Some(0),
            Term::Compound { args, .. } => Some(args.len()),
            _ => None,
        }
    }

    /// Whether this term is a cons cell (`'.'/2`).
    fn is_cons(&self) -> bool {
        matches!(self, Term::Compound { functor, args } if functor == LIST_FUNCTOR && args.len() == 2)
    }

    /// Whether this term is list-shaped: the empty list or a proper
    /// cons chain terminated by `[]`.
    pub fn is_list(&self) -> bool {
        let mut term = self;
        loop {
            match term {
                Term::Atom(name) if name == NIL_NAME => return true,
                Term::Compound { functor, args }
                    if functor == LIST_FUNCTOR && args.len() == 2 =>
                {
                    term = &args[1];
                }
                _ => return false,
            }
        }
    }

    /// Decompose a proper list into its elements. `None` when the term is
    /// not a proper list (including partial lists ending in a variable).
    pub fn as_list(&self) -> Option<Vec<&Term>> {
        let mut elems = Vec::new();
        let mut term = self;
        loop {
            match term {
                Term::Atom(name) if name == NIL_NAME => return Some(elems),
                Term::Compound { functor, args }
                    if functor == LIST_FUNCTOR && args.len() == 2 =>
                {
                    elems.push(&args[0]);
                    term = &args[1];
                }
                _ => return None,
            }
        }
    }

    /// Whether this term is numeric (`Int` or `Float`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Term::Int(_) | Term::Float(_))
    }

    /// The canonical textual form of this term.
    ///
    /// Integers and floats render as decimal text, atoms as their bare
    /// (unquoted) name, everything else as the full display rendering.
    /// This is the form numeric targets parse from.
    pub fn text(&self) -> String {
        match self {
            Term::Int(i) => i.to_string(),
            Term::Float(f) => format!("{:?}", f),
            Term::Atom(name) => name.clone(),
            other => other.to_string(),
        }
    }

    /// Read this term as an `i64`. Integer terms read directly; atoms
    /// whose name parses as an integer are accepted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Term::Int(i) => Some(*i),
            Term::Atom(name) => name.parse().ok(),
            _ => None,
        }
    }

    /// Read this term as an `f64`. Float terms read directly; integer
    /// terms widen; atoms whose name parses as a float are accepted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Term::Float(f) => Some(*f),
            Term::Int(i) => Some(*i as f64),
            Term::Atom(name) => name.parse().ok(),
            _ => None,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
