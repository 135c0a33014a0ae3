//! Prolog-style term rendering.
//!
//! Proper lists render as `[a, b, c]`, improper cons chains as `[a|T]`,
//! atoms are quoted when their name is not identifier-shaped, and the
//! anonymous variable renders as `_`.

use std::fmt;

use crate::{Term, LIST_FUNCTOR, NIL_NAME};

/// Whether an atom name can render without quotes: a lowercase letter
/// followed by letters, digits, and underscores, or the reserved `[]`.
fn is_bare_atom(name: &str) -> bool {
    if name == NIL_NAME {
        return true;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Write an atom name, quoting when necessary. Embedded quotes and
/// backslashes are escaped.
fn write_atom(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if is_bare_atom(name) {
        return write!(f, "{}", name);
    }
    write!(f, "'")?;
    for c in name.chars() {
        match c {
            '\'' => write!(f, "\\'")?,
            '\\' => write!(f, "\\\\")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "'")
}

/// Write a cons chain in list notation, falling back to `|` for an
/// improper tail.
fn write_cons<'a>(
    f: &mut fmt::Formatter<'_>,
    mut head: &'a Term,
    mut tail: &'a Term,
) -> fmt::Result {
    write!(f, "[")?;
    loop {
        write!(f, "{}", head)?;
        match tail {
            Term::Atom(name) if name == NIL_NAME => break,
            Term::Compound { functor, args }
                if functor == LIST_FUNCTOR && args.len() == 2 =>
            {
                write!(f, ", ")?;
                head = &args[0];
                tail = &args[1];
            }
            other => {
                write!(f, "|{}", other)?;
                break;
            }
        }
    }
    write!(f, "]")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) => write_atom(f, name),
            Term::Compound { functor, args }
                if functor == LIST_FUNCTOR && args.len() == 2 =>
            {
                write_cons(f, &args[0], &args[1])
            }
            Term::Compound { functor, args } => {
                write_atom(f, functor)?;
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Term::Int(i) => write!(f, "{}", i),
            Term::Float(x) => write!(f, "{:?}", x),
            Term::Var(Some(name)) => write!(f, "{}", name),
            Term::Var(None) => write!(f, "_"),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
