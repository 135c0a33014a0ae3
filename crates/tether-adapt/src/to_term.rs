//! The value-to-term serializer.
//!
//! `adapt_to_term` is the inverse direction of the dispatcher: it turns
//! host values back into terms. The declared type, when given, refines
//! element serialization for sequences; the value's own shape decides
//! everything else.

use tether_term::Term;
use tether_types::{HostClass, TypeDescriptor};

use crate::env::LogicEnv;
use crate::error::AdaptError;
use crate::value::Value;

/// The functor of a serialized key-value pair.
pub const PAIR_FUNCTOR: &str = "-";

/// Serialize a value into a term.
///
/// `ty` is the value's declared type, when the caller knows one; it
/// refines the element type for sequences and is otherwise advisory.
pub fn adapt_to_term(
    value: &Value,
    ty: Option<&TypeDescriptor>,
    env: &LogicEnv,
) -> Result<Term, AdaptError> {
    match value {
        // An absent value serializes as a fresh anonymous variable.
        Value::Null => Ok(Term::anon()),
        Value::Bool(b) => Ok(Term::atom(if *b { "true" } else { "false" })),
        Value::Char(c) => Ok(Term::atom(c.to_string())),
        Value::Int(i) => Ok(Term::Int(*i)),
        Value::Counter(c) => Ok(Term::Int(c.get())),
        Value::Float(f) => Ok(Term::Float(*f)),
        Value::Decimal(d) => Ok(Term::Float(*d)),
        Value::BigInt(big) => match i64::try_from(*big) {
            Ok(i) => Ok(Term::Int(i)),
            // Out of integer range: fall back to the decimal text form.
            Err(_) => Ok(Term::atom(big.to_string())),
        },
        Value::Str(s) => Ok(Term::atom(s.clone())),
        // Epoch milliseconds back to the float-seconds calendar form.
        Value::Timestamp(millis) => Ok(Term::Float(*millis as f64 / 1000.0)),
        Value::Seq(elems) => {
            let elem_ty = ty.and_then(element_type);
            let terms = elems
                .iter()
                .map(|e| adapt_to_term(e, elem_ty.as_ref(), env))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Term::list(terms))
        }
        Value::Map(pairs) => {
            let terms = pairs
                .iter()
                .map(|(k, v)| pair_term(k, v, env))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Term::list(terms))
        }
        Value::Entry(key, value) => pair_term(key, value, env),
        Value::Term(term) => Ok(term.clone()),
        Value::Instance(instance) => {
            let class = env
                .registry
                .find_by_name(&instance.class)
                .filter(|c| c.arity() == instance.args.len())
                .ok_or_else(|| AdaptError::ObjectAdaptation {
                    value: value.clone(),
                    ty: ty.cloned(),
                })?;
            let args = instance
                .args
                .iter()
                .map(|a| adapt_to_term(a, None, env))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Term::compound(class.functor.clone(), args))
        }
    }
}

fn pair_term(key: &Value, value: &Value, env: &LogicEnv) -> Result<Term, AdaptError> {
    Ok(Term::compound(
        PAIR_FUNCTOR,
        vec![
            adapt_to_term(key, None, env)?,
            adapt_to_term(value, None, env)?,
        ],
    ))
}

/// The declared element type of a wrapper descriptor: its first type
/// argument, or the array element type.
fn element_type(ty: &TypeDescriptor) -> Option<TypeDescriptor> {
    match ty {
        TypeDescriptor::ArrayOf(elem) => Some((**elem).clone()),
        TypeDescriptor::Concrete { class, args } if *class != HostClass::Any => {
            args.first().cloned()
        }
        _ => None,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
