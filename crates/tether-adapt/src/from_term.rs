//! The term-to-value dispatcher.
//!
//! `adapt` decides and executes the conversion strategy for a (term,
//! type) pair. The decision order encodes precedence, not just
//! correctness: an explicit adapting context is authoritative when
//! offered (its failures propagate, except for list-shaped terms),
//! shape-matched logic classes outrank built-in conversions, and the
//! numeric path outranks the boolean/character/string paths.

use tracing::warn;

use tether_term::Term;
use tether_types::{
    class_compatible, resolve, BindingEnv, CounterWidth, FloatWidth, HostClass, IntWidth,
    TypeDescriptor,
};

use crate::env::LogicEnv;
use crate::error::AdaptError;
use crate::registry::{AdaptingContext, ClassDescriptor};
use crate::value::{Counter, Instance, Value};

/// Adapt a term to the most general type.
pub fn adapt_untyped(term: &Term, env: &LogicEnv) -> Result<Value, AdaptError> {
    adapt(term, &TypeDescriptor::any(), None, env)
}

/// Adapt a term to the requested type.
///
/// `ctx` redirects adaptation to a known logic class; without it, the
/// registry is consulted by term shape. Fails with
/// `AdaptError::TermAdaptation` when no strategy matches.
pub fn adapt(
    term: &Term,
    ty: &TypeDescriptor,
    ctx: Option<AdaptingContext<'_>>,
    env: &LogicEnv,
) -> Result<Value, AdaptError> {
    // An erased target is an open request: adapt against the most
    // general type instead.
    if matches!(ty, TypeDescriptor::Unresolved) {
        return adapt(term, &TypeDescriptor::any(), ctx, env);
    }

    // A declared custom converter outranks every built-in strategy.
    if let Some(HostClass::Named(name)) = ty.erasure() {
        if let Some(converter) = env.registry.converter_for(name) {
            return converter.term_to_value(term, ty, env);
        }
    }

    if let Some(ctx) = ctx {
        // Class-based adaptation is authoritative when offered: only a
        // list-shaped term may fall through to list handling, because a
        // class context is not assumed to handle lists.
        match adapt_as_instance(term, ty, ctx.class, env) {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !term.is_list() {
                    return Err(err);
                }
            }
        }
    } else {
        if let (Some(functor), Some(arity)) = (term.functor(), term.arity()) {
            if let Some(class) = env.registry.find_for_term(functor, arity) {
                // The term could be read as this class; whether it should
                // depends on the requested type.
                let tag = HostClass::Named(class.host_name.clone());
                if class_compatible(&tag, ty, &env.declarations) {
                    return adapt_as_instance(term, ty, class, env);
                }
                return Err(AdaptError::AmbiguousClass {
                    term: term.clone(),
                    class: class.host_name.clone(),
                    ty: ty.clone(),
                });
            }
        }
        if let TypeDescriptor::Concrete { class, .. } = ty {
            if let Some(value) = adapt_single(term, ty, class, env)? {
                return Ok(value);
            }
        }
    }

    if term.is_list() {
        return adapt_list(term, ty, ctx, env);
    }

    Err(AdaptError::TermAdaptation {
        term: term.clone(),
        ty: ty.clone(),
    })
}

/// The single (non-array) concrete-type rules. `Ok(None)` means no rule
/// applied and the caller falls through to list handling.
fn adapt_single(
    term: &Term,
    ty: &TypeDescriptor,
    class: &HostClass,
    env: &LogicEnv,
) -> Result<Option<Value>, AdaptError> {
    // An unbound variable carries no value: degrade to null for every
    // target that is not the raw term type.
    if matches!(term, Term::Var(_)) && class != &HostClass::Term {
        warn!(term = %term, ty = %ty, "adapting an unbound variable to a non-term type, yielding null");
        return Ok(Some(Value::Null));
    }

    // The requested type itself may be a declared logic class.
    if let Some(desc) = env.registry.find_for_type(ty, &env.declarations) {
        return adapt_as_instance(term, ty, desc, env).map(Some);
    }

    if class == &HostClass::Entry {
        let args = ty.type_args();
        let key_ty = args.first().cloned().unwrap_or(TypeDescriptor::Unresolved);
        let value_ty = args.get(1).cloned().unwrap_or(TypeDescriptor::Unresolved);
        return adapt_entry(term, ty, &key_ty, &value_ty, None, env).map(Some);
    }

    if class == &HostClass::Timestamp {
        return adapt_timestamp(term, ty).map(Some);
    }

    let numeric_target = matches!(
        class,
        HostClass::Int(_)
            | HostClass::Float(_)
            | HostClass::BigInt
            | HostClass::Decimal
            | HostClass::Counter(_)
    );
    if numeric_target || term.is_numeric() {
        if numeric_target {
            if matches!(term, Term::Atom(_)) || term.is_numeric() {
                return adapt_numeric(term, ty, class).map(Some);
            }
        } else if class == &HostClass::Any {
            // No further type hint: the term's natural numeric value.
            return Ok(Some(match term {
                Term::Int(i) => Value::Int(*i),
                Term::Float(f) => Value::Float(*f),
                _ => unreachable!("guarded by is_numeric"),
            }));
        }
    } else if matches!(class, HostClass::Bool | HostClass::Char) {
        let text = term.text();
        return match class {
            HostClass::Char => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Some(Value::Char(c))),
                    _ => Err(AdaptError::InvalidCharacterConversion { text }),
                }
            }
            _ => match text.parse::<bool>() {
                Ok(b) => Ok(Some(Value::Bool(b))),
                Err(_) => Err(AdaptError::TermAdaptation {
                    term: term.clone(),
                    ty: ty.clone(),
                }),
            },
        };
    } else if class == &HostClass::Str {
        // Atoms yield their bare name; other terms their full rendering.
        return Ok(Some(match term {
            Term::Atom(name) => Value::Str(name.clone()),
            other => Value::Str(other.to_string()),
        }));
    }

    // The raw term satisfies the descriptor (a term target, or the
    // fully generic one).
    if matches!(class, HostClass::Term | HostClass::Any) {
        return Ok(Some(Value::Term(term.clone())));
    }

    Ok(None)
}

/// The numeric conversions: width-checked parse from the term's
/// canonical text, with explicit constructors for the big/decimal and
/// counter types.
fn adapt_numeric(
    term: &Term,
    ty: &TypeDescriptor,
    class: &HostClass,
) -> Result<Value, AdaptError> {
    let fail = || AdaptError::TermAdaptation {
        term: term.clone(),
        ty: ty.clone(),
    };
    let text = term.text();
    match class {
        HostClass::Int(width) => {
            let value = match width {
                IntWidth::I8 => text.parse::<i8>().map(i64::from).ok(),
                IntWidth::I16 => text.parse::<i16>().map(i64::from).ok(),
                IntWidth::I32 => text.parse::<i32>().map(i64::from).ok(),
                IntWidth::I64 => text.parse::<i64>().ok(),
            };
            value.map(Value::Int).ok_or_else(fail)
        }
        HostClass::Float(FloatWidth::F32) => text
            .parse::<f32>()
            .map(|f| Value::Float(f64::from(f)))
            .map_err(|_| fail()),
        HostClass::Float(FloatWidth::F64) => {
            text.parse::<f64>().map(Value::Float).map_err(|_| fail())
        }
        HostClass::BigInt => term
            .as_i64()
            .map(|i| Value::BigInt(i128::from(i)))
            .ok_or_else(fail),
        HostClass::Decimal => term.as_f64().map(Value::Decimal).ok_or_else(fail),
        HostClass::Counter(CounterWidth::C32) => text
            .parse::<i32>()
            .ok()
            .map(|i| Value::Counter(Counter::new(i64::from(i))))
            .ok_or_else(fail),
        HostClass::Counter(CounterWidth::C64) => term
            .as_i64()
            .map(|i| Value::Counter(Counter::new(i)))
            .ok_or_else(fail),
        _ => Err(fail()),
    }
}

/// Adapt a term as an instance of a declared class: functor and arity
/// must match, and each argument adapts against its field's declared
/// type, resolved in a binding environment formed from the requested
/// descriptor's type arguments.
fn adapt_as_instance(
    term: &Term,
    ty: &TypeDescriptor,
    class: &ClassDescriptor,
    env: &LogicEnv,
) -> Result<Value, AdaptError> {
    let fail = || AdaptError::TermAdaptation {
        term: term.clone(),
        ty: ty.clone(),
    };
    if term.functor() != Some(class.functor.as_str())
        || term.arity() != Some(class.arity())
    {
        return Err(fail());
    }

    let binding = match (env.declarations.get(&class.host_name), ty) {
        (
            Some(decl),
            TypeDescriptor::Concrete {
                class: HostClass::Named(name),
                args,
            },
        ) if *name == class.host_name => BindingEnv::of(&decl.params, args),
        (Some(decl), _) => BindingEnv::of(&decl.params, &[]),
        (None, _) => BindingEnv::new(),
    };

    let arg_terms: &[Term] = match term {
        Term::Compound { args, .. } => args,
        _ => &[],
    };
    let mut values = Vec::with_capacity(arg_terms.len());
    for (field, arg) in class.fields.iter().zip(arg_terms) {
        let field_ty =
            resolve(&field.ty, &binding, &env.declarations).map_err(|_| fail())?;
        values.push(adapt(arg, &field_ty, None, env)?);
    }
    Ok(Value::Instance(Instance::new(class.host_name.clone(), values)))
}

/// The list-shaped rules: arrays and sequences element-wise, mappings
/// via 2-ary (key, value) compounds. Any other target fails.
fn adapt_list(
    term: &Term,
    ty: &TypeDescriptor,
    ctx: Option<AdaptingContext<'_>>,
    env: &LogicEnv,
) -> Result<Value, AdaptError> {
    let fail = || AdaptError::TermAdaptation {
        term: term.clone(),
        ty: ty.clone(),
    };
    let elems = term.as_list().ok_or_else(fail)?;
    match ty {
        TypeDescriptor::ArrayOf(elem_ty) => {
            let values = elems
                .iter()
                .map(|e| adapt(e, elem_ty, ctx, env))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Seq(values))
        }
        TypeDescriptor::Concrete {
            class: HostClass::List,
            args,
        } => {
            let elem_ty = args.first().cloned().unwrap_or(TypeDescriptor::Unresolved);
            let values = elems
                .iter()
                .map(|e| adapt(e, &elem_ty, ctx, env))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Seq(values))
        }
        TypeDescriptor::Concrete {
            class: HostClass::Map,
            args,
        } => {
            let key_ty = args.first().cloned().unwrap_or(TypeDescriptor::Unresolved);
            let value_ty = args.get(1).cloned().unwrap_or(TypeDescriptor::Unresolved);
            let mut pairs = Vec::with_capacity(elems.len());
            for elem in elems {
                let entry = adapt_entry(elem, ty, &key_ty, &value_ty, ctx, env)?;
                match entry {
                    Value::Entry(key, value) => pairs.push((*key, *value)),
                    _ => unreachable!("entry adapter yields Value::Entry"),
                }
            }
            Ok(Value::Map(pairs))
        }
        _ => Err(fail()),
    }
}

/// Adapt a 2-ary compound as an immutable key-value pair.
fn adapt_entry(
    term: &Term,
    ty: &TypeDescriptor,
    key_ty: &TypeDescriptor,
    value_ty: &TypeDescriptor,
    ctx: Option<AdaptingContext<'_>>,
    env: &LogicEnv,
) -> Result<Value, AdaptError> {
    match term {
        Term::Compound { args, .. } if args.len() == 2 => {
            let key = adapt(&args[0], key_ty, ctx, env)?;
            let value = adapt(&args[1], value_ty, ctx, env)?;
            Ok(Value::entry(key, value))
        }
        _ => Err(AdaptError::TermAdaptation {
            term: term.clone(),
            ty: ty.clone(),
        }),
    }
}

/// Adapt a calendar term: a float holds epoch seconds, truncated to
/// millisecond resolution; an integer is whole seconds.
fn adapt_timestamp(term: &Term, ty: &TypeDescriptor) -> Result<Value, AdaptError> {
    match term {
        Term::Float(seconds) => Ok(Value::Timestamp((seconds * 1000.0) as i64)),
        Term::Int(seconds) => Ok(Value::Timestamp(seconds.saturating_mul(1000))),
        _ => Err(AdaptError::TermAdaptation {
            term: term.clone(),
            ty: ty.clone(),
        }),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tether_types::TypeExpr;

    fn int_expr() -> TypeExpr {
        TypeExpr::class(HostClass::Int(IntWidth::I64))
    }

    fn env_with_point() -> LogicEnv {
        let mut env = LogicEnv::new();
        env.register_class(
            ClassDescriptor::new("Point")
                .field("x", int_expr())
                .field("y", int_expr()),
        )
        .unwrap();
        env
    }

    #[test]
    fn integer_to_long() {
        let env = LogicEnv::new();
        let value = adapt(&Term::Int(42), &TypeDescriptor::long(), None, &env).unwrap();
        assert_eq!(value, Value::Int(42));
    }

    #[test]
    fn integer_width_is_range_checked() {
        let env = LogicEnv::new();
        let narrow = TypeDescriptor::of(HostClass::Int(IntWidth::I8));
        assert_eq!(
            adapt(&Term::Int(100), &narrow, None, &env).unwrap(),
            Value::Int(100)
        );
        assert!(matches!(
            adapt(&Term::Int(300), &narrow, None, &env),
            Err(AdaptError::TermAdaptation { .. })
        ));
    }

    #[test]
    fn numeric_atom_parses_for_numeric_target() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(&Term::atom("7"), &TypeDescriptor::long(), None, &env).unwrap(),
            Value::Int(7)
        );
        assert!(adapt(&Term::atom("x"), &TypeDescriptor::long(), None, &env).is_err());
    }

    #[test]
    fn numeric_term_against_any_keeps_natural_value() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(&Term::Int(3), &TypeDescriptor::any(), None, &env).unwrap(),
            Value::Int(3)
        );
        assert_eq!(
            adapt(&Term::Float(2.5), &TypeDescriptor::any(), None, &env).unwrap(),
            Value::Float(2.5)
        );
    }

    #[test]
    fn big_and_counter_targets() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(
                &Term::Int(9),
                &TypeDescriptor::of(HostClass::BigInt),
                None,
                &env
            )
            .unwrap(),
            Value::BigInt(9)
        );
        assert_eq!(
            adapt(
                &Term::Float(2.5),
                &TypeDescriptor::of(HostClass::Decimal),
                None,
                &env
            )
            .unwrap(),
            Value::Decimal(2.5)
        );
        let counter = adapt(
            &Term::Int(5),
            &TypeDescriptor::of(HostClass::Counter(CounterWidth::C64)),
            None,
            &env,
        )
        .unwrap();
        assert_eq!(counter.as_i64(), Some(5));
    }

    #[test]
    fn narrow_counter_is_range_checked() {
        let env = LogicEnv::new();
        let narrow = TypeDescriptor::of(HostClass::Counter(CounterWidth::C32));
        let counter = adapt(&Term::Int(7), &narrow, None, &env).unwrap();
        assert_eq!(counter.as_i64(), Some(7));
        assert!(matches!(
            adapt(&Term::Int(i64::from(i32::MAX) + 1), &narrow, None, &env),
            Err(AdaptError::TermAdaptation { .. })
        ));
        let wide = TypeDescriptor::of(HostClass::Counter(CounterWidth::C64));
        let counter = adapt(&Term::Int(i64::from(i32::MAX) + 1), &wide, None, &env).unwrap();
        assert_eq!(counter.as_i64(), Some(i64::from(i32::MAX) + 1));
    }

    #[test]
    fn variable_degrades_to_null_not_error() {
        let env = LogicEnv::new();
        for ty in [
            TypeDescriptor::long(),
            TypeDescriptor::string(),
            TypeDescriptor::any(),
            TypeDescriptor::list_of(TypeDescriptor::string()),
        ] {
            assert_eq!(adapt(&Term::var("X"), &ty, None, &env).unwrap(), Value::Null);
        }
    }

    #[test]
    fn variable_against_term_target_stays_a_term() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(&Term::var("X"), &TypeDescriptor::term(), None, &env).unwrap(),
            Value::Term(Term::var("X"))
        );
    }

    #[test]
    fn atom_to_string_is_bare_name() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(
                &Term::atom("hello world"),
                &TypeDescriptor::string(),
                None,
                &env
            )
            .unwrap(),
            Value::string("hello world")
        );
    }

    #[test]
    fn compound_to_string_is_full_rendering() {
        let env = LogicEnv::new();
        let term = Term::compound("point", vec![Term::Int(1), Term::Int(2)]);
        assert_eq!(
            adapt(&term, &TypeDescriptor::string(), None, &env).unwrap(),
            Value::string("point(1, 2)")
        );
    }

    #[test]
    fn char_target_requires_single_character() {
        let env = LogicEnv::new();
        let char_ty = TypeDescriptor::of(HostClass::Char);
        assert_eq!(
            adapt(&Term::atom("a"), &char_ty, None, &env).unwrap(),
            Value::Char('a')
        );
        assert!(matches!(
            adapt(&Term::atom("ab"), &char_ty, None, &env),
            Err(AdaptError::InvalidCharacterConversion { .. })
        ));
    }

    #[test]
    fn bool_target_parses_true_false() {
        let env = LogicEnv::new();
        let bool_ty = TypeDescriptor::of(HostClass::Bool);
        assert_eq!(
            adapt(&Term::atom("true"), &bool_ty, None, &env).unwrap(),
            Value::Bool(true)
        );
        assert!(adapt(&Term::atom("yes"), &bool_ty, None, &env).is_err());
    }

    #[test]
    fn non_numeric_atom_against_any_passes_through_as_term() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(&Term::atom("foo"), &TypeDescriptor::any(), None, &env).unwrap(),
            Value::Term(Term::atom("foo"))
        );
    }

    #[test]
    fn unresolved_target_adapts_as_most_general() {
        let env = LogicEnv::new();
        assert_eq!(
            adapt(&Term::Int(1), &TypeDescriptor::Unresolved, None, &env).unwrap(),
            Value::Int(1)
        );
    }

    #[test]
    fn shape_matched_class_adapts_as_instance() {
        let env = env_with_point();
        let term = Term::compound("point", vec![Term::Int(1), Term::Int(2)]);
        let value = adapt(&term, &TypeDescriptor::any(), None, &env).unwrap();
        assert_eq!(
            value,
            Value::Instance(Instance::new(
                "Point",
                vec![Value::Int(1), Value::Int(2)]
            ))
        );
    }

    #[test]
    fn shape_matched_but_incompatible_type_is_ambiguous() {
        let env = env_with_point();
        let term = Term::compound("point", vec![Term::Int(1), Term::Int(2)]);
        let err = adapt(&term, &TypeDescriptor::string(), None, &env).unwrap_err();
        assert!(matches!(err, AdaptError::AmbiguousClass { class, .. } if class == "Point"));
    }

    #[test]
    fn requested_class_type_adapts_by_shape() {
        let env = env_with_point();
        let term = Term::compound("point", vec![Term::Int(1), Term::Int(2)]);
        let value = adapt(&term, &TypeDescriptor::named("Point"), None, &env).unwrap();
        assert!(matches!(value, Value::Instance(ref i) if i.class == "Point"));
    }

    #[test]
    fn explicit_context_failure_propagates_for_non_lists() {
        let env = env_with_point();
        let class = env.registry.find_by_name("Point").unwrap();
        let ctx = AdaptingContext::for_class(class);
        // Wrong functor: the context is authoritative, so this fails even
        // though the bare term would adapt fine against Any.
        let term = Term::compound("station", vec![Term::Int(1), Term::Int(2)]);
        assert!(adapt(&term, &TypeDescriptor::any(), Some(ctx), &env).is_err());
    }

    #[test]
    fn explicit_context_falls_through_for_lists_and_applies_per_element() {
        let env = env_with_point();
        let class = env.registry.find_by_name("Point").unwrap();
        let ctx = AdaptingContext::for_class(class);
        let term = Term::list(vec![
            Term::compound("point", vec![Term::Int(1), Term::Int(2)]),
            Term::compound("point", vec![Term::Int(3), Term::Int(4)]),
        ]);
        let value = adapt(
            &term,
            &TypeDescriptor::list_of(TypeDescriptor::named("Point")),
            Some(ctx),
            &env,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::Seq(vec![
                Value::Instance(Instance::new("Point", vec![Value::Int(1), Value::Int(2)])),
                Value::Instance(Instance::new("Point", vec![Value::Int(3), Value::Int(4)])),
            ])
        );
    }

    #[test]
    fn list_to_array_and_sequence() {
        let env = LogicEnv::new();
        let term = Term::list(vec![Term::Int(1), Term::Int(2)]);
        let array_ty = TypeDescriptor::array(TypeDescriptor::long());
        assert_eq!(
            adapt(&term, &array_ty, None, &env).unwrap(),
            Value::Seq(vec![Value::Int(1), Value::Int(2)])
        );
        let list_ty = TypeDescriptor::list_of(TypeDescriptor::long());
        assert_eq!(
            adapt(&term, &list_ty, None, &env).unwrap(),
            Value::Seq(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn non_list_compound_against_array_fails() {
        let env = LogicEnv::new();
        let term = Term::compound("foo", vec![Term::Int(1), Term::Int(2)]);
        let array_ty = TypeDescriptor::array(TypeDescriptor::long());
        assert!(matches!(
            adapt(&term, &array_ty, None, &env),
            Err(AdaptError::TermAdaptation { .. })
        ));
    }

    #[test]
    fn list_of_pairs_to_map() {
        let env = LogicEnv::new();
        let term = Term::list(vec![
            Term::compound("-", vec![Term::atom("a"), Term::Int(1)]),
            Term::compound("-", vec![Term::atom("b"), Term::Int(2)]),
        ]);
        let map_ty = TypeDescriptor::map_of(TypeDescriptor::string(), TypeDescriptor::long());
        assert_eq!(
            adapt(&term, &map_ty, None, &env).unwrap(),
            Value::Map(vec![
                (Value::string("a"), Value::Int(1)),
                (Value::string("b"), Value::Int(2)),
            ])
        );
    }

    #[test]
    fn map_element_must_be_a_pair() {
        let env = LogicEnv::new();
        let term = Term::list(vec![Term::Int(1)]);
        let map_ty = TypeDescriptor::map_of(TypeDescriptor::string(), TypeDescriptor::long());
        assert!(adapt(&term, &map_ty, None, &env).is_err());
    }

    #[test]
    fn entry_target_adapts_both_sides() {
        let env = LogicEnv::new();
        let term = Term::compound("-", vec![Term::atom("k"), Term::Int(9)]);
        let entry_ty =
            TypeDescriptor::entry_of(TypeDescriptor::string(), TypeDescriptor::long());
        assert_eq!(
            adapt(&term, &entry_ty, None, &env).unwrap(),
            Value::entry(Value::string("k"), Value::Int(9))
        );
    }

    #[test]
    fn timestamp_truncates_to_milliseconds() {
        let env = LogicEnv::new();
        let ty = TypeDescriptor::timestamp();
        assert_eq!(
            adapt(&Term::Float(1.5), &ty, None, &env).unwrap(),
            Value::Timestamp(1500)
        );
        // Sub-millisecond precision is dropped.
        assert_eq!(
            adapt(&Term::Float(1.2345678), &ty, None, &env).unwrap(),
            Value::Timestamp(1234)
        );
        assert_eq!(
            adapt(&Term::Int(2), &ty, None, &env).unwrap(),
            Value::Timestamp(2000)
        );
    }

    #[test]
    fn huge_integer_seconds_saturate_instead_of_overflowing() {
        let env = LogicEnv::new();
        let ty = TypeDescriptor::timestamp();
        assert_eq!(
            adapt(&Term::Int(i64::MAX), &ty, None, &env).unwrap(),
            Value::Timestamp(i64::MAX)
        );
    }

    #[test]
    fn no_strategy_is_a_term_adaptation_error() {
        let env = LogicEnv::new();
        let err = adapt(
            &Term::atom("mystery"),
            &TypeDescriptor::timestamp(),
            None,
            &env,
        )
        .unwrap_err();
        assert!(matches!(err, AdaptError::TermAdaptation { .. }));
    }

    #[test]
    fn nested_generic_arguments_flow_to_elements() {
        let env = LogicEnv::new();
        let term = Term::list(vec![
            Term::list(vec![Term::Int(1), Term::Int(2)]),
            Term::list(vec![Term::Int(3)]),
        ]);
        let ty = TypeDescriptor::list_of(TypeDescriptor::list_of(TypeDescriptor::long()));
        assert_eq!(
            adapt(&term, &ty, None, &env).unwrap(),
            Value::Seq(vec![
                Value::Seq(vec![Value::Int(1), Value::Int(2)]),
                Value::Seq(vec![Value::Int(3)]),
            ])
        );
    }
}
