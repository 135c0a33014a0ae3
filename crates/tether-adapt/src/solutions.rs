//! Solution streams.
//!
//! A query engine yields a stream of solution terms; this module wraps
//! that stream behind `SolutionCursor` and composes it with the
//! dispatcher. Closing is explicit and idempotent -- a closed stream
//! yields nothing, and nothing closes it behind the caller's back.

use tether_term::Term;
use tether_types::{each_solution_type, TypeDescriptor};

use crate::env::LogicEnv;
use crate::error::AdaptError;
use crate::from_term::adapt;
use crate::value::Value;

/// The engine-facing side of a solution stream.
///
/// `fetch` produces the next solution term, `None` on exhaustion.
/// `close` releases engine resources; the default is a no-op for
/// cursors with nothing to release.
pub trait SolutionCursor {
    fn fetch(&mut self) -> Option<Term>;

    fn close(&mut self) {}
}

struct VecCursor {
    terms: std::vec::IntoIter<Term>,
}

impl SolutionCursor for VecCursor {
    fn fetch(&mut self) -> Option<Term> {
        self.terms.next()
    }
}

/// A stream of solution terms with explicit, idempotent close.
pub struct Solutions {
    cursor: Box<dyn SolutionCursor>,
    closed: bool,
}

impl Solutions {
    pub fn new(cursor: Box<dyn SolutionCursor>) -> Solutions {
        Solutions {
            cursor,
            closed: false,
        }
    }

    /// A stream over an already-materialized set of terms.
    pub fn from_terms(terms: Vec<Term>) -> Solutions {
        Solutions::new(Box::new(VecCursor {
            terms: terms.into_iter(),
        }))
    }

    /// The next solution term. A closed stream yields `None`.
    pub fn next_term(&mut self) -> Option<Term> {
        if self.closed {
            return None;
        }
        self.cursor.fetch()
    }

    /// Close the stream. Safe to call more than once; only the first
    /// call reaches the cursor.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.cursor.close();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Adapt the first solution to `ty`'s per-solution element type and
/// close the stream. Fails with `AdaptError::NoSolution` on an empty
/// stream.
pub fn first_solution(
    mut solutions: Solutions,
    ty: &TypeDescriptor,
    env: &LogicEnv,
) -> Result<Value, AdaptError> {
    let elem_ty = each_solution_type(ty);
    let result = match solutions.next_term() {
        Some(term) => adapt(&term, &elem_ty, None, env),
        None => Err(AdaptError::NoSolution),
    };
    solutions.close();
    result
}

/// Adapt every solution to `ty`'s per-solution element type, closing
/// the stream on exhaustion and on the first failure alike.
pub fn collect_solutions(
    mut solutions: Solutions,
    ty: &TypeDescriptor,
    env: &LogicEnv,
) -> Result<Vec<Value>, AdaptError> {
    let elem_ty = each_solution_type(ty);
    let mut values = Vec::new();
    while let Some(term) = solutions.next_term() {
        match adapt(&term, &elem_ty, None, env) {
            Ok(value) => values.push(value),
            Err(err) => {
                solutions.close();
                return Err(err);
            }
        }
    }
    solutions.close();
    Ok(values)
}

/// A lazily-adapting iterator over a solution stream.
///
/// Each `next` fetches one term and adapts it to the element type.
/// There is no automatic close on drop: callers that abandon the
/// iterator early must call `close` themselves.
pub struct SolutionIter<'a> {
    solutions: Solutions,
    elem_ty: TypeDescriptor,
    env: &'a LogicEnv,
}

impl<'a> SolutionIter<'a> {
    /// Iterate with the per-solution element type derived from the
    /// requested wrapper type.
    pub fn new(solutions: Solutions, ty: &TypeDescriptor, env: &'a LogicEnv) -> SolutionIter<'a> {
        SolutionIter {
            solutions,
            elem_ty: each_solution_type(ty),
            env,
        }
    }

    /// Iterate with an explicit element type.
    pub fn with_element_type(
        solutions: Solutions,
        elem_ty: TypeDescriptor,
        env: &'a LogicEnv,
    ) -> SolutionIter<'a> {
        SolutionIter {
            solutions,
            elem_ty,
            env,
        }
    }

    pub fn close(&mut self) {
        self.solutions.close();
    }

    pub fn is_closed(&self) -> bool {
        self.solutions.is_closed()
    }
}

impl Iterator for SolutionIter<'_> {
    type Item = Result<Value, AdaptError>;

    fn next(&mut self) -> Option<Self::Item> {
        let term = self.solutions.next_term()?;
        Some(adapt(&term, &self.elem_ty, None, self.env))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingCursor {
        terms: std::vec::IntoIter<Term>,
        closes: Rc<Cell<usize>>,
    }

    impl SolutionCursor for CountingCursor {
        fn fetch(&mut self) -> Option<Term> {
            self.terms.next()
        }

        fn close(&mut self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    fn counting(terms: Vec<Term>) -> (Solutions, Rc<Cell<usize>>) {
        let closes = Rc::new(Cell::new(0));
        let cursor = CountingCursor {
            terms: terms.into_iter(),
            closes: Rc::clone(&closes),
        };
        (Solutions::new(Box::new(cursor)), closes)
    }

    #[test]
    fn close_is_idempotent_and_stops_fetching() {
        let (mut solutions, closes) = counting(vec![Term::Int(1), Term::Int(2)]);
        assert_eq!(solutions.next_term(), Some(Term::Int(1)));
        solutions.close();
        solutions.close();
        assert_eq!(closes.get(), 1);
        assert_eq!(solutions.next_term(), None);
        assert!(solutions.is_closed());
    }

    #[test]
    fn first_solution_adapts_and_closes() {
        let env = LogicEnv::new();
        let (solutions, closes) = counting(vec![Term::Int(7), Term::Int(8)]);
        let value = first_solution(
            solutions,
            &TypeDescriptor::list_of(TypeDescriptor::long()),
            &env,
        )
        .unwrap();
        assert_eq!(value, Value::Int(7));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn first_solution_of_empty_stream_is_no_solution() {
        let env = LogicEnv::new();
        let (solutions, closes) = counting(vec![]);
        let err = first_solution(solutions, &TypeDescriptor::any(), &env).unwrap_err();
        assert_eq!(err, AdaptError::NoSolution);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn collect_adapts_every_solution_in_order() {
        let env = LogicEnv::new();
        let solutions = Solutions::from_terms(vec![Term::Int(1), Term::Int(2), Term::Int(3)]);
        let values = collect_solutions(
            solutions,
            &TypeDescriptor::list_of(TypeDescriptor::long()),
            &env,
        )
        .unwrap();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn collect_closes_on_failure() {
        let env = LogicEnv::new();
        let (solutions, closes) = counting(vec![Term::Int(1), Term::atom("oops")]);
        let err = collect_solutions(
            solutions,
            &TypeDescriptor::list_of(TypeDescriptor::long()),
            &env,
        )
        .unwrap_err();
        assert!(matches!(err, AdaptError::TermAdaptation { .. }));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn raw_wrapper_type_adapts_each_solution_as_most_general() {
        let env = LogicEnv::new();
        let solutions = Solutions::from_terms(vec![Term::Int(1), Term::atom("a")]);
        let values =
            collect_solutions(solutions, &TypeDescriptor::of(tether_types::HostClass::List), &env)
                .unwrap();
        assert_eq!(
            values,
            vec![Value::Int(1), Value::Term(Term::atom("a"))]
        );
    }

    #[test]
    fn iterator_is_lazy_and_needs_explicit_close() {
        let env = LogicEnv::new();
        let (solutions, closes) = counting(vec![Term::Int(1), Term::Int(2), Term::Int(3)]);
        let mut iter = SolutionIter::with_element_type(solutions, TypeDescriptor::long(), &env);
        assert_eq!(iter.next(), Some(Ok(Value::Int(1))));
        assert_eq!(closes.get(), 0);
        iter.close();
        assert_eq!(closes.get(), 1);
        assert_eq!(iter.next(), None);
        assert!(iter.is_closed());
    }
}
