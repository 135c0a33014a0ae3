//! Type-expression resolution against binding environments.
//!
//! Resolution turns a use-site `TypeExpr` into a total `TypeDescriptor`:
//! every reachable parameter reference is either substituted from the
//! binding environment or explicitly marked `Unresolved`. Falling back to
//! `Unresolved` is the erasure policy, not an error.
//!
//! Also home to the declaration environment (generic arities, ancestor
//! instantiations), ancestor argument propagation, and the assignability
//! checks consulted by the dispatcher.

use rustc_hash::FxHashMap;

use crate::error::TypeDeclError;
use crate::ty::{HostClass, TypeDescriptor, TypeExpr};

/// A user class declaration: its generic parameters and, optionally, the
/// ancestor class it instantiates (with the ancestor's type arguments
/// expressed in terms of this class's parameters).
///
/// Example: `StringKeyed<V>` extending `Map<Str, V>` is
/// `ClassDecl { name: "StringKeyed", params: ["V"],
///   ancestor: Some((Map, [Class(Str), Param("V")])) }`.
#[derive(Clone, Debug)]
pub struct ClassDecl {
    pub name: String,
    pub params: Vec<String>,
    pub ancestor: Option<(HostClass, Vec<TypeExpr>)>,
}

impl ClassDecl {
    /// A non-generic declaration with no ancestor.
    pub fn simple(name: impl Into<String>) -> ClassDecl {
        ClassDecl {
            name: name.into(),
            params: Vec::new(),
            ancestor: None,
        }
    }
}

/// The declaration environment: generic arities and ancestor chains for
/// named classes. Built during startup; read-only during adaptation.
#[derive(Default, Debug)]
pub struct Declarations {
    classes: FxHashMap<String, ClassDecl>,
}

impl Declarations {
    pub fn new() -> Declarations {
        Declarations::default()
    }

    /// Add a class declaration. The ancestor instantiation, when present,
    /// must match the ancestor's generic arity (empty arguments mean a
    /// raw, erased use).
    pub fn declare(&mut self, decl: ClassDecl) -> Result<(), TypeDeclError> {
        if self.classes.contains_key(&decl.name) {
            return Err(TypeDeclError::DuplicateClass {
                class: decl.name.clone(),
            });
        }
        if let Some((ancestor, args)) = &decl.ancestor {
            let expected = self.generic_arity(ancestor).ok_or_else(|| {
                TypeDeclError::UnknownClass {
                    class: ancestor.to_string(),
                }
            })?;
            if !args.is_empty() && args.len() != expected {
                return Err(TypeDeclError::ArityMismatch {
                    class: ancestor.to_string(),
                    expected,
                    found: args.len(),
                });
            }
        }
        self.classes.insert(decl.name.clone(), decl);
        Ok(())
    }

    /// Look up a declaration by class name.
    pub fn get(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }

    /// The generic arity of a class: builtin arity for builtin tags,
    /// declared parameter count for named classes. `None` when a named
    /// class has no declaration.
    pub fn generic_arity(&self, class: &HostClass) -> Option<usize> {
        match class.builtin_arity() {
            Some(n) => Some(n),
            None => match class {
                HostClass::Named(name) => self.get(name).map(|d| d.params.len()),
                _ => None,
            },
        }
    }
}

/// An ordered stack of parameter bindings. Lookup is innermost-first, so
/// a descendant's bindings shadow an ancestor's.
#[derive(Default, Debug)]
pub struct BindingEnv {
    frames: Vec<FxHashMap<String, TypeDescriptor>>,
}

impl BindingEnv {
    pub fn new() -> BindingEnv {
        BindingEnv::default()
    }

    /// A single-frame environment binding `params` to `args`.
    pub fn of(params: &[String], args: &[TypeDescriptor]) -> BindingEnv {
        let mut env = BindingEnv::new();
        env.push(params, args);
        env
    }

    /// Push a frame binding `params` positionally to `args`. Parameters
    /// with no corresponding argument bind to `Unresolved`.
    pub fn push(&mut self, params: &[String], args: &[TypeDescriptor]) {
        let mut frame = FxHashMap::default();
        for (i, param) in params.iter().enumerate() {
            let arg = args.get(i).cloned().unwrap_or(TypeDescriptor::Unresolved);
            frame.insert(param.clone(), arg);
        }
        self.frames.push(frame);
    }

    /// Look up a parameter binding, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.frames.iter().rev().find_map(|f| f.get(name))
    }
}

/// Resolve a type expression to a total descriptor.
///
/// Unbound parameters degrade to `Unresolved`; a raw generic class (no
/// arguments written) resolves with all-`Unresolved` arguments. Arity
/// mismatches and references to undeclared named classes are hard errors.
pub fn resolve(
    expr: &TypeExpr,
    env: &BindingEnv,
    decls: &Declarations,
) -> Result<TypeDescriptor, TypeDeclError> {
    match expr {
        TypeExpr::Param(name) => Ok(env
            .lookup(name)
            .cloned()
            .unwrap_or(TypeDescriptor::Unresolved)),
        TypeExpr::Array(elem) => Ok(TypeDescriptor::array(resolve(elem, env, decls)?)),
        TypeExpr::Class(class, args) => {
            let expected =
                decls
                    .generic_arity(class)
                    .ok_or_else(|| TypeDeclError::UnknownClass {
                        class: class.to_string(),
                    })?;
            if args.is_empty() && expected > 0 {
                // Raw use of a generic class: erased type arguments.
                return Ok(TypeDescriptor::Concrete {
                    class: class.clone(),
                    args: vec![TypeDescriptor::Unresolved; expected],
                });
            }
            if args.len() != expected {
                return Err(TypeDeclError::ArityMismatch {
                    class: class.to_string(),
                    expected,
                    found: args.len(),
                });
            }
            let args = args
                .iter()
                .map(|a| resolve(a, env, decls))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(TypeDescriptor::Concrete {
                class: class.clone(),
                args,
            })
        }
    }
}

/// Pad a descriptor argument list out to the class's generic arity.
fn normalize_args(args: &[TypeDescriptor], arity: usize) -> Vec<TypeDescriptor> {
    let mut out: Vec<TypeDescriptor> = args.to_vec();
    while out.len() < arity {
        out.push(TypeDescriptor::Unresolved);
    }
    out
}

/// How does `descriptor` instantiate `ancestor`'s type parameters?
///
/// Walks the declared ancestor chain of a concrete descriptor,
/// substituting actual type arguments at each hop. Answers `None` when
/// the descriptor does not reach the ancestor. This is the pure-function
/// counterpart of reflective ancestor-parameter discovery: the binding
/// environment is explicit, built from each declaration's parameters.
pub fn ancestor_arguments(
    descriptor: &TypeDescriptor,
    ancestor: &HostClass,
    decls: &Declarations,
) -> Option<Vec<TypeDescriptor>> {
    let (mut class, mut args) = match descriptor {
        TypeDescriptor::Concrete { class, args } => {
            let arity = decls.generic_arity(class)?;
            (class.clone(), normalize_args(args, arity))
        }
        _ => return None,
    };
    loop {
        if &class == ancestor {
            return Some(args);
        }
        let name = match &class {
            HostClass::Named(name) => name.clone(),
            _ => return None,
        };
        let decl = decls.get(&name)?;
        let (next_class, next_exprs) = decl.ancestor.as_ref()?;
        let next_arity = decls.generic_arity(next_class)?;
        let next_args = if next_exprs.is_empty() {
            vec![TypeDescriptor::Unresolved; next_arity]
        } else {
            let env = BindingEnv::of(&decl.params, &args);
            next_exprs
                .iter()
                .map(|e| resolve(e, &env, decls))
                .collect::<Result<Vec<_>, _>>()
                .ok()?
        };
        class = next_class.clone();
        args = next_args;
    }
}

/// Whether `sub` is `sup` or reaches it through its declared ancestor
/// chain. `Any` is the top: every class is a subclass of it.
pub fn is_subclass(sub: &HostClass, sup: &HostClass, decls: &Declarations) -> bool {
    if sup == &HostClass::Any || sub == sup {
        return true;
    }
    let mut current = sub.clone();
    loop {
        let name = match &current {
            HostClass::Named(name) => name.clone(),
            _ => return false,
        };
        match decls.get(&name).and_then(|d| d.ancestor.as_ref()) {
            Some((ancestor, _)) => {
                if ancestor == sup {
                    return true;
                }
                current = ancestor.clone();
            }
            None => return false,
        }
    }
}

/// The type-compatibility check used when a term's shape matches a
/// declared class: the class must be assignable to the requested
/// descriptor, or the descriptor's erasure assignable to the class.
/// `Unresolved` targets accept everything; array targets accept no class.
pub fn class_compatible(
    class: &HostClass,
    target: &TypeDescriptor,
    decls: &Declarations,
) -> bool {
    match target {
        TypeDescriptor::Unresolved => true,
        TypeDescriptor::ArrayOf(_) => false,
        TypeDescriptor::Concrete {
            class: target_class,
            ..
        } => is_subclass(class, target_class, decls) || is_subclass(target_class, class, decls),
    }
}

/// The per-solution element type of a composition wrapper: its first
/// type argument, defaulting to the fully generic type when the wrapper
/// carries none.
pub fn each_solution_type(wrapper: &TypeDescriptor) -> TypeDescriptor {
    wrapper
        .type_args()
        .first()
        .cloned()
        .unwrap_or_else(TypeDescriptor::any)
}

// ── Tests ──────────────────────────────────────────────────────────────
