//! The logic-class registry.
//!
//! A `ClassDescriptor` declares how a host class corresponds to a term
//! shape: its logic-side functor and its fields in term-argument order.
//! The registry answers the two lookup capabilities the dispatcher
//! needs -- by term shape (functor/arity) and by requested type -- and
//! holds custom converters that take precedence over built-in strategies.

use rustc_hash::FxHashMap;

use tether_term::{camel_to_functor, Term};
use tether_types::{Declarations, HostClass, TypeDeclError, TypeDescriptor, TypeExpr};

use crate::env::LogicEnv;
use crate::error::AdaptError;
use crate::value::Value;

/// One field of a logic class: its host name and declared type. Field
/// order is term argument order.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeExpr,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> FieldSpec {
        FieldSpec {
            name: name.into(),
            ty,
        }
    }
}

/// A declared logic class.
///
/// `modules` and `imports` are dependency metadata consumed by the
/// external module loader, never by adaptation itself; they are carried
/// here because this descriptor is the loader's only source for them.
#[derive(Clone, Debug)]
pub struct ClassDescriptor {
    pub host_name: String,
    pub functor: String,
    pub fields: Vec<FieldSpec>,
    pub modules: Vec<String>,
    pub imports: Vec<String>,
}

impl ClassDescriptor {
    /// Create a descriptor; the functor defaults to the snake_case form
    /// of the host name (`MetroLine` -> `metro_line`).
    pub fn new(host_name: impl Into<String>) -> ClassDescriptor {
        let host_name = host_name.into();
        let functor = camel_to_functor(&host_name);
        ClassDescriptor {
            host_name,
            functor,
            fields: Vec::new(),
            modules: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Override the defaulted functor.
    pub fn with_functor(mut self, functor: impl Into<String>) -> ClassDescriptor {
        self.functor = functor.into();
        self
    }

    /// Append a field (term argument order).
    pub fn field(mut self, name: impl Into<String>, ty: TypeExpr) -> ClassDescriptor {
        self.fields.push(FieldSpec::new(name, ty));
        self
    }

    /// Append a module dependency (loader metadata).
    pub fn module(mut self, module: impl Into<String>) -> ClassDescriptor {
        self.modules.push(module.into());
        self
    }

    /// Append an import dependency (loader metadata).
    pub fn import(mut self, import: impl Into<String>) -> ClassDescriptor {
        self.imports.push(import.into());
        self
    }

    /// The term arity of this class.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// A custom term converter declared for a class.
///
/// Converters are constructed zero-arg, then receive their raw
/// configuration strings exactly once before first use. A registered
/// converter runs before every built-in strategy for its class. The
/// registry lives behind a shared static, so converters must be
/// `Send + Sync`; they are immutable after configuration.
pub trait TermConverter: Send + Sync {
    /// Receive raw configuration parameters. Default: ignore them.
    fn configure(&mut self, _params: &[String]) {}

    /// Convert a term to a value of the converter's class.
    fn term_to_value(
        &self,
        term: &Term,
        ty: &TypeDescriptor,
        env: &LogicEnv,
    ) -> Result<Value, AdaptError>;
}

/// The capability "adapt this term as an instance of a known class",
/// passed explicitly by callers that already resolved the class. When
/// absent, the dispatcher falls back to registry lookup by term shape.
#[derive(Clone, Copy)]
pub struct AdaptingContext<'a> {
    pub class: &'a ClassDescriptor,
}

impl<'a> AdaptingContext<'a> {
    pub fn for_class(class: &'a ClassDescriptor) -> AdaptingContext<'a> {
        AdaptingContext { class }
    }
}

/// The logic-class registry: shape-keyed and name-keyed lookup over the
/// declared classes, plus the custom converter table.
#[derive(Default)]
pub struct ClassRegistry {
    classes: Vec<ClassDescriptor>,
    by_name: FxHashMap<String, usize>,
    by_shape: FxHashMap<(String, usize), usize>,
    converters: FxHashMap<String, Box<dyn TermConverter>>,
}

impl ClassRegistry {
    pub fn new() -> ClassRegistry {
        ClassRegistry::default()
    }

    /// Register a class descriptor. Both the host name and the
    /// functor/arity shape must be unused.
    pub fn register(&mut self, descriptor: ClassDescriptor) -> Result<(), TypeDeclError> {
        let shape = (descriptor.functor.clone(), descriptor.arity());
        if self.by_name.contains_key(&descriptor.host_name)
            || self.by_shape.contains_key(&shape)
        {
            return Err(TypeDeclError::DuplicateClass {
                class: descriptor.host_name.clone(),
            });
        }
        let idx = self.classes.len();
        self.by_name.insert(descriptor.host_name.clone(), idx);
        self.by_shape.insert(shape, idx);
        self.classes.push(descriptor);
        Ok(())
    }

    /// Does this term shape correspond to a declared class?
    pub fn find_for_term(&self, functor: &str, arity: usize) -> Option<&ClassDescriptor> {
        self.by_shape
            .get(&(functor.to_string(), arity))
            .map(|&i| &self.classes[i])
    }

    /// Look up a class by host name.
    pub fn find_by_name(&self, name: &str) -> Option<&ClassDescriptor> {
        self.by_name.get(name).map(|&i| &self.classes[i])
    }

    /// Does this requested type correspond to a declared class?
    ///
    /// Walks the declared ancestor chain of the descriptor's erasure, so
    /// a subclass of a registered class resolves to the registered
    /// ancestor (the nearest registered class wins).
    pub fn find_for_type(
        &self,
        ty: &TypeDescriptor,
        decls: &Declarations,
    ) -> Option<&ClassDescriptor> {
        let mut class = ty.erasure()?.clone();
        loop {
            let name = match &class {
                HostClass::Named(name) => name.clone(),
                _ => return None,
            };
            if let Some(found) = self.find_by_name(&name) {
                return Some(found);
            }
            match decls.get(&name).and_then(|d| d.ancestor.as_ref()) {
                Some((ancestor, _)) => class = ancestor.clone(),
                None => return None,
            }
        }
    }

    /// Register a custom converter for a class: constructed zero-arg via
    /// `make`, then configured with `config` before first use.
    pub fn register_converter<F>(
        &mut self,
        class: impl Into<String>,
        make: F,
        config: &[String],
    ) where
        F: FnOnce() -> Box<dyn TermConverter>,
    {
        let mut converter = make();
        converter.configure(config);
        self.converters.insert(class.into(), converter);
    }

    /// The custom converter declared for a class, if any.
    pub fn converter_for(&self, class: &str) -> Option<&dyn TermConverter> {
        self.converters.get(class).map(|c| c.as_ref())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
