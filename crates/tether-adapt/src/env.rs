//! The shared adaptation environment.
//!
//! `LogicEnv` bundles the type declarations and the logic-class registry.
//! Every adapter takes it as an explicit parameter; nothing reaches for a
//! global behind the caller's back. A process-wide default handle exists
//! for embeddings that want one: it is initialized at most once, lazily
//! on first use, and is read-only afterwards.

use std::fmt;
use std::sync::OnceLock;

use tether_types::{ClassDecl, Declarations, TypeDeclError};

use crate::registry::{ClassDescriptor, ClassRegistry};

static DEFAULT_ENV: OnceLock<LogicEnv> = OnceLock::new();

/// The default environment was already initialized (or lazily created by
/// an earlier `default_handle` call).
#[derive(Debug)]
pub struct AlreadyInitialized;

impl fmt::Display for AlreadyInitialized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the default adaptation environment is already initialized")
    }
}

impl std::error::Error for AlreadyInitialized {}

/// The adaptation environment: declarations plus registry.
///
/// Built during a startup phase, read-only during adaptation.
#[derive(Default)]
pub struct LogicEnv {
    pub declarations: Declarations,
    pub registry: ClassRegistry,
}

impl LogicEnv {
    pub fn new() -> LogicEnv {
        LogicEnv::default()
    }

    /// Register a logic class: adds the descriptor to the registry and,
    /// when the name has no declaration yet, a simple (non-generic,
    /// ancestor-free) declaration alongside it.
    pub fn register_class(&mut self, descriptor: ClassDescriptor) -> Result<(), TypeDeclError> {
        if self.declarations.get(&descriptor.host_name).is_none() {
            self.declarations
                .declare(ClassDecl::simple(descriptor.host_name.clone()))?;
        }
        self.registry.register(descriptor)
    }

    /// Add a class declaration (generic parameters, ancestor
    /// instantiation) without registering a term shape for it.
    pub fn declare(&mut self, decl: ClassDecl) -> Result<(), TypeDeclError> {
        self.declarations.declare(decl)
    }

    /// Install `env` as the process-wide default. Fails when a default
    /// already exists -- initialization happens exactly once.
    pub fn init_default(env: LogicEnv) -> Result<(), AlreadyInitialized> {
        DEFAULT_ENV.set(env).map_err(|_| AlreadyInitialized)
    }

    /// The process-wide default environment, lazily initialized to an
    /// empty one when `init_default` was never called.
    pub fn default_handle() -> &'static LogicEnv {
        DEFAULT_ENV.get_or_init(LogicEnv::new)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_class_declares_the_name() {
        let mut env = LogicEnv::new();
        env.register_class(ClassDescriptor::new("Point")).unwrap();
        assert!(env.declarations.get("Point").is_some());
        assert!(env.registry.find_by_name("Point").is_some());
    }

    #[test]
    fn env_is_shareable_across_threads() {
        // Required for the static default handle.
        fn assert_sync<T: Sync>() {}
        assert_sync::<LogicEnv>();
    }

    #[test]
    fn default_handle_initializes_once() {
        // The lazily-created default wins; a later explicit init fails.
        let first = LogicEnv::default_handle();
        assert!(LogicEnv::init_default(LogicEnv::new()).is_err());
        let second = LogicEnv::default_handle();
        assert!(std::ptr::eq(first, second));
    }
}
