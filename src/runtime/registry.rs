//! Program registry - maps code ids to built-in programs

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::core::CodeId;
use crate::programs::Program;

/// Lookup of programs by code id
pub trait ProgramLookup: Send + Sync {
    /// The program registered under `code`, or `None` if unknown
    fn lookup(&self, code: &CodeId) -> Option<&Program>;
}

impl<T: ProgramLookup + ?Sized> ProgramLookup for Arc<T> {
    fn lookup(&self, code: &CodeId) -> Option<&Program> {
        (**self).lookup(code)
    }
}

impl<T: ProgramLookup + ?Sized> ProgramLookup for &T {
    fn lookup(&self, code: &CodeId) -> Option<&Program> {
        (**self).lookup(code)
    }
}

/// Registry of programs
///
/// Each registry is an independent value; nothing is shared between
/// instances, so tests install and remove programs without interference.
#[derive(Debug, Clone, Default)]
pub struct ProgramRegistry {
    programs: HashMap<CodeId, Program>,
}

impl ProgramRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in program under its own code id
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for program in Program::builtins() {
            registry.register_builtin(program);
        }
        registry
    }

    /// Register `program` under an explicit code id, returning any program
    /// it replaced
    pub fn register(&mut self, code: CodeId, program: impl Into<Program>) -> Option<Program> {
        let program = program.into();
        debug!("Registering program {} under {:?}", program.name(), code);
        self.programs.insert(code, program)
    }

    /// Register `program` under its canonical code id
    pub fn register_builtin(&mut self, program: impl Into<Program>) -> CodeId {
        let program = program.into();
        let code = program.code_id();
        self.register(code, program);
        code
    }

    /// Remove the program registered under `code`
    pub fn deregister(&mut self, code: &CodeId) -> Option<Program> {
        self.programs.remove(code)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Registered code ids
    pub fn code_ids(&self) -> impl Iterator<Item = &CodeId> {
        self.programs.keys()
    }
}

impl ProgramLookup for ProgramRegistry {
    fn lookup(&self, code: &CodeId) -> Option<&Program> {
        self.programs.get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs::{FakeProgram, TokenProgram};

    #[test]
    fn test_builtins_registered() {
        let registry = ProgramRegistry::with_builtins();
        assert_eq!(registry.len(), 3);
        let token = registry.lookup(&CodeId::of(TokenProgram::NAME)).unwrap();
        assert_eq!(token.name(), "token");
        assert!(registry.lookup(&CodeId::UNDEFINED).is_none());
    }

    #[test]
    fn test_register_under_arbitrary_code() {
        let mut registry = ProgramRegistry::new();
        let code = CodeId::of("some test code");
        assert!(registry.register(code, FakeProgram::new()).is_none());
        assert_eq!(registry.lookup(&code).unwrap().name(), "fake");

        let removed = registry.deregister(&code).unwrap();
        assert_eq!(removed.name(), "fake");
        assert!(registry.lookup(&code).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registries_are_independent() {
        let mut a = ProgramRegistry::with_builtins();
        let b = ProgramRegistry::with_builtins();
        let code = a.register_builtin(FakeProgram::new());

        assert!(a.lookup(&code).is_some());
        assert!(b.lookup(&code).is_none());
    }

    #[test]
    fn test_lookup_through_arc() {
        let registry = Arc::new(ProgramRegistry::with_builtins());
        let code = CodeId::of(TokenProgram::NAME);
        assert!(ProgramLookup::lookup(&registry, &code).is_some());
    }
}
