//! Method signature resolution
//!
//! Given an account address and a method name, [`SignatureResolver`] finds
//! the parameter and return types the account's program exports for that
//! method. Callers use it to validate an invocation before building a
//! message; nothing is executed and no state is written.
//!
//! Resolution reads, in order: the latest state snapshot, the account at
//! the address, the program bound to the account's code id, and finally the
//! program's export table. The first failing step decides the error.

mod error;

pub use error::{ErrorClass, InvocationError, ResolveError};

use tracing::{debug, warn};

use crate::abi::{validate_method_name, AbiValue, ExportTable, FunctionSignature, MethodNameError};
use crate::crypto::Address;
use crate::programs::Program;
use crate::runtime::{ProgramLookup, SnapshotSource};
use crate::storage::StateError;

/// Resolves method signatures against the latest chain state
///
/// Holds no mutable state; share it freely between tasks.
pub struct SignatureResolver<S, R> {
    source: S,
    registry: R,
}

impl<S: SnapshotSource, R: ProgramLookup> SignatureResolver<S, R> {
    pub fn new(source: S, registry: R) -> Self {
        Self { source, registry }
    }

    /// Signature of `method` as exported by the program bound to `address`
    ///
    /// The returned value is a copy; changing it does not affect the
    /// program's export table.
    pub async fn resolve(&self, address: &Address, method: &str) -> Result<FunctionSignature, ResolveError> {
        validate_method(method)?;
        debug!("Resolving {:?} on {}", method, address);

        let program = self.program_for(address).await?;
        program
            .exports()
            .get(method)
            .cloned()
            .ok_or_else(|| ResolveError::OperationNotFound {
                address: *address,
                method: method.to_string(),
            })
    }

    /// Every method exported by the program bound to `address`
    pub async fn exports(&self, address: &Address) -> Result<ExportTable, ResolveError> {
        let program = self.program_for(address).await?;
        Ok(program.exports().clone())
    }

    /// Resolve `method` and check `args` against its parameter list
    pub async fn check_invocation(
        &self,
        address: &Address,
        method: &str,
        args: &[AbiValue],
    ) -> Result<FunctionSignature, InvocationError> {
        let signature = self.resolve(address, method).await?;
        signature
            .check_params(args)
            .map_err(|source| InvocationError::Arguments {
                method: method.to_string(),
                source,
            })?;
        Ok(signature)
    }

    /// Load the latest state and find the program bound to `address`
    async fn program_for(&self, address: &Address) -> Result<&Program, ResolveError> {
        let state = self
            .source
            .latest_state()
            .await
            .map_err(ResolveError::SnapshotUnavailable)?;

        let account = state.get_account(address).map_err(|e| match e {
            StateError::AccountNotFound(addr) => ResolveError::ObjectNotFound(addr),
            other => ResolveError::SnapshotUnavailable(other.into()),
        })?;

        if account.code.is_undefined() {
            return Err(ResolveError::ObjectHasNoImplementation(*address));
        }

        self.registry.lookup(&account.code).ok_or_else(|| {
            warn!(
                "Account {} is bound to unregistered code {:?} (state root {})",
                address,
                account.code,
                state.root()
            );
            ResolveError::ImplementationNotRegistered {
                address: *address,
                code: account.code,
            }
        })
    }
}

/// Reject names no program can export, before touching state
fn validate_method(method: &str) -> Result<(), ResolveError> {
    validate_method_name(method).map_err(|reason| match reason {
        MethodNameError::Empty => ResolveError::NoOperationSpecified,
        reason => ResolveError::MalformedOperationName {
            method: method.to_string(),
            reason,
        },
    })
}
