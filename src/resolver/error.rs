//! Resolution errors

use crate::abi::{AbiError, MethodNameError};
use crate::core::CodeId;
use crate::crypto::Address;
use crate::runtime::ChainError;

/// How a caller should treat a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request cannot be satisfied as asked
    InvalidRequest,
    /// The node is unavailable or misconfigured
    Operational,
}

/// Signature resolution errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Empty method name. Always returned as this exact value, never wrapped.
    #[error("no method specified")]
    NoOperationSpecified,

    #[error("malformed method name {method:?}: {reason}")]
    MalformedOperationName { method: String, reason: MethodNameError },

    #[error("could not load latest state: {0}")]
    SnapshotUnavailable(#[source] ChainError),

    #[error("account {0} not found")]
    ObjectNotFound(Address),

    #[error("account {0} has no program")]
    ObjectHasNoImplementation(Address),

    #[error("program {code} of account {address} is not registered")]
    ImplementationNotRegistered { address: Address, code: CodeId },

    #[error("account {address} does not export method {method:?}")]
    OperationNotFound { address: Address, method: String },
}

impl ResolveError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ResolveError::SnapshotUnavailable(_) | ResolveError::ImplementationNotRegistered { .. } => {
                ErrorClass::Operational
            }
            _ => ErrorClass::InvalidRequest,
        }
    }

    pub fn is_invalid_request(&self) -> bool {
        self.class() == ErrorClass::InvalidRequest
    }
}

/// Errors from checking a proposed invocation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("invalid arguments for {method:?}: {source}")]
    Arguments {
        method: String,
        #[source]
        source: AbiError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StateError;
    use std::error::Error;

    #[test]
    fn test_classification() {
        let addr = Address::derive(b"x");
        assert_eq!(ResolveError::NoOperationSpecified.class(), ErrorClass::InvalidRequest);
        assert!(ResolveError::ObjectNotFound(addr).is_invalid_request());
        assert!(ResolveError::ObjectHasNoImplementation(addr).is_invalid_request());
        assert!(ResolveError::OperationNotFound { address: addr, method: "m".into() }.is_invalid_request());
        assert_eq!(
            ResolveError::ImplementationNotRegistered { address: addr, code: CodeId::of("gone") }.class(),
            ErrorClass::Operational
        );
        assert_eq!(
            ResolveError::SnapshotUnavailable(ChainError::NoHead).class(),
            ErrorClass::Operational
        );
    }

    #[test]
    fn test_snapshot_cause_is_preserved() {
        let addr = Address::derive(b"x");
        let err = ResolveError::SnapshotUnavailable(ChainError::State(StateError::MissingBlock(
            crate::crypto::Hash::digest(b"root"),
        )));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("missing"));
        assert!(ResolveError::ObjectNotFound(addr).source().is_none());
    }

    #[test]
    fn test_malformed_name_message() {
        let err = ResolveError::MalformedOperationName {
            method: "has space".into(),
            reason: MethodNameError::Whitespace,
        };
        assert!(err.is_invalid_request());
        assert_eq!(
            err.to_string(),
            "malformed method name \"has space\": name contains whitespace"
        );
    }

    #[test]
    fn test_sentinel_compares_by_value() {
        let err = ResolveError::NoOperationSpecified;
        assert_eq!(err, ResolveError::NoOperationSpecified);
        assert_eq!(err.to_string(), "no method specified");
    }
}
