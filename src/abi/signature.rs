//! Method signatures and program export tables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::name::{validate_method_name, MethodNameError};
use super::types::{AbiType, AbiValue};

/// Parameter and return types of one exported method
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Parameter types, in call order
    pub params: Vec<AbiType>,
    /// Return types, in order
    pub returns: Vec<AbiType>,
}

impl FunctionSignature {
    pub fn new(params: Vec<AbiType>, returns: Vec<AbiType>) -> Self {
        Self { params, returns }
    }

    /// Check that `args` match the parameter list by count and type
    pub fn check_params(&self, args: &[AbiValue]) -> Result<(), AbiError> {
        if args.len() != self.params.len() {
            return Err(AbiError::ArityMismatch {
                expected: self.params.len(),
                actual: args.len(),
            });
        }

        for (index, (expected, arg)) in self.params.iter().zip(args).enumerate() {
            let actual = arg.abi_type();
            if actual != *expected {
                return Err(AbiError::TypeMismatch {
                    index,
                    expected: *expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}

/// Errors from checking arguments against a signature
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    #[error("expected {expected} arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("argument {index}: expected {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        expected: AbiType,
        actual: AbiType,
    },
}

/// Exported methods of a program, keyed by name
///
/// Names are unique: inserting an existing name replaces its signature.
/// Every name satisfies [`validate_method_name`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ExportTable {
    methods: BTreeMap<String, FunctionSignature>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method, returning the signature it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        signature: FunctionSignature,
    ) -> Result<Option<FunctionSignature>, MethodNameError> {
        let name = name.into();
        validate_method_name(&name)?;
        Ok(self.methods.insert(name, signature))
    }

    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Method names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionSignature)> {
        self.methods.iter().map(|(name, sig)| (name.as_str(), sig))
    }
}

/// Collects a table, dropping entries whose names are rejected
impl<S: Into<String>> FromIterator<(S, FunctionSignature)> for ExportTable {
    fn from_iter<I: IntoIterator<Item = (S, FunctionSignature)>>(iter: I) -> Self {
        let mut table = ExportTable::new();
        for (name, signature) in iter {
            let name = name.into();
            if let Err(e) = table.insert(name.as_str(), signature) {
                warn!("Dropping export {:?}: {}", name, e);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Address;

    fn transfer_sig() -> FunctionSignature {
        FunctionSignature::new(
            vec![AbiType::Address, AbiType::TokenAmount],
            vec![AbiType::Boolean],
        )
    }

    #[test]
    fn test_check_params_accepts_matching_args() {
        let args = [
            AbiValue::Address(Address::derive(b"to")),
            AbiValue::TokenAmount(10),
        ];
        assert_eq!(transfer_sig().check_params(&args), Ok(()));
    }

    #[test]
    fn test_check_params_arity() {
        let args = [AbiValue::Address(Address::derive(b"to"))];
        assert_eq!(
            transfer_sig().check_params(&args),
            Err(AbiError::ArityMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(FunctionSignature::default().check_params(&[]), Ok(()));
    }

    #[test]
    fn test_check_params_reports_first_bad_type() {
        let args = [AbiValue::Address(Address::derive(b"to")), AbiValue::UInt64(10)];
        assert_eq!(
            transfer_sig().check_params(&args),
            Err(AbiError::TypeMismatch {
                index: 1,
                expected: AbiType::TokenAmount,
                actual: AbiType::UInt64,
            })
        );
    }

    #[test]
    fn test_export_table_names_unique() {
        let mut table = ExportTable::new();
        assert_eq!(table.insert("transfer", transfer_sig()), Ok(None));
        let replaced = table.insert("transfer", FunctionSignature::default());
        assert_eq!(replaced, Ok(Some(transfer_sig())));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("transfer"), Some(&FunctionSignature::default()));
    }

    #[test]
    fn test_export_table_json_shape() {
        let table: ExportTable = [("getOwner", FunctionSignature::new(vec![], vec![AbiType::Address]))]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["getOwner"]["returns"][0], "address");
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["getOwner"]);
    }

    #[test]
    fn test_export_table_rejects_bad_names() {
        let mut table = ExportTable::new();
        assert_eq!(table.insert("", transfer_sig()), Err(MethodNameError::Empty));
        assert_eq!(
            table.insert("has space", transfer_sig()),
            Err(MethodNameError::Whitespace)
        );
        assert!(table.is_empty());

        let collected: ExportTable = [
            ("", transfer_sig()),
            ("has space", transfer_sig()),
            ("transfer", transfer_sig()),
        ]
        .into_iter()
        .collect();
        assert_eq!(collected.names().collect::<Vec<_>>(), vec!["transfer"]);
    }
}
