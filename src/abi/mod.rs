//! Program ABI: type vocabulary, method signatures, export tables

pub mod name;
pub mod signature;
pub mod types;

pub use name::{validate_method_name, MethodNameError, MAX_METHOD_NAME_LEN};
pub use signature::{AbiError, ExportTable, FunctionSignature};
pub use types::{AbiType, AbiValue};
