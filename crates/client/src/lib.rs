//! QuickSight client model layer.
//!
//! This crate provides the typed request, result, and nested structure
//! models of the Amazon QuickSight API, together with the metadata a
//! transport needs to send them: per-operation HTTP bindings, declared
//! field constraints, and the service error catalog. It performs no I/O.
//!
//! Models are generated by three macros: `shape!` for structures,
//! `union_shape!` for tagged unions, and `string_enum!` for enumerations
//! that tolerate values added by newer service versions.

pub mod binding;
pub mod error;
pub mod models;
pub mod operations;
mod serde_helpers;
pub mod shape;
pub mod string_enum;
pub mod types;
pub mod union;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use binding::{HttpBinding, HttpMethod};
pub use error::{ModelError, Result, ServiceError, ServiceErrorKind};
pub use operations::{DynRequest, Operation, OperationKind};
pub use shape::{Render, Shape};
pub use string_enum::EnumDomain;
pub use types::{SensitiveString, Timestamp};
pub use union::Union;
pub use validation::{
    ConstraintViolation, EnumPolicy, Validate, ValidationPolicy, ValidationReport, ViolationKind,
};
