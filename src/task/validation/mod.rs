//! Task input validation.
//!
//! This module provides the raw and validated input records, the field-keyed
//! error types, the individual field rules, and the default validator that
//! combines them.

mod error;
mod input;
pub mod rules;
pub mod service;

pub use error::{FieldViolation, TaskField, ValidationError};
pub use input::{RawTaskInput, ValidatedTaskInput};
pub use service::DefaultTaskValidator;
