//! Task creation for Taskdesk.
//!
//! An authenticated caller submits a title, an optional description and a
//! due date. The input is validated, the task is placed in the configured
//! default status, linked to its owner, and stored with a single write. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Input validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Service settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
