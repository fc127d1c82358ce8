//! Taskdesk: validated task creation.
//!
//! This crate provides the task creation core of a personal task tracker:
//! checking submitted input, assigning the default workflow status and the
//! creating owner, and persisting the resulting task.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! Authentication, view rendering, schema provisioning and status seeding
//! belong to collaborators and are reached only through ports.
//!
//! # Modules
//!
//! - [`task`]: Task input validation, creation and persistence

pub mod task;
