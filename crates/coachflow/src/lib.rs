//! Assessment flow engine for gym and nutrition client onboarding.
//!
//! The crate owns the branching questionnaire catalogs, the condition
//! evaluator, the navigation resolver, and the session state machine.
//! Persistence and profile hand-off live behind collaborator traits so
//! the HTTP layer can wire in whatever store the deployment uses.

pub mod config;
pub mod error;
pub mod flows;
pub mod telemetry;
