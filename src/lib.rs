//! # launchpad
//!
//! Self-hosted web panel that launches a desktop AI agent per task.
//!
//! This library provides:
//! - The task submission widget behind the panel's modal dialog
//! - An HTTP API that accepts tasks and spawns one agent process each
//! - A fire-and-forget process launcher
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────────────────────────────┐
//!        │           TaskWidget             │
//!        │  (modal / input / notifier DI)   │
//!        └────────────────┬─────────────────┘
//!                         │ POST /agent {"task": ...}
//!                         ▼
//!                ┌─────────────────┐
//!                │  Launch server  │──spawn──▶ agent process
//!                └─────────────────┘
//! ```
//!
//! ## Task Flow
//! 1. The widget trims and validates the task text
//! 2. Its transport posts `{"task": ...}` to `/agent`
//! 3. The server spawns the configured agent command, detached
//! 4. The acknowledgment is echoed back to the user
//!
//! ## Modules
//! - `widget`: modal dialog state, validation, submission
//! - `api`: HTTP surface (launch endpoint, health, static panel assets)
//! - `launcher`: detached agent process spawning
//! - `config`: environment-driven configuration

pub mod api;
pub mod config;
pub mod launcher;
pub mod widget;

pub use config::Config;
pub use launcher::{AgentLauncher, ProcessLauncher};
pub use widget::{SubmitOutcome, TaskWidget};
