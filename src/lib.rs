//! # Taskly
//!
//! A small task-list manager: add, edit, complete, delete, filter and sort
//! short text tasks, with the list persisted between sessions.
//!
//! The core is UI-independent. A [`libs::controller::Controller`] receives
//! intents, mutates the [`libs::store::TaskStore`], saves a snapshot through
//! [`db::tasks::Tasks`] and exposes a derived [`libs::query::ViewModel`] that
//! any renderer can draw. The bundled binary renders it as a terminal table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskly::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
