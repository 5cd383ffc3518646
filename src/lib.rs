//! Beacon is a terminal explorer for good news across places and years.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns explorer state, the action reducer, configuration, and the
//!   Gemini gateway that resolves places and retrieves dispatches.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`api`] defines the `generateContent` payloads and response schemas.
//! - [`auth`] stores and resolves the API key.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which initializes and dispatches into
//! [`core::app`] and [`ui::explore_loop`] for interactive sessions.

pub mod api;
pub mod auth;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
