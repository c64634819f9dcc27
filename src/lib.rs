//! # Connect N
//!
//! A two-player gravity-drop connect-N game with a configurable board size
//! and win length. The game engine is a pure, synchronous state machine with
//! no knowledge of the terminal UI that drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win scanner, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI: game view and event loop

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
