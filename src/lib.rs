//! # Connect Four
//!
//! Rules engine for Connect Four: two players alternately drop pieces into the
//! columns of a fixed-size grid until one of them has four in a row or the
//! grid is full.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players and registry, win detection,
//!   game state machine
//! - [`session`] — Command-driven harness used by the `connect_four` binary
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
