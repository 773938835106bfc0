//! Shared test fixtures for PairForge crates.
//!
//! This crate provides round builders and invariant assertions for testing.
//! It only depends on `pairforge-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`fixtures`] - compact builders for players, teams and rounds
//! - [`invariants`] - assertions over generated rounds and constraint state
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! pairforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use pairforge_test::fixtures::{p, round_of};
//! use pairforge_test::invariants::assert_round_covers_pool;
//! ```

pub mod fixtures;
pub mod invariants;

pub use fixtures::{p, players, round_of, team};
pub use invariants::{
    assert_every_pair_partnered_once, assert_round_covers_pool, assert_rounds_use_only,
    assert_state_symmetric,
};
