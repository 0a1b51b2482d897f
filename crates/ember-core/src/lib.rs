//! Core types and definitions for the EMBER scene simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input, fire-emission state, events, snapshots, tuning
//! configuration and the collision tests. It has no dependency on any
//! runtime framework.

pub mod collision;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod fire;
pub mod input;
pub mod state;
pub mod types;
