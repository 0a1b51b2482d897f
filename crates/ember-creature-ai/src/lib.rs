//! Creature behavior for EMBER.
//!
//! Implements the per-creature state machine (wander, chase, captured,
//! respawning), steering helpers, and the respawn scheduler.

pub mod fsm;
pub mod respawn;
pub mod steering;
