//! # RoomPlan Core
//!
//! Core types, identity allocation, and shared constants for the RoomPlan
//! layout engine. Provides the fundamental abstractions the designer crate
//! builds on: entity identity, geometry thresholds, and error types.

pub mod constants;
pub mod error;
pub mod id;

pub use error::{PlannerError, Result};
pub use id::{EntityId, IdProvider, SequentialIds, UuidIds};
