//! The battle state engine.
//!
//! Commands go in, snapshots come out. The engine validates nothing at the
//! boundary: invalid references and out-of-range values are absorbed as
//! no-ops or clamped results, so `apply` is total.
//!
//! # Key Concepts
//!
//! - **Commands**: the closed set of changes a caller may request
//! - **Transitions**: one pure function per command, snapshot in, snapshot out
//! - **Engine**: owns the id sequence, configuration and guards
//! - **Session**: owns the current snapshot and serializes commands

mod command;
mod config;
mod ids;
mod machine;
mod preview;
mod session;
pub mod transition;

pub use command::{Command, CommandKind};
pub use config::{EngineConfig, ZeroDeltaPolicy};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use machine::BattleEngine;
pub use preview::preview_end_turn;
pub use session::BattleSession;
