//! Validation-based enforcement for restored snapshots.
//!
//! This module uses Stillwater's `Validation` type to accumulate ALL
//! violations instead of stopping at the first one, so a rejected snapshot
//! is reported in full.
//!
//! # Example
//!
//! ```rust
//! use roundkeeper::core::GameState;
//! use roundkeeper::enforcement::{SnapshotRules, ViolationStrategy};
//!
//! let rules = SnapshotRules::new()
//!     .require_pred(|s| s.characters.len() <= 12, "roster too large")
//!     .on_violation(ViolationStrategy::Repair);
//!
//! assert!(rules.enforce(&GameState::new()).is_success());
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::{repair, SnapshotCheck, SnapshotRules, SnapshotValidation};
pub use violations::{SnapshotViolation, ViolationStrategy};
