//! Domain models for evalmerge
//!
//! Input records mirror the exported JSON documents; output records are the
//! denormalized shape written to the destination file.

pub mod id;
pub mod input;
pub mod output;
pub mod text;

pub use id::RecordId;
pub use input::{BehaviorRecord, ClusterRecord, EvaluationRecord, PairRecord};
pub use output::{OutputBehavior, OutputRecord};
