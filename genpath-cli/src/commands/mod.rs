//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Show every property of a path
//! - `normalize`: Print the normalized form of a path
//! - `parent`: Print the parent of a path
//! - `child`: Append segments to a path
//! - `ancestors`: List the ancestors of a path
//! - `relative`: Print the segments of a path below a base
//! - `contains`: Check whether a path contains another
//! - `relationship`: Classify the relationship between two paths
//! - `check`: Validate paths and their schemes
//! - `completions`: Generate shell completion scripts

pub mod ancestors;
pub mod check;
pub mod child;
pub mod completions;
pub mod contains;
pub mod inspect;
pub mod normalize;
pub mod parent;
pub mod relationship;
pub mod relative;

pub use ancestors::AncestorsCommand;
pub use check::CheckCommand;
pub use child::ChildCommand;
pub use completions::CompletionsCommand;
pub use contains::ContainsCommand;
pub use inspect::InspectCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use relationship::RelationshipCommand;
pub use relative::RelativeCommand;
