//! Request, result, and nested structure models for the QuickSight API.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. Enumerations live in `enums`.

pub mod common;
pub mod dashboards;
pub mod data_sets;
pub mod data_sources;
pub mod enums;
pub mod groups;
pub mod iam_policy_assignments;
pub mod ingestions;
pub mod tags;
pub mod templates;
pub mod users;

pub use common::{ResourcePermission, Tag};
pub use dashboards::*;
pub use data_sets::*;
pub use data_sources::*;
pub use enums::*;
pub use groups::*;
pub use iam_policy_assignments::*;
pub use ingestions::*;
pub use tags::*;
pub use templates::*;
pub use users::*;
