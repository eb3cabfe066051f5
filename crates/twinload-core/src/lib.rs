//! twinload-core: Shared types for replaying an entity table into a TwinMaker workspace.
//!
//! This crate provides the foundational types used by the other twinload crates:
//! - The input `Record` as read from one CSV row
//! - Row classification (`RowKind`) into root, child, and related entities
//! - Local request shapes for the two remote operations
//! - Common error types

pub mod error;
pub mod request;
pub mod types;

pub use error::CoreError;
pub use request::{ComponentRequest, ComponentTypeRequest, EntityRequest, RelationshipProperty};
pub use types::{Record, RowKind};

/// Relationship type value that marks a hierarchical parent/child row.
pub const CHILD_OF: &str = "isChildOf";

/// Component type id registered once per run for non-hierarchical edges.
pub const RELATIONSHIP_TYPE_ID: &str = "relationship";

/// Display name of the relationship component type.
pub const RELATIONSHIP_TYPE_NAME: &str = "Relationship";

/// Key under which the relationship component is attached to an entity.
pub const RELATIONSHIP_COMPONENT: &str = "Relationship";
