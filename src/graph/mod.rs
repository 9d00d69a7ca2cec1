//! Core graph store implementation
//!
//! This module implements the directed multi-relational graph:
//! - Entities with ordered string attribute maps
//! - Directed labeled relationships, parallel edges permitted
//! - Incremental ingestion from the two line-oriented schema sources

pub mod entity;
pub mod ingest;
pub mod relationship;
pub mod store;
pub mod types;

// Re-export main types
pub use entity::{AttributeMap, Entity};
pub use ingest::{
    parse_property_line, parse_relationship_line, IngestError, IngestResult, PropertyRecord,
    RelationshipRecord,
};
pub use relationship::Relationship;
pub use store::GraphStore;
pub use types::{EntityId, RelationKind, TYPE_ATTRIBUTE};
