//! Relationship implementation for the multi-relational graph

use super::types::{EntityId, RelationKind};
use serde::{Deserialize, Serialize};

/// A directed labeled edge between two entities
///
/// Relationships have:
/// - A source entity (the edge goes FROM this entity)
/// - A target entity (the edge goes TO this entity)
/// - A relation kind taken verbatim from the input
///
/// Parallel relationships between the same ordered pair are permitted and
/// distinguished only by insertion order, even when the kind repeats.
/// Relationships are appended on ingestion and never removed or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Source entity (edge goes FROM this entity)
    pub source: EntityId,

    /// Target entity (edge goes TO this entity)
    pub target: EntityId,

    /// Kind of relationship (e.g. "FRIENDS_WITH", "STUDIES_WITH")
    pub kind: RelationKind,
}

impl Relationship {
    /// Create a new directed relationship
    pub fn new(source: EntityId, target: EntityId, kind: impl Into<RelationKind>) -> Self {
        Relationship {
            source,
            target,
            kind: kind.into(),
        }
    }

    /// Check if this relationship connects two entities, in either direction
    pub fn connects(&self, a: &EntityId, b: &EntityId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// Check if this relationship goes FROM a specific entity
    pub fn starts_from(&self, entity: &EntityId) -> bool {
        &self.source == entity
    }

    /// Check if this relationship goes TO a specific entity
    pub fn ends_at(&self, entity: &EntityId) -> bool {
        &self.target == entity
    }
}
