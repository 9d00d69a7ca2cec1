//! Core type definitions for the graph store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved attribute key classifying an entity (e.g. "Person", "Field").
///
/// Relationship ingestion sets it first-write-wins; property ingestion
/// overwrites it like any other attribute.
pub const TYPE_ATTRIBUTE: &str = "Type";

/// Opaque string identifier for an entity, unique within the graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

/// Relation kind of a directed edge, taken verbatim from the input
/// (e.g. "FRIENDS_WITH", "STUDIES_WITH")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RelationKind(String);

impl RelationKind {
    pub fn new(kind: impl Into<String>) -> Self {
        RelationKind(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RelationKind {
    fn from(s: String) -> Self {
        RelationKind(s)
    }
}

impl From<&str> for RelationKind {
    fn from(s: &str) -> Self {
        RelationKind(s.to_string())
    }
}
