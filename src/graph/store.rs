//! In-memory graph storage

use super::entity::Entity;
use super::relationship::Relationship;
use super::types::{EntityId, RelationKind};
use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

/// The canonical directed multi-relational graph
///
/// Owns an insertion-ordered entity map, an append-only relationship list
/// and an outgoing adjacency index:
/// - nodes: EntityId -> Entity
/// - edges: Vec<Relationship> (parallel edges kept, position is identity)
/// - outgoing: EntityId -> Vec of edge positions
///
/// Not thread-safe; callers needing concurrent access must serialize
/// externally (one writer at a time, readers only after ingestion
/// completes).
#[derive(Debug, Default)]
pub struct GraphStore {
    /// Entity storage, iterated in first-mention order
    nodes: IndexMap<EntityId, Entity>,

    /// Relationship storage, iterated in ingestion order
    edges: Vec<Relationship>,

    /// Outgoing edge positions for each source entity
    outgoing: FxHashMap<EntityId, Vec<usize>>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entity by ID
    pub fn get_entity(&self, id: &EntityId) -> Option<&Entity> {
        self.nodes.get(id)
    }

    /// Get a mutable entity by ID
    pub fn get_entity_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        self.nodes.get_mut(id)
    }

    /// Check if an entity exists
    pub fn has_entity(&self, id: &EntityId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get an entity by ID, creating an empty one if absent.
    ///
    /// Entities come into existence on first mention in either source;
    /// this is the single place that rule is implemented.
    pub fn get_or_create_entity(&mut self, id: EntityId) -> &mut Entity {
        match self.nodes.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(Entity::new(id))
            }
        }
    }

    /// Append a directed relationship, creating either endpoint on demand.
    ///
    /// Parallel relationships are kept as-is: calling this twice with the
    /// same arguments stores two edges.
    pub fn add_relationship(
        &mut self,
        source: EntityId,
        target: EntityId,
        kind: impl Into<RelationKind>,
    ) {
        self.get_or_create_entity(source.clone());
        self.get_or_create_entity(target.clone());

        let position = self.edges.len();
        self.outgoing.entry(source.clone()).or_default().push(position);
        self.edges.push(Relationship::new(source, target, kind.into()));
    }

    /// Iterate all entities as (ID, attribute map) pairs, in first-mention order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.nodes.values()
    }

    /// Iterate all relationships as (source, target, kind) triples, in ingestion order
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.edges.iter()
    }

    /// Get all relationships leaving an entity
    pub fn outgoing_relationships(&self, id: &EntityId) -> Vec<&Relationship> {
        self.outgoing
            .get(id)
            .map(|positions| positions.iter().map(|&p| &self.edges[p]).collect())
            .unwrap_or_default()
    }

    /// Number of distinct entities this entity has outgoing relationships to.
    /// Used by presentation layers to weight nodes by connectedness.
    pub fn neighbor_count(&self, id: &EntityId) -> usize {
        let mut neighbors: FxHashSet<&EntityId> = FxHashSet::default();
        for rel in self.outgoing_relationships(id) {
            neighbors.insert(&rel.target);
        }
        neighbors.len()
    }

    /// Get total entity count
    pub fn entity_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total relationship count
    pub fn relationship_count(&self) -> usize {
        self.edges.len()
    }
}
