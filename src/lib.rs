//! relgraph
//!
//! Builds a typed, multi-relational graph from two flat-text schemas
//! (entity properties, entity relationships) and answers structural
//! queries over it: enumeration of all cliques under two edge-filtering
//! projections.
//!
//! # Architecture
//!
//! Two components, loaded in dependency order:
//!
//! - `graph`: the store itself, with entities as nodes carrying ordered
//!   string attribute maps, relationships as labeled directed
//!   multi-edges, and incremental ingestion from the two line-oriented
//!   sources.
//! - `algo`: derives an undirected simple graph under a caller-supplied
//!   edge predicate and enumerates every clique in it, singletons
//!   included.
//!
//! Rendering, HTTP serving, and layout are external concerns; consumers
//! drive the store's node/edge iteration contract and the two clique
//! operations.
//!
//! ## Example Usage
//!
//! ```rust
//! use relgraph::algo::find_friend_cliques;
//! use relgraph::graph::{EntityId, GraphStore, RelationKind};
//!
//! let mut store = GraphStore::new();
//! for (a, b) in [("A", "B"), ("A", "C"), ("B", "C")] {
//!     store.add_relationship(
//!         EntityId::new(a),
//!         EntityId::new(b),
//!         RelationKind::new("FRIENDS_WITH"),
//!     );
//! }
//!
//! // A triangle holds 7 cliques: 3 singletons, 3 pairs, 1 triple
//! let cliques = find_friend_cliques(&store);
//! assert_eq!(cliques.len(), 7);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{enumerate_cliques, find_friend_cliques, find_person_cliques};
pub use graph::{
    AttributeMap, Entity, EntityId, GraphStore, IngestError, IngestResult, RelationKind,
    Relationship, TYPE_ATTRIBUTE,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
