//! Graph analysis algorithms
//!
//! The only algorithm with real combinatorial content in this crate:
//! all-cliques enumeration over filtered undirected projections.

pub mod clique;

// Re-export algorithms
pub use clique::{
    enumerate_cliques, find_friend_cliques, find_person_cliques, FRIEND_RELATION, PERSON_TYPE,
};
