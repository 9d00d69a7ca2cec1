//! All-cliques enumeration over filtered projections
//!
//! A clique is a subset of nodes that is pairwise fully connected. The
//! functions here enumerate *all* cliques (every singleton, every
//! connected pair, and so on up to the maximal ones) as a complete
//! combinatorial listing, not only the maximal results.
//!
//! This is exponential in the node count (a complete graph on n nodes has
//! 2^n - 1 cliques) and will not scale to big graphs. No pruning or
//! memoization is applied; callers wrapping this in a service should
//! impose their own deadline around the call.

use crate::graph::{Entity, EntityId, GraphStore, Relationship};
use rustc_hash::FxHashSet;
use std::collections::HashMap;
use tracing::debug;

/// Relation kind selected by the friend projection
pub const FRIEND_RELATION: &str = "FRIENDS_WITH";

/// Entity type selected by the person projection
pub const PERSON_TYPE: &str = "Person";

/// Undirected simple view of the store under an edge predicate.
///
/// Direction is discarded and parallel edges collapse to one undirected
/// pair. Only entities with at least one surviving edge are included, so
/// a predicate that matches nothing yields an empty view. Rebuilt fresh
/// for every enumeration request; never persisted.
struct Projection {
    /// Mapping from dense index (0..N) back to EntityId
    index_to_id: Vec<EntityId>,
    /// Adjacency per dense index, sorted and deduplicated
    neighbors: Vec<Vec<usize>>,
}

impl Projection {
    fn new<F>(store: &GraphStore, mut predicate: F) -> Self
    where
        F: FnMut(&Relationship, &Entity, &Entity) -> bool,
    {
        let mut index_to_id: Vec<EntityId> = Vec::new();
        let mut id_to_index: HashMap<EntityId, usize> = HashMap::new();
        let mut neighbors: Vec<Vec<usize>> = Vec::new();
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();

        fn intern(
            id: &EntityId,
            id_to_index: &mut HashMap<EntityId, usize>,
            index_to_id: &mut Vec<EntityId>,
            neighbors: &mut Vec<Vec<usize>>,
        ) -> usize {
            *id_to_index.entry(id.clone()).or_insert_with(|| {
                index_to_id.push(id.clone());
                neighbors.push(Vec::new());
                index_to_id.len() - 1
            })
        }

        for rel in store.relationships() {
            // Endpoints always exist by the ingestion invariant
            let (source, target) = match (store.get_entity(&rel.source), store.get_entity(&rel.target))
            {
                (Some(source), Some(target)) => (source, target),
                _ => continue,
            };
            if !predicate(rel, source, target) {
                continue;
            }
            // Self-loops cannot participate in a simple projection
            if rel.source == rel.target {
                continue;
            }

            let u = intern(&rel.source, &mut id_to_index, &mut index_to_id, &mut neighbors);
            let v = intern(&rel.target, &mut id_to_index, &mut index_to_id, &mut neighbors);
            let pair = (u.min(v), u.max(v));
            if seen.insert(pair) {
                neighbors[u].push(v);
                neighbors[v].push(u);
            }
        }

        for adjacency in &mut neighbors {
            adjacency.sort_unstable();
        }

        Projection {
            index_to_id,
            neighbors,
        }
    }

    fn node_count(&self) -> usize {
        self.index_to_id.len()
    }
}

/// Enumerate every clique of the undirected simple graph derived from the
/// store under `predicate`.
///
/// The predicate sees each directed edge together with its resolved
/// endpoint entities and decides whether the edge contributes to the
/// projection. Results are cliques of size >= 1 with members listed in
/// projection order; no ordering is guaranteed between cliques. Zero
/// surviving edges produce zero cliques, since an entity only enters the
/// projection through an edge.
pub fn enumerate_cliques<F>(store: &GraphStore, predicate: F) -> Vec<Vec<EntityId>>
where
    F: FnMut(&Relationship, &Entity, &Entity) -> bool,
{
    let projection = Projection::new(store, predicate);
    debug!(nodes = projection.node_count(), "built clique projection");

    let mut cliques: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    for v in 0..projection.node_count() {
        // Restricting candidates to higher indices produces each clique
        // exactly once.
        let candidates: Vec<usize> = projection.neighbors[v]
            .iter()
            .copied()
            .filter(|&u| u > v)
            .collect();
        current.push(v);
        extend(&projection.neighbors, &mut current, &candidates, &mut cliques);
        current.pop();
    }

    cliques
        .into_iter()
        .map(|clique| {
            clique
                .into_iter()
                .map(|index| projection.index_to_id[index].clone())
                .collect()
        })
        .collect()
}

/// Recursive extension step: emit the current clique, then grow it with
/// each candidate in turn, shrinking the candidate set to the nodes
/// adjacent to every member so far.
fn extend(
    neighbors: &[Vec<usize>],
    current: &mut Vec<usize>,
    candidates: &[usize],
    cliques: &mut Vec<Vec<usize>>,
) {
    cliques.push(current.clone());

    for (i, &next) in candidates.iter().enumerate() {
        // Later candidates adjacent to `next` keep the set pairwise connected
        let narrowed: Vec<usize> = candidates[i + 1..]
            .iter()
            .copied()
            .filter(|u| neighbors[next].binary_search(u).is_ok())
            .collect();
        current.push(next);
        extend(neighbors, current, &narrowed, cliques);
        current.pop();
    }
}

/// Find all cliques of friends.
///
/// The graph is projected into an undirected graph and only edges with
/// relation kind `FRIENDS_WITH` are considered.
pub fn find_friend_cliques(store: &GraphStore) -> Vec<Vec<EntityId>> {
    enumerate_cliques(store, |rel, _, _| rel.kind.as_str() == FRIEND_RELATION)
}

/// Find all cliques of persons.
///
/// The graph is projected into an undirected graph and only edges whose
/// endpoints both have `Type` equal to `Person` are considered; the
/// relation kind is irrelevant.
pub fn find_person_cliques(store: &GraphStore) -> Vec<Vec<EntityId>> {
    enumerate_cliques(store, |_, source, target| {
        source.entity_type() == Some(PERSON_TYPE) && target.entity_type() == Some(PERSON_TYPE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EntityId, GraphStore, TYPE_ATTRIBUTE};

    fn sorted(mut cliques: Vec<Vec<EntityId>>) -> Vec<Vec<EntityId>> {
        for clique in &mut cliques {
            clique.sort();
        }
        cliques.sort();
        cliques
    }

    fn ids(members: &[&str]) -> Vec<EntityId> {
        members.iter().map(|m| EntityId::new(*m)).collect()
    }

    #[test]
    fn test_triangle_yields_seven_cliques() {
        let mut store = GraphStore::new();
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "FRIENDS_WITH");
        store.add_relationship(EntityId::new("A"), EntityId::new("C"), "FRIENDS_WITH");
        store.add_relationship(EntityId::new("B"), EntityId::new("C"), "FRIENDS_WITH");

        let cliques = sorted(find_friend_cliques(&store));
        assert_eq!(
            cliques,
            vec![
                ids(&["A"]),
                ids(&["A", "B"]),
                ids(&["A", "B", "C"]),
                ids(&["A", "C"]),
                ids(&["B"]),
                ids(&["B", "C"]),
                ids(&["C"]),
            ]
        );
    }

    #[test]
    fn test_direction_discarded_and_parallel_edges_collapse() {
        let mut store = GraphStore::new();
        // Both directions plus a duplicate: still one undirected pair
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "FRIENDS_WITH");
        store.add_relationship(EntityId::new("B"), EntityId::new("A"), "FRIENDS_WITH");
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "FRIENDS_WITH");

        let cliques = sorted(find_friend_cliques(&store));
        assert_eq!(cliques, vec![ids(&["A"]), ids(&["A", "B"]), ids(&["B"])]);
    }

    #[test]
    fn test_filtered_edges_do_not_leak() {
        let mut store = GraphStore::new();
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "FRIENDS_WITH");
        store.add_relationship(EntityId::new("B"), EntityId::new("C"), "STUDIES_WITH");

        let cliques = sorted(find_friend_cliques(&store));
        // C has no surviving edge, so it never appears; neither does {B,C}
        assert_eq!(cliques, vec![ids(&["A"]), ids(&["A", "B"]), ids(&["B"])]);
    }

    #[test]
    fn test_no_matching_edges_yields_no_cliques() {
        let mut store = GraphStore::new();
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "STUDIES_WITH");

        assert!(find_friend_cliques(&store).is_empty());
    }

    #[test]
    fn test_person_filter_ignores_relation_kind() {
        let mut store = GraphStore::new();
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "STUDIES_WITH");
        store.add_relationship(EntityId::new("B"), EntityId::new("C"), "CLASSMATE");
        for id in ["A", "B", "C"] {
            store
                .get_entity_mut(&EntityId::new(id))
                .unwrap()
                .set_attribute(TYPE_ATTRIBUTE, "Person");
        }

        let cliques = sorted(find_person_cliques(&store));
        assert_eq!(
            cliques,
            vec![
                ids(&["A"]),
                ids(&["A", "B"]),
                ids(&["B"]),
                ids(&["B", "C"]),
                ids(&["C"]),
            ]
        );
    }

    #[test]
    fn test_person_filter_excludes_other_types() {
        let mut store = GraphStore::new();
        store.add_relationship(EntityId::new("A"), EntityId::new("X"), "RESEARCHES");
        store
            .get_entity_mut(&EntityId::new("A"))
            .unwrap()
            .set_attribute(TYPE_ATTRIBUTE, "Person");
        store
            .get_entity_mut(&EntityId::new("X"))
            .unwrap()
            .set_attribute(TYPE_ATTRIBUTE, "Field");

        assert!(find_person_cliques(&store).is_empty());
    }

    #[test]
    fn test_self_loop_is_skipped() {
        let mut store = GraphStore::new();
        store.add_relationship(EntityId::new("A"), EntityId::new("A"), "FRIENDS_WITH");
        store.add_relationship(EntityId::new("A"), EntityId::new("B"), "FRIENDS_WITH");

        let cliques = sorted(find_friend_cliques(&store));
        assert_eq!(cliques, vec![ids(&["A"]), ids(&["A", "B"]), ids(&["B"])]);
    }

    #[test]
    fn test_complete_graph_clique_count() {
        // K4 has 2^4 - 1 = 15 cliques
        let mut store = GraphStore::new();
        let members = ["A", "B", "C", "D"];
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                store.add_relationship(EntityId::new(*a), EntityId::new(*b), "FRIENDS_WITH");
            }
        }

        let cliques = find_friend_cliques(&store);
        assert_eq!(cliques.len(), 15);
        assert_eq!(cliques.iter().filter(|c| c.len() == 4).count(), 1);
        assert_eq!(cliques.iter().filter(|c| c.len() == 3).count(), 4);
        assert_eq!(cliques.iter().filter(|c| c.len() == 2).count(), 6);
        assert_eq!(cliques.iter().filter(|c| c.len() == 1).count(), 4);
    }
}
