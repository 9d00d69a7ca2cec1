//! Entity implementation for the multi-relational graph

use super::types::{EntityId, TYPE_ATTRIBUTE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute storage for entities.
///
/// Keys are case-sensitive and unbounded (no fixed schema); insertion
/// order is preserved for display.
pub type AttributeMap = IndexMap<String, String>;

/// An entity (node) in the graph
///
/// Entities have:
/// - An opaque string ID, unique within the graph
/// - An ordered map of string attributes
///
/// They are created implicitly on first mention in either source file and
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity
    pub id: EntityId,

    /// Attributes associated with this entity
    pub attributes: AttributeMap,
}

impl Entity {
    /// Create a new entity with no attributes
    pub fn new(id: EntityId) -> Self {
        Entity {
            id,
            attributes: AttributeMap::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the key.
    /// Returns the old value if one was present.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Set an attribute only if the key is not already present.
    ///
    /// This is the first-write-wins rule for `Type`: once a relationship
    /// record has classified an entity, later records do not re-classify it.
    pub fn set_attribute_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Get an attribute value
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Get the reserved `Type` attribute, if set
    pub fn entity_type(&self) -> Option<&str> {
        self.get_attribute(TYPE_ATTRIBUTE)
    }

    /// Get number of attributes
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl std::hash::Hash for Entity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entity() {
        let entity = Entity::new(EntityId::new("A"));
        assert_eq!(entity.id, EntityId::new("A"));
        assert_eq!(entity.attribute_count(), 0);
        assert!(entity.entity_type().is_none());
    }

    #[test]
    fn test_set_attribute_replaces_by_key() {
        let mut entity = Entity::new(EntityId::new("A"));

        assert_eq!(entity.set_attribute("Name", "Frank"), None);
        assert_eq!(
            entity.set_attribute("Name", "Ally"),
            Some("Frank".to_string())
        );
        assert_eq!(entity.get_attribute("Name"), Some("Ally"));
        assert_eq!(entity.attribute_count(), 1);
    }

    #[test]
    fn test_set_attribute_if_absent() {
        let mut entity = Entity::new(EntityId::new("A"));

        entity.set_attribute_if_absent(TYPE_ATTRIBUTE, "Person");
        entity.set_attribute_if_absent(TYPE_ATTRIBUTE, "Field");
        assert_eq!(entity.entity_type(), Some("Person"));

        // A plain set still overwrites
        entity.set_attribute(TYPE_ATTRIBUTE, "Field");
        assert_eq!(entity.entity_type(), Some("Field"));
    }

    #[test]
    fn test_attribute_order_preserved() {
        let mut entity = Entity::new(EntityId::new("A"));
        entity.set_attribute("Name", "Frank");
        entity.set_attribute("Phone", "12345");
        entity.set_attribute("City", "Lisbon");

        let keys: Vec<&str> = entity.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Phone", "City"]);
    }

    #[test]
    fn test_entity_equality() {
        let mut e1 = Entity::new(EntityId::new("A"));
        let e2 = Entity::new(EntityId::new("A"));
        let e3 = Entity::new(EntityId::new("B"));

        e1.set_attribute("Name", "Frank");
        assert_eq!(e1, e2); // Same ID
        assert_ne!(e1, e3); // Different ID
    }
}
