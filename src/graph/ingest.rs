//! Line-oriented ingestion of the two entity schemas
//!
//! Both sources share the same framing: a header line that is skipped
//! unconditionally, blank lines that are ignored, and data lines whose
//! fields are separated by runs of whitespace. No escaping or quoting is
//! supported.
//!
//! Property source:
//!
//! ```text
//! ID      Property        Value
//! A       Name            Frank
//! A       Phone           12345
//! ```
//!
//! Relationship source:
//!
//! ```text
//! Relationship    ID1     Type1   ID2     Type2
//! FRIENDS_WITH    A       Person  C       Person
//! ```

use super::store::GraphStore;
use super::types::{EntityId, RelationKind, TYPE_ATTRIBUTE};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    /// The source path does not resolve. Raised before any mutation, so
    /// the store is left in its pre-call state.
    #[error("source {} not found", .0.display())]
    SourceNotFound(PathBuf),

    /// A non-blank relationship line did not split into exactly five
    /// tokens. Edges from earlier lines in the same call stay committed.
    #[error("error processing relationship: {0}")]
    InvalidRelationshipLine(String),

    /// A non-blank property line had fewer than two tokens.
    #[error("malformed property line: {0}")]
    MalformedPropertyLine(String),

    /// The source resolved but reading it failed.
    #[error("failed to read source")]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;

/// A parsed property line: `ID Property Value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// A parsed relationship line: `Relationship ID1 Type1 ID2 Type2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRecord {
    pub kind: String,
    pub id1: String,
    pub type1: String,
    pub id2: String,
    pub type2: String,
}

/// Parse a property line into (ID, PropertyName, Value).
///
/// The value is the remainder of the line after the first two tokens;
/// internal runs of whitespace collapse to single spaces. A line with
/// exactly two tokens yields an empty value.
pub fn parse_property_line(line: &str) -> IngestResult<PropertyRecord> {
    let mut tokens = line.split_whitespace();
    let (id, name) = match (tokens.next(), tokens.next()) {
        (Some(id), Some(name)) => (id, name),
        _ => return Err(IngestError::MalformedPropertyLine(line.to_string())),
    };
    let value = tokens.collect::<Vec<_>>().join(" ");

    Ok(PropertyRecord {
        id: id.to_string(),
        name: name.to_string(),
        value,
    })
}

/// Parse a relationship line into its five fields
pub fn parse_relationship_line(line: &str) -> IngestResult<RelationshipRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [kind, id1, type1, id2, type2] => Ok(RelationshipRecord {
            kind: kind.to_string(),
            id1: id1.to_string(),
            type1: type1.to_string(),
            id2: id2.to_string(),
            type2: type2.to_string(),
        }),
        _ => Err(IngestError::InvalidRelationshipLine(line.to_string())),
    }
}

fn open_source(path: &Path) -> IngestResult<BufReader<File>> {
    if !path.exists() {
        return Err(IngestError::SourceNotFound(path.to_path_buf()));
    }
    Ok(BufReader::new(File::open(path)?))
}

impl GraphStore {
    /// Build a store from the two schema files: properties first, then
    /// relationships.
    pub fn from_files(
        properties: impl AsRef<Path>,
        relationships: impl AsRef<Path>,
    ) -> IngestResult<Self> {
        let mut store = GraphStore::new();
        store.ingest_properties(properties)?;
        store.ingest_relationships(relationships)?;
        Ok(store)
    }

    /// Ingest entity properties from a file.
    ///
    /// Records are grouped by entity ID before the store is touched, so
    /// repeated lines for one ID merge into a single attribute map (later
    /// lines override earlier ones per key) and ingesting the same source
    /// twice is a no-op. Grouping first also means a malformed line leaves
    /// the store unchanged.
    ///
    /// Only entities are inserted or updated; relationships are untouched.
    pub fn ingest_properties(&mut self, source: impl AsRef<Path>) -> IngestResult<()> {
        let path = source.as_ref();
        let reader = open_source(path)?;

        let mut grouped: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        // Skip header
        for line in reader.lines().skip(1) {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record = parse_property_line(line)?;
            grouped
                .entry(record.id)
                .or_default()
                .insert(record.name, record.value);
        }
        debug!(
            source = %path.display(),
            entities = grouped.len(),
            "merged property records"
        );

        for (id, attributes) in grouped {
            let entity = self.get_or_create_entity(EntityId::new(id));
            for (name, value) in attributes {
                entity.set_attribute(name, value);
            }
        }
        Ok(())
    }

    /// Ingest entity relationships from a file.
    ///
    /// Each valid line ensures both endpoints exist, sets their `Type`
    /// attribute only if not already present, and appends a new directed
    /// edge. Lines commit one at a time: an invalid line fails the call
    /// but edges from earlier lines stay in the store. Repeated ingestion
    /// of the same source appends duplicate edges again.
    pub fn ingest_relationships(&mut self, source: impl AsRef<Path>) -> IngestResult<()> {
        let path = source.as_ref();
        let reader = open_source(path)?;

        let mut added = 0usize;
        // Skip header
        for line in reader.lines().skip(1) {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record = parse_relationship_line(line)?;

            let id1 = EntityId::new(record.id1);
            let id2 = EntityId::new(record.id2);
            self.get_or_create_entity(id1.clone())
                .set_attribute_if_absent(TYPE_ATTRIBUTE, record.type1);
            self.get_or_create_entity(id2.clone())
                .set_attribute_if_absent(TYPE_ATTRIBUTE, record.type2);
            self.add_relationship(id1, id2, RelationKind::new(record.kind));
            added += 1;
        }
        debug!(
            source = %path.display(),
            relationships = added,
            "ingested relationship records"
        );
        Ok(())
    }
}
