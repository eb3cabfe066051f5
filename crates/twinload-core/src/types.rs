//! Input records and their classification.
//!
//! A record is one row of the input table. Every record maps to exactly one
//! entity creation; which shape that creation takes is decided by [`RowKind`].

use serde::{Deserialize, Deserializer};

use crate::error::{CoreError, Result};
use crate::CHILD_OF;

// ── Record ────────────────────────────────────────────────────────

/// One row of the input table (`from,to,type`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Entity the row creates.
    pub from: String,

    /// Parent or relationship target. `None` for a root entity.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to: Option<String>,

    /// `isChildOf` for hierarchy, anything else names a custom relationship.
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    pub relation_type: Option<String>,

    /// 1-based line in the source file, filled in by the reader.
    #[serde(skip)]
    pub line: u64,
}

impl Record {
    pub fn new(from: &str, to: Option<&str>, relation_type: Option<&str>) -> Self {
        Self {
            from: from.to_string(),
            to: to.filter(|s| !s.is_empty()).map(str::to_string),
            relation_type: relation_type.filter(|s| !s.is_empty()).map(str::to_string),
            line: 0,
        }
    }

    /// Decide which kind of entity this record creates.
    ///
    /// The order of checks matters: an empty `to` wins over any `type`, and
    /// only an exact, case-sensitive `isChildOf` selects the hierarchy.
    pub fn kind(&self) -> Result<RowKind> {
        if self.from.is_empty() {
            return Err(CoreError::MissingFrom { line: self.line });
        }

        let Some(to) = self.to.as_deref() else {
            return Ok(RowKind::Root {
                entity_id: self.from.clone(),
            });
        };

        match self.relation_type.as_deref() {
            Some(CHILD_OF) => Ok(RowKind::Child {
                entity_id: self.from.clone(),
                parent_entity_id: to.to_string(),
            }),
            Some(relation) => Ok(RowKind::Related {
                entity_name: self.from.clone(),
                relation: relation.to_string(),
                target_entity_id: to.to_string(),
            }),
            None => Err(CoreError::MissingRelationType {
                line: self.line,
                from: self.from.clone(),
            }),
        }
    }
}

// ── Classification ────────────────────────────────────────────────

/// The three mutually exclusive shapes a record can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// No parent and no relationship component.
    Root { entity_id: String },
    /// Hierarchical child of an existing entity.
    Child {
        entity_id: String,
        parent_entity_id: String,
    },
    /// Custom relationship to an existing entity. The entity is only named;
    /// the service assigns its id.
    Related {
        entity_name: String,
        relation: String,
        target_entity_id: String,
    },
}

impl RowKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Root { .. } => "root",
            Self::Child { .. } => "child",
            Self::Related { .. } => "related",
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
