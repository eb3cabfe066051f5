//! Service-independent shapes of the two remote calls.
//!
//! The graph crate converts these into SDK inputs. Keeping them plain data
//! lets the row processor be checked without a live workspace.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::RowKind;
use crate::{RELATIONSHIP_COMPONENT, RELATIONSHIP_TYPE_ID, RELATIONSHIP_TYPE_NAME};

/// Input of a "define node type" call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentTypeRequest {
    pub workspace_id: String,
    pub component_type_id: String,
    pub component_type_name: String,
}

impl ComponentTypeRequest {
    /// The relationship component type, registered once per run.
    pub fn relationship(workspace_id: &str) -> Self {
        Self {
            workspace_id: workspace_id.to_string(),
            component_type_id: RELATIONSHIP_TYPE_ID.to_string(),
            component_type_name: RELATIONSHIP_TYPE_NAME.to_string(),
        }
    }
}

/// Input of a "create node" call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntityRequest {
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub entity_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_entity_id: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, ComponentRequest>,
}

/// A component attached to an entity at creation time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComponentRequest {
    pub component_type_id: String,
    pub properties: BTreeMap<String, RelationshipProperty>,
}

/// A property typed as a list of relationship references.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelationshipProperty {
    pub targets: Vec<String>,
}

impl EntityRequest {
    /// Build the create call for one classified record.
    pub fn from_kind(workspace_id: &str, kind: &RowKind) -> Self {
        match kind {
            RowKind::Root { entity_id } => Self {
                workspace_id: workspace_id.to_string(),
                entity_id: Some(entity_id.clone()),
                entity_name: entity_id.clone(),
                parent_entity_id: None,
                components: BTreeMap::new(),
            },
            RowKind::Child {
                entity_id,
                parent_entity_id,
            } => Self {
                workspace_id: workspace_id.to_string(),
                entity_id: Some(entity_id.clone()),
                entity_name: entity_id.clone(),
                parent_entity_id: Some(parent_entity_id.clone()),
                components: BTreeMap::new(),
            },
            RowKind::Related {
                entity_name,
                relation,
                target_entity_id,
            } => {
                let mut components = BTreeMap::new();
                components.insert(
                    RELATIONSHIP_COMPONENT.to_string(),
                    ComponentRequest::relationship(relation, target_entity_id),
                );
                Self {
                    workspace_id: workspace_id.to_string(),
                    entity_id: None,
                    entity_name: entity_name.clone(),
                    parent_entity_id: None,
                    components,
                }
            }
        }
    }
}

impl ComponentRequest {
    /// A relationship component with a single property pointing at `target`.
    ///
    /// `relation` comes straight from the input file and becomes a schema
    /// property name as-is. It is not escaped or validated here; the service
    /// rejects names it does not accept.
    pub fn relationship(relation: &str, target: &str) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(
            relation.to_string(),
            RelationshipProperty {
                targets: vec![target.to_string()],
            },
        );
        Self {
            component_type_id: RELATIONSHIP_TYPE_ID.to_string(),
            properties,
        }
    }
}
