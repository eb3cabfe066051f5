//! Write operations against the TwinMaker workspace.
//!
//! Requests arrive as plain `twinload-core` shapes and are converted into SDK
//! inputs here. Every call logs the raw service response.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_iottwinmaker::error::DisplayErrorContext;
use aws_sdk_iottwinmaker::types::{
    self as sdk, DataType, DataValue, PropertyDefinitionRequest, PropertyRequest,
    RelationshipValue, Type,
};

use twinload_core::{ComponentRequest, ComponentTypeRequest, EntityRequest, RelationshipProperty};

use crate::client::{ComponentTypeCreated, EntityCreated, GraphClient, GraphError, TwinGraph};

#[async_trait]
impl TwinGraph for GraphClient {
    async fn create_component_type(
        &self,
        request: &ComponentTypeRequest,
    ) -> Result<ComponentTypeCreated, GraphError> {
        tracing::debug!(request = %ser(request), "CreateComponentType request");

        let output = self
            .inner()
            .create_component_type()
            .workspace_id(&request.workspace_id)
            .component_type_id(&request.component_type_id)
            .component_type_name(&request.component_type_name)
            .send()
            .await
            .map_err(|e| GraphError::Service {
                operation: "CreateComponentType",
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::info!(response = ?output, "CreateComponentType response");

        Ok(ComponentTypeCreated {
            arn: output.arn().to_string(),
            state: output.state().as_str().to_string(),
        })
    }

    async fn create_entity(&self, request: &EntityRequest) -> Result<EntityCreated, GraphError> {
        tracing::debug!(request = %ser(request), "CreateEntity request");

        let components = if request.components.is_empty() {
            None
        } else {
            let mut converted = HashMap::with_capacity(request.components.len());
            for (name, component) in &request.components {
                converted.insert(name.clone(), component_request(component)?);
            }
            Some(converted)
        };

        let output = self
            .inner()
            .create_entity()
            .workspace_id(&request.workspace_id)
            .set_entity_id(request.entity_id.clone())
            .entity_name(&request.entity_name)
            .set_parent_entity_id(request.parent_entity_id.clone())
            .set_components(components)
            .send()
            .await
            .map_err(|e| GraphError::Service {
                operation: "CreateEntity",
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::info!(response = ?output, "CreateEntity response");

        Ok(EntityCreated {
            entity_id: output.entity_id().to_string(),
            arn: output.arn().to_string(),
            state: output.state().as_str().to_string(),
        })
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Convert a component into its SDK form.
fn component_request(component: &ComponentRequest) -> Result<sdk::ComponentRequest, GraphError> {
    let mut properties = HashMap::with_capacity(component.properties.len());
    for (name, property) in &component.properties {
        properties.insert(name.clone(), relationship_property(property)?);
    }

    Ok(sdk::ComponentRequest::builder()
        .component_type_id(&component.component_type_id)
        .set_properties(Some(properties))
        .build())
}

/// A `LIST` of `RELATIONSHIP` property with one entry per target.
fn relationship_property(property: &RelationshipProperty) -> Result<PropertyRequest, GraphError> {
    let data_type = DataType::builder()
        .r#type(Type::List)
        .nested_type(DataType::builder().r#type(Type::Relationship).build()?)
        .build()?;

    let mut value = DataValue::builder();
    for target in &property.targets {
        value = value.list_value(
            DataValue::builder()
                .relationship_value(
                    RelationshipValue::builder()
                        .target_entity_id(target)
                        .build(),
                )
                .build(),
        );
    }

    Ok(PropertyRequest::builder()
        .definition(PropertyDefinitionRequest::builder().data_type(data_type).build())
        .value(value.build())
        .build())
}

fn ser<T: serde::Serialize>(val: &T) -> String {
    serde_json::to_string(val).unwrap_or_default()
}
