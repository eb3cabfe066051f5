//! Registration of the relationship component type.

use twinload_core::ComponentTypeRequest;
use twinload_graph::{ComponentTypeCreated, TwinGraph};

use crate::error::{BuildError, Operation, Result};

/// Define the `relationship` component type in the workspace.
///
/// Issued once per run. A rejection (including "already exists") is not
/// handled here and ends the run.
pub async fn register_relationship_type<G>(
    graph: &G,
    workspace_id: &str,
) -> Result<ComponentTypeCreated>
where
    G: TwinGraph + ?Sized,
{
    let request = ComponentTypeRequest::relationship(workspace_id);
    tracing::info!(
        workspace_id = %workspace_id,
        component_type_id = %request.component_type_id,
        "Registering relationship component type"
    );

    graph
        .create_component_type(&request)
        .await
        .map_err(|source| BuildError::Remote {
            operation: Operation::DefineRelationshipType,
            index: None,
            source,
        })
}
