//! Per-row entity creation.

use twinload_core::{EntityRequest, Record};
use twinload_graph::{EntityCreated, TwinGraph};

use crate::error::{BuildError, Operation, Result};

/// Create the entity described by one record.
///
/// Issues exactly one `CreateEntity` call. Whether the referenced parent or
/// target already exists is left to the service.
pub async fn process_record<G>(
    graph: &G,
    workspace_id: &str,
    index: usize,
    record: &Record,
) -> Result<EntityCreated>
where
    G: TwinGraph + ?Sized,
{
    let kind = record.kind()?;
    let request = EntityRequest::from_kind(workspace_id, &kind);

    tracing::info!(
        index,
        line = record.line,
        kind = kind.label(),
        entity_name = %request.entity_name,
        "Creating entity"
    );

    graph
        .create_entity(&request)
        .await
        .map_err(|source| BuildError::Remote {
            operation: Operation::CreateEntity,
            index: Some(index),
            source,
        })
}
