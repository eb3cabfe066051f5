//! Sequential replay of an input table.
//!
//! The relationship type is registered once, then records are processed one
//! at a time in file order. The first failure ends the run.

use std::sync::Arc;

use twinload_core::Record;
use twinload_graph::TwinGraph;

use crate::config::{BuildConfig, RegistrationMode};
use crate::error::{BuildError, Result};
use crate::processor::process_record;
use crate::registrar::register_relationship_type;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub entities_created: usize,
}

/// Drives one workspace build against a graph backend.
pub struct GraphBuilder<G> {
    graph: Arc<G>,
    workspace_id: String,
    config: BuildConfig,
}

impl<G> GraphBuilder<G>
where
    G: TwinGraph + 'static,
{
    pub fn new(graph: Arc<G>, workspace_id: &str, config: BuildConfig) -> Self {
        Self {
            graph,
            workspace_id: workspace_id.to_string(),
            config,
        }
    }

    /// Register the relationship type and create every record's entity.
    pub async fn run(&self, records: &[Record]) -> Result<BuildSummary> {
        tracing::info!(
            workspace_id = %self.workspace_id,
            records = records.len(),
            registration = ?self.config.registration,
            "Starting graph build"
        );

        let pending = match self.config.registration {
            RegistrationMode::Awaited => {
                register_relationship_type(self.graph.as_ref(), &self.workspace_id).await?;
                None
            }
            RegistrationMode::Detached => {
                let graph = self.graph.clone();
                let workspace_id = self.workspace_id.clone();
                Some(tokio::spawn(async move {
                    register_relationship_type(graph.as_ref(), &workspace_id).await
                }))
            }
        };

        let mut summary = BuildSummary::default();
        for (index, record) in records.iter().enumerate() {
            let created =
                process_record(self.graph.as_ref(), &self.workspace_id, index, record).await?;
            tracing::debug!(index, entity_id = %created.entity_id, "Entity created");
            summary.entities_created += 1;
        }

        if let Some(handle) = pending {
            handle
                .await
                .map_err(|e| BuildError::RegistrationTask(e.to_string()))??;
        }

        tracing::info!(
            workspace_id = %self.workspace_id,
            entities_created = summary.entities_created,
            "Graph build complete"
        );
        Ok(summary)
    }
}
