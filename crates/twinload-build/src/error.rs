//! Error types for the twinload-build crate.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Remote operation that was in flight when a run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    DefineRelationshipType,
    CreateEntity,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefineRelationshipType => f.write_str("define relationship type"),
            Self::CreateEntity => f.write_str("create entity"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid record: {0}")]
    Record(#[from] twinload_core::CoreError),

    #[error("Remote call to {operation} failed ({}): {source}", position(.index))]
    Remote {
        operation: Operation,
        index: Option<usize>,
        #[source]
        source: twinload_graph::GraphError,
    },

    #[error("Relationship type registration task did not finish: {0}")]
    RegistrationTask(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn position(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("record {i}"),
        None => "before any record".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
