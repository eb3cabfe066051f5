//! TwinMaker connection management and the shared graph client.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_iottwinmaker::Client;
use serde::Deserialize;

use twinload_core::{ComponentTypeRequest, EntityRequest};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("TwinMaker connection error: {0}")]
    Connection(String),

    #[error("TwinMaker {operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] aws_sdk_iottwinmaker::error::BuildError),
}

/// Configuration for connecting to TwinMaker.
///
/// Every field is optional; unset fields fall through to the standard AWS
/// provider chain (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphConfig {
    /// AWS region hosting the workspace.
    #[serde(default)]
    pub region: Option<String>,
    /// Named profile from the shared AWS config files.
    #[serde(default)]
    pub profile: Option<String>,
    /// Override for the service endpoint, e.g. a local stub.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

/// Summary of a created component type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTypeCreated {
    pub arn: String,
    pub state: String,
}

/// Summary of a created entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCreated {
    pub entity_id: String,
    pub arn: String,
    pub state: String,
}

/// The two remote operations the loader issues.
///
/// Each call is a single remote mutation. Implementations must not retry or
/// swallow failures; callers treat every error as fatal to the run.
#[async_trait]
pub trait TwinGraph: Send + Sync {
    /// Define a component type in the workspace.
    async fn create_component_type(
        &self,
        request: &ComponentTypeRequest,
    ) -> Result<ComponentTypeCreated, GraphError>;

    /// Create one entity in the workspace.
    async fn create_entity(&self, request: &EntityRequest) -> Result<EntityCreated, GraphError>;
}

/// TwinMaker client backed by the AWS SDK.
///
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    client: Client,
}

impl GraphClient {
    /// Resolve AWS configuration and build a client.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        let region = sdk_config
            .region()
            .map(ToString::to_string)
            .ok_or_else(|| {
                GraphError::Connection(
                    "no AWS region configured: set aws.region or AWS_REGION".to_string(),
                )
            })?;

        let mut builder = aws_sdk_iottwinmaker::config::Builder::from(&sdk_config);
        if let Some(url) = &config.endpoint_url {
            builder = builder.endpoint_url(url);
        }

        tracing::info!(
            region = %region,
            endpoint_url = config.endpoint_url.as_deref().unwrap_or("default"),
            "Configured TwinMaker client"
        );
        Ok(Self::from_client(Client::from_conf(builder.build())))
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying SDK client for direct operations.
    pub fn inner(&self) -> &Client {
        &self.client
    }
}
