//! twinload Graph — AWS IoT TwinMaker client for the entity graph.
//!
//! This crate is the single mutation point for the remote workspace. Both
//! remote operations the loader needs flow through the [`TwinGraph`] trait,
//! implemented for the SDK-backed [`GraphClient`].

pub mod client;
pub mod mutations;

pub use client::{ComponentTypeCreated, EntityCreated, GraphClient, GraphConfig, GraphError, TwinGraph};
