//! twinload-build: Replays an entity table into a TwinMaker workspace.
//!
//! Reads `from,to,type` rows, registers the relationship component type,
//! then creates one entity per row strictly in file order.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod processor;
pub mod registrar;
