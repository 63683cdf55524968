//! pathprep-core: Shared attribute values, configuration, and events for pathprep.
//!
//! This crate provides the foundational pieces used across the workspace:
//! - Attribute values stored on graph nodes and edges
//! - Attribute-name configuration and config file loading
//! - Generation events and the sink trait that consumes them
//! - Common error types

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::{AttributeNames, PathprepConfig};
pub use error::PathprepError;
pub use events::{GraphEvent, GraphSink};
pub use types::{AttrValue, UNSET_DISTANCE};
