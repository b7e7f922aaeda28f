//! # bmad-core
//!
//! Agent catalog and tool server core for BMAD.
//!
//! This crate provides:
//! - Parsing of the agent-definition document into an immutable catalog
//! - Knowledge document lookup under the project root
//! - The static tool registry and tool execution
//! - A line-delimited JSON-RPC dispatcher over any async byte streams
//!
//! ## Modules
//!
//! - [`catalog`]: Agent-definition parser and catalog loading
//! - [`config`]: Validated server configuration
//! - [`knowledge`]: Knowledge resolver
//! - [`tools`]: Tool registry and executor
//! - [`server`]: Request dispatcher and stdio transport
//! - [`logging`]: Subscriber setup on stderr

pub mod catalog;
pub mod config;
pub mod knowledge;
pub mod logging;
pub mod server;
pub mod tools;
