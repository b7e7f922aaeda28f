//! # bmad-protocol
//!
//! Wire and data models for the BMAD agent tool server.
//!
//! This crate defines all shared data structures used for:
//! - The agent catalog parsed from the agent-definition document
//! - Tool descriptors and tool call payloads
//! - JSON-RPC request/response envelopes on the stdio transport
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent records and task references
//! - [`tool_models`]: Tool descriptors, arguments and result payloads
//! - [`rpc`]: JSON-RPC envelopes, methods and error codes
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, serde_json and ts-rs
//! - TypeScript generation: All wire types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other bmad crates

pub mod agent_models;
pub mod rpc;
pub mod tool_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use rpc::*;
pub use tool_models::*;
