//! Core building blocks: run configuration and validation, output layout
//! derivation, and external-tool invocation assembly. These are the primitives
//! consumed by the high-level `api` module.
pub mod config;
pub mod invocation;
pub mod layout;
