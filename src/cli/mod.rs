//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) wiring user-provided options to the underlying library
//! functionality exposed via `pbgermline::api`.
//!
//! If you are embedding the invoker into another application, prefer the
//! high-level `pbgermline::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
