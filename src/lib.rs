#![doc = r#"
pbgermline — a validating launcher for the NVIDIA Parabricks DeepVariant
germline pipeline.

This crate wraps the `pbrun` launcher with strict parameter validation, a
deterministic per-sample output directory layout, and injection-safe argument
assembly (discrete tokens handed to the process launcher, never a shell
string). It powers the `pbgermline` CLI and can be embedded in your own Rust
applications.

Quick start: run the pipeline for one sample
--------------------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use pbgermline::{run_pipeline, RunConfig};
use pbgermline::core::invocation::DEFAULT_TOOL_PATH;

fn main() -> pbgermline::Result<()> {
    let config = RunConfig::assemble(
        Some(PathBuf::from("/data/runs")),
        Some("ONCO_PANEL".to_string()),
        Some("FC042".to_string()),
        Some("S17".to_string()),
        Some(PathBuf::from("/refs/hg38.fasta")),
        Some(PathBuf::from("/gpackage")),
        None,  // interval file
        false, // low-memory mode
        false, // WES model
        vec![
            PathBuf::from("S17_R1.fastq.gz"),
            PathBuf::from("S17_R2.fastq.gz"),
        ],
    )?;

    let exit_code = run_pipeline(&config, Path::new(DEFAULT_TOOL_PATH))?;
    std::process::exit(exit_code);
}
```

The output tree `{output}/{flowcell}/{panel}/{sample}/{bam,logs,QC_stats,variants}`
is created idempotently before launch, so reruns after a partial failure are
safe. The external tool's stdio is streamed through unmodified and its exit
code is returned verbatim.

Error handling
--------------
All public functions return `pbgermline::Result<T>`; match on
`pbgermline::Error` for specific validation failures (missing parameters,
unpaired fastq lists, absent interval files).

Useful modules
--------------
- [`api`] — high-level entrypoint (`run_pipeline`).
- [`core`] — configuration, layout derivation, and invocation primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;

// Curated public API surface
pub use core::config::{InputPair, RunConfig, pair_inputs, strip_trailing_slashes};
pub use core::invocation::{DEFAULT_TOOL_PATH, build_invocation, invoke};
pub use core::layout::OutputLayout;
pub use error::{Error, Result};

// High-level API re-exports
pub use api::run_pipeline;
