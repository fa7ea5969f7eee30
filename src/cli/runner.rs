use std::path::Path;

use pbgermline::core::invocation::DEFAULT_TOOL_PATH;
use pbgermline::{Result, RunConfig, run_pipeline};

use super::args::CliArgs;

/// Validate the parsed arguments, then run the pipeline end to end.
/// Returns the external tool's exit code on success.
pub fn run(args: CliArgs) -> Result<i32> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = RunConfig::assemble(
        args.output,
        args.panel,
        args.flowcell,
        args.sample,
        args.reference,
        Some(args.gpackage),
        args.interval,
        args.low_memory,
        args.wes_model,
        args.fastqs,
    )?;

    run_pipeline(&config, Path::new(DEFAULT_TOOL_PATH))
}
