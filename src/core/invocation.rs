use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::core::config::RunConfig;
use crate::core::layout::OutputLayout;
use crate::error::{Error, Result};

/// Default install path of the Parabricks launcher.
pub const DEFAULT_TOOL_PATH: &str = "/opt/parabricks/pbrun";

/// Assemble the external tool's argument vector as discrete tokens.
///
/// Token order is part of the contract. Each input pair contributes
/// `--in-fq read1 read2`: the flag precedes read1 only, read2 follows bare.
/// That asymmetry is the tool's own argument grammar for paired fastqs and
/// must not be "fixed".
pub fn build_invocation(config: &RunConfig, layout: &OutputLayout) -> Vec<OsString> {
    let mut argv: Vec<OsString> = Vec::new();

    if config.wes_model {
        argv.push("--use-wes-model".into());
    }
    if config.low_memory {
        argv.push("--low-memory".into());
    }
    argv.push("--consider-strand-bias".into());

    argv.push("--ref".into());
    argv.push(config.reference.clone().into_os_string());

    argv.push("--out-bam".into());
    argv.push(
        layout
            .bam_dir
            .join(format!("{}.bam", config.sample))
            .into_os_string(),
    );

    argv.push("--out-duplicate-metrics".into());
    argv.push(
        layout
            .qc_dir
            .join(format!("{}_duplicate_metrics.txt", config.sample))
            .into_os_string(),
    );

    argv.push("--out-variants".into());
    argv.push(
        layout
            .variants_dir
            .join(format!("variants_deepvariant_caller_{}.vcf", config.sample))
            .into_os_string(),
    );

    argv.push("--logfile".into());
    argv.push(
        layout
            .logs_dir
            .join(format!("parabricks_deepvariant_germline_{}.log", config.sample))
            .into_os_string(),
    );

    if let Some(interval) = &config.interval_file {
        argv.push("--interval".into());
        argv.push(interval.clone().into_os_string());
    }

    for pair in &config.input_pairs {
        argv.push("--in-fq".into());
        argv.push(pair.read1.clone().into_os_string());
        argv.push(pair.read2.clone().into_os_string());
    }

    argv
}

/// Launch the external tool and block until it exits, streaming its stdio
/// through unmodified. The tool may run for hours; no timeout, no retry.
/// Returns its exit code verbatim.
pub fn invoke(tool: &Path, argv: &[OsString]) -> Result<i32> {
    info!("Launching external tool: {:?}", tool);

    let status = Command::new(tool)
        .args(argv)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    status
        .code()
        .ok_or_else(|| Error::external(format!("process terminated without an exit code: {status}")))
}
