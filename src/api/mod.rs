//! High-level, ergonomic library API: run the full pipeline from a validated
//! `RunConfig`. Prefer this entrypoint over the low-level `core` modules when
//! embedding the invoker in another application.
use std::path::Path;

use tracing::info;

use crate::core::config::RunConfig;
use crate::core::invocation::{build_invocation, invoke};
use crate::core::layout::OutputLayout;
use crate::error::Result;

/// Derive the output layout, create its directories, and launch the external
/// tool with the assembled argument vector. Blocks for the tool's entire
/// runtime and returns its exit code verbatim.
///
/// `tool` is the launcher executable; pass
/// [`crate::core::invocation::DEFAULT_TOOL_PATH`] for a standard install.
pub fn run_pipeline(config: &RunConfig, tool: &Path) -> Result<i32> {
    let layout = OutputLayout::derive(config);
    layout.create()?;

    let argv = build_invocation(config, &layout);
    info!(
        "Invoking pipeline for sample {} ({} fastq pair(s))",
        config.sample,
        config.input_pairs.len()
    );

    invoke(tool, &argv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(output_root: &Path) -> RunConfig {
        RunConfig::assemble(
            Some(output_root.to_path_buf()),
            Some("PANEL".to_string()),
            Some("FC1".to_string()),
            Some("S1".to_string()),
            Some(PathBuf::from("/ref.fasta")),
            Some(PathBuf::from("/gpackage")),
            None,
            false,
            false,
            vec![
                PathBuf::from("a_1.fastq.gz"),
                PathBuf::from("a_2.fastq.gz"),
                PathBuf::from("b_1.fastq.gz"),
                PathBuf::from("b_2.fastq.gz"),
            ],
        )
        .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn end_to_end_creates_tree_and_forwards_argv() {
        use std::os::unix::fs::PermissionsExt;

        let out = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();

        // stub tool records its argv and succeeds
        let argv_file = work.path().join("argv.txt");
        let tool = work.path().join("stub_tool.sh");
        std::fs::write(
            &tool,
            format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > {}\nexit 0\n", argv_file.display()),
        )
        .unwrap();
        let mut perms = std::fs::metadata(&tool).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&tool, perms).unwrap();

        let config = config(out.path());
        let code = run_pipeline(&config, &tool).unwrap();
        assert_eq!(code, 0);

        let sample_root = out.path().join("FC1").join("PANEL").join("S1");
        for sub in ["bam", "logs", "QC_stats", "variants"] {
            assert!(sample_root.join(sub).is_dir(), "missing {sub}");
        }

        let recorded = std::fs::read_to_string(&argv_file).unwrap();
        let tokens: Vec<&str> = recorded.lines().collect();
        let first = tokens.iter().position(|t| *t == "--in-fq").unwrap();
        assert_eq!(
            &tokens[first..],
            &[
                "--in-fq",
                "a_1.fastq.gz",
                "a_2.fastq.gz",
                "--in-fq",
                "b_1.fastq.gz",
                "b_2.fastq.gz",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn external_failure_code_is_propagated() {
        use std::os::unix::fs::PermissionsExt;

        let out = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        let tool = work.path().join("stub_tool.sh");
        std::fs::write(&tool, "#!/bin/sh\nexit 3\n").unwrap();
        let mut perms = std::fs::metadata(&tool).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&tool, perms).unwrap();

        let config = config(out.path());
        assert_eq!(run_pipeline(&config, &tool).unwrap(), 3);
    }
}
