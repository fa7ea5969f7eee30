use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::RunConfig;
use crate::error::Result;

/// Derived output directory tree for one sample run:
/// `{output_root}/{flowcell}/{panel}/{sample}/{bam,logs,QC_stats,variants}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLayout {
    pub sample_root: PathBuf,
    pub bam_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub qc_dir: PathBuf,
    pub variants_dir: PathBuf,
}

impl OutputLayout {
    /// Derive the layout from a validated config. Pure: no filesystem access,
    /// creation is a separate step.
    pub fn derive(config: &RunConfig) -> Self {
        let sample_root = config
            .output_root
            .join(&config.flowcell)
            .join(&config.panel)
            .join(&config.sample);
        Self {
            bam_dir: sample_root.join("bam"),
            logs_dir: sample_root.join("logs"),
            qc_dir: sample_root.join("QC_stats"),
            variants_dir: sample_root.join("variants"),
            sample_root,
        }
    }

    /// Create all four subdirectories, including missing ancestors.
    /// Idempotent: reruns over an existing tree succeed.
    pub fn create(&self) -> Result<()> {
        for dir in self.dirs() {
            fs::create_dir_all(dir)?;
        }
        info!("Output layout ready at: {:?}", self.sample_root);
        Ok(())
    }

    fn dirs(&self) -> [&PathBuf; 4] {
        [&self.bam_dir, &self.logs_dir, &self.qc_dir, &self.variants_dir]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_with_output(output_root: &Path) -> RunConfig {
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
            vec![PathBuf::from("a_1.fastq.gz"), PathBuf::from("a_2.fastq.gz")],
        )
        .unwrap()
    }

    #[test]
    fn derives_the_four_subdirectories() {
        let layout = OutputLayout::derive(&config_with_output(Path::new("/out")));
        assert_eq!(layout.sample_root, PathBuf::from("/out/FC1/PANEL/S1"));
        assert_eq!(layout.bam_dir, PathBuf::from("/out/FC1/PANEL/S1/bam"));
        assert_eq!(layout.logs_dir, PathBuf::from("/out/FC1/PANEL/S1/logs"));
        assert_eq!(layout.qc_dir, PathBuf::from("/out/FC1/PANEL/S1/QC_stats"));
        assert_eq!(layout.variants_dir, PathBuf::from("/out/FC1/PANEL/S1/variants"));
    }

    #[test]
    fn create_builds_tree_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::derive(&config_with_output(dir.path()));

        layout.create().unwrap();
        assert!(layout.bam_dir.is_dir());
        assert!(layout.logs_dir.is_dir());
        assert!(layout.qc_dir.is_dir());
        assert!(layout.variants_dir.is_dir());

        // rerun over the existing tree
        layout.create().unwrap();
    }
}
