use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pbgermline",
    version,
    about = "Parabricks DeepVariant germline pipeline launcher",
    override_usage = "pbgermline -o <output_path> -p <panel> -f <flowcell> -s <sample> -r <refseq> [-g <gpackage_path>] [-L <interval_file>] [-l] [-w] fastq1 fastq2 [fastq3 fastq4 ...]"
)]
pub struct CliArgs {
    /// Output root directory
    #[arg(short = 'o', value_name = "output_path")]
    pub output: Option<PathBuf>,

    /// Panel folder name
    #[arg(short = 'p', value_name = "panel")]
    pub panel: Option<String>,

    /// Flowcell identifier
    #[arg(short = 'f', value_name = "flowcell")]
    pub flowcell: Option<String>,

    /// Sample identifier
    #[arg(short = 's', value_name = "sample")]
    pub sample: Option<String>,

    /// Reference fasta path
    #[arg(short = 'r', value_name = "refseq")]
    pub reference: Option<PathBuf>,

    /// gpackage root directory
    #[arg(short = 'g', value_name = "gpackage_path", default_value = "/gpackage")]
    pub gpackage: PathBuf,

    /// Interval file restricting processing to the given regions
    #[arg(short = 'L', value_name = "interval_file")]
    pub interval: Option<PathBuf>,

    /// Low-memory mode (reduced GPU memory footprint)
    #[arg(short = 'l')]
    pub low_memory: bool,

    /// Use the whole-exome model
    #[arg(short = 'w')]
    pub wes_model: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Paired fastq files: read1 read2 [read1 read2 ...]
    #[arg(value_name = "FASTQ")]
    pub fastqs: Vec<PathBuf>,
}
