use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One paired-end fastq set: read1 and read2, in the order given on the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    pub read1: PathBuf,
    pub read2: PathBuf,
}

/// Validated run parameters suitable for config files and presets.
///
/// Built once from CLI input and passed explicitly to downstream functions;
/// nothing reads ambient state after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub output_root: PathBuf,
    pub panel: String,
    pub flowcell: String,
    pub sample: String,
    pub reference: PathBuf,
    /// Normalized: trailing slashes stripped.
    pub gpackage: PathBuf,
    pub interval_file: Option<PathBuf>,
    pub low_memory: bool,
    pub wes_model: bool,
    pub input_pairs: Vec<InputPair>,
}

impl RunConfig {
    /// Validate raw CLI values and assemble the immutable run configuration.
    ///
    /// Fail-fast: required fields are checked in a fixed order (output, panel,
    /// flowcell, sample, reference, gpackage) and the first missing one wins.
    /// The interval file, when supplied, must exist as a regular file. The
    /// positional fastq list must be non-empty and of even length.
    pub fn assemble(
        output_root: Option<PathBuf>,
        panel: Option<String>,
        flowcell: Option<String>,
        sample: Option<String>,
        reference: Option<PathBuf>,
        gpackage: Option<PathBuf>,
        interval_file: Option<PathBuf>,
        low_memory: bool,
        wes_model: bool,
        inputs: Vec<PathBuf>,
    ) -> Result<Self> {
        let output_root = required_path(output_root, "-o <output_path>")?;
        let panel = required_str(panel, "-p <panel>")?;
        let flowcell = required_str(flowcell, "-f <flowcell>")?;
        let sample = required_str(sample, "-s <sample>")?;
        let reference = required_path(reference, "-r <refseq>")?;
        let gpackage = required_path(gpackage, "-g <gpackage_path>")?;
        let gpackage = strip_trailing_slashes(gpackage);

        if let Some(interval) = &interval_file {
            if !interval.is_file() {
                return Err(Error::InvalidPath {
                    path: interval.clone(),
                });
            }
        }

        let input_pairs = pair_inputs(inputs)?;

        Ok(Self {
            output_root,
            panel,
            flowcell,
            sample,
            reference,
            gpackage,
            interval_file,
            low_memory,
            wes_model,
            input_pairs,
        })
    }
}

/// Pair positional fastq paths strictly by position: element 2k is read1,
/// element 2k+1 is its read2. Input order is preserved; it determines the
/// argument order handed to the external tool.
pub fn pair_inputs(inputs: Vec<PathBuf>) -> Result<Vec<InputPair>> {
    if inputs.is_empty() {
        return Err(Error::NoInput);
    }
    if inputs.len() % 2 != 0 {
        return Err(Error::OddInputCount {
            count: inputs.len(),
        });
    }

    let mut pairs = Vec::with_capacity(inputs.len() / 2);
    let mut iter = inputs.into_iter();
    while let (Some(read1), Some(read2)) = (iter.next(), iter.next()) {
        pairs.push(InputPair { read1, read2 });
    }
    Ok(pairs)
}

/// Strip trailing slashes; idempotent. `/gpackage/` becomes `/gpackage`,
/// `/gpackage` is left untouched. A bare `/` stays `/`.
#[cfg(unix)]
pub fn strip_trailing_slashes(path: PathBuf) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bytes = path.as_os_str().as_bytes();
    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == b'/' {
        end -= 1;
    }
    if end == 0 {
        return PathBuf::from("/");
    }
    if end == bytes.len() {
        path
    } else {
        PathBuf::from(OsStr::from_bytes(&bytes[..end]))
    }
}

#[cfg(not(unix))]
pub fn strip_trailing_slashes(path: PathBuf) -> PathBuf {
    let s = path.to_string_lossy();
    let stripped = s.trim_end_matches('/');
    if stripped.is_empty() {
        return PathBuf::from("/");
    }
    if stripped.len() == s.len() {
        path
    } else {
        PathBuf::from(stripped)
    }
}

fn required_str(value: Option<String>, name: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingParameter { name }),
    }
}

fn required_path(value: Option<PathBuf>, name: &'static str) -> Result<PathBuf> {
    match value {
        Some(v) if !v.as_os_str().is_empty() => Ok(v),
        _ => Err(Error::MissingParameter { name }),
    }
}
