//! Run configuration: input paths, output paths and the length threshold.
//!
//! [`Config::default`] reproduces the conventional file layout of an
//! assembly-cleaning directory.
use std::path::{Path, PathBuf};

use crate::fragment::DEFAULT_MIN_LENGTH;
use crate::variant::Variant;

pub const DEFAULT_FASTA: &str = "Scaffolds.fasta";
pub const DEFAULT_EXCLUDE: &str = "exclude_list.tab";
pub const DEFAULT_TRIM: &str = "trim_list.tab";
pub const DEFAULT_OUTPUT_EXCLUDE_ONLY: &str = "output1.fasta";
pub const DEFAULT_OUTPUT_LENIENT: &str = "output2.fasta";
pub const DEFAULT_OUTPUT_FULL_TRIM: &str = "output3.fasta";

/// One output file per [`Variant`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub exclude_only: PathBuf,
    pub lenient: PathBuf,
    pub full_trim: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        OutputPaths {
            exclude_only: DEFAULT_OUTPUT_EXCLUDE_ONLY.into(),
            lenient: DEFAULT_OUTPUT_LENIENT.into(),
            full_trim: DEFAULT_OUTPUT_FULL_TRIM.into(),
        }
    }
}

impl OutputPaths {
    pub fn get(&self, variant: Variant) -> &Path {
        match variant {
            Variant::ExcludeOnly => &self.exclude_only,
            Variant::Lenient => &self.lenient,
            Variant::FullTrim => &self.full_trim,
        }
    }

    /// Re-root every relative output path under `dir`.
    pub fn in_dir(self, dir: &Path) -> Self {
        let place = |p: PathBuf| if p.is_absolute() { p } else { dir.join(p) };
        OutputPaths {
            exclude_only: place(self.exclude_only),
            lenient: place(self.lenient),
            full_trim: place(self.full_trim),
        }
    }
}

/// Everything a cleaning run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub fasta: PathBuf,
    pub exclude: PathBuf,
    pub trim: PathBuf,
    pub outputs: OutputPaths,
    /// Sequences and fragments shorter than this are dropped from every output.
    pub min_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fasta: DEFAULT_FASTA.into(),
            exclude: DEFAULT_EXCLUDE.into(),
            trim: DEFAULT_TRIM.into(),
            outputs: OutputPaths::default(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl Config {
    pub fn with_fasta(mut self, p: impl Into<PathBuf>) -> Self {
        self.fasta = p.into();
        self
    }

    pub fn with_exclude(mut self, p: impl Into<PathBuf>) -> Self {
        self.exclude = p.into();
        self
    }

    pub fn with_trim(mut self, p: impl Into<PathBuf>) -> Self {
        self.trim = p.into();
        self
    }

    pub fn with_outputs(mut self, outputs: OutputPaths) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let c = Config::default();
        assert_eq!(c.fasta, PathBuf::from("Scaffolds.fasta"));
        assert_eq!(c.min_length, 200);
        assert_eq!(c.outputs.get(Variant::FullTrim), Path::new("output3.fasta"));
    }

    #[test]
    fn in_dir_keeps_absolute_paths() {
        let mut o = OutputPaths::default();
        o.lenient = PathBuf::from("/abs/two.fa");
        let o = o.in_dir(Path::new("out"));
        assert_eq!(o.exclude_only, PathBuf::from("out/output1.fasta"));
        assert_eq!(o.lenient, PathBuf::from("/abs/two.fa"));
    }
}
