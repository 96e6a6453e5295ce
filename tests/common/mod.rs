#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Deterministic N-free sequence of the given length.
pub fn bases(len: usize) -> String {
    "ACGTTGCA".chars().cycle().take(len).collect()
}

/// Scratch directory holding the three inputs of a run.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self { temp_dir: TempDir::new()? })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the scenario used across the integration tests:
    /// S1 N-padded and untrimmed, S2 with two spans, S3 marked not-cleaned,
    /// S4 excluded, S5 too short everywhere.
    pub fn write_scenario(&self) -> Result<()> {
        let s1 = format!("NNN{}NNN", bases(210));
        let s2 = bases(1000);
        let s3 = format!("NNNN{}", bases(400));
        let s4 = bases(800);
        let s5 = bases(150);
        let fasta = format!(
            ">S1 scaffold one\n{}\n{}\n>S2\n{}\n>S3 mito\n{}\n>S4\n{}\n>S5\n{}\n",
            &s1[..100].to_lowercase(),
            &s1[100..],
            s2,
            s3,
            s4,
            s5
        );
        self.write("Scaffolds.fasta", &fasta)?;
        self.write("exclude_list.tab", "S4\tcontaminant\nMISSING\tcontaminant\n")?;
        self.write(
            "trim_list.tab",
            "S2\t1000\t400..450,1..100\tadaptor\nS3\t404\tmitochondrion-not_cleaned\torganelle\nS5\t150\t1..10\n",
        )?;
        Ok(())
    }
}

/// Parse a `>`-header file into `(name, sequence)` pairs, in file order.
pub fn read_fasta(path: &Path) -> Result<Vec<(String, String)>> {
    let text = fs::read_to_string(path)?;
    let mut out: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if let Some(name) = line.strip_prefix('>') {
            out.push((name.to_string(), String::new()));
        } else if let Some(last) = out.last_mut() {
            last.1.push_str(line);
        }
    }
    Ok(out)
}

pub fn names(records: &[(String, String)]) -> Vec<&str> {
    records.iter().map(|(n, _)| n.as_str()).collect()
}
