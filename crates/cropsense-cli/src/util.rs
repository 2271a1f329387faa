//! Output helpers shared by commands.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Write content to file or stdout.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

/// Streaming output for commands that emit one record at a time.
///
/// Every write is flushed so `watch` output shows up immediately.
pub struct OutputWriter {
    inner: Box<dyn Write + Send>,
}

impl OutputWriter {
    /// Open stdout, or a file that is truncated unless `append` is set.
    pub fn open(output: Option<&PathBuf>, append: bool) -> Result<Self> {
        let inner: Box<dyn Write + Send> = match output {
            Some(path) => {
                let file = if append {
                    OpenOptions::new().append(true).create(true).open(path)
                } else {
                    File::create(path)
                };
                let file =
                    file.with_context(|| format!("Failed to open {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        Ok(Self { inner })
    }

    /// Write and flush a chunk of output.
    pub fn write(&mut self, content: &str) -> Result<()> {
        self.inner.write_all(content.as_bytes())?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_output_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "hello\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_output_writer_truncates_by_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("watch.csv");
        std::fs::write(&path, "stale\n").unwrap();

        let mut writer = OutputWriter::open(Some(&path), false).unwrap();
        writer.write("a\n").unwrap();
        writer.write("b\n").unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_output_writer_append_keeps_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("watch.csv");
        std::fs::write(&path, "header\nold\n").unwrap();

        let mut writer = OutputWriter::open(Some(&path), true).unwrap();
        writer.write("new\n").unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "header\nold\nnew\n");

        let fresh = dir.path().join("fresh.csv");
        OutputWriter::open(Some(&fresh), true).unwrap().write("x\n").unwrap();
        assert_eq!(std::fs::read_to_string(&fresh).unwrap(), "x\n");
    }

    #[test]
    fn test_output_writer_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(OutputWriter::open(Some(&path), false).is_err());
    }
}
