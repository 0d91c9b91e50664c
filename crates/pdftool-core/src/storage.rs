//! File lifecycle for downloads and generated text.
//!
//! Content is written to `<final>.part` first and renamed into place only once
//! complete, so a final path never holds a partial file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.pdf` → `a.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// A `.part` file being filled. Either [`finalize`](PartFile::finalize) or
/// [`discard`](PartFile::discard) it.
pub struct PartFile {
    file: File,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
}

impl PartFile {
    /// Create (or truncate) the temp file for `final_path`.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::create(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(Self {
            file,
            temp_path,
            final_path: final_path.to_path_buf(),
            written: 0,
        })
    }

    /// Flush and rename the temp file onto the final path. Returns bytes written.
    pub fn finalize(mut self) -> Result<u64> {
        self.file.flush().context("storage flush failed")?;
        let PartFile {
            file,
            temp_path,
            final_path,
            written,
        } = self;
        drop(file);

        std::fs::rename(&temp_path, &final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })?;
        Ok(written)
    }

    /// Close and remove the temp file.
    pub fn discard(self) -> Result<()> {
        let PartFile { file, temp_path, .. } = self;
        drop(file);
        std::fs::remove_file(&temp_path)
            .with_context(|| format!("failed to remove temp file: {}", temp_path.display()))
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Write `data` to `final_path` through a `.part` file.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<u64> {
    let mut part = PartFile::create(final_path)?;
    if let Err(e) = part.write_all(data) {
        let _ = part.discard();
        return Err(e).context("storage write failed");
    }
    part.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("file.pdf"));
        assert_eq!(p.to_string_lossy(), "file.pdf.part");
        let p2 = temp_path(Path::new("/tmp/docs/spec v2.pdf"));
        assert_eq!(p2.to_string_lossy(), "/tmp/docs/spec v2.pdf.part");
    }

    #[test]
    fn write_then_finalize() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("out.pdf");
        let mut part = PartFile::create(&final_path).unwrap();
        part.write_all(b"hello ").unwrap();
        part.write_all(b"world").unwrap();
        assert!(temp_path(&final_path).exists());
        assert!(!final_path.exists());

        assert_eq!(part.finalize().unwrap(), 11);
        assert_eq!(std::fs::read(&final_path).unwrap(), b"hello world");
        assert!(!temp_path(&final_path).exists());
    }

    #[test]
    fn discard_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("gone.pdf");
        let mut part = PartFile::create(&final_path).unwrap();
        part.write_all(b"partial").unwrap();
        part.discard().unwrap();
        assert!(!final_path.exists());
        assert!(!temp_path(&final_path).exists());
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("a.txt");
        write_atomic(&final_path, b"first").unwrap();
        write_atomic(&final_path, b"second").unwrap();
        assert_eq!(std::fs::read_to_string(&final_path).unwrap(), "second");
    }
}
