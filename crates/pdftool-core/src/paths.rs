//! Directory listing and PDF/TXT naming helpers.
//!
//! An empty directory path always means the current working directory.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PDF_SUFFIX: &str = ".pdf";
pub const TXT_SUFFIX: &str = ".txt";

/// Failure to use a path as the target directory.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("directory {0} does not exist")]
    NotFound(PathBuf),
    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn is_unset(dir: &Path) -> bool {
    dir.as_os_str().is_empty()
}

/// Checks that `dir` names an existing directory. An empty path is always accepted.
pub fn require_dir(dir: &Path) -> Result<(), PathError> {
    if is_unset(dir) {
        return Ok(());
    }
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PathError::NotADirectory(dir.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(PathError::NotFound(dir.to_path_buf())),
        Err(source) => Err(PathError::Io {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Lists entry names of `dir` (or the cwd when empty) in enumeration order.
///
/// Entries whose names are not valid UTF-8 are left out.
pub fn list_files(dir: &Path) -> Result<Vec<String>, PathError> {
    require_dir(dir)?;
    let listed = if is_unset(dir) { Path::new(".") } else { dir };
    let io_err = |source: io::Error| PathError::Io {
        path: listed.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(listed).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!("ignoring non UTF-8 entry {:?}", raw),
        }
    }
    Ok(names)
}

/// Absolute form of `dir` (or the cwd), for display only.
pub fn absolute_path(dir: &Path) -> String {
    let resolved = if is_unset(dir) {
        env::current_dir()
    } else {
        std::path::absolute(dir)
    };
    match resolved {
        Ok(p) => p.display().to_string(),
        Err(_) => dir.display().to_string(),
    }
}

/// Joins an entry name onto the target directory; an empty directory yields the bare name.
pub fn join_target(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

pub fn is_pdf(path_or_name: &str) -> bool {
    path_or_name.ends_with(PDF_SUFFIX)
}

/// Path of the `.txt` file that sits next to `pdf_path`.
///
/// `pdf_path` must end in `.pdf`.
pub fn companion_text_path(pdf_path: &Path) -> PathBuf {
    let name = pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug_assert!(is_pdf(&name), "{} is not a PDF path", pdf_path.display());
    let stem = name.strip_suffix(PDF_SUFFIX).unwrap_or(&name);
    pdf_path.with_file_name(format!("{stem}{TXT_SUFFIX}"))
}

/// True if the PDF at `pdf_path` already has a sibling text file.
pub fn has_companion_text(pdf_path: &Path) -> bool {
    companion_text_path(pdf_path).is_file()
}
