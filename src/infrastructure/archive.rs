//! Zip bundle writer
//!
//! Thin wrapper over `zip::ZipWriter` that streams files into Deflate
//! entries and refuses duplicate entry names. Entries go to a temp file next
//! to the destination; the archive only appears at its final path once the
//! central directory is written.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{AuditError, AuditResult};

/// Zip archive under construction
pub struct ZipBundleWriter {
    path: PathBuf,
    zip: ZipWriter<NamedTempFile>,
    names: BTreeSet<String>,
}

impl ZipBundleWriter {
    /// Start an archive destined for `path`.
    ///
    /// Nothing is written at `path` until [`finish`](Self::finish) succeeds.
    /// Dropping the writer early discards the temp file.
    pub fn create(path: &Path) -> AuditResult<Self> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(parent).map_err(|e| AuditError::io(parent, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            zip: ZipWriter::new(tmp),
            names: BTreeSet::new(),
        })
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644)
    }

    /// Copy `source` into the archive as `name`.
    ///
    /// Returns `false` without writing when `name` is already present.
    pub fn add_file(&mut self, source: &Path, name: &str) -> AuditResult<bool> {
        if !self.names.insert(name.to_string()) {
            return Ok(false);
        }

        let mut input = File::open(source).map_err(|e| AuditError::io(source, e))?;
        self.zip
            .start_file(name, Self::options())
            .map_err(|err| AuditError::Archive {
                path: self.path.clone(),
                source: err,
            })?;
        io::copy(&mut input, &mut self.zip).map_err(|e| AuditError::io(source, e))?;
        Ok(true)
    }

    /// Write the central directory and move the archive into place.
    /// Returns the number of entries.
    pub fn finish(self) -> AuditResult<usize> {
        let count = self.names.len();
        let tmp = self.zip.finish().map_err(|source| AuditError::Archive {
            path: self.path.clone(),
            source,
        })?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| AuditError::io(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| AuditError::io(&self.path, e.error))?;
        Ok(count)
    }
}
