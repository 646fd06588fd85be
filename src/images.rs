//! Local cache of remote image assets (set icons, card symbol glyphs).
//!
//! Files are named by the remote asset's base filename with the query
//! string stripped. Presence of the target file counts as completion, so
//! each filename is fetched at most once per process unless deleted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScryfallError};
use crate::transport::Transport;

pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fetch a remote asset into the store, returning its local path.
    ///
    /// A no-op when the target file already exists. Downloads land in a
    /// temp sibling first and are renamed into place, so an interrupted
    /// fetch never leaves a partial file behind.
    pub fn fetch(&self, transport: &Transport, uri: &str) -> Result<PathBuf> {
        let dest = self.dir.join(file_name_of(uri)?);
        if dest.exists() {
            return Ok(dest);
        }

        fs::create_dir_all(&self.dir)?;
        let tmp = dest.with_extension("tmp");

        let result = (|| -> Result<()> {
            let bytes = transport.get_bytes(uri)?;
            fs::write(&tmp, &bytes)?;
            fs::rename(&tmp, &dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }

        result.map(|_| dest)
    }
}

/// Base filename of a URI, query string stripped.
fn file_name_of(uri: &str) -> Result<String> {
    let basename = uri.rsplit('/').next().unwrap_or_default();
    let name = basename.split('?').next().unwrap_or_default();
    if name.is_empty() {
        return Err(ScryfallError::InvalidArgument(format!(
            "no file name in URI {:?}",
            uri
        )));
    }
    Ok(name.to_string())
}
