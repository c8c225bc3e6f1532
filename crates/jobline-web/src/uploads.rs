//! Flat on-disk storage for uploaded files.
//!
//! Every upload gets a fresh random name; only the original extension
//! survives. The database stores that bare name, relative to the upload root.

use std::{
  ffi::OsStr,
  io,
  path::{Path, PathBuf},
};

use uuid::Uuid;

/// Longest extension kept from an uploaded file name.
const MAX_EXTENSION_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct UploadDir {
  root: PathBuf,
}

impl UploadDir {
  /// Use `root` as the upload directory, creating it if needed.
  pub async fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
    let root = root.into();
    tokio::fs::create_dir_all(&root).await?;
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path { &self.root }

  /// Write `bytes` under a new name derived from `original_name` and return
  /// the stored name.
  pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
    let name = stored_name(original_name);
    tokio::fs::write(self.root.join(&name), bytes).await?;
    tracing::debug!(stored = %name, original = %original_name, size = bytes.len(), "saved upload");
    Ok(name)
  }

  /// Full path of a previously stored file, if it is present on disk.
  ///
  /// Names containing path separators or `..` are refused with
  /// [`io::ErrorKind::NotFound`]; nothing outside the root is ever served.
  pub async fn locate(&self, stored: &str) -> io::Result<PathBuf> {
    if !is_plain_name(stored) {
      return Err(io::Error::new(io::ErrorKind::NotFound, "not a stored upload name"));
    }
    let path = self.root.join(stored);
    if !tokio::fs::metadata(&path).await?.is_file() {
      return Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"));
    }
    Ok(path)
  }
}

/// A fresh `uuid` name carrying the sanitised extension of `original`.
pub fn stored_name(original: &str) -> String {
  match extension(original) {
    Some(ext) => format!("{}.{ext}", Uuid::new_v4().simple()),
    None      => Uuid::new_v4().simple().to_string(),
  }
}

/// Lower-cased ASCII-alphanumeric extension of `name`, if it has a usable one.
pub fn extension(name: &str) -> Option<String> {
  Path::new(name)
    .extension()
    .and_then(OsStr::to_str)
    .filter(|ext| {
      !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric())
    })
    .map(str::to_ascii_lowercase)
}

fn is_plain_name(name: &str) -> bool {
  !name.is_empty()
    && name != "."
    && name != ".."
    && !name.contains(['/', '\\'])
}
