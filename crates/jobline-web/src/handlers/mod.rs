//! Route handlers, grouped by the part of the board they serve.

pub mod accounts;
pub mod interactions;
pub mod jobs;
pub mod profile;
pub mod resumes;

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::error::Error;

/// A file part of a multipart form.
pub struct FilePart {
  pub file_name: String,
  pub bytes:     Bytes,
}

/// A fully-buffered multipart form.
///
/// Parts with a file name are files; everything else is text. Later parts
/// with the same name replace earlier ones.
#[derive(Default)]
pub struct MultipartForm {
  fields: HashMap<String, String>,
  files:  HashMap<String, FilePart>,
}

impl MultipartForm {
  pub async fn read(mut multipart: Multipart) -> Result<Self, Error> {
    let mut form = Self::default();
    while let Some(field) = multipart.next_field().await? {
      let Some(name) = field.name().map(str::to_owned) else {
        continue;
      };
      match field.file_name().map(str::to_owned) {
        Some(file_name) => {
          let bytes = field.bytes().await?;
          form.files.insert(name, FilePart { file_name, bytes });
        }
        None => {
          let text = field.text().await?;
          form.fields.insert(name, text);
        }
      }
    }
    Ok(form)
  }

  /// A text field that must be present, though it may be empty.
  pub fn text(&mut self, name: &str) -> Result<String, Error> {
    self
      .fields
      .remove(name)
      .ok_or_else(|| Error::BadRequest(format!("missing form field `{name}`")))
  }

  /// An optional file. A file input left blank arrives with an empty name
  /// and no content, and counts as absent.
  pub fn file(&mut self, name: &str) -> Option<FilePart> {
    self
      .files
      .remove(name)
      .filter(|f| !(f.file_name.is_empty() && f.bytes.is_empty()))
  }
}
