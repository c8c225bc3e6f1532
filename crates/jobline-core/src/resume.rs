//! Resumes, shareable resume links, and the interaction audit trail.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{Error, Result};

// ─── Resume ──────────────────────────────────────────────────────────────────

/// An uploaded resume file. Never updated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
  pub resume_id:    i64,
  pub candidate_id: i64,
  pub title:        String,
  /// Stored file name relative to the upload directory.
  pub file_path:    String,
  pub uploaded_at:  DateTime<Utc>,
}

/// Input to [`crate::store::BoardStore::add_resume`].
#[derive(Debug, Clone)]
pub struct NewResume {
  pub title:     String,
  pub file_path: String,
}

// ─── Links ───────────────────────────────────────────────────────────────────

/// Build the shareable link for a resume, e.g.
/// `http://127.0.0.1:8000/resume/view/17`.
pub fn view_link(base_url: &str, resume_id: i64) -> String {
  format!("{}/resume/view/{resume_id}", base_url.trim_end_matches('/'))
}

/// Extract the resume id from a shareable link.
///
/// The query string and fragment are dropped, trailing slashes are ignored,
/// and the last path segment must be a plain non-negative integer. A link
/// with fewer than two path segments is rejected.
pub fn parse_link(link: &str) -> Result<i64> {
  let invalid = || Error::InvalidResumeLink(link.to_owned());

  let path = link.split(['?', '#']).next().unwrap_or_default();
  let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
  if segments.len() < 2 {
    return Err(invalid());
  }

  let last = segments[segments.len() - 1];
  if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
    return Err(invalid());
  }
  last.parse().map_err(|_| invalid())
}

// ─── Interactions ────────────────────────────────────────────────────────────

/// What a recruiter did with a resume.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InteractionKind {
  /// Opened inline in the browser.
  View,
  /// Saved as an attachment.
  Download,
}

impl InteractionKind {
  pub fn as_str(self) -> &'static str { self.into() }

  /// Parse an interaction kind, mapping failures onto
  /// [`Error::UnknownInteractionKind`].
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownInteractionKind(s.to_owned()))
  }
}

/// One logged access of a resume by a recruiter. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeInteraction {
  pub interaction_id: i64,
  pub resume_id:      i64,
  pub recruiter_id:   i64,
  pub kind:           InteractionKind,
  /// Server-assigned UTC timestamp.
  pub occurred_at:    DateTime<Utc>,
}

/// An interaction joined with the acting recruiter's email, as read back for
/// the insights view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
  pub interaction:     ResumeInteraction,
  /// `None` if the recruiter row could not be found.
  pub recruiter_email: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_plain_link() {
    assert_eq!(parse_link("http://127.0.0.1:8000/resume/view/37").unwrap(), 37);
  }

  #[test]
  fn ignores_query_fragment_and_trailing_slashes() {
    assert_eq!(parse_link("http://host/resume/view/17/?a=1#top").unwrap(), 17);
    assert_eq!(parse_link("/resume/view/17#x").unwrap(), 17);
    assert_eq!(parse_link("/resume/view/0//").unwrap(), 0);
  }

  #[test]
  fn rejects_malformed_links() {
    for link in [
      "",
      "/",
      "17",
      "http://host/resume/view/abc",
      "http://host/resume/view/-3",
      "http://host/resume/view/1.5",
      "http://host/resume/view/",
      "http://host/resume/view/?id=4",
      "http://host/resume/view/99999999999999999999999",
    ] {
      assert!(
        matches!(parse_link(link), Err(Error::InvalidResumeLink(_))),
        "accepted {link:?}"
      );
    }
  }

  #[test]
  fn view_link_joins_base_url() {
    assert_eq!(view_link("http://h:1/", 5), "http://h:1/resume/view/5");
    assert_eq!(parse_link(&view_link("http://h:1", 42)).unwrap(), 42);
  }

  #[test]
  fn interaction_kind_parse() {
    assert_eq!(InteractionKind::parse("view").unwrap(), InteractionKind::View);
    assert_eq!(
      InteractionKind::parse("download").unwrap(),
      InteractionKind::Download
    );
    assert!(matches!(
      InteractionKind::parse("print"),
      Err(Error::UnknownInteractionKind(_))
    ));
  }
}
