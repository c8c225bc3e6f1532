//! Candidate profiles.
//!
//! A profile row is created on the first update. Until then, reads return
//! [`CandidateProfile::empty`], which is never written back to the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The public-facing profile of one candidate; at most one per candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
  pub candidate_id: i64,
  pub name:         String,
  pub education:    String,
  pub skills:       String,
  pub experience:   String,
  pub linkedin:     String,
  pub github:       String,
  pub phone_number: String,
  /// Stored file name relative to the upload directory.
  pub photo_path:   Option<String>,
  /// `None` for the unsaved default returned before the first update.
  pub updated_at:   Option<DateTime<Utc>>,
}

impl CandidateProfile {
  /// The blank profile shown to a candidate who has never saved one.
  pub fn empty(candidate_id: i64) -> Self {
    Self { candidate_id, ..Self::default() }
  }

  /// Whether this value came from the store rather than [`Self::empty`].
  pub fn is_persisted(&self) -> bool { self.updated_at.is_some() }
}

/// Input to [`crate::store::BoardStore::upsert_profile`].
///
/// The owning candidate is passed alongside, taken from the authenticated
/// session.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
  pub name:         String,
  pub education:    String,
  pub skills:       String,
  pub experience:   String,
  pub linkedin:     String,
  pub github:       String,
  pub phone_number: String,
  /// A newly uploaded photo. `None` keeps whatever photo is already stored.
  pub photo_path:   Option<String>,
}
