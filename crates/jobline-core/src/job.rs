//! Job posts and quick-apply applications.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// Where the work happens.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum JobType {
  #[serde(alias = "Onsite")]
  Onsite,
  #[serde(alias = "Remote")]
  Remote,
  #[serde(alias = "Hybrid")]
  Hybrid,
}

impl JobType {
  pub const ALL: [JobType; 3] = [Self::Onsite, Self::Remote, Self::Hybrid];

  pub fn as_str(self) -> &'static str { self.into() }

  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownJobType(s.to_owned()))
  }

  /// Human-readable label used on rendered pages.
  pub fn label(self) -> &'static str {
    match self {
      Self::Onsite => "Onsite",
      Self::Remote => "Remote",
      Self::Hybrid => "Hybrid",
    }
  }
}

/// A job advertised by a recruiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPost {
  pub job_id:       i64,
  pub recruiter_id: i64,
  pub company_name: String,
  pub job_title:    String,
  pub description:  String,
  /// Free-text, typically comma-separated.
  pub skills:       String,
  pub job_type:     JobType,
  pub posted_at:    DateTime<Utc>,
}

/// Input to [`crate::store::BoardStore::create_job_post`]. The owning
/// recruiter is passed separately.
#[derive(Debug, Clone)]
pub struct NewJobPost {
  pub company_name: String,
  pub job_title:    String,
  pub description:  String,
  pub skills:       String,
  pub job_type:     JobType,
}

/// A quick-apply submission. Applicants need no account, so the resume is a
/// free-text link rather than a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
  pub application_id: i64,
  pub job_id:         i64,
  pub name:           String,
  pub email:          String,
  pub resume_link:    String,
  pub submitted_at:   DateTime<Utc>,
}

/// Input to [`crate::store::BoardStore::submit_application`].
#[derive(Debug, Clone)]
pub struct NewApplication {
  pub name:        String,
  pub email:       String,
  pub resume_link: String,
}

/// A recruiter's job post together with everything submitted against it.
#[derive(Debug, Clone, Serialize)]
pub struct JobWithApplications {
  pub job:          JobPost,
  pub applications: Vec<JobApplication>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn job_type_accepts_either_case() {
    assert_eq!(JobType::parse("remote").unwrap(), JobType::Remote);
    assert_eq!(JobType::parse("Hybrid").unwrap(), JobType::Hybrid);
    assert!(matches!(JobType::parse("moon"), Err(Error::UnknownJobType(_))));
  }

  #[test]
  fn job_type_storage_strings_are_lowercase() {
    let stored: Vec<&str> = JobType::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(stored, ["onsite", "remote", "hybrid"]);
  }
}
