//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (nanosecond
//! precision, `Z` suffix) so that lexical order equals chronological order.
//! Enums are stored as their lowercase names.

use chrono::{DateTime, SecondsFormat, Utc};
use jobline_core::{
  account::{Account, Role},
  job::{JobApplication, JobPost, JobType},
  profile::CandidateProfile,
  resume::{InteractionKind, InteractionRecord, Resume, ResumeInteraction},
};
use rusqlite::Row;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

/// The current time. [`encode_dt`] keeps every digit, so the value returned
/// to callers equals the value read back later and is never earlier than
/// the moment of the call.
pub fn now() -> DateTime<Utc> { Utc::now() }

// ─── Accounts ────────────────────────────────────────────────────────────────

/// Table and primary-key column for each role's account table.
pub fn account_table(role: Role) -> (&'static str, &'static str) {
  match role {
    Role::Candidate => ("candidates", "candidate_id"),
    Role::Recruiter => ("recruiters", "recruiter_id"),
  }
}

pub struct RawAccount {
  pub account_id:    i64,
  pub email:         String,
  pub password_hash: String,
  pub created_at:    String,
}

impl RawAccount {
  /// Columns: id, email, password_hash, created_at.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      account_id:    row.get(0)?,
      email:         row.get(1)?,
      password_hash: row.get(2)?,
      created_at:    row.get(3)?,
    })
  }

  pub fn into_account(self, role: Role) -> Result<Account> {
    Ok(Account {
      account_id: self.account_id,
      role,
      email: self.email,
      password_hash: self.password_hash,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

// ─── Profiles ────────────────────────────────────────────────────────────────

pub const PROFILE_COLUMNS: &str = "candidate_id, name, education, skills, \
  experience, linkedin, github, phone_number, photo_path, updated_at";

pub struct RawProfile {
  pub candidate_id: i64,
  pub name:         String,
  pub education:    String,
  pub skills:       String,
  pub experience:   String,
  pub linkedin:     String,
  pub github:       String,
  pub phone_number: String,
  pub photo_path:   Option<String>,
  pub updated_at:   String,
}

impl RawProfile {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      candidate_id: row.get(0)?,
      name:         row.get(1)?,
      education:    row.get(2)?,
      skills:       row.get(3)?,
      experience:   row.get(4)?,
      linkedin:     row.get(5)?,
      github:       row.get(6)?,
      phone_number: row.get(7)?,
      photo_path:   row.get(8)?,
      updated_at:   row.get(9)?,
    })
  }

  pub fn into_profile(self) -> Result<CandidateProfile> {
    Ok(CandidateProfile {
      candidate_id: self.candidate_id,
      name:         self.name,
      education:    self.education,
      skills:       self.skills,
      experience:   self.experience,
      linkedin:     self.linkedin,
      github:       self.github,
      phone_number: self.phone_number,
      photo_path:   self.photo_path,
      updated_at:   Some(decode_dt(&self.updated_at)?),
    })
  }
}

// ─── Resumes ─────────────────────────────────────────────────────────────────

pub const RESUME_COLUMNS: &str =
  "resume_id, candidate_id, title, file_path, uploaded_at";

pub struct RawResume {
  pub resume_id:    i64,
  pub candidate_id: i64,
  pub title:        String,
  pub file_path:    String,
  pub uploaded_at:  String,
}

impl RawResume {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      resume_id:    row.get(0)?,
      candidate_id: row.get(1)?,
      title:        row.get(2)?,
      file_path:    row.get(3)?,
      uploaded_at:  row.get(4)?,
    })
  }

  pub fn into_resume(self) -> Result<Resume> {
    Ok(Resume {
      resume_id:    self.resume_id,
      candidate_id: self.candidate_id,
      title:        self.title,
      file_path:    self.file_path,
      uploaded_at:  decode_dt(&self.uploaded_at)?,
    })
  }
}

// ─── Job posts ───────────────────────────────────────────────────────────────

pub const JOB_POST_COLUMNS: &str = "job_id, recruiter_id, company_name, \
  job_title, description, skills, job_type, posted_at";

pub struct RawJobPost {
  pub job_id:       i64,
  pub recruiter_id: i64,
  pub company_name: String,
  pub job_title:    String,
  pub description:  String,
  pub skills:       String,
  pub job_type:     String,
  pub posted_at:    String,
}

impl RawJobPost {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      job_id:       row.get(0)?,
      recruiter_id: row.get(1)?,
      company_name: row.get(2)?,
      job_title:    row.get(3)?,
      description:  row.get(4)?,
      skills:       row.get(5)?,
      job_type:     row.get(6)?,
      posted_at:    row.get(7)?,
    })
  }

  pub fn into_job_post(self) -> Result<JobPost> {
    Ok(JobPost {
      job_id:       self.job_id,
      recruiter_id: self.recruiter_id,
      company_name: self.company_name,
      job_title:    self.job_title,
      description:  self.description,
      skills:       self.skills,
      job_type:     JobType::parse(&self.job_type)?,
      posted_at:    decode_dt(&self.posted_at)?,
    })
  }
}

// ─── Applications ────────────────────────────────────────────────────────────

pub const APPLICATION_COLUMNS: &str =
  "application_id, job_id, name, email, resume_link, submitted_at";

pub struct RawApplication {
  pub application_id: i64,
  pub job_id:         i64,
  pub name:           String,
  pub email:          String,
  pub resume_link:    String,
  pub submitted_at:   String,
}

impl RawApplication {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      application_id: row.get(0)?,
      job_id:         row.get(1)?,
      name:           row.get(2)?,
      email:          row.get(3)?,
      resume_link:    row.get(4)?,
      submitted_at:   row.get(5)?,
    })
  }

  pub fn into_application(self) -> Result<JobApplication> {
    Ok(JobApplication {
      application_id: self.application_id,
      job_id:         self.job_id,
      name:           self.name,
      email:          self.email,
      resume_link:    self.resume_link,
      submitted_at:   decode_dt(&self.submitted_at)?,
    })
  }
}

// ─── Interactions ────────────────────────────────────────────────────────────

/// An interaction row plus the (left-joined) recruiter email.
pub struct RawInteraction {
  pub interaction_id:  i64,
  pub resume_id:       i64,
  pub recruiter_id:    i64,
  pub kind:            String,
  pub occurred_at:     String,
  pub recruiter_email: Option<String>,
}

impl RawInteraction {
  /// Columns: interaction_id, resume_id, recruiter_id, kind, occurred_at,
  /// recruiter email.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      interaction_id:  row.get(0)?,
      resume_id:       row.get(1)?,
      recruiter_id:    row.get(2)?,
      kind:            row.get(3)?,
      occurred_at:     row.get(4)?,
      recruiter_email: row.get(5)?,
    })
  }

  pub fn into_record(self) -> Result<InteractionRecord> {
    Ok(InteractionRecord {
      interaction:     ResumeInteraction {
        interaction_id: self.interaction_id,
        resume_id:      self.resume_id,
        recruiter_id:   self.recruiter_id,
        kind:           InteractionKind::parse(&self.kind)?,
        occurred_at:    decode_dt(&self.occurred_at)?,
      },
      recruiter_email: self.recruiter_email,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn encoded_timestamps_sort_chronologically() {
    let a = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let b = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
    let c = Utc.timestamp_opt(1_700_000_001, 0).unwrap();
    let (ea, eb, ec) = (encode_dt(a), encode_dt(b), encode_dt(c));
    assert_eq!(ea.len(), eb.len());
    assert!(ea < eb && eb < ec);
  }

  #[test]
  fn dt_roundtrip() {
    let t = now();
    assert_eq!(decode_dt(&encode_dt(t)).unwrap(), t);
  }

  #[test]
  fn sub_microsecond_digits_survive() {
    let t = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
    assert_eq!(encode_dt(t), "2023-11-14T22:13:20.123456789Z");
    assert_eq!(decode_dt(&encode_dt(t)).unwrap(), t);
  }
}
