//! Accounts: the two kinds of identity that can sign in.
//!
//! Candidates and recruiters live in separate tables, so the same email
//! address may be registered once per role and ids are only unique within a
//! role.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// Which side of the board an account belongs to.
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
pub enum Role {
  Candidate,
  Recruiter,
}

impl Role {
  /// The stable string used in session cookies and log fields.
  pub fn as_str(self) -> &'static str { self.into() }

  /// Parse a role name, mapping failures onto [`Error::UnknownRole`].
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownRole(s.to_owned()))
  }

  /// Path of the login page for this role.
  pub fn login_path(self) -> &'static str {
    match self {
      Self::Candidate => "/candidate",
      Self::Recruiter => "/recruiter",
    }
  }
}

/// A persisted account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
  pub account_id:    i64,
  pub role:          Role,
  pub email:         String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  /// Server-assigned timestamp; never changes after creation.
  pub created_at:    DateTime<Utc>,
}

/// Input to [`crate::store::BoardStore::create_account`].
/// The password must already be hashed; the store never sees plaintext.
#[derive(Debug, Clone)]
pub struct NewAccount {
  pub email:         String,
  pub password_hash: String,
}
