//! [`SqliteStore`], the SQLite implementation of [`BoardStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use jobline_core::{
  account::{Account, NewAccount, Role},
  job::{JobApplication, JobPost, NewApplication, NewJobPost},
  profile::{CandidateProfile, ProfileUpdate},
  resume::{InteractionKind, InteractionRecord, NewResume, Resume, ResumeInteraction},
  store::BoardStore,
};

use crate::{
  encode::{
    account_table, encode_dt, now, RawAccount, RawApplication, RawInteraction,
    RawJobPost, RawProfile, RawResume, APPLICATION_COLUMNS, JOB_POST_COLUMNS,
    PROFILE_COLUMNS, RESUME_COLUMNS,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Jobline store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Select job posts, optionally restricted to one recruiter.
  async fn query_job_posts(
    &self,
    where_clause: &'static str,
    recruiter_id: Option<i64>,
  ) -> Result<Vec<JobPost>> {
    let raws: Vec<RawJobPost> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {JOB_POST_COLUMNS} FROM job_posts {where_clause} ORDER BY job_id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = match recruiter_id {
          Some(id) => stmt
            .query_map(rusqlite::params![id], RawJobPost::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
          None => stmt
            .query_map([], RawJobPost::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawJobPost::into_job_post).collect()
  }
}

// ─── BoardStore impl ─────────────────────────────────────────────────────────

impl BoardStore for SqliteStore {
  type Error = Error;

  // ── Accounts ──────────────────────────────────────────────────────────────

  async fn create_account(
    &self,
    role: Role,
    input: NewAccount,
  ) -> Result<Option<Account>> {
    let (table, _) = account_table(role);
    let created_at = now();
    let at_str     = encode_dt(created_at);
    let email      = input.email.clone();
    let hash       = input.password_hash.clone();

    let inserted: Option<i64> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          &format!(
            "INSERT INTO {table} (email, password_hash, created_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (email) DO NOTHING"
          ),
          rusqlite::params![email, hash, at_str],
        )?;
        Ok((changed > 0).then(|| conn.last_insert_rowid()))
      })
      .await?;

    Ok(inserted.map(|account_id| Account {
      account_id,
      role,
      email: input.email,
      password_hash: input.password_hash,
      created_at,
    }))
  }

  async fn find_account_by_email(
    &self,
    role: Role,
    email: &str,
  ) -> Result<Option<Account>> {
    let (table, id_col) = account_table(role);
    let email = email.to_owned();

    let raw: Option<RawAccount> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {id_col}, email, password_hash, created_at
               FROM {table} WHERE email = ?1"
            ),
            rusqlite::params![email],
            RawAccount::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(|r| r.into_account(role)).transpose()
  }

  async fn get_account(&self, role: Role, account_id: i64) -> Result<Option<Account>> {
    let (table, id_col) = account_table(role);

    let raw: Option<RawAccount> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {id_col}, email, password_hash, created_at
               FROM {table} WHERE {id_col} = ?1"
            ),
            rusqlite::params![account_id],
            RawAccount::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(|r| r.into_account(role)).transpose()
  }

  // ── Profiles ──────────────────────────────────────────────────────────────

  async fn get_profile(&self, candidate_id: i64) -> Result<Option<CandidateProfile>> {
    let raw: Option<RawProfile> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {PROFILE_COLUMNS} FROM candidate_profiles WHERE candidate_id = ?1"
            ),
            rusqlite::params![candidate_id],
            RawProfile::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawProfile::into_profile).transpose()
  }

  async fn upsert_profile(
    &self,
    candidate_id: i64,
    update: ProfileUpdate,
  ) -> Result<CandidateProfile> {
    let at_str = encode_dt(now());

    let raw: Option<RawProfile> = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO candidate_profiles (
             candidate_id, name, education, skills, experience,
             linkedin, github, phone_number, photo_path, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
           ON CONFLICT (candidate_id) DO UPDATE SET
             name         = excluded.name,
             education    = excluded.education,
             skills       = excluded.skills,
             experience   = excluded.experience,
             linkedin     = excluded.linkedin,
             github       = excluded.github,
             phone_number = excluded.phone_number,
             photo_path   = COALESCE(excluded.photo_path, candidate_profiles.photo_path),
             updated_at   = excluded.updated_at",
          rusqlite::params![
            candidate_id,
            update.name,
            update.education,
            update.skills,
            update.experience,
            update.linkedin,
            update.github,
            update.phone_number,
            update.photo_path,
            at_str,
          ],
        )?;

        Ok(conn
          .query_row(
            &format!(
              "SELECT {PROFILE_COLUMNS} FROM candidate_profiles WHERE candidate_id = ?1"
            ),
            rusqlite::params![candidate_id],
            RawProfile::from_row,
          )
          .optional()?)
      })
      .await?;

    raw
      .ok_or(Error::MissingAfterWrite { table: "candidate_profiles", id: candidate_id })?
      .into_profile()
  }

  // ── Resumes ───────────────────────────────────────────────────────────────

  async fn add_resume(&self, candidate_id: i64, input: NewResume) -> Result<Resume> {
    let uploaded_at = now();
    let at_str      = encode_dt(uploaded_at);
    let title       = input.title.clone();
    let file_path   = input.file_path.clone();

    let resume_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO resumes (candidate_id, title, file_path, uploaded_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![candidate_id, title, file_path, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Resume {
      resume_id,
      candidate_id,
      title: input.title,
      file_path: input.file_path,
      uploaded_at,
    })
  }

  async fn get_resume(&self, resume_id: i64) -> Result<Option<Resume>> {
    let raw: Option<RawResume> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {RESUME_COLUMNS} FROM resumes WHERE resume_id = ?1"),
            rusqlite::params![resume_id],
            RawResume::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawResume::into_resume).transpose()
  }

  async fn list_resumes(&self, candidate_id: i64) -> Result<Vec<Resume>> {
    let raws: Vec<RawResume> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {RESUME_COLUMNS} FROM resumes WHERE candidate_id = ?1 ORDER BY resume_id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![candidate_id], RawResume::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawResume::into_resume).collect()
  }

  // ── Jobs ──────────────────────────────────────────────────────────────────

  async fn create_job_post(&self, recruiter_id: i64, input: NewJobPost) -> Result<JobPost> {
    let posted_at = now();
    let at_str    = encode_dt(posted_at);
    let row       = input.clone();

    let job_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO job_posts (
             recruiter_id, company_name, job_title, description,
             skills, job_type, posted_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            recruiter_id,
            row.company_name,
            row.job_title,
            row.description,
            row.skills,
            row.job_type.as_str(),
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(JobPost {
      job_id,
      recruiter_id,
      company_name: input.company_name,
      job_title: input.job_title,
      description: input.description,
      skills: input.skills,
      job_type: input.job_type,
      posted_at,
    })
  }

  async fn get_job_post(&self, job_id: i64) -> Result<Option<JobPost>> {
    let raw: Option<RawJobPost> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {JOB_POST_COLUMNS} FROM job_posts WHERE job_id = ?1"),
            rusqlite::params![job_id],
            RawJobPost::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawJobPost::into_job_post).transpose()
  }

  async fn list_job_posts(&self) -> Result<Vec<JobPost>> {
    self.query_job_posts("", None).await
  }

  async fn list_job_posts_by_recruiter(&self, recruiter_id: i64) -> Result<Vec<JobPost>> {
    self
      .query_job_posts("WHERE recruiter_id = ?1", Some(recruiter_id))
      .await
  }

  // ── Applications ──────────────────────────────────────────────────────────

  async fn submit_application(
    &self,
    job_id: i64,
    input: NewApplication,
  ) -> Result<JobApplication> {
    let submitted_at = now();
    let at_str       = encode_dt(submitted_at);
    let row          = input.clone();

    let application_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO job_applications (job_id, name, email, resume_link, submitted_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![job_id, row.name, row.email, row.resume_link, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(JobApplication {
      application_id,
      job_id,
      name: input.name,
      email: input.email,
      resume_link: input.resume_link,
      submitted_at,
    })
  }

  async fn list_applications(&self, job_id: i64) -> Result<Vec<JobApplication>> {
    let raws: Vec<RawApplication> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {APPLICATION_COLUMNS} FROM job_applications
           WHERE job_id = ?1 ORDER BY application_id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![job_id], RawApplication::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawApplication::into_application).collect()
  }

  // ── Interactions ──────────────────────────────────────────────────────────

  async fn record_interaction(
    &self,
    resume_id: i64,
    recruiter_id: i64,
    kind: InteractionKind,
  ) -> Result<ResumeInteraction> {
    let occurred_at = now();
    let at_str      = encode_dt(occurred_at);

    let interaction_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO resume_interactions (resume_id, recruiter_id, kind, occurred_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![resume_id, recruiter_id, kind.as_str(), at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(ResumeInteraction { interaction_id, resume_id, recruiter_id, kind, occurred_at })
  }

  async fn list_interactions_for_candidate(
    &self,
    candidate_id: i64,
  ) -> Result<Vec<InteractionRecord>> {
    let raws: Vec<RawInteraction> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT
             i.interaction_id, i.resume_id, i.recruiter_id, i.kind, i.occurred_at,
             r.email AS recruiter_email
           FROM resume_interactions i
           JOIN resumes             res ON res.resume_id  = i.resume_id
           LEFT JOIN recruiters     r   ON r.recruiter_id = i.recruiter_id
           WHERE res.candidate_id = ?1
           ORDER BY i.occurred_at DESC, i.interaction_id DESC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![candidate_id], RawInteraction::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawInteraction::into_record).collect()
  }
}
