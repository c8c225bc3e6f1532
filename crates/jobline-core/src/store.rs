//! The `BoardStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `jobline-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.
//!
//! Every write that belongs to an account takes the owner's id as its own
//! argument. Callers pass the id of the authenticated session, never a value
//! taken from a request body.

use std::future::Future;

use crate::{
  account::{Account, NewAccount, Role},
  job::{JobApplication, JobPost, NewApplication, NewJobPost},
  profile::{CandidateProfile, ProfileUpdate},
  resume::{InteractionKind, InteractionRecord, NewResume, Resume, ResumeInteraction},
};

/// Abstraction over a Jobline store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait BoardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Accounts ──────────────────────────────────────────────────────────

  /// Register a new account under `role`.
  ///
  /// Returns `None`, and writes nothing, if the email is already registered
  /// for that role.
  fn create_account(
    &self,
    role: Role,
    input: NewAccount,
  ) -> impl Future<Output = Result<Option<Account>, Self::Error>> + Send + '_;

  /// Look up an account by its exact email address.
  fn find_account_by_email<'a>(
    &'a self,
    role: Role,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Account>, Self::Error>> + Send + 'a;

  /// Retrieve an account by id. Returns `None` if not found.
  fn get_account(
    &self,
    role: Role,
    account_id: i64,
  ) -> impl Future<Output = Result<Option<Account>, Self::Error>> + Send + '_;

  // ── Profiles ──────────────────────────────────────────────────────────

  /// Retrieve the stored profile for a candidate, if one was ever saved.
  fn get_profile(
    &self,
    candidate_id: i64,
  ) -> impl Future<Output = Result<Option<CandidateProfile>, Self::Error>> + Send + '_;

  /// Insert or replace the profile owned by `candidate_id`.
  ///
  /// A `photo_path` of `None` keeps the previously stored photo.
  fn upsert_profile(
    &self,
    candidate_id: i64,
    update: ProfileUpdate,
  ) -> impl Future<Output = Result<CandidateProfile, Self::Error>> + Send + '_;

  // ── Resumes ───────────────────────────────────────────────────────────

  /// Record an uploaded resume owned by `candidate_id`.
  fn add_resume(
    &self,
    candidate_id: i64,
    input: NewResume,
  ) -> impl Future<Output = Result<Resume, Self::Error>> + Send + '_;

  /// Retrieve a resume by id, regardless of owner.
  fn get_resume(
    &self,
    resume_id: i64,
  ) -> impl Future<Output = Result<Option<Resume>, Self::Error>> + Send + '_;

  /// All resumes owned by `candidate_id`, ascending by id.
  fn list_resumes(
    &self,
    candidate_id: i64,
  ) -> impl Future<Output = Result<Vec<Resume>, Self::Error>> + Send + '_;

  // ── Jobs ──────────────────────────────────────────────────────────────

  /// Publish a job post owned by `recruiter_id`.
  fn create_job_post(
    &self,
    recruiter_id: i64,
    input: NewJobPost,
  ) -> impl Future<Output = Result<JobPost, Self::Error>> + Send + '_;

  /// Retrieve a job post by id. Returns `None` if not found.
  fn get_job_post(
    &self,
    job_id: i64,
  ) -> impl Future<Output = Result<Option<JobPost>, Self::Error>> + Send + '_;

  /// Every job post on the board, ascending by id.
  fn list_job_posts(
    &self,
  ) -> impl Future<Output = Result<Vec<JobPost>, Self::Error>> + Send + '_;

  /// Job posts owned by `recruiter_id`, ascending by id.
  fn list_job_posts_by_recruiter(
    &self,
    recruiter_id: i64,
  ) -> impl Future<Output = Result<Vec<JobPost>, Self::Error>> + Send + '_;

  // ── Applications ──────────────────────────────────────────────────────

  /// Record a quick-apply submission against `job_id`.
  fn submit_application(
    &self,
    job_id: i64,
    input: NewApplication,
  ) -> impl Future<Output = Result<JobApplication, Self::Error>> + Send + '_;

  /// Applications submitted against `job_id`, ascending by id.
  fn list_applications(
    &self,
    job_id: i64,
  ) -> impl Future<Output = Result<Vec<JobApplication>, Self::Error>> + Send + '_;

  // ── Interactions (append-only) ────────────────────────────────────────

  /// Append one interaction row. The timestamp is set by the store; repeated
  /// calls always produce new rows.
  fn record_interaction(
    &self,
    resume_id: i64,
    recruiter_id: i64,
    kind: InteractionKind,
  ) -> impl Future<Output = Result<ResumeInteraction, Self::Error>> + Send + '_;

  /// Every interaction recorded against any resume owned by `candidate_id`,
  /// joined with the acting recruiter's email. Newest first.
  fn list_interactions_for_candidate(
    &self,
    candidate_id: i64,
  ) -> impl Future<Output = Result<Vec<InteractionRecord>, Self::Error>> + Send + '_;
}
