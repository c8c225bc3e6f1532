//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::Utc;
use jobline_core::{
  account::{NewAccount, Role},
  job::{JobType, NewApplication, NewJobPost},
  profile::ProfileUpdate,
  resume::{InteractionKind, NewResume},
  store::BoardStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn account(email: &str) -> NewAccount {
  NewAccount {
    email:         email.into(),
    password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
  }
}

async fn candidate(s: &SqliteStore, email: &str) -> i64 {
  s.create_account(Role::Candidate, account(email))
    .await
    .unwrap()
    .unwrap()
    .account_id
}

async fn recruiter(s: &SqliteStore, email: &str) -> i64 {
  s.create_account(Role::Recruiter, account(email))
    .await
    .unwrap()
    .unwrap()
    .account_id
}

fn job(title: &str) -> NewJobPost {
  NewJobPost {
    company_name: "Acme".into(),
    job_title:    title.into(),
    description:  "Build things".into(),
    skills:       "rust, sql".into(),
    job_type:     JobType::Remote,
  }
}

fn resume(title: &str) -> NewResume {
  NewResume { title: title.into(), file_path: format!("{title}.pdf") }
}

// ─── Accounts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_find_account() {
  let s = store().await;

  let created = s
    .create_account(Role::Candidate, account("ada@example.com"))
    .await
    .unwrap()
    .expect("fresh email");
  assert_eq!(created.role, Role::Candidate);

  let found = s
    .find_account_by_email(Role::Candidate, "ada@example.com")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(found.account_id, created.account_id);
  assert_eq!(found.password_hash, created.password_hash);

  let by_id = s.get_account(Role::Candidate, created.account_id).await.unwrap();
  assert_eq!(by_id.unwrap().email, "ada@example.com");
}

#[tokio::test]
async fn duplicate_email_is_refused_without_overwriting() {
  let s = store().await;
  let first = candidate(&s, "dup@example.com").await;

  let second = s
    .create_account(Role::Candidate, NewAccount {
      email:         "dup@example.com".into(),
      password_hash: "attacker-chosen".into(),
    })
    .await
    .unwrap();
  assert!(second.is_none());

  let stored = s
    .find_account_by_email(Role::Candidate, "dup@example.com")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(stored.account_id, first);
  assert_ne!(stored.password_hash, "attacker-chosen");
}

#[tokio::test]
async fn same_email_may_register_once_per_role() {
  let s = store().await;
  candidate(&s, "both@example.com").await;
  let as_recruiter = s
    .create_account(Role::Recruiter, account("both@example.com"))
    .await
    .unwrap();
  assert!(as_recruiter.is_some());
}

#[tokio::test]
async fn accounts_are_scoped_to_their_role() {
  let s = store().await;
  let id = candidate(&s, "c@example.com").await;
  assert!(
    s.find_account_by_email(Role::Recruiter, "c@example.com")
      .await
      .unwrap()
      .is_none()
  );
  assert!(s.get_account(Role::Recruiter, id).await.unwrap().is_none());
}

// ─── Profiles ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn profile_missing_until_first_update() {
  let s = store().await;
  let id = candidate(&s, "p@example.com").await;
  assert!(s.get_profile(id).await.unwrap().is_none());

  let saved = s
    .upsert_profile(id, ProfileUpdate {
      name: "Pat".into(),
      skills: "rust".into(),
      ..ProfileUpdate::default()
    })
    .await
    .unwrap();
  assert!(saved.is_persisted());
  assert_eq!(saved.candidate_id, id);

  let fetched = s.get_profile(id).await.unwrap().unwrap();
  assert_eq!(fetched, saved);
}

#[tokio::test]
async fn profile_update_keeps_photo_when_none_given() {
  let s = store().await;
  let id = candidate(&s, "p@example.com").await;

  s.upsert_profile(id, ProfileUpdate {
    photo_path: Some("face.png".into()),
    ..ProfileUpdate::default()
  })
  .await
  .unwrap();

  let updated = s
    .upsert_profile(id, ProfileUpdate { name: "New".into(), ..ProfileUpdate::default() })
    .await
    .unwrap();
  assert_eq!(updated.name, "New");
  assert_eq!(updated.photo_path.as_deref(), Some("face.png"));
}

#[tokio::test]
async fn profile_upsert_only_touches_owner() {
  let s = store().await;
  let a = candidate(&s, "a@example.com").await;
  let b = candidate(&s, "b@example.com").await;

  s.upsert_profile(b, ProfileUpdate { name: "Bea".into(), ..ProfileUpdate::default() })
    .await
    .unwrap();
  s.upsert_profile(a, ProfileUpdate { name: "Al".into(), ..ProfileUpdate::default() })
    .await
    .unwrap();

  assert_eq!(s.get_profile(b).await.unwrap().unwrap().name, "Bea");
  assert_eq!(s.get_profile(a).await.unwrap().unwrap().name, "Al");
}

// ─── Resumes ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_get_and_list_resumes() {
  let s = store().await;
  let a = candidate(&s, "a@example.com").await;
  let b = candidate(&s, "b@example.com").await;

  let r1 = s.add_resume(a, resume("one")).await.unwrap();
  let r2 = s.add_resume(a, resume("two")).await.unwrap();
  s.add_resume(b, resume("other")).await.unwrap();

  assert_eq!(s.get_resume(r1.resume_id).await.unwrap().unwrap(), r1);
  assert!(s.get_resume(9_999).await.unwrap().is_none());

  let mine: Vec<i64> = s
    .list_resumes(a)
    .await
    .unwrap()
    .iter()
    .map(|r| r.resume_id)
    .collect();
  assert_eq!(mine, [r1.resume_id, r2.resume_id]);
}

#[tokio::test]
async fn resume_requires_existing_candidate() {
  let s = store().await;
  assert!(s.add_resume(42, resume("orphan")).await.is_err());
}

// ─── Jobs and applications ───────────────────────────────────────────────────

#[tokio::test]
async fn job_posts_are_filtered_by_recruiter() {
  let s = store().await;
  let r1 = recruiter(&s, "r1@example.com").await;
  let r2 = recruiter(&s, "r2@example.com").await;

  let j1 = s.create_job_post(r1, job("Backend")).await.unwrap();
  s.create_job_post(r2, job("Frontend")).await.unwrap();

  assert_eq!(s.list_job_posts().await.unwrap().len(), 2);

  let mine = s.list_job_posts_by_recruiter(r1).await.unwrap();
  assert_eq!(mine, vec![j1.clone()]);
  assert_eq!(s.get_job_post(j1.job_id).await.unwrap().unwrap().job_type, JobType::Remote);
}

#[tokio::test]
async fn applications_attach_to_their_job() {
  let s = store().await;
  let r = recruiter(&s, "r@example.com").await;
  let j1 = s.create_job_post(r, job("A")).await.unwrap();
  let j2 = s.create_job_post(r, job("B")).await.unwrap();

  for name in ["Ann", "Bob"] {
    s.submit_application(j1.job_id, NewApplication {
      name:        name.into(),
      email:       format!("{name}@example.com"),
      resume_link: "http://host/resume/view/1".into(),
    })
    .await
    .unwrap();
  }

  let apps = s.list_applications(j1.job_id).await.unwrap();
  let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
  assert_eq!(names, ["Ann", "Bob"]);
  assert!(s.list_applications(j2.job_id).await.unwrap().is_empty());
}

// ─── Interactions ────────────────────────────────────────────────────────────

#[tokio::test]
async fn every_interaction_is_a_new_row() {
  let s = store().await;
  let c = candidate(&s, "c@example.com").await;
  let r = recruiter(&s, "r@example.com").await;
  let res = s.add_resume(c, resume("cv")).await.unwrap();

  let before = Utc::now();
  let first = s
    .record_interaction(res.resume_id, r, InteractionKind::View)
    .await
    .unwrap();
  let second = s
    .record_interaction(res.resume_id, r, InteractionKind::View)
    .await
    .unwrap();

  assert_ne!(first.interaction_id, second.interaction_id);
  assert!(first.occurred_at >= before);
  assert!(second.occurred_at >= first.occurred_at);

  let records = s.list_interactions_for_candidate(c).await.unwrap();
  assert_eq!(records.len(), 2);
  assert_eq!(records[0].interaction.interaction_id, second.interaction_id);
  assert_eq!(records[0].recruiter_email.as_deref(), Some("r@example.com"));
}

#[tokio::test]
async fn interaction_timestamps_never_precede_the_call() {
  let s = store().await;
  let c = candidate(&s, "c@example.com").await;
  let r = recruiter(&s, "r@example.com").await;
  let res = s.add_resume(c, resume("cv")).await.unwrap();

  for _ in 0..500 {
    let before = Utc::now();
    let row = s
      .record_interaction(res.resume_id, r, InteractionKind::Download)
      .await
      .unwrap();
    assert!(row.occurred_at >= before, "{} < {}", row.occurred_at, before);
  }

  // The stored value is the returned one, digit for digit.
  let stored = s.list_interactions_for_candidate(c).await.unwrap();
  assert_eq!(stored.len(), 500);
  assert!(stored.windows(2).all(|w| w[0].interaction.occurred_at >= w[1].interaction.occurred_at));
}

#[tokio::test]
async fn interactions_are_scoped_to_the_owning_candidate() {
  let s = store().await;
  let a = candidate(&s, "a@example.com").await;
  let b = candidate(&s, "b@example.com").await;
  let r = recruiter(&s, "r@example.com").await;
  let ra = s.add_resume(a, resume("a")).await.unwrap();
  let rb = s.add_resume(b, resume("b")).await.unwrap();

  s.record_interaction(ra.resume_id, r, InteractionKind::Download)
    .await
    .unwrap();
  s.record_interaction(rb.resume_id, r, InteractionKind::View)
    .await
    .unwrap();

  let for_a = s.list_interactions_for_candidate(a).await.unwrap();
  assert_eq!(for_a.len(), 1);
  assert_eq!(for_a[0].interaction.resume_id, ra.resume_id);
  assert_eq!(for_a[0].interaction.kind, InteractionKind::Download);
}

#[tokio::test]
async fn interaction_requires_existing_resume_and_recruiter() {
  let s = store().await;
  let c = candidate(&s, "c@example.com").await;
  let r = recruiter(&s, "r@example.com").await;
  let res = s.add_resume(c, resume("cv")).await.unwrap();

  assert!(s.record_interaction(9_999, r, InteractionKind::View).await.is_err());
  assert!(
    s.record_interaction(res.resume_id, 9_999, InteractionKind::View)
      .await
      .is_err()
  );
  assert!(s.list_interactions_for_candidate(c).await.unwrap().is_empty());
}
