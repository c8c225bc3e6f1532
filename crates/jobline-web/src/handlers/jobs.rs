//! Job posts, quick-apply and the recruiter's application list.

use axum::{
  Form,
  extract::{Path, State},
  response::{Html, Redirect},
};
use jobline_core::{
  job::{JobPost, JobType, JobWithApplications, NewApplication, NewJobPost},
  store::BoardStore,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  pages::{ApplicationsPage, JobPostPage, JobsPage, QuickApplyPage, render},
  session::CurrentRecruiter,
};

#[derive(Deserialize)]
pub struct JobPostForm {
  pub company_name: String,
  pub job_title:    String,
  pub description:  String,
  pub skills:       String,
  /// Parsed by hand so an unknown value is a 400 rather than a rejection.
  pub job_type:     String,
}

#[derive(Deserialize)]
pub struct ApplicationForm {
  pub name:        String,
  pub email:       String,
  pub resume_link: String,
}

// ─── Public ──────────────────────────────────────────────────────────────────

pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: BoardStore + Clone + 'static,
{
  let jobs = state.store.list_job_posts().await.map_err(Error::store)?;
  render(&JobsPage { jobs: &jobs })
}

pub async fn apply_form<S>(
  State(state): State<AppState<S>>,
  WithRejection(Path(job_id), _): WithRejection<Path<i64>, Error>,
) -> Result<Html<String>, Error>
where
  S: BoardStore + Clone + 'static,
{
  let job = find_job(&state, job_id).await?;
  render(&QuickApplyPage { job: &job })
}

/// Quick-apply needs no account; the applicant's details are stored as typed.
pub async fn submit_application<S>(
  State(state): State<AppState<S>>,
  WithRejection(Path(job_id), _): WithRejection<Path<i64>, Error>,
  WithRejection(Form(form), _): WithRejection<Form<ApplicationForm>, Error>,
) -> Result<Redirect, Error>
where
  S: BoardStore + Clone + 'static,
{
  let job = find_job(&state, job_id).await?;
  let application = state
    .store
    .submit_application(job.job_id, NewApplication {
      name:        form.name,
      email:       form.email,
      resume_link: form.resume_link,
    })
    .await
    .map_err(Error::store)?;

  tracing::info!(job_id, application_id = application.application_id, "application submitted");
  Ok(Redirect::to("/jobs"))
}

async fn find_job<S>(state: &AppState<S>, job_id: i64) -> Result<JobPost, Error>
where
  S: BoardStore + Clone + 'static,
{
  state
    .store
    .get_job_post(job_id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::NotFound("Job not found".into()))
}

// ─── Recruiter only ──────────────────────────────────────────────────────────

pub async fn post_form(
  CurrentRecruiter(_): CurrentRecruiter,
) -> Result<Html<String>, Error> {
  render(&JobPostPage { job_types: &JobType::ALL })
}

pub async fn create<S>(
  State(state): State<AppState<S>>,
  CurrentRecruiter(account): CurrentRecruiter,
  WithRejection(Form(form), _): WithRejection<Form<JobPostForm>, Error>,
) -> Result<Redirect, Error>
where
  S: BoardStore + Clone + 'static,
{
  let input = NewJobPost {
    company_name: form.company_name,
    job_title:    form.job_title,
    description:  form.description,
    skills:       form.skills,
    job_type:     JobType::parse(&form.job_type)?,
  };

  let job = state
    .store
    .create_job_post(account.account_id, input)
    .await
    .map_err(Error::store)?;

  tracing::info!(recruiter_id = account.account_id, job_id = job.job_id, "job posted");
  Ok(Redirect::to("/dashboard"))
}

/// The recruiter's own job posts, each with the applications it received.
pub async fn applications<S>(
  State(state): State<AppState<S>>,
  CurrentRecruiter(account): CurrentRecruiter,
) -> Result<Html<String>, Error>
where
  S: BoardStore + Clone + 'static,
{
  let jobs = state
    .store
    .list_job_posts_by_recruiter(account.account_id)
    .await
    .map_err(Error::store)?;

  let mut postings = Vec::with_capacity(jobs.len());
  for job in jobs {
    let applications = state
      .store
      .list_applications(job.job_id)
      .await
      .map_err(Error::store)?;
    postings.push(JobWithApplications { job, applications });
  }

  render(&ApplicationsPage { email: &account.email, postings: &postings })
}
