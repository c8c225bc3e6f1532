//! askama page templates.
//!
//! Templates live in `templates/` next to this crate's manifest and all
//! extend `base.html`.

use askama::Template;
use axum::response::Html;
use jobline_core::{
  account::Role,
  insights::ResumeInsight,
  job::{JobPost, JobType, JobWithApplications},
  profile::CandidateProfile,
};

use crate::error::Error;

/// Render any page into an HTML response body.
pub fn render<T: Template>(page: &T) -> Result<Html<String>, Error> {
  Ok(Html(page.render()?))
}

fn role_label(role: Role) -> &'static str {
  match role {
    Role::Candidate => "Candidate",
    Role::Recruiter => "Recruiter",
  }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
  pub label: &'static str,
  pub base:  &'static str,
}

impl LoginPage {
  pub fn for_role(role: Role) -> Self {
    Self { label: role_label(role), base: role.login_path() }
  }
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage {
  pub label: &'static str,
  pub base:  &'static str,
}

impl SignupPage {
  pub fn for_role(role: Role) -> Self {
    Self { label: role_label(role), base: role.login_path() }
  }
}

#[derive(Template)]
#[template(path = "candidate_dashboard.html")]
pub struct CandidateDashboardPage<'a> {
  pub email: &'a str,
}

#[derive(Template)]
#[template(path = "recruiter_dashboard.html")]
pub struct RecruiterDashboardPage<'a> {
  pub email: &'a str,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage<'a> {
  pub email:   &'a str,
  pub profile: &'a CandidateProfile,
}

#[derive(Template)]
#[template(path = "resume_upload.html")]
pub struct ResumeUploadPage {}

#[derive(Template)]
#[template(path = "resume_upload_success.html")]
pub struct ResumeUploadedPage<'a> {
  pub title:       &'a str,
  pub resume_link: &'a str,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsPage<'a> {
  pub jobs: &'a [JobPost],
}

#[derive(Template)]
#[template(path = "quick_apply.html")]
pub struct QuickApplyPage<'a> {
  pub job: &'a JobPost,
}

#[derive(Template)]
#[template(path = "job_post.html")]
pub struct JobPostPage {
  pub job_types: &'static [JobType],
}

#[derive(Template)]
#[template(path = "applications.html")]
pub struct ApplicationsPage<'a> {
  pub email:    &'a str,
  pub postings: &'a [JobWithApplications],
}

#[derive(Template)]
#[template(path = "resume_insights.html")]
pub struct InsightsPage<'a> {
  pub insights: &'a [ResumeInsight],
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
  pub status:  u16,
  pub message: &'a str,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn login_page_posts_to_its_role() {
    let html = LoginPage::for_role(Role::Recruiter).render().unwrap();
    assert!(html.contains(r#"action="/recruiter/login""#), "{html}");
    assert!(html.contains("/recruiter/signup"));
  }

  #[test]
  fn error_page_escapes_the_message() {
    let html = ErrorPage { status: 400, message: "<script>" }.render().unwrap();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
  }

  #[test]
  fn job_post_form_offers_every_type() {
    let html = JobPostPage { job_types: &JobType::ALL }.render().unwrap();
    for t in JobType::ALL {
      assert!(html.contains(&format!(r#"value="{}""#, t.as_str())), "{html}");
    }
  }
}
