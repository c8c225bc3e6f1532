//! The resume-interaction audit log: recruiters open resumes through it,
//! candidates read it back as insights.

use axum::{
  Form,
  extract::State,
  response::{Html, Response},
};
use axum_extra::extract::WithRejection;
use jobline_core::{
  resume::{self, InteractionKind},
  store::BoardStore,
};
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  handlers::resumes::{Disposition, locate_file, serve_file},
  pages::{InsightsPage, render},
  session::{CurrentCandidate, CurrentRecruiter},
};

#[derive(Deserialize)]
pub struct InteractionForm {
  pub resume_link:      String,
  pub interaction_type: String,
}

/// Open a resume on a recruiter's behalf and record that they did.
///
/// Validation and file lookup happen before the row is written, so a bad
/// link, an unknown kind, or a missing file leaves the log untouched.
pub async fn record<S>(
  State(state): State<AppState<S>>,
  CurrentRecruiter(account): CurrentRecruiter,
  WithRejection(Form(form), _): WithRejection<Form<InteractionForm>, Error>,
) -> Result<Response, Error>
where
  S: BoardStore + Clone + 'static,
{
  let resume_id = resume::parse_link(&form.resume_link)?;
  let kind = InteractionKind::parse(&form.interaction_type)?;
  let (resume, path) = locate_file(&state, resume_id).await?;

  let interaction = state
    .store
    .record_interaction(resume.resume_id, account.account_id, kind)
    .await
    .map_err(Error::store)?;

  tracing::info!(
    resume_id,
    recruiter_id = account.account_id,
    kind = kind.as_str(),
    interaction_id = interaction.interaction_id,
    "resume interaction recorded"
  );

  let disposition = match kind {
    InteractionKind::View     => Disposition::Inline,
    InteractionKind::Download => Disposition::Attachment,
  };
  serve_file(&resume, path, disposition).await
}

/// Views and downloads of every resume the candidate owns.
pub async fn insights<S>(
  State(state): State<AppState<S>>,
  CurrentCandidate(account): CurrentCandidate,
) -> Result<Html<String>, Error>
where
  S: BoardStore + Clone + 'static,
{
  let resumes = state
    .store
    .list_resumes(account.account_id)
    .await
    .map_err(Error::store)?;
  let records = state
    .store
    .list_interactions_for_candidate(account.account_id)
    .await
    .map_err(Error::store)?;

  let insights = jobline_core::insights::build(resumes, records);
  render(&InsightsPage { insights: &insights })
}
