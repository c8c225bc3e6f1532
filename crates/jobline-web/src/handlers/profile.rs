//! The candidate's own profile.

use axum::{
  extract::{Multipart, State},
  response::{Html, Redirect},
};
use jobline_core::{
  profile::{CandidateProfile, ProfileUpdate},
  store::BoardStore,
};

use crate::{
  AppState,
  error::Error,
  handlers::MultipartForm,
  pages::{ProfilePage, render},
  session::CurrentCandidate,
};

/// Show the stored profile, or an empty one if none has been saved yet.
pub async fn view<S>(
  State(state): State<AppState<S>>,
  CurrentCandidate(account): CurrentCandidate,
) -> Result<Html<String>, Error>
where
  S: BoardStore + Clone + 'static,
{
  let profile = state
    .store
    .get_profile(account.account_id)
    .await
    .map_err(Error::store)?
    .unwrap_or_else(|| CandidateProfile::empty(account.account_id));

  render(&ProfilePage { email: &account.email, profile: &profile })
}

/// Save the signed-in candidate's profile.
///
/// The profile written is always the session's; any id submitted with the
/// form is ignored. Without a new photo the stored one is kept.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  CurrentCandidate(account): CurrentCandidate,
  multipart: Multipart,
) -> Result<Redirect, Error>
where
  S: BoardStore + Clone + 'static,
{
  let mut form = MultipartForm::read(multipart).await?;

  let mut update = ProfileUpdate {
    name:         form.text("name")?,
    education:    form.text("education")?,
    skills:       form.text("skills")?,
    experience:   form.text("experience")?,
    linkedin:     form.text("linkedin")?,
    github:       form.text("github")?,
    phone_number: form.text("phone_number")?,
    photo_path:   None,
  };
  if let Some(photo) = form.file("photo") {
    update.photo_path = Some(state.uploads.save(&photo.file_name, &photo.bytes).await?);
  }

  state
    .store
    .upsert_profile(account.account_id, update)
    .await
    .map_err(Error::store)?;

  tracing::info!(candidate_id = account.account_id, "profile updated");
  Ok(Redirect::to("/dashboard"))
}
