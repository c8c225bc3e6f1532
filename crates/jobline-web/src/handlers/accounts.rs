//! Signup, login, logout and the landing pages around them.

use axum::{
  Form,
  extract::State,
  response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{SignedCookieJar, WithRejection};
use jobline_core::{
  account::{NewAccount, Role},
  store::BoardStore,
};
use serde::Deserialize;

use crate::{
  AppState,
  auth::{authenticate, hash_password},
  error::Error,
  pages::{
    CandidateDashboardPage, IndexPage, LoginPage, RecruiterDashboardPage,
    SignupPage, render,
  },
  session::{MaybeSession, Session},
};

#[derive(Deserialize)]
pub struct Credentials {
  pub email:    String,
  pub password: String,
}

// ─── Pages ───────────────────────────────────────────────────────────────────

pub async fn index() -> Result<Html<String>, Error> { render(&IndexPage {}) }

pub async fn candidate_login_page() -> Result<Html<String>, Error> {
  render(&LoginPage::for_role(Role::Candidate))
}

pub async fn candidate_signup_page() -> Result<Html<String>, Error> {
  render(&SignupPage::for_role(Role::Candidate))
}

pub async fn recruiter_login_page() -> Result<Html<String>, Error> {
  render(&LoginPage::for_role(Role::Recruiter))
}

pub async fn recruiter_signup_page() -> Result<Html<String>, Error> {
  render(&SignupPage::for_role(Role::Recruiter))
}

/// The signed-in account's dashboard; anyone else goes back to `/`.
pub async fn dashboard<S>(
  State(state): State<AppState<S>>,
  MaybeSession(session): MaybeSession,
) -> Result<Response, Error>
where
  S: BoardStore + Clone + 'static,
{
  let Some(session) = session else {
    return Ok(Redirect::to("/").into_response());
  };
  let Some(account) = state
    .store
    .get_account(session.role, session.account_id)
    .await
    .map_err(Error::store)?
  else {
    return Ok(Redirect::to("/").into_response());
  };

  let page = match account.role {
    Role::Candidate => render(&CandidateDashboardPage { email: &account.email })?,
    Role::Recruiter => render(&RecruiterDashboardPage { email: &account.email })?,
  };
  Ok(page.into_response())
}

// ─── Signup ──────────────────────────────────────────────────────────────────

pub async fn candidate_signup<S>(
  State(state): State<AppState<S>>,
  WithRejection(Form(form), _): WithRejection<Form<Credentials>, Error>,
) -> Result<Redirect, Error>
where
  S: BoardStore + Clone + 'static,
{
  signup(&state, Role::Candidate, form).await
}

pub async fn recruiter_signup<S>(
  State(state): State<AppState<S>>,
  WithRejection(Form(form), _): WithRejection<Form<Credentials>, Error>,
) -> Result<Redirect, Error>
where
  S: BoardStore + Clone + 'static,
{
  signup(&state, Role::Recruiter, form).await
}

/// Register an account and send the user to log in. Never starts a session.
async fn signup<S>(
  state: &AppState<S>,
  role: Role,
  form: Credentials,
) -> Result<Redirect, Error>
where
  S: BoardStore + Clone + 'static,
{
  let email = form.email.trim();
  if email.is_empty() || form.password.is_empty() {
    return Err(Error::BadRequest("Email and password are required".into()));
  }

  let password_hash = hash_password(&form.password)?;
  let created = state
    .store
    .create_account(role, NewAccount { email: email.to_owned(), password_hash })
    .await
    .map_err(Error::store)?;

  match created {
    Some(account) => {
      tracing::info!(%role, account_id = account.account_id, "account created");
      Ok(Redirect::to(role.login_path()))
    }
    None => {
      tracing::info!(%role, "signup refused, email already registered");
      Err(Error::Conflict("Email already registered".into()))
    }
  }
}

// ─── Login / logout ──────────────────────────────────────────────────────────

pub async fn candidate_login<S>(
  State(state): State<AppState<S>>,
  jar: SignedCookieJar,
  WithRejection(Form(form), _): WithRejection<Form<Credentials>, Error>,
) -> Result<(SignedCookieJar, Redirect), Error>
where
  S: BoardStore + Clone + 'static,
{
  login(&state, jar, Role::Candidate, form).await
}

pub async fn recruiter_login<S>(
  State(state): State<AppState<S>>,
  jar: SignedCookieJar,
  WithRejection(Form(form), _): WithRejection<Form<Credentials>, Error>,
) -> Result<(SignedCookieJar, Redirect), Error>
where
  S: BoardStore + Clone + 'static,
{
  login(&state, jar, Role::Recruiter, form).await
}

/// Check credentials and start a session. On failure the jar is dropped
/// unchanged, so any existing session survives.
async fn login<S>(
  state: &AppState<S>,
  jar: SignedCookieJar,
  role: Role,
  form: Credentials,
) -> Result<(SignedCookieJar, Redirect), Error>
where
  S: BoardStore + Clone + 'static,
{
  match authenticate(&*state.store, role, form.email.trim(), &form.password).await {
    Ok(account) => {
      tracing::info!(%role, account_id = account.account_id, "login");
      let jar = Session::for_account(&account).start(jar);
      Ok((jar, Redirect::to("/dashboard")))
    }
    Err(Error::InvalidCredentials) => {
      tracing::info!(%role, "login failed");
      Err(Error::InvalidCredentials)
    }
    Err(e) => Err(e),
  }
}

pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
  (Session::clear(jar), Redirect::to("/"))
}
