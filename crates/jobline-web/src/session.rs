//! Signed-cookie sessions and the identity extractors built on them.
//!
//! The cookie value is `"{role}:{account_id}"`, signed with the server key.
//! Extractors reload the account from the store on every request, so a
//! session pointing at a missing account behaves like no session at all.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{
  SignedCookieJar,
  cookie::{Cookie, SameSite},
};
use jobline_core::{
  account::{Account, Role},
  store::BoardStore,
};

use crate::{AppState, error::Error};

pub const SESSION_COOKIE: &str = "jobline_session";

/// The identity carried by a signed session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
  pub role:       Role,
  pub account_id: i64,
}

impl Session {
  pub fn for_account(account: &Account) -> Self {
    Self { role: account.role, account_id: account.account_id }
  }

  pub fn encode(&self) -> String { format!("{}:{}", self.role, self.account_id) }

  pub fn decode(value: &str) -> Option<Self> {
    let (role, id) = value.split_once(':')?;
    Some(Self {
      role:       Role::parse(role).ok()?,
      account_id: id.parse().ok()?,
    })
  }

  /// Read the session from a jar. Unsigned, tampered, or malformed cookies
  /// yield `None`.
  pub fn from_jar(jar: &SignedCookieJar) -> Option<Self> {
    jar.get(SESSION_COOKIE).and_then(|c| Self::decode(c.value()))
  }

  /// Replace whatever session the jar holds with this one.
  pub fn start(self, jar: SignedCookieJar) -> SignedCookieJar {
    jar.add(
      Cookie::build((SESSION_COOKIE, self.encode()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax),
    )
  }

  /// Drop the session cookie.
  pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
  }
}

// ─── Extractors ──────────────────────────────────────────────────────────────

/// Whatever session the request carries, unverified against the store.
pub struct MaybeSession(pub Option<Session>);

/// A signed-in candidate. Rejects with a redirect to the candidate login.
pub struct CurrentCandidate(pub Account);

/// A signed-in recruiter. Rejects with a redirect to the recruiter login.
pub struct CurrentRecruiter(pub Account);

impl<S> FromRequestParts<AppState<S>> for MaybeSession
where
  S: BoardStore + Clone + 'static,
{
  type Rejection = std::convert::Infallible;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let jar = SignedCookieJar::from_headers(&parts.headers, state.key.clone());
    Ok(MaybeSession(Session::from_jar(&jar)))
  }
}

impl<S> FromRequestParts<AppState<S>> for CurrentCandidate
where
  S: BoardStore + Clone + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    signed_in(parts, state, Role::Candidate).await.map(CurrentCandidate)
  }
}

impl<S> FromRequestParts<AppState<S>> for CurrentRecruiter
where
  S: BoardStore + Clone + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    signed_in(parts, state, Role::Recruiter).await.map(CurrentRecruiter)
  }
}

/// Load the account behind the request's session, requiring `role`.
async fn signed_in<S>(
  parts: &Parts,
  state: &AppState<S>,
  role: Role,
) -> Result<Account, Error>
where
  S: BoardStore + Clone + 'static,
{
  let jar = SignedCookieJar::from_headers(&parts.headers, state.key.clone());
  let session = Session::from_jar(&jar)
    .filter(|s| s.role == role)
    .ok_or(Error::LoginRequired(role))?;

  state
    .store
    .get_account(role, session.account_id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::LoginRequired(role))
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::{
    http::{HeaderMap, HeaderValue, header},
    response::IntoResponse as _,
  };
  use axum_extra::extract::cookie::Key;

  #[test]
  fn encode_decode() {
    let s = Session { role: Role::Recruiter, account_id: 42 };
    assert_eq!(s.encode(), "recruiter:42");
    assert_eq!(Session::decode("recruiter:42"), Some(s));
  }

  #[test]
  fn malformed_values_decode_to_none() {
    for v in ["", "candidate", "candidate:", "admin:1", "candidate:x", ":1"] {
      assert_eq!(Session::decode(v), None, "{v:?}");
    }
  }

  /// Turn the jar's `Set-Cookie` output into the `Cookie` header of a
  /// follow-up request, read back under `key`.
  fn carry(jar: SignedCookieJar, key: &Key) -> SignedCookieJar {
    let response = jar.into_response();
    let mut headers = HeaderMap::new();
    for set in response.headers().get_all(header::SET_COOKIE) {
      let pair = set.to_str().unwrap().split(';').next().unwrap().to_owned();
      headers.append(header::COOKIE, HeaderValue::from_str(&pair).unwrap());
    }
    SignedCookieJar::from_headers(&headers, key.clone())
  }

  #[test]
  fn session_survives_a_signed_round_trip() {
    let key = Key::generate();
    let session = Session { role: Role::Candidate, account_id: 7 };

    let jar = session.start(SignedCookieJar::new(key.clone()));
    assert_eq!(Session::from_jar(&carry(jar, &key)), Some(session));
  }

  #[test]
  fn cookie_signed_with_another_key_is_ignored() {
    let jar = Session { role: Role::Candidate, account_id: 7 }
      .start(SignedCookieJar::new(Key::generate()));
    assert_eq!(Session::from_jar(&carry(jar, &Key::generate())), None);
  }

  #[test]
  fn cleared_session_reads_back_empty() {
    let key = Key::generate();
    let jar = Session { role: Role::Recruiter, account_id: 3 }
      .start(SignedCookieJar::new(key.clone()));
    let jar = carry(jar, &key);
    assert!(Session::from_jar(&jar).is_some());

    let cleared = carry(Session::clear(jar), &key);
    assert_eq!(Session::from_jar(&cleared), None);
  }
}
