//! Password hashing and credential checks.
//!
//! Passwords are stored as argon2id PHC strings with a per-account random
//! salt. Verification never distinguishes an unknown email from a wrong
//! password.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use jobline_core::{
  account::{Account, Role},
  store::BoardStore,
};
use rand_core::OsRng;

use crate::error::Error;

/// Hash `password` into a PHC string, e.g. `$argon2id$v=19$…`.
pub fn hash_password(password: &str) -> Result<String, Error> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::PasswordHash(e.to_string()))
}

/// Check `password` against a stored PHC string. A malformed hash never
/// verifies.
pub fn verify_password(password: &str, phc: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(phc) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

/// Resolve `email` + `password` to an account of `role`.
pub async fn authenticate<S>(
  store: &S,
  role: Role,
  email: &str,
  password: &str,
) -> Result<Account, Error>
where
  S: BoardStore,
{
  let account = store
    .find_account_by_email(role, email)
    .await
    .map_err(Error::store)?
    .ok_or(Error::InvalidCredentials)?;

  if verify_password(password, &account.password_hash) {
    Ok(account)
  } else {
    Err(Error::InvalidCredentials)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_then_verify() {
    let hash = hash_password("hunter2").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("hunter2", &hash));
    assert!(!verify_password("hunter3", &hash));
  }

  #[test]
  fn same_password_hashes_differently() {
    let a = hash_password("secret").unwrap();
    let b = hash_password("secret").unwrap();
    assert_ne!(a, b, "salts must differ");
  }

  #[test]
  fn garbage_hash_never_verifies() {
    assert!(!verify_password("secret", "not-a-phc-string"));
    assert!(!verify_password("", ""));
  }
}
