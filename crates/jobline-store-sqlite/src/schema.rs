//! SQL schema for the Jobline SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Candidates and recruiters are separate tables, so an email is unique per
-- role and the two id spaces are independent.
CREATE TABLE IF NOT EXISTS candidates (
    candidate_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,      -- argon2 PHC string
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS recruiters (
    recruiter_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

-- At most one profile per candidate: the owner id is the primary key.
CREATE TABLE IF NOT EXISTS candidate_profiles (
    candidate_id INTEGER PRIMARY KEY REFERENCES candidates(candidate_id),
    name         TEXT NOT NULL DEFAULT '',
    education    TEXT NOT NULL DEFAULT '',
    skills       TEXT NOT NULL DEFAULT '',
    experience   TEXT NOT NULL DEFAULT '',
    linkedin     TEXT NOT NULL DEFAULT '',
    github       TEXT NOT NULL DEFAULT '',
    phone_number TEXT NOT NULL DEFAULT '',
    photo_path   TEXT,                -- relative to the upload directory
    updated_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS resumes (
    resume_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    candidate_id INTEGER NOT NULL REFERENCES candidates(candidate_id),
    title        TEXT NOT NULL,
    file_path    TEXT NOT NULL,       -- relative to the upload directory
    uploaded_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS job_posts (
    job_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    recruiter_id INTEGER NOT NULL REFERENCES recruiters(recruiter_id),
    company_name TEXT NOT NULL,
    job_title    TEXT NOT NULL,
    description  TEXT NOT NULL,
    skills       TEXT NOT NULL,
    job_type     TEXT NOT NULL CHECK (job_type IN ('onsite', 'remote', 'hybrid')),
    posted_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS job_applications (
    application_id INTEGER PRIMARY KEY AUTOINCREMENT,
    job_id         INTEGER NOT NULL REFERENCES job_posts(job_id),
    name           TEXT NOT NULL,
    email          TEXT NOT NULL,
    resume_link    TEXT NOT NULL,     -- free text, not a foreign key
    submitted_at   TEXT NOT NULL
);

-- Strictly append-only audit trail.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS resume_interactions (
    interaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
    resume_id      INTEGER NOT NULL REFERENCES resumes(resume_id),
    recruiter_id   INTEGER NOT NULL REFERENCES recruiters(recruiter_id),
    kind           TEXT NOT NULL CHECK (kind IN ('view', 'download')),
    occurred_at    TEXT NOT NULL      -- fixed-width RFC 3339 UTC; sorts lexically
);

CREATE INDEX IF NOT EXISTS resumes_candidate_idx        ON resumes(candidate_id);
CREATE INDEX IF NOT EXISTS job_posts_recruiter_idx      ON job_posts(recruiter_id);
CREATE INDEX IF NOT EXISTS job_applications_job_idx     ON job_applications(job_id);
CREATE INDEX IF NOT EXISTS resume_interactions_resume_idx ON resume_interactions(resume_id);

PRAGMA user_version = 1;
";
