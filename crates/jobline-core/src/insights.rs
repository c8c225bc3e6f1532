//! Resume insights: the candidate-facing summary of the interaction log.
//!
//! Computed on read from the candidate's resumes and the interaction rows
//! recorded against them; never stored.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::resume::{InteractionKind, InteractionRecord, Resume};

/// Shown in place of the recruiter's email when the recruiter row is gone.
pub const UNKNOWN_RECRUITER: &str = "Unknown Recruiter";

/// One line of the per-resume interaction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionDetail {
  pub interaction_id:  i64,
  pub recruiter_email: String,
  pub kind:            InteractionKind,
  pub occurred_at:     DateTime<Utc>,
}

/// Aggregated activity for a single resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeInsight {
  pub resume:       Resume,
  pub views:        usize,
  pub downloads:    usize,
  /// Newest first; ties broken by descending interaction id.
  pub interactions: Vec<InteractionDetail>,
}

/// Group `records` under their resumes and count views and downloads.
///
/// Every resume in `resumes` appears exactly once, ordered by ascending
/// resume id, including resumes with no recorded activity. Records for
/// resumes not in `resumes` are dropped.
pub fn build(
  mut resumes: Vec<Resume>,
  records: Vec<InteractionRecord>,
) -> Vec<ResumeInsight> {
  resumes.sort_by_key(|r| r.resume_id);

  let mut by_resume: HashMap<i64, Vec<InteractionDetail>> = HashMap::new();
  for record in records {
    let i = record.interaction;
    by_resume.entry(i.resume_id).or_default().push(InteractionDetail {
      interaction_id:  i.interaction_id,
      recruiter_email: record
        .recruiter_email
        .unwrap_or_else(|| UNKNOWN_RECRUITER.to_owned()),
      kind:            i.kind,
      occurred_at:     i.occurred_at,
    });
  }

  resumes
    .into_iter()
    .map(|resume| {
      let mut interactions =
        by_resume.remove(&resume.resume_id).unwrap_or_default();
      interactions.sort_by(|a, b| {
        b.occurred_at
          .cmp(&a.occurred_at)
          .then(b.interaction_id.cmp(&a.interaction_id))
      });

      let views = interactions
        .iter()
        .filter(|d| d.kind == InteractionKind::View)
        .count();
      let downloads = interactions.len() - views;

      ResumeInsight { resume, views, downloads, interactions }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;
  use crate::resume::ResumeInteraction;

  fn resume(id: i64) -> Resume {
    Resume {
      resume_id:    id,
      candidate_id: 1,
      title:        format!("Resume {id}"),
      file_path:    format!("{id}.pdf"),
      uploaded_at:  Utc.timestamp_opt(0, 0).unwrap(),
    }
  }

  fn record(
    id: i64,
    resume_id: i64,
    kind: InteractionKind,
    secs: i64,
    email: Option<&str>,
  ) -> InteractionRecord {
    InteractionRecord {
      interaction:     ResumeInteraction {
        interaction_id: id,
        resume_id,
        recruiter_id: 9,
        kind,
        occurred_at: Utc.timestamp_opt(secs, 0).unwrap(),
      },
      recruiter_email: email.map(str::to_owned),
    }
  }

  #[test]
  fn counts_views_and_downloads_per_resume() {
    let insights = build(vec![resume(2), resume(1)], vec![
      record(1, 1, InteractionKind::View, 10, Some("a@x.io")),
      record(2, 1, InteractionKind::Download, 20, Some("a@x.io")),
      record(3, 1, InteractionKind::View, 30, Some("b@x.io")),
      record(4, 2, InteractionKind::Download, 40, Some("b@x.io")),
    ]);

    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].resume.resume_id, 1);
    assert_eq!((insights[0].views, insights[0].downloads), (2, 1));
    assert_eq!(insights[1].resume.resume_id, 2);
    assert_eq!((insights[1].views, insights[1].downloads), (0, 1));
  }

  #[test]
  fn interactions_are_newest_first_with_id_tiebreak() {
    let insights = build(vec![resume(1)], vec![
      record(1, 1, InteractionKind::View, 10, Some("a@x.io")),
      record(3, 1, InteractionKind::View, 50, Some("a@x.io")),
      record(2, 1, InteractionKind::View, 50, Some("a@x.io")),
    ]);
    let ids: Vec<i64> =
      insights[0].interactions.iter().map(|d| d.interaction_id).collect();
    assert_eq!(ids, [3, 2, 1]);
  }

  #[test]
  fn resume_without_activity_is_listed_with_zero_counts() {
    let insights = build(vec![resume(7)], vec![]);
    assert_eq!(insights.len(), 1);
    assert_eq!((insights[0].views, insights[0].downloads), (0, 0));
    assert!(insights[0].interactions.is_empty());
  }

  #[test]
  fn missing_recruiter_gets_placeholder() {
    let insights = build(vec![resume(1)], vec![record(
      1,
      1,
      InteractionKind::View,
      1,
      None,
    )]);
    assert_eq!(insights[0].interactions[0].recruiter_email, UNKNOWN_RECRUITER);
  }

  #[test]
  fn records_for_foreign_resumes_are_dropped() {
    let insights = build(vec![resume(1)], vec![record(
      1,
      99,
      InteractionKind::View,
      1,
      Some("a@x.io"),
    )]);
    assert!(insights[0].interactions.is_empty());
  }
}
