//! Dashboard Session
//!
//! Holds the current scenario/result pair and gates submissions so that only
//! one prediction request is outstanding at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::client::{PredictionClient, PredictionError};
use crate::models::{Notice, RiskAssessment, ScenarioInput};
use crate::view;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A simulation is already running")]
    Busy,

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

/// Point-in-time copy of the session
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionSnapshot {
    pub busy: bool,
    pub run_id: Option<Uuid>,
    pub scenario: Option<ScenarioInput>,
    pub assessment: Option<RiskAssessment>,
    pub notice: Option<Notice>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct SessionState {
    run_id: Option<Uuid>,
    scenario: Option<ScenarioInput>,
    assessment: Option<RiskAssessment>,
    notice: Option<Notice>,
    completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct DashboardSession {
    busy: AtomicBool,
    state: Mutex<SessionState>,
}

/// Clears the busy flag when dropped
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the busy flag, or `None` if a submission is in flight
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: &self.busy })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock();
        SessionSnapshot {
            busy: self.is_busy(),
            run_id: state.run_id,
            scenario: state.scenario.clone(),
            assessment: state.assessment.clone(),
            notice: state.notice.clone(),
            completed_at: state.completed_at,
        }
    }

    /// Submit a scenario to the prediction service.
    ///
    /// The scenario becomes current immediately. On success the assessment
    /// replaces the previous one; on failure the previous assessment is
    /// cleared and an error notice is recorded. Rejected with
    /// [`SubmitError::Busy`] without touching the session while another
    /// submission is running.
    pub async fn submit(
        &self,
        client: &PredictionClient,
        scenario: ScenarioInput,
    ) -> Result<RiskAssessment, SubmitError> {
        let _guard = self.try_begin().ok_or(SubmitError::Busy)?;

        let run_id = Uuid::new_v4();
        {
            let mut state = self.state.lock();
            state.run_id = Some(run_id);
            state.scenario = Some(scenario.clone());
        }

        tracing::info!(%run_id, "Submitting scenario to {}", client.base_url());

        let result = client.predict(&scenario).await;

        let mut state = self.state.lock();
        state.completed_at = Some(Utc::now());

        match result {
            Ok(assessment) => {
                tracing::info!(
                    %run_id,
                    risk_level = assessment.true_risk_level,
                    incident = assessment.incident_occurred,
                    "Prediction complete"
                );

                state.notice = Some(Notice::success(
                    "Real Model Prediction Complete",
                    view::provenance_note(assessment.model_metadata.as_ref()),
                ));
                state.assessment = Some(assessment.clone());
                Ok(assessment)
            }
            Err(e) => {
                tracing::error!(%run_id, "Prediction error: {}", e);

                state.notice = Some(Notice::error(
                    "Backend Connection Failed",
                    format!("Cannot connect to ML model API. Error: {}", e),
                ));
                state.assessment = None;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_releases_on_drop() {
        let session = DashboardSession::new();

        let guard = session.try_begin();
        assert!(guard.is_some());
        assert!(session.is_busy());
        assert!(session.try_begin().is_none());

        drop(guard);
        assert!(!session.is_busy());
        assert!(session.try_begin().is_some());
    }

    #[tokio::test]
    async fn test_submit_rejected_while_busy() {
        let session = DashboardSession::new();
        let client = PredictionClient::with_base_url("http://127.0.0.1:9");

        let _guard = session.try_begin().unwrap();
        let result = session.submit(&client, ScenarioInput::default()).await;

        assert!(matches!(result, Err(SubmitError::Busy)));
        let snapshot = session.snapshot();
        assert!(snapshot.scenario.is_none());
        assert!(snapshot.notice.is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = DashboardSession::new().snapshot();
        assert!(!snapshot.busy);
        assert!(snapshot.assessment.is_none());
        assert!(snapshot.run_id.is_none());
    }
}
