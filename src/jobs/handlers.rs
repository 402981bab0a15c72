use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    error::AppError,
    jobs::dto::{AutoJobsRequest, AutoJobsResponse, RapidJobsRequest, RapidJobsResponse},
    state::AppState,
};

pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/api/rapid-jobs", post(rapid_jobs))
        .route("/api/auto-jobs", post(auto_jobs))
}

/// Manual search by company name. An empty listing page is a legitimate
/// outcome (`found: false`); a provider failure is a 502.
#[instrument(skip(state, payload))]
pub async fn rapid_jobs(
    State(state): State<AppState>,
    Json(payload): Json<RapidJobsRequest>,
) -> Result<Json<RapidJobsResponse>, AppError> {
    let company = payload.company.trim();
    if company.is_empty() {
        return Err(AppError::Validation("company is required".into()));
    }

    let query = format!("{} jobs", company);
    let page = payload.page.max(1);
    let jobs = state.jobs.search(&query, page).await.map_err(|e| {
        warn!(error = %e, "job search failed");
        AppError::Upstream(e.to_string())
    })?;

    info!(company = %company, listings = jobs.len(), "rapid job search");
    Ok(Json(RapidJobsResponse {
        found: !jobs.is_empty(),
        jobs,
    }))
}

/// Auto-match search built from profile fields, paged one provider page per
/// call.
#[instrument(skip(state, payload))]
pub async fn auto_jobs(
    State(state): State<AppState>,
    Json(payload): Json<AutoJobsRequest>,
) -> Result<Json<AutoJobsResponse>, AppError> {
    let query = build_auto_query(&payload.qualification, &payload.experience, &payload.skills);
    if query.trim() == "jobs" {
        return Err(AppError::Validation(
            "qualification, experience or skills is required".into(),
        ));
    }

    // Page numbers start at 1; an out-of-range page must not overflow.
    let page = payload.page.max(1);
    let jobs = state.jobs.search(&query, page).await.map_err(|e| {
        warn!(error = %e, "job search failed");
        AppError::Upstream(e.to_string())
    })?;

    info!(query = %query, page, listings = jobs.len(), "auto job search");
    Ok(Json(AutoJobsResponse {
        success: !jobs.is_empty(),
        next_page: page.saturating_add(1),
        prev_page: if page > 1 { Some(page - 1) } else { None },
        jobs,
    }))
}

/// Query text favors skills + qualification when skills is non-empty, and
/// falls back to qualification + experience otherwise.
fn build_auto_query(qualification: &str, experience: &str, skills: &str) -> String {
    let skills = skills.trim();
    if !skills.is_empty() {
        format!("{} {} jobs", skills, qualification.trim())
    } else {
        format!("{} {} jobs", qualification.trim(), experience.trim())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::jobs::client::{JobSearch, JobSearchError, Listing};

    struct StaticJobs(Vec<Listing>);

    #[async_trait]
    impl JobSearch for StaticJobs {
        async fn search(&self, _query: &str, _page: u32) -> Result<Vec<Listing>, JobSearchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingJobs;

    #[async_trait]
    impl JobSearch for FailingJobs {
        async fn search(&self, _query: &str, _page: u32) -> Result<Vec<Listing>, JobSearchError> {
            Err(JobSearchError::Api {
                status: 503,
                message: "service unavailable".into(),
            })
        }
    }

    fn state_with_jobs(jobs: Arc<dyn JobSearch>) -> AppState {
        let base = AppState::fake();
        AppState::from_parts(base.db.clone(), base.config.clone(), base.llm.clone(), jobs)
    }

    #[test]
    fn query_uses_skills_and_qualification_when_skills_present() {
        let q = build_auto_query("BSc", "3 years", "rust sql");
        assert_eq!(q, "rust sql BSc jobs");
    }

    #[test]
    fn query_falls_back_to_qualification_and_experience() {
        let q = build_auto_query("BSc", "3 years", "   ");
        assert_eq!(q, "BSc 3 years jobs");
    }

    #[tokio::test]
    async fn rapid_jobs_reports_found_with_listings() {
        let state = state_with_jobs(Arc::new(StaticJobs(vec![json!({"job_title": "dev"})])));
        let resp = rapid_jobs(
            State(state),
            Json(RapidJobsRequest {
                company: "Acme".into(),
                page: 1,
            }),
        )
        .await
        .expect("search should succeed");
        assert!(resp.0.found);
        assert_eq!(resp.0.jobs.len(), 1);
    }

    #[tokio::test]
    async fn rapid_jobs_empty_page_is_not_found_but_not_an_error() {
        let state = state_with_jobs(Arc::new(StaticJobs(vec![])));
        let resp = rapid_jobs(
            State(state),
            Json(RapidJobsRequest {
                company: "Acme".into(),
                page: 1,
            }),
        )
        .await
        .expect("empty page is a business outcome");
        assert!(!resp.0.found);
        assert!(resp.0.jobs.is_empty());
    }

    #[tokio::test]
    async fn rapid_jobs_provider_failure_is_upstream_error() {
        let state = state_with_jobs(Arc::new(FailingJobs));
        let err = rapid_jobs(
            State(state),
            Json(RapidJobsRequest {
                company: "Acme".into(),
                page: 1,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn auto_jobs_pagination_fields() {
        let state = state_with_jobs(Arc::new(StaticJobs(vec![json!({"job_title": "dev"})])));
        let first = auto_jobs(
            State(state.clone()),
            Json(AutoJobsRequest {
                qualification: "BSc".into(),
                experience: "3 years".into(),
                skills: "rust".into(),
                page: 1,
            }),
        )
        .await
        .expect("search should succeed");
        assert!(first.0.success);
        assert_eq!(first.0.next_page, 2);
        assert_eq!(first.0.prev_page, None);

        let third = auto_jobs(
            State(state),
            Json(AutoJobsRequest {
                qualification: "BSc".into(),
                experience: "3 years".into(),
                skills: "rust".into(),
                page: 3,
            }),
        )
        .await
        .expect("search should succeed");
        assert_eq!(third.0.next_page, 4);
        assert_eq!(third.0.prev_page, Some(2));
    }

    #[tokio::test]
    async fn auto_jobs_max_page_does_not_overflow() {
        let state = state_with_jobs(Arc::new(StaticJobs(vec![json!({"job_title": "dev"})])));
        let resp = auto_jobs(
            State(state),
            Json(AutoJobsRequest {
                qualification: "BSc".into(),
                experience: "3 years".into(),
                skills: "rust".into(),
                page: u32::MAX,
            }),
        )
        .await
        .expect("search should succeed");
        assert_eq!(resp.0.next_page, u32::MAX);
        assert_eq!(resp.0.prev_page, Some(u32::MAX - 1));
    }

    #[tokio::test]
    async fn auto_jobs_page_zero_is_treated_as_first_page() {
        let state = state_with_jobs(Arc::new(StaticJobs(vec![json!({"job_title": "dev"})])));
        let resp = auto_jobs(
            State(state),
            Json(AutoJobsRequest {
                qualification: "BSc".into(),
                experience: "3 years".into(),
                skills: "rust".into(),
                page: 0,
            }),
        )
        .await
        .expect("search should succeed");
        assert_eq!(resp.0.next_page, 2);
        assert_eq!(resp.0.prev_page, None);
    }

    #[tokio::test]
    async fn auto_jobs_requires_some_profile_text() {
        let state = state_with_jobs(Arc::new(StaticJobs(vec![])));
        let err = auto_jobs(
            State(state),
            Json(AutoJobsRequest {
                qualification: "".into(),
                experience: "".into(),
                skills: "".into(),
                page: 1,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
