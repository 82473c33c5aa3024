//! REST API: plan preview/validation endpoints and the tournament submission gate.
//!
//! Plan endpoints are stateless: the client sends its current plan and gets the new one back.
//! Only submitted tournaments live in the shared [`TournamentStore`].

use crate::logic::{
    accept_submission, add_round, derive_group_counts, phases_to_csv, project_phases,
    remove_round, validate_plan,
};
use crate::models::{SubmissionError, TournamentPlan, TournamentStatus};
use crate::store::{TournamentId, TournamentStore};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::Deserialize;

/// Shared state: the tournament store behind a trait object.
pub type AppState = Data<dyn TournamentStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct StatusOption {
    value: TournamentStatus,
    label: &'static str,
}

#[derive(Deserialize)]
struct SetStatusBody {
    status: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: round index (e.g. /api/plans/rounds/{index}/remove)
#[derive(Deserialize)]
struct RoundPath {
    index: usize,
}

fn store_failure(e: impl std::fmt::Display) -> HttpResponse {
    log::warn!("Tournament store failed: {}", e);
    HttpResponse::BadGateway().json(serde_json::json!({
        "message": "Could not contact tournament store",
        "backendError": e.to_string(),
    }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-planner",
    })
}

/// Every tournament status with its display label, for status pickers and badges.
#[get("/api/statuses")]
async fn api_statuses() -> HttpResponse {
    let options: Vec<StatusOption> = TournamentStatus::ALL
        .iter()
        .map(|&status| StatusOption {
            value: status,
            label: status.display_name(),
        })
        .collect();
    HttpResponse::Ok().json(options)
}

/// Recompute group counts of the posted plan.
#[post("/api/plans/derive")]
async fn api_derive_plan(plan: Json<TournamentPlan>) -> HttpResponse {
    HttpResponse::Ok().json(derive_group_counts(&plan))
}

/// Append a round seeded from the last one.
#[post("/api/plans/rounds")]
async fn api_add_round(plan: Json<TournamentPlan>) -> HttpResponse {
    HttpResponse::Ok().json(add_round(&plan))
}

/// Remove a round (no-op when only one round is left).
#[post("/api/plans/rounds/{index}/remove")]
async fn api_remove_round(path: Path<RoundPath>, plan: Json<TournamentPlan>) -> HttpResponse {
    HttpResponse::Ok().json(remove_round(&plan, path.index))
}

/// Validate the posted plan: `{ valid, errors }`.
#[post("/api/plans/validate")]
async fn api_validate_plan(plan: Json<TournamentPlan>) -> HttpResponse {
    HttpResponse::Ok().json(validate_plan(&plan))
}

/// Phase preview of the posted plan.
#[post("/api/plans/phases")]
async fn api_plan_phases(plan: Json<TournamentPlan>) -> HttpResponse {
    HttpResponse::Ok().json(project_phases(&plan))
}

/// Phase preview as a CSV download.
#[post("/api/plans/phases.csv")]
async fn api_plan_phases_csv(plan: Json<TournamentPlan>) -> HttpResponse {
    match phases_to_csv(&project_phases(&plan)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Submit a tournament: parse, validate, then hand it to the store.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, payload: String) -> HttpResponse {
    let submitted = match accept_submission(&payload) {
        Ok(submitted) => submitted,
        Err(SubmissionError::Rejected(report)) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Please fix the validation errors before submitting.",
                "errors": report.messages(),
            }));
        }
        Err(e) => {
            log::debug!("Submission refused: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string(),
                "errors": { "form": e.to_string() },
            }));
        }
    };
    match state.insert(submitted) {
        Ok(stored) => HttpResponse::Created().json(stored),
        Err(e) => store_failure(e),
    }
}

/// List stored tournaments.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    match state.list() {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => store_failure(e),
    }
}

/// Get a stored tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.get(path.id) {
        Ok(Some(t)) => HttpResponse::Ok().json(t),
        Ok(None) => not_found(),
        Err(e) => store_failure(e),
    }
}

/// Update status; unknown status strings become `draft`.
#[put("/api/tournaments/{id}/status")]
async fn api_set_status(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<SetStatusBody>,
) -> HttpResponse {
    let status = TournamentStatus::from_external(&body.status);
    match state.update_status(path.id, status) {
        Ok(Some(t)) => HttpResponse::Ok().json(t),
        Ok(None) => not_found(),
        Err(e) => store_failure(e),
    }
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.delete(path.id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(),
        Err(e) => store_failure(e),
    }
}

/// Register every route. The app must provide an [`AppState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_statuses)
        .service(api_derive_plan)
        .service(api_add_round)
        .service(api_remove_round)
        .service(api_validate_plan)
        .service(api_plan_phases_csv)
        .service(api_plan_phases)
        .service(api_create_tournament)
        .service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_set_status)
        .service(api_delete_tournament);
}
