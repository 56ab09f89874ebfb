use crate::constant::HEALTH_MESSAGE;
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    message: &'static str,
}

/// Always answers `ok`: it does not depend on Telegram being reachable.
#[tracing::instrument(name = "/api/health: Health check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody {
        status: "ok",
        message: HEALTH_MESSAGE,
    })
}
