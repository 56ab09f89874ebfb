use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SuccessBody<'a> {
    success: bool,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct FailureBody<'a> {
    success: bool,
    error: &'a str,
}

/// `200 OK` with `{"success": true, "message": ...}`.
pub fn success_to(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(SuccessBody {
        success: true,
        message,
    })
}

/// `{"success": false, "error": ...}` with the given status.
pub fn failure_to(status: StatusCode, error: &str) -> HttpResponse {
    HttpResponse::build(status).json(FailureBody {
        success: false,
        error,
    })
}
