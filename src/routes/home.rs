use crate::constant::SCHOOL_NAME;
use actix_web::HttpResponse;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct ServiceDescription {
    message: String,
    version: &'static str,
    endpoints: BTreeMap<&'static str, &'static str>,
}

#[tracing::instrument(name = "/: Service description")]
pub async fn home() -> HttpResponse {
    let endpoints = BTreeMap::from([
        ("POST /api/send-form", "Отправка данных формы"),
        ("GET /api/health", "Проверка работоспособности"),
    ]);
    HttpResponse::Ok().json(ServiceDescription {
        message: format!("{} - API сервер", SCHOOL_NAME),
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
