use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HelloResponse {
    message: &'static str,
}

pub async fn get() -> (StatusCode, Json<HelloResponse>) {
    (
        StatusCode::OK,
        Json(HelloResponse {
            message: "Hello from Axum + Mongo",
        }),
    )
}
