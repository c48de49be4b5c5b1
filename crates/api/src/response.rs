//! Success envelopes. Every successful body is `{ "data": ... }`.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// The `{ "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// 200 with `data` wrapped in the envelope.
pub fn ok<T: Serialize>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse { data })
}

/// 201 with the newly created row wrapped in the envelope.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<DataResponse<T>>) {
    (StatusCode::CREATED, Json(DataResponse { data }))
}
