use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::qr_payload::use_cases::resolve::{
    ResolvePayloadParams, ResolvePayloadUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::dto::{ScanRequest, ScanResponse};
use crate::api::tags::ApiTags;

pub struct ScanApi {
    resolve_use_case: Arc<dyn ResolvePayloadUseCase>,
}

impl ScanApi {
    pub fn new(resolve_use_case: Arc<dyn ResolvePayloadUseCase>) -> Self {
        Self { resolve_use_case }
    }
}

#[OpenApi]
impl ScanApi {
    /// Resolve a scanned label
    ///
    /// Decodes the payload read from a label and looks up the item it names.
    /// A payload that cannot be read is reported apart from an unknown item.
    #[oai(path = "/scan", method = "post", tag = "ApiTags::Scan")]
    async fn scan(&self, body: Json<ScanRequest>) -> ScanLabelResponse {
        let params = ResolvePayloadParams {
            payload: body.0.payload,
        };

        match self.resolve_use_case.execute(params).await {
            Ok(resolved) => ScanLabelResponse::Ok(Json(resolved.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ScanLabelResponse::NotFound(json),
                    422 => ScanLabelResponse::UnprocessableEntity(json),
                    _ => ScanLabelResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanLabelResponse {
    #[oai(status = 200)]
    Ok(Json<ScanResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
