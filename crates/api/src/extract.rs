//! Request body extractors.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use ssp_core::contact::{ContactSubmission, MSG_INVALID_DATA};

use crate::error::AppError;

/// A contact form body, sent either as JSON or as a URL-encoded HTML form.
///
/// Bodies that cannot be decoded are rejected with a 400, never the
/// framework's default 415/422. A request without a `Content-Type` carries
/// no fields and is left to fail the required-field check.
#[derive(Debug)]
pub struct ContactPayload(pub ContactSubmission);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Some(content_type) = req.headers().get(CONTENT_TYPE) else {
            return Ok(Self(ContactSubmission::default()));
        };
        let is_form = content_type
            .to_str()
            .is_ok_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let submission = if is_form {
            Form::<ContactSubmission>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| {
                    tracing::debug!(error = %rejection, "Rejected contact form body");
                    AppError::BadRequest(MSG_INVALID_DATA.to_string())
                })?
        } else {
            Json::<ContactSubmission>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| {
                    tracing::debug!(error = %rejection, "Rejected contact JSON body");
                    AppError::BadRequest(MSG_INVALID_DATA.to_string())
                })?
        };

        Ok(Self(submission))
    }
}
