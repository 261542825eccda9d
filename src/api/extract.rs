use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, Form, FromRequest, Request},
    http::header,
};
use crate::db::models::user::UserPayload;
use crate::error::AppError;

/// Axum extractor for user bodies. Accepts JSON or a URL-encoded form;
/// an empty body yields an empty payload so validation reports the missing field.
pub struct UserBody(pub UserPayload);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Bad form contents are validation errors; transport problems keep their status.
fn form_rejection(rejection: FormRejection) -> AppError {
    match rejection {
        FormRejection::FailedToDeserializeForm(_) | FormRejection::FailedToDeserializeFormBody(_) => {
            AppError::Validation(rejection.body_text())
        }
        other => AppError::Rejected(other.status(), other.body_text()),
    }
}

impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(payload) = Form::<UserPayload>::from_request(req, state)
                .await
                .map_err(form_rejection)?;
            return Ok(UserBody(payload));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(UserBody(UserPayload::default()));
        }

        let payload = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Validation(format!("Malformed JSON body: {}", e)))?;
        Ok(UserBody(payload))
    }
}
