use std::fmt;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use postcare_auth::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated patient, inserted by [`require_patient`].
#[derive(Clone, Copy, Debug)]
pub struct AuthPatient(pub Uuid);

/// Authenticated doctor, inserted by [`require_doctor`].
#[derive(Clone, Copy, Debug)]
pub struct AuthDoctor(pub Uuid);

/// The resolved identity, attached to the response for request logging.
#[derive(Clone, Copy, Debug)]
pub struct Subject(pub Identity);

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Identity::Patient(id) => write!(f, "patient:{id}"),
            Identity::Doctor(id) => write!(f, "doctor:{id}"),
        }
    }
}

/// Extract and validate the `Authorization: Bearer <token>` header.
fn authenticate(state: &AppState, req: &Request) -> Result<Identity, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Authorization header missing".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Token missing".to_string()))?;

    Ok(state.keys.validate(token)?)
}

fn tag_subject(mut response: Response, identity: Identity) -> Response {
    response.extensions_mut().insert(Subject(identity));
    response
}

/// Admit only patient tokens. Doctor tokens get `403`.
pub async fn require_patient(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(&state, &req)?;
    let Identity::Patient(id) = identity else {
        return Err(ApiError::Forbidden("patient access required".to_string()));
    };

    req.extensions_mut().insert(AuthPatient(id));
    Ok(tag_subject(next.run(req).await, identity))
}

/// Admit only doctor tokens. Patient tokens get `403`.
pub async fn require_doctor(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(&state, &req)?;
    let Identity::Doctor(id) = identity else {
        return Err(ApiError::Forbidden("doctor access required".to_string()));
    };

    req.extensions_mut().insert(AuthDoctor(id));
    Ok(tag_subject(next.run(req).await, identity))
}
