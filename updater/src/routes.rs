use crate::config::Repository;
use crate::error::Error;
use crate::manifest::{self, Manifest};
use crate::Service;
use log::{debug, error};
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use rocket::{get, Request, State};
use serde::Serialize;

#[get("/")]
pub fn index() -> &'static str {
    "updater: GET /updater/<current_version>"
}

/// Always describes the latest release; `current_version` does not influence the answer.
#[get("/updater/<current_version>")]
pub async fn updater(current_version: &str, service: &State<Service>) -> Result<Json<Manifest>, Failure> {
    debug!("Update check from version {}", current_version);

    match service.inner() {
        Service::Ready { config, backend } => {
            match manifest::assemble(&**backend, config.release_order).await {
                Ok(manifest) => Ok(Json(manifest)),
                Err(error) => {
                    log_failure(Some(&config.repository), &error);
                    Err(Failure {
                        error,
                        detailed: config.detailed_errors,
                    })
                }
            }
        }
        Service::Misconfigured {
            error,
            detailed_errors,
        } => {
            let error = Error::from(error.kind().clone());
            log_failure(None, &error);
            Err(Failure {
                error,
                detailed: *detailed_errors,
            })
        }
    }
}

fn log_failure(repository: Option<&Repository>, error: &Error) {
    let repository = repository
        .map(|r| r.to_string())
        .unwrap_or_else(|| "<unconfigured repository>".to_string());
    let platform = error
        .kind()
        .platform()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = error
        .upstream_status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    error!(
        "Cannot build manifest for {}: {} (platform: {}, upstream status: {})",
        repository,
        error.chain(),
        platform,
        status
    );
}

/// A failed manifest request.
///
/// Unless `detailed` is set every failure collapses into an empty 500, which is all
/// updater clients look at.
#[derive(Debug)]
pub struct Failure {
    pub error: Error,
    pub detailed: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    upstream_status: Option<u16>,
}

impl<'r> Responder<'r, 'static> for Failure {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        if !self.detailed {
            return Response::build().status(Status::InternalServerError).ok();
        }

        let kind = self.error.kind();
        let body = ErrorBody {
            error: kind.code(),
            message: self.error.to_string(),
            upstream_status: self.error.upstream_status(),
        };

        (kind.status(), Json(body)).respond_to(request)
    }
}
