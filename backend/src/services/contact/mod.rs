//! # Contact Service Module
//!
//! Routes for the public contact form. A submission is validated, handed to
//! the configured [`MailRelay`](crate::mail::MailRelay) and answered with a
//! JSON `{ "message": ... }` body in every case.
//!
//! ## Sub-modules:
//! - `send`: Validates a submission and relays it to the site administrator.

mod send;

use actix_web::error::InternalError;
use actix_web::web::{post, scope, JsonConfig};
use actix_web::{HttpResponse, Scope};
use common::requests::{ContactResponse, CONTACT_FIELDS_REQUIRED};
use log::warn;

/// The base path for the contact endpoint.
const API_PATH: &str = "/api/contact";

/// Contact payloads are four short text fields.
const MAX_PAYLOAD_BYTES: usize = 64 * 1024;

/// Configures and returns the Actix `Scope` for the contact route.
///
/// # Registered Routes:
///
/// *   **`POST /api/contact`**:
///     - **Handler**: `send::process`
///     - **Description**: Expects a JSON object with `name`, `email`, `subject`
///       and `message`. Replies `400` when any of them is blank or the body is
///       not valid JSON, `200` once the message was relayed and `500` when
///       delivery failed.
pub fn configure_routes() -> Scope {
    let json_config = JsonConfig::default()
        .limit(MAX_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            // A body that is not a contact form is a client error, not a failed send.
            warn!("Rejected contact payload: {}", err);
            let response =
                HttpResponse::BadRequest().json(ContactResponse::new(CONTACT_FIELDS_REQUIRED));
            InternalError::from_response(err, response).into()
        });

    scope(API_PATH)
        .app_data(json_config)
        .route("", post().to(send::process))
}
