use crate::mail::{MailRelay, RelayError};
use actix_web::{web, HttpResponse, Responder};
use common::requests::{
    ContactError, ContactRequest, ContactResponse, CONTACT_FIELDS_REQUIRED, CONTACT_SEND_FAILED,
    CONTACT_SENT,
};
use log::{error, warn};
use thiserror::Error;

#[derive(Debug, Error)]
enum SendError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

pub async fn process(
    relay: web::Data<dyn MailRelay>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    match send_contact(relay.get_ref(), &payload).await {
        Ok(()) => HttpResponse::Ok().json(ContactResponse::new(CONTACT_SENT)),
        Err(SendError::Invalid(ContactError::MissingField(field))) => {
            warn!("Contact submission missing {}", field);
            HttpResponse::BadRequest().json(ContactResponse::new(CONTACT_FIELDS_REQUIRED))
        }
        Err(SendError::Relay(e)) => {
            error!("Email send error: {}", e);
            HttpResponse::InternalServerError().json(ContactResponse::new(CONTACT_SEND_FAILED))
        }
    }
}

async fn send_contact(relay: &dyn MailRelay, request: &ContactRequest) -> Result<(), SendError> {
    request.validate()?;
    relay.send(request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use futures_util::future::BoxFuture;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<ContactRequest>>,
        fail: bool,
    }

    impl MailRelay for RecordingRelay {
        fn send<'a>(
            &'a self,
            request: &'a ContactRequest,
        ) -> BoxFuture<'a, Result<(), RelayError>> {
            Box::pin(async move {
                if self.fail {
                    let err = "not-an-address".parse::<lettre::Address>().unwrap_err();
                    return Err(RelayError::Address(err));
                }
                self.sent.lock().unwrap().push(request.clone());
                Ok(())
            })
        }
    }

    async fn post(relay: Arc<RecordingRelay>, body: &str) -> (StatusCode, Value) {
        let data: web::Data<dyn MailRelay> = web::Data::from(relay as Arc<dyn MailRelay>);
        let app = test::init_service(App::new().app_data(data).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("content-type", "application/json"))
            .set_payload(body.to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    const VALID: &str =
        r#"{"name":"Ivy","email":"ivy@example.com","subject":"Hi","message":"Hello there"}"#;

    #[actix_web::test]
    async fn valid_submission_is_relayed() {
        let relay = Arc::new(RecordingRelay::default());
        let (status, body) = post(relay.clone(), VALID).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Email sent successfully" }));
        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Hi");
    }

    #[actix_web::test]
    async fn missing_field_is_rejected_without_sending() {
        let relay = Arc::new(RecordingRelay::default());
        let (status, body) = post(
            relay.clone(),
            r#"{"name":"Ivy","email":"ivy@example.com","subject":"","message":"Hello"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "All fields are required" }));
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let relay = Arc::new(RecordingRelay::default());
        let (status, body) = post(relay.clone(), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "All fields are required" }));
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn relay_failure_is_reported() {
        let relay = Arc::new(RecordingRelay {
            fail: true,
            ..Default::default()
        });
        let (status, body) = post(relay, VALID).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Failed to send email" }));
    }
}
