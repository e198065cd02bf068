mod config;
mod mail;
mod services;

use crate::config::AppConfig;
use crate::mail::smtp::SmtpRelay;
use crate::mail::MailRelay;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::sync::Arc;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the compiled frontend. Unknown paths get `index.html` so the
/// client-side router can resolve `/plants/<id>`, `/dashboard` and friends.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let relay = SmtpRelay::new(&config.mail).map_err(|e| {
        error!("Could not configure mail relay: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let relay: web::Data<dyn MailRelay> = web::Data::from(Arc::new(relay) as Arc<dyn MailRelay>);

    info!(
        "Server running at {} (contact mail via {})",
        config.url(),
        config.mail.smtp_host
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(relay.clone())
            .service(services::contact::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
