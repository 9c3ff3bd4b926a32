#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::middleware::RedirectUnauthorized;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::http::HttpRepository;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_notices;
#[cfg(feature = "server")]
use crate::routes::auth::{login, logout, show_login};
#[cfg(feature = "server")]
use crate::routes::favorites::{remove_favorite, show_favorites};
#[cfg(feature = "server")]
use crate::routes::main::{show_dashboard, show_index};
#[cfg(feature = "server")]
use crate::routes::notices::{save_notice, show_notice, show_notices};
#[cfg(feature = "server")]
use crate::routes::notifications::{
    mark_notification_read, remove_notification, show_notifications,
};
#[cfg(feature = "server")]
use crate::routes::tracking::{
    add_task, complete_task, remove_task, show_tracking, start_tracking, update_status,
};

pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
pub mod view;

/// Minimum secret length accepted by the cookie signing key.
#[cfg(feature = "server")]
const MIN_SECRET_LEN: usize = 64;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let timeout = server_config.api_timeout_secs.map(Duration::from_secs);
    let repo = HttpRepository::new(&server_config.api_url, timeout)
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;

    if server_config.secret.len() < MIN_SECRET_LEN {
        return Err(std::io::Error::other(format!(
            "secret must be at least {MIN_SECRET_LEN} bytes long"
        )));
    }

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Listening on {}:{} with API at {}",
        bind_address.0,
        bind_address.1,
        repo.base_url()
    );

    HttpServer::new(move || {
        let cookie_domain = (!server_config.domain.is_empty())
            .then(|| format!(".{}", server_config.domain));

        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(cookie_domain)
                    .build(),
            )
            .wrap(actix_web::middleware::Compress::default())
            .wrap(actix_web::middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(login)
            .service(logout)
            .service(web::scope("/api").service(api_v1_notices))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_dashboard)
                    .service(show_notices)
                    .service(show_notice)
                    .service(save_notice)
                    .service(show_favorites)
                    .service(remove_favorite)
                    .service(show_tracking)
                    .service(start_tracking)
                    .service(update_status)
                    .service(add_task)
                    .service(complete_task)
                    .service(remove_task)
                    .service(show_notifications)
                    .service(mark_notification_read)
                    .service(remove_notification),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
