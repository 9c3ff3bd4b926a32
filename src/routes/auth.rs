use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::domain::session::Session;
use crate::forms::auth::LoginForm;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::auth::{self as auth_service, INVALID_CREDENTIALS_MESSAGE};

#[get("/login")]
pub async fn show_login(
    session: Option<Session>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if session.is_some() {
        return redirect("/dashboard");
    }

    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let session = match auth_service::login(&server_config.demo_credentials(), form) {
        Ok(session) => session,
        Err(_) => {
            FlashMessage::error(INVALID_CREDENTIALS_MESSAGE).send();
            return redirect("/login");
        }
    };

    let Some(token) = session.token else {
        FlashMessage::error(INVALID_CREDENTIALS_MESSAGE).send();
        return redirect("/login");
    };

    if let Err(err) = Identity::login(&request.extensions(), token.to_string()) {
        error!("Failed to persist session: {err}");
        FlashMessage::error("Não foi possível iniciar a sessão.").send();
        return redirect("/login");
    }

    redirect("/dashboard")
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/login")
}
