use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::session::Session;
use crate::repository::http::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/")]
pub async fn show_index(_session: Session) -> impl Responder {
    redirect("/dashboard")
}

#[get("/dashboard")]
pub async fn show_dashboard(
    session: Session,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = dashboard_service::load_dashboard(repo.get_ref()).await;

    let mut context = base_context(&flash_messages, Some(&session), "dashboard");
    context.insert("summary", &data.summary);
    context.insert("summary_error", &data.summary_error);
    context.insert("recent", &data.recent);
    context.insert("recent_error", &data.recent_error);

    render_template(&tera, "main/dashboard.html", &context)
}
