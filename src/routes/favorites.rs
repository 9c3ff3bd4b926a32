use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::Session;
use crate::domain::types::NoticeId;
use crate::repository::http::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::favorites as favorite_service;

#[get("/interesses")]
pub async fn show_favorites(
    session: Session,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, Some(&session), "favorites");

    match favorite_service::load_favorites(repo.get_ref()).await {
        Ok(data) => context.insert("favorites", &data.favorites),
        Err(_) => context.insert("error", "Erro ao carregar interesses."),
    }

    render_template(&tera, "favorites/index.html", &context)
}

#[post("/interesses/{notice_id}/remover")]
pub async fn remove_favorite(
    _session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match favorite_service::remove_favorite(repo.get_ref(), notice_id).await {
        Ok(()) => FlashMessage::success("Interesse removido.").send(),
        Err(_) => FlashMessage::error("Erro ao remover interesse.").send(),
    }

    redirect("/interesses")
}
