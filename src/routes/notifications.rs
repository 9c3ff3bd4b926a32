use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::Session;
use crate::domain::types::NotificationId;
use crate::repository::http::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::notifications as notification_service;

#[get("/notificacoes")]
pub async fn show_notifications(
    session: Session,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, Some(&session), "notifications");

    match notification_service::load_notifications(repo.get_ref()).await {
        Ok(data) => {
            context.insert("notifications", &data.notifications);
            context.insert("unread", &data.unread);
        }
        Err(_) => context.insert("error", "Erro ao carregar notificações."),
    }

    render_template(&tera, "notifications/index.html", &context)
}

#[post("/notificacoes/{notification_id}/lida")]
pub async fn mark_notification_read(
    _session: Session,
    notification_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let Ok(id) = NotificationId::new(notification_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    if notification_service::mark_read(repo.get_ref(), id).await.is_err() {
        FlashMessage::error("Erro ao marcar notificação como lida.").send();
    }

    redirect("/notificacoes")
}

#[post("/notificacoes/{notification_id}/remover")]
pub async fn remove_notification(
    _session: Session,
    notification_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let Ok(id) = NotificationId::new(notification_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match notification_service::remove_notification(repo.get_ref(), id).await {
        Ok(()) => FlashMessage::success("Notificação removida.").send(),
        Err(_) => FlashMessage::error("Erro ao remover notificação.").send(),
    }

    redirect("/notificacoes")
}
