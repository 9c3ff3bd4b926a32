use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::Session;
use crate::domain::types::NoticeId;
use crate::forms::notices::NoticeListParams;
use crate::repository::http::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::notices as notice_service;

#[get("/licitacoes")]
pub async fn show_notices(
    session: Session,
    params: web::Query<NoticeListParams>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = notice_service::load_notice_list(repo.get_ref(), params.into_inner()).await;

    let mut context = base_context(&flash_messages, Some(&session), "notices");
    context.insert("view", &data.view);
    context.insert("error", &data.error);
    context.insert("params", &data.params);
    context.insert("has_filters", &data.has_filters);
    context.insert("selected_region", &data.selected_region);
    context.insert("page_sizes", &data.page_sizes);
    context.insert("regions", &data.regions);

    render_template(&tera, "notices/index.html", &context)
}

#[get("/licitacao/{notice_id}")]
pub async fn show_notice(
    session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        FlashMessage::error("Licitação não encontrada.").send();
        return redirect("/licitacoes");
    };

    let data = match notice_service::load_notice_detail(repo.get_ref(), notice_id).await {
        Ok(data) => data,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Licitação não encontrada.").send();
            return redirect("/licitacoes");
        }
        Err(_) => {
            FlashMessage::error("Erro ao carregar licitação.").send();
            return redirect("/licitacoes");
        }
    };

    let mut context = base_context(&flash_messages, Some(&session), "notices");
    context.insert("notice", &data.notice);
    context.insert("is_favorite", &data.is_favorite);

    render_template(&tera, "notices/detail.html", &context)
}

#[post("/licitacao/{notice_id}/salvar")]
pub async fn save_notice(
    _session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    match notice_service::save_notice(repo.get_ref(), notice_id).await {
        Ok(message) => FlashMessage::success(message).send(),
        Err(_) => FlashMessage::error("Erro ao salvar licitação.").send(),
    }

    redirect(&format!("/licitacao/{notice_id}"))
}
