use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::Session;
use crate::domain::types::{NoticeId, TaskId};
use crate::forms::tracking::{AddTaskForm, StatusForm};
use crate::repository::http::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::tracking as tracking_service;

const INACTIVE_MESSAGE: &str =
    "Para usar o checklist, primeiro ative o acompanhamento desta licitação.";

fn tracking_url(notice_id: NoticeId) -> String {
    format!("/acompanhamento/{notice_id}")
}

/// Flashes the outcome of a tracking action.
fn report(result: Result<(), ServiceError>, success: &str, failure: &str) {
    match result {
        Ok(()) => FlashMessage::success(success).send(),
        Err(ServiceError::TrackingInactive) => FlashMessage::warning(INACTIVE_MESSAGE).send(),
        Err(ServiceError::Form(_)) => {
            FlashMessage::error("Dados do formulário inválidos.").send()
        }
        Err(_) => FlashMessage::error(failure).send(),
    }
}

#[get("/acompanhamento/{notice_id}")]
pub async fn show_tracking(
    session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        FlashMessage::error("Licitação não encontrada.").send();
        return redirect("/interesses");
    };

    let data = match tracking_service::load_tracking(repo.get_ref(), notice_id).await {
        Ok(data) => data,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Licitação não encontrada.").send();
            return redirect("/interesses");
        }
        Err(_) => {
            FlashMessage::error("Erro ao carregar acompanhamento.").send();
            return redirect("/interesses");
        }
    };

    let mut context = base_context(&flash_messages, Some(&session), "favorites");
    context.insert("notice", &data.notice);
    context.insert("active", &data.active);
    context.insert("status", &data.status);
    context.insert("tasks", &data.tasks);
    context.insert("progress", &data.progress);
    context.insert("statuses", &data.statuses);
    context.insert("load_error", &data.load_error);

    render_template(&tera, "tracking/index.html", &context)
}

#[post("/acompanhamento/{notice_id}/iniciar")]
pub async fn start_tracking(
    _session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    report(
        tracking_service::start_tracking(repo.get_ref(), notice_id).await,
        "Acompanhamento iniciado com sucesso!",
        "Erro ao iniciar acompanhamento.",
    );

    redirect(&tracking_url(notice_id))
}

#[post("/acompanhamento/{notice_id}/status")]
pub async fn update_status(
    _session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<StatusForm>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    let result = tracking_service::update_status(repo.get_ref(), notice_id, form)
        .await
        .map(|_| ());
    report(result, "Status atualizado.", "Erro ao atualizar status.");

    redirect(&tracking_url(notice_id))
}

#[post("/acompanhamento/{notice_id}/tarefas")]
pub async fn add_task(
    _session: Session,
    notice_id: web::Path<i64>,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<AddTaskForm>,
) -> impl Responder {
    let Ok(notice_id) = NoticeId::new(notice_id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    report(
        tracking_service::add_task(repo.get_ref(), notice_id, form).await,
        "Tarefa adicionada.",
        "Erro ao adicionar tarefa.",
    );

    redirect(&tracking_url(notice_id))
}

#[post("/acompanhamento/{notice_id}/tarefas/{task_id}/concluir")]
pub async fn complete_task(
    _session: Session,
    path: web::Path<(i64, i64)>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let (notice_id, task_id) = path.into_inner();
    let (Ok(notice_id), Ok(task_id)) = (NoticeId::new(notice_id), TaskId::new(task_id)) else {
        return HttpResponse::NotFound().finish();
    };

    report(
        tracking_service::complete_task(repo.get_ref(), notice_id, task_id).await,
        "Tarefa concluída.",
        "Erro ao concluir tarefa.",
    );

    redirect(&tracking_url(notice_id))
}

#[post("/acompanhamento/{notice_id}/tarefas/{task_id}/remover")]
pub async fn remove_task(
    _session: Session,
    path: web::Path<(i64, i64)>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let (notice_id, task_id) = path.into_inner();
    let (Ok(notice_id), Ok(task_id)) = (NoticeId::new(notice_id), TaskId::new(task_id)) else {
        return HttpResponse::NotFound().finish();
    };

    report(
        tracking_service::remove_task(repo.get_ref(), notice_id, task_id).await,
        "Tarefa removida.",
        "Erro ao remover tarefa.",
    );

    redirect(&tracking_url(notice_id))
}
