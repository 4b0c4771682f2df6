use crate::error::AppError;
use crate::export::DOCX_MIME;
use crate::host::{hostname, load_api_key, local_ip};
use crate::page::{PageContext, render_index};
use crate::revision::{RevisionRequest, revise_paragraph};
use crate::state::AppState;
use crate::types::{DownloadForm, SubmitForm, SubmitResponse};
use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use uuid::Uuid;

pub const EMPTY_INPUT_ADVISORY: &str = "Please input the paragraph for revision in the left.";
pub const BAD_KEY_ADVISORY: &str = "Please make sure the OpenAI API key is correct.";
pub const API_KEY_PREFIX: &str = "sk-";

pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let key_file = state.config.api_key_file.clone();
    // UDP route lookup, mDNS fallback and key file read all block.
    let (host, ip, api_key) = web::block(move || {
        let host = hostname();
        let ip = local_ip(&host).to_string();
        let api_key = load_api_key(key_file.as_deref());
        (host, ip, api_key)
    })
    .await
    .map_err(|e| AppError::Blocking(e.to_string()))?;

    let html = render_index(&PageContext {
        hostname: &host,
        local_ip: &ip,
        port: state.config.port,
        api_key: &api_key,
    });

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Local checks that turn into an advisory instead of a remote call.
pub fn validate_submission(form: &SubmitForm) -> Option<&'static str> {
    if form.input_text.is_empty() {
        Some(EMPTY_INPUT_ADVISORY)
    } else if !form.api_key.starts_with(API_KEY_PREFIX) {
        Some(BAD_KEY_ADVISORY)
    } else {
        None
    }
}

pub async fn submit(
    state: web::Data<AppState>,
    form: web::Form<SubmitForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    if let Some(advisory) = validate_submission(&form) {
        log::info!("Submission rejected locally: {advisory}");
        return Ok(HttpResponse::Ok().json(SubmitResponse::success(advisory)));
    }

    let section = form.section_text.to_lowercase();
    let request = RevisionRequest {
        api_key: &form.api_key,
        title: &form.title_text,
        keywords: &form.keywords_text,
        section: &section,
        text: &form.input_text,
        model: &form.model_text,
    };

    let revised = revise_paragraph(&state.client, &state.config, &request).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .json(SubmitResponse::success(revised)))
}

pub fn export_file_name() -> String {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("manurev.{stamp}-{}.docx", &suffix[..8])
}

async fn export_document(
    state: web::Data<AppState>,
    form: DownloadForm,
) -> Result<HttpResponse, AppError> {
    let file_name = export_file_name();
    let out_path = state.config.tmp_dir.join(&file_name);
    log::info!("Saving revised docx {}", out_path.display());

    let exporter = state.exporter.clone();
    let bytes = web::block(move || {
        exporter.export(&form.input_text, &form.output_text, &form.model_text, &out_path)?;
        Ok::<_, crate::error::ExportError>(std::fs::read(&out_path)?)
    })
    .await
    .map_err(|e| AppError::Blocking(e.to_string()))??;

    Ok(HttpResponse::Ok()
        .content_type(DOCX_MIME)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(bytes))
}

pub async fn download_form(
    state: web::Data<AppState>,
    form: web::Form<DownloadForm>,
) -> Result<HttpResponse, AppError> {
    export_document(state, form.into_inner()).await
}

pub async fn download_query(
    state: web::Data<AppState>,
    query: web::Query<DownloadForm>,
) -> Result<HttpResponse, AppError> {
    export_document(state, query.into_inner()).await
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/submit-data").route(web::post().to(submit)))
        .service(
            web::resource("/download-file")
                .route(web::post().to(download_form))
                .route(web::get().to(download_query)),
        )
        .service(web::resource("/health").route(web::get().to(health)));
}
