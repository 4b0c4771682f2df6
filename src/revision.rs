use crate::config::Config;
use crate::error::RevisionError;
use crate::prompt::{PromptShape, combined_prompt, instruction_input};
use crate::types::{
    ApiErrorResponse, ChatMessage, ChatRequest, ChoicesResponse, CompletionRequest, EditRequest,
};
use reqwest::{Client, Proxy};
use std::time::Duration;

pub const COMPLETION_MODEL: &str = "text-davinci-003";
pub const EDIT_MODEL: &str = "text-davinci-edit-001";
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Request/response shape of a remote model endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Completion,
    Edit,
    Chat,
}

impl ModelKind {
    pub fn from_name(model: &str) -> Result<Self, RevisionError> {
        match model.trim() {
            COMPLETION_MODEL => Ok(ModelKind::Completion),
            EDIT_MODEL => Ok(ModelKind::Edit),
            CHAT_MODEL => Ok(ModelKind::Chat),
            other => Err(RevisionError::UnsupportedModel(other.to_string())),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ModelKind::Completion => "/v1/completions",
            ModelKind::Edit => "/v1/edits",
            ModelKind::Chat => "/v1/chat/completions",
        }
    }

    pub fn prompt_shape(self) -> PromptShape {
        match self {
            ModelKind::Edit => PromptShape::InstructionInput,
            ModelKind::Completion | ModelKind::Chat => PromptShape::Combined,
        }
    }
}

/// Everything needed to ask the remote model for one revision.
#[derive(Debug, Clone)]
pub struct RevisionRequest<'a> {
    pub api_key: &'a str,
    pub title: &'a str,
    pub keywords: &'a str,
    pub section: &'a str,
    pub text: &'a str,
    pub model: &'a str,
}

pub fn build_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().timeout(Duration::from_secs(config.request_timeout_secs));
    if let Some(proxy_url) = &config.proxy_url {
        builder = builder.proxy(Proxy::all(proxy_url.as_str())?);
    }
    builder.build()
}

fn request_body(
    kind: ModelKind,
    request: &RevisionRequest<'_>,
    config: &Config,
) -> Result<serde_json::Value, serde_json::Error> {
    let model = request.model.trim();
    match kind {
        ModelKind::Edit => {
            let (instruction, input) =
                instruction_input(request.text, request.section, request.title, request.keywords);
            serde_json::to_value(EditRequest {
                model,
                input: &input,
                instruction: &instruction,
            })
        }
        ModelKind::Chat => {
            let content =
                combined_prompt(request.text, request.section, request.title, request.keywords);
            serde_json::to_value(ChatRequest {
                model,
                messages: vec![ChatMessage {
                    role: "user",
                    content: &content,
                }],
            })
        }
        ModelKind::Completion => {
            let prompt =
                combined_prompt(request.text, request.section, request.title, request.keywords);
            serde_json::to_value(CompletionRequest {
                model,
                prompt: &prompt,
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            })
        }
    }
}

/// Pulls the revised paragraph out of a successful response body.
pub fn extract_revision(kind: ModelKind, body: &str) -> Result<String, RevisionError> {
    let parsed: ChoicesResponse = serde_json::from_str(body.trim())?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or(RevisionError::EmptyChoices)?;

    match kind {
        ModelKind::Chat => choice
            .message
            .and_then(|m| m.content)
            .ok_or(RevisionError::MissingField("message.content")),
        ModelKind::Completion | ModelKind::Edit => choice
            .text
            .map(|t| t.trim().to_string())
            .ok_or(RevisionError::MissingField("text")),
    }
}

/// Sends one revision request to the model endpoint selected by
/// `request.model`. No retries.
pub async fn revise_paragraph(
    client: &Client,
    config: &Config,
    request: &RevisionRequest<'_>,
) -> Result<String, RevisionError> {
    let kind = ModelKind::from_name(request.model)?;
    let body = request_body(kind, request, config)?;
    let url = format!("{}{}", config.api_base_url.trim_end_matches('/'), kind.path());

    if config.debug {
        log::debug!(
            "Request payload for {url}: {}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    }

    log::info!("Waiting for response from {} ({})", request.model, url);

    let response = client
        .post(&url)
        .bearer_auth(request.api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            log::error!("Failed to reach model endpoint {url}: {e}");
            RevisionError::Http(e)
        })?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorResponse>(&text)
            .map(|e| e.error.message)
            .unwrap_or(text);
        log::error!("Model endpoint returned {status}: {message}");
        return Err(RevisionError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let revised = extract_revision(kind, &text)?;

    log::info!(
        "Got revision ({} chars): \"{}...\"",
        revised.chars().count(),
        revised.chars().take(50).collect::<String>()
    );

    Ok(revised)
}
