use serde::{Deserialize, Serialize};

/// Form posted by the page when the user asks for a revision.
#[derive(Deserialize, Clone, Debug)]
pub struct SubmitForm {
    #[serde(rename = "api-key", default)]
    pub api_key: String,
    #[serde(rename = "input-text", default)]
    pub input_text: String,
    #[serde(rename = "title-text", default)]
    pub title_text: String,
    #[serde(rename = "keywords-text", default)]
    pub keywords_text: String,
    #[serde(rename = "section-text", default)]
    pub section_text: String,
    #[serde(rename = "model-text", default)]
    pub model_text: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DownloadForm {
    #[serde(rename = "input-text", default)]
    pub input_text: String,
    #[serde(rename = "output-text", default)]
    pub output_text: String,
    #[serde(rename = "model-text", default)]
    pub model_text: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct SubmitResponse {
    pub status: String,
    pub revised: String,
}

impl SubmitResponse {
    pub fn success(revised: impl Into<String>) -> Self {
        Self {
            status: "Success".into(),
            revised: revised.into(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Serialize, Debug)]
pub struct EditRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub instruction: &'a str,
}

#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize, Debug)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Response body shared by the completion, edit and chat endpoints.
#[derive(Deserialize, Debug)]
pub struct ChoicesResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub text: Option<String>,
    pub message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub message: String,
}
