pub mod config;
pub mod diff;
pub mod error;
pub mod export;
pub mod handlers;
pub mod host;
pub mod page;
pub mod prompt;
pub mod revision;
pub mod state;
pub mod types;

pub use crate::config::Config;
pub use crate::error::{AppError, ExportError, RevisionError};
pub use crate::export::{DocxExporter, TrackedChangesExporter};
pub use crate::handlers::*;
pub use crate::prompt::{Prompt, PromptShape, Section, build_prompt};
pub use crate::revision::{ModelKind, RevisionRequest, revise_paragraph};
pub use crate::state::AppState;
pub use crate::types::*;

pub use actix_web;
pub use log;
pub use reqwest;
