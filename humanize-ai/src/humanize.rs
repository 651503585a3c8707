//! Outbound requests for the AI service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AiRequestError;

/// How far the rewrite may stray from the source text's style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingVariety {
    #[default]
    Default,
    Varied,
    Concise,
}

impl WritingVariety {
    pub const ALL: [WritingVariety; 3] = [
        WritingVariety::Default,
        WritingVariety::Varied,
        WritingVariety::Concise,
    ];

    /// Button label for the style picker.
    pub fn label(&self) -> &'static str {
        match self {
            WritingVariety::Default => "Default",
            WritingVariety::Varied => "More Varied",
            WritingVariety::Concise => "More Concise",
        }
    }
}

fn non_blank(text: impl Into<String>) -> Result<String, AiRequestError> {
    let text = text.into();
    if text.trim().is_empty() {
        return Err(AiRequestError::EmptyText);
    }
    Ok(text)
}

/// Ask the service to rewrite `text` so it reads as human-written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanizeRequestV1 {
    pub request_id: Uuid,
    pub text: String,
    pub variety: WritingVariety,
}

impl HumanizeRequestV1 {
    pub fn new(text: impl Into<String>, variety: WritingVariety) -> Result<Self, AiRequestError> {
        let text = non_blank(text)?;
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, ?variety, chars = text.len(), "built humanize request");
        Ok(Self {
            request_id,
            text,
            variety,
        })
    }
}

/// Ask the service to score `text` for likely AI authorship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectRequestV1 {
    pub request_id: Uuid,
    pub text: String,
}

impl DetectRequestV1 {
    pub fn new(text: impl Into<String>) -> Result<Self, AiRequestError> {
        let text = non_blank(text)?;
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, chars = text.len(), "built detect request");
        Ok(Self { request_id, text })
    }
}
