// This defines the JSON formats we exchange with the AI service
// Requests are built and checked here, responses are parsed and validated
// Nothing in this crate talks to the network

pub mod detection;
pub mod humanize;

pub use detection::{
    bar_fraction, parse_detection, AiDetectionResultV1, AnalysisMetricV1, DetectionAnalysisV1,
    MetricKind, Verdict,
};
pub use humanize::{DetectRequestV1, HumanizeRequestV1, WritingVariety};

use thiserror::Error;

/// Errors raised while building a request for the AI service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiRequestError {
    #[error("text to send is empty")]
    EmptyText,
}

/// Errors raised while reading a response from the AI service.
#[derive(Debug, Error)]
pub enum AiResponseError {
    #[error("malformed response json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("score out of range for {field}: {score}")]
    ScoreOutOfRange { field: &'static str, score: f32 },
}
