//! The JSON run-report artifact, written when the operator asks for one.

use crate::outcome::{FileOutcome, RunSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub schema: String,
    pub report_id: Uuid,
    pub tool: ToolInfo,
    pub run: RunInfo,
    pub summary: RunSummary,

    #[serde(default)]
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::MOJIFIX_REPORT_V1.to_string(),
            report_id: Uuid::new_v4(),
            tool,
            run: RunInfo {
                started_at: Some(Utc::now()),
                ended_at: None,
            },
            summary: RunSummary::default(),
            outcomes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}
