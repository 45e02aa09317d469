//! Status line shown next to the date input.
//!
//! A fixed precedence over the host's flags and messages; the first condition
//! that holds wins and nothing is remembered between calls.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportOutcome {
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
}

/// Message left behind by the last finished export.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{message}")]
pub struct LastExport {
    pub message: String,
    pub outcome: ExportOutcome,
}

/// Host state consumed by [`resolve_status`]. Field names follow the host's flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusInputs {
    pub warming_up: bool,
    pub query_loading: bool,
    pub query_cancelling: bool,
    pub is_exporting: bool,
    pub status_message: Option<String>,
    pub export_status_message: Option<String>,
    pub last_export_message: Option<LastExport>,
    /// Seconds
    pub execution_time: Option<f64>,
    /// Seconds
    pub warming_up_time: Option<f64>,
}

/// The single line to show.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum StatusLine {
    #[display(fmt = "Warming up...")]
    WarmingUp,
    #[display(fmt = "Running query...")]
    QueryRunning,
    #[display(fmt = "Cancelling query...")]
    QueryCancelling,
    #[display(fmt = "{_0}")]
    Exporting(String),
    #[display(fmt = "{_0}")]
    LastExport(LastExport),
    #[display(fmt = "{_0}")]
    Message(String),
    #[display(fmt = "Executed in {_0:.2}s")]
    ExecutionTime(f64),
    #[display(fmt = "Warmed up in {_0:.2}s")]
    WarmingUpTime(f64),
}

impl StatusLine {
    /// Success/error tag for lines that carry one.
    pub const fn outcome(&self) -> Option<ExportOutcome> {
        match self {
            Self::LastExport(last) => Some(last.outcome),
            _ => None,
        }
    }
}

fn non_empty(message: Option<&String>) -> Option<&str> {
    message.map(String::as_str).filter(|m| !m.trim().is_empty())
}

/// Picks the status line by precedence, highest first.
pub fn resolve_status(inputs: &StatusInputs) -> Option<StatusLine> {
    if inputs.warming_up {
        return Some(StatusLine::WarmingUp);
    }
    if inputs.query_loading {
        return Some(if inputs.query_cancelling {
            StatusLine::QueryCancelling
        } else {
            StatusLine::QueryRunning
        });
    }
    if inputs.is_exporting {
        let message = non_empty(inputs.export_status_message.as_ref()).unwrap_or("Exporting...");
        return Some(StatusLine::Exporting(message.to_owned()));
    }
    if let Some(last) = inputs
        .last_export_message
        .as_ref()
        .filter(|last| !last.message.trim().is_empty())
    {
        return Some(StatusLine::LastExport(last.clone()));
    }
    if let Some(message) = non_empty(inputs.status_message.as_ref()) {
        return Some(StatusLine::Message(message.to_owned()));
    }
    if let Some(seconds) = inputs.execution_time {
        return Some(StatusLine::ExecutionTime(seconds));
    }
    inputs.warming_up_time.map(StatusLine::WarmingUpTime)
}
