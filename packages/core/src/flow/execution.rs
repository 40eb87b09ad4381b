use std::time::{SystemTime, UNIX_EPOCH};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use weft_types::Result;

use super::node::NodeLogic;

pub mod context;

pub use context::ExecutionContext;

#[derive(
    Serialize, Deserialize, JsonSchema, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord,
)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            4 => LogLevel::Fatal,
            _ => LogLevel::Debug,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
            LogLevel::Fatal => 4,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct LogMessage {
    pub message: String,
    pub log_level: LogLevel,
    pub node_id: Option<String>,
    pub timestamp_ms: u64,
}

impl LogMessage {
    pub fn new(message: &str, log_level: LogLevel) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u64)
            .unwrap_or_default();

        Self {
            message: message.to_string(),
            log_level,
            node_id: None,
            timestamp_ms,
        }
    }
}

/// Drive a single node end to end: snapshot inputs at debug level, run the
/// logic, log the failure if it returns one.
pub async fn run_node(logic: &dyn NodeLogic, context: &mut ExecutionContext) -> Result<()> {
    if context.log_level <= LogLevel::Debug {
        let snapshot = context.debug_snapshot().await;
        context.log_message(&format!("Pin values: {snapshot}"), LogLevel::Debug);
    }

    let result = logic.run(context).await;

    if let Err(error) = &result {
        context.log_message(&format!("Node failed: {error}"), LogLevel::Error);
    }

    result
}
