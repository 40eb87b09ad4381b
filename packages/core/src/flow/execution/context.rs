use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use serde::de::DeserializeOwned;
use weft_types::{Result, Value, anyhow, create_id, json, sync::Mutex};

use super::{LogLevel, LogMessage};
use crate::flow::{node::Node, pin::Pin, variable::VariableType};

/// Execution state for a single node invocation.
///
/// Inputs are seeded with [`ExecutionContext::set_pin_value`] before the node
/// runs; the node reads them with [`ExecutionContext::evaluate_pin`], writes
/// outputs back, and signals control flow through its execution pins.
#[derive(Clone)]
pub struct ExecutionContext {
    pub id: String,
    pub log_level: LogLevel,
    node: Node,
    values: Arc<Mutex<AHashMap<String, Value>>>,
    active_exec: Arc<Mutex<AHashSet<String>>>,
    logs: Vec<LogMessage>,
}

impl ExecutionContext {
    pub fn new(node: &Node) -> Self {
        Self {
            id: create_id(),
            log_level: LogLevel::Debug,
            node: node.clone(),
            values: Arc::new(Mutex::new(AHashMap::new())),
            active_exec: Arc::new(Mutex::new(AHashSet::new())),
            logs: Vec::new(),
        }
    }

    pub fn with_log_level(node: &Node, log_level: LogLevel) -> Self {
        let mut context = Self::new(node);
        context.log_level = log_level;
        context
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    fn get_pin(&self, name: &str) -> Result<&Pin> {
        self.node.get_pin(name).ok_or_else(|| {
            anyhow!("Pin '{}' not found on node '{}'", name, self.node.id)
        })
    }

    pub async fn set_pin_value(&mut self, pin: &str, value: Value) -> Result<()> {
        let pin = self.get_pin(pin)?;
        if pin.data_type == VariableType::Execution {
            return Err(anyhow!(
                "Pin '{}' is an execution pin, use activate_exec_pin",
                pin.name
            ));
        }

        let name = pin.name.clone();
        self.values.lock().await.insert(name, value);
        Ok(())
    }

    /// Resolve a pin to its value, falling back to the pin's default.
    pub async fn evaluate_pin<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let pin = self.get_pin(name)?;
        if pin.data_type == VariableType::Execution {
            return Err(anyhow!("Pin '{}' carries execution flow, not data", name));
        }

        let value = match self.values.lock().await.get(name) {
            Some(value) => value.clone(),
            None => pin
                .default_value
                .clone()
                .ok_or_else(|| anyhow!("Pin '{}' has no value or default value", name))?,
        };

        json::from_value(value)
            .map_err(|error| anyhow!("Failed to deserialize pin '{}': {}", name, error))
    }

    pub async fn get_pin_value(&self, name: &str) -> Option<Value> {
        self.values.lock().await.get(name).cloned()
    }

    pub async fn activate_exec_pin(&self, pin: &str) -> Result<()> {
        let pin = self.exec_pin(pin)?;
        self.active_exec.lock().await.insert(pin.name.clone());
        Ok(())
    }

    pub async fn deactivate_exec_pin(&self, pin: &str) -> Result<()> {
        let pin = self.exec_pin(pin)?;
        self.active_exec.lock().await.remove(&pin.name);
        Ok(())
    }

    pub async fn is_exec_pin_active(&self, pin: &str) -> Result<bool> {
        let pin = self.exec_pin(pin)?;
        Ok(self.active_exec.lock().await.contains(&pin.name))
    }

    fn exec_pin(&self, name: &str) -> Result<&Pin> {
        let pin = self.get_pin(name)?;
        if pin.data_type != VariableType::Execution {
            return Err(anyhow!("Pin '{}' is not an execution pin", name));
        }
        Ok(pin)
    }

    pub fn log_message(&mut self, message: &str, log_level: LogLevel) {
        if log_level < self.log_level {
            return;
        }

        match log_level {
            LogLevel::Debug => tracing::debug!(node_id = %self.node.id, "{message}"),
            LogLevel::Info => tracing::info!(node_id = %self.node.id, "{message}"),
            LogLevel::Warn => tracing::warn!(node_id = %self.node.id, "{message}"),
            LogLevel::Error | LogLevel::Fatal => {
                tracing::error!(node_id = %self.node.id, "{message}")
            }
        }

        let mut log = LogMessage::new(message, log_level);
        log.node_id = Some(self.node.id.clone());
        self.logs.push(log);
    }

    pub fn logs(&self) -> &[LogMessage] {
        &self.logs
    }

    /// Current pin values as a compact JSON object. Sensitive pins are
    /// redacted, never printed.
    pub async fn debug_snapshot(&self) -> String {
        let values = self.values.lock().await;
        let mut snapshot = json::Map::new();

        for (name, value) in values.iter() {
            let redact = self
                .node
                .get_pin(name)
                .is_some_and(|pin| pin.is_sensitive());
            let entry = if redact {
                Value::String("<redacted>".to_string())
            } else {
                value.clone()
            };
            snapshot.insert(name.clone(), entry);
        }

        json::to_string(&Value::Object(snapshot)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::pin::PinOptions;
    use weft_types::json::json;

    fn test_node() -> Node {
        let mut node = Node::new("test_node", "Test", "A test node", "Test");
        node.add_input_pin("exec_in", "Input", "Trigger", VariableType::Execution);
        node.add_input_pin("query", "Query", "Query text", VariableType::String)
            .set_default_value(Some(json!("fallback")));
        node.add_input_pin("token", "Token", "Secret", VariableType::String)
            .set_options(PinOptions::new().set_sensitive(true).build());
        node.add_output_pin("exec_out", "Success", "Done", VariableType::Execution);
        node.add_output_pin("count", "Count", "Result count", VariableType::Integer);
        node
    }

    #[tokio::test]
    async fn evaluate_pin_prefers_set_value() {
        let node = test_node();
        let mut context = ExecutionContext::new(&node);

        context.set_pin_value("query", json!("hello")).await.unwrap();
        let value: String = context.evaluate_pin("query").await.unwrap();
        assert_eq!(value, "hello");
    }

    #[tokio::test]
    async fn evaluate_pin_falls_back_to_default() {
        let node = test_node();
        let context = ExecutionContext::new(&node);

        let value: String = context.evaluate_pin("query").await.unwrap();
        assert_eq!(value, "fallback");
    }

    #[tokio::test]
    async fn evaluate_pin_without_value_or_default_fails() {
        let node = test_node();
        let context = ExecutionContext::new(&node);

        let result: Result<String> = context.evaluate_pin("token").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn unknown_pin_is_an_error() {
        let node = test_node();
        let mut context = ExecutionContext::new(&node);

        assert!(context.set_pin_value("missing", json!(1)).await.is_err());
        let result: Result<String> = context.evaluate_pin("missing").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn exec_pins_toggle() {
        let node = test_node();
        let context = ExecutionContext::new(&node);

        assert!(!context.is_exec_pin_active("exec_out").await.unwrap());
        context.activate_exec_pin("exec_out").await.unwrap();
        assert!(context.is_exec_pin_active("exec_out").await.unwrap());
        context.deactivate_exec_pin("exec_out").await.unwrap();
        assert!(!context.is_exec_pin_active("exec_out").await.unwrap());
    }

    #[tokio::test]
    async fn exec_rules_reject_data_pins() {
        let node = test_node();
        let mut context = ExecutionContext::new(&node);

        assert!(context.activate_exec_pin("count").await.is_err());
        assert!(context.set_pin_value("exec_out", json!(true)).await.is_err());
        let result: Result<bool> = context.evaluate_pin("exec_in").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn log_level_filters_messages() {
        let node = test_node();
        let mut context = ExecutionContext::with_log_level(&node, LogLevel::Warn);

        context.log_message("debug detail", LogLevel::Debug);
        context.log_message("something broke", LogLevel::Error);

        assert_eq!(context.logs().len(), 1);
        assert_eq!(context.logs()[0].message, "something broke");
        assert_eq!(context.logs()[0].node_id.as_deref(), Some("test_node"));
    }

    #[tokio::test]
    async fn debug_snapshot_redacts_sensitive_pins() {
        let node = test_node();
        let mut context = ExecutionContext::new(&node);

        context.set_pin_value("query", json!("hello")).await.unwrap();
        context
            .set_pin_value("token", json!("secret_abc123"))
            .await
            .unwrap();

        let snapshot = context.debug_snapshot().await;
        assert!(snapshot.contains("hello"));
        assert!(snapshot.contains("<redacted>"));
        assert!(!snapshot.contains("secret_abc123"));
    }
}
