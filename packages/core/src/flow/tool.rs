use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use weft_types::{Result, Value, async_trait, json::json};

/// Function-call definition handed to an agent framework.
///
/// `parameters` is a JSON Schema object describing the tool's arguments, in
/// the shape chat-completion style APIs expect.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, parameters: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    /// Definition for a tool that takes no arguments.
    pub fn without_parameters(name: &str, description: &str) -> Self {
        Self::new(name, description, Self::empty_parameters())
    }

    /// The empty input schema: an object with no properties.
    pub fn empty_parameters() -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    /// Derive the parameters schema from a type.
    pub fn parameters_for<T: JsonSchema>() -> Result<Value> {
        let schema = schemars::schema_for!(T);
        Ok(weft_types::json::to_value(&schema)?)
    }
}

/// A callable capability exposed to an agent framework.
#[async_trait]
pub trait ToolLogic: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    async fn call(&self, args: Value) -> Result<Value>;
}
