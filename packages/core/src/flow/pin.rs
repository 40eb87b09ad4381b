use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use weft_types::{Value, create_id, json};

use super::variable::VariableType;

#[derive(PartialEq, Eq, Serialize, Deserialize, JsonSchema, Debug, Clone, Copy)]
pub enum PinType {
    Input,
    Output,
}

#[derive(PartialEq, Eq, Serialize, Deserialize, JsonSchema, Debug, Clone, Copy)]
pub enum ValueType {
    Normal,
    Array,
    HashMap,
    HashSet,
}

#[derive(PartialEq, Serialize, Deserialize, JsonSchema, Debug, Clone, Default)]
pub struct PinOptions {
    pub enforce_schema: bool,
    pub sensitive: bool,
    pub valid_values: Option<Vec<String>>,
    pub range: Option<(f64, f64)>,
}

impl PinOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enforce_schema(mut self, enforce_schema: bool) -> Self {
        self.enforce_schema = enforce_schema;
        self
    }

    pub fn set_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn set_valid_values(mut self, valid_values: Vec<String>) -> Self {
        self.valid_values = Some(valid_values);
        self
    }

    pub fn set_range(mut self, range: (f64, f64)) -> Self {
        self.range = Some(range);
        self
    }

    pub fn build(self) -> Self {
        self
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct Pin {
    pub id: String,
    pub name: String,
    pub friendly_name: String,
    pub description: String,
    pub pin_type: PinType,
    pub data_type: VariableType,
    pub value_type: ValueType,
    pub index: u16,
    pub default_value: Option<Value>,
    pub schema: Option<String>,
    pub options: Option<PinOptions>,
}

impl Pin {
    pub fn new(
        name: &str,
        friendly_name: &str,
        description: &str,
        pin_type: PinType,
        data_type: VariableType,
    ) -> Self {
        Self {
            id: create_id(),
            name: name.to_string(),
            friendly_name: friendly_name.to_string(),
            description: description.to_string(),
            pin_type,
            data_type,
            value_type: ValueType::Normal,
            index: 0,
            default_value: None,
            schema: None,
            options: None,
        }
    }

    /// Derive a JSON Schema from `T` and attach it to this pin.
    pub fn set_schema<T: JsonSchema>(&mut self) -> &mut Self {
        let schema = schemars::schema_for!(T);
        self.schema = json::to_string(&schema).ok();
        self
    }

    pub fn set_options(&mut self, options: PinOptions) -> &mut Self {
        self.options = Some(options);
        self
    }

    pub fn set_default_value(&mut self, default_value: Option<Value>) -> &mut Self {
        self.default_value = default_value;
        self
    }

    pub fn set_value_type(&mut self, value_type: ValueType) -> &mut Self {
        self.value_type = value_type;
        self
    }

    pub fn is_sensitive(&self) -> bool {
        self.options.as_ref().is_some_and(|options| options.sensitive)
    }

    pub fn enforces_schema(&self) -> bool {
        self.options
            .as_ref()
            .is_some_and(|options| options.enforce_schema)
    }
}
