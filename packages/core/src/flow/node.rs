use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use weft_types::async_trait;

use super::{
    execution::context::ExecutionContext,
    pin::{Pin, PinType},
    variable::VariableType,
};

#[derive(PartialEq, Eq, Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, Default)]
pub struct NodeScores {
    pub privacy: u8,
    pub security: u8,
    pub performance: u8,
    pub governance: u8,
    pub reliability: u8,
    pub cost: u8,
}

impl NodeScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_privacy(mut self, privacy: u8) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn set_security(mut self, security: u8) -> Self {
        self.security = security;
        self
    }

    pub fn set_performance(mut self, performance: u8) -> Self {
        self.performance = performance;
        self
    }

    pub fn set_governance(mut self, governance: u8) -> Self {
        self.governance = governance;
        self
    }

    pub fn set_reliability(mut self, reliability: u8) -> Self {
        self.reliability = reliability;
        self
    }

    pub fn set_cost(mut self, cost: u8) -> Self {
        self.cost = cost;
        self
    }

    pub fn build(self) -> Self {
        self
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: Option<String>,
    pub version: Option<u32>,
    pub scores: Option<NodeScores>,
    pub pins: Vec<Pin>,
}

impl Node {
    pub fn new(id: &str, name: &str, description: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            icon: None,
            version: None,
            scores: None,
            pins: Vec::new(),
        }
    }

    pub fn add_icon(&mut self, icon: &str) -> &mut Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn set_version(&mut self, version: u32) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn set_scores(&mut self, scores: NodeScores) -> &mut Self {
        self.scores = Some(scores);
        self
    }

    pub fn add_input_pin(
        &mut self,
        name: &str,
        friendly_name: &str,
        description: &str,
        data_type: VariableType,
    ) -> &mut Pin {
        self.add_pin(name, friendly_name, description, PinType::Input, data_type)
    }

    pub fn add_output_pin(
        &mut self,
        name: &str,
        friendly_name: &str,
        description: &str,
        data_type: VariableType,
    ) -> &mut Pin {
        self.add_pin(name, friendly_name, description, PinType::Output, data_type)
    }

    fn add_pin(
        &mut self,
        name: &str,
        friendly_name: &str,
        description: &str,
        pin_type: PinType,
        data_type: VariableType,
    ) -> &mut Pin {
        let mut pin = Pin::new(name, friendly_name, description, pin_type, data_type);
        pin.index = self.pins.len() as u16;
        self.pins.push(pin);
        self.pins.last_mut().unwrap()
    }

    pub fn get_pin(&self, name: &str) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.name == name)
    }

    pub fn input_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|pin| pin.pin_type == PinType::Input)
    }

    pub fn output_pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins
            .iter()
            .filter(|pin| pin.pin_type == PinType::Output)
    }
}

#[async_trait]
pub trait NodeLogic: Send + Sync {
    fn get_node(&self) -> Node;

    async fn run(&self, context: &mut ExecutionContext) -> weft_types::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_new_holds_metadata() {
        let node = Node::new("demo_node", "Demo", "A demo node", "Demo/Category");

        assert_eq!(node.id, "demo_node");
        assert_eq!(node.category, "Demo/Category");
        assert!(node.pins.is_empty());
    }

    #[test]
    fn pins_keep_declaration_order() {
        let mut node = Node::new("demo_node", "Demo", "A demo node", "Demo");
        node.add_input_pin("exec_in", "Input", "Trigger", VariableType::Execution);
        node.add_input_pin("query", "Query", "Query text", VariableType::String);
        node.add_output_pin("exec_out", "Success", "Done", VariableType::Execution);

        assert_eq!(node.pins[0].name, "exec_in");
        assert_eq!(node.pins[1].index, 1);
        assert_eq!(node.input_pins().count(), 2);
        assert_eq!(node.output_pins().count(), 1);
    }

    #[test]
    fn get_pin_by_name() {
        let mut node = Node::new("demo_node", "Demo", "A demo node", "Demo");
        node.add_input_pin("query", "Query", "Query text", VariableType::String);

        assert!(node.get_pin("query").is_some());
        assert!(node.get_pin("missing").is_none());
    }

    #[test]
    fn scores_builder() {
        let scores = NodeScores::new().set_privacy(6).set_cost(10).build();

        assert_eq!(scores.privacy, 6);
        assert_eq!(scores.cost, 10);
        assert_eq!(scores.security, 0);
    }
}
