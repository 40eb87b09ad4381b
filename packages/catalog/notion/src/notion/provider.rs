use weft::flow::{
    execution::context::ExecutionContext,
    node::{Node, NodeLogic, NodeScores},
    pin::PinOptions,
    variable::VariableType,
};
use weft_types::{JsonSchema, async_trait, json::json};
use serde::{Deserialize, Serialize};

pub const NOTION_PROVIDER_ID: &str = "notion";
pub const NOTION_API_BASE: &str = "https://api.notion.com";

/// Notion connection handle passed between nodes.
///
/// `api_base` is only set when requests should go through a proxy instead of
/// the public API host.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct NotionProvider {
    pub provider_id: String,
    pub access_token: String,
    pub api_base: Option<String>,
}

impl NotionProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            provider_id: NOTION_PROVIDER_ID.to_string(),
            access_token: access_token.into(),
            api_base: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Absolute URL for an API path like `/v1/users`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.as_deref().unwrap_or(NOTION_API_BASE);
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[crate::register_node]
#[derive(Default)]
pub struct NotionTokenProviderNode {}

impl NotionTokenProviderNode {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl NodeLogic for NotionTokenProviderNode {
    fn get_node(&self) -> Node {
        let mut node = Node::new(
            "notion_provider_api_key",
            "Notion (API Key)",
            "Connect to Notion using an Internal Integration token. Create an integration at notion.so/my-integrations and paste the token here.",
            "Data/Notion",
        );
        node.add_icon("/flow/icons/notion.svg");

        node.add_input_pin(
            "integration_token",
            "Integration Token",
            "Your Notion Internal Integration token. Get it from notion.so/my-integrations",
            VariableType::String,
        )
        .set_options(PinOptions::new().set_sensitive(true).build());

        node.add_output_pin(
            "provider",
            "Provider",
            "Notion provider with authentication token",
            VariableType::Struct,
        )
        .set_schema::<NotionProvider>()
        .set_options(PinOptions::new().set_enforce_schema(true).build());

        node.set_scores(
            NodeScores::new()
                .set_privacy(6)
                .set_security(7)
                .set_performance(7)
                .set_governance(7)
                .set_reliability(9)
                .set_cost(10)
                .build(),
        );

        node
    }

    async fn run(&self, context: &mut ExecutionContext) -> weft_types::Result<()> {
        let token: String = context.evaluate_pin("integration_token").await?;

        if token.is_empty() {
            return Err(weft_types::anyhow!(
                "Integration token is required. Get one from notion.so/my-integrations"
            ));
        }

        let provider = NotionProvider::new(token);

        context.set_pin_value("provider", json!(provider)).await?;

        Ok(())
    }
}
