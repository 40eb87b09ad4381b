use weft::flow::tool::{ToolDefinition, ToolLogic};
use weft_types::{Result, Value, async_trait, json::json, reqwest};

use crate::notion::provider::NotionProvider;
use crate::notion::users::list_users;

/// Agent-tool wrapper around the user listing. Takes no arguments; the
/// credential is bound at construction time, not supplied by the model.
pub struct NotionListUsersTool {
    provider: NotionProvider,
}

impl NotionListUsersTool {
    pub fn new(provider: NotionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ToolLogic for NotionListUsersTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::without_parameters("notion_list_users", "Retrieve users from Notion.")
    }

    async fn call(&self, _args: Value) -> Result<Value> {
        let client = reqwest::Client::new();
        let list = list_users(&client, &self.provider).await?;
        Ok(json!(list.users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_has_empty_schema() {
        let tool = NotionListUsersTool::new(NotionProvider::new("secret_abc"));
        let definition = tool.definition();

        assert_eq!(definition.name, "notion_list_users");
        assert_eq!(definition.description, "Retrieve users from Notion.");
        assert_eq!(definition.parameters, ToolDefinition::empty_parameters());
    }
}
