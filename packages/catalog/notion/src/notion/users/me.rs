use weft::flow::{
    execution::{LogLevel, context::ExecutionContext},
    node::{Node, NodeLogic, NodeScores},
    pin::PinOptions,
    variable::VariableType,
};
use weft_types::{async_trait, json::json, reqwest};

use crate::notion::provider::NotionProvider;
use crate::notion::users::{NotionUser, get_bot_user};

/// Resolves the identity behind the integration token. Handy as a credential
/// check at the start of a flow.
#[crate::register_node]
#[derive(Default)]
pub struct GetNotionBotUserNode {}

impl GetNotionBotUserNode {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl NodeLogic for GetNotionBotUserNode {
    fn get_node(&self) -> Node {
        let mut node = Node::new(
            "notion_get_bot_user",
            "Get Notion Bot User",
            "Retrieves the bot user the integration token authenticates as",
            "Data/Notion",
        );
        node.add_icon("/flow/icons/notion.svg");

        node.add_input_pin(
            "exec_in",
            "Input",
            "Trigger the lookup",
            VariableType::Execution,
        );

        node.add_input_pin(
            "provider",
            "Provider",
            "Notion provider (from Notion node)",
            VariableType::Struct,
        )
        .set_schema::<NotionProvider>()
        .set_options(PinOptions::new().set_enforce_schema(true).build());

        node.add_output_pin(
            "exec_out",
            "Success",
            "Triggered when the lookup completes successfully",
            VariableType::Execution,
        );

        node.add_output_pin(
            "error",
            "Error",
            "Triggered when an error occurs",
            VariableType::Execution,
        );

        node.add_output_pin("user", "User", "The bot user", VariableType::Struct)
            .set_schema::<NotionUser>()
            .set_options(PinOptions::new().set_enforce_schema(true).build());

        node.add_output_pin(
            "workspace_name",
            "Workspace",
            "Name of the workspace the integration is installed in",
            VariableType::String,
        );

        node.set_scores(
            NodeScores::new()
                .set_privacy(6)
                .set_security(8)
                .set_performance(7)
                .set_governance(7)
                .set_reliability(9)
                .set_cost(10)
                .build(),
        );

        node
    }

    async fn run(&self, context: &mut ExecutionContext) -> weft_types::Result<()> {
        context.deactivate_exec_pin("exec_out").await?;
        context.deactivate_exec_pin("error").await?;

        let provider: NotionProvider = context.evaluate_pin("provider").await?;

        let client = reqwest::Client::new();

        match get_bot_user(&client, &provider).await {
            Ok(bot) => {
                context.set_pin_value("user", json!(bot.user)).await?;
                context
                    .set_pin_value("workspace_name", json!(bot.workspace_name))
                    .await?;
                context.activate_exec_pin("exec_out").await?;
            }
            Err(error) => {
                context.log_message(&format!("{error}"), LogLevel::Error);
                context.activate_exec_pin("error").await?;
            }
        }

        Ok(())
    }
}
