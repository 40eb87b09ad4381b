use weft::flow::{
    execution::{LogLevel, context::ExecutionContext},
    node::{Node, NodeLogic, NodeScores},
    pin::PinOptions,
    variable::VariableType,
};
use weft_types::{async_trait, json::json, reqwest};

use crate::notion::provider::NotionProvider;
use crate::notion::users::{NotionUser, format_user, get_user};

#[crate::register_node]
#[derive(Default)]
pub struct GetNotionUserNode {}

impl GetNotionUserNode {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl NodeLogic for GetNotionUserNode {
    fn get_node(&self) -> Node {
        let mut node = Node::new(
            "notion_get_user",
            "Get Notion User",
            "Retrieves a single Notion user by id",
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

        node.add_input_pin(
            "user_id",
            "User ID",
            "The ID of the user to retrieve",
            VariableType::String,
        );

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

        node.add_output_pin("user", "User", "The resolved user", VariableType::Struct)
            .set_schema::<NotionUser>()
            .set_options(PinOptions::new().set_enforce_schema(true).build());

        node.add_output_pin(
            "text",
            "Text",
            "The user as a human-readable text block",
            VariableType::String,
        );

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
        context.deactivate_exec_pin("exec_out").await?;
        context.deactivate_exec_pin("error").await?;

        let provider: NotionProvider = context.evaluate_pin("provider").await?;
        let user_id: String = context.evaluate_pin("user_id").await?;

        if user_id.is_empty() {
            context.log_message("User ID cannot be empty", LogLevel::Error);
            context.activate_exec_pin("error").await?;
            return Ok(());
        }

        let client = reqwest::Client::new();

        match get_user(&client, &provider, &user_id).await {
            Ok(user) => {
                context
                    .set_pin_value("text", json!(format_user(&user)))
                    .await?;
                context.set_pin_value("user", json!(user)).await?;
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
