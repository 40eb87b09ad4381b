use weft::flow::{
    execution::{LogLevel, context::ExecutionContext},
    node::{Node, NodeLogic, NodeScores},
    pin::{PinOptions, ValueType},
    variable::VariableType,
};
use weft_types::{async_trait, json::json, reqwest};

use crate::notion::provider::NotionProvider;
use crate::notion::users::{NotionUser, format_user, list_users};

#[crate::register_node]
#[derive(Default)]
pub struct ListNotionUsersNode {}

impl ListNotionUsersNode {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl NodeLogic for ListNotionUsersNode {
    fn get_node(&self) -> Node {
        let mut node = Node::new(
            "notion_list_users",
            "List Notion Users",
            "Retrieve users from Notion.",
            "Data/Notion",
        );
        node.add_icon("/flow/icons/notion.svg");

        node.add_input_pin(
            "exec_in",
            "Input",
            "Trigger the user listing",
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
            "Triggered when the listing completes successfully",
            VariableType::Execution,
        );

        node.add_output_pin(
            "error",
            "Error",
            "Triggered when an error occurs",
            VariableType::Execution,
        );

        node.add_output_pin(
            "users",
            "Users",
            "Array of workspace users",
            VariableType::Struct,
        )
        .set_value_type(ValueType::Array)
        .set_schema::<NotionUser>()
        .set_options(PinOptions::new().set_enforce_schema(true).build());

        node.add_output_pin(
            "text",
            "Text",
            "All users as human-readable text blocks",
            VariableType::String,
        );

        node.add_output_pin(
            "count",
            "Count",
            "Number of users returned",
            VariableType::Integer,
        );

        node.add_output_pin(
            "has_more",
            "Has More",
            "Whether the workspace has more users than returned",
            VariableType::Boolean,
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

        let client = reqwest::Client::new();

        context.log_message("Listing Notion users", LogLevel::Debug);

        match list_users(&client, &provider).await {
            Ok(list) => {
                let text = list
                    .users
                    .iter()
                    .map(format_user)
                    .collect::<Vec<_>>()
                    .concat();
                let count = list.users.len() as i64;

                context.log_message(&format!("Found {} users", count), LogLevel::Info);

                context.set_pin_value("users", json!(list.users)).await?;
                context.set_pin_value("text", json!(text)).await?;
                context.set_pin_value("count", json!(count)).await?;
                context
                    .set_pin_value("has_more", json!(list.has_more))
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
