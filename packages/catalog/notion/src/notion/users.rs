use weft_types::{JsonSchema, Result, Value, bail, reqwest};
use serde::{Deserialize, Serialize};

use super::NOTION_API_VERSION;
use super::provider::NotionProvider;

pub mod get;
pub mod list;
pub mod me;
pub mod tool;

/// Projection of a Notion user object. `name` and `avatar_url` are optional
/// in the API and default to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NotionUser {
    pub id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
struct UserListResponse {
    results: Vec<Value>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Clone)]
pub struct UserList {
    pub users: Vec<NotionUser>,
    pub has_more: bool,
}

/// Bot identity behind an integration token (`GET /v1/users/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BotUser {
    pub user: NotionUser,
    pub workspace_name: String,
}

pub(crate) fn project_user(value: &Value) -> Option<NotionUser> {
    let id = value["id"].as_str()?.to_string();
    let user_type = value["type"].as_str()?.to_string();
    let name = value["name"].as_str().unwrap_or_default().to_string();
    let avatar_url = value["avatar_url"].as_str().unwrap_or_default().to_string();

    Some(NotionUser {
        id,
        user_type,
        name,
        avatar_url,
    })
}

/// Human-readable block for one user, one field per line with a trailing
/// separator rule.
pub fn format_user(user: &NotionUser) -> String {
    let mut output = String::from("User:\n");
    output.push_str(&format!("Id: {}\n", user.id));
    output.push_str(&format!("Type: {}\n", user.user_type));
    output.push_str(&format!("Name: {}\n", user.name));
    output.push_str(&format!("Avatar Url: {}\n", user.avatar_url));
    output.push_str("________________________\n");
    output
}

async fn get_json(
    client: &reqwest::Client,
    provider: &NotionProvider,
    path: &str,
) -> Result<Value> {
    let url = provider.endpoint(path);
    tracing::debug!(url = %url, "GET Notion API");

    let response = client
        .get(&url)
        .header(
            "Authorization",
            format!("Bearer {}", provider.access_token),
        )
        .header("Notion-Version", NOTION_API_VERSION)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Notion API error {status}: {body}");
    }

    response
        .json()
        .await
        .map_err(|error| weft_types::anyhow!("Failed to parse Notion response: {error}"))
}

/// List the users the integration can see. Shared by the list node and the
/// agent tool. Returns the first page only; `has_more` reports whether the
/// workspace has further entries.
pub async fn list_users(client: &reqwest::Client, provider: &NotionProvider) -> Result<UserList> {
    let body: Value = get_json(client, provider, "/v1/users").await?;
    let response: UserListResponse = weft_types::json::from_value(body)
        .map_err(|error| weft_types::anyhow!("Failed to parse Notion response: {error}"))?;

    let users = response
        .results
        .iter()
        .filter_map(project_user)
        .collect::<Vec<_>>();

    Ok(UserList {
        users,
        has_more: response.has_more,
    })
}

/// Fetch a single user by id.
pub async fn get_user(
    client: &reqwest::Client,
    provider: &NotionProvider,
    user_id: &str,
) -> Result<NotionUser> {
    let body = get_json(client, provider, &format!("/v1/users/{user_id}")).await?;

    project_user(&body)
        .ok_or_else(|| weft_types::anyhow!("Notion user response is missing id or type"))
}

/// Fetch the bot user the token authenticates as.
pub async fn get_bot_user(
    client: &reqwest::Client,
    provider: &NotionProvider,
) -> Result<BotUser> {
    let body = get_json(client, provider, "/v1/users/me").await?;

    let user = project_user(&body)
        .ok_or_else(|| weft_types::anyhow!("Notion user response is missing id or type"))?;
    let workspace_name = body["bot"]["workspace_name"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    Ok(BotUser {
        user,
        workspace_name,
    })
}
