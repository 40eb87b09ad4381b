pub mod provider;
pub mod users;

/// Pinned Notion REST API revision, sent with every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";
