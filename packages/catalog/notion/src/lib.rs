//! Notion integration catalog for weft
//!
//! Nodes for working with a Notion workspace through an internal
//! integration token:
//! - credential provider
//! - user directory (list, get by id, bot identity)
//! - agent-tool wrapper around the user listing

use std::sync::Arc;

pub use inventory;
pub use weft::flow::catalog::NodeConstructor;
pub use weft::flow::node::NodeLogic;
pub use weft_catalog_macros::register_node;

pub mod notion;

pub use notion::*;

pub fn get_catalog() -> Vec<Arc<dyn NodeLogic>> {
    weft::flow::catalog::get_catalog()
}
