//! weft - a small, embeddable flow-node runtime.
//!
//! Integrations declare [`flow::node::Node`]s with typed pins, implement
//! [`flow::node::NodeLogic`] to run them, and optionally expose the same
//! capability to agent frameworks through [`flow::tool::ToolLogic`].

pub mod flow;
