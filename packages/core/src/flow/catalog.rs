use std::sync::Arc;

use super::node::NodeLogic;

/// A node constructor function type, registered through `inventory` by the
/// `#[register_node]` macro.
pub struct NodeConstructor {
    constructor: fn() -> Arc<dyn NodeLogic>,
}

impl NodeConstructor {
    pub const fn new(constructor: fn() -> Arc<dyn NodeLogic>) -> Self {
        Self { constructor }
    }

    pub fn construct(&self) -> Arc<dyn NodeLogic> {
        (self.constructor)()
    }
}

inventory::collect!(NodeConstructor);

pub fn get_catalog() -> Vec<Arc<dyn NodeLogic>> {
    inventory::iter::<NodeConstructor>()
        .map(|constructor| constructor.construct())
        .collect()
}
