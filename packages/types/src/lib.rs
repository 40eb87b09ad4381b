//! Shared foundation for all weft crates.
//!
//! Downstream crates pull the ambient ecosystem from here instead of
//! depending on the underlying crates directly:
//!
//! ```rust
//! use weft_types::{Result, Value, json::json};
//!
//! fn example() -> Result<Value> {
//!     Ok(json!({ "ok": true }))
//! }
//! ```

pub use anyhow::{Context, Error, Result, anyhow, bail};
pub use async_trait::async_trait;
pub use futures;
pub use reqwest;
pub use schemars::JsonSchema;
pub use serde_json::Value;
pub use tokio;

/// JSON (de)serialization, re-exported from `serde_json`.
pub mod json {
    pub use serde_json::{
        Map, Number, Value, from_slice, from_str, from_value, json, to_string, to_string_pretty,
        to_value, to_vec,
    };
}

/// Async synchronization primitives, re-exported from `tokio`.
pub mod sync {
    pub use tokio::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
}

/// Generate a unique id for pins and other runtime objects.
pub fn create_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_id_is_unique() {
        let a = create_id();
        let b = create_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn json_module_round_trip() {
        let value = json::json!({ "name": "weft", "pins": 2 });
        let text = json::to_string(&value).unwrap();
        let back: Value = json::from_str(&text).unwrap();
        assert_eq!(value, back);
    }
}
