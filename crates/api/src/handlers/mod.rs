//! HTTP request handlers

pub mod bridge;
pub mod common;
pub mod health;
pub mod reference;
pub mod routes;
pub mod settings;

pub use bridge::{get_merchants, post_bridge_quote, post_bridge_relayer, post_bridge_transaction};
pub use health::{health, ready};
pub use reference::{get_chains, get_connections, get_tokens};
pub use routes::{post_quote, post_routes};
pub use settings::{get_settings, put_settings};
