pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod export;
pub mod flex_value;
pub mod handlers;
pub mod logging;
pub mod roster;
pub mod subscription;
pub mod ui;

pub use api::{fetch_roster, probe};
pub use roster::Row;
pub use subscription::{Connections, Expiry, SubscriptionState, SubscriptionStatus};
