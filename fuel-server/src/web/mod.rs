//! Web layer for the fuel price bot.
//!
//! Stands in for the chat framework: the message router posts each chat
//! message here and relays whatever reply comes back.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
