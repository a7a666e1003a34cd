//! Application layer for the Berecons storefront: configuration, the REST client, session
//! handling and the view-models behind each screen.

pub mod api;
pub mod config;
pub mod context;
pub mod interaction;
pub mod loadable;
pub mod observability;
pub mod session;
pub mod toasts;
pub mod uploads;
pub mod views;

#[cfg(test)]
mod test;
