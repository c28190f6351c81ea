//! codexplain - A self-hostable code explanation service
//!
//! Forwards user-submitted source code to an LLM completion provider and
//! relays the textual explanation. One embedded web page, one proxy
//! endpoint, no persistence.

pub mod cli;
pub mod config;
pub mod explain;
pub mod http_server;
pub mod observability;
pub mod provider;
