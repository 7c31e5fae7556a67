//! SPM Consult: NSA request wizard and consulting tools backed by a
//! chat-completion API.

pub mod config;
pub mod consulting;
pub mod error;
pub mod llm;
pub mod portal;
pub mod server;
pub mod wizard;
