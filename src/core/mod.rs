//! Core functionality: documents, templates, search and session state

pub mod config;
pub mod export;
pub mod filter;
pub mod outline;
pub mod session;
pub mod template;
pub mod topic;
