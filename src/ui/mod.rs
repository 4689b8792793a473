//! UI components for the runbook browser

pub mod document_view;
pub mod header;
pub mod outline;
pub mod search_bar;
pub mod tab_bar;
pub mod template_view;
