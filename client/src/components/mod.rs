//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render the fixed lists from `content`. Only `header` and the
//! hero call-to-action touch shared `UiState`; the rest is static markup.

pub mod contact;
pub mod education;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icon;
pub mod projects;
pub mod section_heading;
