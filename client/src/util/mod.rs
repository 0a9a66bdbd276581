//! Browser helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue behind the `hydrate` feature so the
//! same components render on the server and stay testable natively.

pub mod scroll;
pub mod theme;
