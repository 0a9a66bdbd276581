//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped effects and delegates rendering details
//! to `components`.

pub mod home;
