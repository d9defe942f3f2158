//! Landing page sections
//! Developed by The Certifier Team (c)2025

pub mod hero;
pub mod nav;
pub mod placeholder;
pub mod trust;

pub use hero::Hero;
pub use nav::Navbar;
pub use placeholder::Placeholder;
pub use trust::{TRUST_LOGOS, Trust, TrustLogo};
