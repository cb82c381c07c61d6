//! Client-side route paths shared by navigation and links.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
