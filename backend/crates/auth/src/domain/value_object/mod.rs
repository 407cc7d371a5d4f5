//! Value Object Module

pub mod display_name;
pub mod email;
pub mod location;
pub mod user_id;
