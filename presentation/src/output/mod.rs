pub mod banner;
pub mod maltego;
pub mod messages;
