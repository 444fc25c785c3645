pub mod api_utils;
pub mod backend;
pub mod config;
pub mod error;
pub mod icons;
pub mod notification;
