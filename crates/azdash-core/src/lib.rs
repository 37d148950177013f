pub mod card;
pub mod config;
pub mod details;
pub mod error;
pub mod filter;
pub mod model;
pub mod notification;
pub mod stats;
pub mod theme;
pub mod view;
