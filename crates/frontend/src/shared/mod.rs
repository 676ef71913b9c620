pub mod config;
pub mod icons;
pub mod modal;
pub mod url_state;
