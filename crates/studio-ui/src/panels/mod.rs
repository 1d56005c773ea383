pub mod sidebar;
pub mod chat;
pub mod caption;
pub mod embed;
pub mod ask;
pub mod settings;
