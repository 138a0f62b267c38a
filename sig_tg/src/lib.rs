pub mod auth;
pub mod bot_commands;
pub mod config;
pub mod gateway;
pub mod handlers;
pub mod sink;

pub use bot_commands::Command;
pub use config::BotConfig;
pub use gateway::webhook_listener;
pub use handlers::handle_command;
pub use sink::TelegramSink;
