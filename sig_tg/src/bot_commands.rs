use teloxide::utils::command::BotCommands;

/// Chat commands with type-safe parsing.
///
/// `/timeset` keeps its argument as a raw string: a malformed value must
/// reach the handler and earn a usage reply instead of being dropped by
/// the command filter.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Signal Bot Commands:")]
pub enum Command {
    #[command(description = "Welcome message and usage")]
    Start,

    #[command(description = "Show help message")]
    Help,

    #[command(description = "What this bot does")]
    About,

    #[command(description = "Set the signal interval in seconds (usage: /timeset 120)")]
    Timeset { seconds: String },
}
