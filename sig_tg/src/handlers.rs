use std::sync::Arc;

use sig_core::IntervalStore;
use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use crate::auth;
use crate::bot_commands::Command;

const WELCOME: &str = "🌟 *Welcome to Elite Quotex Signal Bot!*\n\n\
    This bot sends 1-minute trading signals every 5 minutes by default.\n\
    You can change the interval using `/timeset <seconds>`.\n\n\
    Example: `/timeset 120` to receive signals every 2 minutes.\n\n\
    ✅ All signals are posted automatically in the group.";

const ABOUT: &str = "Elite Quotex Signal Bot posts randomly generated 1-minute trade signals \
    to its group on a timer. Group administrators can retune the timer with /timeset.";

const USAGE: &str = "Invalid format. Use: /timeset 120";

const DENIED: &str = "Only group administrators can change the signal interval.";

const AUTH_UNAVAILABLE: &str = "Could not verify group permissions, try again later.";

/// Handle incoming commands.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    store: Arc<IntervalStore>,
    group: ChatId,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    match cmd {
        Command::Start => {
            bot.send_message(chat_id, WELCOME).parse_mode(ParseMode::Markdown).await?;
        }
        Command::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string()).await?;
        }
        Command::About => {
            bot.send_message(chat_id, ABOUT).await?;
        }
        Command::Timeset { seconds } => {
            let authorized = match requester_is_admin(&bot, group, &msg).await {
                Ok(authorized) => authorized,
                Err(err) => {
                    tracing::error!("Authorization lookup failed: {err}");
                    bot.send_message(chat_id, AUTH_UNAVAILABLE).await?;
                    return Ok(());
                }
            };

            bot.send_message(chat_id, timeset_reply(&store, &seconds, authorized)).await?;
        }
    }

    Ok(())
}

/// True when the message author is an administrator of the target group.
async fn requester_is_admin(bot: &Bot, group: ChatId, msg: &Message) -> Result<bool, RequestError> {
    let Some(user) = msg.from.as_ref() else {
        // Channel posts and service messages carry no author.
        return Ok(false);
    };

    auth::is_group_admin(bot, group, user.id).await
}

/// Decides the `/timeset` outcome and the reply text.
///
/// Free of Telegram types so the command scenarios are testable in
/// isolation. A denied requester never reaches the store; parse failures
/// and rejected values leave it untouched.
pub fn timeset_reply(store: &IntervalStore, raw: &str, authorized: bool) -> String {
    if !authorized {
        return DENIED.to_string();
    }

    let Ok(seconds) = raw.trim().parse::<i64>() else {
        return USAGE.to_string();
    };

    match store.set(seconds) {
        Ok(()) => {
            tracing::info!("Signal interval updated to {seconds}s");
            format!("Signal interval updated to {seconds} seconds ✅")
        }
        Err(err) => {
            tracing::warn!("Rejected interval update: {err}");
            format!("{err}. Use: /timeset 120")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_update_confirms_and_applies() {
        let store = IntervalStore::new(300).unwrap();

        let reply = timeset_reply(&store, "30", true);

        assert_eq!(reply, "Signal interval updated to 30 seconds ✅");
        assert_eq!(store.secs(), 30);
    }

    #[test]
    fn test_non_numeric_argument_keeps_old_interval() {
        let store = IntervalStore::new(300).unwrap();

        assert_eq!(timeset_reply(&store, "abc", true), USAGE);
        assert_eq!(store.secs(), 300);
    }

    #[test]
    fn test_empty_argument_keeps_old_interval() {
        let store = IntervalStore::new(300).unwrap();

        assert_eq!(timeset_reply(&store, "", true), USAGE);
        assert_eq!(store.secs(), 300);
    }

    #[test]
    fn test_non_positive_values_are_rejected() {
        let store = IntervalStore::new(300).unwrap();

        assert!(timeset_reply(&store, "0", true).contains("positive"));
        assert!(timeset_reply(&store, "-45", true).contains("positive"));
        assert_eq!(store.secs(), 300);
    }

    #[test]
    fn test_unauthorized_request_never_touches_store() {
        let store = IntervalStore::new(300).unwrap();

        assert_eq!(timeset_reply(&store, "60", false), DENIED);
        assert_eq!(store.secs(), 300);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let store = IntervalStore::new(300).unwrap();

        let reply = timeset_reply(&store, " 45 ", true);

        assert_eq!(reply, "Signal interval updated to 45 seconds ✅");
        assert_eq!(store.secs(), 45);
    }
}
