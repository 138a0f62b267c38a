use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::UserId;

/// Checks whether `user` is an administrator (or the owner) of the target
/// group.
///
/// The lookup always runs against the group the signals are posted to, so
/// `/timeset` sent from a private chat is still judged by group privilege.
pub async fn is_group_admin(bot: &Bot, group: ChatId, user: UserId) -> Result<bool, RequestError> {
    let admins = bot.get_chat_administrators(group).await?;
    Ok(admins.iter().any(|member| member.user.id == user))
}
