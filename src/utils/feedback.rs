use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::html;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
    Prompt,
}

impl FeedbackType {
    pub(crate) fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Warning => "⚠️",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
            FeedbackType::Prompt => "✍️",
        }
    }
}

/// Renders plain `message` as HTML prefixed with the emoji of `feedback_type`.
pub fn format_feedback(feedback_type: FeedbackType, message: &str) -> String {
    format!("{} {}", feedback_type.emoji(), html::escape(message))
}

/// Centralized feedback system for bot commands
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Send immediate feedback message
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, format_feedback(feedback_type, message))
            .parse_mode(ParseMode::Html)
            .await
    }

    /// Send success feedback
    pub async fn success(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Success, message).await
    }

    /// Send error feedback
    pub async fn error(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, message).await
    }

    /// Send warning feedback
    pub async fn warning(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Warning, message).await
    }

    /// Send validation error with a usage hint
    pub async fn validation_error(&self, error: &str, suggestion: &str) -> ResponseResult<Message> {
        let message = format!("{}\n\n💡 <b>Usage:</b> {}", html::escape(error), html::escape(suggestion));
        self.bot
            .send_message(self.chat_id, format!("{} {}", FeedbackType::Error.emoji(), message))
            .parse_mode(ParseMode::Html)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_type_emojis() {
        assert_eq!(FeedbackType::Success.emoji(), "✅");
        assert_eq!(FeedbackType::Warning.emoji(), "⚠️");
        assert_eq!(FeedbackType::Error.emoji(), "❌");
        assert_eq!(FeedbackType::Info.emoji(), "ℹ️");
        assert_eq!(FeedbackType::Prompt.emoji(), "✍️");
    }

    #[test]
    fn test_format_feedback_escapes_html() {
        assert_eq!(
            format_feedback(FeedbackType::Error, "Could not send: <timeout> & retry"),
            "❌ Could not send: &lt;timeout&gt; &amp; retry"
        );
        assert_eq!(format_feedback(FeedbackType::Success, "Sent."), "✅ Sent.");
    }
}
