//! # Telegram Transport
//!
//! File: bot/src/transport/telegram.rs
//!
//! ## Overview
//!
//! Connects the interaction handler to the Telegram Bot API through
//! teloxide:
//! - `TelegramMessenger` implements the `Messenger` port with `sendMessage`
//!   and `editMessageText`
//! - `dispatch` long-polls for updates and routes commands, text and
//!   callback queries to the handler
//!
//! ## Architecture
//!
//! ```text
//! Update ─┬─ message ─┬─ /start, /help ─▶ Handler::greet
//!         │           └─ text ──────────▶ Handler::lookup_text
//!         └─ callback query ─▶ Action::from_str ─▶ Handler::handle_action
//! ```
//!
//! The dispatcher processes updates from one chat sequentially and
//! different chats concurrently. Endpoint errors are logged by teloxide's
//! default error handler and never stop polling.
//!
use crate::action::Action;
use crate::core::error::{QclipError, Result};
use crate::handler::messenger::{ConversationId, EditOutcome, MessageRef, Messenger};
use crate::handler::{ActionOutcome, Handler};
use crate::render::{messages, Keyboard, Markup, OutgoingText};
use anyhow::Context;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::utils::command::BotCommands;
use teloxide::{ApiError, RequestError};
use tracing::{debug, info};

/// Commands that return the conversation to its fresh state.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "QClip commands:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "show the welcome message.")]
    Help,
}

/// `Messenger` backed by a teloxide `Bot`.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

impl Messenger for TelegramMessenger {
    async fn send(
        &self,
        conversation: ConversationId,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> Result<MessageRef> {
        let mut request = self.bot.send_message(ChatId(conversation.0), text.body);
        if let Some(mode) = parse_mode(text.markup) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(inline_keyboard(&keyboard));
        }
        let sent = request
            .await
            .with_context(|| format!("Failed to send message to chat {}", conversation))?;
        Ok(MessageRef(sent.id.0))
    }

    async fn edit(
        &self,
        conversation: ConversationId,
        target: MessageRef,
        text: OutgoingText,
        keyboard: Option<Keyboard>,
    ) -> Result<EditOutcome> {
        let mut request =
            self.bot
                .edit_message_text(ChatId(conversation.0), MessageId(target.0), text.body);
        if let Some(mode) = parse_mode(text.markup) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(inline_keyboard(&keyboard));
        }
        match request.await {
            Ok(_) => Ok(EditOutcome::Applied),
            Err(err) => classify_edit_error(err),
        }
    }
}

fn classify_edit_error(err: RequestError) -> Result<EditOutcome> {
    match err {
        RequestError::Api(ApiError::MessageNotModified) => Ok(EditOutcome::Unchanged),
        RequestError::Api(
            ApiError::MessageToEditNotFound
            | ApiError::MessageIdInvalid
            | ApiError::MessageCantBeEdited,
        ) => Ok(EditOutcome::TargetGone),
        other => Err(QclipError::Transport(other.to_string()).into()),
    }
}

fn parse_mode(markup: Markup) -> Option<ParseMode> {
    match markup {
        Markup::Plain => None,
        Markup::MarkdownV2 => Some(ParseMode::MarkdownV2),
    }
}

fn inline_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| {
                InlineKeyboardButton::callback(button.label.clone(), button.action.to_string())
            })
            .collect::<Vec<_>>()
    }))
}

type SharedHandler = Arc<Handler<TelegramMessenger>>;

/// Long-polls Telegram until Ctrl+C.
pub async fn dispatch(bot: Bot, handler: SharedHandler) {
    let schema = dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(on_command),
                )
                .branch(dptree::filter(is_other_command).endpoint(on_other_command))
                .branch(dptree::endpoint(on_text)),
        )
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Starting Telegram long polling");
    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Telegram dispatcher stopped");
}

async fn on_command(msg: Message, cmd: Command, handler: SharedHandler) -> Result<()> {
    debug!("Command {:?} in chat {}", cmd, msg.chat.id);
    handler.greet(ConversationId(msg.chat.id.0)).await
}

/// Slash-commands other than ours, including ones addressed to other bots.
fn is_other_command(msg: Message) -> bool {
    msg.text().is_some_and(looks_like_command)
}

fn looks_like_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

async fn on_other_command(msg: Message) -> Result<()> {
    debug!(
        "Ignoring unknown command {:?} in chat {}",
        msg.text().unwrap_or_default(),
        msg.chat.id
    );
    Ok(())
}

async fn on_text(msg: Message, handler: SharedHandler) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!("Ignoring non-text message in chat {}", msg.chat.id);
        return Ok(());
    };
    handler
        .lookup_text(ConversationId(msg.chat.id.0), text)
        .await
}

async fn on_callback(bot: Bot, q: CallbackQuery, handler: SharedHandler) -> Result<()> {
    let (Some(message), Some(data)) = (q.message.as_ref(), q.data.as_deref()) else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    let action = match data.parse::<Action>() {
        Ok(action) => action,
        Err(err) => {
            debug!("Ignoring callback: {}", err);
            bot.answer_callback_query(q.id).await?;
            return Ok(());
        }
    };

    let result = handler
        .handle_action(
            ConversationId(message.chat.id.0),
            Some(MessageRef(message.id.0)),
            action,
        )
        .await;

    // The button spinner only stops once the query is answered.
    let answer = bot.answer_callback_query(q.id);
    match callback_alert(&result) {
        Some(alert) => answer.text(alert).show_alert(true).await?,
        None => answer.await?,
    };
    result.map(|_| ())
}

/// Alert text shown with the callback answer, if any.
fn callback_alert(result: &Result<ActionOutcome>) -> Option<&'static str> {
    match result {
        Ok(ActionOutcome::RecordMissing) => Some(messages::RECORD_MISSING),
        Ok(ActionOutcome::Handled | ActionOutcome::NoSession) | Err(_) => None,
    }
}
