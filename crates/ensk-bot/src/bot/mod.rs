//! Event handling.
//!
//! [`Bot::handle`] maps one [`Incoming`] event to the replies for its chat.
//! Navigation and search are stateless reads; the admin dialogue keeps one
//! [`Dialogue`](ensk_core::dialogue::Dialogue) value per conversation in
//! [`DialogueSessions`].

mod admin;
mod navigation;
mod search;
mod sessions;
pub mod texts;

use ensk_config::EnskConfig;
use ensk_core::dialogue::Input;
use ensk_core::enums::Selection;
use ensk_core::reply::Reply;
use ensk_db::service::ContentStore;

pub use sessions::{ConversationKey, DialogueSessions};

use crate::blob::BlobStore;
use crate::context::AppContext;
use crate::transport::{Event, Incoming, Transport};

pub struct Bot<'a> {
    store: &'a ContentStore,
    blobs: &'a BlobStore,
    config: &'a EnskConfig,
    sessions: DialogueSessions,
}

impl<'a> Bot<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self {
            store: &ctx.store,
            blobs: &ctx.blobs,
            config: &ctx.config,
            sessions: DialogueSessions::default(),
        }
    }

    /// Replies for one event, in delivery order.
    ///
    /// Missing rows, empty listings, unknown tokens and unauthorized users
    /// all produce a message. Errors are store or filesystem failures.
    pub async fn handle(&mut self, incoming: &Incoming) -> anyhow::Result<Vec<Reply>> {
        let key = ConversationKey::new(incoming.chat_id, incoming.user_id);
        tracing::debug!(
            chat_id = incoming.chat_id,
            user_id = incoming.user_id,
            event = ?incoming.event,
            "incoming event"
        );

        match &incoming.event {
            Event::Command { name, args } => self.on_command(key, name, args).await,
            Event::Button(selection) => self.on_selection(key, selection).await,
            Event::Text(text) => {
                if self.sessions.contains(key) {
                    self.continue_dialogue(key, Input::Text(text), None).await
                } else {
                    Ok(vec![Reply::text(texts::IDLE_TEXT)])
                }
            }
            Event::Document {
                path,
                file_name,
                caption,
            } => {
                if self.sessions.contains(key) {
                    let input = Input::Document {
                        file_name,
                        caption: caption.as_deref(),
                    };
                    self.continue_dialogue(key, input, Some(path.as_path())).await
                } else {
                    Ok(vec![Reply::text(texts::UPLOAD_OUTSIDE_DIALOGUE)])
                }
            }
        }
    }

    async fn on_command(
        &mut self,
        key: ConversationKey,
        name: &str,
        args: &str,
    ) -> anyhow::Result<Vec<Reply>> {
        match name {
            "start" => Ok(vec![self.root_menu().await?]),
            "search" => self.search(args).await,
            "admin" => Ok(vec![self.admin_panel(key.user_id)]),
            "done" => self.continue_dialogue(key, Input::Done, None).await,
            "cancel" => Ok(vec![self.cancel_dialogue(key)]),
            "help" => Ok(vec![Reply::text(texts::HELP)]),
            _ => Ok(vec![Reply::text(texts::UNKNOWN_COMMAND)]),
        }
    }

    async fn on_selection(
        &mut self,
        key: ConversationKey,
        selection: &Selection,
    ) -> anyhow::Result<Vec<Reply>> {
        match selection {
            Selection::Specialty(id) => self.show_years(*id).await,
            Selection::Year(id) => self.show_modules(*id).await,
            Selection::Module(id) => self.show_lessons(*id).await,
            Selection::Lesson(id) => self.show_lesson(*id).await,
            Selection::File(id) => self.send_file(*id).await,
            Selection::NoOp => Ok(vec![Reply::text(texts::WAIT_FOR_CONTENT)]),
            Selection::AdminAdd => Ok(vec![self.start_dialogue(key)]),
            Selection::AdminList => Ok(vec![self.content_overview(key.user_id).await?]),
            Selection::Unknown(raw) => {
                tracing::debug!(token = %raw, "unrecognized button token");
                Ok(vec![Reply::text(texts::UNKNOWN_OPTION)])
            }
        }
    }
}

/// Pump events from `transport` through `bot` until the transport runs dry.
///
/// A failing event is logged and answered with a generic message; the loop
/// keeps going. Only transport failures end it.
pub async fn serve<T: Transport>(bot: &mut Bot<'_>, transport: &mut T) -> anyhow::Result<()> {
    while let Some(incoming) = transport.next_event().await? {
        let replies = match bot.handle(&incoming).await {
            Ok(replies) => replies,
            Err(error) => {
                tracing::error!(
                    chat_id = incoming.chat_id,
                    user_id = incoming.user_id,
                    error = %format!("{error:#}"),
                    "failed to handle event"
                );
                vec![Reply::text(texts::INTERNAL_ERROR)]
            }
        };

        for reply in &replies {
            transport.deliver(incoming.chat_id, reply).await?;
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::transport::ConsoleTransport;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn help_and_unknown_commands() {
        let (ctx, _dir) = test_context().await;
        let mut bot = Bot::new(&ctx);

        let help = bot.handle(&command(STUDENT, "help", "")).await.unwrap();
        assert_eq!(help, vec![Reply::text(texts::HELP)]);

        let unknown = bot.handle(&command(STUDENT, "frobnicate", "")).await.unwrap();
        assert_eq!(unknown, vec![Reply::text(texts::UNKNOWN_COMMAND)]);
    }

    #[tokio::test]
    async fn idle_text_and_uploads_get_hints() {
        let (ctx, dir) = test_context().await;
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&text(STUDENT, "hello")).await.unwrap();
        assert_eq!(replies, vec![Reply::text(texts::IDLE_TEXT)]);

        let upload = bot
            .handle(&document(STUDENT, &dir.path().join("x.pdf"), None))
            .await
            .unwrap();
        assert_eq!(upload, vec![Reply::text(texts::UPLOAD_OUTSIDE_DIALOGUE)]);
    }

    #[tokio::test]
    async fn serve_answers_each_line_over_console() {
        let (ctx, _dir) = test_context().await;
        ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let mut bot = Bot::new(&ctx);

        let input: &[u8] = b"/start\n> spec:x\n";
        let mut output = Vec::new();
        let mut transport = ConsoleTransport::new(input, &mut output, CHAT, STUDENT);
        serve(&mut bot, &mut transport).await.unwrap();
        drop(transport);

        let written = String::from_utf8(output).unwrap();
        assert!(written.starts_with(texts::GREETING), "{written}");
        assert!(written.contains("[spec:1] Mathematics (math)"), "{written}");
        assert!(written.contains(texts::UNKNOWN_OPTION), "{written}");
    }
}
