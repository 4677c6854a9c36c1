//! Admin panel and the content-entry dialogue.
//!
//! Every dialogue step that produces a row commits it immediately. An
//! abandoned dialogue leaves those rows in place.

use std::path::Path;

use anyhow::Context;
use ensk_core::dialogue::{Dialogue, DialogueError, Input, Insert, Plan};
use ensk_core::enums::Selection;
use ensk_core::menu::keyboard;
use ensk_core::reply::Reply;
use ensk_core::responses::TreeRow;

use super::{Bot, ConversationKey, texts};

impl Bot<'_> {
    fn is_admin(&self, user_id: i64) -> bool {
        self.config.bot.is_admin(user_id)
    }

    pub(super) fn admin_panel(&self, user_id: i64) -> Reply {
        if !self.is_admin(user_id) {
            tracing::debug!(user_id, "admin panel refused");
            return Reply::text(texts::ADMIN_ONLY);
        }
        let buttons = keyboard(
            [
                (Selection::AdminAdd, texts::ADMIN_ADD_LABEL.to_string()),
                (Selection::AdminList, texts::ADMIN_LIST_LABEL.to_string()),
            ],
            1,
        );
        Reply::menu(texts::ADMIN_PANEL, buttons)
    }

    /// Start (or restart) the dialogue for this conversation.
    pub(super) fn start_dialogue(&mut self, key: ConversationKey) -> Reply {
        if !self.is_admin(key.user_id) {
            return Reply::text(texts::ADMIN_ONLY);
        }
        let dialogue = Dialogue::new();
        let prompt = dialogue.prompt();
        self.sessions.insert(key, dialogue);
        tracing::info!(
            chat_id = key.chat_id,
            user_id = key.user_id,
            active = self.sessions.active_count(),
            "admin dialogue started"
        );
        Reply::text(prompt)
    }

    pub(super) fn cancel_dialogue(&mut self, key: ConversationKey) -> Reply {
        match self.sessions.remove(key) {
            Some(dialogue) => {
                tracing::info!(
                    chat_id = key.chat_id,
                    state = %dialogue.state(),
                    "admin dialogue cancelled"
                );
                Reply::text(texts::CANCELLED)
            }
            None => Reply::text(texts::NOT_IN_DIALOGUE),
        }
    }

    /// Flattened listing of the whole hierarchy.
    pub(super) async fn content_overview(&self, user_id: i64) -> anyhow::Result<Reply> {
        if !self.is_admin(user_id) {
            return Ok(Reply::text(texts::ADMIN_ONLY));
        }
        let rows = self.store.list_full_tree().await?;
        if rows.is_empty() {
            return Ok(Reply::text(texts::TREE_EMPTY));
        }
        let body = rows.iter().map(TreeRow::render).collect::<Vec<_>>().join("\n");
        Ok(Reply::text(format!("{}\n{body}", texts::TREE_HEADER)))
    }

    /// Feed one message into the conversation's dialogue.
    ///
    /// Invalid input re-prompts without touching the session. The session
    /// only moves forward once the store accepted the step's insert.
    pub(super) async fn continue_dialogue(
        &mut self,
        key: ConversationKey,
        input: Input<'_>,
        upload: Option<&Path>,
    ) -> anyhow::Result<Vec<Reply>> {
        let Some(dialogue) = self.sessions.get(key).cloned() else {
            return Ok(vec![Reply::text(texts::NOT_IN_DIALOGUE)]);
        };

        let plan = match dialogue.plan(input) {
            Ok(plan) => plan,
            Err(DialogueError::EmptyInput(_)) => {
                return Ok(vec![reprompt(texts::EMPTY_VALUE, &dialogue)]);
            }
            Err(DialogueError::ExpectedText(_)) => {
                return Ok(vec![reprompt(texts::EXPECTED_TEXT, &dialogue)]);
            }
            Err(DialogueError::ExpectedDocument(_)) => {
                return Ok(vec![Reply::text(texts::EXPECTED_DOCUMENT)]);
            }
            Err(error) => return Err(error.into()),
        };

        let inserted = match &plan {
            Plan::Insert(insert) => Some(self.execute(insert, upload).await?),
            Plan::HoldTitle(_) | Plan::Finish => None,
        };
        let next = dialogue.advance(&plan, inserted)?;

        let text = match &plan {
            Plan::Insert(insert @ Insert::File { .. }) => {
                format!("{}\n{}", insert.confirmation(), texts::MORE_FILES)
            }
            Plan::Insert(insert) => format!("{}\n{}", insert.confirmation(), next.prompt()),
            Plan::HoldTitle(_) => next.prompt().to_string(),
            Plan::Finish => format!(
                "{}\n{}",
                texts::files_attached(next.draft().files_added),
                next.prompt()
            ),
        };

        if next.is_finished() {
            tracing::info!(
                chat_id = key.chat_id,
                files = next.draft().files_added,
                "admin dialogue finished"
            );
            self.sessions.remove(key);
        } else {
            self.sessions.insert(key, next);
        }
        Ok(vec![Reply::text(text)])
    }

    async fn execute(&self, insert: &Insert, upload: Option<&Path>) -> anyhow::Result<i64> {
        let id = match insert {
            Insert::Specialty { code, name } => self.store.insert_specialty(code, name).await?,
            Insert::Year {
                specialty_id,
                label,
            } => self.store.insert_year(*specialty_id, label).await?,
            Insert::Module { year_id, name } => self.store.insert_module(*year_id, name).await?,
            Insert::Lesson {
                module_id,
                title,
                summary,
            } => {
                self.store
                    .insert_lesson(*module_id, title, summary.as_deref())
                    .await?
            }
            Insert::File {
                lesson_id,
                kind,
                original_name,
            } => {
                let source = upload.context("document event carried no file path")?;
                let stored = self.blobs.store(source, original_name, *lesson_id).await?;
                let inserted = self
                    .store
                    .insert_file(
                        *lesson_id,
                        kind.as_str(),
                        &stored.to_string_lossy(),
                        original_name,
                    )
                    .await;
                match inserted {
                    Ok(id) => id,
                    Err(error) => {
                        self.blobs.discard(&stored).await;
                        return Err(error.into());
                    }
                }
            }
        };
        Ok(id)
    }
}

fn reprompt(problem: &str, dialogue: &Dialogue) -> Reply {
    Reply::text(format!("{problem}\n{}", dialogue.prompt()))
}
