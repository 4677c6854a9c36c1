//! Browsing: specialty → year → module → lesson → file.

use std::path::PathBuf;

use ensk_core::enums::Selection;
use ensk_core::menu::keyboard;
use ensk_core::reply::Reply;

use super::{Bot, texts};

impl Bot<'_> {
    /// Greeting plus one button per specialty.
    pub(super) async fn root_menu(&self) -> anyhow::Result<Reply> {
        let specialties = self.store.list_specialties().await?;
        if specialties.is_empty() {
            let placeholder = keyboard([(Selection::NoOp, texts::NO_CONTENT_BUTTON.to_string())], 1);
            return Ok(Reply::menu(texts::GREETING, placeholder));
        }

        let buttons = keyboard(
            specialties
                .iter()
                .map(|s| (Selection::Specialty(s.id), s.menu_label())),
            self.config.menu.root_width,
        );
        Ok(Reply::menu(texts::GREETING, buttons))
    }

    pub(super) async fn show_years(&self, specialty_id: i64) -> anyhow::Result<Vec<Reply>> {
        let listing = self.store.list_years(specialty_id).await?;
        if listing.is_empty() {
            return Ok(vec![Reply::text(texts::NO_YEARS)]);
        }

        let buttons = keyboard(
            listing
                .items
                .iter()
                .map(|y| (Selection::Year(y.id), y.label.clone())),
            self.config.menu.year_width,
        );
        let header = texts::with_parent(
            texts::SPECIALTY_LEVEL,
            listing.parent.as_deref(),
            texts::PICK_YEAR,
        );
        Ok(vec![Reply::menu(header, buttons)])
    }

    pub(super) async fn show_modules(&self, year_id: i64) -> anyhow::Result<Vec<Reply>> {
        let listing = self.store.list_modules(year_id).await?;
        if listing.is_empty() {
            return Ok(vec![Reply::text(texts::NO_MODULES)]);
        }

        let buttons = keyboard(
            listing
                .items
                .iter()
                .map(|m| (Selection::Module(m.id), m.name.clone())),
            self.config.menu.list_width,
        );
        let header = texts::with_parent(
            texts::YEAR_LEVEL,
            listing.parent.as_deref(),
            texts::PICK_MODULE,
        );
        Ok(vec![Reply::menu(header, buttons)])
    }

    pub(super) async fn show_lessons(&self, module_id: i64) -> anyhow::Result<Vec<Reply>> {
        let listing = self.store.list_lessons(module_id).await?;
        if listing.is_empty() {
            return Ok(vec![Reply::text(texts::NO_LESSONS)]);
        }

        let buttons = keyboard(
            listing
                .items
                .iter()
                .map(|l| (Selection::Lesson(l.id), l.title.clone())),
            self.config.menu.list_width,
        );
        let header = texts::with_parent(
            texts::MODULE_LEVEL,
            listing.parent.as_deref(),
            texts::PICK_LESSON,
        );
        Ok(vec![Reply::menu(header, buttons)])
    }

    /// Lesson text, then the file picker as a second message when the
    /// lesson has files.
    pub(super) async fn show_lesson(&self, lesson_id: i64) -> anyhow::Result<Vec<Reply>> {
        let Some(lesson) = self.store.get_lesson(lesson_id).await? else {
            return Ok(vec![Reply::text(texts::LESSON_NOT_FOUND)]);
        };

        let mut replies = vec![Reply::text(texts::lesson_detail(
            &lesson.title,
            lesson.summary.as_deref(),
        ))];

        let files = self.store.list_files(lesson.id).await?;
        if !files.is_empty() {
            let buttons = keyboard(
                files.iter().map(|f| (Selection::File(f.id), f.menu_label())),
                self.config.menu.list_width,
            );
            replies.push(Reply::menu(texts::FILES_HEADER, buttons));
        }
        Ok(replies)
    }

    pub(super) async fn send_file(&self, file_id: i64) -> anyhow::Result<Vec<Reply>> {
        let Some(file) = self.store.get_file(file_id).await? else {
            return Ok(vec![Reply::text(texts::FILE_NOT_FOUND)]);
        };

        let path = PathBuf::from(&file.path);
        if !self.blobs.exists(&path).await {
            tracing::warn!(file_id, path = %file.path, "stored file is missing");
            return Ok(vec![Reply::text(texts::FILE_GONE)]);
        }

        Ok(vec![Reply::Document {
            path,
            file_name: file.original_name,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn start_without_content_shows_placeholder() {
        let (ctx, _dir) = test_context().await;
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&command(STUDENT, "start", "")).await.unwrap();
        assert_eq!(replies.len(), 1);
        let tokens: Vec<&str> = replies[0]
            .keyboard()
            .unwrap()
            .buttons()
            .map(|b| b.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["no_op"]);

        let wait = bot.handle(&button(STUDENT, Selection::NoOp)).await.unwrap();
        assert_eq!(wait, vec![Reply::text(texts::WAIT_FOR_CONTENT)]);
    }

    #[tokio::test]
    async fn start_lists_specialties_one_per_row() {
        let (ctx, _dir) = test_context().await;
        ctx.store.insert_specialty("phy", "Physics").await.unwrap();
        ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&command(STUDENT, "start", "")).await.unwrap();
        let kb = replies[0].keyboard().unwrap();
        assert_eq!(kb.rows.len(), 2);
        let labels: Vec<&str> = kb.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Mathematics (math)", "Physics (phy)"]);
    }

    #[tokio::test]
    async fn specialty_without_years() {
        let (ctx, _dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let mut bot = Bot::new(&ctx);

        let replies = bot
            .handle(&button(STUDENT, Selection::Specialty(spec)))
            .await
            .unwrap();
        assert_eq!(replies, vec![Reply::text(texts::NO_YEARS)]);
        assert!(replies[0].keyboard().is_none());
    }

    #[tokio::test]
    async fn walks_down_to_a_file() {
        let (ctx, dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year1 = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        ctx.store.insert_year(spec, "Year 2").await.unwrap();
        ctx.store.insert_year(spec, "Year 3").await.unwrap();
        let module = ctx.store.insert_module(year1, "Analysis").await.unwrap();
        let lesson = ctx
            .store
            .insert_lesson(module, "Limits", Some("epsilon-delta"))
            .await
            .unwrap();
        let source = dir.path().join("td1.pdf");
        tokio::fs::write(&source, b"td").await.unwrap();
        let stored = ctx.blobs.store(&source, "td1.pdf", lesson).await.unwrap();
        let file = ctx
            .store
            .insert_file(lesson, "td", &stored.to_string_lossy(), "td1.pdf")
            .await
            .unwrap();
        let mut bot = Bot::new(&ctx);

        let years = bot
            .handle(&button(STUDENT, Selection::Specialty(spec)))
            .await
            .unwrap();
        let kb = years[0].keyboard().unwrap();
        assert_eq!(years[0].body(), Some("Specialty: Mathematics\nPick a year:"));
        assert_eq!(kb.rows.len(), 2, "three years, two per row");
        assert_eq!(kb.rows[0][0].token, format!("year:{year1}"));

        let modules = bot
            .handle(&button(STUDENT, Selection::Year(year1)))
            .await
            .unwrap();
        assert_eq!(
            modules[0].keyboard().unwrap().rows[0][0].token,
            format!("mod:{module}")
        );

        let lessons = bot
            .handle(&button(STUDENT, Selection::Module(module)))
            .await
            .unwrap();
        assert_eq!(lessons[0].body(), Some("Module: Analysis\nPick a lesson:"));

        let detail = bot
            .handle(&button(STUDENT, Selection::Lesson(lesson)))
            .await
            .unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0].body(), Some("📘 Limits\n\nepsilon-delta"));
        assert_eq!(detail[1].body(), Some(texts::FILES_HEADER));
        let picker = detail[1].keyboard().unwrap();
        assert_eq!(picker.rows[0][0].label, "td — td1.pdf");

        let delivered = bot
            .handle(&button(STUDENT, Selection::File(file)))
            .await
            .unwrap();
        assert_eq!(
            delivered,
            vec![Reply::Document {
                path: stored,
                file_name: "td1.pdf".into(),
            }]
        );
    }

    #[tokio::test]
    async fn lesson_without_files_has_no_keyboard() {
        let (ctx, _dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        let module = ctx.store.insert_module(year, "Analysis").await.unwrap();
        let lesson = ctx.store.insert_lesson(module, "Limits", None).await.unwrap();
        let mut bot = Bot::new(&ctx);

        let replies = bot
            .handle(&button(STUDENT, Selection::Lesson(lesson)))
            .await
            .unwrap();
        assert_eq!(replies, vec![Reply::text("📘 Limits\n\nNo summary yet.")]);
    }

    #[tokio::test]
    async fn empty_levels_have_no_keyboard() {
        let (ctx, _dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        let module = ctx.store.insert_module(year, "Analysis").await.unwrap();
        let mut bot = Bot::new(&ctx);

        let modules = bot.handle(&button(STUDENT, Selection::Year(year + 50))).await.unwrap();
        assert_eq!(modules, vec![Reply::text(texts::NO_MODULES)]);

        let lessons = bot.handle(&button(STUDENT, Selection::Module(module))).await.unwrap();
        assert_eq!(lessons, vec![Reply::text(texts::NO_LESSONS)]);

        let missing = bot.handle(&button(STUDENT, Selection::Lesson(999))).await.unwrap();
        assert_eq!(missing, vec![Reply::text(texts::LESSON_NOT_FOUND)]);
    }

    #[tokio::test]
    async fn missing_file_row_and_missing_blob() {
        let (ctx, dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        let module = ctx.store.insert_module(year, "Analysis").await.unwrap();
        let lesson = ctx.store.insert_lesson(module, "Limits", None).await.unwrap();
        let gone = dir.path().join("media").join("deleted.pdf");
        let file = ctx
            .store
            .insert_file(lesson, "exam", &gone.to_string_lossy(), "exam.pdf")
            .await
            .unwrap();
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&button(STUDENT, Selection::File(file))).await.unwrap();
        assert_eq!(replies, vec![Reply::text(texts::FILE_GONE)]);

        let replies = bot.handle(&button(STUDENT, Selection::File(999))).await.unwrap();
        assert_eq!(replies, vec![Reply::text(texts::FILE_NOT_FOUND)]);
    }

    #[tokio::test]
    async fn unknown_token_gets_generic_message() {
        let (ctx, _dir) = test_context().await;
        let mut bot = Bot::new(&ctx);

        let replies = bot
            .handle(&button(STUDENT, Selection::parse("quiz:4")))
            .await
            .unwrap();
        assert_eq!(replies, vec![Reply::text(texts::UNKNOWN_OPTION)]);
    }
}
