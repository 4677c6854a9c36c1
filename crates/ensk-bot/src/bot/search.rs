use ensk_core::enums::Selection;
use ensk_core::menu::keyboard;
use ensk_core::reply::Reply;

use super::{Bot, texts};

impl Bot<'_> {
    /// `/search <terms>`: matching lessons as `lesson:<id>` buttons.
    ///
    /// Words are rejoined with single spaces before matching.
    pub(super) async fn search(&self, args: &str) -> anyhow::Result<Vec<Reply>> {
        let term = args.split_whitespace().collect::<Vec<_>>().join(" ");
        if term.is_empty() {
            return Ok(vec![Reply::text(texts::SEARCH_USAGE)]);
        }

        let hits = self
            .store
            .search_lessons(&term, self.config.menu.effective_search_limit())
            .await?;
        if hits.is_empty() {
            return Ok(vec![Reply::text(texts::SEARCH_EMPTY)]);
        }

        let buttons = keyboard(
            hits.iter()
                .map(|hit| (Selection::Lesson(hit.lesson_id), hit.menu_label())),
            self.config.menu.list_width,
        );
        Ok(vec![Reply::menu(texts::search_header(hits.len()), buttons)])
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn blank_terms_show_usage(#[case] args: &str) {
        let (ctx, _dir) = test_context().await;
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&command(STUDENT, "search", args)).await.unwrap();
        assert_eq!(replies, vec![Reply::text(texts::SEARCH_USAGE)]);
    }

    #[tokio::test]
    async fn hits_become_lesson_buttons() {
        let (ctx, _dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        let module = ctx.store.insert_module(year, "Analysis").await.unwrap();
        let limits = ctx
            .store
            .insert_lesson(module, "Limits", Some("epsilon-delta definitions"))
            .await
            .unwrap();
        ctx.store.insert_lesson(module, "Series", None).await.unwrap();
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&command(STUDENT, "search", "LIMIT")).await.unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].body(), Some("Search results (1):"));
        let buttons: Vec<(String, String)> = replies[0]
            .keyboard()
            .unwrap()
            .buttons()
            .map(|b| (b.token.clone(), b.label.clone()))
            .collect();
        assert_eq!(
            buttons,
            vec![(format!("lesson:{limits}"), "Limits — Analysis".to_string())]
        );

        let by_summary = bot.handle(&command(STUDENT, "search", "delta")).await.unwrap();
        assert_eq!(by_summary[0].body(), Some("Search results (1):"));
    }

    #[tokio::test]
    async fn repeated_spaces_collapse_between_words() {
        let (ctx, _dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        let module = ctx.store.insert_module(year, "Analysis").await.unwrap();
        let lesson = ctx
            .store
            .insert_lesson(module, "limits of functions", None)
            .await
            .unwrap();
        let mut bot = Bot::new(&ctx);

        let replies = bot
            .handle(&command(STUDENT, "search", "  limits   of\tfunctions "))
            .await
            .unwrap();
        assert_eq!(replies[0].body(), Some("Search results (1):"));
        assert_eq!(
            replies[0].keyboard().unwrap().rows[0][0].token,
            format!("lesson:{lesson}")
        );
    }

    #[tokio::test]
    async fn no_hits() {
        let (ctx, _dir) = test_context().await;
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&command(STUDENT, "search", "topology")).await.unwrap();
        assert_eq!(replies, vec![Reply::text(texts::SEARCH_EMPTY)]);
    }

    #[tokio::test]
    async fn results_are_capped() {
        let (ctx, _dir) = test_context().await;
        let spec = ctx.store.insert_specialty("math", "Mathematics").await.unwrap();
        let year = ctx.store.insert_year(spec, "Year 1").await.unwrap();
        let module = ctx.store.insert_module(year, "Analysis").await.unwrap();
        for i in 0..25 {
            ctx.store
                .insert_lesson(module, &format!("Exercise {i}"), None)
                .await
                .unwrap();
        }
        let mut bot = Bot::new(&ctx);

        let replies = bot.handle(&command(STUDENT, "search", "exercise")).await.unwrap();
        assert_eq!(replies[0].body(), Some("Search results (20):"));
        assert_eq!(replies[0].keyboard().unwrap().buttons().count(), 20);
    }
}
