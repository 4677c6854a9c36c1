use tokio::io::BufReader;

use crate::bot::{Bot, serve};
use crate::cli::root_commands::ConsoleArgs;
use crate::context::AppContext;
use crate::transport::ConsoleTransport;

/// Handle `ensk console`: one chat on stdin/stdout until EOF.
pub async fn handle(args: &ConsoleArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let chat_id = args.chat_id();
    tracing::info!(
        chat_id,
        user_id = args.user_id,
        admin = ctx.config.bot.is_admin(args.user_id),
        "console session started"
    );

    let mut transport = ConsoleTransport::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        chat_id,
        args.user_id,
    );
    let mut bot = Bot::new(ctx);
    serve(&mut bot, &mut transport).await
}
