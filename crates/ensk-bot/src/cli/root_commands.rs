use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the bot against stdin/stdout.
    Console(ConsoleArgs),
    /// Print every specialty, year, module and lesson.
    Tree,
    /// Create the database and media directory.
    Init,
}

/// Arguments for `ensk console`.
#[derive(Clone, Debug, Args)]
pub struct ConsoleArgs {
    /// User id the console speaks as (must be in bot.admin_ids for /admin)
    #[arg(long, default_value_t = 0)]
    pub user_id: i64,

    /// Chat id for the session (defaults to the user id)
    #[arg(long)]
    pub chat_id: Option<i64>,
}

impl ConsoleArgs {
    #[must_use]
    pub fn chat_id(&self) -> i64 {
        self.chat_id.unwrap_or(self.user_id)
    }
}
