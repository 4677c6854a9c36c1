use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Console(args) => commands::console::handle(&args, ctx).await,
        Commands::Tree => commands::tree::handle(ctx, flags).await,
        Commands::Init => commands::init::handle(ctx, flags).await,
    }
}
