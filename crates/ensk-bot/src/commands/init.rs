use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// What `ensk init` prepared.
#[derive(Debug, Serialize)]
struct InitReport {
    db_path: String,
    media_dir: String,
    specialties: usize,
    admins: usize,
    token_configured: bool,
}

/// Handle `ensk init`. Opening the context already ran migrations and
/// created the media directory; this reports what is there.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = InitReport {
        db_path: ctx.config.storage.db_path.clone(),
        media_dir: ctx.blobs.root().display().to_string(),
        specialties: ctx.store.list_specialties().await?.len(),
        admins: ctx.config.bot.admin_ids.len(),
        token_configured: ctx.config.bot.is_configured(),
    };
    tracing::info!(db = %report.db_path, media = %report.media_dir, "storage initialized");
    output(&report, flags.format, render_report)
}

fn render_report(report: &InitReport) -> String {
    format!(
        "database: {}\nmedia: {}\nspecialties: {}\nadmins: {}\ntoken: {}",
        report.db_path,
        report.media_dir,
        report.specialties,
        report.admins,
        if report.token_configured {
            "configured"
        } else {
            "missing"
        }
    )
}
