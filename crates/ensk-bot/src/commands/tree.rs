use ensk_core::responses::TreeRow;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ensk tree`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx.store.list_full_tree().await?;
    output(&rows, flags.format, |rows| render_rows(rows))
}

fn render_rows(rows: &[TreeRow]) -> String {
    if rows.is_empty() {
        return "(no content)".to_string();
    }
    rows.iter().map(TreeRow::render).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_or_placeholder() {
        assert_eq!(render_rows(&[]), "(no content)");

        let rows = vec![TreeRow {
            specialty: Some("Mathematics".into()),
            year: Some("Year 1".into()),
            module: None,
            lesson: None,
        }];
        assert_eq!(render_rows(&rows), "Mathematics | Year 1 | - | -");
    }
}
