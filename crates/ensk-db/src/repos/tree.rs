//! Flattened admin overview of the whole hierarchy.

use ensk_core::responses::TreeRow;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ContentStore;

/// Maximum rows returned by `list_full_tree`.
pub const MAX_TREE_ROWS: u32 = 200;

impl ContentStore {
    /// One row per leaf path via LEFT JOINs, so childless nodes still appear
    /// with the missing levels as `None`.
    pub async fn list_full_tree(&self) -> Result<Vec<TreeRow>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT s.name, y.year_label, m.module_name, l.title
                 FROM specialties s
                 LEFT JOIN years y ON y.specialty_id = s.id
                 LEFT JOIN modules m ON m.year_id = y.id
                 LEFT JOIN lessons l ON l.module_id = m.id
                 ORDER BY s.name, y.id, m.module_name, l.title
                 LIMIT ?1",
                [i64::from(MAX_TREE_ROWS)],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(TreeRow {
                specialty: get_opt_string(&row, 0)?,
                year: get_opt_string(&row, 1)?,
                module: get_opt_string(&row, 2)?,
                lesson: get_opt_string(&row, 3)?,
            });
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_TREE_ROWS;
    use crate::test_support::helpers::test_store;

    #[tokio::test]
    async fn empty_store_has_no_rows() {
        let store = test_store().await;
        assert!(store.list_full_tree().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_levels_render_as_dash() {
        let store = test_store().await;
        let math = store.insert_specialty("math", "Mathematics").await.unwrap();
        store.insert_specialty("phy", "Physics").await.unwrap();
        let year = store.insert_year(math, "Year 1").await.unwrap();
        let module = store.insert_module(year, "Algebra").await.unwrap();
        store.insert_lesson(module, "Groups", None).await.unwrap();

        let rendered: Vec<String> = store
            .list_full_tree()
            .await
            .unwrap()
            .iter()
            .map(ensk_core::responses::TreeRow::render)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Mathematics | Year 1 | Algebra | Groups".to_string(),
                "Physics | - | - | -".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn capped_at_limit() {
        let store = test_store().await;
        for i in 0..(MAX_TREE_ROWS + 5) {
            store
                .insert_specialty(&format!("s{i}"), &format!("Specialty {i:03}"))
                .await
                .unwrap();
        }
        assert_eq!(
            store.list_full_tree().await.unwrap().len(),
            MAX_TREE_ROWS as usize
        );
    }
}
