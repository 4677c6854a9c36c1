//! Shared test utilities for ensk-db unit tests.

pub(crate) mod helpers {
    use crate::service::ContentStore;

    /// In-memory store with migrations applied.
    pub async fn test_store() -> ContentStore {
        ContentStore::new_local(":memory:").await.unwrap()
    }

    /// `Mathematics` → `Year 1`; returns the year id.
    pub async fn seed_year(store: &ContentStore) -> i64 {
        let spec = store.insert_specialty("math", "Mathematics").await.unwrap();
        store.insert_year(spec, "Year 1").await.unwrap()
    }

    /// `Mathematics` → `Year 1` → `Analysis`; returns the module id.
    pub async fn seed_module(store: &ContentStore) -> i64 {
        let year = seed_year(store).await;
        store.insert_module(year, "Analysis").await.unwrap()
    }

    /// Full chain down to the `Limits` lesson; returns the lesson id.
    pub async fn seed_lesson(store: &ContentStore) -> i64 {
        let module = seed_module(store).await;
        store
            .insert_lesson(module, "Limits", Some("Definition and properties"))
            .await
            .unwrap()
    }
}
