//! Shared test utilities for uplift-store integration tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::UpliftDb;
    use crate::service::StoreService;

    /// Create an in-memory StoreService.
    pub async fn test_service() -> StoreService {
        let db = UpliftDb::open_local(":memory:").await.unwrap();
        StoreService::from_db(db)
    }

    /// Create a project and return its ID.
    pub async fn test_project(svc: &StoreService) -> String {
        svc.create_project("Acme Store", Some("Acme Inc"), None)
            .await
            .unwrap()
            .id
    }
}
