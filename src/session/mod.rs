use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dataset::Dataset;

/// Per-user state behind the session cookie. Only the auth gate creates one
/// and only logout destroys it.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    /// Most recent CSV uploaded on the sales view, kept so the map, analyze
    /// and export steps can run as separate requests.
    pub sales_upload: Option<Dataset>,
}

/// In-process session map shared across request handlers.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, username: &str) -> Uuid {
        let session = Session {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
            sales_upload: None,
        };
        let id = session.id;
        self.inner.write().await.insert(id, session);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Removing an absent session is a no-op, which makes logout idempotent.
    pub async fn remove(&self, id: Uuid) {
        self.inner.write().await.remove(&id);
    }

    pub async fn store_sales_upload(&self, id: Uuid, dataset: Dataset) {
        if let Some(session) = self.inner.write().await.get_mut(&id) {
            session.sales_upload = Some(dataset);
        }
    }

    pub async fn sales_upload(&self, id: Uuid) -> Option<Dataset> {
        self.inner
            .read()
            .await
            .get(&id)
            .and_then(|session| session.sales_upload.clone())
    }
}
