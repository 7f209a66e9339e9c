//! In-memory post repository - used when no database is configured and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<PostId, Post>,
    last_id: PostId,
}

/// In-memory post table keyed by id, with ids assigned from 1 upward.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = match post.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(RepoError::NotFound),
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        let stored = post.with_id(id);
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}
