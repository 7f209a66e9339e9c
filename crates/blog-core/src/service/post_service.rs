//! Post use-case service.
//!
//! # Responsibility
//! - Forward reads and deletes to the repository.
//! - Reject saves that would store a second post with the same
//!   title, content and author under a different id.
//!
//! # Invariants
//! - The duplicate scan reads every stored post before each save.
//! - Scan and write are separate repository calls; two concurrent
//!   identical creates can both pass the scan.

use std::sync::Arc;

use crate::domain::{Post, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Post service facade over a repository implementation.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let post = self.repo.find_by_id(id).await?;
        match &post {
            Some(post) => tracing::info!(post_id = id, ?post, "Post found"),
            None => tracing::info!(post_id = id, "Post not found"),
        }
        Ok(post)
    }

    pub async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.find_all().await?;
        tracing::info!(count = posts.len(), "Loaded post list");
        Ok(posts)
    }

    /// Store `post` unless another record already carries its
    /// title, content and author.
    pub async fn save(&self, post: Post) -> Result<Post, DomainError> {
        if !self.has_no_match(&post).await? {
            tracing::error!(?post, "Post conflicts with an existing record");
            return Err(DomainError::Conflict(format!(
                "a post titled '{}' by '{}' with the same content already exists",
                post.title, post.author
            )));
        }

        let saved = self.repo.save(post).await?;
        tracing::info!(post = ?saved, "Post saved");
        Ok(saved)
    }

    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    /// True when no stored post other than `post` itself shares its
    /// title, content and author.
    ///
    /// An unsaved post (no id) is compared against every stored row.
    pub async fn has_no_match(&self, post: &Post) -> Result<bool, DomainError> {
        let stored = self.repo.find_all().await?;
        Ok(!stored.iter().any(|existing| existing.duplicates(post)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::RepoError;

    /// Repository double that serves a fixed row set and counts writes.
    #[derive(Default)]
    struct FakeRepository {
        rows: Vec<Post>,
        saves: Mutex<Vec<Post>>,
        deletes: Mutex<Vec<PostId>>,
        fail_writes: bool,
    }

    impl FakeRepository {
        fn with_rows(rows: Vec<Post>) -> Self {
            Self {
                rows,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl PostRepository for FakeRepository {
        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.rows.clone())
        }

        async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
            Ok(self.rows.iter().find(|p| p.id == Some(id)).cloned())
        }

        async fn save(&self, post: Post) -> Result<Post, RepoError> {
            if self.fail_writes {
                return Err(RepoError::Query("write rejected".to_string()));
            }
            self.saves.lock().unwrap().push(post.clone());
            Ok(match post.id {
                Some(_) => post,
                None => post.with_id(self.rows.len() as PostId + 1),
            })
        }

        async fn delete(&self, id: PostId) -> Result<(), RepoError> {
            if self.fail_writes {
                return Err(RepoError::Query("write rejected".to_string()));
            }
            self.deletes.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn stored(id: PostId) -> Post {
        Post::new("title", "content", "author").with_id(id)
    }

    fn service(repo: &Arc<FakeRepository>) -> PostService {
        PostService::new(repo.clone())
    }

    #[tokio::test]
    async fn find_all_returns_every_row() {
        let repo = Arc::new(FakeRepository::with_rows(vec![
            stored(1),
            stored(2),
            stored(3),
        ]));
        assert_eq!(service(&repo).find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let repo = Arc::new(FakeRepository::default());
        assert!(service(&repo).find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_matching_post() {
        let repo = Arc::new(FakeRepository::with_rows(vec![stored(1)]));
        let post = service(&repo).find_by_id(1).await.unwrap().unwrap();
        assert_eq!(post, stored(1));
    }

    #[tokio::test]
    async fn find_by_id_unknown_is_none() {
        let repo = Arc::new(FakeRepository::with_rows(vec![stored(1)]));
        assert!(service(&repo).find_by_id(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_new_post_assigns_id() {
        let repo = Arc::new(FakeRepository::default());
        let saved = service(&repo)
            .save(Post::new("title", "content", "author"))
            .await
            .unwrap();
        assert_eq!(saved.id, Some(1));
        assert_eq!(repo.saves.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_existing_post_with_unchanged_fields_is_allowed() {
        let repo = Arc::new(FakeRepository::with_rows(vec![stored(1)]));
        let saved = service(&repo).save(stored(1)).await.unwrap();
        assert_eq!(saved, stored(1));
    }

    #[tokio::test]
    async fn save_unsaved_duplicate_is_conflict_and_not_written() {
        let repo = Arc::new(FakeRepository::with_rows(vec![stored(1)]));
        let result = service(&repo)
            .save(Post::new("title", "content", "author"))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert!(repo.saves.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_duplicate_under_other_id_is_conflict() {
        let repo = Arc::new(FakeRepository::with_rows(vec![stored(1)]));
        let result = service(&repo).save(stored(2)).await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn save_propagates_repository_failure() {
        let repo = Arc::new(FakeRepository {
            fail_writes: true,
            ..FakeRepository::default()
        });
        let result = service(&repo)
            .save(Post::new("title", "content", "author"))
            .await;
        assert!(matches!(result, Err(DomainError::Repo(RepoError::Query(_)))));
    }

    #[tokio::test]
    async fn has_no_match_ignores_the_post_itself() {
        let repo = Arc::new(FakeRepository::with_rows(vec![stored(1)]));
        let service = service(&repo);
        assert!(service.has_no_match(&stored(1)).await.unwrap());
        assert!(!service.has_no_match(&stored(2)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_forwards_without_existence_check() {
        let repo = Arc::new(FakeRepository::default());
        service(&repo).delete(42).await.unwrap();
        assert_eq!(*repo.deletes.lock().unwrap(), vec![42]);
    }

    #[tokio::test]
    async fn delete_propagates_repository_failure() {
        let repo = Arc::new(FakeRepository {
            fail_writes: true,
            ..FakeRepository::default()
        });
        assert!(service(&repo).delete(1).await.is_err());
    }
}
