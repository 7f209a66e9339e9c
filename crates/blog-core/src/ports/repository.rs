use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::RepoError;

/// Post repository - the single-table persistence collaborator.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All stored posts, ordered by id.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert when `post.id` is `None`, otherwise overwrite the existing row.
    ///
    /// Returns the stored record with its id populated. Overwriting an id
    /// that is not stored fails with [`RepoError::NotFound`].
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by its id. Deleting an unknown id is a no-op.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
