//! PostgreSQL post repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder};

use blog_core::domain::{Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn write_error(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Post already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(count = result.len(), "Fetched posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let is_new = post.id.is_none();
        let active_model: post::ActiveModel = post.into();

        let model = if is_new {
            active_model.insert(&self.db).await
        } else {
            active_model.update(&self.db).await
        }
        .map_err(write_error)?;

        tracing::debug!(post_id = model.id, is_new, "Stored post row");
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            tracing::debug!(post_id = id, "Delete matched no row");
        }

        Ok(())
    }
}
