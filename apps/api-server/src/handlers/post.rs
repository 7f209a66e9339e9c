//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use validator::Validate;

use blog_core::DomainError;
use blog_core::domain::{Post, PostId};
use blog_shared::PostPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Map a validated request body onto the domain post.
fn into_post(payload: PostPayload) -> Post {
    Post {
        id: payload.id,
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        author: payload.author.unwrap_or_default(),
    }
}

fn post_not_found(id: PostId) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
}

/// GET /post
///
/// An empty store answers 404 rather than an empty array.
pub async fn find_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Retrieving list of posts");
    let posts = state.posts.find_all().await?;

    if posts.is_empty() {
        tracing::warn!("Post list is empty");
        return Err(AppError::NotFound("No posts stored".to_string()));
    }

    tracing::info!(count = posts.len(), "Post list found");
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /post/{id}
pub async fn find_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(post_id = id, "Finding post");

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /post
/// Body: { "title": "...", "content": "...", "author": "..." }
///
/// Always inserts; an id in the body is validated and then discarded so
/// storage assigns a fresh one.
pub async fn save_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let mut payload = body.into_inner();
    tracing::info!(?payload, "Creating post");

    if let Err(e) = payload.validate() {
        tracing::error!(errors = %e, "Post not created");
        return Err(DomainError::Validation(e.to_string()).into());
    }
    payload.id = None;

    let saved = state.posts.save(into_post(payload)).await?;
    tracing::info!(post_id = saved.id, "Post created");

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /post/{id}
///
/// The path id always wins over any id in the body. An invalid body
/// answers 404, and success answers 201 echoing the request.
pub async fn update_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut payload = body.into_inner();
    payload.id = Some(id);
    tracing::info!(post_id = id, ?payload, "Updating post");

    if let Err(e) = payload.validate() {
        tracing::warn!(post_id = id, errors = %e, "Rejected post update");
        return Err(post_not_found(id).into());
    }

    let post = into_post(payload);
    state.posts.save(post.clone()).await?;
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Created().json(post))
}

/// DELETE /post/{id}
pub async fn delete_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(post_id = id, "Deleting post");

    if state.posts.find_by_id(id).await?.is_none() {
        tracing::warn!(post_id = id, "Post to delete not found");
        return Err(post_not_found(id).into());
    }

    state.posts.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
