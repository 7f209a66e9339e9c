use serde::{Deserialize, Serialize};

/// Storage-assigned post identifier.
pub type PostId = i64;

/// Post entity - a blog post written by a named author.
///
/// `id` is `None` until the post has been stored for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<PostId>,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    /// Create a post that has not been stored yet.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Same post bound to `id`.
    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = Some(id);
        self
    }

    /// True when `other` is a different record carrying the same
    /// title, content and author.
    pub fn duplicates(&self, other: &Post) -> bool {
        self.id != other.id
            && self.title == other.title
            && self.content == other.content
            && self.author == other.author
    }
}
