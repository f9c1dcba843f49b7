//! Post, Comment and Like entity <-> model mappers

use forum_core::entities::{Comment, Like, Post};
use forum_core::value_objects::{AuthorType, DocumentId};

use crate::models::{CommentModel, LikeModel, PostModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: DocumentId::new(model.id),
            forum_id: DocumentId::new(model.forum_id),
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            author_type: AuthorType::parse(&model.author_type),
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: DocumentId::new(model.id),
            forum_id: DocumentId::new(model.forum_id),
            post_id: DocumentId::new(model.post_id),
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            author_type: AuthorType::parse(&model.author_type),
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: DocumentId::new(model.id),
            forum_id: DocumentId::new(model.forum_id),
            post_id: DocumentId::new(model.post_id),
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            created_at: model.created_at,
        }
    }
}
