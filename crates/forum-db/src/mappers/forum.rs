//! Forum entity <-> model mapper

use forum_core::entities::Forum;
use forum_core::value_objects::{AuthorType, DocumentId};

use crate::models::ForumModel;

impl From<ForumModel> for Forum {
    fn from(model: ForumModel) -> Self {
        Forum {
            id: DocumentId::new(model.id),
            title: model.title,
            author_id: model.author_id.map(DocumentId::new),
            author_name: model.author_name,
            author_type: AuthorType::parse(&model.author_type),
            members: model.members.into_iter().map(DocumentId::new).collect(),
            created_at: model.created_at,
        }
    }
}
