//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use blog_core::domain::{Post, PostDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub tags: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            tags: model.tags,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl ActiveModel {
    /// Row for a new post; the id is left to the `SERIAL` default.
    pub fn for_insert(draft: &PostDraft, at: DateTimeUtc) -> Self {
        Self {
            id: NotSet,
            title: Set(draft.title().to_owned()),
            content: Set(draft.content().to_owned()),
            category: Set(draft.category().to_owned()),
            tags: Set(draft.tags().cloned()),
            created_at: Set(at.into()),
            updated_at: Set(at.into()),
        }
    }

    /// Full replacement of post `id`; `created_at` is never written.
    pub fn for_update(id: i32, draft: &PostDraft, at: DateTimeUtc) -> Self {
        Self {
            id: Unchanged(id),
            title: Set(draft.title().to_owned()),
            content: Set(draft.content().to_owned()),
            category: Set(draft.category().to_owned()),
            tags: Set(draft.tags().cloned()),
            created_at: NotSet,
            updated_at: Set(at.into()),
        }
    }
}
