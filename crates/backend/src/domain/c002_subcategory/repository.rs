use contracts::domain::c002_subcategory::aggregate::{Subcategory, SubcategoryId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "c002_subcategory")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub parent_category_id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Subcategory {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| {
            tracing::warn!("c002_subcategory row has a non-uuid id: {}", m.id);
            Uuid::new_v4()
        });
        Subcategory {
            id: SubcategoryId(uuid),
            parent_category_id: m.parent_category_id,
            name: m.name,
            code: m.code,
            description: m.description,
            created_by: m.created_by,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> Result<Vec<Subcategory>, sea_orm::DbErr> {
    let mut items: Vec<Subcategory> = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(items)
}

/// Exact-match probe used by the uniqueness check
pub async fn find_by_code(code: &str) -> Result<Option<Subcategory>, sea_orm::DbErr> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Subcategory) -> Result<Uuid, sea_orm::DbErr> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        parent_category_id: Set(aggregate.parent_category_id.clone()),
        name: Set(aggregate.name.clone()),
        code: Set(aggregate.code.clone()),
        description: Set(aggregate.description.clone()),
        created_by: Set(aggregate.created_by.clone()),
        created_at: Set(aggregate.created_at),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
