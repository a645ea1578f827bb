//! 编程语言实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "programming_languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub language_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_language(self) -> crate::models::languages::entities::ProgrammingLanguage {
        crate::models::languages::entities::ProgrammingLanguage {
            id: self.id,
            language_name: self.language_name,
        }
    }
}
