//! 用户资料实体（与用户一对一）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub role: String,
    pub name: Option<String>,
    pub enrollment_number: Option<String>,
    pub tid: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_profile(self) -> crate::models::users::entities::Profile {
        use crate::models::users::entities::{Profile, UserRole};

        Profile {
            id: self.id,
            user_id: self.user_id,
            // 库中只会写入合法角色，无法识别时按学生处理
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            name: self.name,
            enrollment_number: self.enrollment_number,
            tid: self.tid,
        }
    }
}
