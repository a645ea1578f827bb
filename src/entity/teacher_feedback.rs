//! 教师反馈实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub teacher_id: i64,
    #[sea_orm(column_type = "Text")]
    pub feedback: String,
    pub resubmission_requested: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_feedback(self) -> crate::models::submissions::entities::TeacherFeedback {
        use crate::models::submissions::entities::TeacherFeedback;
        use chrono::{DateTime, Utc};

        TeacherFeedback {
            id: self.id,
            submission_id: self.submission_id,
            teacher_id: self.teacher_id,
            feedback: self.feedback,
            resubmission_requested: self.resubmission_requested,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
