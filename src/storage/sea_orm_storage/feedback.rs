//! 教师反馈存储操作

use super::SeaOrmStorage;
use crate::entity::teacher_feedback::{ActiveModel, Column, Entity as TeacherFeedbacks};
use crate::errors::{AssignEaseError, Result};
use crate::models::submissions::{
    entities::TeacherFeedback,
    requests::{CreateFeedbackRequest, UpdateFeedbackRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_feedback_impl(
        &self,
        req: CreateFeedbackRequest,
    ) -> Result<TeacherFeedback> {
        // teacher 必须由服务层确保已设置
        let teacher_id = req.teacher.ok_or_else(|| {
            AssignEaseError::internal("teacher must be set before calling create_feedback")
        })?;

        let result = ActiveModel {
            submission_id: Set(req.submission),
            teacher_id: Set(teacher_id),
            feedback: Set(req.feedback),
            resubmission_requested: Set(req.resubmission_requested),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AssignEaseError::from_db("创建教师反馈失败", e))?;

        Ok(result.into_feedback())
    }

    pub async fn get_feedback_by_id_impl(&self, id: i64) -> Result<Option<TeacherFeedback>> {
        let result = TeacherFeedbacks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询教师反馈失败", e))?;

        Ok(result.map(|m| m.into_feedback()))
    }

    pub async fn list_feedback_impl(&self) -> Result<Vec<TeacherFeedback>> {
        let rows = TeacherFeedbacks::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询教师反馈列表失败", e))?;

        Ok(rows.into_iter().map(|m| m.into_feedback()).collect())
    }

    pub async fn update_feedback_impl(
        &self,
        id: i64,
        update: UpdateFeedbackRequest,
    ) -> Result<Option<TeacherFeedback>> {
        let Some(existing) = TeacherFeedbacks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询教师反馈失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(submission_id) = update.submission {
            model.submission_id = Set(submission_id);
        }
        if let Some(teacher_id) = update.teacher {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(feedback) = update.feedback {
            model.feedback = Set(feedback);
        }
        if let Some(requested) = update.resubmission_requested {
            model.resubmission_requested = Set(requested);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_feedback()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新教师反馈失败", e))?;

        Ok(Some(updated.into_feedback()))
    }

    pub async fn delete_feedback_impl(&self, id: i64) -> Result<bool> {
        let result = TeacherFeedbacks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除教师反馈失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
