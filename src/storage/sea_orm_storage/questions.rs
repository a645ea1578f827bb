//! 作业题目存储操作

use super::SeaOrmStorage;
use crate::entity::assignment_questions::{ActiveModel, Column, Entity as AssignmentQuestions};
use crate::errors::{AssignEaseError, Result};
use crate::models::assignments::{
    entities::AssignmentQuestion,
    requests::{CreateQuestionRequest, UpdateQuestionRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_question_impl(
        &self,
        req: CreateQuestionRequest,
    ) -> Result<AssignmentQuestion> {
        let result = ActiveModel {
            assignment_id: Set(req.assignment),
            question_text: Set(req.question_text),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AssignEaseError::from_db("创建题目失败", e))?;

        Ok(result.into_question())
    }

    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<AssignmentQuestion>> {
        let result = AssignmentQuestions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询题目失败", e))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn list_questions_impl(&self) -> Result<Vec<AssignmentQuestion>> {
        let questions = AssignmentQuestions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询题目列表失败", e))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<AssignmentQuestion>> {
        let Some(existing) = AssignmentQuestions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询题目失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(assignment_id) = update.assignment {
            model.assignment_id = Set(assignment_id);
        }

        if let Some(question_text) = update.question_text {
            model.question_text = Set(question_text);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_question()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新题目失败", e))?;

        Ok(Some(updated.into_question()))
    }

    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = AssignmentQuestions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除题目失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
