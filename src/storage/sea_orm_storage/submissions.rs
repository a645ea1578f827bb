//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignment_questions::{
    Column as QuestionColumn, Entity as AssignmentQuestions,
};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{AssignEaseError, Result};
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::CreateSubmissionRequest,
    responses::SubmissionResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建提交，(student, assignment, question) 唯一
    pub async fn create_submission_impl(&self, req: CreateSubmissionRequest) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        // student 必须由服务层确保已设置
        let student_id = req.student.ok_or_else(|| {
            AssignEaseError::internal("student must be set before calling create_submission")
        })?;

        let model = ActiveModel {
            student_id: Set(student_id),
            assignment_id: Set(req.assignment),
            question_id: Set(req.question),
            code: Set(req.code),
            status: Set(req.status.to_string()),
            feedback: Set(req.feedback),
            submitted_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("创建提交失败", e))?;

        Ok(result.into_submission())
    }

    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询提交失败", e))?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn list_submissions_impl(&self, student_id: Option<i64>) -> Result<Vec<Submission>> {
        let mut select = Submissions::find();
        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let submissions = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询提交列表失败", e))?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 引用该题目的第一条提交
    pub async fn get_first_submission_by_question_impl(
        &self,
        question_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::QuestionId.eq(question_id))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询提交失败", e))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 更新提交状态
    pub async fn update_submission_status_impl(
        &self,
        id: i64,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>> {
        let Some(existing) = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询提交失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.status = Set(status.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新提交状态失败", e))?;

        Ok(Some(updated.into_submission()))
    }

    pub async fn delete_submission_impl(&self, id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除提交失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 补全作业标题、班级名称与题目内容
    pub async fn describe_submissions_impl(
        &self,
        submissions: Vec<Submission>,
    ) -> Result<Vec<SubmissionResponse>> {
        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let mut assignment_ids: Vec<i64> = submissions.iter().map(|s| s.assignment_id).collect();
        assignment_ids.sort_unstable();
        assignment_ids.dedup();
        let assignments: HashMap<i64, (String, i64)> = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询作业失败", e))?
            .into_iter()
            .map(|a| (a.id, (a.title, a.class_id)))
            .collect();

        let class_names = self
            .class_names(assignments.values().map(|(_, class_id)| *class_id).collect())
            .await?;

        let mut question_ids: Vec<i64> = submissions.iter().map(|s| s.question_id).collect();
        question_ids.sort_unstable();
        question_ids.dedup();
        let question_texts: HashMap<i64, String> = AssignmentQuestions::find()
            .filter(QuestionColumn::Id.is_in(question_ids))
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询题目失败", e))?
            .into_iter()
            .map(|q| (q.id, q.question_text))
            .collect();

        Ok(submissions
            .into_iter()
            .map(|s| {
                let (title, subject) = match assignments.get(&s.assignment_id) {
                    Some((title, class_id)) => (
                        title.clone(),
                        class_names.get(class_id).cloned().unwrap_or_default(),
                    ),
                    None => (String::new(), String::new()),
                };
                SubmissionResponse {
                    id: s.id,
                    title,
                    subject,
                    assignment: s.assignment_id,
                    student: s.student_id,
                    question: s.question_id,
                    questiontext: question_texts
                        .get(&s.question_id)
                        .cloned()
                        .unwrap_or_default(),
                    code: s.code,
                    status: s.status,
                    feedback: s.feedback,
                    submitted_at: s.submitted_at,
                    updated_at: s.updated_at,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{assignment, class, language, memory_storage, question, user};
    use crate::models::submissions::{
        entities::SubmissionStatus,
        requests::{CreateFeedbackRequest, CreateSubmissionRequest},
    };
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    fn submission(student: i64, assignment: i64, question: i64) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            assignment,
            question,
            code: "print('hi')".into(),
            status: SubmissionStatus::Submitted,
            student: Some(student),
            feedback: None,
        }
    }

    #[tokio::test]
    async fn test_submission_is_unique_per_triple() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c = class(&storage, &teacher, "Py").await;
        let py = language(&storage, "Python").await;
        let a = assignment(&storage, &c, &py, "Loops").await;
        let q1 = question(&storage, &a, "for").await;
        let q2 = question(&storage, &a, "while").await;

        storage
            .create_submission(submission(student.id, a.id, q1.id))
            .await
            .unwrap();
        // 同一作业的另一道题可以提交
        storage
            .create_submission(submission(student.id, a.id, q2.id))
            .await
            .unwrap();
        let err = storage
            .create_submission(submission(student.id, a.id, q1.id))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");
    }

    #[tokio::test]
    async fn test_describe_submission_fields() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c = class(&storage, &teacher, "Py").await;
        let py = language(&storage, "Python").await;
        let a = assignment(&storage, &c, &py, "Loops").await;
        let q = question(&storage, &a, "Write a for loop").await;

        storage
            .create_submission(submission(student.id, a.id, q.id))
            .await
            .unwrap();

        let rows = storage.list_submissions(Some(student.id)).await.unwrap();
        let described = storage.describe_submissions(rows).await.unwrap();
        assert_eq!(described.len(), 1);
        assert_eq!(described[0].title, "Loops");
        assert_eq!(described[0].subject, "Py");
        assert_eq!(described[0].questiontext, "Write a for loop");
        assert_eq!(described[0].status, SubmissionStatus::Submitted);
    }

    #[tokio::test]
    async fn test_first_submission_by_question_and_status_update() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let s1 = user(&storage, "s1", UserRole::Student).await;
        let s2 = user(&storage, "s2", UserRole::Student).await;
        let c = class(&storage, &teacher, "Py").await;
        let py = language(&storage, "Python").await;
        let a = assignment(&storage, &c, &py, "Loops").await;
        let q = question(&storage, &a, "for").await;

        let first = storage
            .create_submission(submission(s1.id, a.id, q.id))
            .await
            .unwrap();
        storage
            .create_submission(submission(s2.id, a.id, q.id))
            .await
            .unwrap();

        let found = storage
            .get_first_submission_by_question(q.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first.id);
        assert!(
            storage
                .get_first_submission_by_question(q.id + 100)
                .await
                .unwrap()
                .is_none()
        );

        let updated = storage
            .update_submission_status(first.id, SubmissionStatus::Checked)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, SubmissionStatus::Checked);
        assert!(
            storage
                .update_submission_status(9999, SubmissionStatus::Checked)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_deleting_class_cascades_through_tree() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c = class(&storage, &teacher, "Py").await;
        let py = language(&storage, "Python").await;
        let a = assignment(&storage, &c, &py, "Loops").await;
        let q = question(&storage, &a, "for").await;
        let sub = storage
            .create_submission(submission(student.id, a.id, q.id))
            .await
            .unwrap();
        let feedback = storage
            .create_feedback(CreateFeedbackRequest {
                submission: sub.id,
                feedback: "Nice".into(),
                resubmission_requested: false,
                teacher: Some(teacher.id),
            })
            .await
            .unwrap();

        assert!(storage.delete_class(c.id).await.unwrap());

        assert!(storage.get_assignment_by_id(a.id).await.unwrap().is_none());
        assert!(storage.get_question_by_id(q.id).await.unwrap().is_none());
        assert!(storage.get_submission_by_id(sub.id).await.unwrap().is_none());
        assert!(storage.get_feedback_by_id(feedback.id).await.unwrap().is_none());
        // 用户与语言不受影响
        assert!(storage.get_user_by_id(student.id).await.unwrap().is_some());
        assert!(storage.get_language_by_id(py.id).await.unwrap().is_some());
    }
}
