//! 作业存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::assignment_questions::{
    Column as QuestionColumn, Entity as AssignmentQuestions,
};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::class_students::{Column as ClassStudentColumn, Entity as ClassStudents};
use crate::entity::programming_languages::{
    Column as LanguageColumn, Entity as ProgrammingLanguages,
};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{AssignEaseError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentQuestion},
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    responses::AssignmentResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        // teacher 必须由服务层确保已设置
        let teacher_id = req.teacher.ok_or_else(|| {
            AssignEaseError::internal("teacher must be set before calling create_assignment")
        })?;

        let model = ActiveModel {
            class_id: Set(req.class_assigned),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date),
            teacher_id: Set(teacher_id),
            language_id: Set(req.language),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("创建作业失败", e))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询作业失败", e))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    pub async fn list_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let assignments = Assignments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询作业列表失败", e))?;

        Ok(assignments.into_iter().map(|m| m.into_assignment()).collect())
    }

    pub async fn list_assignments_by_class_impl(&self, class_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_in_classes(vec![class_id]).await
    }

    /// 学生所在全部班级的作业
    pub async fn list_assignments_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Assignment>> {
        let class_ids = self.enrolled_class_ids(student_id).await?;
        self.list_assignments_in_classes(class_ids).await
    }

    /// 学生加入的班级 ID
    pub(crate) async fn enrolled_class_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        ClassStudents::find()
            .select_only()
            .column(ClassStudentColumn::ClassId)
            .filter(ClassStudentColumn::StudentId.eq(student_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询学生班级失败", e))
    }

    async fn list_assignments_in_classes(&self, class_ids: Vec<i64>) -> Result<Vec<Assignment>> {
        if class_ids.is_empty() {
            return Ok(Vec::new());
        }

        let assignments = Assignments::find()
            .filter(Column::ClassId.is_in(class_ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询作业列表失败", e))?;

        Ok(assignments.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(existing) = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询作业失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(class_id) = update.class_assigned {
            model.class_id = Set(class_id);
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date);
        }
        if let Some(language_id) = update.language {
            model.language_id = Set(language_id);
        }
        if let Some(teacher_id) = update.teacher {
            model.teacher_id = Set(teacher_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_assignment()));
        }

        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新作业失败", e))?;

        Ok(Some(updated.into_assignment()))
    }

    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除作业失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 补全作业详情
    ///
    /// 每类关联数据一次批量查询；student_id 为 None 时 is_submitted 恒为 false。
    pub async fn describe_assignments_impl(
        &self,
        assignments: Vec<Assignment>,
        student_id: Option<i64>,
    ) -> Result<Vec<AssignmentResponse>> {
        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();

        let class_names = self
            .class_names(assignments.iter().map(|a| a.class_id).collect())
            .await?;

        let mut language_ids: Vec<i64> = assignments.iter().map(|a| a.language_id).collect();
        language_ids.sort_unstable();
        language_ids.dedup();
        let language_names: HashMap<i64, String> = ProgrammingLanguages::find()
            .filter(LanguageColumn::Id.is_in(language_ids))
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询编程语言失败", e))?
            .into_iter()
            .map(|l| (l.id, l.language_name))
            .collect();

        let mut questions: HashMap<i64, Vec<AssignmentQuestion>> = HashMap::new();
        for question in AssignmentQuestions::find()
            .filter(QuestionColumn::AssignmentId.is_in(assignment_ids.clone()))
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询作业题目失败", e))?
        {
            questions
                .entry(question.assignment_id)
                .or_default()
                .push(question.into_question());
        }

        let submitted: HashSet<i64> = match student_id {
            Some(student_id) => Submissions::find()
                .select_only()
                .column(SubmissionColumn::AssignmentId)
                .filter(SubmissionColumn::StudentId.eq(student_id))
                .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
                .into_tuple::<i64>()
                .all(&self.db)
                .await
                .map_err(|e| AssignEaseError::from_db("查询提交状态失败", e))?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        Ok(assignments
            .into_iter()
            .map(|a| AssignmentResponse {
                id: a.id,
                class_name: class_names.get(&a.class_id).cloned().unwrap_or_default(),
                language_name: language_names
                    .get(&a.language_id)
                    .cloned()
                    .unwrap_or_default(),
                questions: questions.remove(&a.id).unwrap_or_default(),
                is_submitted: submitted.contains(&a.id),
                title: a.title,
                description: a.description,
                due_date: a.due_date,
                class_assigned: a.class_id,
                teacher: a.teacher_id,
                language: a.language_id,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{assignment, class, language, memory_storage, question, user};
    use crate::models::class_students::requests::CreateClassStudentRequest;
    use crate::models::submissions::{
        entities::SubmissionStatus, requests::CreateSubmissionRequest,
    };
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_describe_assignment_fields() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let c = class(&storage, &teacher, "Rust 101").await;
        let rust = language(&storage, "Rust").await;
        let a = assignment(&storage, &c, &rust, "Ownership").await;
        question(&storage, &a, "Q1").await;
        question(&storage, &a, "Q2").await;

        let details = storage.describe_assignments(vec![a], None).await.unwrap();
        let detail = &details[0];
        assert_eq!(detail.class_name, "Rust 101");
        assert_eq!(detail.language_name, "Rust");
        assert_eq!(detail.teacher, teacher.id);
        assert_eq!(detail.questions.len(), 2);
        assert_eq!(detail.questions[0].question_text, "Q1");
        assert!(!detail.is_submitted);
    }

    #[tokio::test]
    async fn test_is_submitted_depends_on_student() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let s1 = user(&storage, "s1", UserRole::Student).await;
        let s2 = user(&storage, "s2", UserRole::Student).await;
        let c = class(&storage, &teacher, "Rust 101").await;
        let rust = language(&storage, "Rust").await;
        let a = assignment(&storage, &c, &rust, "Ownership").await;
        let q = question(&storage, &a, "Q1").await;

        storage
            .create_submission(CreateSubmissionRequest {
                assignment: a.id,
                question: q.id,
                code: "fn main() {}".into(),
                status: SubmissionStatus::Submitted,
                student: Some(s1.id),
                feedback: None,
            })
            .await
            .unwrap();

        let for_s1 = storage
            .describe_assignments(vec![a.clone()], Some(s1.id))
            .await
            .unwrap();
        let for_s2 = storage
            .describe_assignments(vec![a], Some(s2.id))
            .await
            .unwrap();
        assert!(for_s1[0].is_submitted);
        assert!(!for_s2[0].is_submitted);
    }

    #[tokio::test]
    async fn test_assignments_for_student_span_enrolled_classes() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c1 = class(&storage, &teacher, "A").await;
        let c2 = class(&storage, &teacher, "B").await;
        let c3 = class(&storage, &teacher, "C").await;
        let rust = language(&storage, "Rust").await;
        assignment(&storage, &c1, &rust, "a1").await;
        assignment(&storage, &c2, &rust, "a2").await;
        assignment(&storage, &c3, &rust, "a3").await;

        assert!(
            storage
                .list_assignments_for_student(student.id)
                .await
                .unwrap()
                .is_empty()
        );

        for class_id in [c1.id, c2.id] {
            storage
                .create_class_student(CreateClassStudentRequest {
                    student: student.id,
                    class_assigned: class_id,
                })
                .await
                .unwrap();
        }

        let titles: Vec<_> = storage
            .list_assignments_for_student(student.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["a1".to_string(), "a2".to_string()]);
        assert!(storage.list_assignments_by_class(9999).await.unwrap().is_empty());
    }
}
