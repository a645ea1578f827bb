//! 学生成绩统计

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{AssignEaseError, Result};
use crate::models::submissions::{entities::SubmissionStatus, responses::StudentPerformance};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 学生所在班级的作业总数，以及按状态划分的提交数
    pub async fn get_student_performance_impl(
        &self,
        student_id: i64,
    ) -> Result<StudentPerformance> {
        let class_ids = self.enrolled_class_ids(student_id).await?;
        let total_assignments = if class_ids.is_empty() {
            0
        } else {
            Assignments::find()
                .filter(AssignmentColumn::ClassId.is_in(class_ids))
                .count(&self.db)
                .await
                .map_err(|e| AssignEaseError::from_db("统计作业失败", e))?
        };

        let submitted = self.count_submissions(student_id, None).await?;
        let checked = self
            .count_submissions(student_id, Some(SubmissionStatus::Checked))
            .await?;
        let reassigned = self
            .count_submissions(student_id, Some(SubmissionStatus::Reassigned))
            .await?;
        let rejected = self
            .count_submissions(student_id, Some(SubmissionStatus::Rejected))
            .await?;

        Ok(StudentPerformance {
            total_assignments,
            submitted,
            checked,
            reassigned,
            rejected,
        })
    }

    async fn count_submissions(
        &self,
        student_id: i64,
        status: Option<SubmissionStatus>,
    ) -> Result<u64> {
        let mut select = Submissions::find().filter(SubmissionColumn::StudentId.eq(student_id));
        if let Some(status) = status {
            select = select.filter(SubmissionColumn::Status.eq(status.as_str()));
        }

        select
            .count(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("统计提交失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{assignment, class, language, memory_storage, question, user};
    use crate::models::class_students::requests::CreateClassStudentRequest;
    use crate::models::submissions::{
        entities::SubmissionStatus, requests::CreateSubmissionRequest,
        responses::StudentPerformance,
    };
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_performance_counts() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c = class(&storage, &teacher, "Py").await;
        let other = class(&storage, &teacher, "Other").await;
        let py = language(&storage, "Python").await;
        storage
            .create_class_student(CreateClassStudentRequest {
                student: student.id,
                class_assigned: c.id,
            })
            .await
            .unwrap();

        let a1 = assignment(&storage, &c, &py, "a1").await;
        let a2 = assignment(&storage, &c, &py, "a2").await;
        assignment(&storage, &other, &py, "not enrolled").await;

        let q1 = question(&storage, &a1, "q1").await;
        let q2 = question(&storage, &a1, "q2").await;
        let q3 = question(&storage, &a2, "q3").await;

        for (a, q, status) in [
            (a1.id, q1.id, SubmissionStatus::Checked),
            (a1.id, q2.id, SubmissionStatus::Rejected),
            (a2.id, q3.id, SubmissionStatus::Submitted),
        ] {
            storage
                .create_submission(CreateSubmissionRequest {
                    assignment: a,
                    question: q,
                    code: "pass".into(),
                    status,
                    student: Some(student.id),
                    feedback: None,
                })
                .await
                .unwrap();
        }

        let performance = storage.get_student_performance(student.id).await.unwrap();
        assert_eq!(
            performance,
            StudentPerformance {
                total_assignments: 2,
                submitted: 3,
                checked: 1,
                reassigned: 0,
                rejected: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_performance_for_unknown_student_is_zero() {
        let storage = memory_storage().await;
        let performance = storage.get_student_performance(12345).await.unwrap();
        assert_eq!(performance, StudentPerformance::default());
    }
}
