//! 班级学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_students::{ActiveModel, Column, Entity as ClassStudents, Model};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::profiles::{Column as ProfileColumn, Entity as Profiles};
use crate::errors::{AssignEaseError, Result};
use crate::models::class_students::{
    entities::ClassStudent,
    requests::{CreateClassStudentRequest, UpdateClassStudentRequest},
    responses::{ClassStudentResponse, JoinedClassResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 学生加入班级，(student, class) 唯一
    pub async fn create_class_student_impl(
        &self,
        req: CreateClassStudentRequest,
    ) -> Result<ClassStudent> {
        let model = ActiveModel {
            student_id: Set(req.student),
            class_id: Set(req.class_assigned),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("加入班级失败", e))?;

        Ok(result.into_class_student())
    }

    pub async fn get_class_student_by_id_impl(&self, id: i64) -> Result<Option<ClassStudent>> {
        let result = ClassStudents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级学生失败", e))?;

        Ok(result.map(|m| m.into_class_student()))
    }

    pub async fn get_class_student_by_pair_impl(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassStudent>> {
        let result = ClassStudents::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级学生失败", e))?;

        Ok(result.map(|m| m.into_class_student()))
    }

    pub async fn update_class_student_impl(
        &self,
        id: i64,
        update: UpdateClassStudentRequest,
    ) -> Result<Option<ClassStudent>> {
        let Some(existing) = ClassStudents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级学生失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(student_id) = update.student {
            model.student_id = Set(student_id);
        }

        if let Some(class_id) = update.class_assigned {
            model.class_id = Set(class_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_class_student()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新班级学生失败", e))?;

        Ok(Some(updated.into_class_student()))
    }

    pub async fn delete_class_student_impl(&self, id: i64) -> Result<bool> {
        let result = ClassStudents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除班级学生失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出选课记录
    pub async fn list_class_students_impl(
        &self,
        class_id: Option<i64>,
    ) -> Result<Vec<ClassStudentResponse>> {
        let mut select = ClassStudents::find();
        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级学生列表失败", e))?;

        self.describe_class_students(rows).await
    }

    pub async fn get_class_student_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<ClassStudentResponse>> {
        let Some(row) = ClassStudents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级学生失败", e))?
        else {
            return Ok(None);
        };

        Ok(self.describe_class_students(vec![row]).await?.pop())
    }

    /// 学生已加入的班级
    pub async fn list_joined_classes_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<JoinedClassResponse>> {
        let rows = ClassStudents::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询已加入班级失败", e))?;

        let class_names = self
            .class_names(rows.iter().map(|r| r.class_id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| JoinedClassResponse {
                id: row.id,
                student: row.student_id,
                class_assigned: class_names.get(&row.class_id).cloned().unwrap_or_default(),
            })
            .collect())
    }

    /// 批量查询班级名称
    pub(crate) async fn class_names(&self, mut ids: Vec<i64>) -> Result<HashMap<i64, String>> {
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let classes = Classes::find()
            .filter(ClassColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级失败", e))?;

        Ok(classes.into_iter().map(|c| (c.id, c.class_name)).collect())
    }

    // 补全班级名称与学生资料
    async fn describe_class_students(&self, rows: Vec<Model>) -> Result<Vec<ClassStudentResponse>> {
        let class_names = self
            .class_names(rows.iter().map(|r| r.class_id).collect())
            .await?;

        let student_ids: Vec<i64> = rows.iter().map(|r| r.student_id).collect();
        let profiles: HashMap<i64, _> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            Profiles::find()
                .filter(ProfileColumn::UserId.is_in(student_ids))
                .all(&self.db)
                .await
                .map_err(|e| AssignEaseError::from_db("查询学生资料失败", e))?
                .into_iter()
                .map(|p| (p.user_id, p))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|row| {
                let profile = profiles.get(&row.student_id);
                ClassStudentResponse {
                    id: row.id,
                    student: row.student_id,
                    class_name: class_names.get(&row.class_id).cloned().unwrap_or_default(),
                    student_name: profile.and_then(|p| p.name.clone()),
                    enrollment_number: profile.and_then(|p| p.enrollment_number.clone()),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{class, memory_storage, user};
    use crate::errors::UNIQUE_VIOLATION_DETAIL;
    use crate::models::class_students::requests::CreateClassStudentRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_enrollment_is_unique_per_pair() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c = class(&storage, &teacher, "Rust 101").await;

        let req = || CreateClassStudentRequest {
            student: student.id,
            class_assigned: c.id,
        };
        storage.create_class_student(req()).await.unwrap();
        let err = storage.create_class_student(req()).await.unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(err.message(), UNIQUE_VIOLATION_DETAIL);
    }

    #[tokio::test]
    async fn test_list_students_with_profile_fields() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let s1 = user(&storage, "s1", UserRole::Student).await;
        let s2 = user(&storage, "s2", UserRole::Student).await;
        let c = class(&storage, &teacher, "Rust 101").await;
        let other = class(&storage, &teacher, "Go 101").await;

        for (student, class_id) in [(s1.id, c.id), (s2.id, c.id), (s1.id, other.id)] {
            storage
                .create_class_student(CreateClassStudentRequest {
                    student,
                    class_assigned: class_id,
                })
                .await
                .unwrap();
        }

        let rows = storage.list_class_students(Some(c.id)).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].class_name, "Rust 101");
        assert_eq!(rows[0].student_name.as_deref(), Some("s1 name"));
        assert_eq!(rows[0].enrollment_number.as_deref(), Some("EN-s1"));

        assert!(storage.list_class_students(Some(9999)).await.unwrap().is_empty());
        assert_eq!(storage.list_class_students(None).await.unwrap().len(), 3);

        let joined = storage.list_joined_classes(s1.id).await.unwrap();
        let names: Vec<_> = joined.iter().map(|j| j.class_assigned.as_str()).collect();
        assert_eq!(names, vec!["Rust 101", "Go 101"]);
    }

    #[tokio::test]
    async fn test_deleting_class_removes_enrollments() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "t", UserRole::Teacher).await;
        let student = user(&storage, "s", UserRole::Student).await;
        let c = class(&storage, &teacher, "Temp").await;
        let enrollment = storage
            .create_class_student(CreateClassStudentRequest {
                student: student.id,
                class_assigned: c.id,
            })
            .await
            .unwrap();

        storage.delete_class(c.id).await.unwrap();
        assert!(
            storage
                .get_class_student_by_id(enrollment.id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
