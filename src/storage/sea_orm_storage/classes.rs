//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{AssignEaseError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        // teacher 必须由服务层确保已设置
        let teacher_id = req.teacher.ok_or_else(|| {
            AssignEaseError::internal("teacher must be set before calling create_class")
        })?;

        let model = ActiveModel {
            class_name: Set(req.class_name),
            teacher_id: Set(teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("创建班级失败", e))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级失败", e))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出教师的班级
    pub async fn list_classes_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级列表失败", e))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let Some(existing) = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询班级失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(teacher_id) = update.teacher {
            model.teacher_id = Set(teacher_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_class()));
        }

        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新班级失败", e))?;

        Ok(Some(updated.into_class()))
    }

    /// 删除班级，作业、题目、提交与反馈由外键级联删除
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除班级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{class, memory_storage, user};
    use crate::errors::FOREIGN_KEY_VIOLATION_DETAIL;
    use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_list_classes_scoped_to_teacher() {
        let storage = memory_storage().await;
        let t1 = user(&storage, "teach1", UserRole::Teacher).await;
        let t2 = user(&storage, "teach2", UserRole::Teacher).await;
        class(&storage, &t1, "Algorithms").await;
        class(&storage, &t1, "Compilers").await;
        class(&storage, &t2, "Databases").await;

        let classes = storage.list_classes_by_teacher(t1.id).await.unwrap();
        let names: Vec<_> = classes.iter().map(|c| c.class_name.as_str()).collect();
        assert_eq!(names, vec!["Algorithms", "Compilers"]);
    }

    #[tokio::test]
    async fn test_unknown_teacher_is_validation_error() {
        let storage = memory_storage().await;
        let err = storage
            .create_class(CreateClassRequest {
                class_name: "Orphan".into(),
                teacher: Some(9999),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(err.message(), FOREIGN_KEY_VIOLATION_DETAIL);
    }

    #[tokio::test]
    async fn test_update_and_delete_class() {
        let storage = memory_storage().await;
        let teacher = user(&storage, "teach3", UserRole::Teacher).await;
        let c = class(&storage, &teacher, "Networks").await;

        let updated = storage
            .update_class(
                c.id,
                UpdateClassRequest {
                    class_name: Some("Computer Networks".into()),
                    teacher: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.class_name, "Computer Networks");
        assert_eq!(updated.teacher_id, teacher.id);

        assert!(storage.delete_class(c.id).await.unwrap());
        assert!(storage.get_class_by_id(c.id).await.unwrap().is_none());
        let missing = storage
            .update_class(
                c.id,
                UpdateClassRequest {
                    class_name: None,
                    teacher: None,
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
