//! 用户与用户资料存储操作

use super::SeaOrmStorage;
use crate::entity::profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as Profiles,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{AssignEaseError, Result};
use crate::models::users::{
    entities::{Profile, User},
    requests::{CreateProfileRequest, CreateUserRequest, UpdateProfileRequest, UpdateUserRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    fn new_user_model(req: CreateUserRequest) -> ActiveModel {
        ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            last_login: Set(None),
            date_joined: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
    }

    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let result = Self::new_user_model(req)
            .insert(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("创建用户失败", e))?;

        Ok(result.into_user())
    }

    /// 注册：用户与资料在同一事务中写入
    pub async fn register_user_impl(
        &self,
        req: CreateUserRequest,
        profile: CreateProfileRequest,
    ) -> Result<User> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AssignEaseError::database_operation(format!("开启事务失败: {e}")))?;

        let user = Self::new_user_model(req)
            .insert(&txn)
            .await
            .map_err(|e| AssignEaseError::from_db("创建用户失败", e))?;

        ProfileActiveModel {
            user_id: Set(user.id),
            role: Set(profile.role.to_string()),
            name: Set(Some(profile.name)),
            enrollment_number: Set(profile.enrollment_number),
            tid: Set(profile.tid),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| AssignEaseError::from_db("创建用户资料失败", e))?;

        txn.commit()
            .await
            .map_err(|e| AssignEaseError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(user.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出全部用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户列表失败", e))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(username) = update.username {
            model.username = Set(username);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_user()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新用户失败", e))?;

        Ok(Some(updated.into_user()))
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除用户失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新最后登录时间失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 通过 ID 获取用户资料
    pub async fn get_profile_by_id_impl(&self, id: i64) -> Result<Option<Profile>> {
        let result = Profiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户资料失败", e))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 通过用户 ID 获取用户资料
    pub async fn get_profile_by_user_id_impl(&self, user_id: i64) -> Result<Option<Profile>> {
        let result = Profiles::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户资料失败", e))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 更新用户资料
    pub async fn update_profile_impl(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Profile>> {
        let Some(existing) = Profiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询用户资料失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(name) = update.name {
            model.name = Set(Some(name));
        }

        if let Some(enrollment_number) = update.enrollment_number {
            model.enrollment_number = Set(Some(enrollment_number));
        }

        if let Some(tid) = update.tid {
            model.tid = Set(Some(tid));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_profile()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新用户资料失败", e))?;

        Ok(Some(updated.into_profile()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, user};
    use crate::models::users::{
        entities::UserRole,
        requests::{CreateUserRequest, UpdateProfileRequest, UpdateUserRequest},
    };
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_register_creates_user_and_profile() {
        let storage = memory_storage().await;
        let alice = user(&storage, "alice", UserRole::Student).await;

        let profile = storage
            .get_profile_by_user_id(alice.id)
            .await
            .unwrap()
            .expect("profile should exist");
        assert_eq!(profile.role, UserRole::Student);
        assert_eq!(profile.enrollment_number.as_deref(), Some("EN-alice"));
        assert!(profile.tid.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_validation_error() {
        let storage = memory_storage().await;
        user(&storage, "bob", UserRole::Teacher).await;

        let err = storage
            .create_user(CreateUserRequest {
                username: "bob".into(),
                email: "other@example.com".into(),
                password: "hashed".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E004");
    }

    #[tokio::test]
    async fn test_failed_registration_leaves_no_user() {
        let storage = memory_storage().await;
        user(&storage, "carol", UserRole::Teacher).await;

        // 邮箱冲突，整个注册回滚
        let result = storage
            .register_user(
                CreateUserRequest {
                    username: "carol2".into(),
                    email: "carol@example.com".into(),
                    password: "hashed".into(),
                },
                crate::models::users::requests::CreateProfileRequest {
                    role: UserRole::Student,
                    name: "Carol Two".into(),
                    enrollment_number: None,
                    tid: None,
                },
            )
            .await;
        assert!(result.is_err());
        assert!(
            storage
                .get_user_by_username("carol2")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_user_and_profile() {
        let storage = memory_storage().await;
        let dave = user(&storage, "dave", UserRole::Teacher).await;

        let updated = storage
            .update_user(
                dave.id,
                UpdateUserRequest {
                    username: None,
                    email: Some("dave@school.edu".into()),
                    password: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.email, "dave@school.edu");
        assert_eq!(updated.username, "dave");

        let profile = storage.get_profile_by_user_id(dave.id).await.unwrap().unwrap();
        let profile = storage
            .update_profile(
                profile.id,
                UpdateProfileRequest {
                    name: Some("David".into()),
                    enrollment_number: None,
                    tid: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.name.as_deref(), Some("David"));
        assert_eq!(profile.role, UserRole::Teacher);
    }

    #[tokio::test]
    async fn test_delete_user_cascades_profile() {
        let storage = memory_storage().await;
        let erin = user(&storage, "erin", UserRole::Student).await;

        assert!(storage.delete_user(erin.id).await.unwrap());
        assert!(storage.get_profile_by_user_id(erin.id).await.unwrap().is_none());
        assert!(!storage.delete_user(erin.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_last_login() {
        let storage = memory_storage().await;
        let frank = user(&storage, "frank", UserRole::Student).await;
        assert!(frank.last_login.is_none());

        assert!(storage.update_last_login(frank.id).await.unwrap());
        let frank = storage.get_user_by_id(frank.id).await.unwrap().unwrap();
        assert!(frank.last_login.is_some());
    }
}
