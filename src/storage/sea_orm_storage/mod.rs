//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod class_students;
mod classes;
mod feedback;
mod languages;
mod performance;
mod questions;
mod submissions;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AssignEaseError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, &config.database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AssignEaseError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url == SQLITE_MEMORY_URL;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AssignEaseError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存数据库只存在于单个连接中，连接池必须固定为 1 且不回收
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| AssignEaseError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| AssignEaseError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" || url == SQLITE_MEMORY_URL {
            Ok(SQLITE_MEMORY_URL.to_string())
        } else if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url.ends_with(".sqlite3") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AssignEaseError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentQuestion},
        requests::{
            CreateAssignmentRequest, CreateQuestionRequest, UpdateAssignmentRequest,
            UpdateQuestionRequest,
        },
        responses::AssignmentResponse,
    },
    class_students::{
        entities::ClassStudent,
        requests::{CreateClassStudentRequest, UpdateClassStudentRequest},
        responses::{ClassStudentResponse, JoinedClassResponse},
    },
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    languages::{
        entities::ProgrammingLanguage,
        requests::{CreateLanguageRequest, UpdateLanguageRequest},
    },
    submissions::{
        entities::{Submission, SubmissionStatus, TeacherFeedback},
        requests::{CreateFeedbackRequest, CreateSubmissionRequest, UpdateFeedbackRequest},
        responses::{StudentPerformance, SubmissionResponse},
    },
    users::{
        entities::{Profile, User},
        requests::{
            CreateProfileRequest, CreateUserRequest, UpdateProfileRequest, UpdateUserRequest,
        },
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn register_user(
        &self,
        user: CreateUserRequest,
        profile: CreateProfileRequest,
    ) -> Result<User> {
        self.register_user_impl(user, profile).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 用户资料模块
    async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>> {
        self.get_profile_by_id_impl(id).await
    }

    async fn get_profile_by_user_id(&self, user_id: i64) -> Result<Option<Profile>> {
        self.get_profile_by_user_id_impl(user_id).await
    }

    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Profile>> {
        self.update_profile_impl(id, update).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>> {
        self.list_classes_by_teacher_impl(teacher_id).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 班级学生模块
    async fn create_class_student(&self, req: CreateClassStudentRequest) -> Result<ClassStudent> {
        self.create_class_student_impl(req).await
    }

    async fn get_class_student_by_id(&self, id: i64) -> Result<Option<ClassStudent>> {
        self.get_class_student_by_id_impl(id).await
    }

    async fn get_class_student_by_pair(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassStudent>> {
        self.get_class_student_by_pair_impl(student_id, class_id)
            .await
    }

    async fn update_class_student(
        &self,
        id: i64,
        update: UpdateClassStudentRequest,
    ) -> Result<Option<ClassStudent>> {
        self.update_class_student_impl(id, update).await
    }

    async fn delete_class_student(&self, id: i64) -> Result<bool> {
        self.delete_class_student_impl(id).await
    }

    async fn list_class_students(
        &self,
        class_id: Option<i64>,
    ) -> Result<Vec<ClassStudentResponse>> {
        self.list_class_students_impl(class_id).await
    }

    async fn get_class_student_detail(&self, id: i64) -> Result<Option<ClassStudentResponse>> {
        self.get_class_student_detail_impl(id).await
    }

    async fn list_joined_classes(&self, student_id: i64) -> Result<Vec<JoinedClassResponse>> {
        self.list_joined_classes_impl(student_id).await
    }

    // 编程语言模块
    async fn create_language(&self, req: CreateLanguageRequest) -> Result<ProgrammingLanguage> {
        self.create_language_impl(req).await
    }

    async fn get_language_by_id(&self, id: i64) -> Result<Option<ProgrammingLanguage>> {
        self.get_language_by_id_impl(id).await
    }

    async fn list_languages(&self) -> Result<Vec<ProgrammingLanguage>> {
        self.list_languages_impl().await
    }

    async fn update_language(
        &self,
        id: i64,
        update: UpdateLanguageRequest,
    ) -> Result<Option<ProgrammingLanguage>> {
        self.update_language_impl(id, update).await
    }

    async fn delete_language(&self, id: i64) -> Result<bool> {
        self.delete_language_impl(id).await
    }

    async fn count_languages(&self) -> Result<u64> {
        self.count_languages_impl().await
    }

    // 作业模块
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_assignments_impl().await
    }

    async fn list_assignments_by_class(&self, class_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_class_impl(class_id).await
    }

    async fn list_assignments_for_student(&self, student_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_for_student_impl(student_id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn describe_assignments(
        &self,
        assignments: Vec<Assignment>,
        student_id: Option<i64>,
    ) -> Result<Vec<AssignmentResponse>> {
        self.describe_assignments_impl(assignments, student_id)
            .await
    }

    // 作业题目模块
    async fn create_question(&self, req: CreateQuestionRequest) -> Result<AssignmentQuestion> {
        self.create_question_impl(req).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<AssignmentQuestion>> {
        self.get_question_by_id_impl(id).await
    }

    async fn list_questions(&self) -> Result<Vec<AssignmentQuestion>> {
        self.list_questions_impl().await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<AssignmentQuestion>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    // 提交模块
    async fn create_submission(&self, req: CreateSubmissionRequest) -> Result<Submission> {
        self.create_submission_impl(req).await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn list_submissions(&self, student_id: Option<i64>) -> Result<Vec<Submission>> {
        self.list_submissions_impl(student_id).await
    }

    async fn get_first_submission_by_question(
        &self,
        question_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_first_submission_by_question_impl(question_id)
            .await
    }

    async fn update_submission_status(
        &self,
        id: i64,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>> {
        self.update_submission_status_impl(id, status).await
    }

    async fn delete_submission(&self, id: i64) -> Result<bool> {
        self.delete_submission_impl(id).await
    }

    async fn describe_submissions(
        &self,
        submissions: Vec<Submission>,
    ) -> Result<Vec<SubmissionResponse>> {
        self.describe_submissions_impl(submissions).await
    }

    // 教师反馈模块
    async fn create_feedback(&self, req: CreateFeedbackRequest) -> Result<TeacherFeedback> {
        self.create_feedback_impl(req).await
    }

    async fn get_feedback_by_id(&self, id: i64) -> Result<Option<TeacherFeedback>> {
        self.get_feedback_by_id_impl(id).await
    }

    async fn list_feedback(&self) -> Result<Vec<TeacherFeedback>> {
        self.list_feedback_impl().await
    }

    async fn update_feedback(
        &self,
        id: i64,
        update: UpdateFeedbackRequest,
    ) -> Result<Option<TeacherFeedback>> {
        self.update_feedback_impl(id, update).await
    }

    async fn delete_feedback(&self, id: i64) -> Result<bool> {
        self.delete_feedback_impl(id).await
    }

    // 统计模块
    async fn get_student_performance(&self, student_id: i64) -> Result<StudentPerformance> {
        self.get_student_performance_impl(student_id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! 存储层测试用的内存数据库与数据构造

    use super::SeaOrmStorage;
    use crate::config::AppConfig;
    use crate::models::{
        assignments::{
            entities::{Assignment, AssignmentQuestion},
            requests::{CreateAssignmentRequest, CreateQuestionRequest},
        },
        classes::{entities::Class, requests::CreateClassRequest},
        languages::{entities::ProgrammingLanguage, requests::CreateLanguageRequest},
        users::{
            entities::{User, UserRole},
            requests::{CreateProfileRequest, CreateUserRequest},
        },
    };
    use crate::storage::Storage;

    pub async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::connect(":memory:", &AppConfig::get().database)
            .await
            .expect("in-memory database should open")
    }

    pub async fn user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> User {
        storage
            .register_user(
                CreateUserRequest {
                    username: username.to_string(),
                    email: format!("{username}@example.com"),
                    password: "hashed".to_string(),
                },
                CreateProfileRequest {
                    role,
                    name: format!("{username} name"),
                    enrollment_number: (role == UserRole::Student)
                        .then(|| format!("EN-{username}")),
                    tid: (role == UserRole::Teacher).then(|| format!("T-{username}")),
                },
            )
            .await
            .expect("user should be created")
    }

    pub async fn class(storage: &SeaOrmStorage, teacher: &User, name: &str) -> Class {
        storage
            .create_class(CreateClassRequest {
                class_name: name.to_string(),
                teacher: Some(teacher.id),
            })
            .await
            .expect("class should be created")
    }

    pub async fn language(storage: &SeaOrmStorage, name: &str) -> ProgrammingLanguage {
        storage
            .create_language(CreateLanguageRequest {
                language_name: name.to_string(),
            })
            .await
            .expect("language should be created")
    }

    pub async fn assignment(
        storage: &SeaOrmStorage,
        class: &Class,
        language: &ProgrammingLanguage,
        title: &str,
    ) -> Assignment {
        storage
            .create_assignment(CreateAssignmentRequest {
                class_assigned: class.id,
                title: title.to_string(),
                description: format!("{title} description"),
                due_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date"),
                language: language.id,
                teacher: Some(class.teacher_id),
            })
            .await
            .expect("assignment should be created")
    }

    pub async fn question(
        storage: &SeaOrmStorage,
        assignment: &Assignment,
        text: &str,
    ) -> AssignmentQuestion {
        storage
            .create_question(CreateQuestionRequest {
                assignment: assignment.id,
                question_text: text.to_string(),
            })
            .await
            .expect("question should be created")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("assignease.db").unwrap(),
            "sqlite://assignease.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            SQLITE_MEMORY_URL
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }
}
