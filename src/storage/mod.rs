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

use std::sync::Arc;

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

/// 存储层接口
///
/// 创建类方法中可缺省的关联字段（teacher、student）必须由服务层先补全。
/// 用户相关请求中的 password 字段在进入存储层之前已替换为哈希值。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（不带 Profile）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 在同一事务中创建用户与 Profile
    async fn register_user(
        &self,
        user: CreateUserRequest,
        profile: CreateProfileRequest,
    ) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户（级联删除其全部数据）
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 用户资料方法
    async fn get_profile_by_id(&self, id: i64) -> Result<Option<Profile>>;
    async fn get_profile_by_user_id(&self, user_id: i64) -> Result<Option<Profile>>;
    async fn update_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<Profile>>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出某位教师的班级
    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(&self, class_id: i64, update: UpdateClassRequest)
    -> Result<Option<Class>>;
    // 删除班级（级联删除作业、题目、提交与反馈）
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级学生方法
    async fn create_class_student(&self, req: CreateClassStudentRequest) -> Result<ClassStudent>;
    async fn get_class_student_by_id(&self, id: i64) -> Result<Option<ClassStudent>>;
    async fn get_class_student_by_pair(
        &self,
        student_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassStudent>>;
    async fn update_class_student(
        &self,
        id: i64,
        update: UpdateClassStudentRequest,
    ) -> Result<Option<ClassStudent>>;
    async fn delete_class_student(&self, id: i64) -> Result<bool>;
    // 列出选课记录（附带班级名与学生资料），class_id 为 None 时列出全部
    async fn list_class_students(&self, class_id: Option<i64>)
    -> Result<Vec<ClassStudentResponse>>;
    async fn get_class_student_detail(&self, id: i64) -> Result<Option<ClassStudentResponse>>;
    // 学生已加入的班级
    async fn list_joined_classes(&self, student_id: i64) -> Result<Vec<JoinedClassResponse>>;

    /// 编程语言方法
    async fn create_language(&self, req: CreateLanguageRequest) -> Result<ProgrammingLanguage>;
    async fn get_language_by_id(&self, id: i64) -> Result<Option<ProgrammingLanguage>>;
    async fn list_languages(&self) -> Result<Vec<ProgrammingLanguage>>;
    async fn update_language(
        &self,
        id: i64,
        update: UpdateLanguageRequest,
    ) -> Result<Option<ProgrammingLanguage>>;
    async fn delete_language(&self, id: i64) -> Result<bool>;
    async fn count_languages(&self) -> Result<u64>;

    /// 作业管理方法
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;
    async fn list_assignments_by_class(&self, class_id: i64) -> Result<Vec<Assignment>>;
    // 学生所在全部班级的作业
    async fn list_assignments_for_student(&self, student_id: i64) -> Result<Vec<Assignment>>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 补全作业详情：题目、班级名、语言名，以及对 student_id 的 is_submitted
    async fn describe_assignments(
        &self,
        assignments: Vec<Assignment>,
        student_id: Option<i64>,
    ) -> Result<Vec<AssignmentResponse>>;

    /// 作业题目方法
    async fn create_question(&self, req: CreateQuestionRequest) -> Result<AssignmentQuestion>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<AssignmentQuestion>>;
    async fn list_questions(&self) -> Result<Vec<AssignmentQuestion>>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<AssignmentQuestion>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 提交管理方法
    async fn create_submission(&self, req: CreateSubmissionRequest) -> Result<Submission>;
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // student_id 为 None 时列出全部提交
    async fn list_submissions(&self, student_id: Option<i64>) -> Result<Vec<Submission>>;
    // 引用该题目的第一条（id 最小）提交
    async fn get_first_submission_by_question(
        &self,
        question_id: i64,
    ) -> Result<Option<Submission>>;
    async fn update_submission_status(
        &self,
        id: i64,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>>;
    async fn delete_submission(&self, id: i64) -> Result<bool>;
    // 补全提交详情：作业标题、班级名、题目内容
    async fn describe_submissions(
        &self,
        submissions: Vec<Submission>,
    ) -> Result<Vec<SubmissionResponse>>;

    /// 教师反馈方法
    async fn create_feedback(&self, req: CreateFeedbackRequest) -> Result<TeacherFeedback>;
    async fn get_feedback_by_id(&self, id: i64) -> Result<Option<TeacherFeedback>>;
    async fn list_feedback(&self) -> Result<Vec<TeacherFeedback>>;
    async fn update_feedback(
        &self,
        id: i64,
        update: UpdateFeedbackRequest,
    ) -> Result<Option<TeacherFeedback>>;
    async fn delete_feedback(&self, id: i64) -> Result<bool>;

    /// 统计方法
    async fn get_student_performance(&self, student_id: i64) -> Result<StudentPerformance>;
}

/// 按全局配置创建存储实例
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
