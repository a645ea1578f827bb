use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 用户角色，保存在 Profile 中
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Teacher, // 教师
    Student, // 学生
}

impl UserRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Teacher => Self::TEACHER,
            UserRole::Student => Self::STUDENT,
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "\"{s}\" is not a valid choice. Supported roles: teacher, student"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STUDENT => Ok(UserRole::Student),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
}

// 用户资料
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub role: UserRole,
    pub name: Option<String>,
    pub enrollment_number: Option<String>,
    pub tid: Option<String>,
}

// 经过认证的请求者，由 RequireJWT 中间件写入请求扩展
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    // 没有 Profile 的用户为 None
    pub role: Option<UserRole>,
}

impl CurrentUser {
    pub fn is_teacher(&self) -> bool {
        self.role == Some(UserRole::Teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("teacher".parse::<UserRole>(), Ok(UserRole::Teacher));
        assert_eq!("student".parse::<UserRole>(), Ok(UserRole::Student));
        assert!("admin".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Student.to_string(), "student");
    }

    #[test]
    fn test_role_deserialize_rejects_unknown() {
        let role: UserRole = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, UserRole::Teacher);
        assert!(serde_json::from_str::<UserRole>("\"Teacher\"").is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            last_login: None,
            date_joined: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
    }
}
