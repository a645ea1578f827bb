use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AssignEaseError;

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const NAME_MAX_LENGTH: usize = 255;
pub const IDENTIFIER_MAX_LENGTH: usize = 50; // 学号 / 工号
pub const CLASS_NAME_MAX_LENGTH: usize = 100;
pub const TITLE_MAX_LENGTH: usize = 255;
pub const LANGUAGE_NAME_MAX_LENGTH: usize = 50;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9@.+_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.is_empty() {
        return Err("Username may not be blank");
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err("Username must be 150 characters or fewer");
    }
    // 字母、数字以及 @ . + - _
    if !USERNAME_RE.is_match(username) {
        return Err(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters",
        );
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Enter a valid email address");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password may not be blank");
    }
    Ok(())
}

/// 必填文本字段：不能为空白，可选最大长度（按字符计）
pub fn validate_required_text(
    field: &str,
    value: &str,
    max_length: Option<usize>,
) -> Result<(), AssignEaseError> {
    if value.trim().is_empty() {
        return Err(AssignEaseError::validation(format!(
            "{field}: This field may not be blank."
        )));
    }
    validate_optional_text(field, Some(value), max_length)
}

/// 可选文本字段的长度校验
pub fn validate_optional_text(
    field: &str,
    value: Option<&str>,
    max_length: Option<usize>,
) -> Result<(), AssignEaseError> {
    match (value, max_length) {
        (Some(value), Some(max)) if value.chars().count() > max => Err(
            AssignEaseError::validation(format!(
                "{field}: Ensure this field has no more than {max} characters."
            )),
        ),
        _ => Ok(()),
    }
}

/// 用户名、邮箱、密码的统一校验，返回校验错误
pub fn validate_credentials(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), AssignEaseError> {
    validate_username(username).map_err(AssignEaseError::validation)?;
    validate_email(email).map_err(AssignEaseError::validation)?;
    validate_password(password).map_err(AssignEaseError::validation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob.smith+class@uni-1_x").is_ok());
        assert!(validate_username(&"a".repeat(150)).is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("semi;colon").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("teacher@school.edu").is_ok());
        assert!(validate_email("first.last+tag@mail.example.org").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("title", "Loops", Some(255)).is_ok());
        let err = validate_required_text("title", "   ", Some(255)).unwrap_err();
        assert_eq!(err.message(), "title: This field may not be blank.");
        let err = validate_required_text("class_name", &"x".repeat(101), Some(100)).unwrap_err();
        assert!(err.message().contains("no more than 100 characters"));
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text("tid", None, Some(50)).is_ok());
        assert!(validate_optional_text("tid", Some("T-01"), Some(50)).is_ok());
        assert!(validate_optional_text("tid", Some(&"9".repeat(51)), Some(50)).is_err());
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials("alice", "alice@example.com", "pw").is_ok());
        assert!(validate_credentials("alice", "alice@example.com", "").is_err());
        assert!(validate_credentials("alice", "bad-email", "pw").is_err());
    }
}
