use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProgrammingLanguage {
    pub id: i64,
    pub language_name: String,
}
