use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateLanguageRequest {
    pub language_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLanguageRequest {
    pub language_name: Option<String>,
}
