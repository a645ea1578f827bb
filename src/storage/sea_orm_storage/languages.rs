//! 编程语言存储操作

use super::SeaOrmStorage;
use crate::entity::programming_languages::{ActiveModel, Column, Entity as ProgrammingLanguages};
use crate::errors::{AssignEaseError, Result};
use crate::models::languages::{
    entities::ProgrammingLanguage,
    requests::{CreateLanguageRequest, UpdateLanguageRequest},
};
use sea_orm::{
    ActiveModelTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_language_impl(
        &self,
        req: CreateLanguageRequest,
    ) -> Result<ProgrammingLanguage> {
        let result = ActiveModel {
            language_name: Set(req.language_name),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AssignEaseError::from_db("创建编程语言失败", e))?;

        Ok(result.into_language())
    }

    pub async fn get_language_by_id_impl(&self, id: i64) -> Result<Option<ProgrammingLanguage>> {
        let result = ProgrammingLanguages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询编程语言失败", e))?;

        Ok(result.map(|m| m.into_language()))
    }

    pub async fn list_languages_impl(&self) -> Result<Vec<ProgrammingLanguage>> {
        let languages = ProgrammingLanguages::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询编程语言列表失败", e))?;

        Ok(languages.into_iter().map(|m| m.into_language()).collect())
    }

    pub async fn update_language_impl(
        &self,
        id: i64,
        update: UpdateLanguageRequest,
    ) -> Result<Option<ProgrammingLanguage>> {
        let Some(existing) = ProgrammingLanguages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("查询编程语言失败", e))?
        else {
            return Ok(None);
        };

        let Some(language_name) = update.language_name else {
            return Ok(Some(existing.into_language()));
        };

        let mut model = existing.into_active_model();
        model.language_name = Set(language_name);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("更新编程语言失败", e))?;

        Ok(Some(updated.into_language()))
    }

    /// 删除编程语言，使用该语言的作业一并删除
    pub async fn delete_language_impl(&self, id: i64) -> Result<bool> {
        let result = ProgrammingLanguages::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("删除编程语言失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_languages_impl(&self) -> Result<u64> {
        ProgrammingLanguages::find()
            .count(&self.db)
            .await
            .map_err(|e| AssignEaseError::from_db("统计编程语言失败", e))
    }
}
