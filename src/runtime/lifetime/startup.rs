use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::AssignEaseError;
use crate::models::languages::requests::CreateLanguageRequest;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化默认编程语言
/// 仅在语言表为空时写入配置中的列表
pub async fn seed_languages(storage: &Arc<dyn Storage>, languages: &[String]) {
    match storage.count_languages().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} programming language(s), skipping seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!(
                "No programming languages found, seeding {} default(s)...",
                languages.len()
            );
        }
        Err(e) => {
            warn!("Failed to count programming languages: {}, skipping seed", e);
            return;
        }
    }

    for language_name in languages {
        if let Err(e) = storage
            .create_language(CreateLanguageRequest {
                language_name: language_name.clone(),
            })
            .await
        {
            warn!("Failed to seed programming language {}: {}", language_name, e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储与初始数据
pub async fn prepare_server_startup() -> Result<StartupContext, AssignEaseError> {
    // 已安装时忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_languages(&storage, &AppConfig::get().seed.programming_languages).await;

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeaOrmStorage;

    async fn memory_storage() -> Arc<dyn Storage> {
        Arc::new(
            SeaOrmStorage::connect(":memory:", &AppConfig::get().database)
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let storage = memory_storage().await;
        let defaults = vec!["Python".to_string(), "Rust".to_string()];

        seed_languages(&storage, &defaults).await;
        assert_eq!(storage.count_languages().await.unwrap(), 2);

        // 已有数据时不再写入
        seed_languages(&storage, &["Go".to_string()]).await;
        let names: Vec<String> = storage
            .list_languages()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.language_name)
            .collect();
        assert_eq!(names, defaults);
    }
}
