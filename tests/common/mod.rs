#![allow(dead_code)]

use std::collections::HashMap;

use multitier::app::model::entry;
use multitier::AppConfig;
use multitier_core::ConfigBuilder;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait};

/// A config pointing at a fresh in-memory SQLite database.
pub fn config(extra: &[(&str, &str)]) -> AppConfig {
    let mut vars: HashMap<String, String> =
        HashMap::from([("DATABASE_URL".to_string(), "sqlite::memory:".to_string())]);

    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }

    AppConfig::build_from(|key| vars.get(key).cloned()).unwrap()
}

pub async fn insert_entry(db: &DatabaseConnection, title: &str) -> entry::Model {
    entry::ActiveModel {
        title: Set(title.to_string()),
        description: Set(format!("{title} description")),
        status: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn count_entries(db: &DatabaseConnection) -> u64 {
    entry::Entity::find().count(db).await.unwrap()
}

pub async fn all_entries(db: &DatabaseConnection) -> Vec<entry::Model> {
    entry::Entity::find().all(db).await.unwrap()
}
