//! Item seeding functionality.
//!
//! Generates fake items in parallel and inserts them in batches.

use fake::Fake;
use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::Word;
use rayon::prelude::*;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use snipstash_db::{ItemStore, PgItemStore};
use snipstash_models::NewItem;

const LANGUAGES: [&str; 5] = ["rust", "python", "javascript", "go", "sql"];

/// Configuration for item seeding.
#[derive(Clone, Debug)]
pub struct ItemSeedConfig {
    pub count: usize,
    /// Value stored in `user_id` on every generated item.
    pub owner: Option<String>,
}

impl Default for ItemSeedConfig {
    fn default() -> Self {
        Self {
            count: 20,
            owner: None,
        }
    }
}

impl ItemSeedConfig {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// Generates fake items with a title, a one-line code body and a `language`
/// extra field.
pub fn generate_items(config: &ItemSeedConfig) -> Vec<NewItem> {
    (0..config.count)
        .into_par_iter()
        .map(|idx| {
            let language = LANGUAGES[idx % LANGUAGES.len()];
            let name: String = Word().fake();

            let mut extra = Map::new();
            extra.insert("language".to_string(), Value::from(language));

            NewItem {
                title: CatchPhrase().fake(),
                code: Some(code_line(language, &name.to_lowercase())),
                user_id: config.owner.clone(),
                extra,
            }
        })
        .collect()
}

fn code_line(language: &str, name: &str) -> String {
    match language {
        "rust" => format!("fn {name}() {{}}"),
        "python" => format!("def {name}(): pass"),
        "javascript" => format!("function {name}() {{}}"),
        "go" => format!("func {name}() {{}}"),
        _ => format!("SELECT '{name}';"),
    }
}

/// Seeds fake items into the database.
pub async fn seed_items(
    db: &PgPool,
    config: ItemSeedConfig,
) -> Result<usize, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📝 Seeding {} items...", config.count);

    let items = generate_items(&config);
    let inserted = insert_items_batch(db, &items).await?;

    println!(
        "   ✓ Inserted {} items in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Inserts items in batches inside one transaction.
pub async fn insert_items_batch(
    db: &PgPool,
    items: &[NewItem],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per item
    const BATCH_SIZE: usize = 1000;

    let mut inserted = 0;
    for chunk in items.chunks(BATCH_SIZE) {
        inserted += insert_items_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn insert_items_chunk(
    tx: &mut Transaction<'_, Postgres>,
    items: &[NewItem],
) -> Result<usize, Box<dyn std::error::Error>> {
    if items.is_empty() {
        return Ok(0);
    }

    let mut query = String::from("INSERT INTO items (title, code, user_id, extra) VALUES ");

    for (i, _) in items.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    let mut q = sqlx::query(&query);
    for item in items {
        q = q
            .bind(&item.title)
            .bind(&item.code)
            .bind(&item.user_id)
            .bind(Json(&item.extra));
    }

    let result = q.execute(&mut **tx).await?;
    Ok(result.rows_affected() as usize)
}

/// Deletes every item.
pub async fn clear_items(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing items...");

    let result = PgItemStore::new(db.clone()).delete_all().await?;

    println!(
        "   ✓ Deleted {} items in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_items_count() {
        let items = generate_items(&ItemSeedConfig::new(12));
        assert_eq!(items.len(), 12);
    }

    #[test]
    fn test_generated_items_are_valid() {
        let items = generate_items(&ItemSeedConfig::new(10));

        for item in &items {
            assert!(!item.title.is_empty());
            assert!(item.code.is_some());
            assert!(item.user_id.is_none());
            assert!(item.extra.contains_key("language"));
        }
    }

    #[test]
    fn test_generate_items_with_owner() {
        let items = generate_items(&ItemSeedConfig::new(3).with_owner("seed-user"));
        assert!(
            items
                .iter()
                .all(|i| i.user_id.as_deref() == Some("seed-user"))
        );
    }

    #[test]
    fn test_code_line_per_language() {
        assert_eq!(code_line("rust", "sort"), "fn sort() {}");
        assert_eq!(code_line("python", "sort"), "def sort(): pass");
        assert_eq!(code_line("sql", "sort"), "SELECT 'sort';");
    }

    #[test]
    fn test_seed_config_default() {
        let config = ItemSeedConfig::default();
        assert_eq!(config.count, 20);
        assert!(config.owner.is_none());
    }
}
