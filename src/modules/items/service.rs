use anyhow::anyhow;
use axum::http::StatusCode;
use serde_json::{Map, Value};
use tracing::{error, info, instrument, warn};

use snipstash_core::AppError;
use snipstash_db::ItemStore;

use super::model::{Item, NewItem, RESERVED_FIELDS};

pub struct ItemService;

impl ItemService {
    /// Turns a raw JSON object into a [`NewItem`].
    ///
    /// `title` is required. `title`, `code` and `user_id` accept numbers and
    /// booleans in their string form. `code` and `user_id` are optional and
    /// `null` counts as absent.
    pub fn validate(mut payload: Map<String, Value>) -> Result<NewItem, AppError> {
        let title = match payload.remove("title") {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            None | Some(Value::Null) => {
                return Err(AppError::validation(anyhow!("title is required")));
            }
            Some(_) => return Err(AppError::validation(anyhow!("title must be a string"))),
        };

        if title.is_empty() {
            return Err(AppError::validation(anyhow!("title is required")));
        }

        let code = optional_string(&mut payload, "code")?;
        let user_id = optional_string(&mut payload, "user_id")?;

        for field in RESERVED_FIELDS {
            payload.remove(field);
        }

        Ok(NewItem {
            title,
            code,
            user_id,
            extra: payload,
        })
    }

    #[instrument(skip(items))]
    pub async fn list(items: &dyn ItemStore) -> Result<Vec<Item>, AppError> {
        items.find_all().await.map_err(|e| {
            error!(error = %e, "Failed to list items");
            AppError::internal(e)
        })
    }

    #[instrument(skip(items, payload))]
    pub async fn create(
        items: &dyn ItemStore,
        payload: Map<String, Value>,
    ) -> Result<Item, AppError> {
        let new_item = Self::validate(payload)?;

        let item = items.create(new_item).await.map_err(|e| {
            error!(error = %e, "Failed to store item");
            AppError::internal(e).with_status(StatusCode::BAD_REQUEST)
        })?;

        info!(item.id = %item.id, "Item created");
        Ok(item)
    }

    #[instrument(skip(items))]
    pub async fn delete(items: &dyn ItemStore, id: &str) -> Result<(), AppError> {
        let removed = items.delete_by_id(id).await.map_err(|e| {
            error!(error = %e, "Failed to delete item");
            AppError::internal(e)
        })?;

        if removed {
            info!("Item deleted");
        } else {
            warn!("Delete requested for an item that does not exist");
        }
        Ok(())
    }
}

fn optional_string(payload: &mut Map<String, Value>, field: &str) -> Result<Option<String>, AppError> {
    match payload.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(AppError::validation(anyhow!("{} must be a string", field))),
    }
}
