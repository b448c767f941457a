//! Graph entities produced by transforms
//!
//! A transform turns raw lookup records into a small tree of typed
//! entities: one profile per record, with the platform and every non-null
//! field of the record attached as attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Entity type of a profile found in a platform
pub const PROFILE: &str = "i3visio.profile";
/// Entity type of the platform a profile belongs to
pub const PLATFORM: &str = "i3visio.platform";
/// Record field holding the alias of a profile
pub const ALIAS: &str = "i3visio.alias";

/// A lookup record as returned by a third-party lookup
pub type Record = Map<String, Value>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("record #{0} has no 'i3visio.alias' field")]
    MissingAlias(usize),
}

/// Typed node of the entity graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub attributes: Vec<Entity>,
}

impl Entity {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Entity) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Render a JSON value as attribute text (strings without quotes)
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build one profile entity per record found in `platform`.
///
/// Every record must carry an [`ALIAS`] field. Null fields are skipped.
pub fn profiles_from_records(
    platform: &str,
    records: &[Record],
) -> Result<Vec<Entity>, TransformError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| -> Result<Entity, TransformError> {
            let alias = record
                .get(ALIAS)
                .filter(|v| !v.is_null())
                .map(value_text)
                .ok_or(TransformError::MissingAlias(index))?;

            let profile = Entity::new(PROFILE, format!("{} - {}", platform, alias))
                .with_attribute(Entity::new(PLATFORM, platform));

            Ok(record
                .iter()
                .filter(|(_, v)| !v.is_null())
                .fold(profile, |entity, (field, v)| {
                    entity.with_attribute(Entity::new(field.as_str(), value_text(v)))
                }))
        })
        .collect()
}
