//! Closed category set for catalog resources.

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Decode, Encode, Sqlite, Type};
use std::fmt;
use std::str::FromStr;

/// Category of a catalog resource. Stored as TEXT, serialized in
/// SCREAMING_SNAKE_CASE on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Audio,
    Document,
    Link,
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Audio => "AUDIO",
            ResourceType::Document => "DOCUMENT",
            ResourceType::Link => "LINK",
            ResourceType::Other => "OTHER",
        }
    }
}

impl Default for ResourceType {
    fn default() -> Self {
        ResourceType::Other
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUDIO" => Ok(ResourceType::Audio),
            "DOCUMENT" => Ok(ResourceType::Document),
            "LINK" => Ok(ResourceType::Link),
            "OTHER" => Ok(ResourceType::Other),
            other => Err(format!("unknown resource type '{}'", other)),
        }
    }
}

impl Type<Sqlite> for ResourceType {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }
}

impl<'q> Encode<'q, Sqlite> for ResourceType {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Sqlite>>::encode(self.as_str().to_string(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for ResourceType {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let s = <String as Decode<'r, Sqlite>>::decode(value)?;
        s.parse::<ResourceType>().map_err(Into::into)
    }
}
