use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardDto {
    pub id: i32,
    pub user_id: i32,
    pub word: String,
    pub transcription: String,
    pub translation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-submitted card fields, used for both create and update.
///
/// Absent and `null` fields decode to their zero value so that a missing `word`
/// is reported by validation rather than rejected as malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CardFormDto {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transcription: String,
    #[serde(deserialize_with = "null_as_default")]
    pub translation: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
