use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

/// Row of the externally managed `test_table`. Read-only from the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct TestRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(serialize_with = "iso_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(serialize_with = "iso_timestamp")]
    pub updated_at: Option<NaiveDateTime>,
}

impl TestRow {
    pub const TABLE: &'static str = "test_table";
}

/// `YYYY-MM-DDTHH:MM:SS`, plus six fractional digits only when the value has sub-second precision.
fn iso_timestamp<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(ts) if ts.nanosecond() != 0 => {
            serializer.collect_str(&ts.format("%Y-%m-%dT%H:%M:%S%.6f"))
        }
        Some(ts) => serializer.collect_str(&ts.format("%Y-%m-%dT%H:%M:%S")),
        None => serializer.serialize_none(),
    }
}
