/// All primary keys are UUIDs assigned by the server when a row is inserted.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
