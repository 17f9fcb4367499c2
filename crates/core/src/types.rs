/// Units are keyed by an opaque identifier owned by the persistence layer.
pub type UnitId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
