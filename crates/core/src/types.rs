//! Scalar aliases shared by every crate in the workspace.

/// Primary key of a `videos` row (`BIGSERIAL`).
pub type DbId = i64;

/// Upload, processing, and modification times, always stored as UTC
/// (`TIMESTAMPTZ`).
pub type Timestamp = chrono::DateTime<chrono::Utc>;
