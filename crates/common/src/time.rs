use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn timestamp() -> i64 {
    Utc::now().timestamp()
}

/// RFC 3339 timestamp for process variables such as `createdAt` and
/// `completedAt`.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339()
}
