//! Entry id generation.

use chrono::Utc;
use uuid::Uuid;

/// Generates an entry id of the form `<unix-millis>-<8 hex chars>`.
///
/// The millisecond prefix keeps ids roughly ordered by creation time; the
/// random suffix keeps ids generated within the same millisecond apart.
pub fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}
