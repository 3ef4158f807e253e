//! Application id generation using SHA-256 hashes

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Length of a generated application id, in hex characters
pub const ID_LEN: usize = 12;

/// Derive an application id from its name and creation time.
pub fn app_id(name: &str, created_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();

    hasher.update(name.as_bytes());
    hasher.update(b"|");
    hasher.update(
        created_at
            .timestamp_nanos_opt()
            .unwrap_or_else(|| created_at.timestamp_micros())
            .to_be_bytes(),
    );

    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(ID_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_app_id_deterministic() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(app_id("Todo", at), app_id("Todo", at));
    }

    #[test]
    fn test_app_id_length_and_charset() {
        let id = app_id("Todo", Utc::now());
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_app_id_varies_by_name_and_time() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 1).unwrap();

        assert_ne!(app_id("Todo", at), app_id("Shop", at));
        assert_ne!(app_id("Todo", at), app_id("Todo", later));
    }
}
