//! # Producer Key Lifecycle
//!
//! Exercises the hourly key-rotation flow a producer runs: generate a key
//! for the current hour, store it, look it up for any timestamp in the same
//! hour, and roll over at the hour boundary.

#[cfg(test)]
mod tests {
    use ndn_producer_db::{
        fixed_time_slot, ContentKey, InMemoryKVStore, ProducerDb, ProducerDbApi, ProducerDbError,
    };

    /// One hour in milliseconds, as f64 timestamps.
    const HOUR_MS: f64 = 3_600_000.0;

    #[test]
    fn test_hourly_rotation_flow() {
        let mut db = ProducerDb::new(InMemoryKVStore::new());

        // Producer provisions keys for three consecutive hours.
        let keys: Vec<ContentKey> = (0..3).map(|_| ContentKey::generate()).collect();
        for (hour, key) in keys.iter().enumerate() {
            db.add_content_key(hour as f64 * HOUR_MS, key).unwrap();
        }

        // Any timestamp inside an hour resolves to that hour's key.
        for (hour, key) in keys.iter().enumerate() {
            let mid_hour = hour as f64 * HOUR_MS + 1_234_567.0;
            assert!(db.has_content_key(mid_hour).unwrap());
            assert_eq!(
                hex::encode(db.get_content_key(mid_hour).unwrap().as_bytes()),
                hex::encode(key.as_bytes())
            );
        }

        // The fourth hour has no key yet.
        assert!(!db.has_content_key(3.0 * HOUR_MS).unwrap());
        assert_eq!(
            db.get_content_key(3.0 * HOUR_MS).unwrap_err(),
            ProducerDbError::key_not_found(3)
        );
    }

    #[test]
    fn test_rotation_respects_write_once_per_hour() {
        let mut db = ProducerDb::new(InMemoryKVStore::new());
        db.add_content_key(0.0, &ContentKey::generate()).unwrap();

        // A second key in the same hour is refused until the old one is
        // retired.
        let err = db
            .add_content_key(HOUR_MS - 1.0, &ContentKey::generate())
            .unwrap_err();
        assert_eq!(err.message(), ProducerDbError::key_exists(0).message());

        db.delete_content_key(0.0).unwrap();
        db.add_content_key(0.0, &ContentKey::generate()).unwrap();
    }

    #[test]
    fn test_random_timestamps_within_an_hour_share_the_key() {
        use rand::Rng;

        crate::integration::init_tracing();
        let mut db = ProducerDb::new(InMemoryKVStore::new());
        let key = ContentKey::generate();
        db.add_content_key(5.0 * HOUR_MS, &key).unwrap();

        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let timestamp = 5.0 * HOUR_MS + rng.gen_range(0.0..HOUR_MS - 1.0);
            assert_eq!(
                db.get_content_key(timestamp).unwrap().as_bytes(),
                key.as_bytes(),
                "timestamp {timestamp} must resolve to the hour-5 key"
            );
        }
    }

    #[test]
    fn test_quantizer_matches_database_bucketing() {
        let mut db = ProducerDb::new(InMemoryKVStore::new());
        let key = ContentKey::generate();

        // Sub-millisecond timestamps snap to the bucket the quantizer
        // reports.
        let fuzzy = HOUR_MS - 0.4;
        assert_eq!(fixed_time_slot(fuzzy), 1);
        db.add_content_key(fuzzy, &key).unwrap();
        assert!(db.has_content_key(HOUR_MS).unwrap());
        assert!(!db.has_content_key(HOUR_MS - 1.0).unwrap());
    }

    #[test]
    fn test_error_messages_survive_transport() {
        // The message is the whole observable error; it must round-trip
        // through Display unchanged.
        let err = ProducerDbError::new("lookup miss on replica 2");
        assert_eq!(err.to_string(), "lookup miss on replica 2");
        assert_eq!(err.message(), err.to_string());
    }
}
