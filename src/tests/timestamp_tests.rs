//! Timestamp accuracy and behavior tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_ids_monotonic, manual_generator, wall_clock_ms};
    use crate::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_timestamp_reflects_wall_clock() {
        let g = SnowIDGenerator::new(1, 1, *DEFAULT_EPOCH).unwrap();
        let before = wall_clock_ms(g.epoch());
        let ts = g.generate().unwrap().timestamp() as i64;
        let after = wall_clock_ms(g.epoch());
        assert!(before <= ts && ts <= after, "{before} <= {ts} <= {after}");
    }

    #[test]
    fn test_timestamp_advances_with_real_sleep() {
        let g = SnowIDGenerator::new(1, 1, *DEFAULT_EPOCH).unwrap();
        let ts1 = g.generate().unwrap().timestamp();
        thread::sleep(Duration::from_millis(50));
        let ts2 = g.generate().unwrap().timestamp();
        assert!(ts2 >= ts1 + 50, "Expected at least 50ms, got {}ms", ts2 - ts1);
    }

    #[test]
    fn test_timestamp_monotonicity() {
        let g = SnowIDGenerator::new(1, 1, *DEFAULT_EPOCH).unwrap();
        let mut ids = vec![];
        for _ in 0..50 {
            ids.push(g.generate().unwrap());
            thread::sleep(Duration::from_millis(1));
        }
        assert_ids_monotonic(&ids);
    }

    #[test]
    fn test_datetime_today_for_any_epoch() {
        let epochs = [
            *DEFAULT_EPOCH,
            Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap(),
            DateTime::<Utc>::UNIX_EPOCH,
        ];
        for epoch in epochs {
            let g = SnowIDGenerator::new(1, 1, epoch).unwrap();
            let id = g.generate().unwrap();
            let drift = (Utc::now() - g.datetime(&id)).abs();
            assert!(drift < TimeDelta::seconds(5), "drift {drift} for epoch {epoch}");
        }
    }

    #[test]
    fn test_epoch_too_far_in_past_rejected() {
        // 2^41 ms is about 69.7 years
        let epoch = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
        let g = SnowIDGenerator::new(1, 1, epoch).unwrap();
        assert!(matches!(
            g.generate(),
            Err(SnowIDError::TimestampOutOfRange { .. })
        ));
    }

    #[test]
    fn test_future_epoch_rejected_at_generation() {
        let (g, _) = manual_generator(1, 1, *DEFAULT_EPOCH, -10);
        let err = g.generate().unwrap_err();
        assert_eq!(err, SnowIDError::TimestampOutOfRange { timestamp: -10 });
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(g.tracked_timestamps(), 0);
    }

    #[test]
    fn test_generator_datetime() {
        let (g, _) = manual_generator(1, 1, *DEFAULT_EPOCH, 1_500);
        let id = g.generate().unwrap();
        assert_eq!(g.datetime(&id), *DEFAULT_EPOCH + TimeDelta::milliseconds(1_500));
    }
}
