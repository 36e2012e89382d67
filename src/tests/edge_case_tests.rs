//! Edge case tests for datacenter/machine Snowflake ID generation

#[cfg(test)]
mod tests {
    use crate::layout::{Component, MAX_SEQUENCE};
    use crate::tests::test_utils::{assert_ids_monotonic, assert_unique_ids, manual_generator};
    use crate::*;
    use chrono::{DateTime, Utc};
    use std::collections::HashSet;

    /// Verify ID bit structure: 0 | timestamp | datacenter | machine | sequence
    #[test]
    fn test_id_bit_structure() {
        let (g, _) = manual_generator(0b10101, 0b01010, *DEFAULT_EPOCH, 0);
        let id = g.generate_at(0b1011).unwrap();
        let raw = id.to_u64();

        let seq_mask = 0xFFF;
        let machine_mask = 0x1F << 12;
        let datacenter_mask = 0x1F << 17;
        let ts_mask = ((1u64 << 41) - 1) << 22;

        assert_eq!(raw >> 63, 0, "Reserved bit must stay clear");
        assert_eq!(raw & seq_mask, 0);
        assert_eq!((raw & machine_mask) >> 12, 0b01010);
        assert_eq!((raw & datacenter_mask) >> 17, 0b10101);
        assert_eq!((raw & ts_mask) >> 22, 0b1011);
        assert_eq!(SnowIDExtractor::decompose(raw), (0b1011, 0b10101, 0b01010, 0));
    }

    /// Component spans tile the binary form after the reserved bit
    #[test]
    fn test_component_spans_cover_payload() {
        let mut next = 1;
        for component in Component::ALL {
            let span = component.span();
            assert_eq!(span.start, next, "{component} does not follow the previous field");
            next = span.end;
        }
        assert_eq!(next, 64);
    }

    /// IDs from different machines never collide, even at the same timestamp
    #[test]
    fn test_cross_node_uniqueness() {
        let mut all_ids = HashSet::new();

        for datacenter in [0, 31] {
            for machine in 0..10 {
                let (g, _) = manual_generator(datacenter, machine, *DEFAULT_EPOCH, 500);
                for _ in 0..100 {
                    let id = g.generate().unwrap();
                    assert!(
                        all_ids.insert(id.to_u64()),
                        "Collision from node {datacenter}/{machine}"
                    );
                }
            }
        }
        assert_eq!(all_ids.len(), 2000);
    }

    /// IDs are numerically sorted (not lexicographically)
    #[test]
    fn test_numeric_sorting() {
        let (g, clock) = manual_generator(1, 1, *DEFAULT_EPOCH, 0);
        let mut raw = vec![];
        for _ in 0..20 {
            for _ in 0..5 {
                raw.push(g.generate().unwrap().to_u64());
            }
            clock.advance(7);
        }

        let mut sorted = raw.clone();
        sorted.sort();
        assert_eq!(raw, sorted, "IDs should already be numerically sorted");
    }

    /// The sequence restarts at 0 for every new millisecond
    #[test]
    fn test_sequence_restarts_per_timestamp() {
        let (g, clock) = manual_generator(1, 1, *DEFAULT_EPOCH, 10);
        let mut ids = vec![];
        for _ in 0..3 {
            ids.push(g.generate().unwrap());
        }
        clock.set(DEFAULT_EPOCH_MILLIS + 11);
        let next = g.generate().unwrap();

        assert_eq!(next.timestamp(), 11);
        assert_eq!(next.sequence(), 0);
        ids.push(next);
        assert_ids_monotonic(&ids);
        assert_unique_ids(&ids, 4);
    }

    /// Going back to an earlier millisecond continues that millisecond's sequence
    #[test]
    fn test_clock_rewind_continues_old_sequence() {
        let (g, clock) = manual_generator(1, 1, *DEFAULT_EPOCH, 100);
        assert_eq!(g.generate().unwrap().sequence(), 0);
        assert_eq!(g.generate().unwrap().sequence(), 1);

        clock.advance(1);
        assert_eq!(g.generate().unwrap().sequence(), 0);

        clock.advance(-1);
        let rewound = g.generate().unwrap();
        assert_eq!(rewound.timestamp(), 100);
        assert_eq!(rewound.sequence(), 2);
    }

    /// Exhaustion at one millisecond leaves the neighbours untouched
    #[test]
    fn test_exhaustion_is_per_timestamp() {
        let (g, _) = manual_generator(1, 1, *DEFAULT_EPOCH, 0);
        for _ in 0..=MAX_SEQUENCE {
            g.generate_at(50).unwrap();
        }
        assert_eq!(
            g.generate_at(50).unwrap_err(),
            SnowIDError::SequenceExhausted { timestamp: 50 }
        );
        assert_eq!(g.generate_at(49).unwrap().sequence(), 0);
        assert_eq!(g.generate_at(51).unwrap().sequence(), 0);
    }

    /// Datetime follows the epoch carried by the id
    #[test]
    fn test_datetime_follows_id_epoch() {
        let (g, _) = manual_generator(1, 1, *DEFAULT_EPOCH, 2_000);
        let id = g.generate().unwrap();
        assert_eq!(g.datetime(&id), *DEFAULT_EPOCH + chrono::TimeDelta::seconds(2));

        let rebased = id.with_epoch(DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(g.datetime(&rebased).timestamp_millis(), 2_000);
    }

    /// Decomposition round-trips through the extractor
    #[test]
    fn test_decomposition_roundtrip() {
        let (g, clock) = manual_generator(17, 29, *DEFAULT_EPOCH, 12_345);

        for _ in 0..100 {
            let id = g.generate().unwrap();
            let (ts, dc, machine, seq) = SnowIDExtractor::decompose(id.to_u64());
            assert_eq!(SnowIDExtractor::compose(ts, dc, machine, seq), id.to_u64());
            assert_eq!(SnowID::from_u64(id.to_u64(), id.epoch()), id);
            clock.advance(3);
        }
    }
}
