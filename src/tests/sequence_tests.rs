// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod tests {
    use crate::constants::{BUZZ, CHUNK_COUNT, CYCLE_LEN, FIZZ, FIZZBUZZ, MAX_CHUNKS};
    use crate::cycle::CycleTable;
    use crate::lanes::I32x8;
    use crate::sequence::FizzSequence;
    use crate::test_utils::config_test_logger;
    use crate::types::FizzError;

    #[test]
    fn test_standard_run_produces_32_chunks() {
        config_test_logger();
        let sequence = FizzSequence::new();
        assert_eq!(sequence.len(), CHUNK_COUNT);
        assert_eq!(sequence.count(), CHUNK_COUNT);
    }

    #[test]
    fn test_cycle_index_follows_chunk_index_mod_15() {
        let mut sequence = FizzSequence::new();
        for i in 0..CHUNK_COUNT {
            assert_eq!(sequence.cycle_index(), i % CYCLE_LEN, "before chunk {}", i);
            let chunk = sequence.next_chunk().unwrap();
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.cycle_index, i % CYCLE_LEN);
        }
        assert_eq!(sequence.cycle_index(), CHUNK_COUNT % CYCLE_LEN);
        assert!(sequence.next_chunk().is_none());
    }

    #[test]
    fn test_first_chunk() {
        let chunk = FizzSequence::new().next().unwrap();
        assert_eq!(chunk.lanes.to_array(), [1, 2, FIZZ, 4, BUZZ, FIZZ, 7, 8]);
    }

    #[test]
    fn test_chunk_boundary_switches_entry() {
        let mut sequence = FizzSequence::new();
        let first = sequence.next_chunk().unwrap();
        let second = sequence.next_chunk().unwrap();

        // 8 ends chunk 0, 9 opens chunk 1
        assert_eq!(first.lanes.lane(7), 8);
        assert_eq!(second.lanes.lane(0), FIZZ);
        assert_eq!(second.cycle_index, 1);
        assert_eq!(second.lanes.lane(7), 16);
    }

    #[test]
    fn test_wraparound_reuses_first_entry() {
        let chunks: Vec<_> = FizzSequence::new().collect();
        let first = chunks[0];
        let wrapped = chunks[15];
        assert_eq!(wrapped.cycle_index, 0);

        // Same pattern, plain values shifted by 120
        for lane in 0..8 {
            let a = first.lanes.lane(lane);
            let b = wrapped.lanes.lane(lane);
            if a < 0 {
                assert_eq!(a, b, "sentinel lane {}", lane);
            } else {
                assert_eq!(b, a + 120, "value lane {}", lane);
            }
        }
    }

    #[test]
    fn test_table_unchanged_by_run() {
        let mut sequence = FizzSequence::new();
        let before = sequence.table().clone();
        while sequence.next_chunk().is_some() {}
        assert_eq!(sequence.table(), &before);
        assert_eq!(sequence.table(), &CycleTable::build());
    }

    #[test]
    fn test_last_chunk_ends_at_256() {
        let last = FizzSequence::new().last().unwrap();
        assert_eq!(last.index, CHUNK_COUNT - 1);
        assert_eq!(last.lanes.lane(7), 256);
        assert_eq!(
            last.lanes,
            I32x8::from_array([FIZZ, BUZZ, 251, FIZZ, 253, 254, FIZZBUZZ, 256])
        );
    }

    #[test]
    fn test_with_chunks_longer_run() {
        let sequence = FizzSequence::with_chunks(100).unwrap();
        let chunks: Vec<_> = sequence.collect();
        assert_eq!(chunks.len(), 100);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.cycle_index, i % CYCLE_LEN);
        }
        // Chunk 99 covers 793..=800
        assert_eq!(chunks[99].lanes.lane(6), 799);
        assert_eq!(chunks[99].lanes.lane(7), BUZZ);
        assert_eq!(
            chunks[99].lanes.to_array(),
            [793, 794, FIZZBUZZ, 796, 797, FIZZ, 799, BUZZ]
        );
    }

    #[test]
    fn test_with_chunks_zero_is_empty() {
        let mut sequence = FizzSequence::with_chunks(0).unwrap();
        assert_eq!(sequence.remaining(), 0);
        assert!(sequence.next_chunk().is_none());
    }

    #[test]
    fn test_with_chunks_rejects_overflow() {
        assert!(FizzSequence::with_chunks(MAX_CHUNKS).is_ok());
        match FizzSequence::with_chunks(MAX_CHUNKS + 1) {
            Err(FizzError::Internal(msg)) => assert!(msg.contains("chunk count")),
            other => panic!("expected Internal error, got {:?}", other.map(|s| s.len())),
        }
    }
}
