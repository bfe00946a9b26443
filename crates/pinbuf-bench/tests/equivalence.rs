//! Fairness checks: the checked and unchecked containers must see the same
//! data through the same index order.

use pinbuf::{CheckedBuffer, UncheckedBuffer};
use pinbuf_bench::kernel::{self, WRITE_VALUE};
use pinbuf_bench::{AccessPattern, BenchConfig, ContainerKind, Fixture, IndexSequence};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn capacity_64_sequential_read_sums_index_fill() {
    let mut checked = CheckedBuffer::new(64);
    let mut unchecked = UncheckedBuffer::new(64).unwrap();
    for i in 0..64 {
        checked[i] = i as u32;
        unsafe { unchecked.set(i, i as u32) };
    }
    assert_eq!(kernel::sequential_read_checked(&checked, 64), 2016);
    assert_eq!(kernel::sequential_read_unchecked(&unchecked, 64), 2016);
}

#[test]
fn capacity_1024_random_write_sets_every_slot() {
    let mut buf = UncheckedBuffer::new(1024).unwrap();
    let seq = IndexSequence::shuffled(1024, &mut ChaCha8Rng::seed_from_u64(111));
    kernel::random_write_unchecked(&mut buf, &seq);
    for i in 0..1024 {
        assert_eq!(unsafe { buf.get(i) }, WRITE_VALUE, "slot {i}");
    }
}

#[test]
fn capacity_4096_random_read_is_a_fair_permutation() {
    let config = BenchConfig {
        read_seed: 111,
        ..BenchConfig::default()
    };
    let mut fixture = Fixture::build(AccessPattern::RandomRead, 4096, &config).unwrap();

    // Each index exactly once.
    let mut visits = vec![0u32; 4096];
    for &i in fixture.sequence().as_slice() {
        visits[i] += 1;
    }
    assert!(visits.iter().all(|&n| n == 1));

    let checked = fixture.run_once(ContainerKind::Checked);
    let unchecked = fixture.run_once(ContainerKind::Unchecked);
    assert_eq!(checked, unchecked);
    assert_eq!(checked, kernel::sequential_read_checked(fixture.checked(), 4096));
}

#[test]
fn random_write_fixture_leaves_both_containers_equal() {
    let mut fixture =
        Fixture::build(AccessPattern::RandomWrite, 2048, &BenchConfig::default()).unwrap();
    fixture.run_once(ContainerKind::Checked);
    fixture.run_once(ContainerKind::Unchecked);
    for i in 0..2048 {
        assert_eq!(fixture.checked()[i], WRITE_VALUE);
        assert_eq!(unsafe { fixture.unchecked().get(i) }, WRITE_VALUE);
    }
}

#[test]
fn zero_capacity_only_constructs_and_drops() {
    let buf = UncheckedBuffer::new(0).unwrap();
    assert_eq!(buf.len(), 0);
    drop(buf);
}

#[test]
fn fixtures_populate_containers_identically() {
    let config = BenchConfig::default();
    for pattern in AccessPattern::ALL {
        let fixture = Fixture::build(pattern, 777, &config).unwrap();
        for i in 0..777 {
            assert_eq!(
                fixture.checked()[i],
                unsafe { fixture.unchecked().get(i) },
                "{pattern} slot {i}"
            );
        }
    }
}

proptest! {
    #[test]
    fn cross_container_equivalence(values in prop::collection::vec(any::<u32>(), 1..1024)) {
        let mut checked = CheckedBuffer::new(values.len());
        let mut unchecked = UncheckedBuffer::new(values.len()).unwrap();
        for (i, &v) in values.iter().enumerate() {
            checked.set(i, v).unwrap();
            unsafe { unchecked.set(i, v) };
        }
        for i in 0..values.len() {
            prop_assert_eq!(checked.get(i).unwrap(), unsafe { unchecked.get(i) });
        }
        prop_assert_eq!(
            kernel::sequential_read_checked(&checked, values.len()),
            kernel::sequential_read_unchecked(&unchecked, values.len())
        );
    }

    #[test]
    fn shuffled_reads_agree_for_any_seed(len in 1usize..2048, seed in any::<u64>()) {
        let config = BenchConfig { read_seed: seed, ..BenchConfig::default() };
        let mut fixture = Fixture::build(AccessPattern::RandomRead, len, &config).unwrap();
        prop_assert_eq!(
            fixture.run_once(ContainerKind::Checked),
            fixture.run_once(ContainerKind::Unchecked)
        );
    }
}
