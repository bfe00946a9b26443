//! End-to-end runs of the benchmark matrix with tiny sampling budgets.

use std::time::Duration;

use pinbuf_bench::{
    run, AccessPattern, BenchConfig, BenchError, ConfigError, ContainerKind,
};

fn tiny(sizes: Vec<usize>, patterns: Vec<AccessPattern>) -> BenchConfig {
    BenchConfig {
        sizes,
        patterns,
        warmup_samples: 0,
        samples: 2,
        target_sample_time: Duration::from_micros(20),
        ..BenchConfig::default()
    }
}

#[test]
fn report_has_baseline_and_ratio_for_every_cell() {
    let report = run(&tiny(vec![64, 1024], AccessPattern::ALL.to_vec())).unwrap();
    for size in [64, 1024] {
        for pattern in AccessPattern::ALL {
            let base = report.ratio(pattern, size, ContainerKind::Checked).unwrap();
            assert_eq!(base, 1.0);
            let ratio = report.ratio(pattern, size, ContainerKind::Unchecked).unwrap();
            assert!(ratio.is_finite() && ratio > 0.0);
        }
    }
}

#[test]
fn report_renders_one_table_per_pattern() {
    let report = run(&tiny(
        vec![256],
        vec![AccessPattern::RandomWrite, AccessPattern::SequentialRead],
    ))
    .unwrap();
    let text = report.to_string();
    assert_eq!(text.matches("## ").count(), 2);
    assert!(text.find("## random-write").unwrap() < text.find("## sequential-read").unwrap());
    assert_eq!(text.matches("| checked ").count(), 2);
    assert_eq!(text.matches("| unchecked ").count(), 2);
}

#[test]
fn invalid_config_surfaces_as_error() {
    let result = run(&tiny(vec![64], vec![]));
    assert_eq!(result, Err(BenchError::Config(ConfigError::NoPatterns)));
}
