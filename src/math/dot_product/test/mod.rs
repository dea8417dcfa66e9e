//! Test utilities for dot product implementations.

use crate::error::BenchError;
use crate::math::dot_product::bench::{run_all_benchmarks, time_schedule};
use crate::math::dot_product::code::*;
use crate::math::dot_product::{approx_eq, verify};
use crate::random::UniformVector;
use crate::utils::pool::WorkerPool;

const EPSILON: f64 = 1e-12;

fn assert_close(a: f64, b: f64, msg: &str) {
    let diff = (a - b).abs();
    assert!(
        diff < EPSILON,
        "{}: expected {}, got {}, diff = {}",
        msg,
        b,
        a,
        diff
    );
}

#[test]
fn test_original_basic() {
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];
    // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
    let result = dot_product_original(&a, &b).unwrap();
    assert_close(result, 70.0, "original basic");
}

#[test]
fn test_original_empty() {
    let a: [f64; 0] = [];
    let b: [f64; 0] = [];
    let result = dot_product_original(&a, &b).unwrap();
    assert_close(result, 0.0, "original empty");
}

#[test]
fn test_original_single() {
    let result = dot_product_original(&[3.0], &[4.0]).unwrap();
    assert_close(result, 12.0, "original single");
}

#[test]
fn test_parallel_basic() {
    let pool = WorkerPool::new(2).unwrap();
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [5.0, 6.0, 7.0, 8.0];

    for variant in available_variants(DEFAULT_CHUNK_SIZE) {
        let result = parallel_dot(&pool, variant.schedule, &a, &b).unwrap();
        assert_close(result, 70.0, variant.name);
    }
}

#[test]
fn test_parallel_empty() {
    let pool = WorkerPool::new(4).unwrap();
    for variant in available_variants(DEFAULT_CHUNK_SIZE) {
        let result = parallel_dot(&pool, variant.schedule, &[], &[]).unwrap();
        assert_close(result, 0.0, variant.name);
    }
}

#[test]
fn test_length_mismatch_rejected() {
    let pool = WorkerPool::new(2).unwrap();
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, 2.0];

    assert!(matches!(
        dot_product_original(&a, &b),
        Err(BenchError::LengthMismatch { left: 3, right: 2 })
    ));
    for variant in available_variants(DEFAULT_CHUNK_SIZE) {
        assert!(matches!(
            parallel_dot(&pool, variant.schedule, &a, &b),
            Err(BenchError::LengthMismatch { left: 3, right: 2 })
        ));
    }
}

#[test]
fn test_zero_chunk_rejected() {
    let pool = WorkerPool::new(2).unwrap();
    let result = dot_product_static_chunked(&pool, 0, &[1.0], &[1.0]);
    assert!(matches!(result, Err(BenchError::ZeroChunk)));
}

#[test]
fn test_chunk_sizes_agree() {
    let pool = WorkerPool::new(3).unwrap();
    let mut generator = UniformVector::seeded(11);
    let a = generator.generate(1_001);
    let b = generator.generate(1_001);
    let expected = dot_product_original(&a, &b).unwrap();

    for chunk in [1, 7, 10, 64, 1_000, 5_000] {
        let result = dot_product_static_chunked(&pool, chunk, &a, &b).unwrap();
        assert!(
            approx_eq(result, expected),
            "chunk {}: expected {}, got {}",
            chunk,
            expected,
            result
        );
    }
}

#[test]
fn test_verify_passes() {
    let pool = WorkerPool::new(4).unwrap();
    verify(&pool, DEFAULT_CHUNK_SIZE).unwrap();
}

#[test]
fn test_variant_order() {
    let names: Vec<_> = available_variants(DEFAULT_CHUNK_SIZE)
        .iter()
        .map(|v| v.name)
        .collect();
    assert_eq!(names, vec!["default", "static_chunked"]);
}

#[test]
fn test_timings_are_finite() {
    let pool = WorkerPool::new(2).unwrap();
    let mut generator = UniformVector::seeded(5);
    let a = generator.generate(10_000);
    let b = generator.generate(10_000);
    let expected = dot_product_original(&a, &b).unwrap();

    let timings = run_all_benchmarks(&pool, &a, &b, 3, DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(timings.len(), 2);
    for t in &timings {
        assert!(t.avg_secs.is_finite() && t.avg_secs >= 0.0, "{}", t.name);
        assert!(approx_eq(t.result_sample.unwrap(), expected), "{}", t.name);
    }

    let (avg, sample) = time_schedule(&pool, Schedule::Default, &a, &b, 1).unwrap();
    assert!(avg >= 0.0);
    assert!(sample.is_some());
}
