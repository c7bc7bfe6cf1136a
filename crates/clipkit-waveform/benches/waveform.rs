//! Benchmarks for the synchronous hot paths: bucket reduction via the
//! public extraction entry point, and the recommendation search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clipkit_models::WaveformPeaks;
use clipkit_waveform::{compute_peaks, recommend_trim_segments, RecommendationOptions};

fn synthetic_samples(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (i as f32 * 0.01).sin() * ((i % 4801) as f32 / 4801.0))
        .collect()
}

fn synthetic_peaks(bucket_count: usize) -> WaveformPeaks {
    let data: Vec<i16> = (0..bucket_count * 2)
        .map(|i| {
            let v = (((i * 2671) % 32768) as i16).saturating_sub(8192);
            if i % 2 == 0 {
                -v.abs()
            } else {
                v.abs()
            }
        })
        .collect();
    WaveformPeaks::from_interleaved(data)
}

fn bench_peak_extraction(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let samples = synthetic_samples(480_000); // ~10s at 48kHz

    c.bench_function("compute_peaks_800_buckets", |b| {
        b.iter(|| {
            runtime
                .block_on(compute_peaks(black_box(&samples), black_box(800)))
                .unwrap()
        })
    });
}

fn bench_recommendation(c: &mut Criterion) {
    let peaks = synthetic_peaks(800);
    let options = RecommendationOptions::highlight(3).with_segment_ms(8_000.0);

    c.bench_function("recommend_800_buckets", |b| {
        b.iter(|| {
            recommend_trim_segments(black_box(&peaks), black_box(60_000.0), black_box(&options))
        })
    });
}

criterion_group!(benches, bench_peak_extraction, bench_recommendation);
criterion_main!(benches);
