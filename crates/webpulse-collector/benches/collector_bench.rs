//! webpulse-collector 성능 벤치마크
//!
//! 실행: cargo bench -p webpulse-collector
//!
//! 벤치마크 대상:
//! - 샘플 기록 (등급 분류 + FIFO 축출 + 이력 직렬화)
//! - 요약/점수 계산

// 벤치마크 코드에서 criterion 패턴 관련 clippy 경고 허용
#![allow(clippy::redundant_closure, clippy::unit_arg)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use webpulse_collector::PerfCollector;
use webpulse_core::config::CollectorConfig;
use webpulse_core::error::CoreError;
use webpulse_core::models::event::SinkEvent;
use webpulse_core::models::observation::{ResourceEntry, SignalFamily};
use webpulse_core::models::sample::metric;
use webpulse_core::ports::observation::{ObservationCallback, ObservationSource, Subscription};
use webpulse_core::ports::sink::EventSink;
use webpulse_storage::MemoryStore;

struct StaticSource;

struct NoopSubscription;

impl Subscription for NoopSubscription {
    fn disconnect(&mut self) {}
}

impl ObservationSource for StaticSource {
    fn subscribe(
        &self,
        _family: SignalFamily,
        _callback: ObservationCallback,
    ) -> Result<Box<dyn Subscription>, CoreError> {
        Ok(Box::new(NoopSubscription))
    }

    fn resource_entries(&self) -> Result<Vec<ResourceEntry>, CoreError> {
        Ok(Vec::new())
    }

    fn location(&self) -> String {
        "https://example.test/".to_string()
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: SinkEvent) {}
}

fn create_collector() -> Arc<PerfCollector> {
    Arc::new(PerfCollector::new(
        CollectorConfig::default(),
        Arc::new(StaticSource),
        Arc::new(MemoryStore::new()),
        Arc::new(NullSink),
    ))
}

/// 샘플 기록 벤치마크 — 이력이 가득 찬 상태의 정상 경로
fn bench_record_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_sample");
    group.throughput(Throughput::Elements(1));

    let collector = create_collector();
    for i in 0..50 {
        collector.on_sample(metric::INPUT_RESPONSIVENESS_DELAY, i as f64);
    }

    group.bench_function("full_history", |b| {
        b.iter(|| collector.on_sample(black_box(metric::LARGEST_PAINT_DELAY), black_box(2100.0)))
    });

    group.finish();
}

/// 요약/점수 계산 벤치마크
fn bench_summarize_and_score(c: &mut Criterion) {
    let collector = create_collector();
    let names = [
        metric::LARGEST_PAINT_DELAY,
        metric::FIRST_PAINT_DELAY,
        metric::INPUT_RESPONSIVENESS_DELAY,
        metric::TIME_TO_INTERACTIVE,
    ];
    for i in 0..50 {
        collector.on_sample(names[i % names.len()], (i * 40) as f64);
    }

    c.bench_function("summarize", |b| b.iter(|| black_box(collector.summarize())));
    c.bench_function("score", |b| b.iter(|| black_box(collector.score())));
}

criterion_group!(benches, bench_record_sample, bench_summarize_and_score);
criterion_main!(benches);
