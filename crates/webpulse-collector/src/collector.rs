//! 성능 메트릭 수집기.
//!
//! 호스트 관측 설비에서 샘플을 받아 등급을 매기고, 유계 이력을
//! 유지하며, 요약/리포트를 생성해 스냅샷 저장소에 영속화한다.
//! 모든 실패 경로는 수집 범위나 정확도를 낮출 뿐 — 호스트로
//! panic이 넘어가는 일은 없다.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use webpulse_core::config::CollectorConfig;
use webpulse_core::error::CoreError;
use webpulse_core::models::event::SinkEvent;
use webpulse_core::models::observation::{Observation, SignalFamily};
use webpulse_core::models::report::{MetricSummary, PerformanceReport, PerformanceSummary};
use webpulse_core::models::sample::{metric, MetricSample, Rating};
use webpulse_core::ports::observation::{ObservationCallback, ObservationSource, Subscription};
use webpulse_core::ports::sink::EventSink;
use webpulse_core::ports::store::{SnapshotStore, HISTORY_KEY, REPORT_KEY};

/// 구독 대상 신호 계열 — 계열당 콜백 하나
const SIGNAL_FAMILIES: [SignalFamily; 5] = [
    SignalFamily::LargestPaint,
    SignalFamily::FirstPaint,
    SignalFamily::InputDelay,
    SignalFamily::LayoutShift,
    SignalFamily::Navigation,
];

/// 수집기 내부 상태 — 단일 Mutex 아래의 유계 이력 + 누적 이동 점수
struct CollectorState {
    /// 시간 오름차순 샘플 이력 (FIFO 축출)
    history: VecDeque<MetricSample>,
    /// 세션 수명 동안만 증가하는 레이아웃 이동 누적값
    cumulative_shift: f64,
}

/// 성능 메트릭 수집기
///
/// 명시적 인스턴스로 생성해 참조로 전달한다 — 전역 상태 없음.
/// 콜백은 `Weak` 참조를 붙잡으므로 수집기가 drop되면 조용히 멈춘다.
pub struct PerfCollector {
    config: CollectorConfig,
    source: Arc<dyn ObservationSource>,
    store: Arc<dyn SnapshotStore>,
    sink: Arc<dyn EventSink>,
    session_id: Uuid,
    state: Mutex<CollectorState>,
    /// false면 이후 도착하는 샘플을 기록하지 않는다
    running: AtomicBool,
    subscriptions: Mutex<Vec<Box<dyn Subscription>>>,
}

impl PerfCollector {
    /// 새 수집기 생성. 생성 직후부터 샘플 수신이 가능하다.
    pub fn new(
        config: CollectorConfig,
        source: Arc<dyn ObservationSource>,
        store: Arc<dyn SnapshotStore>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            source,
            store,
            sink,
            session_id: Uuid::new_v4(),
            state: Mutex::new(CollectorState {
                history: VecDeque::new(),
                cumulative_shift: 0.0,
            }),
            running: AtomicBool::new(true),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// 수집기 세션 식별자
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// 샘플 수신 중 여부
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// 현재 이력 복사본 (시간 오름차순)
    pub fn history(&self) -> Vec<MetricSample> {
        self.state.lock().history.iter().cloned().collect()
    }

    /// 관측 구독 시작.
    ///
    /// 신호 계열마다 콜백 하나를 등록하고, 등록 직후 느린 리소스를
    /// 한 차례 배치 스캔한다. 등록에 실패한 계열은 경고 로그 후
    /// 세션 내내 제외된다 — 부분 수집이 정상 동작이다.
    pub fn start(self: &Arc<Self>) {
        self.running.store(true, Ordering::SeqCst);

        let mut registered = 0usize;
        {
            let mut subscriptions = self.subscriptions.lock();
            for family in SIGNAL_FAMILIES {
                let weak = Arc::downgrade(self);
                let callback: ObservationCallback = Arc::new(move |observation| {
                    if let Some(collector) = weak.upgrade() {
                        collector.handle_observation(family, observation);
                    }
                });

                match self.source.subscribe(family, callback) {
                    Ok(subscription) => {
                        subscriptions.push(subscription);
                        registered += 1;
                    }
                    Err(e) => {
                        warn!("관측 등록 실패 ({family:?}): {e} — 해당 메트릭 제외");
                    }
                }
            }
        }

        info!(
            "수집기 시작: {registered}/{}개 신호 계열 구독, 세션 {}",
            SIGNAL_FAMILIES.len(),
            self.session_id
        );

        self.scan_slow_resources();
    }

    /// 관측 구독 해제. 이후 도착하는 샘플은 기록되지 않는다.
    /// 여러 번 호출해도 안전하다.
    pub fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        let mut subscriptions = self.subscriptions.lock();
        for subscription in subscriptions.iter_mut() {
            subscription.disconnect();
        }
        subscriptions.clear();

        info!("수집기 중지: 구독 해제 완료, 세션 {}", self.session_id);
    }

    /// 호스트 콜백 진입점 — 신호 계열별로 페이로드를 해석한다
    fn handle_observation(&self, family: SignalFamily, observation: Observation) {
        if !self.running.load(Ordering::SeqCst) {
            debug!("중지된 수집기에 도착한 관측 무시: {family:?}");
            return;
        }

        match (family, observation) {
            (SignalFamily::LargestPaint, Observation::Timing { elapsed_ms }) => {
                self.on_sample(metric::LARGEST_PAINT_DELAY, elapsed_ms);
            }
            (SignalFamily::FirstPaint, Observation::Timing { elapsed_ms }) => {
                self.on_sample(metric::FIRST_PAINT_DELAY, elapsed_ms);
            }
            (SignalFamily::InputDelay, Observation::Timing { elapsed_ms }) => {
                self.on_sample(metric::INPUT_RESPONSIVENESS_DELAY, elapsed_ms);
            }
            (SignalFamily::LayoutShift, Observation::LayoutShift { value, had_recent_input }) => {
                self.on_layout_shift(value, had_recent_input);
            }
            (SignalFamily::Navigation, Observation::Navigation { dom_interactive_ms }) => {
                self.on_sample(metric::TIME_TO_INTERACTIVE, dom_interactive_ms);
            }
            (family, observation) => {
                warn!("신호 계열과 페이로드 불일치 — 무시: {family:?} / {observation:?}");
            }
        }
    }

    /// 샘플 기록 (공개 경계).
    ///
    /// 내부 에러는 로그 후 무시한다 — 이 계층 밖으로는 어떤 에러도
    /// 전파되지 않는다.
    pub fn on_sample(&self, name: &str, value: f64) {
        if let Err(e) = self.record_sample(name, value) {
            warn!("샘플 폐기 — {name}: {e}");
        }
    }

    /// 샘플 기록 (내부 Result 경로).
    ///
    /// 유효성 검증 → 등급 분류 → 이력 추가(FIFO 축출) → 이력 영속화
    /// (best-effort) → 싱크 전달 → poor면 회귀 알림.
    fn record_sample(&self, name: &str, value: f64) -> Result<(), CoreError> {
        if !self.running.load(Ordering::SeqCst) {
            debug!("중지 상태 — 샘플 미기록: {name}={value}");
            return Ok(());
        }

        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::MalformedSample {
                name: name.to_string(),
                value,
            });
        }

        let sample = MetricSample::new(name, value);
        let rating = sample.rating;

        // 이력 추가 + 축출 + 직렬화는 한 잠금 구간에서 끝낸다
        let history_json = {
            let mut state = self.state.lock();
            state.history.push_back(sample.clone());
            while state.history.len() > self.config.history_limit {
                state.history.pop_front();
            }
            serde_json::to_string(&state.history)
        };

        match history_json {
            Ok(json) => {
                if let Err(e) = self.store.put(HISTORY_KEY, &json) {
                    warn!("이력 영속화 실패 (무시): {e}");
                }
            }
            Err(e) => warn!("이력 직렬화 실패 (무시): {e}"),
        }

        debug!("샘플 기록: {name}={value} ({rating:?})");
        self.sink.emit(SinkEvent::Sample(sample));

        if rating == Rating::Poor {
            warn!("성능 회귀 감지: {name}={value}");
            self.sink.emit(SinkEvent::Regression {
                name: name.to_string(),
                value,
                rating,
            });
        }

        Ok(())
    }

    /// 레이아웃 이동 관측 처리.
    ///
    /// 직전 사용자 입력에 의한 이동은 누적에서 제외한다 (아코디언
    /// 펼치기 같은 의도된 레이아웃 변경을 회귀로 세지 않기 위함).
    /// 누적값은 세션 내내 리셋되지 않는다.
    fn on_layout_shift(&self, value: f64, had_recent_input: bool) {
        if had_recent_input {
            debug!("사용자 입력 직후 레이아웃 이동 제외: {value}");
            return;
        }

        if !value.is_finite() || value < 0.0 {
            warn!("잘못된 레이아웃 이동 값 폐기: {value}");
            return;
        }

        let accumulated = {
            let mut state = self.state.lock();
            state.cumulative_shift += value;
            state.cumulative_shift
        };

        self.on_sample(metric::LAYOUT_SHIFT_SCORE, accumulated);
    }

    /// 메트릭별 최신 요약.
    ///
    /// 현재 이력만의 순수 함수 — 이름마다 가장 최근 샘플 하나를
    /// 반영하며, 이력이 비어 있으면 빈 매핑을 반환한다.
    pub fn summarize(&self) -> PerformanceSummary {
        let state = self.state.lock();
        let mut summary = PerformanceSummary::new();
        for sample in state.history.iter() {
            summary.insert(
                sample.name.clone(),
                MetricSummary {
                    value: sample.value,
                    rating: sample.rating,
                    is_good: sample.rating.is_good(),
                },
            );
        }
        summary
    }

    /// 종합 점수 — 관측된 메트릭 중 good 비율 (0~100, 반올림).
    /// 아직 아무것도 관측되지 않았으면 0.
    pub fn score(&self) -> u8 {
        let summary = self.summarize();
        if summary.is_empty() {
            return 0;
        }
        let good = summary.values().filter(|s| s.is_good).count();
        ((good as f64 / summary.len() as f64) * 100.0).round() as u8
    }

    /// 리포트 생성 + 영속화.
    ///
    /// 주기 타이머와 화면 이탈 훅이 독립적으로 호출한다 — 같은 틱에
    /// 두 번 실행되어도 각각 완주하며, 저장소에는 나중 쓰기가 남는다.
    pub fn report(&self) -> PerformanceReport {
        let recent_samples = {
            let state = self.state.lock();
            let skip = state
                .history
                .len()
                .saturating_sub(self.config.recent_samples_in_report);
            state.history.iter().skip(skip).cloned().collect()
        };

        let report = PerformanceReport {
            report_id: Uuid::new_v4(),
            session_id: self.session_id,
            timestamp: Utc::now(),
            source_location: self.source.location(),
            recent_samples,
            summary: self.summarize(),
        };

        match serde_json::to_string(&report) {
            Ok(json) => {
                if let Err(e) = self.store.put(REPORT_KEY, &json) {
                    warn!("리포트 영속화 실패 (무시): {e}");
                }
            }
            Err(e) => warn!("리포트 직렬화 실패 (무시): {e}"),
        }

        debug!("리포트 생성: score={}, 샘플 {}개", self.score(), report.recent_samples.len());
        report
    }

    /// 화면 이탈(visibility-loss) 훅 — 마지막 상태를 한 번 더 남긴다
    pub fn on_hidden(&self) {
        debug!("화면 이탈 — 리포트 트리거");
        self.report();
    }

    /// 느린 리소스 배치 스캔.
    ///
    /// 현재까지 기록된 리소스 로드 엔트리 전체를 검사해 임계값을
    /// 초과한 것을 개별 poor 샘플로 기록한다. 플래그된 개수를 반환.
    pub fn scan_slow_resources(&self) -> usize {
        let entries = match self.source.resource_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("리소스 타이밍 조회 실패: {e}");
                return 0;
            }
        };

        let threshold = self.config.slow_resource_threshold_ms;
        let mut flagged = 0usize;
        for entry in entries {
            if entry.duration_ms > threshold {
                debug!("느린 리소스: {} ({:.0}ms)", entry.url, entry.duration_ms);
                self.on_sample(metric::SLOW_RESOURCE, entry.duration_ms);
                flagged += 1;
            }
        }

        if flagged > 0 {
            info!("느린 리소스 {flagged}개 감지 (임계값 {threshold:.0}ms)");
        }
        flagged
    }
}
