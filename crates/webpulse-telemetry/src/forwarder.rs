//! 배치 HTTP 전달기.
//!
//! 이벤트를 lock-free 큐에 모아 배치로 수집 서버에 전송.
//! `emit`은 호출자 관점에서 fire-and-forget — 전송 실패는 flush
//! 루프가 로그로만 남기고 넘어간다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam::queue::SegQueue;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use webpulse_core::config::SinkConfig;
use webpulse_core::error::CoreError;
use webpulse_core::models::event::{SinkEvent, SinkEventBatch};
use webpulse_core::ports::sink::EventSink;

/// 배치 전달기 — Lock-free 이벤트 큐 → 배치 전송
pub struct BatchForwarder {
    client: reqwest::Client,
    config: SinkConfig,
    /// Lock-free 큐 — 여러 producer에서 동시 push 가능
    queue: SegQueue<SinkEvent>,
    /// 큐 크기 (lock-free 카운터)
    queue_size: AtomicUsize,
}

impl BatchForwarder {
    /// 새 배치 전달기 생성
    pub fn new(config: SinkConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            queue: SegQueue::new(),
            queue_size: AtomicUsize::new(0),
        }
    }

    /// 대기 중인 이벤트 수
    pub fn pending(&self) -> usize {
        self.queue_size.load(Ordering::Relaxed)
    }

    /// 큐에서 배치를 꺼내 수집 서버에 전송.
    ///
    /// 최대 `max_batch_size`개까지만 꺼낸다 — 나머지는 다음 flush가
    /// 처리한다. 재시도는 exponential backoff.
    pub async fn flush(&self) -> Result<usize, CoreError> {
        let current_size = self.queue_size.load(Ordering::Relaxed);
        if current_size == 0 {
            return Ok(0);
        }

        let drain_count = current_size.min(self.config.max_batch_size);
        let mut events = Vec::with_capacity(drain_count);
        for _ in 0..drain_count {
            if let Some(event) = self.queue.pop() {
                events.push(event);
            } else {
                break;
            }
        }

        let actual_count = events.len();
        if actual_count == 0 {
            return Ok(0);
        }
        self.queue_size.fetch_sub(actual_count, Ordering::Relaxed);

        let batch = SinkEventBatch {
            destination_id: self.config.destination_id.clone(),
            created_at: chrono::Utc::now(),
            events,
        };

        // exponential backoff 재시도
        let mut retry_delay = Duration::from_secs(1);
        let mut last_err = None;
        for attempt in 0..=self.config.max_retries {
            match self.send_batch(&batch).await {
                Ok(()) => {
                    debug!("배치 전달 성공: {actual_count}개 이벤트");
                    return Ok(actual_count);
                }
                Err(e) => {
                    if attempt < self.config.max_retries {
                        warn!(
                            "배치 전달 실패 (시도 {}/{}): {e}",
                            attempt + 1,
                            self.config.max_retries + 1
                        );
                        tokio::time::sleep(retry_delay).await;
                        retry_delay = (retry_delay * 2).min(Duration::from_secs(30));
                    }
                    last_err = Some(e);
                }
            }
        }

        error!("배치 전달 포기: {actual_count}개 이벤트 유실");
        Err(last_err.unwrap_or_else(|| CoreError::Network("배치 전달 실패".to_string())))
    }

    /// 주기 flush 루프 생성. 실패는 로그 후 무시한다.
    pub fn spawn_flush_loop(self: &Arc<Self>) -> JoinHandle<()> {
        let forwarder = Arc::clone(self);
        let interval = forwarder.config.flush_interval();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if let Err(e) = forwarder.flush().await {
                    warn!("싱크 flush 실패 (무시): {e}");
                }
            }
        })
    }

    async fn send_batch(&self, batch: &SinkEventBatch) -> Result<(), CoreError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(batch)
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("전송 실패: {e}")))?;

        if !response.status().is_success() {
            return Err(CoreError::Network(format!(
                "수집 서버 응답 {}",
                response.status()
            )));
        }
        Ok(())
    }
}

impl EventSink for BatchForwarder {
    fn emit(&self, event: SinkEvent) {
        self.queue.push(event);
        let size = self.queue_size.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("이벤트 큐 추가, 현재 크기: {size}");
    }
}
