//! 로그 싱크.
//!
//! 이벤트를 구조화 로그로만 남기는 `EventSink` 구현.
//! 외부 수집 서버가 없는 환경의 기본 싱크.

use tracing::{debug, warn};

use webpulse_core::models::event::SinkEvent;
use webpulse_core::ports::sink::EventSink;

/// tracing 기반 이벤트 싱크
pub struct LogSink {
    destination_id: String,
}

impl LogSink {
    /// 새 로그 싱크 생성
    pub fn new(destination_id: impl Into<String>) -> Self {
        Self {
            destination_id: destination_id.into(),
        }
    }
}

impl EventSink for LogSink {
    fn emit(&self, event: SinkEvent) {
        match event {
            SinkEvent::Sample(sample) => {
                debug!(
                    destination = %self.destination_id,
                    "샘플 전달: {}={} ({:?})",
                    sample.name, sample.value, sample.rating
                );
            }
            SinkEvent::Regression { name, value, rating } => {
                warn!(
                    destination = %self.destination_id,
                    "성능 회귀 알림: {name}={value} ({rating:?})"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webpulse_core::models::sample::{metric, MetricSample};

    #[test]
    fn emit_never_panics() {
        let sink = LogSink::new("webpulse-default");
        sink.emit(SinkEvent::Sample(MetricSample::new(
            metric::LARGEST_PAINT_DELAY,
            2000.0,
        )));
        sink.emit(SinkEvent::Regression {
            name: metric::LARGEST_PAINT_DELAY.to_string(),
            value: 5000.0,
            rating: webpulse_core::models::sample::Rating::Poor,
        });
    }
}
