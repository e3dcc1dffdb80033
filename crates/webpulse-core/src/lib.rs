//! # webpulse-core
//!
//! WEBPULSE 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 수집기와 어댑터 crate가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 수집기/싱크/저장소 설정 구조체

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
