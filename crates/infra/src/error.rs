//! # インフラ層エラー定義
//!
//! ストア操作で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! convenience constructor や `From` 実装でエラーを生成すると、
//! その時点のスパン情報（呼び出し経路）が自動的に記録される。

use std::{fmt, sync::PoisonError};

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ロック汚染
    ///
    /// ストアのロックを保持したスレッドがパニックした場合。
    #[error("ストアのロックが汚染されています: {0}")]
    LockPoisoned(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Unexpected(msg.into()))
    }

    fn with_kind(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl<T> From<PoisonError<T>> for InfraError {
    fn from(source: PoisonError<T>) -> Self {
        Self::with_kind(InfraErrorKind::LockPoisoned(source.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_unexpectedでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("modify_user", user.id = "U-001");
            let _enter = span.enter();

            let err = InfraError::unexpected("未登録のユーザー");

            assert!(matches!(err.kind(), InfraErrorKind::Unexpected(_)));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("modify_user"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_poison_errorはlock_poisonedに変換される() {
        let lock = Arc::new(RwLock::new(0));
        let poisoned = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = poisoned.write().unwrap();
            panic!("poison");
        })
        .join();

        let err: InfraError = lock.read().unwrap_err().into();

        assert!(matches!(err.kind(), InfraErrorKind::LockPoisoned(_)));
    }

    #[test]
    fn test_displayがinfra_error_kindのメッセージを出力する() {
        let err = InfraError::unexpected("boom");
        assert_eq!(format!("{err}"), "予期しないエラー: boom");
    }
}
