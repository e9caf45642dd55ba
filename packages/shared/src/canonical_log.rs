//! # Canonical Log Line
//!
//! 1 リクエストにつき 1 行、メソッド・パス・ステータス・処理時間をまとめた
//! INFO ログ（`log.type = "canonical"`）を出力する tower Layer。
//!
//! `TraceLayer` より内側に置くと、リクエストスパンの `request_id` が
//! 同じ行に載る:
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → PropagateRequestIdLayer → CanonicalLogLineLayer → handler
//! ```
//!
//! `/health` は監視から高頻度で叩かれるため出力しない。

use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Method, Request, Response};
use tower::{Layer, Service};

/// 出力対象外のパス
const EXCLUDED_PATHS: &[&str] = &["/health"];

/// Canonical Log Line を出力する Layer
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLine<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLine { inner }
    }
}

/// [`CanonicalLogLineLayer`] でラップされた Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLine<S> {
    inner: S,
}

/// 完了ログに載せるリクエスト情報
struct RequestSummary {
    method:  Method,
    path:    String,
    started: Instant,
}

impl RequestSummary {
    /// 出力対象のリクエストであれば情報を記録する
    fn capture<B>(req: &Request<B>) -> Option<Self> {
        let path = req.uri().path();
        if EXCLUDED_PATHS.contains(&path) {
            return None;
        }

        Some(Self {
            method:  req.method().clone(),
            path:    path.to_owned(),
            started: Instant::now(),
        })
    }

    fn emit<B, E: Display>(self, outcome: &Result<Response<B>, E>) {
        let latency_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(response) => tracing::info!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了"
            ),
            Err(e) => tracing::error!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.latency_ms = latency_ms,
                error.message = %e,
                "リクエスト失敗"
            ),
        }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLine<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Display,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = Response<ResBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let summary = RequestSummary::capture(&req);
        let response = self.inner.call(req);

        Box::pin(async move {
            let outcome = response.await;
            if let Some(summary) = summary {
                summary.emit(&outcome);
            }
            outcome
        })
    }
}
