//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lingo_broker::{
    GoogleApiFlavor, MicrosoftApiFlavor, Provider, Result, TranslateError, TranslateOptions,
    Transport, TransportRequest,
};
use tokio_util::sync::CancellationToken;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_live {
    () => {
        if std::env::var("LINGO_BROKER_LIVE").is_err() {
            eprintln!("跳过测试: 缺少环境变量 LINGO_BROKER_LIVE");
            return;
        }
    };
}

/// Scripted outcome of one flavor's transport attempt.
#[derive(Clone)]
pub enum MockOutcome {
    /// Succeed with this response body.
    Body(Vec<u8>),
    /// Fail with an HTTP status error.
    Status(u16),
    /// Fail with a network error.
    NetworkError,
    /// Fire the token mid-attempt and fail with `Cancelled`, the way the
    /// production transport reports a cancellation race.
    CancelDuring(CancellationToken),
}

/// One recorded transport attempt.
#[derive(Clone)]
pub struct AttemptRecord {
    pub flavor: String,
    pub request: TransportRequest,
}

/// Synthetic [`Transport`] scripted per flavor. Records every attempt in
/// order; an unscripted flavor fails with a network error.
pub struct MockTransport {
    outcomes: Mutex<HashMap<String, MockOutcome>>,
    attempts: Mutex<Vec<AttemptRecord>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(HashMap::new()),
            attempts: Mutex::new(Vec::new()),
        })
    }

    /// Script the outcome of the next attempts against `flavor`.
    pub fn script(&self, flavor: &str, outcome: MockOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(flavor.to_string(), outcome);
    }

    /// Flavors attempted so far, in order.
    pub fn attempted_flavors(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.flavor.clone())
            .collect()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    /// The first recorded request against `flavor`, if any.
    pub fn request_for(&self, flavor: &str) -> Option<TransportRequest> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.flavor == flavor)
            .map(|a| a.request.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        _cancel: &CancellationToken,
        provider: &str,
        flavor: &str,
        request: TransportRequest,
    ) -> Result<Vec<u8>> {
        self.attempts.lock().unwrap().push(AttemptRecord {
            flavor: flavor.to_string(),
            request,
        });
        let outcome = self.outcomes.lock().unwrap().get(flavor).cloned();
        match outcome {
            Some(MockOutcome::Body(body)) => Ok(body),
            Some(MockOutcome::Status(status)) => Err(TranslateError::HttpStatus {
                provider: provider.to_string(),
                flavor: flavor.to_string(),
                status,
            }),
            Some(MockOutcome::CancelDuring(token)) => {
                token.cancel();
                Err(TranslateError::Cancelled {
                    provider: provider.to_string(),
                })
            }
            Some(MockOutcome::NetworkError) | None => Err(TranslateError::Network {
                provider: provider.to_string(),
                flavor: flavor.to_string(),
                detail: "connection refused (scripted)".to_string(),
            }),
        }
    }
}

/// Google options wired to a mock transport, with a fixed seed for
/// deterministic policy behavior.
pub fn google_options(flavor: GoogleApiFlavor, transport: &Arc<MockTransport>) -> TranslateOptions {
    TranslateOptions {
        google_api_flavor: Some(flavor),
        random_seed: Some(7),
        transport: Some(transport.clone() as Arc<dyn Transport>),
        ..Default::default()
    }
}

/// Microsoft options wired to a mock transport.
pub fn microsoft_options(
    flavor: MicrosoftApiFlavor,
    transport: &Arc<MockTransport>,
) -> TranslateOptions {
    TranslateOptions {
        provider: Provider::Microsoft,
        microsoft_api_flavor: Some(flavor),
        transport: Some(transport.clone() as Arc<dyn Transport>),
        ..Default::default()
    }
}

/// 生成测试输入批次
pub fn batch(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
