use serde::{Deserialize, Serialize};

/// Unified error type for all translation operations.
///
/// Each variant includes a `provider` field identifying which provider produced
/// the error; attempt-scoped variants additionally carry the `flavor` that was
/// being tried. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent single-attempt failures that a retrying
/// selection policy (sequential, mix) absorbs and logs before moving on to the
/// next endpoint flavor:
/// - [`Network`](Self::Network) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`HttpStatus`](Self::HttpStatus) — response status outside `[200, 300)`
/// - [`Format`](Self::Format) — response body did not match the flavor's shape
///
/// [`Cancelled`](Self::Cancelled) is never absorbed: it terminates the policy
/// loop immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum TranslateError {
    /// The options passed to the factory are invalid.
    ///
    /// Surfaced at construction time only, never from a translate call.
    Config {
        /// Provider the options were for.
        provider: String,
        /// What is wrong with the configuration.
        detail: String,
    },

    /// A call argument is invalid (e.g., empty input batch, empty target
    /// language code).
    InvalidParameter {
        /// Provider that rejected the call.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    Network {
        /// Provider that produced the error.
        provider: String,
        /// Endpoint flavor that was being attempted.
        flavor: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Endpoint flavor that was being attempted.
        flavor: String,
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a status code outside `[200, 300)`.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// Endpoint flavor that was being attempted.
        flavor: String,
        /// The offending status code.
        status: u16,
    },

    /// The response payload did not match the shape expected for the flavor,
    /// or was empty where content is required.
    ///
    /// An empty payload is always a `Format` error, never an empty success.
    Format {
        /// Provider that produced the error.
        provider: String,
        /// Endpoint flavor whose decoder rejected the payload.
        flavor: String,
        /// Details about the shape mismatch.
        detail: String,
    },

    /// A retrying selection policy exhausted every candidate flavor.
    ///
    /// This is the terminal aggregate for the sequential and mix policies;
    /// the individual per-flavor failures are logged, not propagated.
    AllFlavorsFailed {
        /// Provider whose flavors were exhausted.
        provider: String,
        /// Flavors that were attempted, in attempt order.
        attempts: Vec<String>,
    },

    /// The caller's cancellation token fired during an attempt.
    ///
    /// Surfaced as-is; a retrying policy stops instead of trying the next
    /// flavor.
    Cancelled {
        /// Provider whose dispatch was cancelled.
        provider: String,
    },
}

impl TranslateError {
    /// 该错误是否允许回退策略继续尝试下一个 flavor。
    ///
    /// 返回 `false` 的错误（取消、配置、参数错误）直接终止策略循环。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_flavor_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. }
                | Self::Timeout { .. }
                | Self::HttpStatus { .. }
                | Self::Format { .. }
        )
    }
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config { provider, detail } => {
                write!(f, "[{provider}] Invalid configuration: {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::Network {
                provider,
                flavor,
                detail,
            } => {
                write!(f, "[{provider}] Network error ({flavor}): {detail}")
            }
            Self::Timeout {
                provider,
                flavor,
                detail,
            } => {
                write!(f, "[{provider}] Request timeout ({flavor}): {detail}")
            }
            Self::HttpStatus {
                provider,
                flavor,
                status,
            } => {
                write!(f, "[{provider}] HTTP status {status} ({flavor})")
            }
            Self::Format {
                provider,
                flavor,
                detail,
            } => {
                write!(
                    f,
                    "[{provider}] Unexpected response format ({flavor}): {detail}"
                )
            }
            Self::AllFlavorsFailed { provider, attempts } => {
                write!(
                    f,
                    "[{provider}] All endpoint flavors failed (tried: {})",
                    attempts.join(", ")
                )
            }
            Self::Cancelled { provider } => {
                write!(f, "[{provider}] Translation cancelled")
            }
        }
    }
}

impl std::error::Error for TranslateError {}

/// Convenience type alias for `Result<T, TranslateError>`.
pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let e = TranslateError::Config {
            provider: "microsoft".to_string(),
            detail: "edge flavor requires an auth key".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[microsoft] Invalid configuration: edge flavor requires an auth key"
        );
    }

    #[test]
    fn display_invalid_parameter() {
        let e = TranslateError::InvalidParameter {
            provider: "google".to_string(),
            param: "texts".to_string(),
            detail: "input batch must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[google] Invalid parameter 'texts': input batch must not be empty"
        );
    }

    #[test]
    fn display_network_error() {
        let e = TranslateError::Network {
            provider: "google".to_string(),
            flavor: "client-gtx".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[google] Network error (client-gtx): connection refused"
        );
    }

    #[test]
    fn display_timeout() {
        let e = TranslateError::Timeout {
            provider: "google".to_string(),
            flavor: "html".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[google] Request timeout (html): 30s elapsed");
    }

    #[test]
    fn display_http_status() {
        let e = TranslateError::HttpStatus {
            provider: "google".to_string(),
            flavor: "pa-gtx".to_string(),
            status: 403,
        };
        assert_eq!(e.to_string(), "[google] HTTP status 403 (pa-gtx)");
    }

    #[test]
    fn display_format() {
        let e = TranslateError::Format {
            provider: "google".to_string(),
            flavor: "html".to_string(),
            detail: "empty outer array".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[google] Unexpected response format (html): empty outer array"
        );
    }

    #[test]
    fn display_all_flavors_failed() {
        let e = TranslateError::AllFlavorsFailed {
            provider: "google".to_string(),
            attempts: vec!["html".to_string(), "client-gtx".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "[google] All endpoint flavors failed (tried: html, client-gtx)"
        );
    }

    #[test]
    fn display_cancelled() {
        let e = TranslateError::Cancelled {
            provider: "google".to_string(),
        };
        assert_eq!(e.to_string(), "[google] Translation cancelled");
    }

    #[test]
    fn serialize_json_round_trip() {
        let e = TranslateError::HttpStatus {
            provider: "google".to_string(),
            flavor: "html".to_string(),
            status: 429,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"HttpStatus\""));
        assert!(json.contains("\"status\":429"));
        let back: TranslateError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<TranslateError> = vec![
            TranslateError::Config {
                provider: "t".into(),
                detail: "d".into(),
            },
            TranslateError::InvalidParameter {
                provider: "t".into(),
                param: "texts".into(),
                detail: "empty".into(),
            },
            TranslateError::Network {
                provider: "t".into(),
                flavor: "html".into(),
                detail: "d".into(),
            },
            TranslateError::Timeout {
                provider: "t".into(),
                flavor: "html".into(),
                detail: "d".into(),
            },
            TranslateError::HttpStatus {
                provider: "t".into(),
                flavor: "html".into(),
                status: 500,
            },
            TranslateError::Format {
                provider: "t".into(),
                flavor: "html".into(),
                detail: "d".into(),
            },
            TranslateError::AllFlavorsFailed {
                provider: "t".into(),
                attempts: vec!["html".into()],
            },
            TranslateError::Cancelled { provider: "t".into() },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: TranslateError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }

    #[test]
    fn retryable_classification() {
        assert!(
            TranslateError::Network {
                provider: "t".into(),
                flavor: "html".into(),
                detail: "x".into(),
            }
            .is_flavor_retryable()
        );
        assert!(
            TranslateError::Timeout {
                provider: "t".into(),
                flavor: "html".into(),
                detail: "x".into(),
            }
            .is_flavor_retryable()
        );
        assert!(
            TranslateError::HttpStatus {
                provider: "t".into(),
                flavor: "html".into(),
                status: 503,
            }
            .is_flavor_retryable()
        );
        assert!(
            TranslateError::Format {
                provider: "t".into(),
                flavor: "html".into(),
                detail: "x".into(),
            }
            .is_flavor_retryable()
        );
        assert!(
            !TranslateError::Cancelled {
                provider: "t".into(),
            }
            .is_flavor_retryable()
        );
        assert!(
            !TranslateError::Config {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_flavor_retryable()
        );
        assert!(
            !TranslateError::AllFlavorsFailed {
                provider: "t".into(),
                attempts: vec![],
            }
            .is_flavor_retryable()
        );
    }
}
