use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Retry configuration for search engine calls
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// No waiting between attempts, for tests against a local mock server
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
            jitter: false,
        }
    }
}

/// Retry utility with exponential backoff
pub struct RetryUtil;

impl RetryUtil {
    /// Execute a function with retry logic and exponential backoff
    pub async fn with_retry<F, Fut, T>(
        operation: F,
        config: &RetryConfig,
        operation_name: &str,
    ) -> AppResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = AppResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(
                            "{} succeeded on attempt {} after {} retries",
                            operation_name,
                            attempt + 1,
                            attempt
                        );
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !Self::is_retryable_error(&error) {
                        debug!(
                            "{} failed with non-retryable error: {}",
                            operation_name, error
                        );
                        return Err(error);
                    }

                    if attempt < config.max_retries {
                        let delay = Self::calculate_delay(attempt, config);
                        warn!(
                            "{} failed on attempt {} ({}), retrying in {:?}",
                            operation_name,
                            attempt + 1,
                            error,
                            delay
                        );
                        sleep(delay).await;
                    } else {
                        warn!(
                            "{} failed on final attempt {} ({}), giving up",
                            operation_name,
                            attempt + 1,
                            error
                        );
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::ExternalServiceError("All retries exhausted".to_string())))
    }

    /// Calculate delay for the given attempt with exponential backoff and jitter
    fn calculate_delay(attempt: u32, config: &RetryConfig) -> Duration {
        let exponential_delay =
            config.base_delay.as_millis() as f64 * config.backoff_multiplier.powi(attempt as i32);

        let mut delay = Duration::from_millis(exponential_delay as u64);

        if delay > config.max_delay {
            delay = config.max_delay;
        }

        // 10% jitter to spread concurrent retries
        if config.jitter {
            let jitter_factor = 0.1;
            let jitter_ms =
                (delay.as_millis() as f64 * jitter_factor * rand::random::<f64>()) as u64;
            delay = Duration::from_millis(delay.as_millis() as u64 + jitter_ms);
        }

        delay
    }

    /// Determine if an error should trigger a retry
    fn is_retryable_error(error: &AppError) -> bool {
        match error {
            AppError::ExternalServiceError(_) | AppError::RateLimitError(_) => true,

            AppError::ApiError(msg) => {
                let msg = msg.to_lowercase();
                !msg.contains("not found")
                    && !msg.contains("unauthorized")
                    && !msg.contains("forbidden")
                    && !msg.contains("bad request")
            }

            AppError::NotFound(_)
            | AppError::EntityValidation(_)
            | AppError::LoadEntity(_)
            | AppError::SearchValidation(_)
            | AppError::InvalidArgument(_)
            | AppError::InvalidUuid(_)
            | AppError::InvalidInput(_)
            | AppError::Unauthorized(_)
            | AppError::SerializationError(_)
            | AppError::StoreError(_) => false,

            AppError::InternalError(_) => true,
        }
    }

    /// Retry specifically for HTTP requests with status code analysis
    pub async fn retry_http_request<F, Fut>(
        request_fn: F,
        config: &RetryConfig,
        operation_name: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        Self::with_retry(
            || async {
                match request_fn().await {
                    Ok(response) => {
                        let status = response.status();
                        if Self::is_retryable_status(status) {
                            Err(Self::status_to_app_error(status))
                        } else {
                            Ok(response)
                        }
                    }
                    Err(e) if e.is_timeout() || e.is_connect() => Err(
                        AppError::ExternalServiceError(format!("HTTP request failed: {}", e)),
                    ),
                    Err(e) => Err(AppError::from(e)),
                }
            },
            config,
            operation_name,
        )
        .await
    }

    /// Check if HTTP status code indicates a retryable error
    fn is_retryable_status(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
                | StatusCode::TOO_MANY_REQUESTS
                | StatusCode::REQUEST_TIMEOUT
        )
    }

    /// Convert HTTP status to appropriate AppError
    pub fn status_to_app_error(status: StatusCode) -> AppError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError("Rate limit exceeded".to_string())
            }
            StatusCode::NOT_FOUND => AppError::NotFound("Resource not found".to_string()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::Unauthorized(format!("Search engine refused access: {}", status))
            }
            StatusCode::BAD_REQUEST => AppError::ApiError("Bad request".to_string()),
            _ if status.is_server_error() => {
                AppError::ExternalServiceError(format!("Server error: {}", status))
            }
            _ => AppError::ApiError(format!("HTTP error: {}", status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retries_transient_failures_until_success() {
        let attempts = AtomicU32::new(0);
        let counter = &attempts;

        let result = RetryUtil::with_retry(
            move || async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(AppError::ExternalServiceError("unavailable".to_string()))
                } else {
                    Ok("done")
                }
            },
            &RetryConfig::immediate(3),
            "flaky",
        )
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stops_on_non_retryable_errors() {
        let attempts = AtomicU32::new(0);
        let counter = &attempts;

        let result: AppResult<()> = RetryUtil::with_retry(
            move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(AppError::StoreError("mapping conflict".to_string()))
            },
            &RetryConfig::immediate(3),
            "broken",
        )
        .await;

        assert!(matches!(result, Err(AppError::StoreError(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn returns_last_error_when_retries_run_out() {
        let attempts = AtomicU32::new(0);
        let counter = &attempts;

        let result: AppResult<()> = RetryUtil::with_retry(
            move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(AppError::RateLimitError("slow down".to_string()))
            },
            &RetryConfig::immediate(2),
            "throttled",
        )
        .await;

        assert_eq!(result, Err(AppError::RateLimitError("slow down".to_string())));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn delay_is_capped() {
        let config = RetryConfig {
            max_retries: 10,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(300),
            backoff_multiplier: 2.0,
            jitter: false,
        };

        assert_eq!(RetryUtil::calculate_delay(0, &config), Duration::from_millis(100));
        assert_eq!(RetryUtil::calculate_delay(1, &config), Duration::from_millis(200));
        assert_eq!(RetryUtil::calculate_delay(5, &config), Duration::from_millis(300));
    }
}
