use std::{sync::Arc, time::Duration};

use atelier_core_health_contracts::{HealthFeatureService, HealthStatus};
use atelier_di::Build;
use atelier_email_contracts::EmailService;
use atelier_shared_contracts::time::TimeService;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Email> {
    time: Time,
    email: Email,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Email>
where
    Time: TimeService,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let status = HealthStatus { email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use atelier_email_contracts::MockEmailService;
    use atelier_shared_contracts::time::MockTimeService;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let sut = sut(Ok(()));

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: true });
    }

    #[tokio::test]
    async fn smtp_unreachable() {
        // Arrange
        let sut = sut(Err(anyhow!("connection refused")));

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn cached_within_ttl() {
        // Arrange
        let now = now();
        let mut time = MockTimeService::new();
        time.expect_now().times(2).return_const(now);

        // a single ping must serve both calls
        let email = MockEmailService::new().with_ping(Ok(()));

        let sut = HealthFeatureServiceImpl {
            time,
            email,
            config: config(),
            state: Default::default(),
        };

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: true });
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn refreshed_after_ttl() {
        // Arrange
        let now = now();
        let mut time = MockTimeService::new();
        let mut seq = mockall::Sequence::new();
        time.expect_now()
            .once()
            .in_sequence(&mut seq)
            .return_const(now);
        time.expect_now()
            .once()
            .in_sequence(&mut seq)
            .return_const(now + config().cache_ttl);

        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut = HealthFeatureServiceImpl {
            time,
            email,
            config: config(),
            state: Default::default(),
        };

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, HealthStatus { email: true });
        assert_eq!(second, first);
    }

    fn sut(
        ping_result: anyhow::Result<()>,
    ) -> HealthFeatureServiceImpl<MockTimeService, MockEmailService> {
        HealthFeatureServiceImpl {
            time: MockTimeService::new().with_now(now()),
            email: MockEmailService::new().with_ping(ping_result),
            config: config(),
            state: Default::default(),
        }
    }

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig {
            cache_ttl: Duration::from_secs(30),
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-05-06T07:08:09Z".parse().unwrap()
    }
}
