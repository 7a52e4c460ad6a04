use std::sync::Arc;

use atelier_config::Config;
use atelier_core_contact_impl::ContactFeatureConfig;
use atelier_core_health_impl::HealthFeatureConfig;
use atelier_core_quote_impl::QuoteFeatureConfig;
use atelier_di::provider;
use types::{ContactRepo, Email};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        contact_repo: ContactRepo,
        email: Email,
        ..config: ConfigProvider {
            ContactFeatureConfig,
            HealthFeatureConfig,
            QuoteFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, contact_repo: ContactRepo, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            contact_repo,
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        contact_feature_config: ContactFeatureConfig,
        health_feature_config: HealthFeatureConfig,
        quote_feature_config: QuoteFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let contact_feature_config = ContactFeatureConfig {
            inbox: Arc::new(config.contact.inbox.clone()),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        let quote_feature_config = QuoteFeatureConfig {
            inbox: Arc::new(config.quote.inbox.clone()),
        };

        Self {
            _cache: Default::default(),
            contact_feature_config,
            health_feature_config,
            quote_feature_config,
        }
    }
}
