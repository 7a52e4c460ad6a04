use atelier_core_contact_impl::ContactFeatureServiceImpl;
use atelier_core_health_impl::HealthFeatureServiceImpl;
use atelier_core_quote_impl::QuoteFeatureServiceImpl;
use atelier_email_impl::EmailServiceImpl;
use atelier_persistence_memory::contact::MemoryContactMessageRepository;
use atelier_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = atelier_api_rest::RestServer<HealthFeature, ContactFeature, QuoteFeature>;

// Email
pub type Email = EmailServiceImpl;

// Persistence
pub type ContactRepo = MemoryContactMessageRepository;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;
pub type ContactFeature = ContactFeatureServiceImpl<Id, Time, ContactRepo, Email>;
pub type QuoteFeature = QuoteFeatureServiceImpl<Time, Email>;
