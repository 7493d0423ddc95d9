// tests/support/mod.rs
pub mod mocks;

use std::sync::Arc;

use articled::application::{ports::time::Clock, services::ApplicationServices};
use articled::domain::article::ArticleRepository;
use articled::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use chrono::{TimeZone, Utc};

pub fn fixed_instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

pub fn make_services() -> (Arc<ApplicationServices>, Arc<mocks::FixedClock>) {
    let repo: Arc<dyn ArticleRepository> = Arc::new(mocks::InMemoryArticleRepository::default());
    let clock = Arc::new(mocks::FixedClock::new(fixed_instant()));
    let services = Arc::new(ApplicationServices::new(
        repo,
        Arc::clone(&clock) as Arc<dyn Clock>,
    ));
    (services, clock)
}

pub fn make_test_router() -> Router {
    let (services, _clock) = make_services();
    build_router(HttpState { services })
}
