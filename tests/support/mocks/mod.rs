pub mod article_repo;
pub mod time;

pub use article_repo::InMemoryArticleRepository;
pub use time::FixedClock;
