use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Persist a full-field update. Returns `NotFound` when the id is absent.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Deleting an absent id is a successful no-op.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>>;
}
