// tests/support/mocks/article_repo.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use articled::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use articled::domain::article::repository::ArticleRepository;
use articled::domain::article::value_objects::ArticleId;
use articled::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// In-memory stand-in for the SQLite repository. Ids are assigned
/// sequentially, matching the autoincrement column.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Article>,
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let stored = Article {
            id: ArticleId::new(inner.next_id)?,
            title: article.title,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        let id = inner.next_id;
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.title = update.title;
        row.content = update.content;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.remove(&i64::from(id));
        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let inner = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = inner.rows.values().cloned().collect();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        articles.truncate(limit.clamp(1, 100) as usize);
        Ok(articles)
    }
}
