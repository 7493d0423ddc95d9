use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesQuery {
    pub limit: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.list(query.limit).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
