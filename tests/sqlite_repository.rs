// tests/sqlite_repository.rs
//
// Exercises the real repository against an in-memory SQLite database.
use articled::domain::article::{
    ArticleContent, ArticleId, ArticleRepository, ArticleTitle, ArticleUpdate, NewArticle,
};
use articled::infrastructure::repositories::SqliteArticleRepository;
use chrono::{Duration, TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;

async fn make_repo() -> SqliteArticleRepository {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    SqliteArticleRepository::new(pool)
}

fn new_article(title: &str, content: &str) -> NewArticle {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    NewArticle {
        title: ArticleTitle::new(title).unwrap(),
        content: ArticleContent::new(content).unwrap(),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let repo = make_repo().await;

    let first = repo.insert(new_article("one", "c1")).await.unwrap();
    let second = repo.insert(new_article("two", "c2")).await.unwrap();
    assert!(i64::from(first.id) > 0);
    assert!(i64::from(second.id) > i64::from(first.id));
}

#[tokio::test]
async fn find_by_id_roundtrips_fields() {
    let repo = make_repo().await;

    let created = repo.insert(new_article("title", "content")).await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title.as_str(), "title");
    assert_eq!(fetched.content.as_str(), "content");
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn find_by_id_absent_returns_none() {
    let repo = make_repo().await;

    let missing = repo
        .find_by_id(ArticleId::new(404).unwrap())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn update_persists_and_errors_on_absent_id() {
    let repo = make_repo().await;

    let created = repo.insert(new_article("before", "old")).await.unwrap();
    let update = ArticleUpdate {
        id: created.id,
        title: ArticleTitle::new("after").unwrap(),
        content: ArticleContent::new("new").unwrap(),
        updated_at: created.updated_at + Duration::seconds(60),
    };
    let updated = repo.update(update).await.unwrap();
    assert_eq!(updated.title.as_str(), "after");
    assert_eq!(updated.content.as_str(), "new");
    assert!(updated.updated_at > created.updated_at);

    let absent = ArticleUpdate {
        id: ArticleId::new(9999).unwrap(),
        title: ArticleTitle::new("x").unwrap(),
        content: ArticleContent::new("y").unwrap(),
        updated_at: Utc::now(),
    };
    assert!(repo.update(absent).await.is_err());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let repo = make_repo().await;

    let created = repo.insert(new_article("gone", "soon")).await.unwrap();
    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    // Absent id: still Ok.
    repo.delete(created.id).await.unwrap();
    repo.delete(ArticleId::new(777).unwrap()).await.unwrap();
}

#[tokio::test]
async fn list_orders_newest_first_with_limit() {
    let repo = make_repo().await;

    let base = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    for n in 0..3 {
        let article = NewArticle {
            title: ArticleTitle::new(format!("post {n}")).unwrap(),
            content: ArticleContent::new("content").unwrap(),
            created_at: base + Duration::seconds(n),
            updated_at: base + Duration::seconds(n),
        };
        repo.insert(article).await.unwrap();
    }

    let listed = repo.list(2).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title.as_str(), "post 2");
    assert_eq!(listed[1].title.as_str(), "post 1");
}
