// tests/support/mocks/article_repos.rs
use article_board::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use article_board::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Article>,
}

/// Map-backed store with never-reused ids, like an AUTOINCREMENT table.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Table>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored row, in id order.
    pub fn snapshot(&self) -> Vec<Article> {
        self.inner.lock().unwrap().rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut table = self.inner.lock().unwrap();
        table.last_id += 1;
        let saved = Article {
            id: ArticleId::new(table.last_id)?,
            title: article.title,
            content: article.content,
        };
        let id = table.last_id;
        table.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.get(&i64::from(id)).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.snapshot())
    }

    async fn replace(&self, article: Article) -> DomainResult<Option<Article>> {
        let mut table = self.inner.lock().unwrap();
        let Some(slot) = table.rows.get_mut(&i64::from(article.id)) else {
            return Ok(None);
        };
        *slot = article.clone();
        Ok(Some(article))
    }

    async fn delete(&self, article: &Article) -> DomainResult<bool> {
        let mut table = self.inner.lock().unwrap();
        Ok(table.rows.remove(&i64::from(article.id)).is_some())
    }
}

/// Hands out the row on lookup but drops it from the table in the same step,
/// as if another request deleted it right after the read.
pub struct VanishingArticleRepo {
    pub inner: InMemoryArticleRepo,
}

impl VanishingArticleRepo {
    pub fn new(inner: InMemoryArticleRepo) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ArticleRepository for VanishingArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inner.insert(article).await
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let found = self.inner.find_by_id(id).await?;
        if let Some(article) = &found {
            self.inner.delete(article).await?;
        }
        Ok(found)
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.inner.find_all().await
    }

    async fn replace(&self, article: Article) -> DomainResult<Option<Article>> {
        self.inner.replace(article).await
    }

    async fn delete(&self, article: &Article) -> DomainResult<bool> {
        self.inner.delete(article).await
    }
}

/// Store whose every call fails, standing in for a lost database connection.
pub struct FailingArticleRepo;

fn offline<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database unavailable".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        offline()
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        offline()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        offline()
    }

    async fn replace(&self, _article: Article) -> DomainResult<Option<Article>> {
        offline()
    }

    async fn delete(&self, _article: &Article) -> DomainResult<bool> {
        offline()
    }
}
