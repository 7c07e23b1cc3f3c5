// src/infrastructure/repositories/postgres_article.rs
use super::error::{from_sql_count, map_sqlx, to_sql_bound};
use super::postgres_comment::{COMMENT_COLUMNS, CommentRow};
use crate::domain::article::{
    Article, ArticleId, ArticlePage, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, DiscussedArticle, NewArticle, PageWindow,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::comment::Comment;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.announce, a.full_text, a.picture, a.author_id, a.created_at";
const ARTICLE_ORDER: &str = " ORDER BY a.created_at DESC, a.id DESC";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    announce: String,
    full_text: Option<String>,
    picture: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(
        self,
        categories: Vec<Category>,
        comments: Option<Vec<Comment>>,
    ) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            announce: self.announce,
            full_text: self.full_text,
            picture: self.picture,
            author_id: UserId::new(self.author_id)?,
            categories,
            comments,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategoryLinkRow {
    article_id: i64,
    id: i64,
    name: String,
}

#[derive(Debug, FromRow)]
struct DiscussedRow {
    id: i64,
    title: String,
    announce: String,
    comments_count: i64,
}

impl TryFrom<DiscussedRow> for DiscussedArticle {
    type Error = DomainError;

    fn try_from(row: DiscussedRow) -> Result<Self, Self::Error> {
        Ok(DiscussedArticle {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            announce: row.announce,
            comments_count: from_sql_count(row.comments_count),
        })
    }
}

/// Attaches categories, and comments when asked for, to a batch of rows
/// using one query per relation.
async fn hydrate(
    pool: &PgPool,
    rows: Vec<ArticleRow>,
    with_comments: bool,
) -> DomainResult<Vec<Article>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

    let links = sqlx::query_as::<_, CategoryLinkRow>(
        "SELECT ac.article_id, c.id, c.name
         FROM article_categories ac
         JOIN categories c ON c.id = ac.category_id
         WHERE ac.article_id = ANY($1)
         ORDER BY c.id",
    )
    .bind(ids.as_slice())
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut categories: HashMap<i64, Vec<Category>> = HashMap::new();
    for link in links {
        categories.entry(link.article_id).or_default().push(Category {
            id: CategoryId::new(link.id)?,
            name: link.name,
        });
    }

    let mut comments: Option<HashMap<i64, Vec<Comment>>> = None;
    if with_comments {
        let comment_rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE article_id = ANY($1)
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(ids.as_slice())
        .fetch_all(pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_article: HashMap<i64, Vec<Comment>> = HashMap::new();
        for row in comment_rows {
            let article_id = row.article_id;
            by_article
                .entry(article_id)
                .or_default()
                .push(Comment::try_from(row)?);
        }
        comments = Some(by_article);
    }

    rows.into_iter()
        .map(|row| {
            let article_categories = categories.remove(&row.id).unwrap_or_default();
            let article_comments = comments
                .as_mut()
                .map(|by_article| by_article.remove(&row.id).unwrap_or_default());
            row.into_article(article_categories, article_comments)
        })
        .collect()
}

async fn fetch_one_hydrated(pool: &PgPool, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    let Some(row) = row else {
        return Ok(None);
    };
    Ok(hydrate(pool, vec![row], true).await?.into_iter().next())
}

async fn replace_categories(
    conn: &mut PgConnection,
    article_id: i64,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_categories WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if category_ids.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO article_categories (article_id, category_id) ");
    builder.push_values(category_ids, |mut row, category_id| {
        row.push_bind(article_id).push_bind(i64::from(*category_id));
    });
    builder.push(" ON CONFLICT DO NOTHING");
    builder
        .build()
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            announce,
            full_text,
            picture,
            author_id,
            category_ids,
            created_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (title, announce, full_text, picture, author_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(announce)
        .bind(full_text)
        .bind(picture)
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_categories(&mut tx, id, &category_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        fetch_one_hydrated(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            announce,
            full_text,
            picture,
            category_ids,
            created_at,
        } = update;
        let id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let result = sqlx::query(
            "UPDATE articles
             SET title = $1, announce = $2, full_text = $3, picture = $4, created_at = $5
             WHERE id = $6",
        )
        .bind(title.as_str())
        .bind(announce)
        .bind(full_text)
        .bind(picture)
        .bind(created_at)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        replace_categories(&mut tx, id, &category_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        fetch_one_hydrated(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/// Escapes `LIKE` wildcards so the query matches literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresArticleReadRepository {
    async fn fetch_rows(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<ArticleRow>> {
        builder.push(ARTICLE_ORDER);
        if let Some(window) = window {
            builder.push(" LIMIT ");
            builder.push_bind(to_sql_bound(window.limit));
            builder.push(" OFFSET ");
            builder.push_bind(to_sql_bound(window.offset));
        }

        builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_one_hydrated(&self.pool, i64::from(id)).await
    }

    async fn list_page(&self, window: PageWindow) -> DomainResult<ArticlePage> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        let rows = self.fetch_rows(builder, Some(window)).await?;

        Ok(ArticlePage {
            items: hydrate(&self.pool, rows, false).await?,
            total: from_sql_count(total),
        })
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
        window: PageWindow,
    ) -> DomainResult<ArticlePage> {
        let category_id = i64::from(category_id);
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM article_categories WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut builder = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a
             JOIN article_categories ac ON ac.article_id = a.id
             WHERE ac.category_id = "
        ));
        builder.push_bind(category_id);
        let rows = self.fetch_rows(builder, Some(window)).await?;

        Ok(ArticlePage {
            items: hydrate(&self.pool, rows, false).await?,
            total: from_sql_count(total),
        })
    }

    async fn most_discussed(&self, limit: u64) -> DomainResult<Vec<DiscussedArticle>> {
        let rows = sqlx::query_as::<_, DiscussedRow>(
            "SELECT a.id, a.title, a.announce, COUNT(c.id) AS comments_count
             FROM articles a
             JOIN comments c ON c.article_id = a.id
             GROUP BY a.id, a.title, a.announce
             ORDER BY comments_count DESC, a.id DESC
             LIMIT $1",
        )
        .bind(to_sql_bound(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(DiscussedArticle::try_from).collect()
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.author_id = "
        ));
        builder.push_bind(i64::from(author_id));
        let rows = self.fetch_rows(builder, None).await?;
        hydrate(&self.pool, rows, false).await
    }

    async fn list_by_author_with_comments(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.author_id = "
        ));
        builder.push_bind(i64::from(author_id));
        builder.push(" AND EXISTS (SELECT 1 FROM comments c WHERE c.article_id = a.id)");
        let rows = self.fetch_rows(builder, None).await?;
        hydrate(&self.pool, rows, true).await
    }

    async fn search_by_title(&self, query: &str) -> DomainResult<Vec<Article>> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.title ILIKE "
        ));
        builder.push_bind(like_pattern(query));
        let rows = self.fetch_rows(builder, None).await?;
        hydrate(&self.pool, rows, false).await
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(like_pattern(""), "%%");
    }
}
