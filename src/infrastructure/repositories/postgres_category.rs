// src/infrastructure/repositories/postgres_category.rs
use super::error::{from_sql_count, map_sqlx};
use crate::domain::category::{Category, CategoryId, CategoryRepository, CategorySummary};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: row.name,
        })
    }
}

#[derive(Debug, FromRow)]
struct CategorySummaryRow {
    id: i64,
    name: String,
    articles_count: i64,
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<CategorySummary>> {
        let rows = sqlx::query_as::<_, CategorySummaryRow>(
            "SELECT c.id, c.name, COUNT(ac.article_id) AS articles_count
             FROM categories c
             LEFT JOIN article_categories ac ON ac.category_id = c.id
             GROUP BY c.id, c.name
             ORDER BY c.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CategorySummary {
                    category: Category::try_from(CategoryRow {
                        id: row.id,
                        name: row.name,
                    })?,
                    articles_count: from_sql_count(row.articles_count),
                })
            })
            .collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM categories WHERE id = ANY($1) ORDER BY id",
        )
        .bind(raw_ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
