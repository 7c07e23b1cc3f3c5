use crate::domain::errors::positive_id;

positive_id!(CategoryId, "category");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Category listing entry with the number of articles filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub articles_count: u64,
}
