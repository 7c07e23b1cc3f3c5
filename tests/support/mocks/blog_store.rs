// tests/support/mocks/blog_store.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use blog_core::domain::{
    article::{
        Article, ArticleId, ArticlePage, ArticleReadRepository, ArticleUpdate,
        ArticleWriteRepository, DiscussedArticle, NewArticle, PageWindow,
    },
    category::{Category, CategoryId, CategoryRepository, CategorySummary},
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    user::{Email, NewUser, PasswordHash, User, UserId, UserRepository},
};
use chrono::{DateTime, Utc};

use super::security::PlainPasswordHasher;
use super::time::fixed_now;

#[derive(Default)]
struct State {
    users: Vec<User>,
    categories: Vec<Category>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    last_user_id: i64,
    last_category_id: i64,
    last_article_id: i64,
    last_comment_id: i64,
}

/// How often each collaborator was reached; lets tests prove that a request
/// was rejected before touching the store.
#[derive(Default)]
pub struct CallCounts {
    pub article_find_by_id: AtomicUsize,
    pub article_insert: AtomicUsize,
    pub article_update: AtomicUsize,
    pub article_delete: AtomicUsize,
    pub article_list_page: AtomicUsize,
    pub comment_insert: AtomicUsize,
    pub comment_delete: AtomicUsize,
    pub category_find_by_id: AtomicUsize,
    pub user_find_by_email: AtomicUsize,
    pub user_insert: AtomicUsize,
}

impl CallCounts {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory blog backing every repository port.
#[derive(Default)]
pub struct BlogStore {
    state: Mutex<State>,
    pub calls: CallCounts,
}

impl BlogStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, first_name: &str, last_name: &str, email: &str, password: &str) -> User {
        let mut state = self.state.lock().unwrap();
        state.last_user_id += 1;
        let user = User {
            id: UserId::new(state.last_user_id).unwrap(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: Email::new(email).unwrap(),
            password_hash: PasswordHash::new(PlainPasswordHasher::hash_of(password)).unwrap(),
            avatar: None,
            created_at: fixed_now(),
        };
        state.users.push(user.clone());
        user
    }

    pub fn add_category(&self, name: &str) -> Category {
        let mut state = self.state.lock().unwrap();
        state.last_category_id += 1;
        let category = Category {
            id: CategoryId::new(state.last_category_id).unwrap(),
            name: name.into(),
        };
        state.categories.push(category.clone());
        category
    }

    /// Stores a prepared article under the next free id.
    pub fn add_article(&self, mut article: Article) -> Article {
        let mut state = self.state.lock().unwrap();
        state.last_article_id += 1;
        article.id = ArticleId::new(state.last_article_id).unwrap();
        article.comments = None;
        state.articles.push(article.clone());
        article
    }

    pub fn add_comment(
        &self,
        article_id: ArticleId,
        author_id: UserId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Comment {
        let mut state = self.state.lock().unwrap();
        state.last_comment_id += 1;
        let comment = Comment {
            id: CommentId::new(state.last_comment_id).unwrap(),
            article_id,
            author_id,
            text: text.into(),
            created_at,
        };
        state.comments.push(comment.clone());
        comment
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }
}

impl State {
    fn comments_of(&self, article_id: ArticleId) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        comments
    }

    fn with_comments(&self, article: &Article) -> Article {
        let mut article = article.clone();
        article.comments = Some(self.comments_of(article.id));
        article
    }

    fn newest_first(&self) -> Vec<Article> {
        let mut articles = self.articles.clone();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        articles
    }

    /// Mirrors the author foreign keys of the articles and comments tables.
    fn ensure_author(&self, author_id: UserId) -> DomainResult<()> {
        if self.users.iter().any(|user| user.id == author_id) {
            Ok(())
        } else {
            Err(DomainError::NotFound("author not found".into()))
        }
    }

    fn resolve_categories(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        ids.iter()
            .map(|id| {
                self.categories
                    .iter()
                    .find(|category| category.id == *id)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound("category not found".into()))
            })
            .collect()
    }
}

fn page_of(articles: Vec<Article>, window: PageWindow) -> ArticlePage {
    let total = articles.len() as u64;
    let items = articles
        .into_iter()
        .skip(usize::try_from(window.offset).unwrap())
        .take(usize::try_from(window.limit).unwrap())
        .collect();
    ArticlePage { items, total }
}

#[async_trait]
impl ArticleReadRepository for BlogStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        CallCounts::bump(&self.calls.article_find_by_id);
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|article| article.id == id)
            .map(|article| state.with_comments(article)))
    }

    async fn list_page(&self, window: PageWindow) -> DomainResult<ArticlePage> {
        CallCounts::bump(&self.calls.article_list_page);
        let state = self.state.lock().unwrap();
        Ok(page_of(state.newest_first(), window))
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
        window: PageWindow,
    ) -> DomainResult<ArticlePage> {
        let state = self.state.lock().unwrap();
        let articles = state
            .newest_first()
            .into_iter()
            .filter(|article| {
                article
                    .categories
                    .iter()
                    .any(|category| category.id == category_id)
            })
            .collect();
        Ok(page_of(articles, window))
    }

    async fn most_discussed(&self, limit: u64) -> DomainResult<Vec<DiscussedArticle>> {
        let state = self.state.lock().unwrap();
        let mut discussed: Vec<DiscussedArticle> = state
            .articles
            .iter()
            .map(|article| DiscussedArticle {
                id: article.id,
                title: article.title.clone(),
                announce: article.announce.clone(),
                comments_count: state.comments_of(article.id).len() as u64,
            })
            .filter(|article| article.comments_count > 0)
            .collect();
        discussed.sort_by(|a, b| {
            b.comments_count
                .cmp(&a.comments_count)
                .then(b.id.cmp(&a.id))
        });
        discussed.truncate(usize::try_from(limit).unwrap());
        Ok(discussed)
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .newest_first()
            .into_iter()
            .filter(|article| article.author_id == author_id)
            .collect())
    }

    async fn list_by_author_with_comments(&self, author_id: UserId) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .newest_first()
            .iter()
            .filter(|article| article.author_id == author_id)
            .map(|article| state.with_comments(article))
            .filter(Article::has_comments)
            .collect())
    }

    async fn search_by_title(&self, query: &str) -> DomainResult<Vec<Article>> {
        let needle = query.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .newest_first()
            .into_iter()
            .filter(|article| article.title.as_str().to_lowercase().contains(&needle))
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for BlogStore {
    async fn insert(&self, new_article: NewArticle) -> DomainResult<Article> {
        CallCounts::bump(&self.calls.article_insert);
        let mut state = self.state.lock().unwrap();
        state.ensure_author(new_article.author_id)?;
        let categories = state.resolve_categories(&new_article.category_ids)?;
        state.last_article_id += 1;
        let article = Article {
            id: ArticleId::new(state.last_article_id)?,
            title: new_article.title,
            announce: new_article.announce,
            full_text: new_article.full_text,
            picture: new_article.picture,
            author_id: new_article.author_id,
            categories,
            comments: None,
            created_at: new_article.created_at,
        };
        state.articles.push(article.clone());
        Ok(state.with_comments(&article))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        CallCounts::bump(&self.calls.article_update);
        let mut state = self.state.lock().unwrap();
        let categories = state.resolve_categories(&update.category_ids)?;
        let position = state
            .articles
            .iter()
            .position(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let article = &mut state.articles[position];
        article.title = update.title;
        article.announce = update.announce;
        article.full_text = update.full_text;
        article.picture = update.picture;
        article.categories = categories;
        article.created_at = update.created_at;

        let updated = state.articles[position].clone();
        Ok(state.with_comments(&updated))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        CallCounts::bump(&self.calls.article_delete);
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|article| article.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|comment| comment.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for BlogStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state.comments.iter().find(|comment| comment.id == id).cloned())
    }

    async fn latest(&self, limit: u64) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments = state.comments.clone();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        comments.truncate(usize::try_from(limit).unwrap());
        Ok(comments)
    }

    async fn insert(&self, new_comment: NewComment) -> DomainResult<Comment> {
        CallCounts::bump(&self.calls.comment_insert);
        let mut state = self.state.lock().unwrap();
        if !state
            .articles
            .iter()
            .any(|article| article.id == new_comment.article_id)
        {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.ensure_author(new_comment.author_id)?;
        state.last_comment_id += 1;
        let comment = Comment {
            id: CommentId::new(state.last_comment_id)?,
            article_id: new_comment.article_id,
            author_id: new_comment.author_id,
            text: new_comment.text,
            created_at: new_comment.created_at,
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        CallCounts::bump(&self.calls.comment_delete);
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|comment| comment.id != id);
        if state.comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for BlogStore {
    async fn list(&self) -> DomainResult<Vec<CategorySummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .map(|category| CategorySummary {
                category: category.clone(),
                articles_count: state
                    .articles
                    .iter()
                    .filter(|article| article.categories.iter().any(|c| c.id == category.id))
                    .count() as u64,
            })
            .collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        CallCounts::bump(&self.calls.category_find_by_id);
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .filter(|category| ids.contains(&category.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for BlogStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        CallCounts::bump(&self.calls.user_insert);
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        state.last_user_id += 1;
        let user = User {
            id: UserId::new(state.last_user_id)?,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            avatar: new_user.avatar,
            created_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        CallCounts::bump(&self.calls.user_find_by_email);
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }
}
