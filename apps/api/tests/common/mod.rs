//! Shared fixtures for the HTTP tests
//!
//! In-memory repositories stand in for PostgreSQL so the routers can be
//! driven end to end without a database.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt; // for oneshot

use cafe_trivia_api::api::{CoffeeState, TriviaState};
use cafe_trivia_api::auth::{issue_token, Claims, JwtVerifier};
use cafe_trivia_api::domain::coffee::{Drink, Ingredient, NewDrink};
use cafe_trivia_api::domain::repositories::{
    CategoryRepository, DrinkRepository, QuestionRepository, RepositoryError, RepositoryResult,
};
use cafe_trivia_api::domain::trivia::{Category, NewQuestion, Question};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Fixed category set
pub struct InMemoryCategories {
    categories: Vec<Category>,
}

impl InMemoryCategories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

/// Question store kept in insertion (= id) order
pub struct InMemoryQuestions {
    rows: Mutex<Vec<Question>>,
    next_id: AtomicI32,
}

impl InMemoryQuestions {
    pub fn new(rows: Vec<Question>) -> Self {
        let next_id = rows.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI32::new(next_id),
        }
    }

    fn filtered(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestions {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        Ok(self.filtered(|_| true))
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        Ok(self.filtered(|q| q.category == category_id))
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self.filtered(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        Ok(self.filtered(|q| q.id == id).into_iter().next())
    }

    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let question = question.into_question(id);
        self.rows.lock().unwrap().push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|q| q.id != id);
        if rows.len() == before {
            return Err(RepositoryError::not_found("Question", id));
        }
        Ok(())
    }
}

/// Drink store enforcing unique titles like the real table
pub struct InMemoryDrinks {
    rows: Mutex<Vec<Drink>>,
    next_id: AtomicI32,
}

impl InMemoryDrinks {
    pub fn new(rows: Vec<Drink>) -> Self {
        let next_id = rows.iter().map(|d| d.id()).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI32::new(next_id),
        }
    }
}

#[async_trait]
impl DrinkRepository for InMemoryDrinks {
    async fn find_all(&self) -> RepositoryResult<Vec<Drink>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Drink>> {
        Ok(self.rows.lock().unwrap().iter().find(|d| d.id() == id).cloned())
    }

    async fn create(&self, drink: NewDrink) -> RepositoryResult<Drink> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|d| d.title() == drink.title()) {
            return Err(RepositoryError::Conflict(format!(
                "duplicate title {}",
                drink.title()
            )));
        }
        let drink = drink.into_drink(self.next_id.fetch_add(1, Ordering::SeqCst));
        rows.push(drink.clone());
        Ok(drink)
    }

    async fn update(&self, drink: &Drink) -> RepositoryResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|d| d.id() != drink.id() && d.title() == drink.title())
        {
            return Err(RepositoryError::Conflict(format!(
                "duplicate title {}",
                drink.title()
            )));
        }
        match rows.iter_mut().find(|d| d.id() == drink.id()) {
            Some(row) => {
                *row = drink.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("Drink", drink.id())),
        }
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id() != id);
        if rows.len() == before {
            return Err(RepositoryError::not_found("Drink", id));
        }
        Ok(())
    }
}

/// Question repository whose every call fails like a dropped connection
pub struct UnavailableQuestions;

#[async_trait]
impl QuestionRepository for UnavailableQuestions {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_category(&self, _category_id: i32) -> RepositoryResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn search(&self, _term: &str) -> RepositoryResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: i32) -> RepositoryResult<Option<Question>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _question: NewQuestion) -> RepositoryResult<Question> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i32) -> RepositoryResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// Category repository whose every call fails like a dropped connection
pub struct UnavailableCategories;

#[async_trait]
impl CategoryRepository for UnavailableCategories {
    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: i32) -> RepositoryResult<Option<Category>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// Question store that accepts inserts but fails every listing
pub struct ListingFailsQuestions {
    pub inner: InMemoryQuestions,
}

#[async_trait]
impl QuestionRepository for ListingFailsQuestions {
    async fn find_all(&self) -> RepositoryResult<Vec<Question>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        self.inner.find_by_category(category_id).await
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        self.inner.search(term).await
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question> {
        self.inner.create(question).await
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.inner.delete(id).await
    }
}

/// Drink repository that panics on reads
pub struct PanickingDrinks;

#[async_trait]
impl DrinkRepository for PanickingDrinks {
    async fn find_all(&self) -> RepositoryResult<Vec<Drink>> {
        panic!("drink table exploded");
    }

    async fn find_by_id(&self, _id: i32) -> RepositoryResult<Option<Drink>> {
        panic!("drink table exploded");
    }

    async fn create(&self, drink: NewDrink) -> RepositoryResult<Drink> {
        Ok(drink.into_drink(1))
    }

    async fn update(&self, _drink: &Drink) -> RepositoryResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i32) -> RepositoryResult<()> {
        Ok(())
    }
}

pub fn categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .enumerate()
        .map(|(i, label)| Category::new(i as i32 + 1, *label))
        .collect()
}

fn question(id: i32, text: &str, answer: &str, category: i32, difficulty: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Fifteen questions: three in Science (1), none in Sports (6)
pub fn questions() -> Vec<Question> {
    vec![
        question(2, "What movie earned Tom Hanks his third straight Oscar nomination?", "Apollo 13", 5, 4),
        question(4, "What actor did author Anne Rice first denounce?", "Tom Cruise", 5, 4),
        question(5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        question(6, "What was the title of the 1990 fantasy directed by Tim Burton?", "Edward Scissorhands", 5, 3),
        question(9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        question(10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 4, 3),
        question(12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        question(13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        question(14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        question(15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        question(16, "Which Dutch graphic artist initials M C was a creator of optical illusions?", "Escher", 2, 1),
        question(17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        question(20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        question(21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        question(22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ]
}

pub struct TriviaFixture {
    pub app: Router,
    pub questions: Arc<InMemoryQuestions>,
}

pub fn trivia_app() -> TriviaFixture {
    let questions = Arc::new(InMemoryQuestions::new(questions()));
    let state = TriviaState::new(
        Arc::new(InMemoryCategories::new(categories())),
        questions.clone(),
    );

    TriviaFixture {
        app: cafe_trivia_api::api::trivia_router(state),
        questions,
    }
}

fn ingredient(name: &str, color: &str, parts: i32) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        color: color.to_string(),
        parts,
    }
}

pub fn drinks() -> Vec<Drink> {
    vec![
        Drink::from_persistence(1, "water".into(), vec![ingredient("water", "blue", 1)]),
        Drink::from_persistence(
            5,
            "Cappuccino".into(),
            vec![
                ingredient("espresso", "brown", 1),
                ingredient("milk", "white", 1),
                ingredient("foam", "beige", 1),
            ],
        ),
    ]
}

pub fn coffee_state(drinks: Arc<dyn DrinkRepository>) -> CoffeeState {
    CoffeeState::new(drinks, Arc::new(JwtVerifier::new(TEST_SECRET, None, None)))
}

pub fn coffee_app() -> Router {
    cafe_trivia_api::api::coffee_router(coffee_state(Arc::new(InMemoryDrinks::new(drinks()))))
}

/// Signed token granting `permissions`
pub fn token(permissions: &[&str]) -> String {
    let claims = Claims::new(
        "auth0|test-user",
        permissions.iter().copied(),
        chrono::Duration::hours(1),
    );
    issue_token(&claims, TEST_SECRET).unwrap()
}

/// Sends a request and returns the status and JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

pub fn with_token(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        "authorization",
        format!("Bearer {}", token).parse().unwrap(),
    );
    request
}
