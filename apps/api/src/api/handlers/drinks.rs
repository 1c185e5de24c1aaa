use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::state::CoffeeState;
use crate::auth::Claims;
use crate::domain::coffee::{Ingredient, LongDrink, NewDrink, ShortDrink};

/// Recipe as submitted: a list of ingredients or a single ingredient
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(ingredients) => ingredients,
            RecipeInput::One(ingredient) => vec![ingredient],
        }
    }
}

/// Request body for creating a drink
#[derive(Debug, Deserialize)]
pub struct CreateDrinkRequest {
    pub title: String,
    pub recipe: RecipeInput,
}

/// Request body for a partial drink update
#[derive(Debug, Deserialize)]
pub struct UpdateDrinkRequest {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

/// Drink payload wrapper shared by the drink endpoints
#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: T,
}

/// Response from drink deletion
#[derive(Debug, Serialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub delete: i32,
}

/// Public drink menu without ingredient names
///
/// GET /drinks
pub async fn list_drinks(
    State(state): State<CoffeeState>,
) -> Result<Json<DrinksResponse<Vec<ShortDrink>>>, ApiError> {
    let drinks = state.drinks.find_all().await?;

    Ok(Json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.short()).collect(),
    }))
}

/// Full drink details
///
/// GET /drinks-detail (requires `get:drinks-detail`)
pub async fn list_drinks_detail(
    State(state): State<CoffeeState>,
) -> Result<Json<DrinksResponse<Vec<LongDrink>>>, ApiError> {
    let drinks = state.drinks.find_all().await?;

    Ok(Json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(|d| d.long()).collect(),
    }))
}

/// Create a drink
///
/// POST /drinks (requires `post:drinks`)
pub async fn create_drink(
    State(state): State<CoffeeState>,
    Extension(claims): Extension<Claims>,
    ApiJson(req): ApiJson<CreateDrinkRequest>,
) -> Result<Json<DrinksResponse<LongDrink>>, ApiError> {
    let new_drink = NewDrink::new(req.title, req.recipe.into_ingredients()).map_err(|reason| {
        tracing::warn!(%reason, "invalid drink");
        ApiError::unprocessable()
    })?;

    let drink = state
        .drinks
        .create(new_drink)
        .await
        .map_err(ApiError::from_write)?;
    tracing::info!(drink_id = drink.id(), subject = %claims.sub, "drink created");

    Ok(Json(DrinksResponse {
        success: true,
        drinks: drink.long(),
    }))
}

/// Update the title and/or recipe of a drink
///
/// PATCH /drinks/:id (requires `patch:drinks`)
pub async fn update_drink(
    State(state): State<CoffeeState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateDrinkRequest>,
) -> Result<Json<DrinksResponse<Vec<LongDrink>>>, ApiError> {
    let mut drink = state
        .drinks
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    drink
        .apply_changes(req.title, req.recipe.map(RecipeInput::into_ingredients))
        .map_err(|reason| {
            tracing::warn!(%reason, drink_id = id, "invalid drink update");
            ApiError::unprocessable()
        })?;

    state
        .drinks
        .update(&drink)
        .await
        .map_err(ApiError::from_write)?;
    tracing::info!(drink_id = id, subject = %claims.sub, "drink updated");

    Ok(Json(DrinksResponse {
        success: true,
        drinks: vec![drink.long()],
    }))
}

/// Delete a drink
///
/// DELETE /drinks/:id (requires `delete:drinks`)
pub async fn delete_drink(
    State(state): State<CoffeeState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<DeleteDrinkResponse>, ApiError> {
    state
        .drinks
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    state.drinks.delete(id).await.map_err(ApiError::from_write)?;
    tracing::info!(drink_id = id, subject = %claims.sub, "drink deleted");

    Ok(Json(DeleteDrinkResponse {
        success: true,
        delete: id,
    }))
}
