use serde::{Deserialize, Serialize};

use crate::domain::value_objects::lenient_i32;

/// One line of a drink recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub parts: i32,
}

/// Drink aggregate
///
/// # Invariants
/// - Title is not blank (uniqueness is enforced by the store)
/// - Recipe has at least one ingredient
/// - Every ingredient has a positive number of parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    id: i32,
    title: String,
    recipe: Vec<Ingredient>,
}

/// A validated drink that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    title: String,
    recipe: Vec<Ingredient>,
}

fn validate_title(title: String) -> Result<String, String> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    Ok(title)
}

fn validate_recipe(recipe: Vec<Ingredient>) -> Result<Vec<Ingredient>, String> {
    if recipe.is_empty() {
        return Err("Recipe must contain at least one ingredient".to_string());
    }
    if let Some(bad) = recipe.iter().find(|i| i.parts < 1) {
        return Err(format!(
            "Ingredient {:?} must have at least one part",
            bad.name
        ));
    }
    Ok(recipe)
}

impl NewDrink {
    /// Validates a drink submission
    ///
    /// # Example
    /// ```
    /// use cafe_trivia_api::domain::coffee::{Ingredient, NewDrink};
    ///
    /// let water = Ingredient { name: "water".into(), color: "blue".into(), parts: 1 };
    /// let drink = NewDrink::new("Water".into(), vec![water]).expect("valid drink");
    /// assert_eq!(drink.title(), "Water");
    /// ```
    pub fn new(title: String, recipe: Vec<Ingredient>) -> Result<Self, String> {
        Ok(Self {
            title: validate_title(title)?,
            recipe: validate_recipe(recipe)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }

    /// Attaches the store-assigned id
    pub fn into_drink(self, id: i32) -> Drink {
        Drink {
            id,
            title: self.title,
            recipe: self.recipe,
        }
    }
}

impl Drink {
    /// Reconstitutes a drink from persistence without re-validating
    pub fn from_persistence(id: i32, title: String, recipe: Vec<Ingredient>) -> Self {
        Self { id, title, recipe }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }

    /// Applies a partial update
    ///
    /// Fields left as `None` keep their current value. Nothing changes if
    /// either supplied field is invalid.
    pub fn apply_changes(
        &mut self,
        title: Option<String>,
        recipe: Option<Vec<Ingredient>>,
    ) -> Result<(), String> {
        let title = title.map(validate_title).transpose()?;
        let recipe = recipe.map(validate_recipe).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(recipe) = recipe {
            self.recipe = recipe;
        }
        Ok(())
    }

    /// Public projection: ingredient names are left out
    pub fn short(&self) -> ShortDrink {
        ShortDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| ShortIngredient {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }

    /// Full projection including ingredient names
    pub fn long(&self) -> LongDrink {
        LongDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortDrink {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDrink {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}
