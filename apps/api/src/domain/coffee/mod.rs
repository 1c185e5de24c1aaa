// Coffee shop domain module
// Drinks and their ingredient recipes

pub mod drink;

pub use drink::{Drink, Ingredient, LongDrink, NewDrink, ShortDrink};
