//! Platos que pueden preparar las estaciones de la cocina.
use std::fmt;

use serde::Deserialize;

use crate::{constants::UNKNOWN_NAME, ingredient::Ingredient};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    #[default]
    Other,
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CuisineType::Italian => "ITALIAN",
                CuisineType::Mexican => "MEXICAN",
                CuisineType::Chinese => "CHINESE",
                CuisineType::Indian => "INDIAN",
                CuisineType::American => "AMERICAN",
                CuisineType::French => "FRENCH",
                CuisineType::Other => "OTHER",
            }
        )
    }
}

/// Representa un plato. Los ingredientes indican lo que requiere cada preparacion, no stock.
/// Dos platos son iguales si coinciden nombre, tiempo de preparacion, precio y tipo de cocina.
#[derive(Debug, Clone)]
pub struct Dish {
    name: String,
    ingredients: Vec<Ingredient>,
    prep_time: u32,
    price: f64,
    cuisine_type: CuisineType,
}

impl Dish {
    /// Crea un plato. Si el nombre tiene caracteres que no son letras o espacios queda como `UNKNOWN`
    pub fn new(
        name: &str,
        ingredients: Vec<Ingredient>,
        prep_time: u32,
        price: f64,
        cuisine_type: CuisineType,
    ) -> Dish {
        let mut dish = Dish {
            name: String::new(),
            ingredients,
            prep_time,
            price,
            cuisine_type,
        };
        dish.set_name(name);
        dish
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cuisine_type(&self) -> CuisineType {
        self.cuisine_type
    }

    pub fn set_name(&mut self, name: &str) {
        if is_valid_name(name) {
            self.name = name.to_string();
        } else {
            self.name = UNKNOWN_NAME.to_string();
        }
    }

    pub fn set_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.ingredients = ingredients;
    }

    pub fn set_prep_time(&mut self, prep_time: u32) {
        self.prep_time = prep_time;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_cuisine_type(&mut self, cuisine_type: CuisineType) {
        self.cuisine_type = cuisine_type;
    }
}

impl Default for Dish {
    fn default() -> Self {
        Dish {
            name: UNKNOWN_NAME.to_string(),
            ingredients: Vec::new(),
            prep_time: 0,
            price: 0.0,
            cuisine_type: CuisineType::Other,
        }
    }
}

impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.prep_time == other.prep_time
            && self.price == other.price
            && self.cuisine_type == other.cuisine_type
    }
}

fn is_valid_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
}
