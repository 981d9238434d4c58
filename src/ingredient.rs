//! Ingredientes, tanto los requeridos por un plato como el stock de una estacion.
use serde::Deserialize;

/// Un ingrediente identificado por su nombre.
/// En el stock de una estacion `quantity` es lo disponible; en un plato, `required_quantity`
/// es lo que consume cada preparacion.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub required_quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: u32, required_quantity: u32, price: f64) -> Ingredient {
        Ingredient {
            name: name.into(),
            quantity,
            required_quantity,
            price,
        }
    }
}
