//! Estacion de la cocina. Tiene los platos que sabe preparar y su propio stock de ingredientes.
use std::rc::Rc;

use log::{debug, info};

use crate::{constants::UNKNOWN_NAME, dish::Dish, ingredient::Ingredient};

/// Los platos se comparten por referencia entre estaciones (por ejemplo despues de unirlas),
/// por eso se guardan como `Rc<Dish>`. En el stock no hay dos ingredientes con el mismo nombre.
#[derive(Debug)]
pub struct KitchenStation {
    name: String,
    dishes: Vec<Rc<Dish>>,
    ingredients_stock: Vec<Ingredient>,
}

impl KitchenStation {
    pub fn new(name: impl Into<String>) -> KitchenStation {
        KitchenStation {
            name: name.into(),
            dishes: Vec::new(),
            ingredients_stock: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn dishes(&self) -> &[Rc<Dish>] {
        &self.dishes
    }

    pub fn ingredients_stock(&self) -> &[Ingredient] {
        &self.ingredients_stock
    }

    /// Agrega el plato si esa misma referencia no estaba asignada.
    /// Dos platos distintos con los mismos valores se consideran entradas diferentes.
    pub fn assign_dish(&mut self, dish: Rc<Dish>) -> bool {
        if self.dishes.iter().any(|assigned| Rc::ptr_eq(assigned, &dish)) {
            debug!("[STATION {}] {} already assigned", self.name, dish.name());
            return false;
        }
        debug!("[STATION {}] Assigned {}", self.name, dish.name());
        self.dishes.push(dish);
        true
    }

    /// Si ya hay stock con ese nombre solo se suma la cantidad, el resto de los campos se mantiene
    pub fn replenish(&mut self, ingredient: Ingredient) {
        match self
            .ingredients_stock
            .iter_mut()
            .find(|stock| stock.name == ingredient.name)
        {
            Some(stock) => {
                stock.quantity = stock.quantity.saturating_add(ingredient.quantity);
                debug!(
                    "[STATION {}] Replenished {} with {}, there is {}",
                    self.name, stock.name, ingredient.quantity, stock.quantity
                );
            }
            None => {
                debug!(
                    "[STATION {}] New ingredient {} with {}",
                    self.name, ingredient.name, ingredient.quantity
                );
                self.ingredients_stock.push(ingredient);
            }
        }
    }

    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        match self.find_dish(dish_name) {
            Some(dish) => dish
                .ingredients()
                .iter()
                .all(|required| self.has_enough(required)),
            None => false,
        }
    }

    /// Prepara el plato consumiendo sus ingredientes del stock.
    /// Los ingredientes que quedan en 0 se sacan del stock.
    pub fn prepare_dish(&mut self, dish_name: &str) -> bool {
        if !self.can_complete_order(dish_name) {
            info!("[STATION {}] Can't prepare {}", self.name, dish_name);
            return false;
        }
        let dish = match self.find_dish(dish_name) {
            Some(dish) => Rc::clone(dish),
            None => return false,
        };

        for required in dish.ingredients() {
            if let Some(stock) = self
                .ingredients_stock
                .iter_mut()
                .find(|stock| stock.name == required.name)
            {
                stock.quantity = stock.quantity.saturating_sub(required.required_quantity);
                debug!(
                    "[STATION {}] Uses {} of {}, remains {}",
                    self.name, required.required_quantity, stock.name, stock.quantity
                );
            }
        }
        self.ingredients_stock.retain(|stock| stock.quantity > 0);

        debug!("[STATION {}] Prepared {}", self.name, dish_name);
        true
    }

    fn find_dish(&self, dish_name: &str) -> Option<&Rc<Dish>> {
        self.dishes.iter().find(|dish| dish.name() == dish_name)
    }

    fn has_enough(&self, required: &Ingredient) -> bool {
        self.ingredients_stock
            .iter()
            .any(|stock| stock.name == required.name && stock.quantity >= required.required_quantity)
    }
}

impl Default for KitchenStation {
    fn default() -> Self {
        KitchenStation::new(UNKNOWN_NAME)
    }
}
