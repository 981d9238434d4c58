//! Administrador de las estaciones de la cocina.
use std::rc::Rc;

use log::{debug, info};

use crate::{dish::Dish, ingredient::Ingredient, kitchen_station::KitchenStation};

/// Secuencia ordenada de estaciones. Las busquedas por nombre recorren desde el frente
/// y devuelven la primera coincidencia. Sacar una estacion de aca la destruye.
#[derive(Debug, Default)]
pub struct StationManager {
    stations: Vec<KitchenStation>,
}

impl StationManager {
    pub fn new() -> StationManager {
        StationManager { stations: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&KitchenStation> {
        self.stations.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KitchenStation> {
        self.stations.iter()
    }

    pub fn clear(&mut self) {
        self.stations.clear();
    }

    pub fn add_station(&mut self, station: KitchenStation) -> bool {
        debug!("[MANAGER] Added station {}", station.name());
        self.stations.push(station);
        true
    }

    pub fn remove_station(&mut self, station_name: &str) -> bool {
        match self.position(station_name) {
            Some(index) => {
                self.stations.remove(index);
                debug!("[MANAGER] Removed station {}", station_name);
                true
            }
            None => false,
        }
    }

    pub fn find_station(&self, station_name: &str) -> Option<&KitchenStation> {
        self.stations.iter().find(|station| station.name() == station_name)
    }

    pub fn find_station_mut(&mut self, station_name: &str) -> Option<&mut KitchenStation> {
        self.stations
            .iter_mut()
            .find(|station| station.name() == station_name)
    }

    /// Mueve la estacion al frente sin cambiar el orden relativo del resto
    pub fn move_station_to_front(&mut self, station_name: &str) -> bool {
        match self.position(station_name) {
            Some(index) => {
                let station = self.stations.remove(index);
                self.stations.insert(0, station);
                debug!("[MANAGER] Moved {} to the front", station_name);
                true
            }
            None => false,
        }
    }

    /// Pasa los platos y el stock de `source_name` a `target_name` y saca a `source_name`.
    /// Si falta alguna o ambas son la misma estacion no se modifica nada.
    pub fn merge_stations(&mut self, target_name: &str, source_name: &str) -> bool {
        let (target_index, source_index) =
            match (self.position(target_name), self.position(source_name)) {
                (Some(target), Some(source)) if target != source => (target, source),
                _ => {
                    info!("[MANAGER] Can't merge {} into {}", source_name, target_name);
                    return false;
                }
            };

        let source = self.stations.remove(source_index);
        let target_index = if target_index > source_index {
            target_index - 1
        } else {
            target_index
        };
        let target = &mut self.stations[target_index];
        for dish in source.dishes() {
            target.assign_dish(Rc::clone(dish));
        }
        for ingredient in source.ingredients_stock() {
            target.replenish(ingredient.clone());
        }
        info!("[MANAGER] Merged {} into {}", source_name, target_name);
        true
    }

    pub fn assign_dish_to_station(&mut self, station_name: &str, dish: Rc<Dish>) -> bool {
        match self.find_station_mut(station_name) {
            Some(station) => station.assign_dish(dish),
            None => false,
        }
    }

    pub fn replenish_ingredient_at_station(&mut self, station_name: &str, ingredient: Ingredient) -> bool {
        match self.find_station_mut(station_name) {
            Some(station) => {
                station.replenish(ingredient);
                true
            }
            None => false,
        }
    }

    /// Primera estacion, desde el frente, que puede completar el plato
    pub fn find_station_for(&self, dish_name: &str) -> Option<&KitchenStation> {
        self.stations
            .iter()
            .find(|station| station.can_complete_order(dish_name))
    }

    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        self.find_station_for(dish_name).is_some()
    }

    pub fn prepare_dish_at_station(&mut self, station_name: &str, dish_name: &str) -> bool {
        match self.find_station_mut(station_name) {
            Some(station) => station.prepare_dish(dish_name),
            None => false,
        }
    }

    fn position(&self, station_name: &str) -> Option<usize> {
        self.stations
            .iter()
            .position(|station| station.name() == station_name)
    }
}
