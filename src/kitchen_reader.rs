//! Lectura de la descripcion de la cocina desde un archivo JSON
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::rc::Rc;

use log::{debug, error, info};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Deserialize;

use crate::{
    dish::{CuisineType, Dish},
    errors::KitchenError,
    ingredient::Ingredient,
    kitchen_station::KitchenStation,
    order::Order,
    station_manager::StationManager,
};

#[derive(Deserialize, Debug)]
struct JsonDish {
    name: String,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    prep_time: u32,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    cuisine_type: CuisineType,
}

#[derive(Deserialize, Debug)]
struct JsonStation {
    name: String,
    #[serde(default)]
    dishes: Vec<String>,
    #[serde(default)]
    stock: Vec<Ingredient>,
}

#[derive(Deserialize, Debug)]
struct JsonMerge {
    into: String,
    from: String,
}

#[derive(Deserialize, Debug)]
struct JsonOrder {
    #[serde(default)]
    station: Option<String>,
    dish: String,
}

#[derive(Deserialize)]
struct KitchenConfiguration {
    #[serde(default)]
    dishes: Vec<JsonDish>,
    #[serde(default)]
    stations: Vec<JsonStation>,
    #[serde(default)]
    move_to_front: Vec<String>,
    #[serde(default)]
    merges: Vec<JsonMerge>,
    #[serde(default)]
    orders: Vec<JsonOrder>,
    #[serde(default)]
    shuffle_orders: bool,
}

/// Cocina lista para funcionar: estaciones cargadas, reorganizaciones pendientes y pedidos
pub struct KitchenSetup {
    pub manager: StationManager,
    pub move_to_front: Vec<String>,
    /// Pares (destino, origen)
    pub merges: Vec<(String, String)>,
    pub orders: Vec<Order>,
}

pub fn read_kitchen_from_file<P: AsRef<Path>>(path: P) -> Result<KitchenSetup, KitchenError> {
    let file = File::open(path.as_ref()).map_err(|_| {
        error!("[READER] Could not open {}", path.as_ref().display());
        KitchenError::FileReaderError
    })?;
    let reader = BufReader::new(file);
    let configuration: KitchenConfiguration = serde_json::from_reader(reader)?;
    build_kitchen(configuration)
}

pub fn parse_kitchen(json: &str) -> Result<KitchenSetup, KitchenError> {
    let configuration: KitchenConfiguration = serde_json::from_str(json)?;
    build_kitchen(configuration)
}

fn build_kitchen(configuration: KitchenConfiguration) -> Result<KitchenSetup, KitchenError> {
    let dishes = build_dishes(configuration.dishes);
    let manager = build_manager(configuration.stations, &dishes)?;

    let mut orders = get_orders(configuration.orders);
    if configuration.shuffle_orders {
        orders.shuffle(&mut thread_rng());
    }
    info!(
        "[READER] Loaded {} stations and {} orders",
        manager.len(),
        orders.len()
    );

    Ok(KitchenSetup {
        manager,
        move_to_front: configuration.move_to_front,
        merges: configuration
            .merges
            .into_iter()
            .map(|merge| (merge.into, merge.from))
            .collect(),
        orders,
    })
}

/// Los platos se indexan por el nombre del archivo, que puede diferir del nombre validado
fn build_dishes(json_dishes: Vec<JsonDish>) -> HashMap<String, Rc<Dish>> {
    json_dishes
        .into_iter()
        .map(|json_dish| {
            let dish = Dish::new(
                &json_dish.name,
                json_dish.ingredients,
                json_dish.prep_time,
                json_dish.price,
                json_dish.cuisine_type,
            );
            debug!("[READER] Loaded dish {} ({})", dish.name(), dish.cuisine_type());
            (json_dish.name, Rc::new(dish))
        })
        .collect()
}

fn build_manager(
    json_stations: Vec<JsonStation>,
    dishes: &HashMap<String, Rc<Dish>>,
) -> Result<StationManager, KitchenError> {
    let mut manager = StationManager::new();
    for json_station in json_stations {
        let mut station = KitchenStation::new(json_station.name);
        for dish_name in json_station.dishes {
            let dish = dishes.get(&dish_name).ok_or_else(|| {
                error!("[READER] Station {} uses unknown dish {}", station.name(), dish_name);
                KitchenError::UnknownDish(dish_name.clone())
            })?;
            station.assign_dish(Rc::clone(dish));
        }
        for ingredient in json_station.stock {
            station.replenish(ingredient);
        }
        manager.add_station(station);
    }
    Ok(manager)
}

fn get_orders(json_orders: Vec<JsonOrder>) -> Vec<Order> {
    json_orders
        .into_iter()
        .enumerate()
        .map(|(id, order)| Order::new(id, order.station, order.dish))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KITCHEN: &str = r#"{
        "dishes": [
            {
                "name": "Grilled Chicken Sandwich",
                "ingredients": [
                    { "name": "Tomato", "required_quantity": 2, "price": 0.5 },
                    { "name": "Lettuce", "required_quantity": 1, "price": 0.3 }
                ],
                "prep_time": 15,
                "price": 12.99,
                "cuisine_type": "AMERICAN"
            },
            { "name": "Fruit Salad", "cuisine_type": "FRENCH" }
        ],
        "stations": [
            {
                "name": "Grill Station",
                "dishes": ["Grilled Chicken Sandwich"],
                "stock": [
                    { "name": "Tomato", "quantity": 30, "price": 0.5 },
                    { "name": "Tomato", "quantity": 20, "price": 0.5 },
                    { "name": "Lettuce", "quantity": 20, "price": 0.3 }
                ]
            },
            { "name": "Prep Station", "dishes": ["Grilled Chicken Sandwich", "Fruit Salad"] },
            { "name": "Dessert Station" }
        ],
        "move_to_front": ["Dessert Station"],
        "merges": [{ "into": "Grill Station", "from": "Prep Station" }],
        "orders": [
            { "station": "Grill Station", "dish": "Grilled Chicken Sandwich" },
            { "dish": "Fruit Salad" }
        ]
    }"#;

    #[test]
    fn should_load_stations_in_file_order() {
        let setup = parse_kitchen(KITCHEN);
        assert_eq!(true, setup.is_ok());
        if let Ok(setup) = setup {
            let names: Vec<&str> = setup.manager.iter().map(|station| station.name()).collect();
            assert_eq!(vec!["Grill Station", "Prep Station", "Dessert Station"], names);
        }
    }

    #[test]
    fn should_accumulate_repeated_stock_entries() {
        if let Ok(setup) = parse_kitchen(KITCHEN) {
            let grill = setup.manager.find_station("Grill Station");
            assert_eq!(Some(2), grill.map(|station| station.ingredients_stock().len()));
            assert_eq!(Some(50), grill.map(|station| station.ingredients_stock()[0].quantity));
        } else {
            panic!("kitchen should parse");
        }
    }

    #[test]
    fn should_share_the_same_dish_between_stations() {
        if let Ok(setup) = parse_kitchen(KITCHEN) {
            let grill = setup.manager.find_station("Grill Station").map(|s| s.dishes()[0].clone());
            let prep = setup.manager.find_station("Prep Station").map(|s| s.dishes()[0].clone());
            match (grill, prep) {
                (Some(grill), Some(prep)) => assert_eq!(true, Rc::ptr_eq(&grill, &prep)),
                _ => panic!("both stations should have dishes"),
            }
        } else {
            panic!("kitchen should parse");
        }
    }

    #[test]
    fn should_load_reorganizations_and_orders() {
        if let Ok(setup) = parse_kitchen(KITCHEN) {
            assert_eq!(vec!["Dessert Station".to_string()], setup.move_to_front);
            assert_eq!(
                vec![("Grill Station".to_string(), "Prep Station".to_string())],
                setup.merges
            );
            assert_eq!(
                vec![
                    Order::new(0, Some("Grill Station".to_string()), "Grilled Chicken Sandwich"),
                    Order::new(1, None, "Fruit Salad"),
                ],
                setup.orders
            );
        } else {
            panic!("kitchen should parse");
        }
    }

    #[test]
    fn should_fail_when_a_station_uses_an_unknown_dish() {
        let json = r#"{ "stations": [{ "name": "Grill", "dishes": ["Pizza"] }] }"#;
        assert_eq!(
            Some(KitchenError::UnknownDish("Pizza".to_string())),
            parse_kitchen(json).err()
        );
    }

    #[test]
    fn should_fail_with_invalid_json() {
        let result = parse_kitchen("{ \"stations\": 3 }");
        assert_eq!(true, matches!(result, Err(KitchenError::ParseError(_))));
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        let result = read_kitchen_from_file("this-kitchen-does-not-exist.json");
        assert_eq!(true, matches!(result, Err(KitchenError::FileReaderError)));
    }

    #[test]
    fn should_keep_every_order_when_shuffling() {
        let json = r#"{
            "orders": [{ "dish": "A" }, { "dish": "B" }, { "dish": "C" }],
            "shuffle_orders": true
        }"#;
        if let Ok(setup) = parse_kitchen(json) {
            let mut ids: Vec<usize> = setup.orders.iter().map(|order| order.id).collect();
            ids.sort();
            assert_eq!(vec![0, 1, 2], ids);
        } else {
            panic!("kitchen should parse");
        }
    }
}
