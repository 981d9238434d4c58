//! Simulacion de las estaciones de una cocina: cada estacion tiene los platos que puede preparar
//! y su propio stock de ingredientes, y un administrador las ordena, une y les deriva los pedidos.
pub mod constants;
pub mod dish;
pub mod errors;
pub mod ingredient;
pub mod kitchen;
pub mod kitchen_reader;
pub mod kitchen_station;
pub mod order;
pub mod orders_queue;
pub mod service;
pub mod station_manager;
pub mod statistics;
