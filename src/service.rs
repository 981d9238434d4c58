//! Servicio de la cocina. Toma los pedidos de la cola y los prepara en la estacion correspondiente.
use log::{debug, info};

use crate::{
    errors::KitchenError, order::Order, orders_queue::OrdersQueue,
    station_manager::StationManager, statistics::Statistics,
};

pub struct Service<'a> {
    manager: &'a mut StationManager,
    statistics: &'a mut Statistics,
}

impl<'a> Service<'a> {
    pub fn new(manager: &'a mut StationManager, statistics: &'a mut Statistics) -> Service<'a> {
        Service { manager, statistics }
    }

    pub fn handle_orders(&mut self, orders_queue: &mut OrdersQueue) -> Result<(), KitchenError> {
        while !orders_queue.is_empty() {
            let order = orders_queue
                .next_order()
                .ok_or(KitchenError::EmptyQueueWhenNotExpected)?;
            debug!("[SERVICE] Takes order {}", order.id);
            let prepared = self.process_order(&order);
            self.statistics.record(prepared);
        }
        info!("[SERVICE] No more orders left");
        Ok(())
    }

    /// Sin estacion indicada se usa la primera, desde el frente, que pueda completar el plato
    fn process_order(&mut self, order: &Order) -> bool {
        let station_name = match &order.station {
            Some(station_name) => station_name.clone(),
            None => match self.manager.find_station_for(&order.dish) {
                Some(station) => station.name().to_string(),
                None => {
                    info!("[SERVICE] Skipped order {}, no station can prepare {}", order.id, order.dish);
                    return false;
                }
            },
        };

        let prepared = self.manager.prepare_dish_at_station(&station_name, &order.dish);
        if prepared {
            info!("[SERVICE] Order {}: {} prepared at {}", order.id, order.dish, station_name);
        } else {
            info!("[SERVICE] Skipped order {}, {} can't prepare {}", order.id, station_name, order.dish);
        }
        prepared
    }
}
