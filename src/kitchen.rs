//! La cocina: estaciones, pedidos pendientes y estadisticas.
use std::path::Path;

use log::{debug, info};

use crate::{
    errors::KitchenError,
    kitchen_reader::{read_kitchen_from_file, KitchenSetup},
    orders_queue::OrdersQueue,
    service::Service,
    station_manager::StationManager,
    statistics::Statistics,
};

pub struct Kitchen {
    manager: StationManager,
    orders_queue: OrdersQueue,
    statistics: Statistics,
    move_to_front: Vec<String>,
    merges: Vec<(String, String)>,
}

impl Kitchen {
    pub fn new(setup: KitchenSetup) -> Kitchen {
        Kitchen {
            manager: setup.manager,
            orders_queue: OrdersQueue::from(setup.orders),
            statistics: Statistics::new(),
            move_to_front: setup.move_to_front,
            merges: setup.merges,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Kitchen, KitchenError> {
        Ok(Kitchen::new(read_kitchen_from_file(path)?))
    }

    pub fn manager(&self) -> &StationManager {
        &self.manager
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Reorganiza las estaciones, procesa todos los pedidos e imprime las estadisticas
    pub fn manage_orders(&mut self) -> Result<(), KitchenError> {
        self.reorganize_stations();
        info!(
            "[KITCHEN] {} orders pending, {} without station",
            self.orders_queue.len(),
            self.orders_queue.unrouted()
        );
        for station in self.manager.iter() {
            debug!(
                "[KITCHEN] {} has {} orders waiting",
                station.name(),
                self.orders_queue.pending_at(station.name())
            );
        }
        Service::new(&mut self.manager, &mut self.statistics).handle_orders(&mut self.orders_queue)?;
        self.statistics.print_statistics(&self.manager);
        Ok(())
    }

    fn reorganize_stations(&mut self) {
        for station_name in self.move_to_front.drain(..) {
            let moved = self.manager.move_station_to_front(&station_name);
            info!("[KITCHEN] Move {} to the front: {}", station_name, moved);
        }
        for (target, source) in self.merges.drain(..) {
            let merged = self.manager.merge_stations(&target, &source);
            info!("[KITCHEN] Merge {} into {}: {}", source, target, merged);
        }
    }
}
