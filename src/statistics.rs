//! Estadisticas de la cocina: pedidos preparados, descartados y estado de cada estacion
use crate::station_manager::StationManager;

#[derive(Debug, Default, PartialEq)]
pub struct Statistics {
    pub prepared: u64,
    pub skipped: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn record(&mut self, prepared: bool) {
        if prepared {
            self.prepared += 1;
        } else {
            self.skipped += 1;
        }
    }

    pub fn print_statistics(&self, manager: &StationManager) {
        println!("{}", self.summary(manager));
    }

    pub fn summary(&self, manager: &StationManager) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders prepared={} skipped={} | Station=(dishes, stock) |",
            self.prepared, self.skipped
        );
        for station in manager.iter() {
            let dishes: Vec<&str> = station.dishes().iter().map(|dish| dish.name()).collect();
            let stock: Vec<String> = station
                .ingredients_stock()
                .iter()
                .map(|ingredient| format!("{}x{}", ingredient.name, ingredient.quantity))
                .collect();
            statistics.push_str(&format!(
                " {}=([{}], [{}]) ",
                station.name(),
                dishes.join(", "),
                stock.join(", ")
            ));
        }
        statistics
    }
}
