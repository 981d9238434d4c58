/// Pedido de un plato. Si no indica estacion se prepara en la primera que pueda completarlo.
#[derive(Debug, PartialEq)]
pub struct Order {
    pub id: usize,
    pub station: Option<String>,
    pub dish: String,
}

impl Order {
    pub fn new(id: usize, station: Option<String>, dish: impl Into<String>) -> Order {
        Order {
            id,
            station,
            dish: dish.into(),
        }
    }
}
