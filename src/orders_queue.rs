//! Pedidos pendientes de la cocina, en el orden en que se cargaron
use std::collections::VecDeque;

use crate::order::Order;

pub struct OrdersQueue {
    orders: VecDeque<Order>,
}

impl OrdersQueue {
    pub fn new() -> OrdersQueue {
        OrdersQueue {
            orders: VecDeque::new(),
        }
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn next_order(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Pedidos dirigidos a una estacion en particular
    pub fn pending_at(&self, station_name: &str) -> usize {
        self.orders
            .iter()
            .filter(|order| order.station.as_deref() == Some(station_name))
            .count()
    }

    /// Pedidos que se derivan a la primera estacion que pueda prepararlos
    pub fn unrouted(&self) -> usize {
        self.orders
            .iter()
            .filter(|order| order.station.is_none())
            .count()
    }
}

impl Default for OrdersQueue {
    fn default() -> Self {
        OrdersQueue::new()
    }
}

impl From<Vec<Order>> for OrdersQueue {
    fn from(orders: Vec<Order>) -> Self {
        OrdersQueue {
            orders: orders.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch_orders() -> OrdersQueue {
        OrdersQueue::from(vec![
            Order::new(0, Some("Grill".to_string()), "Burger"),
            Order::new(1, None, "Salad"),
            Order::new(2, Some("Grill".to_string()), "Steak"),
            Order::new(3, Some("Dessert".to_string()), "Mousse"),
        ])
    }

    #[test]
    fn should_start_without_pending_orders() {
        let mut queue = OrdersQueue::default();
        assert_eq!(0, queue.len());
        assert_eq!(0, queue.unrouted());
        assert_eq!(None, queue.next_order());
    }

    #[test]
    fn should_count_orders_by_destination() {
        let mut queue = lunch_orders();
        queue.push(Order::new(4, None, "Soup"));
        assert_eq!(5, queue.len());
        assert_eq!(2, queue.pending_at("Grill"));
        assert_eq!(1, queue.pending_at("Dessert"));
        assert_eq!(0, queue.pending_at("Prep"));
        assert_eq!(2, queue.unrouted());
    }

    #[test]
    fn should_hand_out_orders_in_loading_order_until_empty() {
        let mut queue = lunch_orders();
        let dishes: Vec<String> = std::iter::from_fn(|| queue.next_order())
            .map(|order| order.dish)
            .collect();
        assert_eq!(vec!["Burger", "Salad", "Steak", "Mousse"], dishes);
        assert_eq!(true, queue.is_empty());
        assert_eq!(0, queue.pending_at("Grill"));
    }
}
