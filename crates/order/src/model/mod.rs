pub mod order;

pub use self::order::{Order, OrderItem, OrderStatus};
