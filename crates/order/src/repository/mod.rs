mod memory;
mod order;

pub use self::memory::InMemoryOrderRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
