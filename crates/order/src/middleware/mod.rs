pub mod chaos;
pub mod validate;

pub use self::chaos::chaos_middleware;
pub use self::validate::{SchemaPayload, ValidatedJson};
