pub mod entity_id;

pub use entity_id::{parse_uuid, EntityId};
