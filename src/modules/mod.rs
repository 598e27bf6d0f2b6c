// Bounded contexts of the catalog, each split into domain, application and
// infrastructure layers

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod video;
