//! Collection aggregate — membership-gated pin sets

pub mod model;
pub mod repository;

pub use model::Collection;
pub use repository::CollectionRepository;
