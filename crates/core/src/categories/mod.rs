//! Categories module - dictionary models, repository trait, and role resolution.

mod categories_model;
mod categories_traits;
mod category_resolver;

pub use categories_model::{Category, CategoryId, Role};
pub use categories_traits::CategoryRepositoryTrait;
pub use category_resolver::CategoryResolver;
