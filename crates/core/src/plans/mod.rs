//! Plans module - monthly targets and their repository trait.

mod plans_model;
mod plans_traits;

pub use plans_model::PlanLine;
pub use plans_traits::PlanRepositoryTrait;
