pub mod appearance;
pub mod contracts;
pub mod opener;

pub use appearance::*;
pub use contracts::*;
pub use opener::*;
