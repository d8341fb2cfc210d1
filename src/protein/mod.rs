pub mod molecular_weights;
pub mod ptm;
pub mod weight;

pub use molecular_weights::*;
pub use ptm::*;
pub use weight::*;
