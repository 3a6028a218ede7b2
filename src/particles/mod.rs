mod axes;
mod body;
mod state;
mod energy;
pub mod gravity;

pub use self::axes::Axes;
pub use self::body::Body;
pub use self::state::State;
pub use self::gravity::{GravityParameters, PairMatrix};
pub use self::gravity::calculate_accelerations;
