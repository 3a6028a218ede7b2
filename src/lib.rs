extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate csv;
extern crate time;

pub mod constants;

mod particles;
pub use self::particles::Axes;
pub use self::particles::Body;
pub use self::particles::State;
pub use self::particles::GravityParameters;
pub use self::particles::PairMatrix;
pub use self::particles::gravity;
pub use self::particles::calculate_accelerations;

mod integrator;
pub use self::integrator::*;

pub mod cases;
pub mod tools;

