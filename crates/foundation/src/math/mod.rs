pub mod precision;
pub mod rotation;
pub mod sphere;
pub mod vec;

pub use precision::*;
pub use rotation::*;
pub use sphere::*;
pub use vec::*;
