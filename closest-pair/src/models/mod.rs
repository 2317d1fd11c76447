//! Contains the domain models: a point on a plane and a pair of points.

mod point;
pub use self::point::*;

mod pair;
pub use self::pair::*;
