//! Individual benchmark function implementations

mod ackley;
mod beale;
mod booth;
mod cobb_douglas;
mod himmelblau;
mod matyas;
mod rastrigin;
mod rosenbrock;
mod sphere;

pub use ackley::ackley;
pub use beale::beale;
pub use booth::booth;
pub use cobb_douglas::{
    FACTOR_A, FACTOR_B, cobb_douglas, cobb_douglas_crs_residual, cobb_douglas_drs_margin,
};
pub use himmelblau::himmelblau;
pub use matyas::matyas;
pub use rastrigin::rastrigin;
pub use rosenbrock::rosenbrock;
pub use sphere::sphere;
