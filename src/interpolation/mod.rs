pub mod config;
pub mod coordinates;
pub mod errors;
pub mod matrix;
pub mod report;
pub mod scalar;
pub mod traits;
pub use traits::Interpolator;

pub mod evaluate;
pub mod polynomial;
pub mod solve;
pub mod vandermonde;

pub use config::VandermondeCfg;
pub use errors::InterpolationError;
pub use evaluate::{evaluate, evaluate_at};
pub use matrix::Matrix;
pub use polynomial::Polynomial;
pub use solve::solve;
pub use vandermonde::{build_vandermonde, build_vandermonde_checked, interpolate};
