
pub mod error;
pub mod gaussian_nb;
pub mod hyperparams;
pub mod param_guard;
pub mod traits;
