pub mod activation;
pub mod loss;

// Convenience re-exports
pub use activation::softmax::softmax;
pub use loss::bce::BceLoss;
