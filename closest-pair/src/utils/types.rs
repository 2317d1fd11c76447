use std::sync::Arc;

/// Alias to a scalar floating type used for distances.
pub type Float = f64;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str)>;
