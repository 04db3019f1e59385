use ndarray::{Array1, Array2};
use rand::Rng;

/// Matrix with entries drawn uniformly from `[low, high)`
pub fn uniform<R: Rng>(rng: &mut R, rows: usize, cols: usize, low: f32, high: f32) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |_| rng.random_range(low..high))
}

/// Embedding table centred on zero with spread `1 / components`
pub fn embeddings<R: Rng>(rng: &mut R, rows: usize, components: usize) -> Array2<f32> {
    let half_width = 0.5 / components as f32;
    uniform(rng, rows, components, -half_width, half_width)
}

pub fn zeros(size: usize) -> Array1<f32> {
    Array1::zeros(size)
}
