//! Small vector helpers for unit-normalized embeddings.

/// Scale `v` to unit length in place. Zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm < f32::EPSILON {
        return;
    }
    for x in v.iter_mut() {
        *x /= norm;
    }
}

/// Dot product; equals cosine similarity when both inputs are unit length.
///
/// Vectors of different width are compared over their common prefix.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
