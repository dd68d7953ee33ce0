//! 3×3 convolution weights for the diffusion pass.

/// Row-major 3×3 stencil weights; index 4 is the centre cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kernel3x3 {
    weights: [f32; 9],
}

impl Kernel3x3 {
    /// Normalised Gaussian: corners 1/16, edges 1/8, centre 1/4.
    pub const GAUSSIAN: Kernel3x3 = Kernel3x3::new([
        1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
        1.0 / 8.0,  1.0 / 4.0, 1.0 / 8.0,
        1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0,
    ]);

    pub const fn new(weights: [f32; 9]) -> Self {
        Self { weights }
    }

    /// Weight applied to the neighbour at offset `(dx, dy)`, each in `-1..=1`.
    #[inline(always)]
    pub fn weight(&self, dx: i32, dy: i32) -> f32 {
        self.weights[((dy + 1) * 3 + (dx + 1)) as usize]
    }

    pub fn weights(&self) -> &[f32; 9] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// `true` if the weights sum to 1 within `f32` tolerance, i.e. the pass
    /// conserves mass when the decay factor is 1.
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= 1e-6
    }
}

impl Default for Kernel3x3 {
    fn default() -> Self {
        Self::GAUSSIAN
    }
}
