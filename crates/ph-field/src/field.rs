//! `TrailField` — the double-buffered concentration grid.
//!
//! # Buffers
//!
//! `front` is the live field: sensors read it and deposits accumulate into
//! it.  `diffuse_and_decay` reads only `front`, writes every cell of `back`,
//! then swaps the two.  No output cell can observe a value already updated
//! in the same pass, and no allocation happens per tick.

use ph_core::SensorBoundary;

use crate::{FieldError, FieldResult, Kernel3x3};

/// Dense `width × height` grid of non-negative concentration values.
///
/// Cell `(x, y)` lives at linear index `x + y * width`.  Continuous
/// coordinates are rounded to the nearest cell before indexing.
#[derive(Clone, Debug)]
pub struct TrailField {
    width:  usize,
    height: usize,
    front:  Vec<f32>,
    back:   Vec<f32>,
}

impl TrailField {
    /// Allocate an all-zero field.
    ///
    /// Returns [`FieldError::ZeroDimension`] if either side is zero.
    pub fn new(width: usize, height: usize) -> FieldResult<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::ZeroDimension { width, height });
        }
        let len = width * height;
        Ok(Self {
            width,
            height,
            front: vec![0.0; len],
            back:  vec![0.0; len],
        })
    }

    /// Build a field from explicit row-major values.
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> FieldResult<Self> {
        let mut field = Self::new(width, height)?;
        if values.len() != field.front.len() {
            return Err(FieldError::SizeMismatch {
                width,
                height,
                expected: field.front.len(),
                got:      values.len(),
            });
        }
        field.front = values;
        Ok(field)
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.front.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    /// Linear index of integer cell `(ix, iy)`.  Caller guarantees bounds.
    #[inline(always)]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        ix + iy * self.width
    }

    /// `true` if `(ix, iy)` is on the frozen one-cell border.
    #[inline]
    pub fn is_border(&self, ix: usize, iy: usize) -> bool {
        ix == 0 || iy == 0 || ix + 1 >= self.width || iy + 1 >= self.height
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Row-major view of the current values.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.front
    }

    /// Value at integer cell `(ix, iy)`, or `None` off-grid.
    #[inline]
    pub fn get(&self, ix: usize, iy: usize) -> Option<f32> {
        if ix < self.width && iy < self.height {
            Some(self.front[self.index(ix, iy)])
        } else {
            None
        }
    }

    /// Concentration at the cell nearest `(x, y)`.  Off-grid reads are `0.0`.
    #[inline]
    pub fn read(&self, x: f32, y: f32) -> f32 {
        self.sample(x, y, SensorBoundary::Zero)
    }

    /// Concentration at the cell nearest `(x, y)` under an explicit
    /// off-grid policy.
    #[inline]
    pub fn sample(&self, x: f32, y: f32, boundary: SensorBoundary) -> f32 {
        let ix = resolve_axis(round_to_cell(x), self.width, boundary);
        let iy = resolve_axis(round_to_cell(y), self.height, boundary);
        match (ix, iy) {
            (Some(ix), Some(iy)) => self.front[self.index(ix, iy)],
            _ => 0.0,
        }
    }

    /// Sum of all cells.  Accumulated in `f64`.
    pub fn total(&self) -> f64 {
        self.front.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value (0.0 for an all-zero field).
    pub fn max(&self) -> f32 {
        self.front.iter().copied().fold(0.0, f32::max)
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Add `amount` to the cell nearest `(x, y)`.
    ///
    /// Deposits whose rounded cell is on the border (or off-grid) are
    /// discarded.  Returns `true` if the deposit landed.
    #[inline]
    pub fn deposit(&mut self, x: f32, y: f32, amount: f32) -> bool {
        let ix = round_to_cell(x);
        let iy = round_to_cell(y);
        if ix <= 0 || iy <= 0 || ix >= self.width as i64 - 1 || iy >= self.height as i64 - 1 {
            return false;
        }
        let i = self.index(ix as usize, iy as usize);
        self.front[i] += amount;
        true
    }

    /// Reset every cell of both buffers to zero.
    pub fn clear(&mut self) {
        self.front.fill(0.0);
        self.back.fill(0.0);
    }

    /// One whole-grid diffusion step followed by decay.
    ///
    /// Every interior cell becomes `min(1, decay · Σ kernel · neighbourhood)`
    /// computed from pre-pass values only.  Border cells keep their previous
    /// value bit-for-bit.
    pub fn diffuse_and_decay(&mut self, kernel: &Kernel3x3, decay: f32) {
        let width  = self.width;
        let height = self.height;
        let front  = self.front.as_slice();

        #[cfg(not(feature = "parallel"))]
        {
            for (y, row) in self.back.chunks_mut(width).enumerate() {
                diffuse_row(front, width, height, y, row, kernel, decay);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.back
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| diffuse_row(front, width, height, y, row, kernel, decay));
        }

        std::mem::swap(&mut self.front, &mut self.back);
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Nearest integer cell for a continuous coordinate (half rounds away from 0).
#[inline(always)]
fn round_to_cell(v: f32) -> i64 {
    v.round() as i64
}

/// Resolve one axis under the off-grid policy.  `None` means "reads zero".
#[inline]
fn resolve_axis(val: i64, len: usize, boundary: SensorBoundary) -> Option<usize> {
    let len = len as i64;
    if (0..len).contains(&val) {
        return Some(val as usize);
    }
    match boundary {
        SensorBoundary::Zero => None,
        SensorBoundary::Wrap => Some(val.rem_euclid(len) as usize),
    }
}

/// Write output row `y` of a diffusion pass.  Border cells copy through.
fn diffuse_row(
    src:    &[f32],
    width:  usize,
    height: usize,
    y:      usize,
    out:    &mut [f32],
    kernel: &Kernel3x3,
    decay:  f32,
) {
    let row = y * width;
    if y == 0 || y + 1 >= height || width < 3 {
        out.copy_from_slice(&src[row..row + width]);
        return;
    }

    out[0] = src[row];
    out[width - 1] = src[row + width - 1];

    let above = row - width;
    let below = row + width;
    for x in 1..width - 1 {
        let diffused = src[above + x - 1] * kernel.weight(-1, -1)
            + src[above + x]     * kernel.weight(0, -1)
            + src[above + x + 1] * kernel.weight(1, -1)
            + src[row + x - 1]   * kernel.weight(-1, 0)
            + src[row + x]       * kernel.weight(0, 0)
            + src[row + x + 1]   * kernel.weight(1, 0)
            + src[below + x - 1] * kernel.weight(-1, 1)
            + src[below + x]     * kernel.weight(0, 1)
            + src[below + x + 1] * kernel.weight(1, 1);
        out[x] = (diffused * decay).min(1.0);
    }
}
