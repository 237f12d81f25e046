//! Per-unit-length line parameters and the generator seam.

use ndarray::Array1;
use num_complex::Complex64;

use crate::constants::PhysicalConstants;
use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;

/// Distributed RLGC parameters, one sample per frequency point.
#[derive(Debug, Clone, PartialEq)]
pub struct Rlgc {
    /// Series resistance (Ω/m)
    pub r: Array1<f64>,
    /// Series inductance (H/m)
    pub l: Array1<f64>,
    /// Shunt conductance (S/m)
    pub g: Array1<f64>,
    /// Shunt capacitance (F/m)
    pub c: Array1<f64>,
}

impl Rlgc {
    /// Assemble from four arrays of equal length.
    pub fn new(r: Array1<f64>, l: Array1<f64>, g: Array1<f64>, c: Array1<f64>) -> MediaResult<Self> {
        let expected = r.len();
        for actual in [l.len(), g.len(), c.len()] {
            if actual != expected {
                return Err(MediaError::LengthMismatch { expected, actual });
            }
        }
        Ok(Self { r, l, g, c })
    }

    /// Frequency-independent parameters repeated over `n` points.
    pub fn constant(n: usize, r: f64, l: f64, g: f64, c: f64) -> Self {
        Self {
            r: Array1::from_elem(n, r),
            l: Array1::from_elem(n, l),
            g: Array1::from_elem(n, g),
            c: Array1::from_elem(n, c),
        }
    }

    /// Parameters of a homogeneous medium from its absolute permittivity
    /// and permeability.
    ///
    /// Uses the `e^{jωt}` convention, `ε = ε′ − jε″`, so losses appear as
    /// `G = ωε″` and `R = ωμ″`.
    pub fn from_constitutive(
        w: &Array1<f64>,
        eps: &Array1<Complex64>,
        mu: &Array1<Complex64>,
    ) -> MediaResult<Self> {
        if eps.len() != w.len() {
            return Err(MediaError::LengthMismatch {
                expected: w.len(),
                actual: eps.len(),
            });
        }
        if mu.len() != w.len() {
            return Err(MediaError::LengthMismatch {
                expected: w.len(),
                actual: mu.len(),
            });
        }

        let c = eps.mapv(|e| e.re);
        let l = mu.mapv(|m| m.re);
        let g = Array1::from_iter(w.iter().zip(eps).map(|(&w, e)| -w * e.im));
        let r = Array1::from_iter(w.iter().zip(mu).map(|(&w, m)| -w * m.im));

        Ok(Self { r, l, g, c })
    }

    /// Number of frequency points
    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// First index where any of the four arrays is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<(&'static str, usize)> {
        [
            ("resistance", &self.r),
            ("inductance", &self.l),
            ("conductance", &self.g),
            ("capacitance", &self.c),
        ]
        .into_iter()
        .find_map(|(name, values)| {
            values
                .iter()
                .position(|v| !v.is_finite())
                .map(|index| (name, index))
        })
    }
}

/// Something that turns a frequency axis into RLGC parameters.
///
/// Implemented by each physical model (Debye, Cole-Cole, plasma, two-wire,
/// ...). A generator is pure: it owns its parameters and reads physical
/// constants only from the table it is handed.
pub trait RlgcGenerator {
    /// Human-readable model name, used in `Display` output.
    fn name(&self) -> &'static str;

    /// Evaluate R, L, G, C at every point of `frequency`.
    fn generate(&self, frequency: &Frequency, constants: &PhysicalConstants) -> MediaResult<Rlgc>;
}
