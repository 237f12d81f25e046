//! S-parameter transformation functions
//!
//! Conversions between S, Z and ABCD parameters for reference impedances that
//! may differ per port and per frequency. S-parameters use the travelling
//! wave definition
//!
//! `S = F⁻¹ (Z − Zr)(Z + Zr)⁻¹ F`, with `F = diag(sqrt(z0))`,
//!
//! under which a line referenced to its own characteristic impedance is
//! matched even when that impedance is complex.

use anyhow::{anyhow, bail, Result};
use nalgebra::DMatrix;
use ndarray::{Array2, Array3, ArrayView2};
use num_complex::Complex64;

fn check_shapes(p: &Array3<Complex64>, z0: &Array2<Complex64>) -> Result<(usize, usize)> {
    let (nfreq, rows, cols) = p.dim();
    if rows != cols {
        bail!("parameter matrices must be square, got {}x{}", rows, cols);
    }
    if z0.dim() != (nfreq, rows) {
        bail!(
            "z0 shape {:?} does not match [{}, {}]",
            z0.dim(),
            nfreq,
            rows
        );
    }
    Ok((nfreq, rows))
}

fn to_matrix(p: ArrayView2<Complex64>) -> DMatrix<Complex64> {
    DMatrix::from_fn(p.nrows(), p.ncols(), |i, j| p[[i, j]])
}

fn diag(values: impl Iterator<Item = Complex64>) -> DMatrix<Complex64> {
    let v: Vec<Complex64> = values.collect();
    DMatrix::from_diagonal(&nalgebra::DVector::from_vec(v))
}

/// Convert S-parameters to Z-parameters
///
/// `Z = F (I − S)⁻¹ (I + S) F`
pub fn s2z(s: &Array3<Complex64>, z0: &Array2<Complex64>) -> Result<Array3<Complex64>> {
    let (nfreq, nports) = check_shapes(s, z0)?;
    let mut z = Array3::<Complex64>::zeros((nfreq, nports, nports));
    let identity = DMatrix::<Complex64>::identity(nports, nports);

    for f in 0..nfreq {
        let s_f = to_matrix(s.slice(ndarray::s![f, .., ..]));
        let f_mat = diag(z0.row(f).iter().map(|x| x.sqrt()));
        let inv = (&identity - &s_f)
            .try_inverse()
            .ok_or_else(|| anyhow!("I - S is singular at frequency index {}", f))?;
        let z_f = &f_mat * inv * (&identity + &s_f) * &f_mat;
        for i in 0..nports {
            for j in 0..nports {
                z[[f, i, j]] = z_f[(i, j)];
            }
        }
    }

    Ok(z)
}

/// Convert Z-parameters to S-parameters
///
/// `S = F⁻¹ (Z − Zr)(Z + Zr)⁻¹ F`
pub fn z2s(z: &Array3<Complex64>, z0: &Array2<Complex64>) -> Result<Array3<Complex64>> {
    let (nfreq, nports) = check_shapes(z, z0)?;
    let mut s = Array3::<Complex64>::zeros((nfreq, nports, nports));

    for f in 0..nfreq {
        let z_f = to_matrix(z.slice(ndarray::s![f, .., ..]));
        let zr = diag(z0.row(f).iter().copied());
        let f_mat = diag(z0.row(f).iter().map(|x| x.sqrt()));
        let f_inv = diag(z0.row(f).iter().map(|x| Complex64::new(1.0, 0.0) / x.sqrt()));
        let inv = (&z_f + &zr)
            .try_inverse()
            .ok_or_else(|| anyhow!("Z + Zr is singular at frequency index {}", f))?;
        let s_f = f_inv * (&z_f - &zr) * inv * f_mat;
        for i in 0..nports {
            for j in 0..nports {
                s[[f, i, j]] = s_f[(i, j)];
            }
        }
    }

    Ok(s)
}

/// Re-reference S-parameters from `z0_old` to `z0_new`.
///
/// Works on voltage waves, `S_v = F S F⁻¹`. With `P = (I + Zn Zr⁻¹)/2` and
/// `Q = (I − Zn Zr⁻¹)/2` the new matrix is `(Q + P S_v)(P + Q S_v)⁻¹`, which
/// stays finite for opens and shorts where the Z route does not.
pub fn renormalize_s(
    s: &Array3<Complex64>,
    z0_old: &Array2<Complex64>,
    z0_new: &Array2<Complex64>,
) -> Result<Array3<Complex64>> {
    let (nfreq, nports) = check_shapes(s, z0_old)?;
    if z0_new.dim() != z0_old.dim() {
        bail!("new z0 shape {:?} does not match {:?}", z0_new.dim(), z0_old.dim());
    }
    let one = Complex64::new(1.0, 0.0);
    let half = Complex64::new(0.5, 0.0);
    let mut out = Array3::<Complex64>::zeros((nfreq, nports, nports));

    for f in 0..nfreq {
        let old = z0_old.row(f);
        let new = z0_new.row(f);
        let f_old = diag(old.iter().map(|x| x.sqrt()));
        let f_old_inv = diag(old.iter().map(|x| one / x.sqrt()));
        let f_new = diag(new.iter().map(|x| x.sqrt()));
        let f_new_inv = diag(new.iter().map(|x| one / x.sqrt()));
        let p = diag(old.iter().zip(new.iter()).map(|(zr, zn)| half * (one + zn / zr)));
        let q = diag(old.iter().zip(new.iter()).map(|(zr, zn)| half * (one - zn / zr)));

        let s_v = &f_old * to_matrix(s.slice(ndarray::s![f, .., ..])) * f_old_inv;
        let inv = (&p + &q * &s_v)
            .try_inverse()
            .ok_or_else(|| anyhow!("renormalization is singular at frequency index {}", f))?;
        let s_f = f_new_inv * (&q + &p * &s_v) * inv * f_new;
        for i in 0..nports {
            for j in 0..nports {
                out[[f, i, j]] = s_f[(i, j)];
            }
        }
    }

    Ok(out)
}

/// Convert two-port S-parameters to ABCD parameters
///
/// Works on the voltage-wave matrix `S' = F S F⁻¹`, so it stays defined for
/// networks without a Z representation (a zero-length thru, for example).
/// Fails where S21 vanishes.
pub fn s2a(s: &Array3<Complex64>, z0: &Array2<Complex64>) -> Result<Array3<Complex64>> {
    let (nfreq, nports) = check_shapes(s, z0)?;
    if nports != 2 {
        bail!("ABCD parameters need a 2-port, got {} ports", nports);
    }
    let one = Complex64::new(1.0, 0.0);
    let two = Complex64::new(2.0, 0.0);
    let mut a = Array3::<Complex64>::zeros((nfreq, 2, 2));

    for f in 0..nfreq {
        let (z1, z2) = (z0[[f, 0]], z0[[f, 1]]);
        let ratio = z1.sqrt() / z2.sqrt();
        let s11 = s[[f, 0, 0]];
        let s22 = s[[f, 1, 1]];
        let s12 = s[[f, 0, 1]] * ratio;
        let s21 = s[[f, 1, 0]] / ratio;

        if s21.norm() < crate::constants::NEAR_ZERO {
            bail!("S21 vanishes at frequency index {}, ABCD undefined", f);
        }

        let den = two * s21;
        a[[f, 0, 0]] = ((one + s11) * (one - s22) + s12 * s21) / den;
        a[[f, 0, 1]] = z2 * ((one + s11) * (one + s22) - s12 * s21) / den;
        a[[f, 1, 0]] = ((one - s11) * (one - s22) - s12 * s21) / (den * z1);
        a[[f, 1, 1]] = z2 * ((one - s11) * (one + s22) + s12 * s21) / (den * z1);
    }

    Ok(a)
}
