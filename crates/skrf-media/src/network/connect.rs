//! Network connection functions
//!
//! Connects ports of n-port networks together. Connected ports must share a
//! reference impedance; the media in this crate always build both sides of a
//! junction against the same characteristic impedance.
//!
//! Based on the "sub-network growth" algorithm described in:
//! - Filipsson, Gunnar, "A New General Computer Algorithm for S-Matrix Calculation
//!   of Interconnected Multiports", 11th European Microwave Conference, 1981.

use anyhow::{anyhow, bail, Result};
use nalgebra::DMatrix;
use ndarray::{Array2, Array3};
use num_complex::Complex64;

use super::core::Network;
use crate::constants::Z0_MATCH_TOL;

/// Gather the block of `a[f]` with rows `rows` and columns `cols`.
fn block(a: &Array3<Complex64>, f: usize, rows: &[usize], cols: &[usize]) -> DMatrix<Complex64> {
    DMatrix::from_fn(rows.len(), cols.len(), |i, j| a[[f, rows[i], cols[j]]])
}

/// Connects multiple port pairs within a single network's s-matrix.
///
/// With external ports `e` and internal ports `i` the reduced matrix is
/// `S_ee + S_ei (I − M S_ii)⁻¹ M S_ie`, `M` being the pair permutation.
pub fn innerconnect_multi_s(
    a: &Array3<Complex64>,
    connections: &[(usize, usize)],
) -> Result<Array3<Complex64>> {
    let (nfreq, nports, _) = a.dim();

    if connections.is_empty() {
        return Ok(a.clone());
    }

    let mut internal = vec![false; nports];
    for &(k, l) in connections {
        if k >= nports || l >= nports {
            bail!("port pair ({}, {}) out of range for {} ports", k, l, nports);
        }
        if k == l {
            bail!("cannot connect port {} to itself", k);
        }
        if internal[k] || internal[l] {
            bail!("port connected more than once");
        }
        internal[k] = true;
        internal[l] = true;
    }

    let ext_ports: Vec<usize> = (0..nports).filter(|&p| !internal[p]).collect();
    let int_ports: Vec<usize> = connections.iter().flat_map(|&(k, l)| [k, l]).collect();
    let n_ext = ext_ports.len();
    let n_int = int_ports.len();

    let one = Complex64::new(1.0, 0.0);
    let mut m = DMatrix::<Complex64>::zeros(n_int, n_int);
    for pair in 0..connections.len() {
        m[(2 * pair, 2 * pair + 1)] = one;
        m[(2 * pair + 1, 2 * pair)] = one;
    }
    let identity = DMatrix::<Complex64>::identity(n_int, n_int);

    let mut result = Array3::<Complex64>::zeros((nfreq, n_ext, n_ext));

    for f in 0..nfreq {
        let s_ee = block(a, f, &ext_ports, &ext_ports);
        let s_ei = block(a, f, &ext_ports, &int_ports);
        let s_ie = block(a, f, &int_ports, &ext_ports);
        let s_ii = block(a, f, &int_ports, &int_ports);

        let loop_inv = (&identity - &m * s_ii)
            .try_inverse()
            .ok_or_else(|| anyhow!("singular connection at frequency index {}", f))?;

        let s_new = s_ee + s_ei * loop_inv * &m * s_ie;

        for i in 0..n_ext {
            for j in 0..n_ext {
                result[[f, i, j]] = s_new[(i, j)];
            }
        }
    }

    Ok(result)
}

/// Connect two ports of a single n-port network's s-matrix.
pub fn innerconnect_s(a: &Array3<Complex64>, k: usize, l: usize) -> Result<Array3<Complex64>> {
    innerconnect_multi_s(a, &[(k, l)])
}

/// Connect two n-port networks' s-matrices together.
///
/// Connects port `k` on network `A` to port `l` on network `B`.
/// The resultant network has (nports_a + nports_b - 2) ports: the remaining
/// ports of `A` in order, followed by the remaining ports of `B`.
pub fn connect_s(
    a: &Array3<Complex64>,
    k: usize,
    b: &Array3<Complex64>,
    l: usize,
) -> Result<Array3<Complex64>> {
    let (nfreq, nports_a, _) = a.dim();
    let nports_b = b.shape()[1];

    if k >= nports_a {
        bail!("port k={} out of range (network A has {} ports)", k, nports_a);
    }
    if l >= nports_b {
        bail!("port l={} out of range (network B has {} ports)", l, nports_b);
    }
    if b.shape()[0] != nfreq {
        bail!("frequency count mismatch: {} vs {}", nfreq, b.shape()[0]);
    }

    // Block-diagonal composite of A and B
    let nc = nports_a + nports_b;
    let c = Array3::from_shape_fn((nfreq, nc, nc), |(f, i, j)| {
        match (i < nports_a, j < nports_a) {
            (true, true) => a[[f, i, j]],
            (false, false) => b[[f, i - nports_a, j - nports_a]],
            _ => Complex64::new(0.0, 0.0),
        }
    });

    innerconnect_s(&c, k, nports_a + l)
}

/// Reference impedance columns that survive a connection
fn remaining_z0(z0: &Array2<Complex64>, removed: &[usize]) -> Vec<usize> {
    (0..z0.ncols()).filter(|p| !removed.contains(p)).collect()
}

fn check_z0_match(
    za: &Array2<Complex64>,
    k: usize,
    zb: &Array2<Complex64>,
    l: usize,
) -> Result<()> {
    for f in 0..za.nrows() {
        let (x, y) = (za[[f, k]], zb[[f, l]]);
        if (x - y).norm() > Z0_MATCH_TOL * x.norm().max(y.norm()).max(1.0) {
            bail!(
                "reference impedance mismatch at frequency index {}: {} vs {}",
                f,
                x,
                y
            );
        }
    }
    Ok(())
}

impl Network {
    /// Connect two ports of this network together (innerconnect)
    ///
    /// Connects port `k` to port `l`, resulting in a (nports-2)-port network.
    pub fn innerconnect(&self, k: usize, l: usize) -> Result<Network> {
        if k >= self.nports() || l >= self.nports() {
            bail!("port pair ({}, {}) out of range for {} ports", k, l, self.nports());
        }
        check_z0_match(&self.z0, k, &self.z0, l)?;
        let s_new = innerconnect_s(&self.s, k, l)?;

        let keep = remaining_z0(&self.z0, &[k, l]);
        let z0_new = Array2::from_shape_fn((self.nfreq(), keep.len()), |(f, p)| {
            self.z0[[f, keep[p]]]
        });

        Network::new(self.frequency.clone(), s_new, z0_new)
    }

    /// Connect this network's port `k` to another network's port `l`
    ///
    /// Returns a new network with (nports_self + nports_other - 2) ports.
    pub fn connect(&self, k: usize, other: &Network, l: usize) -> Result<Network> {
        if self.nfreq() != other.nfreq() {
            bail!(
                "frequency count mismatch: {} vs {}",
                self.nfreq(),
                other.nfreq()
            );
        }
        if k >= self.nports() || l >= other.nports() {
            bail!(
                "ports ({}, {}) out of range for {}- and {}-port networks",
                k,
                l,
                self.nports(),
                other.nports()
            );
        }
        check_z0_match(&self.z0, k, &other.z0, l)?;

        let s_new = connect_s(&self.s, k, &other.s, l)?;

        let keep_a = remaining_z0(&self.z0, &[k]);
        let keep_b = remaining_z0(&other.z0, &[l]);
        let z0_new = Array2::from_shape_fn(
            (self.nfreq(), keep_a.len() + keep_b.len()),
            |(f, p)| {
                if p < keep_a.len() {
                    self.z0[[f, keep_a[p]]]
                } else {
                    other.z0[[f, keep_b[p - keep_a.len()]]]
                }
            },
        );

        Network::new(self.frequency.clone(), s_new, z0_new)
    }
}
