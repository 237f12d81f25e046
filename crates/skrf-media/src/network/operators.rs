//! Network operations
//!
//! Cascading, port flipping, renumbering and reference-impedance
//! renormalization.

use anyhow::{bail, Result};
use ndarray::{Array2, Array3};

use super::core::Network;
use crate::math::transforms::renormalize_s;

impl Network {
    /// Cascade with another network (self ** other)
    ///
    /// Connects port 2 of a 2-port `self` to port 1 of `other`. Cascading a
    /// 2-port with a 1-port yields the terminated 1-port.
    pub fn cascade(&self, other: &Network) -> Result<Network> {
        if self.nports() != 2 {
            bail!("cascade needs a 2-port on the left, got {} ports", self.nports());
        }
        self.connect(1, other, 0)
    }

    /// Cascade a chain of networks left to right.
    pub fn cascade_list(networks: &[Network]) -> Result<Network> {
        let Some((first, rest)) = networks.split_first() else {
            bail!("cannot cascade an empty list of networks");
        };
        rest.iter()
            .try_fold(first.clone(), |acc, next| acc.cascade(next))
    }

    /// Flip the ports of a 2-port network (swap port 1 and port 2)
    pub fn flipped(&self) -> Result<Network> {
        if self.nports() != 2 {
            bail!("flipped needs a 2-port, got {} ports", self.nports());
        }
        self.renumbered(&[0, 1], &[1, 0])
    }

    /// Renumber ports according to a mapping
    ///
    /// `from_ports` and `to_ports` specify the port renumbering.
    /// For example, renumbered(&[0,1], &[1,0]) swaps ports 0 and 1.
    pub fn renumbered(&self, from_ports: &[usize], to_ports: &[usize]) -> Result<Network> {
        let nports = self.nports();
        if from_ports.len() != to_ports.len() || from_ports.len() != nports {
            bail!("port mapping must list all {} ports", nports);
        }

        let mut mapping = vec![usize::MAX; nports];
        let mut seen = vec![false; nports];
        for (&from, &to) in from_ports.iter().zip(to_ports) {
            if from >= nports || to >= nports {
                bail!("port index out of range");
            }
            if std::mem::replace(&mut seen[from], true) {
                bail!("port {} appears twice in the source mapping", from);
            }
            mapping[to] = from;
        }
        if mapping.contains(&usize::MAX) {
            bail!("port mapping is not a permutation");
        }

        let s_new = Array3::from_shape_fn((self.nfreq(), nports, nports), |(f, i, j)| {
            self.s[[f, mapping[i], mapping[j]]]
        });
        let z0_new = Array2::from_shape_fn((self.nfreq(), nports), |(f, i)| self.z0[[f, mapping[i]]]);

        let mut ntwk = Network::new(self.frequency.clone(), s_new, z0_new)?;
        ntwk.name = self.name.clone();
        Ok(ntwk)
    }

    /// Re-reference all ports to `z0_new` [nfreq, nports]
    pub fn renormalized(&self, z0_new: Array2<num_complex::Complex64>) -> Result<Network> {
        let s_new = renormalize_s(&self.s, &self.z0, &z0_new)?;
        let mut ntwk = Network::new(self.frequency.clone(), s_new, z0_new)?;
        ntwk.name = self.name.clone();
        Ok(ntwk)
    }
}
