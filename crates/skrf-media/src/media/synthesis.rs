//! Network synthesis from a medium
//!
//! [`Media`] is the common interface of every transmission medium: it
//! exposes γ and Z0 over a frequency axis and derives lines, terminations,
//! lumped elements and junctions from them. All networks are built with
//! every port referenced to the medium's characteristic impedance and then
//! re-referenced to [`Media::port_z0`] when one is set.

use std::f64::consts::PI;

use ndarray::{Array1, Array2, Array3};
use num_complex::Complex64;

use crate::error::{MediaError, MediaResult};
use crate::frequency::Frequency;
use crate::math::{db_2_mag, np_2_db};
use crate::network::Network;
use crate::units::{self, LengthUnit, UnitKind};

/// Load placed at the end of a port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Γ = −1
    Short,
    /// Γ = +1
    Open,
    /// Γ = 0
    Matched,
    /// Fixed reflection coefficient
    Reflection(Complex64),
    /// Load impedance (Ω), converted against Z0 at each frequency
    Impedance(Complex64),
}

impl Termination {
    fn reflection(&self, z0: Complex64) -> Complex64 {
        match *self {
            Termination::Short => Complex64::new(-1.0, 0.0),
            Termination::Open => Complex64::new(1.0, 0.0),
            Termination::Matched => Complex64::new(0.0, 0.0),
            Termination::Reflection(gamma) => gamma,
            Termination::Impedance(zl) if zl.is_infinite() => Complex64::new(1.0, 0.0),
            Termination::Impedance(zl) => (zl - z0) / (zl + z0),
        }
    }
}

/// (S11, S21) of a series element with impedance `z` normalized to Z0.
fn series_element(z: Complex64) -> (Complex64, Complex64) {
    if z.is_finite() {
        let denom = z + Complex64::new(2.0, 0.0);
        (z / denom, Complex64::new(2.0, 0.0) / denom)
    } else {
        (Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0))
    }
}

/// A transmission medium over a frequency axis.
///
/// Implementors supply the four accessors; everything else is derived.
pub trait Media {
    /// Model name, e.g. `Debye Media`
    fn name(&self) -> &'static str;

    fn frequency(&self) -> &Frequency;

    /// Propagation constant γ (1/m)
    fn gamma(&self) -> &Array1<Complex64>;

    /// Characteristic impedance Z0 (Ω)
    fn z0(&self) -> &Array1<Complex64>;

    /// Port reference impedance, when it differs from Z0.
    fn port_z0(&self) -> Option<&Array1<Complex64>> {
        None
    }

    /// Attenuation constant α (Np/m)
    fn alpha(&self) -> Array1<f64> {
        self.gamma().mapv(|g| g.re)
    }

    /// Phase constant β (rad/m)
    fn beta(&self) -> Array1<f64> {
        self.gamma().mapv(|g| g.im)
    }

    /// Attenuation in dB/m
    fn attenuation_db_per_m(&self) -> Array1<f64> {
        self.alpha().mapv(np_2_db)
    }

    /// Phase velocity ω/β (m/s); infinite where β = 0.
    fn phase_velocity(&self) -> Array1<f64> {
        let w = self.frequency().w();
        let beta = self.beta();
        Array1::from_iter(w.iter().zip(beta.iter()).map(|(&w, &b)| {
            if b == 0.0 {
                f64::INFINITY
            } else {
                w / b
            }
        }))
    }

    /// Guided wavelength 2π/β (m); infinite where β = 0.
    fn guide_wavelength(&self) -> Array1<f64> {
        self.beta().mapv(|b| if b == 0.0 { f64::INFINITY } else { 2.0 * PI / b })
    }

    /// Convert a length to meters, resolving electrical and time units at
    /// the band centre.
    fn to_meters(&self, d: f64, unit: LengthUnit) -> MediaResult<f64> {
        self.to_meters_at(d, unit, self.frequency().center_index())
    }

    /// Convert a length to meters, resolving electrical and time units at
    /// frequency point `index`.
    ///
    /// Electrical lengths use `ℓ = θ/β`; time lengths use the phase velocity
    /// `ω/β`. Both fail when the point has zero frequency or zero phase
    /// constant.
    fn to_meters_at(&self, d: f64, unit: LengthUnit, index: usize) -> MediaResult<f64> {
        if !d.is_finite() {
            return Err(MediaError::InvalidLength(d));
        }
        if unit.kind() == UnitKind::Physical {
            return units::to_meters(d, unit, 0.0);
        }

        let unresolvable = |reason| MediaError::UnresolvableLength {
            value: d,
            unit: unit.as_str(),
            index,
            reason,
        };
        let f = *self
            .frequency()
            .f()
            .get(index)
            .ok_or_else(|| unresolvable("index outside the frequency axis"))?;
        if f == 0.0 {
            return Err(unresolvable("zero frequency"));
        }
        let beta = self.gamma()[index].im;
        if beta == 0.0 || !beta.is_finite() {
            return Err(unresolvable("zero phase constant"));
        }

        match unit.kind() {
            UnitKind::Electrical => Ok(d * unit.scale() / beta),
            _ => units::to_meters(d, unit, 2.0 * PI * f / beta),
        }
    }

    /// `γ·ℓ` at every frequency for a length in meters.
    fn electrical_length(&self, d_m: f64) -> Array1<Complex64> {
        self.gamma().mapv(|g| g * d_m)
    }

    /// Wrap an S-matrix referenced to Z0 on every port into a [`Network`],
    /// re-referenced to [`Media::port_z0`] when set.
    fn network_from_s(&self, s: Array3<Complex64>, name: &str) -> MediaResult<Network> {
        let (nfreq, nports, _) = s.dim();
        let z0 = self.z0();
        let reference = Array2::from_shape_fn((nfreq, nports), |(f, _)| z0[f]);
        let ntwk = Network::new(self.frequency().clone(), s, reference)?.named(name);

        match self.port_z0() {
            None => Ok(ntwk),
            Some(port) => {
                let target = Array2::from_shape_fn((nfreq, nports), |(f, _)| port[f]);
                Ok(ntwk.renormalized(target)?)
            }
        }
    }

    /// Matched line section of length `d`.
    fn line(&self, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        let d_m = self.to_meters(d, unit)?;
        tracing::debug!(medium = self.name(), length_m = d_m, "line section");
        let theta = self.electrical_length(d_m);
        let n = theta.len();
        let mut s = Array3::<Complex64>::zeros((n, 2, 2));
        for (f, t) in theta.iter().enumerate() {
            let through = (-t).exp();
            s[[f, 0, 1]] = through;
            s[[f, 1, 0]] = through;
        }
        self.network_from_s(s, "line")
    }

    /// Zero-length line.
    fn thru(&self) -> MediaResult<Network> {
        self.line(0.0, LengthUnit::M)
    }

    /// Uncoupled `nports`-port with the same load on every port.
    fn termination(&self, load: Termination, nports: usize) -> MediaResult<Network> {
        let z0 = self.z0();
        let mut s = Array3::<Complex64>::zeros((z0.len(), nports, nports));
        for (f, &z) in z0.iter().enumerate() {
            let gamma = load.reflection(z);
            if !gamma.is_finite() {
                return Err(MediaError::NonFinite {
                    quantity: "reflection coefficient",
                    index: f,
                });
            }
            for p in 0..nports {
                s[[f, p, p]] = gamma;
            }
        }
        let name = match load {
            Termination::Short => "short",
            Termination::Open => "open",
            Termination::Matched => "match",
            Termination::Reflection(_) | Termination::Impedance(_) => "load",
        };
        self.network_from_s(s, name)
    }

    fn short(&self, nports: usize) -> MediaResult<Network> {
        self.termination(Termination::Short, nports)
    }

    fn open(&self, nports: usize) -> MediaResult<Network> {
        self.termination(Termination::Open, nports)
    }

    /// Perfect load (Γ = 0)
    fn matched(&self, nports: usize) -> MediaResult<Network> {
        self.termination(Termination::Matched, nports)
    }

    /// Load with reflection coefficient `gamma`
    fn load(&self, gamma: Complex64, nports: usize) -> MediaResult<Network> {
        self.termination(Termination::Reflection(gamma), nports)
    }

    /// Load with impedance `zl`
    fn load_impedance(&self, zl: Complex64, nports: usize) -> MediaResult<Network> {
        self.termination(Termination::Impedance(zl), nports)
    }

    /// One-port: a line of length `d` ending in `load`.
    fn delay(&self, load: Termination, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        let line = self.line(d, unit)?;
        let end = self.termination(load, 1)?;
        Ok(line.cascade(&end)?.named("delay"))
    }

    fn delay_short(&self, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        self.delay(Termination::Short, d, unit)
    }

    fn delay_open(&self, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        self.delay(Termination::Open, d, unit)
    }

    fn delay_load(&self, gamma: Complex64, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        self.delay(Termination::Reflection(gamma), d, unit)
    }

    /// Two-port with impedance `z[f]` in series between the ports.
    fn series_impedance_element(&self, z: &Array1<Complex64>) -> MediaResult<Network> {
        let z0 = self.z0();
        if z.len() != z0.len() {
            return Err(MediaError::LengthMismatch {
                expected: z0.len(),
                actual: z.len(),
            });
        }
        let mut s = Array3::<Complex64>::zeros((z0.len(), 2, 2));
        for (f, (&z, &z0)) in z.iter().zip(z0).enumerate() {
            let (s11, s21) = series_element(z / z0);
            s[[f, 0, 0]] = s11;
            s[[f, 1, 1]] = s11;
            s[[f, 0, 1]] = s21;
            s[[f, 1, 0]] = s21;
        }
        self.network_from_s(s, "series")
    }

    /// Two-port with impedance `z[f]` shunted across the line.
    fn shunt_impedance_element(&self, z: &Array1<Complex64>) -> MediaResult<Network> {
        let z0 = self.z0();
        if z.len() != z0.len() {
            return Err(MediaError::LengthMismatch {
                expected: z0.len(),
                actual: z.len(),
            });
        }
        let mut s = Array3::<Complex64>::zeros((z0.len(), 2, 2));
        for (f, (&z, &z0)) in z.iter().zip(z0).enumerate() {
            // S11 = −Z0/(2Z + Z0), S21 = 2Z/(2Z + Z0)
            let (s11, s21) = if z.is_finite() {
                let denom = z * 2.0 + z0;
                (-z0 / denom, z * 2.0 / denom)
            } else {
                (Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0))
            };
            s[[f, 0, 0]] = s11;
            s[[f, 1, 1]] = s11;
            s[[f, 0, 1]] = s21;
            s[[f, 1, 0]] = s21;
        }
        self.network_from_s(s, "shunt")
    }

    fn resistor(&self, r: f64) -> MediaResult<Network> {
        let z = Array1::from_elem(self.z0().len(), Complex64::new(r, 0.0));
        Ok(self.series_impedance_element(&z)?.named("resistor"))
    }

    fn inductor(&self, l: f64) -> MediaResult<Network> {
        let z = self.frequency().w().mapv(|w| Complex64::new(0.0, w * l));
        Ok(self.series_impedance_element(&z)?.named("inductor"))
    }

    /// Series capacitor; an open circuit at DC.
    fn capacitor(&self, c: f64) -> MediaResult<Network> {
        let z = self.frequency().w().mapv(|w| capacitive_impedance(w, c));
        Ok(self.series_impedance_element(&z)?.named("capacitor"))
    }

    fn shunt_resistor(&self, r: f64) -> MediaResult<Network> {
        let z = Array1::from_elem(self.z0().len(), Complex64::new(r, 0.0));
        Ok(self.shunt_impedance_element(&z)?.named("shunt resistor"))
    }

    fn shunt_inductor(&self, l: f64) -> MediaResult<Network> {
        let z = self.frequency().w().mapv(|w| Complex64::new(0.0, w * l));
        Ok(self.shunt_impedance_element(&z)?.named("shunt inductor"))
    }

    fn shunt_capacitor(&self, c: f64) -> MediaResult<Network> {
        let z = self.frequency().w().mapv(|w| capacitive_impedance(w, c));
        Ok(self.shunt_impedance_element(&z)?.named("shunt capacitor"))
    }

    /// Junction between two impedances, port 1 referenced to `z1` and port 2
    /// to `z2`.
    fn impedance_mismatch(&self, z1: Complex64, z2: Complex64) -> MediaResult<Network> {
        let n = self.frequency().npoints();
        let gamma = (z2 - z1) / (z2 + z1);
        if !gamma.is_finite() {
            return Err(MediaError::NonFinite {
                quantity: "reflection coefficient",
                index: 0,
            });
        }
        let one = Complex64::new(1.0, 0.0);
        let mut s = Array3::<Complex64>::zeros((n, 2, 2));
        for f in 0..n {
            s[[f, 0, 0]] = gamma;
            s[[f, 1, 1]] = -gamma;
            s[[f, 1, 0]] = (one + gamma) * (z1 / z2).sqrt();
            s[[f, 0, 1]] = (one - gamma) * (z2 / z1).sqrt();
        }
        let mut z0 = Array2::<Complex64>::zeros((n, 2));
        z0.column_mut(0).fill(z1);
        z0.column_mut(1).fill(z2);
        Ok(Network::new(self.frequency().clone(), s, z0)?.named("impedance mismatch"))
    }

    /// Matched attenuator with transmission `s21_db` (negative for loss),
    /// optionally embedded in a line of total length `d`.
    fn attenuator(&self, s21_db: f64, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        let through = Complex64::new(db_2_mag(s21_db), 0.0);
        let n = self.frequency().npoints();
        let mut s = Array3::<Complex64>::zeros((n, 2, 2));
        for f in 0..n {
            s[[f, 0, 1]] = through;
            s[[f, 1, 0]] = through;
        }
        let core = self.network_from_s(s, "attenuator")?;
        if d == 0.0 {
            return Ok(core);
        }
        let half = self.line(d / 2.0, unit)?;
        Ok(Network::cascade_list(&[half.clone(), core, half])?.named("attenuator"))
    }

    /// Ideal lossless `n`-way junction, `S_ij = 2/n − δ_ij`.
    fn splitter(&self, nports: usize) -> MediaResult<Network> {
        if nports == 0 {
            return Err(MediaError::InvalidParameter {
                name: "nports",
                value: 0.0,
                reason: "a splitter needs at least one port",
            });
        }
        let share = 2.0 / nports as f64;
        let s = Array3::from_shape_fn((self.frequency().npoints(), nports, nports), |(_, i, j)| {
            Complex64::new(if i == j { share - 1.0 } else { share }, 0.0)
        });
        self.network_from_s(s, "splitter")
    }

    /// Three-port splitter.
    fn tee(&self) -> MediaResult<Network> {
        self.splitter(3)
    }

    /// Place `ntwk` in shunt by connecting its port 1 to the tee's middle
    /// port.
    fn shunt(&self, ntwk: &Network) -> MediaResult<Network> {
        Ok(self.tee()?.connect(1, ntwk, 0)?)
    }

    fn shunt_delay_open(&self, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        self.shunt(&self.delay_open(d, unit)?)
    }

    fn shunt_delay_short(&self, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        self.shunt(&self.delay_short(d, unit)?)
    }

    fn shunt_delay_load(&self, gamma: Complex64, d: f64, unit: LengthUnit) -> MediaResult<Network> {
        self.shunt(&self.delay_load(gamma, d, unit)?)
    }
}

fn capacitive_impedance(w: f64, c: f64) -> Complex64 {
    if w == 0.0 || c == 0.0 {
        Complex64::new(f64::INFINITY, 0.0)
    } else {
        Complex64::new(0.0, -1.0 / (w * c))
    }
}
