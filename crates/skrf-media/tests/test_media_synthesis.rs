//! Network Synthesis Tests
//!
//! Lines, terminations, lumped elements and junctions built from a medium.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use ndarray::Array1;
use num_complex::Complex64;
use skrf_media::frequency::{Frequency, FrequencyUnit, SweepType};
use skrf_media::math::db_2_mag;
use skrf_media::media::{ConstantRlgc, Debye, DistributedCircuit, Freespace, Media, Termination};
use skrf_media::network::Network;
use skrf_media::units::LengthUnit;
use skrf_media::MediaError;

/// Lossless 50 Ω line
fn fifty_ohm(freq: Frequency) -> DistributedCircuit<ConstantRlgc> {
    DistributedCircuit::new(freq, ConstantRlgc::lossless(250e-9, 100e-12)).unwrap()
}

fn band() -> Frequency {
    Frequency::new(1.0, 3.0, 3, FrequencyUnit::GHz, SweepType::Linear)
}

fn assert_s_close(a: &Network, b: &Network, tol: f64) {
    assert_eq!(a.s.dim(), b.s.dim());
    for (x, y) in a.s.iter().zip(b.s.iter()) {
        assert_relative_eq!((x - y).norm(), 0.0, epsilon = tol);
    }
}

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn test_thru_is_identity_transmission() {
    let water = DistributedCircuit::new(band(), Debye::water()).unwrap();
    let thru = water.thru().unwrap();
    for f in 0..3 {
        assert_relative_eq!(thru.s[[f, 0, 0]].norm(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(thru.s[[f, 1, 0]].re, 1.0, epsilon = 1e-15);
        assert_relative_eq!(thru.s[[f, 0, 1]].im, 0.0, epsilon = 1e-15);
    }
    // Ports referenced to the medium's own Z0
    assert_eq!(thru.z0[[1, 0]], water.z0()[1]);
    assert_eq!(thru.name.as_deref(), Some("line"));
}

#[test]
fn test_line_lengths_add_under_cascade() {
    let water = DistributedCircuit::new(band(), Debye::water()).unwrap();
    let a = water.line(1.5, LengthUnit::Cm).unwrap();
    let b = water.line(2.5, LengthUnit::Mil).unwrap();
    let total = water.line(0.015 + 2.5 * 25.4e-6, LengthUnit::M).unwrap();
    assert_s_close(&a.cascade(&b).unwrap(), &total, 1e-12);
}

#[test]
fn test_lossy_line_transmission() {
    let water = DistributedCircuit::new(band(), Debye::water()).unwrap();
    let d = 2e-3;
    let line = water.line(d, LengthUnit::M).unwrap();
    for f in 0..3 {
        let expected = (-water.gamma()[f] * d).exp();
        assert_relative_eq!((line.s[[f, 1, 0]] - expected).norm(), 0.0, epsilon = 1e-14);
        assert!(line.s[[f, 1, 0]].norm() < 1.0);
    }
}

#[test]
fn test_half_wave_line_in_degrees() {
    // 180° at the centre point: β·ℓ = π, so S21 = −1 on a lossless line
    let line_medium = fifty_ohm(band());
    let d = line_medium.to_meters(180.0, LengthUnit::Deg).unwrap();
    let center = band().center_index();
    assert_relative_eq!(line_medium.beta()[center] * d, PI, max_relative = 1e-12);

    let line = line_medium.line(180.0, LengthUnit::Deg).unwrap();
    assert_relative_eq!(line.s[[center, 1, 0]].re, -1.0, epsilon = 1e-12);
    assert_relative_eq!(line.s[[center, 1, 0]].im, 0.0, epsilon = 1e-12);

    let rad = line_medium.to_meters(PI, LengthUnit::Rad).unwrap();
    assert_relative_eq!(rad, d, max_relative = 1e-12);
}

#[test]
fn test_time_length_uses_phase_velocity() {
    let air = DistributedCircuit::new(band(), Freespace::default()).unwrap();
    let d = air.to_meters(1.0, LengthUnit::Ns).unwrap();
    assert_relative_eq!(d, 0.299_792_458, max_relative = 1e-9);

    // Two 50 ps sections equal one 100 ps section
    let half = air.line(50.0, LengthUnit::Ps).unwrap();
    let full = air.line(100.0, LengthUnit::Ps).unwrap();
    assert_s_close(&half.cascade(&half).unwrap(), &full, 1e-12);
}

#[test]
fn test_electrical_length_needs_nonzero_frequency() {
    // Single DC point: centre index 0 has ω = 0
    let freq = Frequency::from_f(vec![0.0], FrequencyUnit::GHz);
    let medium = DistributedCircuit::new(freq, ConstantRlgc::new(1.0, 2e-7, 1e-3, 8e-11)).unwrap();
    assert!(matches!(
        medium.line(90.0, LengthUnit::Deg),
        Err(MediaError::UnresolvableLength { index: 0, .. })
    ));
    // Physical units still work at DC
    assert!(medium.line(1.0, LengthUnit::Cm).is_ok());
}

#[test]
fn test_guide_wavelength_and_attenuation() {
    let water = DistributedCircuit::new(band(), Debye::water()).unwrap();
    let beta = water.beta();
    let alpha = water.alpha();
    for (f, lambda) in water.guide_wavelength().iter().enumerate() {
        assert_relative_eq!(lambda * beta[f], 2.0 * PI, max_relative = 1e-12);
    }
    for (f, db) in water.attenuation_db_per_m().iter().enumerate() {
        assert!(alpha[f] > 0.0);
        assert_relative_eq!(*db, 8.685_889_638 * alpha[f], max_relative = 1e-9);
    }

    // 1/sqrt(LC) = 2e8 m/s, so 20 cm at 1 GHz
    let medium = fifty_ohm(band());
    assert_relative_eq!(medium.guide_wavelength()[0], 0.2, max_relative = 1e-12);
    assert_relative_eq!(medium.attenuation_db_per_m()[0], 0.0, epsilon = 1e-12);
}

#[test]
fn test_unknown_unit_message() {
    let err = "furlong".parse::<LengthUnit>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown length unit 'furlong', expected one of: deg, rad, m, cm, um, in, mil, s, us, ns, ps"
    );
}

// ============================================================================
// Terminations
// ============================================================================

#[test]
fn test_ideal_terminations() {
    let medium = fifty_ohm(band());
    let short = medium.short(1).unwrap();
    let open = medium.open(2).unwrap();
    let matched = medium.matched(1).unwrap();

    assert_relative_eq!(short.s[[0, 0, 0]].re, -1.0);
    assert_relative_eq!(open.s[[2, 1, 1]].re, 1.0);
    assert_eq!(open.s[[2, 0, 1]], c(0.0));
    assert_eq!(matched.s[[1, 0, 0]], c(0.0));
}

#[test]
fn test_load_impedance() {
    let medium = fifty_ohm(band());
    let load = medium.load_impedance(c(150.0), 1).unwrap();
    assert_relative_eq!(load.s[[0, 0, 0]].re, 0.5, epsilon = 1e-12);

    let open = medium.termination(Termination::Impedance(c(f64::INFINITY)), 1).unwrap();
    assert_relative_eq!(open.s[[0, 0, 0]].re, 1.0);
}

#[test]
fn test_quarter_wave_short_looks_open() {
    let medium = fifty_ohm(band());
    let center = band().center_index();
    let stub = medium.delay_short(90.0, LengthUnit::Deg).unwrap();
    assert_eq!(stub.nports(), 1);
    assert_relative_eq!(stub.s[[center, 0, 0]].re, 1.0, epsilon = 1e-12);
    assert_relative_eq!(stub.s[[center, 0, 0]].im, 0.0, epsilon = 1e-12);
}

#[test]
fn test_delay_load_matches_closed_form() {
    let water = DistributedCircuit::new(band(), Debye::water()).unwrap();
    let gamma_l = Complex64::new(0.3, -0.2);
    let d = 1e-3;
    let ntwk = water.delay_load(gamma_l, d, LengthUnit::M).unwrap();
    for f in 0..3 {
        let expected = gamma_l * (-water.gamma()[f] * 2.0 * d).exp();
        assert_relative_eq!((ntwk.s[[f, 0, 0]] - expected).norm(), 0.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Lumped elements
// ============================================================================

#[test]
fn test_series_resistor() {
    let medium = fifty_ohm(band());
    let r = medium.resistor(50.0).unwrap();
    assert_relative_eq!(r.s[[0, 0, 0]].re, 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(r.s[[0, 1, 0]].re, 2.0 / 3.0, epsilon = 1e-12);
    assert!(r.is_reciprocal(None));
}

#[test]
fn test_resistor_z_parameters() {
    let medium = fifty_ohm(band());

    // Series 30 Ω into a short reads back as a 30 Ω one-port
    let grounded = medium
        .resistor(30.0)
        .unwrap()
        .cascade(&medium.short(1).unwrap())
        .unwrap();
    let z = grounded.z().unwrap();
    for f in 0..3 {
        assert_relative_eq!((z[[f, 0, 0]] - c(30.0)).norm(), 0.0, epsilon = 1e-9);
    }

    // Shunt R has Z = [[R, R], [R, R]]
    let z = medium.shunt_resistor(80.0).unwrap().z().unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_relative_eq!((z[[1, i, j]] - c(80.0)).norm(), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_shunt_resistor() {
    let medium = fifty_ohm(band());
    let r = medium.shunt_resistor(50.0).unwrap();
    assert_relative_eq!(r.s[[0, 0, 0]].re, -1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(r.s[[0, 1, 0]].re, 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_reactive_elements_are_lossless() {
    let medium = fifty_ohm(band());
    for ntwk in [
        medium.inductor(2e-9).unwrap(),
        medium.capacitor(1e-12).unwrap(),
        medium.shunt_inductor(2e-9).unwrap(),
        medium.shunt_capacitor(1e-12).unwrap(),
    ] {
        assert!(ntwk.is_lossless(Some(1e-12)), "{}", ntwk);
    }
}

#[test]
fn test_series_capacitor_blocks_dc() {
    let freq = Frequency::from_f(vec![0.0, 1.0], FrequencyUnit::GHz);
    let medium = DistributedCircuit::new(freq, ConstantRlgc::new(0.0, 250e-9, 1e-6, 100e-12)).unwrap();
    let cap = medium.capacitor(1e-12).unwrap();
    assert_relative_eq!(cap.s[[0, 0, 0]].re, 1.0);
    assert_eq!(cap.s[[0, 1, 0]], c(0.0));
}

#[test]
fn test_series_element_length_mismatch() {
    let medium = fifty_ohm(band());
    let z = Array1::from_elem(2, c(10.0));
    assert!(matches!(
        medium.series_impedance_element(&z),
        Err(MediaError::LengthMismatch { expected: 3, actual: 2 })
    ));
}

// ============================================================================
// Junctions
// ============================================================================

#[test]
fn test_impedance_mismatch_conserves_power() {
    let medium = fifty_ohm(band());
    let step = medium.impedance_mismatch(c(50.0), c(75.0)).unwrap();
    assert_relative_eq!(step.s[[0, 0, 0]].re, 0.2, epsilon = 1e-12);
    assert_relative_eq!(step.s[[0, 1, 1]].re, -0.2, epsilon = 1e-12);
    assert!(step.is_lossless(Some(1e-12)));
    assert_eq!(step.z0[[0, 1]], c(75.0));
}

#[test]
fn test_splitter() {
    let medium = fifty_ohm(band());
    let tee = medium.tee().unwrap();
    assert_eq!(tee.nports(), 3);
    assert_relative_eq!(tee.s[[0, 0, 0]].re, -1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(tee.s[[0, 2, 1]].re, 2.0 / 3.0, epsilon = 1e-12);
    assert!(tee.is_lossless(Some(1e-12)));

    assert!(matches!(medium.splitter(0), Err(MediaError::InvalidParameter { .. })));
}

#[test]
fn test_shunt_stubs() {
    let medium = fifty_ohm(band());
    // Zero-length open stub leaves the line untouched
    let open = medium.shunt_delay_open(0.0, LengthUnit::M).unwrap();
    assert_s_close(&open, &medium.thru().unwrap(), 1e-12);

    // Zero-length short stub shorts the line
    let short = medium.shunt_delay_short(0.0, LengthUnit::M).unwrap();
    assert_relative_eq!(short.s[[0, 0, 0]].re, -1.0, epsilon = 1e-12);
    assert_relative_eq!(short.s[[0, 1, 0]].norm(), 0.0, epsilon = 1e-12);

    // Quarter-wave shorted stub is invisible at the centre
    let center = band().center_index();
    let quarter = medium.shunt_delay_short(90.0, LengthUnit::Deg).unwrap();
    assert_relative_eq!(quarter.s[[center, 1, 0]].re, 1.0, epsilon = 1e-9);
}

#[test]
fn test_shunt_delay_load() {
    let medium = fifty_ohm(band());

    // Zero-length matched stub is a 50 Ω shunt on a 50 Ω line
    let matched = medium.shunt_delay_load(c(0.0), 0.0, LengthUnit::M).unwrap();
    for f in 0..3 {
        assert_relative_eq!(matched.s[[f, 0, 0]].re, -1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(matched.s[[f, 1, 0]].re, 2.0 / 3.0, epsilon = 1e-12);
    }

    // Total reflection at the end of the stub is an open stub
    let open = medium.shunt_delay_load(c(1.0), 45.0, LengthUnit::Deg).unwrap();
    let reference = medium.shunt_delay_open(45.0, LengthUnit::Deg).unwrap();
    assert_s_close(&open, &reference, 1e-12);
}

#[test]
fn test_attenuator() {
    let medium = fifty_ohm(band());
    let att = medium.attenuator(-6.0, 0.0, LengthUnit::M).unwrap();
    assert_relative_eq!(att.s[[0, 1, 0]].re, db_2_mag(-6.0), epsilon = 1e-12);
    assert_eq!(att.s[[0, 0, 0]], c(0.0));

    let embedded = medium.attenuator(-6.0, 90.0, LengthUnit::Deg).unwrap();
    let center = band().center_index();
    assert_relative_eq!(embedded.s[[center, 1, 0]].norm(), db_2_mag(-6.0), epsilon = 1e-12);
    assert_relative_eq!(embedded.s[[center, 1, 0]].im, -db_2_mag(-6.0), epsilon = 1e-12);
}

// ============================================================================
// Port impedance override
// ============================================================================

#[test]
fn test_port_impedance_renormalizes() {
    // 50 Ω match seen from 25 Ω ports: Γ = 1/3
    let medium = fifty_ohm(band()).with_port_impedance(c(25.0));
    let load = medium.matched(1).unwrap();
    assert_relative_eq!(load.s[[0, 0, 0]].re, 1.0 / 3.0, epsilon = 1e-12);
    assert_eq!(load.z0[[0, 0]], c(25.0));

    // Opens and shorts are independent of the reference
    let open = medium.open(1).unwrap();
    assert_relative_eq!(open.s[[1, 0, 0]].re, 1.0, epsilon = 1e-12);

    // Networks on the overridden reference still connect
    let stub = medium.delay_short(90.0, LengthUnit::Deg).unwrap();
    let center = band().center_index();
    assert_relative_eq!(stub.s[[center, 0, 0]].re, 1.0, epsilon = 1e-12);
}
