//! End-to-end tests for the height, normal, and strip pipeline.

use glam::Vec3;

use wavecrest::error::ConfigError;
use wavecrest::params::{SurfaceParams, WaveBank, WaveParams};
use wavecrest::profile::WaveProfile;
use wavecrest::surface::SurfaceSystem;

fn small_params(rows: usize, cols: usize) -> SurfaceParams {
    SurfaceParams {
        strip_count: rows,
        strip_length: cols,
        origin: [0.0, 0.0],
        spacing: [0.1, 0.1],
        height_scale: 1.0,
        base_elevation: 0.0,
        ..SurfaceParams::default()
    }
}

fn single_wave(wavelength: f32, amplitude: f32, direction: f32, speed: f32) -> WaveBank {
    WaveBank {
        waves: vec![WaveParams {
            wavelength,
            amplitude,
            direction,
            speed,
            origin: [0.0, 0.0],
            profile: WaveProfile::B,
        }],
    }
}

#[test]
fn test_flat_bank_flat_surface() {
    let mut params = small_params(4, 3);
    params.base_elevation = 0.5;
    let bank = single_wave(1.0, 0.0, 0.9, 0.06);

    let mut system = SurfaceSystem::new(params, bank).unwrap();
    system.advance();
    system.advance();

    // A silent wave leaves the surface at the base elevation with
    // every normal straight up, all the way into the packed buffers
    assert!(system.grid.positions.iter().all(|p| p.z == 0.5));
    assert!(system
        .grid
        .normals
        .iter()
        .all(|n| (*n - Vec3::Z).length() < 1e-6));

    for slot in system.strips.normals.chunks(3) {
        assert!((slot[0]).abs() < 1e-6);
        assert!((slot[1]).abs() < 1e-6);
        assert!((slot[2] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_two_by_two_packed_frame() {
    // One wave along x at time zero: row 0 sits on the crest, row 1 at
    // curve position 40 of profile B, between control points (27.7, 1.4)
    // and (52.9, 5.2)
    let params = small_params(2, 2);
    let bank = single_wave(1.0, 0.1, 0.0, 0.0);
    let system = SurfaceSystem::new(params, bank).unwrap();

    let crest = 0.1;
    let drop = (1.4 + (5.2 - 1.4) * (40.0 - 27.7) / (52.9 - 27.7)) * (0.1 / 50.0);
    let lower = crest - drop;

    // Single band weaves far row 1 and near row 0, column by column
    let expected = [
        [0.1, 0.0, lower],
        [0.0, 0.0, crest],
        [0.1, 0.1, lower],
        [0.0, 0.1, crest],
    ];
    assert_eq!(system.strips.positions.len(), 12);
    for (slot, want) in system.strips.positions.chunks(3).zip(expected) {
        for (got, want) in slot.iter().zip(want) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    // The surface tilts only along x, so all four vertices share a normal
    let expected_normal = Vec3::new(drop, 0.0, 0.1).normalize();
    for slot in system.strips.normals.chunks(3) {
        let normal = Vec3::new(slot[0], slot[1], slot[2]);
        assert!((normal - expected_normal).length() < 1e-5);
    }
}

#[test]
fn test_default_configuration_bounds() {
    let system = SurfaceSystem::new(SurfaceParams::default(), WaveBank::default()).unwrap();

    assert_eq!(system.strips.strip_count(), 79);
    assert_eq!(system.strips.strip_len(), 100);
    assert_eq!(system.strips.positions.len(), 79 * 100 * 3);

    // Every wave contributes between zero and its amplitude, scaled by
    // the global height multiplier
    let amplitude_sum: f32 = 0.12 + 0.1 + 0.01 + 0.008 + 0.005 + 0.003;
    let ceiling = 1.6 * amplitude_sum;
    for position in &system.grid.positions {
        assert!(position.z >= -1e-6);
        assert!(position.z <= ceiling + 1e-6);
    }

    for normal in &system.grid.normals {
        assert!((normal.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_lattice_fixed_heights_move() {
    let mut system = SurfaceSystem::new(SurfaceParams::default(), WaveBank::default()).unwrap();

    let xy_before: Vec<(f32, f32)> = system.grid.positions.iter().map(|p| (p.x, p.y)).collect();
    let z_before: Vec<f32> = system.grid.positions.iter().map(|p| p.z).collect();

    for _ in 0..3 {
        system.advance();
    }

    let xy_after: Vec<(f32, f32)> = system.grid.positions.iter().map(|p| (p.x, p.y)).collect();
    let z_after: Vec<f32> = system.grid.positions.iter().map(|p| p.z).collect();

    assert_eq!(xy_before, xy_after);
    assert_ne!(z_before, z_after);
}

#[test]
fn test_full_period_returns_to_start() {
    // With wavelength 1 and speed 1, one second of travel is one full
    // period; two half-second ticks land back on the starting frame
    let mut params = small_params(3, 3);
    params.time_step = 0.5;
    let bank = single_wave(1.0, 0.1, 0.0, 1.0);

    let mut system = SurfaceSystem::new(params, bank).unwrap();
    let z_start: Vec<f32> = system.grid.positions.iter().map(|p| p.z).collect();

    system.advance();
    system.advance();

    for (after, before) in system.grid.positions.iter().zip(&z_start) {
        assert!((after.z - before).abs() < 1e-6);
    }
}

#[test]
fn test_strips_mirror_grid_every_tick() {
    let mut system = SurfaceSystem::new(small_params(3, 2), WaveBank::default()).unwrap();
    system.advance();

    // Band 0 slots map to lattice vertices (1,0) (0,0) (1,1) (0,1)
    let lattice = [(1, 0), (0, 0), (1, 1), (0, 1)];
    for (slot, (row, col)) in system.strips.positions.chunks(3).take(4).zip(lattice) {
        let vertex = system.grid.position(row, col);
        assert_eq!(slot, &[vertex.x, vertex.y, vertex.z]);
    }
}

#[test]
fn test_configuration_errors_surface_through_constructor() {
    let too_small = SurfaceParams {
        strip_count: 1,
        ..SurfaceParams::default()
    };
    assert!(matches!(
        SurfaceSystem::new(too_small, WaveBank::default()),
        Err(ConfigError::GridTooSmall { rows: 1, cols: 50 })
    ));

    let bad_spacing = SurfaceParams {
        spacing: [0.1, -0.1],
        ..SurfaceParams::default()
    };
    match SurfaceSystem::new(bad_spacing, WaveBank::default()) {
        Err(err) => assert!(err.to_string().contains("spacing must be positive")),
        Ok(_) => panic!("negative spacing accepted"),
    }

    let mut bank = WaveBank::default();
    bank.waves[2].wavelength = -1.0;
    assert!(matches!(
        SurfaceSystem::new(SurfaceParams::default(), bank),
        Err(ConfigError::NonPositiveWavelength { index: 2, .. })
    ));
}
