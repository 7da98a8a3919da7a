// Host-side tests for the background scene state, geometry and colour math.

use folio_core::color::{hex_to_rgb, hsl_to_rgb};
use folio_core::constants::*;
use folio_core::geometry::Wireframe;
use folio_core::{EffectsConfig, SceneState, Viewport};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn scene(viewport: Viewport) -> SceneState {
    let mut rng = StdRng::seed_from_u64(42);
    SceneState::new(&EffectsConfig::default().scene, viewport, &mut rng)
}

#[test]
fn camera_matches_defaults() {
    let s = scene(Viewport::new(1600.0, 900.0, 1.0));
    assert_eq!(s.camera.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!(approx(s.camera.fovy_radians, 75f32.to_radians()));
    assert!(approx(s.camera.aspect, 1600.0 / 900.0));
    assert_eq!(s.camera.znear, 0.1);
    assert_eq!(s.camera.zfar, 1000.0);
}

#[test]
fn point_cloud_has_matching_positions_and_colors() {
    let s = scene(Viewport::new(800.0, 600.0, 1.0));
    assert_eq!(s.points.len(), 1500);
    assert_eq!(s.points.positions().len(), s.points.colors().len());
    assert_eq!(s.points.vertex_data().len(), 1500);
    let half = POINT_CLOUD_EXTENT / 2.0;
    for p in s.points.positions() {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }
    for c in s.points.colors() {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn advance_adds_spin_per_frame() {
    let mut s = scene(Viewport::new(800.0, 600.0, 1.0));
    for _ in 0..10 {
        s.advance();
    }
    assert!(approx(s.points.rotation.x, 10.0 * POINT_SPIN_X));
    assert!(approx(s.points.rotation.y, 10.0 * POINT_SPIN_Y));
    assert!(approx(s.solid.rotation.x, 10.0 * SOLID_SPIN_X));
    assert!(approx(s.solid.rotation.y, 10.0 * SOLID_SPIN_Y));
    assert_eq!(s.points.rotation.z, 0.0);
    assert_ne!(s.points_model(), glam::Mat4::IDENTITY);
}

#[test]
fn resize_updates_aspect_and_output_size() {
    let mut s = scene(Viewport::new(800.0, 600.0, 1.0));
    s.resize(Viewport::new(1920.0, 1080.0, 3.0));
    assert!(approx(s.camera.aspect, 1920.0 / 1080.0));
    assert_eq!(s.output_size(), (1920.0, 1080.0));
    assert_eq!(s.pixel_ratio(), MAX_PIXEL_RATIO);
}

#[test]
fn viewport_backing_size_clamps_ratio_and_floor() {
    assert_eq!(Viewport::new(100.0, 50.0, 1.5).backing_size(), (150, 75));
    assert_eq!(Viewport::new(100.0, 50.0, 4.0).backing_size(), (200, 100));
    assert_eq!(Viewport::new(100.0, 50.0, 0.5).backing_size(), (100, 50));
    assert_eq!(Viewport::new(0.0, 0.0, 1.0).backing_size(), (1, 1));
    assert_eq!(Viewport::new(100.0, 0.0, 1.0).aspect(), 1.0);
}

#[test]
fn icosahedron_has_12_vertices_and_30_edges() {
    let ico = Wireframe::icosahedron(SOLID_RADIUS);
    assert_eq!(ico.vertices.len(), 12);
    assert_eq!(ico.edges.len(), 30);
    for v in &ico.vertices {
        assert!(approx(v.length(), SOLID_RADIUS));
    }
    // Every vertex of an icosahedron has degree five.
    let mut degree = [0; 12];
    for [a, b] in &ico.edges {
        degree[*a as usize] += 1;
        degree[*b as usize] += 1;
    }
    assert!(degree.iter().all(|d| *d == 5));
    assert_eq!(ico.line_vertices().len(), 60);
}

#[test]
fn solid_sits_at_configured_position() {
    let s = scene(Viewport::new(800.0, 600.0, 1.0));
    assert_eq!(s.solid.position, Vec3::from_array(SOLID_POSITION));
    let m = s.solid_model();
    assert_eq!(m.w_axis.truncate(), Vec3::from_array(SOLID_POSITION));
}

#[test]
fn fog_thins_with_distance() {
    let s = scene(Viewport::new(800.0, 600.0, 1.0));
    assert_eq!(s.fog.factor(0.0), 1.0);
    let near = s.fog.factor(50.0);
    let far = s.fog.factor(500.0);
    assert!(near > far && far > 0.0);
}

#[test]
fn ambient_light_sums_ambient_sources_only() {
    let s = scene(Viewport::new(800.0, 600.0, 1.0));
    let expected = hex_to_rgb(AMBIENT_COLOR).map(|c| c * AMBIENT_INTENSITY);
    let got = s.ambient_rgb();
    for i in 0..3 {
        assert!(approx(got[i], expected[i]));
    }
}

#[test]
fn hsl_primaries_and_wrap() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!(approx(red[0], 1.0) && approx(red[1], 0.0) && approx(red[2], 0.0));
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!(approx(green[1], 1.0) && approx(green[0], 0.0));
    assert_eq!(hsl_to_rgb(1.25, 1.0, 0.7), hsl_to_rgb(0.25, 1.0, 0.7));
    assert_eq!(hsl_to_rgb(0.6, 0.0, 0.3), [0.3, 0.3, 0.3]);
}

#[test]
fn hex_splits_channels() {
    assert_eq!(hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
    let c = hex_to_rgb(SOLID_COLOR);
    assert_eq!(c[0], 0.0);
    assert!(approx(c[1], 243.0 / 255.0));
    assert_eq!(c[2], 1.0);
}
