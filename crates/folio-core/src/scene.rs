//! Scene state for the rotating background.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! builds one [`SceneState`] at start-up, calls [`SceneState::advance`] once
//! per display refresh and [`SceneState::resize`] whenever the viewport
//! changes, and reads matrices back out for drawing.

use crate::color::hex_to_rgb;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::geometry::{PointCloud, Wireframe};
use glam::{Mat4, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Layout viewport in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            1.0
        } else {
            (self.width / self.height) as f32
        }
    }

    #[inline]
    pub fn clamped_pixel_ratio(&self) -> f64 {
        self.pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO)
    }

    /// Drawing-buffer size in device pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let pr = self.clamped_pixel_ratio();
        let w = (self.width * pr).round().max(1.0) as u32;
        let h = (self.height * pr).round().max(1.0) as u32;
        (w, h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

impl Fog {
    /// Exponential-squared visibility at `distance`; 1 is fully clear.
    #[inline]
    pub fn factor(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        (-(d * d)).exp().clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Point {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
    },
}

pub struct SceneState {
    pub camera: Camera,
    pub points: PointCloud,
    pub solid: Wireframe,
    pub fog: Fog,
    pub lights: Vec<Light>,
    pub point_size: f32,
    pub point_opacity: f32,
    pub solid_color: [f32; 3],
    pub solid_opacity: f32,
    points_spin: [f32; 2],
    solid_spin: [f32; 2],
    output_size: (f64, f64),
    pixel_ratio: f64,
}

impl SceneState {
    pub fn new<R: Rng + ?Sized>(cfg: &SceneConfig, viewport: Viewport, rng: &mut R) -> Self {
        let points = PointCloud::generate(
            rng,
            cfg.particle_count,
            cfg.extent,
            cfg.saturation,
            cfg.lightness,
        );
        let solid = Wireframe::icosahedron(cfg.solid_radius)
            .with_position(Vec3::from_array(cfg.solid_position));
        log::debug!(
            "[scene] built points={} solid_edges={}",
            points.len(),
            solid.edges.len()
        );
        Self {
            camera: Camera::new(viewport.aspect()),
            points,
            solid,
            fog: Fog {
                color: hex_to_rgb(FOG_COLOR),
                density: cfg.fog_density,
            },
            lights: vec![
                Light::Ambient {
                    color: hex_to_rgb(AMBIENT_COLOR),
                    intensity: AMBIENT_INTENSITY,
                },
                Light::Point {
                    color: hex_to_rgb(POINT_LIGHT_COLOR),
                    intensity: POINT_LIGHT_INTENSITY,
                    position: Vec3::from_array(POINT_LIGHT_POSITION),
                },
            ],
            point_size: cfg.point_size,
            point_opacity: cfg.point_opacity,
            solid_color: hex_to_rgb(SOLID_COLOR),
            solid_opacity: cfg.solid_opacity,
            points_spin: cfg.points_spin,
            solid_spin: cfg.solid_spin,
            output_size: (viewport.width, viewport.height),
            pixel_ratio: viewport.clamped_pixel_ratio(),
        }
    }

    /// One display-refresh step. Angles grow without wrapping.
    pub fn advance(&mut self) {
        self.points.rotation.x += self.points_spin[0];
        self.points.rotation.y += self.points_spin[1];
        self.solid.rotation.x += self.solid_spin[0];
        self.solid.rotation.y += self.solid_spin[1];
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
        self.output_size = (viewport.width, viewport.height);
        self.pixel_ratio = viewport.clamped_pixel_ratio();
    }

    pub fn points_model(&self) -> Mat4 {
        self.points.model_matrix()
    }

    pub fn solid_model(&self) -> Mat4 {
        self.solid.model_matrix()
    }

    /// Output size in CSS pixels, as last set by [`SceneState::resize`].
    pub fn output_size(&self) -> (f64, f64) {
        self.output_size
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Sum of ambient light contributions, folded into the unlit tints.
    pub fn ambient_rgb(&self) -> [f32; 3] {
        let mut acc = [0.0; 3];
        for light in &self.lights {
            if let Light::Ambient { color, intensity } = light {
                for i in 0..3 {
                    acc[i] += color[i] * intensity;
                }
            }
        }
        acc
    }
}
