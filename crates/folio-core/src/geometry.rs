//! Buffered geometry for the background scene.
//!
//! A [`PointCloud`] is a fixed set of coloured samples; a [`Wireframe`] is a
//! vertex list plus an edge list drawn as lines. Both carry their own
//! rotation so the renderer only needs a model matrix per object.

use crate::color::hsl_to_rgb;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

/// Interleaved per-instance data uploaded for each point sample.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// One endpoint of a wireframe edge.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Model matrix for an object: translate, then rotate about X, Y, Z in that order.
#[inline]
pub fn model_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    let rot = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    Mat4::from_rotation_translation(rot, position)
}

#[derive(Clone, Debug)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    pub rotation: Vec3,
}

impl PointCloud {
    /// Sample `count` points uniformly inside an axis-aligned cube of edge
    /// `extent` centred on the origin, each with a random hue at the given
    /// saturation and lightness.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        extent: f32,
        saturation: f32,
        lightness: f32,
    ) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            ));
            colors.push(hsl_to_rgb(rng.gen::<f32>(), saturation, lightness));
        }
        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn vertex_data(&self) -> Vec<PointVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(p, c)| PointVertex {
                position: p.to_array(),
                color: *c,
            })
            .collect()
    }

    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(Vec3::ZERO, self.rotation)
    }
}

#[derive(Clone, Debug)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u16; 2]>,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Wireframe {
    /// Regular icosahedron (no subdivision) with all vertices at `radius`.
    pub fn icosahedron(radius: f32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let raw = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ];
        let vertices: Vec<Vec3> = raw
            .iter()
            .map(|v| Vec3::from_array(*v).normalize() * radius)
            .collect();

        // Adjacent vertices are exactly the pairs at the minimum distance.
        let mut min_d = f32::MAX;
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                min_d = min_d.min(vertices[i].distance(vertices[j]));
            }
        }
        let tol = min_d * 1e-3;
        let mut edges = Vec::with_capacity(30);
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if (vertices[i].distance(vertices[j]) - min_d).abs() <= tol {
                    edges.push([i as u16, j as u16]);
                }
            }
        }
        Self {
            vertices,
            edges,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Expand the edge list into a line list (two vertices per edge).
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        self.edges
            .iter()
            .flat_map(|[a, b]| {
                [
                    LineVertex {
                        position: self.vertices[*a as usize].to_array(),
                    },
                    LineVertex {
                        position: self.vertices[*b as usize].to_array(),
                    },
                ]
            })
            .collect()
    }

    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.position, self.rotation)
    }
}
