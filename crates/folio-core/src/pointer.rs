/// Transform applied when the pointer leaves the cube.
pub const REST_TRANSFORM: &str = "rotateX(-10deg) rotateY(-10deg)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxAngles {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl ParallaxAngles {
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Map a pointer position to a two-axis tilt.
///
/// Horizontal offset from the viewport centre turns about Y, vertical offset
/// (negated) turns about X; both are divided by `scale`.
#[inline]
pub fn parallax_angles(
    viewport_w: f32,
    viewport_h: f32,
    client_x: f32,
    client_y: f32,
    scale: f32,
) -> ParallaxAngles {
    ParallaxAngles {
        rotate_x_deg: (client_y - viewport_h / 2.0) / scale,
        rotate_y_deg: (viewport_w / 2.0 - client_x) / scale,
    }
}
