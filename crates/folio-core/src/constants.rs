// Shared visual tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 50.0; // eye distance from the origin along +Z
pub const MAX_PIXEL_RATIO: f64 = 2.0; // drawing buffer never exceeds 2x CSS pixels

// Point cloud
pub const POINT_CLOUD_EXTENT: f32 = 200.0; // edge length of the sampling cube
pub const POINT_SATURATION: f32 = 1.0;
pub const POINT_LIGHTNESS: f32 = 0.7;
pub const POINT_SIZE: f32 = 0.5; // world units
pub const POINT_OPACITY: f32 = 0.6;
pub const POINT_SPIN_X: f32 = 0.0005; // radians per frame
pub const POINT_SPIN_Y: f32 = 0.001;

// Wireframe solid
pub const SOLID_RADIUS: f32 = 10.0;
pub const SOLID_POSITION: [f32; 3] = [20.0, 10.0, -50.0];
pub const SOLID_COLOR: u32 = 0x00f3ff;
pub const SOLID_OPACITY: f32 = 0.2;
pub const SOLID_SPIN_X: f32 = 0.005;
pub const SOLID_SPIN_Y: f32 = 0.005;

// Fog (exponential squared) and lights
pub const FOG_COLOR: u32 = 0x000010;
pub const FOG_DENSITY: f32 = 0.001;
pub const AMBIENT_COLOR: u32 = 0x00f3ff;
pub const AMBIENT_INTENSITY: f32 = 0.1;
pub const POINT_LIGHT_COLOR: u32 = 0xff00ff;
pub const POINT_LIGHT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_POSITION: [f32; 3] = [50.0, 50.0, 50.0];

// Glyph rain
pub const RAIN_TOP_RESET_PCT: f32 = -5.0; // where a recycled glyph re-enters
pub const RAIN_BOTTOM_PCT: f32 = 100.0;
pub const RAIN_MAX_DELAY_SEC: f32 = 5.0;
pub const RAIN_MIN_DURATION_SEC: f32 = 1.0;
pub const RAIN_DURATION_SPAN_SEC: f32 = 3.0;
pub const OPACITY_EPSILON: f32 = 1e-6; // absorbs drift from repeated subtraction

pub const RAIN_ALPHABET_INITIAL: &str =
    "01ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789$+-*/=%\"'#&_(),.;:?!\\|{}<>[]^~";
pub const RAIN_ALPHABET_REFINED: &str = "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

// Pointer parallax
pub const PARALLAX_SCALE: f32 = 50.0; // pixels of pointer offset per degree

// Text animators
pub const TYPEWRITER_START_DELAY_MS: i32 = 1000;
pub const TYPEWRITER_CHAR_DELAY_MS: i32 = 30;
pub const GLITCH_TICK_MS: i32 = 30;
pub const GLITCH_STEP: f32 = 0.5; // characters resolved per tick
pub const GLITCH_RESTORE_DELAY_MS: i32 = 100;
pub const GLITCH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789<>/!@#$%";

// Scroll navigation
pub const NAV_LOOKAHEAD_PX: f64 = 200.0;
pub const NAV_ALIAS_SECTION: &str = "hero";
pub const NAV_ALIAS_LABEL: &str = "Home";
pub const SCROLL_DEBOUNCE_MS: i32 = 100;

// Widgets
pub const POPUP_OFFSET_PX: f64 = 50.0; // popup sits this far above its anchor
pub const ANIMATION_RESTART_DELAY_MS: i32 = 100;
pub const CARD_HOVER_TRANSITION: &str = "0.5s";
pub const CARD_LEAVE_TRANSITION: &str = "0.8s";
