// Shared scene/effect tuning constants used by the web frontend and host tests.

// Scene layout
pub const HEART_COUNT: usize = 25;
pub const HEART_SPREAD: f32 = 60.0; // each axis spans [-SPREAD/2, SPREAD/2)
pub const HEART_SCALE_MIN: f32 = 0.5;
pub const HEART_SCALE_SPAN: f32 = 1.5;
pub const HEART_OPACITY: f32 = 0.7;
pub const HEART_COLORS: [[f32; 3]; 2] = [
    [1.0, 0.310, 0.506], // #ff4f81
    [1.0, 0.561, 0.694], // #ff8fb1
];

// Per-heart motion
pub const ROTATION_SPEED_SPAN: f32 = 0.02; // radians per tick, centred on zero
pub const FLOAT_SPEED_MIN: f32 = 0.01;
pub const FLOAT_SPEED_SPAN: f32 = 0.02;
pub const FLOAT_RANGE_MIN: f32 = 2.0;
pub const FLOAT_RANGE_SPAN: f32 = 3.0;
pub const FLOAT_TIME_SCALE: f64 = 0.001;

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_SWAY_X: f32 = 5.0;
pub const CAMERA_SWAY_X_FREQ: f64 = 0.0001;
pub const CAMERA_SWAY_Y: f32 = 3.0;
pub const CAMERA_SWAY_Y_FREQ: f64 = 0.00015;

// Lighting (Phong-ish)
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const POINT_LIGHT_COLOR: [f32; 3] = [1.0, 0.310, 0.506];
pub const POINT_LIGHT_INTENSITY: f32 = 2.0;
pub const POINT_LIGHT_RANGE: f32 = 100.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [0.0, 10.0, 10.0];
pub const SHININESS: f32 = 100.0;

// Heart mesh
pub const HEART_CURVE_SEGMENTS: usize = 12;
pub const HEART_DEPTH: f32 = 0.3;
pub const HEART_BEVEL: f32 = 0.1; // added to both slab faces and to the outline half-width

// Parallax
pub const PARALLAX_NUDGE: f32 = 0.1;
pub const PARALLAX_FACTOR_STEP: f32 = 0.5;
pub const PARALLAX_BANDS: usize = 5;
pub const PANEL_TILT_DEG_PER_UNIT: f32 = 10.0; // offset * 20 * 0.5

// Ambient 2D hearts
pub const AMBIENT_INTERVAL_MS: f64 = 300.0;
pub const AMBIENT_LIFETIME_MS: f64 = 8000.0;
pub const AMBIENT_DURATION_MIN_S: f32 = 5.0;
pub const AMBIENT_DURATION_SPAN_S: f32 = 3.0;
pub const AMBIENT_FONT_MIN_PX: f32 = 15.0;
pub const AMBIENT_FONT_SPAN_PX: f32 = 15.0;
pub const HEART_GLYPHS: [&str; 5] = ["💗", "💖", "💕", "💓", "❤️"];
pub const INITIAL_BURST_COUNT: usize = 10;
pub const INITIAL_BURST_DELAY_MS: f64 = 500.0;
pub const INITIAL_BURST_STAGGER_MS: f64 = 100.0;

// Explosion
pub const EXPLOSION_COUNT: usize = 50;
pub const EXPLOSION_VELOCITY_MIN: f32 = 200.0;
pub const EXPLOSION_VELOCITY_SPAN: f32 = 300.0;
pub const EXPLOSION_FONT_MIN_PX: f32 = 15.0;
pub const EXPLOSION_FONT_SPAN_PX: f32 = 20.0;
pub const EXPLOSION_SPIN_MAX_DEG: f32 = 720.0;
pub const EXPLOSION_LIFETIME_MS: f64 = 2000.0;

// Confetti
pub const CONFETTI_COUNT: usize = 100;
pub const CONFETTI_STAGGER_MS: f64 = 20.0;
pub const CONFETTI_SIZE_MIN_PX: f32 = 5.0;
pub const CONFETTI_SIZE_SPAN_PX: f32 = 10.0;
pub const CONFETTI_DRIFT_SPAN_PX: f32 = 200.0;
pub const CONFETTI_DURATION_MIN_MS: f64 = 2000.0;
pub const CONFETTI_DURATION_SPAN_MS: f64 = 3000.0;
pub const CONFETTI_START_SPIN_MAX_DEG: f32 = 360.0;
pub const CONFETTI_END_SPIN_MAX_DEG: f32 = 720.0;
pub const CONFETTI_COLORS: [&str; 5] = ["#ff4f81", "#ff8fb1", "#ffc0cb", "#ffb6c1", "#ff69b4"];

// Cursor trail
pub const TRAIL_CAPACITY: usize = 20;
pub const TRAIL_LIFETIME_MS: f64 = 500.0;

// Transitions are applied one frame after insertion so the browser sees a start state.
pub const TRANSITION_KICK_MS: f64 = 10.0;

// Dodge
pub const DODGE_STEP_PX: f32 = 20.0;
pub const DODGE_MAX_PX: f32 = 200.0;
pub const COMPANION_SCALE_STEP: f32 = 0.1;
pub const SHAKE_MS: f64 = 500.0;

// Confirmation
pub const CONFIRM_REVEAL_DELAY_MS: f64 = 500.0;

// Tilt
pub const TILT_DIVISOR: f32 = 10.0;

// Scroll reveal
pub const REVEAL_BOTTOM_SLACK_PX: f64 = 100.0;
