use crate::core::camera::Camera;
use crate::core::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

/// Per-heart animation state.
///
/// Everything except `rotation` and `position` is fixed at spawn. Vertical
/// position is recomputed from wall-clock time each tick; rotation accumulates.
#[derive(Clone, Debug)]
pub struct HeartParticle {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_range: f32,
    pub initial_y: f32,
    pub color: [f32; 4],
}

impl HeartParticle {
    /// Randomize a heart the way the page seeds its background batch.
    pub fn random(index: usize, spread: f32, rng: &mut impl Rng) -> Self {
        let mut centred = || (rng.gen::<f32>() - 0.5) * spread;
        let position = Vec3::new(centred(), centred(), centred());
        let rotation = Vec3::new(
            rng.gen::<f32>() * std::f32::consts::PI,
            rng.gen::<f32>() * std::f32::consts::PI,
            rng.gen::<f32>() * std::f32::consts::PI,
        );
        let scale = rng.gen::<f32>() * HEART_SCALE_SPAN + HEART_SCALE_MIN;
        let rotation_speed = Vec3::new(
            (rng.gen::<f32>() - 0.5) * ROTATION_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * ROTATION_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * ROTATION_SPEED_SPAN,
        );
        let float_speed = rng.gen::<f32>() * FLOAT_SPEED_SPAN + FLOAT_SPEED_MIN;
        let float_range = rng.gen::<f32>() * FLOAT_RANGE_SPAN + FLOAT_RANGE_MIN;
        let [r, g, b] = HEART_COLORS[index % HEART_COLORS.len()];
        Self {
            position,
            rotation,
            scale,
            rotation_speed,
            float_speed,
            float_range,
            initial_y: position.y,
            color: [r, g, b, HEART_OPACITY],
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }
}

/// Vertical offset of a floating heart at `time_ms`.
///
/// Evaluated in f64: epoch milliseconds times the float speed is far beyond
/// f32's integer range, so f32 would lose the phase entirely.
#[inline]
pub fn float_offset(time_ms: f64, float_speed: f32, float_range: f32) -> f32 {
    ((time_ms * float_speed as f64 * FLOAT_TIME_SCALE).sin() * float_range as f64) as f32
}

/// Parallax weight for the heart at `index`: (index % 5 + 1) * 0.5.
#[inline]
pub fn parallax_factor(index: usize) -> f32 {
    ((index % PARALLAX_BANDS) + 1) as f32 * PARALLAX_FACTOR_STEP
}

/// Construction parameters for the heart scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub heart_count: usize,
    pub spread: f32,
    pub camera: Camera,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            heart_count: HEART_COUNT,
            spread: HEART_SPREAD,
            camera: Camera::default(),
        }
    }
}

/// Ordered heart batch plus camera; the single owner of background 3D state.
pub struct Scene {
    pub hearts: Vec<HeartParticle>,
    pub camera: Camera,
    running: bool,
    ticks: u64,
}

impl Scene {
    pub fn new(params: SceneParams, rng: &mut impl Rng) -> Self {
        let hearts = (0..params.heart_count)
            .map(|i| HeartParticle::random(i, params.spread, rng))
            .collect();
        Self {
            hearts,
            camera: params.camera,
            running: true,
            ticks: 0,
        }
    }

    /// Advance one display refresh. Returns `false` once stopped, in which
    /// case nothing is mutated and the caller should stop rescheduling.
    pub fn tick(&mut self, time_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        for heart in &mut self.hearts {
            heart.rotation += heart.rotation_speed;
            heart.position.y =
                heart.initial_y + float_offset(time_ms, heart.float_speed, heart.float_range);
        }
        self.camera.sway_to(time_ms);
        self.ticks += 1;
        true
    }

    /// Additive pointer nudge; `offset` is the pointer's normalized distance
    /// from the viewport centre, roughly [-0.5, 0.5] per axis.
    ///
    /// The horizontal nudge persists. The vertical one is overwritten by the
    /// next tick, since y is recomputed from `initial_y`.
    pub fn apply_parallax(&mut self, offset: Vec2) {
        for (i, heart) in self.hearts.iter_mut().enumerate() {
            let f = parallax_factor(i);
            heart.position.x += offset.x * f * PARALLAX_NUDGE;
            heart.position.y -= offset.y * f * PARALLAX_NUDGE;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Undo `stop`, e.g. when a cached page is shown again.
    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Heart indices ordered far-to-near from the eye, for blended drawing.
    pub fn back_to_front(&self) -> Vec<usize> {
        let eye = self.camera.eye;
        let mut order: Vec<usize> = (0..self.hearts.len()).collect();
        order.sort_by(|&a, &b| {
            let da = self.hearts[a].position.distance_squared(eye);
            let db = self.hearts[b].position.distance_squared(eye);
            db.total_cmp(&da)
        });
        order
    }
}
