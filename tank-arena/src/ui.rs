//! Billboard overlay with the health and reload bars of a tank.
use tank_core::StatusDisplay;

/// Fill state of the two bars floating above a tank.
///
/// The overlay is a billboard: it always faces the same way as the camera,
/// set with [`StatusBars::face_camera`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBars {
    reload_fill: f32,
    health_fill: f32,
    facing: [f32; 3],
}

impl Default for StatusBars {
    fn default() -> Self {
        Self {
            reload_fill: 1.0,
            health_fill: 1.0,
            facing: [0.0, 0.0, 1.0],
        }
    }
}

impl StatusBars {
    /// Fill of the reload bar.
    pub fn reload_fill(&self) -> f32 {
        self.reload_fill
    }

    /// Fill of the health bar.
    pub fn health_fill(&self) -> f32 {
        self.health_fill
    }

    /// Direction the overlay faces.
    pub fn facing(&self) -> [f32; 3] {
        self.facing
    }

    /// Turns the overlay to face along the camera's forward vector.
    ///
    /// A zero vector leaves the orientation unchanged.
    pub fn face_camera(&mut self, camera_forward: [f32; 3]) {
        let [x, y, z] = camera_forward;
        let norm = (x * x + y * y + z * z).sqrt();
        if norm > f32::EPSILON {
            self.facing = [x / norm, y / norm, z / norm];
        }
    }
}

impl StatusDisplay for StatusBars {
    fn set_reload_fill(&mut self, ratio: f32) {
        self.reload_fill = ratio.max(0.0).min(1.0);
    }

    fn set_health_fill(&mut self, ratio: f32) {
        self.health_fill = ratio.max(0.0).min(1.0);
    }
}
