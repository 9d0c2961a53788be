//! Render sink interface
//!
//! The simulation never paints. Once per tick it hands the live units, in
//! creation order, to a [`RenderSink`]; the host draws them with whatever
//! backend it owns (canvas 2D, WebGPU, DOM).

use glam::{Affine2, Vec2};

use crate::sim::{Bounds, ReactionUnit};

/// Receives the live units at the end of every tick.
///
/// The slice is only valid for the duration of the call.
pub trait RenderSink<T> {
    fn render(&mut self, units: &[ReactionUnit<T>]);
}

impl<T, F> RenderSink<T> for F
where
    F: FnMut(&[ReactionUnit<T>]),
{
    fn render(&mut self, units: &[ReactionUnit<T>]) {
        self(units)
    }
}

/// What a backend needs to draw one unit
#[derive(Debug, Clone, Copy)]
pub struct DrawUnit<'a, T> {
    pub pos: Vec2,
    /// Radians, clockwise on a y-down canvas
    pub rotation: f32,
    pub opacity: f32,
    pub radius: f32,
    pub content: &'a T,
}

impl<'a, T> DrawUnit<'a, T> {
    pub fn from_unit(unit: &'a ReactionUnit<T>) -> Self {
        Self {
            pos: unit.pos(),
            rotation: unit.rotation().to_radians(),
            opacity: unit.opacity(),
            radius: unit.radius(),
            content: unit.content(),
        }
    }

    /// Local (unit-centred) to canvas space
    pub fn transform(&self) -> Affine2 {
        Affine2::from_angle_translation(self.rotation, self.pos)
    }

    /// Drawing would put at least one visible pixel on the canvas
    pub fn is_visible(&self, bounds: Bounds) -> bool {
        self.opacity > 0.0
            && self.pos.x + self.radius >= 0.0
            && self.pos.x - self.radius <= bounds.width
            && self.pos.y + self.radius >= 0.0
            && self.pos.y - self.radius <= bounds.height
    }
}

/// Visible units in paint order (oldest first, newest on top)
pub fn draw_list<T>(units: &[ReactionUnit<T>], bounds: Bounds) -> Vec<DrawUnit<'_, T>> {
    units
        .iter()
        .map(DrawUnit::from_unit)
        .filter(|d| d.is_visible(bounds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn unit(seed: u64) -> ReactionUnit<char> {
        let mut rng = Pcg32::seed_from_u64(seed);
        ReactionUnit::spawn(
            &mut rng,
            20.0,
            Bounds::new(400.0, 300.0),
            'x',
            0.0,
            &Settings::default(),
        )
        .expect("valid spawn")
    }

    #[test]
    fn test_transform_places_centre() {
        let u = unit(4);
        let draw = DrawUnit::from_unit(&u);
        let centre = draw.transform().transform_point2(Vec2::ZERO);
        assert!((centre - u.pos()).length() < 1e-4);
        assert!((draw.rotation - u.rotation().to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_spawned_units_start_hidden() {
        // Spawn height sits more than one radius above the top edge
        let units = vec![unit(1), unit(2)];
        assert!(SPAWN_Y + 20.0 < 0.0);
        assert!(draw_list(&units, Bounds::new(400.0, 300.0)).is_empty());
    }

    #[test]
    fn test_draw_list_keeps_order() {
        let settings = Settings::default();
        let mut units = vec![unit(1), unit(2), unit(3)];
        for u in &mut units {
            // Enough frames for the slowest faller to clear the top edge,
            // not enough for the fastest to leave the bottom
            while u.y() + u.radius() < 0.0 && u.vel().y > 0.0 {
                u.advance(FRAME_MS, 0.0, &settings);
            }
        }
        let visible: Vec<f32> = draw_list(&units, Bounds::new(400.0, 300.0))
            .iter()
            .map(|d| d.pos.x)
            .collect();
        let expected: Vec<f32> = units
            .iter()
            .filter(|u| u.vel().y > 0.0)
            .map(|u| u.x())
            .collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_closure_sink() {
        let units = vec![unit(5)];
        let mut count = 0;
        let mut sink = |units: &[ReactionUnit<char>]| count += units.len();
        sink.render(units.as_slice());
        sink.render(units.as_slice());
        assert_eq!(count, 2);
    }
}
