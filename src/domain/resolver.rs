//! Pointer-to-direction resolution.
//!
//! Converts raw pointer motion over a pad surface into a stable discrete
//! [`Direction`] signal: minimal-latency reaction, but insensitive to
//! sub-threshold jitter, and a new value is emitted only when the
//! resolved direction actually changes.

use crate::domain::direction::Direction;

/// Pointer position in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the surface the pointer moves within. The geometric
/// center defines the origin for quadrant classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetBounds {
    pub width: f32,
    pub height: f32,
}

impl WidgetBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn center(&self) -> (f32, f32) {
        // Zero-area bounds leave the affected center at 0; classification
        // stays well-defined through the sign of the offsets.
        (self.width * 0.5, self.height * 0.5)
    }
}

/// The amount in device-independent pixels by which the pointer must
/// move before we consider it to have moved.
pub const TOUCH_PRECISION_DIP: f32 = 1.5;

/// Resolves pointer events into discrete directions.
///
/// One instance tracks one pointer. All entry points are expected to be
/// called from the single thread that owns the input surface; state is
/// exclusively owned and never locked.
#[derive(Debug)]
pub struct DirectionResolver {
    precision_px: f32,
    last_position: Option<PointerSample>,
    last_direction: Direction,
}

impl DirectionResolver {
    /// Create a resolver with a movement threshold already expressed in
    /// surface pixels.
    pub fn new(precision_px: f32) -> Self {
        Self {
            precision_px,
            last_position: None,
            last_direction: Direction::Neutral,
        }
    }

    /// Create a resolver from a threshold in device-independent pixels
    /// and the display density. The conversion happens once, here.
    pub fn with_density(precision_dip: f32, density: f32) -> Self {
        Self::new(precision_dip * density)
    }

    /// The most recently emitted direction.
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Initial touch-down. Always classifies fresh (there is no prior
    /// position to threshold against) and returns the resulting
    /// direction.
    pub fn engage(&mut self, sample: PointerSample, bounds: WidgetBounds) -> Direction {
        self.last_position = Some(sample);
        let direction = self.classify(sample, bounds);
        self.last_direction = direction;
        direction
    }

    /// Subsequent motion while the pointer stays down.
    ///
    /// Returns `None` when the displacement since the last accepted
    /// sample stays within the precision threshold on both axes, or when
    /// the recomputed direction matches the one already emitted.
    pub fn move_to(&mut self, sample: PointerSample, bounds: WidgetBounds) -> Option<Direction> {
        if let Some(last) = self.last_position {
            let moved = (sample.x - last.x).abs() > self.precision_px
                || (sample.y - last.y).abs() > self.precision_px;
            if !moved {
                return None;
            }
        }

        self.last_position = Some(sample);
        let direction = self.classify(sample, bounds);
        if direction == self.last_direction {
            return None;
        }
        self.last_direction = direction;
        Some(direction)
    }

    /// Touch-up or cancellation. Resets to `Neutral` unconditionally;
    /// calling it again is a no-op that still reports `Neutral`.
    pub fn release(&mut self) -> Direction {
        self.last_position = None;
        self.last_direction = Direction::Neutral;
        Direction::Neutral
    }

    fn classify(&self, sample: PointerSample, bounds: WidgetBounds) -> Direction {
        let (cx, cy) = bounds.center();
        Direction::from_offset(sample.x - cx, sample.y - cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: WidgetBounds = WidgetBounds {
        width: 100.0,
        height: 100.0,
    };

    fn resolver() -> DirectionResolver {
        DirectionResolver::new(1.5)
    }

    #[test]
    fn engage_classifies_immediately() {
        let mut r = resolver();
        // dx = 40, dy = 0 from the (50, 50) center.
        assert_eq!(r.engage(PointerSample::new(90.0, 50.0), PAD), Direction::Right);
        assert_eq!(r.last_direction(), Direction::Right);
    }

    #[test]
    fn engage_at_exact_center_is_up() {
        let mut r = resolver();
        assert_eq!(r.engage(PointerSample::new(50.0, 50.0), PAD), Direction::Up);
    }

    #[test]
    fn sub_threshold_move_is_ignored() {
        let mut r = resolver();
        r.engage(PointerSample::new(90.0, 50.0), PAD);
        // Under the threshold on both axes, even though the raw point sits
        // in the lower quadrant now.
        assert_eq!(r.move_to(PointerSample::new(90.5, 51.0), PAD), None);
        assert_eq!(r.last_direction(), Direction::Right);
    }

    #[test]
    fn move_within_same_quadrant_emits_nothing() {
        let mut r = resolver();
        r.engage(PointerSample::new(90.0, 50.0), PAD);
        assert_eq!(r.move_to(PointerSample::new(80.0, 55.0), PAD), None);
        assert_eq!(r.last_direction(), Direction::Right);
    }

    #[test]
    fn move_into_new_quadrant_emits_once() {
        let mut r = resolver();
        r.engage(PointerSample::new(90.0, 50.0), PAD);
        assert_eq!(
            r.move_to(PointerSample::new(50.0, 90.0), PAD),
            Some(Direction::Down)
        );
        // Staying put re-triggers neither the threshold nor a change.
        assert_eq!(r.move_to(PointerSample::new(50.0, 90.0), PAD), None);
        assert_eq!(r.last_direction(), Direction::Down);
    }

    #[test]
    fn threshold_on_one_axis_is_enough() {
        let mut r = resolver();
        r.engage(PointerSample::new(90.0, 50.0), PAD);
        // dx below threshold, dy above: recomputation must happen.
        assert_eq!(
            r.move_to(PointerSample::new(90.5, 140.0), PAD),
            Some(Direction::Down)
        );
    }

    #[test]
    fn release_is_idempotent() {
        let mut r = resolver();
        r.engage(PointerSample::new(10.0, 50.0), PAD);
        assert_eq!(r.last_direction(), Direction::Left);
        assert_eq!(r.release(), Direction::Neutral);
        assert_eq!(r.release(), Direction::Neutral);
        assert_eq!(r.last_direction(), Direction::Neutral);
    }

    #[test]
    fn move_after_release_classifies_fresh() {
        let mut r = resolver();
        r.engage(PointerSample::new(90.0, 50.0), PAD);
        r.release();
        // No stored position, so the threshold is bypassed.
        assert_eq!(
            r.move_to(PointerSample::new(90.0, 50.0), PAD),
            Some(Direction::Right)
        );
    }

    #[test]
    fn degenerate_bounds_classify_by_offset_sign() {
        let mut r = resolver();
        let empty = WidgetBounds::new(0.0, 0.0);
        assert_eq!(r.engage(PointerSample::new(5.0, -3.0), empty), Direction::Right);
        assert_eq!(
            r.move_to(PointerSample::new(-3.0, -5.0), empty),
            Some(Direction::Up)
        );
    }

    #[test]
    fn density_scales_the_threshold() {
        let mut r = DirectionResolver::with_density(TOUCH_PRECISION_DIP, 2.0);
        r.engage(PointerSample::new(90.0, 50.0), PAD);
        // 2.5px is over 1.5dip but under the 3px converted threshold.
        assert_eq!(r.move_to(PointerSample::new(92.5, 50.0), PAD), None);
    }
}
