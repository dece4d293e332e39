//! Hero tunnel camera driven by the virtual scroll accumulator.

use super::smoothing::SmoothedValue;
use super::virtual_scroll::VirtualScrollAccumulator;
use crate::config::TunnelConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelGeometry {
    pub segments: usize,
    pub segment_depth: f64,
    /// Camera depth travelled per unit of virtual scroll.
    pub depth_per_unit: f64,
}

impl TunnelGeometry {
    pub fn from_config(config: &TunnelConfig) -> Self {
        Self {
            segments: config.segments,
            segment_depth: config.segment_depth,
            depth_per_unit: config.depth_per_unit,
        }
    }

    /// Deepest camera position. The last two segments stay ahead of the
    /// camera so the tunnel never visibly ends.
    pub fn max_depth(&self) -> f64 {
        let travel = self.segments as f64 * self.segment_depth - self.segment_depth * 2.0;
        -travel.max(0.0)
    }

    /// Virtual scroll needed to reach `max_depth`.
    pub fn scroll_needed(&self) -> f64 {
        if self.depth_per_unit <= 0.0 {
            return 0.0;
        }
        self.max_depth().abs() / self.depth_per_unit
    }

    pub fn target_depth(&self, accumulated: f64) -> f64 {
        let raw = -accumulated * self.depth_per_unit;
        raw.max(self.max_depth()).min(0.0)
    }

    /// Depth of each segment's front face.
    pub fn segment_positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.segments).map(move |i| 0.0 - i as f64 * self.segment_depth)
    }
}

/// Accumulator plus smoothed camera depth for one hero instance.
#[derive(Clone, Debug)]
pub struct TunnelCamera {
    geometry: TunnelGeometry,
    scroll: VirtualScrollAccumulator,
    depth: SmoothedValue,
}

impl TunnelCamera {
    pub fn new(config: &TunnelConfig) -> Self {
        let geometry = TunnelGeometry::from_config(config);
        let scroll = VirtualScrollAccumulator::new(
            geometry.scroll_needed(),
            config.speed_factor,
            config.rollback_margin,
        );
        Self {
            geometry,
            scroll,
            depth: SmoothedValue::new(0.0, config.damping),
        }
    }

    pub fn geometry(&self) -> &TunnelGeometry {
        &self.geometry
    }

    pub fn scroll(&self) -> &VirtualScrollAccumulator {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut VirtualScrollAccumulator {
        &mut self.scroll
    }

    /// Advance one frame and return the camera depth.
    pub fn tick(&mut self) -> f64 {
        self.depth
            .set_target(self.geometry.target_depth(self.scroll.accumulated()));
        self.depth.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::virtual_scroll::WheelInput;

    #[test]
    fn default_geometry_matches_hero() {
        let geometry = TunnelGeometry::from_config(&TunnelConfig::default());
        assert!((geometry.max_depth() + 72.0).abs() < 1e-9);
        assert!((geometry.scroll_needed() - 1440.0).abs() < 1e-6);
    }

    #[test]
    fn target_depth_is_bounded() {
        let geometry = TunnelGeometry::from_config(&TunnelConfig::default());
        assert_eq!(geometry.target_depth(0.0), 0.0);
        assert_eq!(geometry.target_depth(-500.0), 0.0);
        assert!((geometry.target_depth(720.0) + 36.0).abs() < 1e-9);
        assert_eq!(geometry.target_depth(1e9), geometry.max_depth());
    }

    #[test]
    fn camera_eases_toward_wheel_target() {
        let mut camera = TunnelCamera::new(&TunnelConfig::default());
        camera.scroll_mut().on_wheel(WheelInput {
            delta_y: 480.0,
            engaged: true,
            page_at_top: true,
        });
        let first = camera.tick();
        assert!(first < 0.0 && first > -36.0);
        let mut depth = first;
        for _ in 0..300 {
            depth = camera.tick();
            assert!(depth <= 0.0 && depth >= camera.geometry().max_depth());
        }
        assert!((depth + 36.0).abs() < 1e-3);
    }

    #[test]
    fn camera_bound_follows_config() {
        let config = TunnelConfig {
            segments: 8,
            rollback_margin: 25.0,
            ..TunnelConfig::default()
        };
        let mut camera = TunnelCamera::new(&config);
        // (8 - 2) * 6 = 36 depth units at 0.05 per unit
        camera.scroll_mut().on_wheel(WheelInput {
            delta_y: 1e6,
            engaged: true,
            page_at_top: true,
        });
        assert!(camera.scroll().is_completed());
        assert!((camera.scroll().accumulated() - 720.0).abs() < 1e-6);
        camera.scroll_mut().on_wheel(WheelInput {
            delta_y: -1.0,
            engaged: true,
            page_at_top: true,
        });
        assert!((camera.scroll().accumulated() - 695.0).abs() < 1e-6);
    }

    #[test]
    fn segments_are_spaced_by_depth() {
        let geometry = TunnelGeometry::from_config(&TunnelConfig::default());
        let positions: Vec<f64> = geometry.segment_positions().collect();
        assert_eq!(positions.len(), 14);
        assert_eq!(positions[1], -6.0);
    }
}
