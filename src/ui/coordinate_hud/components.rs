// src/ui/coordinate_hud/components.rs
//
// Components for the coordinate HUD.

use bevy::prelude::*;

use crate::camera::state::DisplayCoordinates;

/// Marker for the HUD root node.
#[derive(Component, Debug)]
pub struct CoordinateHud;

/// Axis shown by one HUD line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAxis {
    X,
    Y,
    Z,
}

impl HudAxis {
    pub const ALL: [HudAxis; 3] = [HudAxis::X, HudAxis::Y, HudAxis::Z];

    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    /// `"X: 12"`, `"Y: 0.00"`, `"Z: -5.00"`.
    pub fn line(self, coords: &DisplayCoordinates) -> String {
        let value = match self {
            Self::X => coords.x_label(),
            Self::Y => coords.y_label(),
            Self::Z => coords.z_label(),
        };
        format!("{}: {}", self.label(), value)
    }
}

/// Text entity displaying one axis.
#[derive(Component, Debug)]
pub struct HudField {
    pub axis: HudAxis,
}
