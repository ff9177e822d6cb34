use serde::{Deserialize, Serialize};

use crate::core::{Axis, Bubble, Group, QuadrantColors, QuadrantConfig};

/// Bubble creation payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBubble {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub group: String,
}

/// Group creation payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGroup {
    pub name: String,
    pub color: String,
}

/// Partial-field update for one bubble; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BubblePatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub size: Option<f64>,
    pub group: Option<String>,
}

impl BubblePatch {
    /// Patch carrying only a position, the drag-commit form.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, bubble: &mut Bubble) {
        if let Some(name) = self.name {
            bubble.name = name;
        }
        if let Some(x) = self.x {
            bubble.x = x;
        }
        if let Some(y) = self.y {
            bubble.y = y;
        }
        if let Some(size) = self.size {
            bubble.size = size;
        }
        if let Some(group) = self.group {
            bubble.group = group;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl GroupPatch {
    pub(crate) fn apply(self, group: &mut Group) {
        if let Some(name) = self.name {
            group.name = name;
        }
        if let Some(color) = self.color {
            group.color = color;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisPatch {
    pub label: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisPatch {
    pub(crate) fn apply(self, axis: &mut Axis) {
        if let Some(label) = self.label {
            axis.label = label;
        }
        if let Some(min) = self.min {
            axis.min = min;
        }
        if let Some(max) = self.max {
            axis.max = max;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantLabelsPatch {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
}

impl QuadrantLabelsPatch {
    pub(crate) fn apply(self, quadrants: &mut QuadrantConfig) {
        if let Some(label) = self.top_left {
            quadrants.top_left = label;
        }
        if let Some(label) = self.top_right {
            quadrants.top_right = label;
        }
        if let Some(label) = self.bottom_left {
            quadrants.bottom_left = label;
        }
        if let Some(label) = self.bottom_right {
            quadrants.bottom_right = label;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantColorsPatch {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
}

impl QuadrantColorsPatch {
    pub(crate) fn apply(self, colors: &mut QuadrantColors) {
        if let Some(color) = self.top_left {
            colors.top_left = color;
        }
        if let Some(color) = self.top_right {
            colors.top_right = color;
        }
        if let Some(color) = self.bottom_left {
            colors.bottom_left = color;
        }
        if let Some(color) = self.bottom_right {
            colors.bottom_right = color;
        }
    }
}
