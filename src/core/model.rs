use serde::{Deserialize, Serialize};

/// One data point on the chart: position in axis domain space, a display
/// size, and a reference to the group that colors it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Group id reference. May dangle after partial imports or manual edits
    /// to exported JSON; rendering falls back to a neutral color then.
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// CSS color string, e.g. `#38bdf8` or `rgba(245, 158, 11, 0.08)`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

/// Background fill per quadrant, keyed like the labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantColors {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl Default for QuadrantColors {
    fn default() -> Self {
        Self {
            top_left: "rgba(99, 102, 241, 0.08)".to_owned(),
            top_right: "rgba(236, 72, 153, 0.08)".to_owned(),
            bottom_left: "rgba(34, 197, 94, 0.08)".to_owned(),
            bottom_right: "rgba(245, 158, 11, 0.08)".to_owned(),
        }
    }
}

/// Quadrant labels plus background colors.
///
/// The whole block and its `colors` substructure default independently so
/// payloads persisted before either field existed migrate transparently on
/// load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantConfig {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    #[serde(default)]
    pub colors: QuadrantColors,
}

impl Default for QuadrantConfig {
    fn default() -> Self {
        Self {
            top_left: "Top Left".to_owned(),
            top_right: "Top Right".to_owned(),
            bottom_left: "Bottom Left".to_owned(),
            bottom_right: "Bottom Right".to_owned(),
            colors: QuadrantColors::default(),
        }
    }
}

/// Aggregate root for one chart.
///
/// Bubble and group order is insertion order; it is not display-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub bubbles: Vec<Bubble>,
    pub groups: Vec<Group>,
    #[serde(rename = "xAxis")]
    pub x_axis: Axis,
    #[serde(rename = "yAxis")]
    pub y_axis: Axis,
    #[serde(default)]
    pub quadrants: QuadrantConfig,
}

impl ChartData {
    /// Empty scaffold used by `ChartStore::clear`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: "Bubble Chart".to_owned(),
            bubbles: Vec::new(),
            groups: Vec::new(),
            x_axis: Axis {
                label: "X Axis".to_owned(),
                min: 0.0,
                max: 100.0,
            },
            y_axis: Axis {
                label: "Y Axis".to_owned(),
                min: 0.0,
                max: 100.0,
            },
            quadrants: QuadrantConfig::default(),
        }
    }

    /// Built-in sample aggregate returned on first load.
    #[must_use]
    pub fn sample() -> Self {
        let bubble = |id: &str, name: &str, x: f64, y: f64, size: f64, group: &str| Bubble {
            id: id.to_owned(),
            name: name.to_owned(),
            x,
            y,
            size,
            group: group.to_owned(),
        };

        Self {
            title: "IT Responsibility Matrix".to_owned(),
            bubbles: vec![
                bubble("1", "Grant App Access", 3.0, 5.0, 6.0, "helpdesk"),
                bubble("2", "Laptop Support", 4.0, 6.0, 15.0, "helpdesk"),
                bubble("3", "Okta User Support", 3.5, 7.0, 12.0, "helpdesk"),
                bubble("4", "Jamf Operations", 5.0, 7.0, 18.0, "helpdesk"),
                bubble("5", "Network Troubleshooting", 16.0, 14.0, 36.0, "helpdesk"),
                bubble("6", "IT Documentation", 8.0, 16.0, 48.0, "helpdesk"),
                bubble("7", "Asset Management", 10.0, 16.0, 42.0, "helpdesk"),
                bubble("8", "Onboarding", 12.0, 17.0, 33.0, "helpdesk"),
                bubble("9", "Offboarding", 13.0, 20.0, 30.0, "helpdesk"),
                bubble("10", "Okta Changes", 15.0, 13.0, 30.0, "sysadmin"),
                bubble("11", "Set up New SSO App", 17.0, 15.0, 39.0, "sysadmin"),
                bubble("12", "Jamf Policies", 14.0, 17.0, 36.0, "sysadmin"),
                bubble("13", "Core App Admin", 14.0, 18.0, 45.0, "sysadmin"),
                bubble("14", "Network Design", 18.0, 18.0, 48.0, "sysadmin"),
                bubble("15", "Automation Development", 17.0, 19.0, 54.0, "sysadmin"),
                bubble("16", "IT Strategy", 18.0, 20.0, 45.0, "sysadmin"),
                bubble("17", "System Migrations", 19.0, 20.0, 60.0, "sysadmin"),
            ],
            groups: vec![
                Group {
                    id: "helpdesk".to_owned(),
                    name: "Helpdesk".to_owned(),
                    color: "#38bdf8".to_owned(),
                },
                Group {
                    id: "sysadmin".to_owned(),
                    name: "System Administrators".to_owned(),
                    color: "#f59e0b".to_owned(),
                },
            ],
            x_axis: Axis {
                label: "Complexity".to_owned(),
                min: 0.0,
                max: 25.0,
            },
            y_axis: Axis {
                label: "Business Impact".to_owned(),
                min: 0.0,
                max: 25.0,
            },
            quadrants: QuadrantConfig {
                top_left: "Key Operations".to_owned(),
                top_right: "Strategic Projects".to_owned(),
                bottom_left: "Daily Grind".to_owned(),
                bottom_right: "Specialized Tasks".to_owned(),
                colors: QuadrantColors::default(),
            },
        }
    }

    #[must_use]
    pub fn bubble(&self, id: &str) -> Option<&Bubble> {
        self.bubbles.iter().find(|bubble| bubble.id == id)
    }

    #[must_use]
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }
}
