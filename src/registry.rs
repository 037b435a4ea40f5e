//! Registry of known view types.
//!
//! Every presentation schema in the view catalogue is identified by a
//! lowercase, hyphenated discriminator string (`"map"`, `"gis-legend"`, ...).
//! [`ViewType`] is the closed set of those identifiers. Name lookups are exact
//! and case-sensitive, so an unknown or differently-cased `type` field never
//! resolves to a view.

use crate::error::{InferenceError, InferenceResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! view_types {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A known view type discriminator.
        ///
        /// Serializes as its registry name, e.g. `ViewType::GisLegend` is `"gis-legend"`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ViewType {
            $($variant),+
        }

        impl ViewType {
            /// All known view types, in registry order.
            pub const ALL: &'static [ViewType] = &[$(ViewType::$variant),+];

            /// The discriminator string for this view type.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ViewType::$variant => $name),+
                }
            }

            /// Look up a view type by its exact discriminator string.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(ViewType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

view_types! {
    Alert => "alert",
    Annotation => "annotation",
    Audio => "audio",
    BoxPlot => "boxplot",
    Calendar => "calendar",
    Carousel => "carousel",
    Chart => "chart",
    Chat => "chat",
    Code => "code",
    Compare => "compare",
    Confirm => "confirm",
    Counter => "counter",
    CrossTab => "crosstab",
    Dashboard => "dashboard",
    DataTable => "datatable",
    Detail => "detail",
    Diff => "diff",
    Embed => "embed",
    Filter => "filter",
    FlowChart => "flowchart",
    Form => "form",
    Funnel => "funnel",
    Gallery => "gallery",
    Gantt => "gantt",
    Gauge => "gauge",
    GeoStory => "geostory",
    GisLegend => "gis-legend",
    Globe => "globe",
    Graph => "graph",
    HeatMap => "heatmap",
    Image => "image",
    Investigation => "investigation",
    Json => "json",
    Kanban => "kanban",
    Layers => "layers",
    Log => "log",
    Map => "map",
    Markdown => "markdown",
    MiniMap => "minimap",
    Neural => "neural",
    Notebook => "notebook",
    Pdf => "pdf",
    Pivot => "pivot",
    Poll => "poll",
    Profile => "profile",
    Progress => "progress",
    Quiz => "quiz",
    Ranked => "ranked",
    Sankey => "sankey",
    Scatter => "scatter",
    Settings => "settings",
    Shader => "shader",
    Slides => "slides",
    Spectrogram => "spectrogram",
    Split => "split",
    Status => "status",
    Stepper => "stepper",
    Sunburst => "sunburst",
    SwimLane => "swimlane",
    Tabs => "tabs",
    Terminal => "terminal",
    ThreeD => "threed",
    Timeline => "timeline",
    TimeSeries => "timeseries",
    Transcript => "transcript",
    Tree => "tree",
    TreeMap => "treemap",
    Video => "video",
    Wizard => "wizard",
}

/// Check whether `name` is a known view type discriminator.
pub fn is_known_view_type(name: &str) -> bool {
    ViewType::from_name(name).is_some()
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = InferenceError;

    fn from_str(s: &str) -> InferenceResult<Self> {
        Self::from_name(s).ok_or_else(|| InferenceError::unknown_view_type(s))
    }
}

impl TryFrom<&str> for ViewType {
    type Error = InferenceError;

    fn try_from(value: &str) -> InferenceResult<Self> {
        value.parse()
    }
}

impl Serialize for ViewType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ViewType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
