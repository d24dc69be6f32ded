/// How consecutive vertices of a path or polygon are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentClass {
    /// Shortest path on the sphere (geodesic).
    #[default]
    GreatCircle,
    /// Constant-bearing path; a straight line in Mercator projection.
    Rhumb,
}

impl SegmentClass {
    /// Returns `true` for great-circle segments.
    #[must_use]
    pub fn is_geodesic(self) -> bool {
        matches!(self, Self::GreatCircle)
    }
}

impl From<bool> for SegmentClass {
    /// `true` selects great-circle segments, `false` rhumb lines.
    fn from(geodesic: bool) -> Self {
        if geodesic {
            Self::GreatCircle
        } else {
            Self::Rhumb
        }
    }
}
