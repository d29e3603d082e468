/// ReportThreshold policy deciding which artifact groups the conflict report shows
///
/// A group is reported when its number of distinct versions is above
/// [`ReportThreshold::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportThreshold {
    /// Every group, including single-version ones
    Always,
    /// Only groups resolved at two or more versions
    #[default]
    MultipleVersionsOnly,
}

impl ReportThreshold {
    pub fn from_only_multiple(only_multiple: bool) -> Self {
        if only_multiple {
            ReportThreshold::MultipleVersionsOnly
        } else {
            ReportThreshold::Always
        }
    }

    pub fn value(self) -> usize {
        match self {
            ReportThreshold::Always => 0,
            ReportThreshold::MultipleVersionsOnly => 1,
        }
    }

    pub fn is_reportable(self, distinct_versions: usize) -> bool {
        distinct_versions > self.value()
    }
}
