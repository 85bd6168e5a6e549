// Company profile module
// Flat intake-form record describing a business; fields are independently optional

use serde::{Deserialize, Serialize};

/// Company profile captured by the intake forms.
///
/// No relational structure; every field may be left empty. Completion is a
/// derived, purely presentational value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub mission: String,
    pub target_audience: String,
    pub competitors: Vec<String>,
    pub branding_tone: String,
    pub channels: Vec<String>,
}

impl CompanyProfile {
    /// Percentage of the tracked field subset that is filled in, rounded to
    /// the nearest integer.
    pub fn completion_percent(&self) -> u8 {
        let tracked: [bool; 7] = [
            !self.name.trim().is_empty(),
            !self.industry.trim().is_empty(),
            !self.mission.trim().is_empty(),
            !self.target_audience.trim().is_empty(),
            !self.competitors.is_empty(),
            !self.branding_tone.trim().is_empty(),
            !self.channels.is_empty(),
        ];

        let filled = tracked.iter().filter(|f| **f).count();
        ((filled as f64 / tracked.len() as f64) * 100.0).round() as u8
    }
}
