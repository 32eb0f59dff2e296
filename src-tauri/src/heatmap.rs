use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityTier {
    None,
    Low,
    Medium,
    High,
    Peak,
}

impl ActivityTier {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity > 0.8 {
            Self::Peak
        } else if intensity > 0.6 {
            Self::High
        } else if intensity > 0.4 {
            Self::Medium
        } else if intensity > 0.2 {
            Self::Low
        } else {
            Self::None
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::None => "#f3f4f6",
            Self::Low => "#c7d2fe",
            Self::Medium => "#a5b4fc",
            Self::High => "#818cf8",
            Self::Peak => "#6366f1",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub hour: u8,
    pub tier: ActivityTier,
    pub color: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRow {
    pub day: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitHeatmap {
    pub rows: Vec<HeatmapRow>,
}

fn is_weekend(day: usize) -> bool {
    day >= 5
}

fn is_night(hour: usize) -> bool {
    hour < 8 || hour > 20
}

/// Demo commit activity for a week, quieter on weekends and at night.
pub fn generate_heatmap<R: Rng + ?Sized>(rng: &mut R) -> CommitHeatmap {
    let rows = DAYS
        .iter()
        .enumerate()
        .map(|(day_index, day)| {
            let cells = (0..HOURS_PER_DAY)
                .map(|hour| {
                    let mut tier = ActivityTier::from_intensity(rng.random::<f64>());
                    if is_weekend(day_index) && rng.random::<f64>() > 0.3 {
                        tier = ActivityTier::None;
                    }
                    if is_night(hour) && rng.random::<f64>() > 0.2 {
                        tier = ActivityTier::None;
                    }
                    HeatmapCell {
                        hour: hour as u8,
                        tier,
                        color: tier.color().to_string(),
                        title: format!("{} {}:00 - {}:00", day, hour, hour + 1),
                    }
                })
                .collect();
            HeatmapRow {
                day: day.to_string(),
                cells,
            }
        })
        .collect();

    CommitHeatmap { rows }
}
