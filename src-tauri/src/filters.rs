use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKey {
    Department,
    Team,
    Individual,
    Date,
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [Self::Department, Self::Team, Self::Individual, Self::Date];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Team => "team",
            Self::Individual => "individual",
            Self::Date => "date",
        }
    }
}

impl FromStr for FilterKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| AppError::Invalid(format!("unknown filter {}", value)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardFilters {
    pub department: String,
    pub team: String,
    pub individual: String,
    /// Look-back window in days.
    pub date: String,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            department: "all".to_string(),
            team: "all".to_string(),
            individual: "all".to_string(),
            date: "30".to_string(),
        }
    }
}

impl DashboardFilters {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Department => &self.department,
            FilterKey::Team => &self.team,
            FilterKey::Individual => &self.individual,
            FilterKey::Date => &self.date,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) -> AppResult<()> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Invalid(format!("{} filter value is empty", key.as_str())));
        }
        let slot = match key {
            FilterKey::Department => &mut self.department,
            FilterKey::Team => &mut self.team,
            FilterKey::Individual => &mut self.individual,
            FilterKey::Date => &mut self.date,
        };
        *slot = value;
        Ok(())
    }

    pub fn summary(&self) -> String {
        let applied = FilterKey::ALL
            .iter()
            .map(|key| format!("{}={}", key.as_str(), self.get(*key)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Filters applied: {}", applied)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    pub filters: DashboardFilters,
    pub summary: String,
}
