//! Per-category rating averages.
//!
//! A clinic's ratings are partitioned by [`RatingCategory`] and each partition
//! is reduced to its arithmetic mean. A category without ratings has no
//! average: it is reported as `None`, never as `0.0`.
//!
//! The same numbers can be produced in two ways (see [`AverageStrategy`]):
//! folding the rating rows in memory with [`average_by_category`], or letting
//! PostgreSQL compute them with a conditional aggregate. Both divide an exact
//! integer sum by the count in IEEE double precision, so they agree bit for bit.

use std::str::FromStr;

use crate::domain::entities::{Rating, RatingCategory};

/// Mean rating per category. `None` means the category has no ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryAverages {
    pub facilities: Option<f64>,
    pub medical_staff: Option<f64>,
    pub service: Option<f64>,
}

impl CategoryAverages {
    /// Averages for a clinic with no ratings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the average for a single category.
    pub fn get(&self, category: RatingCategory) -> Option<f64> {
        match category {
            RatingCategory::Facilities => self.facilities,
            RatingCategory::MedicalStaff => self.medical_staff,
            RatingCategory::Service => self.service,
        }
    }

    /// Returns true if no category has a rating.
    pub fn is_empty(&self) -> bool {
        RatingCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

/// Running sum and count for one category.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: i64,
    count: u32,
}

impl Tally {
    fn add(mut self, value: i32) -> Self {
        self.sum += i64::from(value);
        self.count += 1;
        self
    }

    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / f64::from(self.count))
    }
}

/// Computes the mean value of each category from `(category, value)` pairs.
///
/// The input is expected to belong to a single clinic.
pub fn average_by_category<I>(ratings: I) -> CategoryAverages
where
    I: IntoIterator<Item = (RatingCategory, i32)>,
{
    let [facilities, medical_staff, service] = ratings.into_iter().fold(
        [Tally::default(); 3],
        |mut tallies, (category, value)| {
            let slot = match category {
                RatingCategory::Facilities => 0,
                RatingCategory::MedicalStaff => 1,
                RatingCategory::Service => 2,
            };
            tallies[slot] = tallies[slot].add(value);
            tallies
        },
    );

    CategoryAverages {
        facilities: facilities.mean(),
        medical_staff: medical_staff.mean(),
        service: service.mean(),
    }
}

/// Convenience wrapper over [`average_by_category`] for stored ratings.
pub fn average_ratings<'a, I>(ratings: I) -> CategoryAverages
where
    I: IntoIterator<Item = &'a Rating>,
{
    average_by_category(ratings.into_iter().map(|r| (r.category, r.value)))
}

/// Where clinic averages are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AverageStrategy {
    /// Conditional aggregate query in PostgreSQL.
    #[default]
    Database,
    /// Load the rating rows and fold them in the service.
    InMemory,
}

impl AverageStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::InMemory => "memory",
        }
    }
}

impl FromStr for AverageStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "database" | "db" | "sql" => Ok(Self::Database),
            "memory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            other => Err(format!(
                "unknown average strategy '{other}', expected 'database' or 'memory'"
            )),
        }
    }
}
