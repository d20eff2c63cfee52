//! Family statistics
//!
//! Derives ages, alive/deceased counts and a coarse generation estimate
//! from a family's person collection. All computations take an explicit
//! reference date so results are reproducible; the `*_today` variants use
//! the current date.

use crate::graph::FamilyGraph;
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

/// Years assumed per generation for the coarse generation estimate
const YEARS_PER_GENERATION: i32 = 25;

/// Aggregate statistics for one family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStatistics {
    pub total_members: usize,
    pub alive_members: usize,
    pub deceased_members: usize,
    /// Rounded mean of all computable ages; 0 when none are computable
    pub average_age: u32,
    /// Span-of-birth-years estimate, not a true lineage-depth count
    pub generations: u32,
}

/// Whole years between `birth` and `end`, clamped to 0.
///
/// The year difference is decremented when `end` falls before the
/// anniversary of `birth` in `end`'s year. Compared as (month, day) so
/// Feb 29 birthdays behave in non-leap years.
pub fn age_between(birth: NaiveDate, end: NaiveDate) -> u32 {
    let mut age = end.year() - birth.year();
    if (end.month(), end.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Compute statistics for a family as of `today`
pub fn family_statistics(graph: &FamilyGraph, today: NaiveDate) -> FamilyStatistics {
    let total_members = graph.member_count();
    let alive_members = graph.members().filter(|p| p.is_alive()).count();
    let deceased_members = total_members - alive_members;

    let ages: Vec<u32> = graph.members().filter_map(|p| p.age_on(today)).collect();
    let average_age = if ages.is_empty() {
        0
    } else {
        let sum: u64 = ages.iter().map(|&a| a as u64).sum();
        (sum as f64 / ages.len() as f64).round() as u32
    };

    // one generation per 25-year slice of the oldest recorded birth
    let generations = graph
        .members()
        .filter_map(|p| p.birth_year())
        .map(|year| (today.year() - year).div_euclid(YEARS_PER_GENERATION))
        .max()
        .unwrap_or(0)
        .max(0) as u32
        + 1;

    FamilyStatistics {
        total_members,
        alive_members,
        deceased_members,
        average_age,
        generations,
    }
}

/// Compute statistics as of the current date
pub fn family_statistics_today(graph: &FamilyGraph) -> FamilyStatistics {
    family_statistics(graph, Utc::now().date_naive())
}
