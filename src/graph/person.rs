//! Person records scoped to one family

use super::types::{Gender, PersonId};
use crate::stats::age_between;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A member of a family
///
/// Persons are created and edited by the surrounding CRUD layer; the
/// engine treats them as plain records. Birth and death dates are
/// optional; historical entries are frequently incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within the family
    pub id: PersonId,

    pub first_name: String,

    pub middle_name: Option<String>,

    pub last_name: String,

    pub birth_date: Option<NaiveDate>,

    /// Absent for living members
    pub death_date: Option<NaiveDate>,

    pub gender: Gender,
}

impl Person {
    /// Create a new person with the mandatory name parts
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Person {
            id,
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            birth_date: None,
            death_date: None,
            gender: Gender::Unknown,
        }
    }

    /// A person is alive while no death date is recorded
    pub fn is_alive(&self) -> bool {
        self.death_date.is_none()
    }

    /// Display name: first, optional middle, last
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(|d| d.year())
    }

    pub fn death_year(&self) -> Option<i32> {
        self.death_date.map(|d| d.year())
    }

    /// Age in whole years as of `today`, or at death for deceased members.
    ///
    /// `None` when no birth date is recorded.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date
            .map(|birth| age_between(birth, self.death_date.unwrap_or(today)))
    }
}
