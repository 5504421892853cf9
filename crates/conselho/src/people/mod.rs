//! People management: employee roster, skill evaluations, and the team
//! health rollup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{collections, DocumentId, Saved, StoreError, UserId, UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: String,
    pub status: EmployeeStatus,
}

/// Five evaluation axes, each rated 0 to 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillRatings {
    pub technique: f64,
    pub behavior: f64,
    pub delivery: f64,
    pub deadlines: f64,
    pub innovation: f64,
}

impl SkillRatings {
    /// Mean of the five axes.
    pub fn performance_score(&self) -> f64 {
        (self.technique + self.behavior + self.delivery + self.deadlines + self.innovation) / 5.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub employee_id: DocumentId,
    pub employee_name: String,
    pub date: DateTime<Utc>,
    pub skills: SkillRatings,
    pub performance_score: f64,
    pub feedback: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PeopleError {
    #[error("employee {0} not found")]
    UnknownEmployee(String),
    #[error("skill rating {value} for {axis} is outside 0..=10")]
    RatingOutOfRange { axis: &'static str, value: f64 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Roster plus evaluations over it.
pub struct PeopleService<S> {
    store: Arc<S>,
}

impl<S: UserStore + 'static> PeopleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn add_employee(
        &self,
        user: &UserId,
        employee: &Employee,
    ) -> Result<Saved<Employee>, PeopleError> {
        let document = self.store.create(
            user,
            collections::PEOPLE_EMPLOYEES,
            crate::store::encode(employee)?,
        )?;
        Ok(Saved::from_parts(
            document.id,
            document.created_at,
            employee.clone(),
        ))
    }

    pub fn update_employee(
        &self,
        user: &UserId,
        id: &DocumentId,
        employee: &Employee,
    ) -> Result<(), PeopleError> {
        self.store.put(
            user,
            collections::PEOPLE_EMPLOYEES,
            id,
            crate::store::encode(employee)?,
        )?;
        Ok(())
    }

    pub fn employees(&self, user: &UserId) -> Result<Vec<Saved<Employee>>, PeopleError> {
        self.store
            .list(user, collections::PEOPLE_EMPLOYEES)?
            .into_iter()
            .map(|document| Saved::from_document(document).map_err(PeopleError::from))
            .collect()
    }

    pub fn remove_employee(&self, user: &UserId, id: &DocumentId) -> Result<(), PeopleError> {
        self.store
            .delete(user, collections::PEOPLE_EMPLOYEES, id)?;
        Ok(())
    }

    /// Records an evaluation against a known employee, denormalizing the
    /// employee name into the record at write time.
    pub fn record_evaluation(
        &self,
        user: &UserId,
        employee_id: &DocumentId,
        skills: SkillRatings,
        feedback: String,
    ) -> Result<Saved<Evaluation>, PeopleError> {
        validate_ratings(&skills)?;
        let employee = self
            .store
            .get(user, collections::PEOPLE_EMPLOYEES, employee_id)?
            .ok_or_else(|| PeopleError::UnknownEmployee(employee_id.0.clone()))?;
        let employee: Employee = employee.decode()?;

        let evaluation = Evaluation {
            employee_id: employee_id.clone(),
            employee_name: employee.name,
            date: Utc::now(),
            performance_score: skills.performance_score(),
            skills,
            feedback,
        };
        let document = self.store.create(
            user,
            collections::PEOPLE_EVALUATIONS,
            crate::store::encode(&evaluation)?,
        )?;
        Ok(Saved::from_parts(
            document.id,
            document.created_at,
            evaluation,
        ))
    }

    pub fn evaluations(&self, user: &UserId) -> Result<Vec<Saved<Evaluation>>, PeopleError> {
        self.store
            .list(user, collections::PEOPLE_EVALUATIONS)?
            .into_iter()
            .map(|document| Saved::from_document(document).map_err(PeopleError::from))
            .collect()
    }

    /// Mean performance score across every evaluation, 0 when none exist.
    pub fn team_health(&self, user: &UserId) -> Result<f64, PeopleError> {
        let evaluations = self.evaluations(user)?;
        if evaluations.is_empty() {
            return Ok(0.0);
        }
        let sum: f64 = evaluations
            .iter()
            .map(|saved| saved.record.performance_score)
            .sum();
        Ok(sum / evaluations.len() as f64)
    }
}

fn validate_ratings(skills: &SkillRatings) -> Result<(), PeopleError> {
    let axes = [
        ("technique", skills.technique),
        ("behavior", skills.behavior),
        ("delivery", skills.delivery),
        ("deadlines", skills.deadlines),
        ("innovation", skills.innovation),
    ];
    for (axis, value) in axes {
        if !(0.0..=10.0).contains(&value) {
            return Err(PeopleError::RatingOutOfRange { axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;

    fn service() -> PeopleService<InMemoryUserStore> {
        PeopleService::new(Arc::new(InMemoryUserStore::default()))
    }

    fn employee(name: &str) -> Employee {
        Employee {
            name: name.to_string(),
            role: "Analyst".to_string(),
            email: String::new(),
            status: EmployeeStatus::Active,
        }
    }

    fn flat_ratings(value: f64) -> SkillRatings {
        SkillRatings {
            technique: value,
            behavior: value,
            delivery: value,
            deadlines: value,
            innovation: value,
        }
    }

    #[test]
    fn performance_score_is_the_mean_of_the_axes() {
        let skills = SkillRatings {
            technique: 10.0,
            behavior: 8.0,
            delivery: 6.0,
            deadlines: 4.0,
            innovation: 2.0,
        };
        assert_eq!(skills.performance_score(), 6.0);
    }

    #[test]
    fn evaluation_denormalizes_the_employee_name() {
        let service = service();
        let user = UserId::from("owner-1");
        let saved = service.add_employee(&user, &employee("Ana")).unwrap();

        let evaluation = service
            .record_evaluation(&user, &saved.id, flat_ratings(7.0), "solid".to_string())
            .unwrap();
        assert_eq!(evaluation.record.employee_name, "Ana");
        assert_eq!(evaluation.record.performance_score, 7.0);
    }

    #[test]
    fn evaluating_an_unknown_employee_fails() {
        let service = service();
        let user = UserId::from("owner-1");
        let error = service
            .record_evaluation(
                &user,
                &DocumentId("missing".to_string()),
                flat_ratings(5.0),
                String::new(),
            )
            .unwrap_err();
        assert!(matches!(error, PeopleError::UnknownEmployee(_)));
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        let service = service();
        let user = UserId::from("owner-1");
        let saved = service.add_employee(&user, &employee("Ana")).unwrap();
        let mut skills = flat_ratings(5.0);
        skills.delivery = 11.0;

        let error = service
            .record_evaluation(&user, &saved.id, skills, String::new())
            .unwrap_err();
        assert!(matches!(
            error,
            PeopleError::RatingOutOfRange {
                axis: "delivery",
                ..
            }
        ));
    }

    #[test]
    fn team_health_averages_all_evaluations() {
        let service = service();
        let user = UserId::from("owner-1");
        assert_eq!(service.team_health(&user).unwrap(), 0.0);

        let ana = service.add_employee(&user, &employee("Ana")).unwrap();
        let bruno = service.add_employee(&user, &employee("Bruno")).unwrap();
        service
            .record_evaluation(&user, &ana.id, flat_ratings(8.0), String::new())
            .unwrap();
        service
            .record_evaluation(&user, &bruno.id, flat_ratings(6.0), String::new())
            .unwrap();

        assert_eq!(service.team_health(&user).unwrap(), 7.0);
    }
}
