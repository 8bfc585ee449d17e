use serde::{Deserialize, Serialize};

use super::{BodyMetricSample, UserProfile, WorkoutRecord};
use crate::error::{FitnessError, FitnessResult};

/// Everything the engine needs to know about one user, handed in by the caller.
///
/// This replaces any notion of an ambient "current user": engine entry points
/// take the context explicitly and never look anything up themselves.
/// Histories are ordered most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionContext {
    pub profile: UserProfile,
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    #[serde(default)]
    pub metrics: Vec<BodyMetricSample>,
}

impl SessionContext {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            workouts: Vec::new(),
            metrics: Vec::new(),
        }
    }

    pub fn with_history(
        profile: UserProfile,
        workouts: Vec<WorkoutRecord>,
        metrics: Vec<BodyMetricSample>,
    ) -> Self {
        Self {
            profile,
            workouts,
            metrics,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.profile.id
    }

    /// Prepend a workout so the history stays most-recent-first.
    pub fn record_workout(&mut self, workout: WorkoutRecord) -> FitnessResult<()> {
        self.check_owner("workout", &workout.user_id)?;
        workout.validate()?;
        self.workouts.insert(0, workout);
        Ok(())
    }

    /// Validate the profile and every record, and check they all belong to the profile's user.
    pub fn validate(&self) -> FitnessResult<()> {
        self.profile.validate()?;

        for workout in &self.workouts {
            self.check_owner("workout", &workout.user_id)?;
            workout.validate()?;
        }

        for sample in &self.metrics {
            self.check_owner("metric sample", &sample.user_id)?;
            sample.validate()?;
        }

        Ok(())
    }

    fn check_owner(&self, what: &str, owner: &str) -> FitnessResult<()> {
        if owner != self.profile.id {
            return Err(FitnessError::invalid(format!(
                "{} belongs to user {}, expected {}",
                what, owner, self.profile.id
            )));
        }
        Ok(())
    }
}
