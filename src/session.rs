//! Editing session: holds the current plan and notifies subscribers of every new value.

use crate::logic::{apply_edit, derive_group_counts, project_phases, validate_plan, PlanEdit};
use crate::models::{PhaseSummary, TournamentPlan, ValidationReport};

type Subscriber = Box<dyn FnMut(&TournamentPlan)>;

/// One interactive editing session. Edits are applied one at a time, in order.
pub struct PlanSession {
    plan: TournamentPlan,
    subscribers: Vec<Subscriber>,
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::new(TournamentPlan::new())
    }
}

impl PlanSession {
    pub fn new(plan: TournamentPlan) -> Self {
        Self {
            plan: derive_group_counts(&plan),
            subscribers: Vec::new(),
        }
    }

    pub fn plan(&self) -> &TournamentPlan {
        &self.plan
    }

    /// Register a callback; it is called with each plan produced by [`PlanSession::dispatch`].
    pub fn subscribe(&mut self, subscriber: impl FnMut(&TournamentPlan) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply an edit, replace the current plan and notify subscribers.
    pub fn dispatch(&mut self, edit: PlanEdit) -> &TournamentPlan {
        self.plan = apply_edit(&self.plan, edit);
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.plan);
        }
        &self.plan
    }

    pub fn validate(&self) -> ValidationReport {
        validate_plan(&self.plan)
    }

    pub fn phases(&self) -> Vec<PhaseSummary> {
        project_phases(&self.plan)
    }

    /// End the session, handing the plan over (e.g. for submission).
    pub fn into_plan(self) -> TournamentPlan {
        self.plan
    }
}
