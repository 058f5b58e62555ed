// Copyright (c) 2025 ward-alloc contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::milp::{
    backend::{MilpBackend, SolveStatus},
    err::SolverError,
    extract::extract_schedule,
    formulation::AdmissionModel,
    lp::GoodLpBackend,
};
use ward_alloc_model::prelude::{Problem, Schedule};

/// What a solve run produced: a status, and a schedule when the status
/// carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    status: SolveStatus,
    schedule: Option<Schedule>,
    objective_value: Option<f64>,
}

impl SolveOutcome {
    #[inline]
    fn unsolved(status: SolveStatus) -> Self {
        Self {
            status,
            schedule: None,
            objective_value: None,
        }
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    #[inline]
    pub fn objective_value(&self) -> Option<f64> {
        self.objective_value
    }
}

/// Front door of the solver: formulates a [`Problem`] as a MILP, hands
/// it to the backend and reads the result back into a [`Schedule`].
#[derive(Debug, Clone, Default)]
pub struct MilpScheduler<B = GoodLpBackend> {
    backend: B,
}

impl<B: MilpBackend> MilpScheduler<B> {
    #[inline]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn solve(&self, problem: &Problem) -> Result<SolveOutcome, SolverError> {
        // A patient whose stay fits no admission day makes the whole
        // instance infeasible; report that without bothering the backend.
        let mut any_unadmittable = false;
        for patient in problem.iter_unadmittable_patients() {
            any_unadmittable = true;
            tracing::warn!(
                patient = %patient.id(),
                release = %patient.release_date(),
                due = %patient.due_date(),
                stay = %patient.length_of_stay(),
                "no admission day can fit the stay"
            );
        }
        if any_unadmittable {
            return Ok(SolveOutcome::unsolved(SolveStatus::Infeasible));
        }

        let model = AdmissionModel::build(problem);
        tracing::info!(
            variables = model.formulation().binary_count(),
            constraints = model.formulation().constraints().len(),
            "solving admission model"
        );

        let outcome = self.backend.solve(model.formulation());
        let status = outcome.status();
        tracing::info!(status = %status, objective = ?outcome.objective_value(), "backend finished");

        match outcome.assignment() {
            Some(assignment) => {
                let schedule = extract_schedule(&model, assignment)?;
                if let Some(objective) = outcome.objective_value()
                    && (objective - schedule.total_delay() as f64).abs() > 0.5
                {
                    tracing::warn!(
                        objective,
                        total_delay = schedule.total_delay(),
                        "backend objective disagrees with the extracted delay"
                    );
                }
                Ok(SolveOutcome {
                    status,
                    schedule: Some(schedule),
                    objective_value: outcome.objective_value(),
                })
            }
            None => Ok(SolveOutcome::unsolved(status)),
        }
    }
}
