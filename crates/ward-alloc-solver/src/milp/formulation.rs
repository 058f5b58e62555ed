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

//! Translation of a ward instance into a binary MILP.
//!
//! Five variable families, all binary:
//! - admission `z[p,d]`: patient `p` is admitted on day `d`
//! - room admission `w[p,r,d]`: the admission of `p` on `d` uses room `r`
//! - occupancy `x[p,r,d]`: patient `p` lies in room `r` on day `d`
//! - occupied `o[r,d]`: room `r` holds at least one patient on day `d`
//! - coverage `y[r,n,d]`: nurse `n` covers room `r` on day `d`
//!
//! Admission variables exist only for days where the full stay fits both
//! the patient's window and the horizon; occupancy variables only for
//! compatible rooms; coverage variables only for working days. Everything
//! a variable's absence already rules out needs no constraint.

use crate::milp::backend::{LinearConstraint, LinearExpr, MilpFormulation, VariableHandle};
use crate::model::{
    index::{NurseIndex, PatientIndex, RoomIndex},
    index_manager::SolverIndexManager,
};
use ward_alloc_model::prelude::{Day, Nurse, Patient, Problem};

#[derive(Debug, Clone)]
pub struct AdmissionModel<'p> {
    problem: &'p Problem,
    indices: SolverIndexManager,
    formulation: MilpFormulation,
    day_count: usize,
    // [patient][day]
    admission: Vec<Vec<Option<VariableHandle>>>,
    // [patient][room][day]
    room_admission: Vec<Vec<Vec<Option<VariableHandle>>>>,
    // [patient][room][day]
    occupancy: Vec<Vec<Vec<Option<VariableHandle>>>>,
    // [room][day]
    occupied: Vec<Vec<VariableHandle>>,
    // [room][nurse][day]
    coverage: Vec<Vec<Vec<Option<VariableHandle>>>>,
}

impl<'p> AdmissionModel<'p> {
    /// Builds the full formulation for `problem`. Variable layout is
    /// deterministic: patients, rooms and nurses in sorted identifier
    /// order, days ascending.
    pub fn build(problem: &'p Problem) -> Self {
        let indices = SolverIndexManager::from(problem);
        let mut formulation = MilpFormulation::new();
        let day_count = problem.horizon().value() as usize;
        let end_day = problem.end_day();

        let patients_len = indices.patients_len();
        let rooms_len = indices.rooms_len();
        let nurses_len = indices.nurses_len();

        let mut admission = vec![vec![None; day_count]; patients_len];
        let mut room_admission = vec![vec![vec![None; day_count]; rooms_len]; patients_len];
        let mut occupancy = vec![vec![vec![None; day_count]; rooms_len]; patients_len];

        // Admission day is feasible when the whole stay fits the window
        // and the horizon.
        let feasible_days = |p: PatientIndex| -> Vec<usize> {
            let patient = indices
                .patient_id(p)
                .and_then(|id| problem.patient(id))
                .map(|pt| {
                    let earliest = pt.release_date().max(Day::zero());
                    let latest = pt
                        .latest_admission_date()
                        .min(end_day - pt.length_of_stay());
                    (earliest, latest)
                });
            match patient {
                Some((earliest, latest)) if earliest <= latest => Day::range(earliest, latest)
                    .chain(std::iter::once(latest))
                    .map(|d| d.value() as usize)
                    .collect(),
                _ => Vec::new(),
            }
        };

        for p in indices.iter_patient_indices() {
            for d in feasible_days(p) {
                admission[p.0][d] = Some(formulation.add_binary());
            }
        }

        for p in indices.iter_patient_indices() {
            let Some(patient) = indices.patient_id(p).and_then(|id| problem.patient(id)) else {
                continue;
            };
            for r in indices.iter_room_indices() {
                let Some(room_id) = indices.room_id(r) else {
                    continue;
                };
                if !patient.is_room_compatible(room_id) {
                    continue;
                }
                for d in 0..day_count {
                    occupancy[p.0][r.0][d] = Some(formulation.add_binary());
                    if admission[p.0][d].is_some() {
                        room_admission[p.0][r.0][d] = Some(formulation.add_binary());
                    }
                }
            }
        }

        let occupied: Vec<Vec<VariableHandle>> = (0..rooms_len)
            .map(|_| (0..day_count).map(|_| formulation.add_binary()).collect())
            .collect();

        let mut coverage = vec![vec![vec![None; day_count]; nurses_len]; rooms_len];
        for r in 0..rooms_len {
            for n in indices.iter_nurse_indices() {
                let Some(nurse) = indices.nurse_id(n).and_then(|id| problem.nurse(id)) else {
                    continue;
                };
                for day in nurse.iter_working_days() {
                    coverage[r][n.0][day.value() as usize] = Some(formulation.add_binary());
                }
            }
        }

        let mut model = Self {
            problem,
            indices,
            formulation,
            day_count,
            admission,
            room_admission,
            occupancy,
            occupied,
            coverage,
        };
        model.add_objective();
        model.add_admission_constraints();
        model.add_stay_constraints();
        model.add_capacity_constraints();
        model.add_coverage_constraints();
        model.add_nurse_load_constraints();
        model
    }

    /// Minimize the total admission delay over all patients.
    fn add_objective(&mut self) {
        let mut objective = LinearExpr::new();
        for p in self.indices.iter_patient_indices() {
            let Some(patient) = self.patient(p) else {
                continue;
            };
            let release = patient.release_date();
            for (d, var) in self.iter_admission_vars(p) {
                let delay = (d - release).value() as f64;
                objective.add_term(var, delay);
            }
        }
        self.formulation.set_objective(objective);
    }

    /// Every patient is admitted on exactly one day, and that admission
    /// picks exactly one room.
    fn add_admission_constraints(&mut self) {
        for p in self.indices.iter_patient_indices() {
            let day_vars: Vec<VariableHandle> =
                self.iter_admission_vars(p).map(|(_, v)| v).collect();
            self.formulation
                .add_constraint(LinearConstraint::equal(LinearExpr::sum(day_vars), 1.0));

            for d in 0..self.day_count {
                let Some(z) = self.admission[p.0][d] else {
                    continue;
                };
                let mut expr = LinearExpr::new();
                for r in 0..self.indices.rooms_len() {
                    if let Some(w) = self.room_admission[p.0][r][d] {
                        expr.add_term(w, 1.0);
                    }
                }
                expr.add_term(z, -1.0);
                self.formulation
                    .add_constraint(LinearConstraint::equal(expr, 0.0));
            }
        }
    }

    /// A chosen room admission pins the whole contiguous block, and the
    /// total occupancy of a patient equals their length of stay times
    /// their admission count. Together these force one unbroken stay in
    /// one room.
    fn add_stay_constraints(&mut self) {
        for p in self.indices.iter_patient_indices() {
            let Some(patient) = self.patient(p) else {
                continue;
            };
            let los = patient.length_of_stay().value() as usize;

            for r in 0..self.indices.rooms_len() {
                for d in 0..self.day_count {
                    let Some(w) = self.room_admission[p.0][r][d] else {
                        continue;
                    };
                    // los * w - sum of the block's occupancy <= 0
                    let mut expr = LinearExpr::new().term(w, los as f64);
                    for i in 0..los {
                        if let Some(x) = self.occupancy[p.0][r][d + i] {
                            expr.add_term(x, -1.0);
                        }
                    }
                    self.formulation
                        .add_constraint(LinearConstraint::at_most(expr, 0.0));
                }
            }

            // sum of all occupancy - los * sum of admissions == 0
            let mut expr = LinearExpr::new();
            for r in 0..self.indices.rooms_len() {
                for d in 0..self.day_count {
                    if let Some(x) = self.occupancy[p.0][r][d] {
                        expr.add_term(x, 1.0);
                    }
                }
            }
            for (_, z) in self.iter_admission_vars(p) {
                expr.add_term(z, -(los as f64));
            }
            self.formulation
                .add_constraint(LinearConstraint::equal(expr, 0.0));
        }
    }

    /// Room occupancy respects bed counts and drives the occupied
    /// indicator from both sides.
    fn add_capacity_constraints(&mut self) {
        for r in self.indices.iter_room_indices() {
            let Some(room) = self.indices.room_id(r).and_then(|id| self.problem.room(id))
            else {
                continue;
            };
            let capacity = room.capacity() as f64;
            for d in 0..self.day_count {
                let o = self.occupied[r.0][d];

                // sum_p x - capacity * o <= 0
                let mut upper = LinearExpr::new();
                for p in 0..self.indices.patients_len() {
                    if let Some(x) = self.occupancy[p][r.0][d] {
                        upper.add_term(x, 1.0);
                    }
                }
                upper.add_term(o, -capacity);
                self.formulation
                    .add_constraint(LinearConstraint::at_most(upper, 0.0));

                // o - sum_p x <= 0, so an empty room is never marked occupied
                let mut lower = LinearExpr::new().term(o, 1.0);
                for p in 0..self.indices.patients_len() {
                    if let Some(x) = self.occupancy[p][r.0][d] {
                        lower.add_term(x, -1.0);
                    }
                }
                self.formulation
                    .add_constraint(LinearConstraint::at_most(lower, 0.0));
            }
        }
    }

    /// Exactly one nurse covers each occupied room-day and none covers
    /// an empty one.
    fn add_coverage_constraints(&mut self) {
        for r in 0..self.indices.rooms_len() {
            for d in 0..self.day_count {
                let mut expr = LinearExpr::new();
                for n in 0..self.indices.nurses_len() {
                    if let Some(y) = self.coverage[r][n][d] {
                        expr.add_term(y, 1.0);
                    }
                }
                expr.add_term(self.occupied[r][d], -1.0);
                self.formulation
                    .add_constraint(LinearConstraint::equal(expr, 0.0));
            }
        }
    }

    /// A nurse covers at most [`Nurse::MAX_ROOMS_PER_DAY`] rooms per day.
    fn add_nurse_load_constraints(&mut self) {
        for n in self.indices.iter_nurse_indices() {
            let Some(nurse) = self.indices.nurse_id(n).and_then(|id| self.problem.nurse(id))
            else {
                continue;
            };
            for day in nurse.iter_working_days() {
                let d = day.value() as usize;
                let mut expr = LinearExpr::new();
                for r in 0..self.indices.rooms_len() {
                    if let Some(y) = self.coverage[r][n.0][d] {
                        expr.add_term(y, 1.0);
                    }
                }
                if expr.is_empty() {
                    continue;
                }
                self.formulation.add_constraint(LinearConstraint::at_most(
                    expr,
                    Nurse::MAX_ROOMS_PER_DAY as f64,
                ));
            }
        }
    }

    #[inline]
    fn patient(&self, p: PatientIndex) -> Option<&'p Patient> {
        self.indices.patient_id(p).and_then(|id| self.problem.patient(id))
    }

    #[inline]
    pub fn problem(&self) -> &Problem {
        self.problem
    }

    #[inline]
    pub fn indices(&self) -> &SolverIndexManager {
        &self.indices
    }

    #[inline]
    pub fn formulation(&self) -> &MilpFormulation {
        &self.formulation
    }

    #[inline]
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    #[inline]
    pub fn admission_var(&self, p: PatientIndex, day: Day) -> Option<VariableHandle> {
        self.admission
            .get(p.0)?
            .get(day.value() as usize)
            .copied()
            .flatten()
    }

    #[inline]
    pub fn iter_admission_vars(
        &self,
        p: PatientIndex,
    ) -> impl Iterator<Item = (Day, VariableHandle)> + '_ {
        self.admission[p.0]
            .iter()
            .enumerate()
            .filter_map(|(d, v)| v.map(|v| (Day::new(d as i64), v)))
    }

    #[inline]
    pub fn room_admission_var(
        &self,
        p: PatientIndex,
        r: RoomIndex,
        day: Day,
    ) -> Option<VariableHandle> {
        self.room_admission
            .get(p.0)?
            .get(r.0)?
            .get(day.value() as usize)
            .copied()
            .flatten()
    }

    #[inline]
    pub fn occupancy_var(
        &self,
        p: PatientIndex,
        r: RoomIndex,
        day: Day,
    ) -> Option<VariableHandle> {
        self.occupancy
            .get(p.0)?
            .get(r.0)?
            .get(day.value() as usize)
            .copied()
            .flatten()
    }

    #[inline]
    pub fn occupied_var(&self, r: RoomIndex, day: Day) -> Option<VariableHandle> {
        self.occupied.get(r.0)?.get(day.value() as usize).copied()
    }

    #[inline]
    pub fn coverage_var(
        &self,
        r: RoomIndex,
        n: NurseIndex,
        day: Day,
    ) -> Option<VariableHandle> {
        self.coverage
            .get(r.0)?
            .get(n.0)?
            .get(day.value() as usize)
            .copied()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_alloc_model::prelude::*;

    #[inline]
    fn pid(n: u32) -> PatientIdentifier {
        PatientIdentifier::new(n)
    }
    #[inline]
    fn rid(n: u32) -> RoomIdentifier {
        RoomIdentifier::new(n)
    }
    #[inline]
    fn nid(n: u32) -> NurseIdentifier {
        NurseIdentifier::new(n)
    }
    #[inline]
    fn d(v: i64) -> Day {
        Day::new(v)
    }
    #[inline]
    fn dc(v: i64) -> DayCount {
        DayCount::new(v)
    }

    // 3-day horizon, one room, one patient with a 2-day stay due by day 2,
    // one nurse working every day.
    fn tiny() -> Problem {
        ProblemBuilder::new(dc(3))
            .with_room(Room::new(rid(1), 1))
            .with_patient(Patient::new(pid(1), d(0), d(2), dc(2), []).unwrap())
            .with_nurse(Nurse::from_days(nid(1), [d(0), d(1), d(2)]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_admission_vars_cover_exactly_the_feasible_days() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        // A 2-day stay due by day 2 can start on day 0 or 1 only.
        assert!(model.admission_var(p, d(0)).is_some());
        assert!(model.admission_var(p, d(1)).is_some());
        assert!(model.admission_var(p, d(2)).is_none());
        assert_eq!(model.iter_admission_vars(p).count(), 2);
    }

    #[test]
    fn test_no_occupancy_vars_for_incompatible_rooms() {
        let prob = ProblemBuilder::new(dc(2))
            .with_room(Room::new(rid(1), 1))
            .with_room(Room::new(rid(2), 1))
            .with_patient(Patient::new(pid(1), d(0), d(1), dc(1), [rid(2)]).unwrap())
            .build()
            .unwrap();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        assert!(model.occupancy_var(p, RoomIndex(0), d(0)).is_some());
        assert!(model.occupancy_var(p, RoomIndex(1), d(0)).is_none());
        assert!(model.room_admission_var(p, RoomIndex(1), d(0)).is_none());
    }

    #[test]
    fn test_no_coverage_vars_on_days_off() {
        let prob = ProblemBuilder::new(dc(3))
            .with_room(Room::new(rid(1), 1))
            .with_nurse(Nurse::from_days(nid(1), [d(0), d(2)]))
            .build()
            .unwrap();
        let model = AdmissionModel::build(&prob);
        let r = RoomIndex(0);
        let n = NurseIndex(0);
        assert!(model.coverage_var(r, n, d(0)).is_some());
        assert!(model.coverage_var(r, n, d(1)).is_none());
        assert!(model.coverage_var(r, n, d(2)).is_some());
    }

    #[test]
    fn test_variable_and_constraint_counts_for_tiny_instance() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        // z: 2, w: 2, x: 3, o: 3, y: 3.
        assert_eq!(model.formulation().binary_count(), 13);
        // admission 1 + room choice 2 + blocks 2 + total occupancy 1
        // + capacity 2*3 + coverage 3 + nurse load 3.
        assert_eq!(model.formulation().constraints().len(), 18);
    }

    #[test]
    fn test_objective_weights_are_admission_delays() {
        let prob = ProblemBuilder::new(dc(5))
            .with_room(Room::new(rid(1), 1))
            .with_patient(Patient::new(pid(1), d(1), d(4), dc(1), []).unwrap())
            .build()
            .unwrap();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        let weights: Vec<f64> = model
            .formulation()
            .objective()
            .iter_terms()
            .map(|(_, c)| c)
            .collect();
        // Admission on day 1 costs 0, day 2 costs 1, and so on.
        assert_eq!(weights, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(model.iter_admission_vars(p).count(), 4);
    }
}
