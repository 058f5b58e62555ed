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
    backend::MilpAssignment,
    err::{
        ExtractionError, MissingAdmissionError, MissingCoverageError, MissingStayRoomError,
        MultipleAdmissionsError,
    },
    formulation::AdmissionModel,
};
use std::collections::BTreeMap;
use ward_alloc_model::prelude::{Day, Delay, PatientStay, Schedule};

/// Reads a solved variable assignment back into a [`Schedule`].
pub fn extract_schedule(
    model: &AdmissionModel<'_>,
    assignment: &MilpAssignment,
) -> Result<Schedule, ExtractionError> {
    let problem = model.problem();
    let indices = model.indices();

    let mut stays = BTreeMap::new();
    let mut total_delay: Delay = 0;

    for p in indices.iter_patient_indices() {
        let Some(patient_id) = indices.patient_id(p) else {
            continue;
        };
        let Some(patient) = problem.patient(patient_id) else {
            continue;
        };

        let mut admission: Option<Day> = None;
        for (day, z) in model.iter_admission_vars(p) {
            if !assignment.is_set(z) {
                continue;
            }
            if admission.replace(day).is_some() {
                return Err(MultipleAdmissionsError::new(patient_id))?;
            }
        }
        let Some(admission) = admission else {
            return Err(MissingAdmissionError::new(patient_id))?;
        };

        let room = indices.iter_room_indices().find_map(|r| {
            model
                .room_admission_var(p, r, admission)
                .filter(|&w| assignment.is_set(w))
                .and_then(|_| indices.room_id(r))
        });
        let Some(room) = room else {
            return Err(MissingStayRoomError::new(patient_id))?;
        };

        total_delay += (admission - patient.release_date()).value();
        stays.insert(
            patient_id,
            PatientStay::new(patient_id, room, admission, patient.length_of_stay()),
        );
    }

    // Coverage keyed by the occupancy the stays actually produce, not by
    // the indicator variables, so the schedule is self-consistent.
    let mut coverage = BTreeMap::new();
    for r in indices.iter_room_indices() {
        let Some(room_id) = indices.room_id(r) else {
            continue;
        };
        for day in problem.days() {
            let occupied = stays
                .values()
                .any(|s: &PatientStay| s.room() == room_id && s.occupies(day));
            if !occupied {
                continue;
            }
            let nurse = indices.iter_nurse_indices().find_map(|n| {
                model
                    .coverage_var(r, n, day)
                    .filter(|&y| assignment.is_set(y))
                    .and_then(|_| indices.nurse_id(n))
            });
            let Some(nurse) = nurse else {
                return Err(MissingCoverageError::new(room_id, day))?;
            };
            coverage.insert((room_id, day), nurse);
        }
    }

    Ok(Schedule::new(stays, coverage, total_delay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milp::backend::VariableHandle;
    use crate::model::index::{NurseIndex, PatientIndex, RoomIndex};
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

    fn tiny() -> Problem {
        ProblemBuilder::new(dc(3))
            .with_room(Room::new(rid(1), 1))
            .with_patient(Patient::new(pid(1), d(0), d(2), dc(2), []).unwrap())
            .with_nurse(Nurse::from_days(nid(1), [d(0), d(1), d(2)]))
            .build()
            .unwrap()
    }

    fn blank_assignment(model: &AdmissionModel<'_>) -> Vec<f64> {
        vec![0.0; model.formulation().binary_count()]
    }

    fn set(values: &mut [f64], var: Option<VariableHandle>) {
        values[var.unwrap().0] = 1.0;
    }

    #[test]
    fn test_extracts_stay_and_coverage() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        let r = RoomIndex(0);
        let n = NurseIndex(0);

        let mut values = blank_assignment(&model);
        set(&mut values, model.admission_var(p, d(1)));
        set(&mut values, model.room_admission_var(p, r, d(1)));
        set(&mut values, model.occupancy_var(p, r, d(1)));
        set(&mut values, model.occupancy_var(p, r, d(2)));
        set(&mut values, model.occupied_var(r, d(1)));
        set(&mut values, model.occupied_var(r, d(2)));
        set(&mut values, model.coverage_var(r, n, d(1)));
        set(&mut values, model.coverage_var(r, n, d(2)));

        let schedule = extract_schedule(&model, &MilpAssignment::new(values)).unwrap();
        let stay = schedule.stay(pid(1)).unwrap();
        assert_eq!(stay.admission(), d(1));
        assert_eq!(stay.departure(), d(3));
        assert_eq!(stay.room(), rid(1));
        assert_eq!(schedule.total_delay(), 1);
        assert_eq!(schedule.nurse_on(rid(1), d(2)), Some(nid(1)));
        assert_eq!(schedule.nurse_on(rid(1), d(0)), None);
    }

    #[test]
    fn test_missing_admission_is_an_error() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        let values = blank_assignment(&model);
        let err = extract_schedule(&model, &MilpAssignment::new(values)).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingAdmission(_)));
    }

    #[test]
    fn test_two_admissions_is_an_error() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        let mut values = blank_assignment(&model);
        set(&mut values, model.admission_var(p, d(0)));
        set(&mut values, model.admission_var(p, d(1)));
        let err = extract_schedule(&model, &MilpAssignment::new(values)).unwrap_err();
        assert!(matches!(err, ExtractionError::MultipleAdmissions(_)));
    }

    #[test]
    fn test_admission_without_room_is_an_error() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        let mut values = blank_assignment(&model);
        set(&mut values, model.admission_var(p, d(0)));
        let err = extract_schedule(&model, &MilpAssignment::new(values)).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingStayRoom(_)));
    }

    #[test]
    fn test_occupied_day_without_nurse_is_an_error() {
        let prob = tiny();
        let model = AdmissionModel::build(&prob);
        let p = PatientIndex(0);
        let r = RoomIndex(0);
        let mut values = blank_assignment(&model);
        set(&mut values, model.admission_var(p, d(0)));
        set(&mut values, model.room_admission_var(p, r, d(0)));
        let err = extract_schedule(&model, &MilpAssignment::new(values)).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingCoverage(_)));
    }
}
