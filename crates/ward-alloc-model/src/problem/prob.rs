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

use crate::common::{Day, DayCount};
use crate::problem::{
    err::{
        NonPositiveHorizonError, ProblemError, UnknownRoomError, WorkingDayOutOfHorizonError,
    },
    nurse::{Nurse, NurseContainer, NurseIdentifier},
    patient::{Patient, PatientContainer, PatientIdentifier},
    room::{Room, RoomContainer, RoomIdentifier},
};

/// A validated ward scheduling instance: a planning horizon of consecutive
/// days plus the rooms, patients and nurses that live on it.
///
/// Construction checks cross-entity consistency, so code holding a
/// `Problem` may assume every incompatible room reference resolves and
/// every nurse shift falls inside the horizon.
#[derive(Debug, Clone)]
pub struct Problem {
    horizon: DayCount,
    rooms: RoomContainer,
    patients: PatientContainer,
    nurses: NurseContainer,
}

impl Problem {
    pub fn new(
        horizon: DayCount,
        rooms: RoomContainer,
        patients: PatientContainer,
        nurses: NurseContainer,
    ) -> Result<Self, ProblemError> {
        if !horizon.is_positive() {
            return Err(NonPositiveHorizonError::new(horizon.value()))?;
        }
        for patient in patients.iter() {
            for room in patient.iter_incompatible_rooms() {
                if !rooms.contains_id(room) {
                    return Err(UnknownRoomError::new(patient.id(), room))?;
                }
            }
        }
        let end = Day::zero() + horizon;
        for nurse in nurses.iter() {
            if let Some(bad) = nurse
                .iter_working_days()
                .find(|&day| day < Day::zero() || day >= end)
            {
                return Err(WorkingDayOutOfHorizonError::new(nurse.id(), bad, horizon))?;
            }
        }
        Ok(Self {
            horizon,
            rooms,
            patients,
            nurses,
        })
    }

    #[inline]
    pub fn horizon(&self) -> DayCount {
        self.horizon
    }

    /// First day past the horizon, so the horizon is `[Day(0), end_day())`.
    #[inline]
    pub fn end_day(&self) -> Day {
        Day::zero() + self.horizon
    }

    #[inline]
    pub fn days(&self) -> impl Iterator<Item = Day> {
        Day::range(Day::zero(), self.end_day())
    }

    #[inline]
    pub fn rooms(&self) -> &RoomContainer {
        &self.rooms
    }

    #[inline]
    pub fn patients(&self) -> &PatientContainer {
        &self.patients
    }

    #[inline]
    pub fn nurses(&self) -> &NurseContainer {
        &self.nurses
    }

    #[inline]
    pub fn room(&self, id: RoomIdentifier) -> Option<&Room> {
        self.rooms.get(id)
    }

    #[inline]
    pub fn patient(&self, id: PatientIdentifier) -> Option<&Patient> {
        self.patients.get(id)
    }

    #[inline]
    pub fn nurse(&self, id: NurseIdentifier) -> Option<&Nurse> {
        self.nurses.get(id)
    }

    #[inline]
    pub fn total_bed_capacity(&self) -> u64 {
        self.rooms.iter().map(|r| r.capacity() as u64).sum()
    }

    /// Patients whose stay cannot start inside the horizon or whose
    /// admission window is empty. Their admission constraint can never
    /// be satisfied, so the whole instance is infeasible.
    pub fn iter_unadmittable_patients(&self) -> impl Iterator<Item = &Patient> {
        let end = self.end_day();
        self.patients.iter().filter(move |p| {
            match p.admission_window() {
                None => true,
                Some((earliest, latest)) => {
                    let earliest = earliest.max(Day::zero());
                    let latest_in_horizon = latest.min(end - p.length_of_stay());
                    earliest > latest_in_horizon || earliest >= end
                }
            }
        })
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem({} day(s), {} room(s), {} patient(s), {} nurse(s))",
            self.horizon,
            self.rooms.len(),
            self.patients.len(),
            self.nurses.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn one_room() -> RoomContainer {
        vec![Room::new(rid(1), 2)].into_iter().collect()
    }

    #[test]
    fn test_valid_problem_accessors() {
        let patients: PatientContainer =
            vec![Patient::new(pid(1), d(0), d(3), dc(2), []).unwrap()]
                .into_iter()
                .collect();
        let nurses: NurseContainer = vec![Nurse::from_days(nid(1), [d(0), d(1)])]
            .into_iter()
            .collect();
        let prob = Problem::new(dc(4), one_room(), patients, nurses).unwrap();
        assert_eq!(prob.horizon(), dc(4));
        assert_eq!(prob.end_day(), d(4));
        assert_eq!(prob.days().count(), 4);
        assert_eq!(prob.total_bed_capacity(), 2);
        assert!(prob.room(rid(1)).is_some());
        assert!(prob.patient(pid(1)).is_some());
        assert!(prob.nurse(nid(1)).is_some());
    }

    #[test]
    fn test_rejects_non_positive_horizon() {
        let err = Problem::new(
            dc(0),
            RoomContainer::new(),
            PatientContainer::new(),
            NurseContainer::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ProblemError::NonPositiveHorizon(_)));
    }

    #[test]
    fn test_rejects_unknown_incompatible_room() {
        let patients: PatientContainer =
            vec![Patient::new(pid(1), d(0), d(3), dc(1), [rid(99)]).unwrap()]
                .into_iter()
                .collect();
        let err =
            Problem::new(dc(4), one_room(), patients, NurseContainer::new()).unwrap_err();
        assert!(matches!(err, ProblemError::UnknownRoom(_)));
    }

    #[test]
    fn test_rejects_working_day_past_horizon() {
        let nurses: NurseContainer = vec![Nurse::from_days(nid(1), [d(0), d(4)])]
            .into_iter()
            .collect();
        let err =
            Problem::new(dc(4), one_room(), PatientContainer::new(), nurses).unwrap_err();
        assert!(matches!(err, ProblemError::WorkingDayOutOfHorizon(_)));
    }

    #[test]
    fn test_rejects_negative_working_day() {
        let nurses: NurseContainer = vec![Nurse::from_days(nid(1), [d(-1), d(0)])]
            .into_iter()
            .collect();
        let err =
            Problem::new(dc(4), one_room(), PatientContainer::new(), nurses).unwrap_err();
        assert!(matches!(err, ProblemError::WorkingDayOutOfHorizon(_)));
    }

    #[test]
    fn test_unadmittable_when_window_empty() {
        // A three-day stay between release 2 and due 3 can never fit.
        let patients: PatientContainer =
            vec![Patient::new(pid(1), d(2), d(3), dc(3), []).unwrap()]
                .into_iter()
                .collect();
        let prob =
            Problem::new(dc(10), one_room(), patients, NurseContainer::new()).unwrap();
        let ids: Vec<_> = prob.iter_unadmittable_patients().map(|p| p.id()).collect();
        assert_eq!(ids, vec![pid(1)]);
    }

    #[test]
    fn test_unadmittable_when_stay_overruns_horizon() {
        // The window is fine on paper but every start day would push the
        // stay past the last day of the horizon.
        let patients: PatientContainer =
            vec![Patient::new(pid(1), d(3), d(10), dc(4), []).unwrap()]
                .into_iter()
                .collect();
        let prob = Problem::new(dc(5), one_room(), patients, NurseContainer::new()).unwrap();
        assert_eq!(prob.iter_unadmittable_patients().count(), 1);
    }

    #[test]
    fn test_admittable_patient_not_flagged() {
        let patients: PatientContainer =
            vec![Patient::new(pid(1), d(0), d(4), dc(2), []).unwrap()]
                .into_iter()
                .collect();
        let prob = Problem::new(dc(5), one_room(), patients, NurseContainer::new()).unwrap();
        assert_eq!(prob.iter_unadmittable_patients().count(), 0);
    }
}
