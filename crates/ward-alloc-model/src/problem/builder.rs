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

use crate::common::DayCount;
use crate::problem::{
    err::ProblemError,
    nurse::{Nurse, NurseContainer},
    patient::{Patient, PatientContainer},
    prob::Problem,
    room::{Room, RoomContainer},
};

/// Incremental constructor for [`Problem`]. Entities may arrive in any
/// order; consistency is checked once at [`ProblemBuilder::build`].
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    horizon: DayCount,
    rooms: RoomContainer,
    patients: PatientContainer,
    nurses: NurseContainer,
}

impl ProblemBuilder {
    #[inline]
    pub fn new(horizon: DayCount) -> Self {
        Self {
            horizon,
            rooms: RoomContainer::new(),
            patients: PatientContainer::new(),
            nurses: NurseContainer::new(),
        }
    }

    #[inline]
    pub fn with_horizon(mut self, horizon: DayCount) -> Self {
        self.horizon = horizon;
        self
    }

    #[inline]
    pub fn add_room(&mut self, room: Room) -> &mut Self {
        self.rooms.insert(room);
        self
    }

    #[inline]
    pub fn add_patient(&mut self, patient: Patient) -> &mut Self {
        self.patients.insert(patient);
        self
    }

    #[inline]
    pub fn add_nurse(&mut self, nurse: Nurse) -> &mut Self {
        self.nurses.insert(nurse);
        self
    }

    #[inline]
    pub fn with_room(mut self, room: Room) -> Self {
        self.add_room(room);
        self
    }

    #[inline]
    pub fn with_patient(mut self, patient: Patient) -> Self {
        self.add_patient(patient);
        self
    }

    #[inline]
    pub fn with_nurse(mut self, nurse: Nurse) -> Self {
        self.add_nurse(nurse);
        self
    }

    #[inline]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    #[inline]
    pub fn nurse_count(&self) -> usize {
        self.nurses.len()
    }

    pub fn build(self) -> Result<Problem, ProblemError> {
        Problem::new(self.horizon, self.rooms, self.patients, self.nurses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Day;
    use crate::problem::{
        nurse::NurseIdentifier, patient::PatientIdentifier, room::RoomIdentifier,
    };

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

    #[test]
    fn test_build_with_chained_entities() {
        let prob = ProblemBuilder::new(dc(5))
            .with_room(Room::new(rid(1), 2))
            .with_patient(Patient::new(pid(1), d(0), d(4), dc(2), []).unwrap())
            .with_nurse(Nurse::from_days(nid(1), [d(0), d(1), d(2)]))
            .build()
            .unwrap();
        assert_eq!(prob.rooms().len(), 1);
        assert_eq!(prob.patients().len(), 1);
        assert_eq!(prob.nurses().len(), 1);
    }

    #[test]
    fn test_build_with_mutating_adds() {
        let mut b = ProblemBuilder::new(dc(3));
        b.add_room(Room::new(rid(1), 1));
        b.add_room(Room::new(rid(2), 1));
        assert_eq!(b.room_count(), 2);
        assert_eq!(b.patient_count(), 0);
        let prob = b.build().unwrap();
        assert_eq!(prob.rooms().len(), 2);
    }

    #[test]
    fn test_build_surfaces_problem_errors() {
        let err = ProblemBuilder::new(dc(2))
            .with_patient(Patient::new(pid(1), d(0), d(1), dc(1), [rid(9)]).unwrap())
            .build()
            .unwrap_err();
        assert!(matches!(err, ProblemError::UnknownRoom(_)));
    }

    #[test]
    fn test_with_horizon_overrides() {
        let prob = ProblemBuilder::new(dc(1))
            .with_horizon(dc(7))
            .build()
            .unwrap();
        assert_eq!(prob.horizon(), dc(7));
    }
}
