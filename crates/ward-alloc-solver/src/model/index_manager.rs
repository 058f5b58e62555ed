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

use crate::model::index::{NurseIndex, PatientIndex, RoomIndex};
use std::collections::HashMap;
use ward_alloc_model::prelude::{NurseIdentifier, PatientIdentifier, Problem, RoomIdentifier};

/// Bidirectional mapping between model identifiers and dense solver
/// indices. Indices follow sorted identifier order, so the same problem
/// always yields the same variable layout.
#[derive(Debug, Clone)]
pub struct SolverIndexManager {
    patient_to_index: HashMap<PatientIdentifier, PatientIndex>,
    room_to_index: HashMap<RoomIdentifier, RoomIndex>,
    nurse_to_index: HashMap<NurseIdentifier, NurseIndex>,
    index_to_patient: Vec<PatientIdentifier>,
    index_to_room: Vec<RoomIdentifier>,
    index_to_nurse: Vec<NurseIdentifier>,
}

impl SolverIndexManager {
    #[inline]
    pub fn patient_index(&self, id: PatientIdentifier) -> Option<PatientIndex> {
        self.patient_to_index.get(&id).copied()
    }

    #[inline]
    pub fn room_index(&self, id: RoomIdentifier) -> Option<RoomIndex> {
        self.room_to_index.get(&id).copied()
    }

    #[inline]
    pub fn nurse_index(&self, id: NurseIdentifier) -> Option<NurseIndex> {
        self.nurse_to_index.get(&id).copied()
    }

    #[inline]
    pub fn patient_id(&self, i: PatientIndex) -> Option<PatientIdentifier> {
        self.index_to_patient.get(i.0).copied()
    }

    #[inline]
    pub fn room_id(&self, i: RoomIndex) -> Option<RoomIdentifier> {
        self.index_to_room.get(i.0).copied()
    }

    #[inline]
    pub fn nurse_id(&self, i: NurseIndex) -> Option<NurseIdentifier> {
        self.index_to_nurse.get(i.0).copied()
    }

    #[inline]
    pub fn patients_len(&self) -> usize {
        self.index_to_patient.len()
    }

    #[inline]
    pub fn rooms_len(&self) -> usize {
        self.index_to_room.len()
    }

    #[inline]
    pub fn nurses_len(&self) -> usize {
        self.index_to_nurse.len()
    }

    #[inline]
    pub fn iter_patient_indices(&self) -> impl Iterator<Item = PatientIndex> {
        (0..self.patients_len()).map(PatientIndex)
    }

    #[inline]
    pub fn iter_room_indices(&self) -> impl Iterator<Item = RoomIndex> {
        (0..self.rooms_len()).map(RoomIndex)
    }

    #[inline]
    pub fn iter_nurse_indices(&self) -> impl Iterator<Item = NurseIndex> {
        (0..self.nurses_len()).map(NurseIndex)
    }
}

impl From<&Problem> for SolverIndexManager {
    fn from(problem: &Problem) -> Self {
        let mut index_to_patient: Vec<PatientIdentifier> =
            problem.patients().iter().map(|p| p.id()).collect();
        index_to_patient.sort_unstable();

        let mut index_to_room: Vec<RoomIdentifier> =
            problem.rooms().iter().map(|r| r.id()).collect();
        index_to_room.sort_unstable();

        let mut index_to_nurse: Vec<NurseIdentifier> =
            problem.nurses().iter().map(|n| n.id()).collect();
        index_to_nurse.sort_unstable();

        let patient_to_index: HashMap<_, _> = index_to_patient
            .iter()
            .copied()
            .enumerate()
            .map(|(i, id)| (id, PatientIndex(i)))
            .collect();
        let room_to_index: HashMap<_, _> = index_to_room
            .iter()
            .copied()
            .enumerate()
            .map(|(i, id)| (id, RoomIndex(i)))
            .collect();
        let nurse_to_index: HashMap<_, _> = index_to_nurse
            .iter()
            .copied()
            .enumerate()
            .map(|(i, id)| (id, NurseIndex(i)))
            .collect();

        Self {
            patient_to_index,
            room_to_index,
            nurse_to_index,
            index_to_patient,
            index_to_room,
            index_to_nurse,
        }
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

    fn problem() -> Problem {
        ProblemBuilder::new(dc(3))
            .with_room(Room::new(rid(7), 1))
            .with_room(Room::new(rid(2), 1))
            .with_patient(Patient::new(pid(5), d(0), d(2), dc(1), []).unwrap())
            .with_patient(Patient::new(pid(3), d(0), d(2), dc(1), []).unwrap())
            .with_nurse(Nurse::from_days(nid(9), [d(0)]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_indices_follow_sorted_identifier_order() {
        let im = SolverIndexManager::from(&problem());
        assert_eq!(im.patient_index(pid(3)), Some(PatientIndex(0)));
        assert_eq!(im.patient_index(pid(5)), Some(PatientIndex(1)));
        assert_eq!(im.room_index(rid(2)), Some(RoomIndex(0)));
        assert_eq!(im.room_index(rid(7)), Some(RoomIndex(1)));
        assert_eq!(im.nurse_index(nid(9)), Some(NurseIndex(0)));
    }

    #[test]
    fn test_round_trip_and_lengths() {
        let im = SolverIndexManager::from(&problem());
        assert_eq!(im.patients_len(), 2);
        assert_eq!(im.rooms_len(), 2);
        assert_eq!(im.nurses_len(), 1);
        for i in im.iter_patient_indices() {
            let id = im.patient_id(i).unwrap();
            assert_eq!(im.patient_index(id), Some(i));
        }
        for i in im.iter_room_indices() {
            let id = im.room_id(i).unwrap();
            assert_eq!(im.room_index(id), Some(i));
        }
        assert_eq!(im.patient_id(PatientIndex(5)), None);
    }
}
