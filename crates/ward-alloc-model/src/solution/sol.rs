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

use crate::common::{Day, DayCount, Delay};
use crate::problem::{
    nurse::NurseIdentifier, patient::PatientIdentifier, room::RoomIdentifier,
};
use std::collections::BTreeMap;

/// One patient's placed stay: a contiguous block of days in a single room.
/// `departure` is exclusive, so the occupied days are `[admission, departure)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatientStay {
    patient: PatientIdentifier,
    room: RoomIdentifier,
    admission: Day,
    departure: Day,
}

impl PatientStay {
    #[inline]
    pub fn new(
        patient: PatientIdentifier,
        room: RoomIdentifier,
        admission: Day,
        length_of_stay: DayCount,
    ) -> Self {
        Self {
            patient,
            room,
            admission,
            departure: admission + length_of_stay,
        }
    }

    #[inline]
    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }

    #[inline]
    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    #[inline]
    pub fn admission(&self) -> Day {
        self.admission
    }

    #[inline]
    pub fn departure(&self) -> Day {
        self.departure
    }

    #[inline]
    pub fn length(&self) -> DayCount {
        self.departure - self.admission
    }

    #[inline]
    pub fn occupies(&self, day: Day) -> bool {
        self.admission <= day && day < self.departure
    }

    #[inline]
    pub fn iter_days(&self) -> impl Iterator<Item = Day> {
        Day::range(self.admission, self.departure)
    }
}

impl std::fmt::Display for PatientStay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stay({} in {} over [{}, {}))",
            self.patient, self.room, self.admission, self.departure
        )
    }
}

/// A complete solved schedule: one stay per patient and one nurse per
/// occupied room-day. Both maps use ordered keys, so iteration order is
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    stays: BTreeMap<PatientIdentifier, PatientStay>,
    coverage: BTreeMap<(RoomIdentifier, Day), NurseIdentifier>,
    total_delay: Delay,
}

impl Schedule {
    #[inline]
    pub fn new(
        stays: BTreeMap<PatientIdentifier, PatientStay>,
        coverage: BTreeMap<(RoomIdentifier, Day), NurseIdentifier>,
        total_delay: Delay,
    ) -> Self {
        Self {
            stays,
            coverage,
            total_delay,
        }
    }

    #[inline]
    pub fn stay(&self, patient: PatientIdentifier) -> Option<&PatientStay> {
        self.stays.get(&patient)
    }

    #[inline]
    pub fn nurse_on(&self, room: RoomIdentifier, day: Day) -> Option<NurseIdentifier> {
        self.coverage.get(&(room, day)).copied()
    }

    #[inline]
    pub fn iter_stays(&self) -> impl Iterator<Item = &PatientStay> {
        self.stays.values()
    }

    #[inline]
    pub fn iter_coverage(
        &self,
    ) -> impl Iterator<Item = (RoomIdentifier, Day, NurseIdentifier)> + '_ {
        self.coverage.iter().map(|(&(r, d), &n)| (r, d, n))
    }

    #[inline]
    pub fn admitted_count(&self) -> usize {
        self.stays.len()
    }

    #[inline]
    pub fn total_delay(&self) -> Delay {
        self.total_delay
    }

    /// Number of patients lying in `room` on `day`.
    #[inline]
    pub fn occupancy_on(&self, room: RoomIdentifier, day: Day) -> usize {
        self.stays
            .values()
            .filter(|s| s.room() == room && s.occupies(day))
            .count()
    }

    #[inline]
    pub fn is_room_occupied_on(&self, room: RoomIdentifier, day: Day) -> bool {
        self.occupancy_on(room, day) > 0
    }

    /// Days on which `nurse` covers some room.
    #[inline]
    pub fn assignments_of(
        &self,
        nurse: NurseIdentifier,
    ) -> impl Iterator<Item = (RoomIdentifier, Day)> + '_ {
        self.coverage
            .iter()
            .filter(move |&(_, &n)| n == nurse)
            .map(|(&(r, d), _)| (r, d))
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schedule({} stay(s), {} covered room-day(s), total delay {})",
            self.stays.len(),
            self.coverage.len(),
            self.total_delay
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

    #[test]
    fn test_stay_day_span() {
        let s = PatientStay::new(pid(1), rid(1), d(2), dc(3));
        assert_eq!(s.departure(), d(5));
        assert_eq!(s.length(), dc(3));
        assert!(!s.occupies(d(1)));
        assert!(s.occupies(d(2)));
        assert!(s.occupies(d(4)));
        assert!(!s.occupies(d(5)));
        let days: Vec<Day> = s.iter_days().collect();
        assert_eq!(days, vec![d(2), d(3), d(4)]);
    }

    fn sample() -> Schedule {
        let mut stays = BTreeMap::new();
        stays.insert(pid(1), PatientStay::new(pid(1), rid(1), d(0), dc(2)));
        stays.insert(pid(2), PatientStay::new(pid(2), rid(1), d(1), dc(2)));
        let mut coverage = BTreeMap::new();
        coverage.insert((rid(1), d(0)), nid(1));
        coverage.insert((rid(1), d(1)), nid(1));
        coverage.insert((rid(1), d(2)), nid(2));
        Schedule::new(stays, coverage, 1)
    }

    #[test]
    fn test_schedule_lookups() {
        let s = sample();
        assert_eq!(s.admitted_count(), 2);
        assert_eq!(s.total_delay(), 1);
        assert_eq!(s.stay(pid(2)).unwrap().admission(), d(1));
        assert_eq!(s.nurse_on(rid(1), d(2)), Some(nid(2)));
        assert_eq!(s.nurse_on(rid(2), d(0)), None);
    }

    #[test]
    fn test_occupancy_counts_overlapping_stays() {
        let s = sample();
        assert_eq!(s.occupancy_on(rid(1), d(0)), 1);
        assert_eq!(s.occupancy_on(rid(1), d(1)), 2);
        assert_eq!(s.occupancy_on(rid(1), d(2)), 1);
        assert_eq!(s.occupancy_on(rid(1), d(3)), 0);
        assert!(s.is_room_occupied_on(rid(1), d(1)));
        assert!(!s.is_room_occupied_on(rid(2), d(1)));
    }

    #[test]
    fn test_assignments_of_nurse() {
        let s = sample();
        let days: Vec<_> = s.assignments_of(nid(1)).collect();
        assert_eq!(days, vec![(rid(1), d(0)), (rid(1), d(1))]);
        let other: Vec<_> = s.assignments_of(nid(2)).collect();
        assert_eq!(other, vec![(rid(1), d(2))]);
        assert_eq!(s.assignments_of(nid(9)).count(), 0);
    }
}
