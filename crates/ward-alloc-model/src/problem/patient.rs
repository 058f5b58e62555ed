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

use crate::common::{Day, DayCount, Identifier, IdentifierMarkerName};
use crate::problem::{
    err::{NonPositiveLengthOfStayError, PatientError, ReversedStayWindowError},
    room::RoomIdentifier,
};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientIdentifierMarker;

impl IdentifierMarkerName for PatientIdentifierMarker {
    const NAME: &'static str = "PatientId";
}

pub type PatientIdentifier = Identifier<u32, PatientIdentifierMarker>;

/// A patient awaiting admission for a contiguous stay of a fixed number
/// of days, somewhere between their release date and their due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    id: PatientIdentifier,
    release_date: Day,
    due_date: Day,
    length_of_stay: DayCount,
    incompatible_rooms: BTreeSet<RoomIdentifier>,
}

impl Patient {
    pub fn new<I>(
        id: PatientIdentifier,
        release_date: Day,
        due_date: Day,
        length_of_stay: DayCount,
        incompatible_rooms: I,
    ) -> Result<Self, PatientError>
    where
        I: IntoIterator<Item = RoomIdentifier>,
    {
        if !length_of_stay.is_positive() {
            return Err(NonPositiveLengthOfStayError::new(id, length_of_stay))?;
        }
        if due_date < release_date {
            return Err(ReversedStayWindowError::new(id, release_date, due_date))?;
        }
        Ok(Self {
            id,
            release_date,
            due_date,
            length_of_stay,
            incompatible_rooms: incompatible_rooms.into_iter().collect(),
        })
    }

    #[inline]
    pub fn id(&self) -> PatientIdentifier {
        self.id
    }

    #[inline]
    pub fn release_date(&self) -> Day {
        self.release_date
    }

    #[inline]
    pub fn due_date(&self) -> Day {
        self.due_date
    }

    #[inline]
    pub fn length_of_stay(&self) -> DayCount {
        self.length_of_stay
    }

    /// Latest day an admission may start so that the stay still concludes
    /// by the due date. Earlier than the release date when the window is
    /// too short to fit the stay.
    #[inline]
    pub fn latest_admission_date(&self) -> Day {
        self.due_date - self.length_of_stay + DayCount::new(1)
    }

    /// The inclusive admission window `[release_date, latest_admission_date]`,
    /// or `None` when no admission day can accommodate the full stay.
    #[inline]
    pub fn admission_window(&self) -> Option<(Day, Day)> {
        let latest = self.latest_admission_date();
        (self.release_date <= latest).then_some((self.release_date, latest))
    }

    #[inline]
    pub fn is_admittable(&self) -> bool {
        self.admission_window().is_some()
    }

    #[inline]
    pub fn is_room_compatible(&self, room: RoomIdentifier) -> bool {
        !self.incompatible_rooms.contains(&room)
    }

    #[inline]
    pub fn iter_incompatible_rooms(&self) -> impl Iterator<Item = RoomIdentifier> + '_ {
        self.incompatible_rooms.iter().copied()
    }

    #[inline]
    pub fn incompatible_rooms(&self) -> &BTreeSet<RoomIdentifier> {
        &self.incompatible_rooms
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient({}, window [{}, {}], stay {})",
            self.id, self.release_date, self.due_date, self.length_of_stay
        )
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Default)]
pub struct PatientContainer(HashMap<PatientIdentifier, Patient>);

impl PatientContainer {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    #[inline]
    pub fn insert(&mut self, patient: Patient) -> Option<Patient> {
        self.0.insert(patient.id(), patient)
    }

    #[inline]
    pub fn get(&self, id: PatientIdentifier) -> Option<&Patient> {
        self.0.get(&id)
    }

    #[inline]
    pub fn contains_id(&self, id: PatientIdentifier) -> bool {
        self.0.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.0.values()
    }
}

impl FromIterator<Patient> for PatientContainer {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        let mut c = Self::new();
        for p in iter {
            c.insert(p);
        }
        c
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
    fn d(v: i64) -> Day {
        Day::new(v)
    }
    #[inline]
    fn dc(v: i64) -> DayCount {
        DayCount::new(v)
    }

    fn patient(release: i64, due: i64, los: i64) -> Patient {
        Patient::new(pid(1), d(release), d(due), dc(los), []).unwrap()
    }

    #[test]
    fn test_admission_window_spans_release_to_latest_start() {
        let p = patient(0, 4, 2);
        assert_eq!(p.latest_admission_date(), d(3));
        assert_eq!(p.admission_window(), Some((d(0), d(3))));
        assert!(p.is_admittable());
    }

    #[test]
    fn test_window_of_exactly_one_day() {
        // Stay of 5 days into a 5-day window leaves a single admission day.
        let p = patient(2, 6, 5);
        assert_eq!(p.admission_window(), Some((d(2), d(2))));
    }

    #[test]
    fn test_empty_window_is_unadmittable() {
        // Due date too close to the release date to fit the stay.
        let p = patient(3, 4, 3);
        assert_eq!(p.admission_window(), None);
        assert!(!p.is_admittable());
    }

    #[test]
    fn test_rejects_non_positive_length_of_stay() {
        let err = Patient::new(pid(1), d(0), d(4), dc(0), []).unwrap_err();
        assert!(matches!(err, PatientError::NonPositiveLengthOfStay(_)));
    }

    #[test]
    fn test_rejects_due_before_release() {
        let err = Patient::new(pid(1), d(5), d(4), dc(1), []).unwrap_err();
        assert!(matches!(err, PatientError::ReversedStayWindow(_)));
    }

    #[test]
    fn test_room_compatibility() {
        let p = Patient::new(pid(1), d(0), d(4), dc(2), [rid(7), rid(9)]).unwrap();
        assert!(!p.is_room_compatible(rid(7)));
        assert!(!p.is_room_compatible(rid(9)));
        assert!(p.is_room_compatible(rid(1)));
        let listed: Vec<_> = p.iter_incompatible_rooms().collect();
        assert_eq!(listed, vec![rid(7), rid(9)]);
    }

    #[test]
    fn test_container_dedups_by_id() {
        let mut c = PatientContainer::new();
        c.insert(patient(0, 4, 2));
        c.insert(patient(1, 4, 2));
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(pid(1)).unwrap().release_date(), d(1));
    }
}
