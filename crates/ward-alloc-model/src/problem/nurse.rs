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

use crate::common::{Day, Identifier, IdentifierMarkerName};
use rangemap::RangeSet;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NurseIdentifierMarker;

impl IdentifierMarkerName for NurseIdentifierMarker {
    const NAME: &'static str = "NurseId";
}

pub type NurseIdentifier = Identifier<u32, NurseIdentifierMarker>;

/// A nurse with a set of working days. Stored as coalesced half-open day
/// ranges, so consecutive shifts collapse into one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nurse {
    id: NurseIdentifier,
    working_days: RangeSet<i64>,
}

impl Nurse {
    /// Most rooms one nurse can cover on a single day.
    pub const MAX_ROOMS_PER_DAY: usize = 3;

    #[inline]
    pub fn from_days<I>(id: NurseIdentifier, days: I) -> Self
    where
        I: IntoIterator<Item = Day>,
    {
        Self {
            id,
            working_days: RangeSet::from_iter(
                days.into_iter().map(|day| day.value()..day.value() + 1),
            ),
        }
    }

    #[inline]
    pub fn id(&self) -> NurseIdentifier {
        self.id
    }

    #[inline]
    pub fn is_working_on(&self, day: Day) -> bool {
        self.working_days.contains(&day.value())
    }

    #[inline]
    pub fn is_off_on(&self, day: Day) -> bool {
        !self.is_working_on(day)
    }

    #[inline]
    pub fn iter_working_days(&self) -> impl Iterator<Item = Day> + '_ {
        self.working_days
            .iter()
            .flat_map(|r| r.clone().map(Day::new))
    }

    #[inline]
    pub fn working_day_count(&self) -> usize {
        self.working_days
            .iter()
            .map(|r| (r.end - r.start) as usize)
            .sum()
    }

    #[inline]
    pub fn is_never_working(&self) -> bool {
        self.working_days.is_empty()
    }

    #[inline]
    pub fn last_working_day(&self) -> Option<Day> {
        self.working_days.last().map(|r| Day::new(r.end - 1))
    }
}

impl std::fmt::Display for Nurse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nurse({}, {} working day(s))",
            self.id,
            self.working_day_count()
        )
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Default)]
pub struct NurseContainer(HashMap<NurseIdentifier, Nurse>);

impl NurseContainer {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self(HashMap::with_capacity(cap))
    }

    #[inline]
    pub fn insert(&mut self, nurse: Nurse) -> Option<Nurse> {
        self.0.insert(nurse.id(), nurse)
    }

    #[inline]
    pub fn get(&self, id: NurseIdentifier) -> Option<&Nurse> {
        self.0.get(&id)
    }

    #[inline]
    pub fn contains_id(&self, id: NurseIdentifier) -> bool {
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
    pub fn iter(&self) -> impl Iterator<Item = &Nurse> {
        self.0.values()
    }
}

impl FromIterator<Nurse> for NurseContainer {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Nurse>>(iter: I) -> Self {
        let mut c = Self::new();
        for n in iter {
            c.insert(n);
        }
        c
    }
}
