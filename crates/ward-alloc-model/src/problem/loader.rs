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
    builder::ProblemBuilder,
    err::{InstanceLoadError, NegativeCapacityError},
    nurse::{Nurse, NurseIdentifier},
    patient::{Patient, PatientIdentifier},
    prob::Problem,
    room::{Room, RoomIdentifier},
};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};

#[derive(Debug, Clone, Deserialize)]
struct RawInstance {
    days: i64,
    rooms: Vec<RawRoom>,
    patients: Vec<RawPatient>,
    nurses: Vec<RawNurse>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawRoom {
    id: u32,
    capacity: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPatient {
    id: u32,
    release_date: i64,
    due_date: i64,
    length_of_stay: i64,
    #[serde(default)]
    incompatible_room_ids: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawNurse {
    id: u32,
    #[serde(default)]
    working_shifts: Vec<RawShift>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawShift {
    day: i64,
}

/// Reads a JSON ward instance into a validated [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    clip_working_days: bool,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self {
            clip_working_days: false,
        }
    }
}

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Silently drop nurse shifts outside the horizon instead of failing.
    #[inline]
    pub fn clip_working_days(mut self, yes: bool) -> Self {
        self.clip_working_days = yes;
        self
    }

    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem, InstanceLoadError> {
        let raw: RawInstance = serde_json::from_reader(BufReader::new(r))?;
        self.assemble(raw)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem, InstanceLoadError> {
        let file = File::open(path)?;
        self.from_reader(file)
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem, InstanceLoadError> {
        self.from_reader(s.as_bytes())
    }

    fn assemble(&self, raw: RawInstance) -> Result<Problem, InstanceLoadError> {
        tracing::debug!(
            days = raw.days,
            rooms = raw.rooms.len(),
            patients = raw.patients.len(),
            nurses = raw.nurses.len(),
            "assembling ward instance"
        );
        let mut builder = ProblemBuilder::new(DayCount::new(raw.days));

        for room in raw.rooms {
            let id = RoomIdentifier::new(room.id);
            if room.capacity < 0 {
                return Err(NegativeCapacityError::new(id, room.capacity))?;
            }
            builder.add_room(Room::new(id, room.capacity as u32));
        }

        for patient in raw.patients {
            builder.add_patient(Patient::new(
                PatientIdentifier::new(patient.id),
                Day::new(patient.release_date),
                Day::new(patient.due_date),
                DayCount::new(patient.length_of_stay),
                patient
                    .incompatible_room_ids
                    .into_iter()
                    .map(RoomIdentifier::new),
            )?);
        }

        for nurse in raw.nurses {
            let shifts = nurse.working_shifts.into_iter().map(|s| Day::new(s.day));
            let days: Vec<Day> = if self.clip_working_days {
                shifts
                    .filter(|d| d.value() >= 0 && d.value() < raw.days)
                    .collect()
            } else {
                shifts.collect()
            };
            builder.add_nurse(Nurse::from_days(NurseIdentifier::new(nurse.id), days));
        }

        Ok(builder.build()?)
    }
}
