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
use crate::problem::{nurse::NurseIdentifier, patient::PatientIdentifier, room::RoomIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveLengthOfStayError {
    patient: PatientIdentifier,
    length_of_stay: DayCount,
}

impl NonPositiveLengthOfStayError {
    pub fn new(patient: PatientIdentifier, length_of_stay: DayCount) -> Self {
        Self {
            patient,
            length_of_stay,
        }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }

    pub fn length_of_stay(&self) -> DayCount {
        self.length_of_stay
    }
}

impl std::fmt::Display for NonPositiveLengthOfStayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Length of stay for patient {} must be at least one day, got {}",
            self.patient, self.length_of_stay
        )
    }
}

impl std::error::Error for NonPositiveLengthOfStayError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversedStayWindowError {
    patient: PatientIdentifier,
    release_date: Day,
    due_date: Day,
}

impl ReversedStayWindowError {
    pub fn new(patient: PatientIdentifier, release_date: Day, due_date: Day) -> Self {
        Self {
            patient,
            release_date,
            due_date,
        }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }

    pub fn release_date(&self) -> Day {
        self.release_date
    }

    pub fn due_date(&self) -> Day {
        self.due_date
    }
}

impl std::fmt::Display for ReversedStayWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient {} has due date {} before release date {}",
            self.patient, self.due_date, self.release_date
        )
    }
}

impl std::error::Error for ReversedStayWindowError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatientError {
    NonPositiveLengthOfStay(NonPositiveLengthOfStayError),
    ReversedStayWindow(ReversedStayWindowError),
}

impl std::fmt::Display for PatientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatientError::NonPositiveLengthOfStay(e) => write!(f, "{}", e),
            PatientError::ReversedStayWindow(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PatientError {}

impl From<NonPositiveLengthOfStayError> for PatientError {
    fn from(err: NonPositiveLengthOfStayError) -> Self {
        PatientError::NonPositiveLengthOfStay(err)
    }
}

impl From<ReversedStayWindowError> for PatientError {
    fn from(err: ReversedStayWindowError) -> Self {
        PatientError::ReversedStayWindow(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownRoomError {
    patient: PatientIdentifier,
    room: RoomIdentifier,
}

impl UnknownRoomError {
    pub fn new(patient: PatientIdentifier, room: RoomIdentifier) -> Self {
        Self { patient, room }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }
}

impl std::fmt::Display for UnknownRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient {} lists unknown room {} as incompatible",
            self.patient, self.room
        )
    }
}

impl std::error::Error for UnknownRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingDayOutOfHorizonError {
    nurse: NurseIdentifier,
    day: Day,
    horizon: DayCount,
}

impl WorkingDayOutOfHorizonError {
    pub fn new(nurse: NurseIdentifier, day: Day, horizon: DayCount) -> Self {
        Self {
            nurse,
            day,
            horizon,
        }
    }

    pub fn nurse(&self) -> NurseIdentifier {
        self.nurse
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn horizon(&self) -> DayCount {
        self.horizon
    }
}

impl std::fmt::Display for WorkingDayOutOfHorizonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nurse {} has working day {} outside the horizon of {} day(s)",
            self.nurse, self.day, self.horizon
        )
    }
}

impl std::error::Error for WorkingDayOutOfHorizonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveHorizonError {
    days: i64,
}

impl NonPositiveHorizonError {
    pub fn new(days: i64) -> Self {
        Self { days }
    }

    pub fn days(&self) -> i64 {
        self.days
    }
}

impl std::fmt::Display for NonPositiveHorizonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Planning horizon must be positive, got {}", self.days)
    }
}

impl std::error::Error for NonPositiveHorizonError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError {
    NonPositiveHorizon(NonPositiveHorizonError),
    UnknownRoom(UnknownRoomError),
    WorkingDayOutOfHorizon(WorkingDayOutOfHorizonError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::NonPositiveHorizon(e) => write!(f, "{}", e),
            ProblemError::UnknownRoom(e) => write!(f, "{}", e),
            ProblemError::WorkingDayOutOfHorizon(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<NonPositiveHorizonError> for ProblemError {
    fn from(err: NonPositiveHorizonError) -> Self {
        ProblemError::NonPositiveHorizon(err)
    }
}

impl From<UnknownRoomError> for ProblemError {
    fn from(err: UnknownRoomError) -> Self {
        ProblemError::UnknownRoom(err)
    }
}

impl From<WorkingDayOutOfHorizonError> for ProblemError {
    fn from(err: WorkingDayOutOfHorizonError) -> Self {
        ProblemError::WorkingDayOutOfHorizon(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeCapacityError {
    room: RoomIdentifier,
    capacity: i64,
}

impl NegativeCapacityError {
    pub fn new(room: RoomIdentifier, capacity: i64) -> Self {
        Self { room, capacity }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }
}

impl std::fmt::Display for NegativeCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} has negative capacity {}",
            self.room, self.capacity
        )
    }
}

impl std::error::Error for NegativeCapacityError {}

#[derive(Debug)]
pub enum InstanceLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NegativeCapacity(NegativeCapacityError),
    Patient(PatientError),
    Problem(ProblemError),
}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for InstanceLoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<NegativeCapacityError> for InstanceLoadError {
    fn from(e: NegativeCapacityError) -> Self {
        Self::NegativeCapacity(e)
    }
}

impl From<PatientError> for InstanceLoadError {
    fn from(e: PatientError) -> Self {
        Self::Patient(e)
    }
}

impl From<ProblemError> for InstanceLoadError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InstanceLoadError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            Json(e) => write!(f, "JSON error: {e}"),
            NegativeCapacity(e) => write!(f, "instance error: {e}"),
            Patient(e) => write!(f, "patient error: {e}"),
            Problem(e) => write!(f, "problem error: {e}"),
        }
    }
}

impl std::error::Error for InstanceLoadError {}
