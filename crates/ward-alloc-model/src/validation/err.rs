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

use crate::common::{Day, Delay};
use crate::problem::{
    nurse::NurseIdentifier, patient::PatientIdentifier, room::RoomIdentifier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingStayError {
    patient: PatientIdentifier,
}

impl MissingStayError {
    pub fn new(patient: PatientIdentifier) -> Self {
        Self { patient }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }
}

impl std::fmt::Display for MissingStayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Patient {} has no stay in the schedule", self.patient)
    }
}

impl std::error::Error for MissingStayError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForeignStayError {
    patient: PatientIdentifier,
}

impl ForeignStayError {
    pub fn new(patient: PatientIdentifier) -> Self {
        Self { patient }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }
}

impl std::fmt::Display for ForeignStayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schedule contains a stay for unknown patient {}",
            self.patient
        )
    }
}

impl std::error::Error for ForeignStayError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayOutsideWindowError {
    patient: PatientIdentifier,
    admission: Day,
    earliest: Day,
    latest: Day,
}

impl StayOutsideWindowError {
    pub fn new(patient: PatientIdentifier, admission: Day, earliest: Day, latest: Day) -> Self {
        Self {
            patient,
            admission,
            earliest,
            latest,
        }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }

    pub fn admission(&self) -> Day {
        self.admission
    }
}

impl std::fmt::Display for StayOutsideWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient {} admitted on {} outside the window [{}, {}]",
            self.patient, self.admission, self.earliest, self.latest
        )
    }
}

impl std::error::Error for StayOutsideWindowError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayOutsideHorizonError {
    patient: PatientIdentifier,
    departure: Day,
    end_day: Day,
}

impl StayOutsideHorizonError {
    pub fn new(patient: PatientIdentifier, departure: Day, end_day: Day) -> Self {
        Self {
            patient,
            departure,
            end_day,
        }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }
}

impl std::fmt::Display for StayOutsideHorizonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stay of patient {} runs to {} past the horizon end {}",
            self.patient, self.departure, self.end_day
        )
    }
}

impl std::error::Error for StayOutsideHorizonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityExceededError {
    room: RoomIdentifier,
    day: Day,
    occupancy: usize,
    capacity: u32,
}

impl CapacityExceededError {
    pub fn new(room: RoomIdentifier, day: Day, occupancy: usize, capacity: u32) -> Self {
        Self {
            room,
            day,
            occupancy,
            capacity,
        }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn occupancy(&self) -> usize {
        self.occupancy
    }
}

impl std::fmt::Display for CapacityExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} holds {} patient(s) on {} but has only {} bed(s)",
            self.room, self.occupancy, self.day, self.capacity
        )
    }
}

impl std::error::Error for CapacityExceededError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncompatibleRoomError {
    patient: PatientIdentifier,
    room: RoomIdentifier,
}

impl IncompatibleRoomError {
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

impl std::fmt::Display for IncompatibleRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Patient {} placed in incompatible room {}",
            self.patient, self.room
        )
    }
}

impl std::error::Error for IncompatibleRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UncoveredRoomError {
    room: RoomIdentifier,
    day: Day,
}

impl UncoveredRoomError {
    pub fn new(room: RoomIdentifier, day: Day) -> Self {
        Self { room, day }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn day(&self) -> Day {
        self.day
    }
}

impl std::fmt::Display for UncoveredRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Occupied room {} has no nurse assigned on {}",
            self.room, self.day
        )
    }
}

impl std::error::Error for UncoveredRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpuriousCoverageError {
    room: RoomIdentifier,
    day: Day,
    nurse: NurseIdentifier,
}

impl SpuriousCoverageError {
    pub fn new(room: RoomIdentifier, day: Day, nurse: NurseIdentifier) -> Self {
        Self { room, day, nurse }
    }

    pub fn room(&self) -> RoomIdentifier {
        self.room
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn nurse(&self) -> NurseIdentifier {
        self.nurse
    }
}

impl std::fmt::Display for SpuriousCoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nurse {} assigned to empty room {} on {}",
            self.nurse, self.room, self.day
        )
    }
}

impl std::error::Error for SpuriousCoverageError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NurseOffDutyError {
    nurse: NurseIdentifier,
    day: Day,
}

impl NurseOffDutyError {
    pub fn new(nurse: NurseIdentifier, day: Day) -> Self {
        Self { nurse, day }
    }

    pub fn nurse(&self) -> NurseIdentifier {
        self.nurse
    }

    pub fn day(&self) -> Day {
        self.day
    }
}

impl std::fmt::Display for NurseOffDutyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nurse {} covers a room on {} but is not working that day",
            self.nurse, self.day
        )
    }
}

impl std::error::Error for NurseOffDutyError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NurseOverloadedError {
    nurse: NurseIdentifier,
    day: Day,
    rooms: usize,
    limit: usize,
}

impl NurseOverloadedError {
    pub fn new(nurse: NurseIdentifier, day: Day, rooms: usize, limit: usize) -> Self {
        Self {
            nurse,
            day,
            rooms,
            limit,
        }
    }

    pub fn nurse(&self) -> NurseIdentifier {
        self.nurse
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn rooms(&self) -> usize {
        self.rooms
    }
}

impl std::fmt::Display for NurseOverloadedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nurse {} covers {} room(s) on {}, above the limit of {}",
            self.nurse, self.rooms, self.day, self.limit
        )
    }
}

impl std::error::Error for NurseOverloadedError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelayMismatchError {
    reported: Delay,
    computed: Delay,
}

impl DelayMismatchError {
    pub fn new(reported: Delay, computed: Delay) -> Self {
        Self { reported, computed }
    }

    pub fn reported(&self) -> Delay {
        self.reported
    }

    pub fn computed(&self) -> Delay {
        self.computed
    }
}

impl std::fmt::Display for DelayMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Schedule reports a total delay of {} but the stays sum to {}",
            self.reported, self.computed
        )
    }
}

impl std::error::Error for DelayMismatchError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScheduleValidationError {
    MissingStay(MissingStayError),
    ForeignStay(ForeignStayError),
    StayOutsideWindow(StayOutsideWindowError),
    StayOutsideHorizon(StayOutsideHorizonError),
    CapacityExceeded(CapacityExceededError),
    IncompatibleRoom(IncompatibleRoomError),
    UncoveredRoom(UncoveredRoomError),
    SpuriousCoverage(SpuriousCoverageError),
    NurseOffDuty(NurseOffDutyError),
    NurseOverloaded(NurseOverloadedError),
    DelayMismatch(DelayMismatchError),
}

impl std::fmt::Display for ScheduleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ScheduleValidationError::*;
        match self {
            MissingStay(e) => write!(f, "{}", e),
            ForeignStay(e) => write!(f, "{}", e),
            StayOutsideWindow(e) => write!(f, "{}", e),
            StayOutsideHorizon(e) => write!(f, "{}", e),
            CapacityExceeded(e) => write!(f, "{}", e),
            IncompatibleRoom(e) => write!(f, "{}", e),
            UncoveredRoom(e) => write!(f, "{}", e),
            SpuriousCoverage(e) => write!(f, "{}", e),
            NurseOffDuty(e) => write!(f, "{}", e),
            NurseOverloaded(e) => write!(f, "{}", e),
            DelayMismatch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScheduleValidationError {}

impl From<MissingStayError> for ScheduleValidationError {
    fn from(e: MissingStayError) -> Self {
        Self::MissingStay(e)
    }
}

impl From<ForeignStayError> for ScheduleValidationError {
    fn from(e: ForeignStayError) -> Self {
        Self::ForeignStay(e)
    }
}

impl From<StayOutsideWindowError> for ScheduleValidationError {
    fn from(e: StayOutsideWindowError) -> Self {
        Self::StayOutsideWindow(e)
    }
}

impl From<StayOutsideHorizonError> for ScheduleValidationError {
    fn from(e: StayOutsideHorizonError) -> Self {
        Self::StayOutsideHorizon(e)
    }
}

impl From<CapacityExceededError> for ScheduleValidationError {
    fn from(e: CapacityExceededError) -> Self {
        Self::CapacityExceeded(e)
    }
}

impl From<IncompatibleRoomError> for ScheduleValidationError {
    fn from(e: IncompatibleRoomError) -> Self {
        Self::IncompatibleRoom(e)
    }
}

impl From<UncoveredRoomError> for ScheduleValidationError {
    fn from(e: UncoveredRoomError) -> Self {
        Self::UncoveredRoom(e)
    }
}

impl From<SpuriousCoverageError> for ScheduleValidationError {
    fn from(e: SpuriousCoverageError) -> Self {
        Self::SpuriousCoverage(e)
    }
}

impl From<NurseOffDutyError> for ScheduleValidationError {
    fn from(e: NurseOffDutyError) -> Self {
        Self::NurseOffDuty(e)
    }
}

impl From<NurseOverloadedError> for ScheduleValidationError {
    fn from(e: NurseOverloadedError) -> Self {
        Self::NurseOverloaded(e)
    }
}

impl From<DelayMismatchError> for ScheduleValidationError {
    fn from(e: DelayMismatchError) -> Self {
        Self::DelayMismatch(e)
    }
}
