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

use ward_alloc_model::prelude::{Day, PatientIdentifier, RoomIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingAdmissionError {
    patient: PatientIdentifier,
}

impl MissingAdmissionError {
    pub fn new(patient: PatientIdentifier) -> Self {
        Self { patient }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }
}

impl std::fmt::Display for MissingAdmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment sets no admission day for patient {}",
            self.patient
        )
    }
}

impl std::error::Error for MissingAdmissionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultipleAdmissionsError {
    patient: PatientIdentifier,
}

impl MultipleAdmissionsError {
    pub fn new(patient: PatientIdentifier) -> Self {
        Self { patient }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }
}

impl std::fmt::Display for MultipleAdmissionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment sets more than one admission day for patient {}",
            self.patient
        )
    }
}

impl std::error::Error for MultipleAdmissionsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingStayRoomError {
    patient: PatientIdentifier,
}

impl MissingStayRoomError {
    pub fn new(patient: PatientIdentifier) -> Self {
        Self { patient }
    }

    pub fn patient(&self) -> PatientIdentifier {
        self.patient
    }
}

impl std::fmt::Display for MissingStayRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment admits patient {} without choosing a room",
            self.patient
        )
    }
}

impl std::error::Error for MissingStayRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingCoverageError {
    room: RoomIdentifier,
    day: Day,
}

impl MissingCoverageError {
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

impl std::fmt::Display for MissingCoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment leaves occupied room {} without a nurse on {}",
            self.room, self.day
        )
    }
}

impl std::error::Error for MissingCoverageError {}

/// The backend returned an assignment the schedule cannot be read from.
/// With a correct formulation this never happens; it guards against
/// backend bugs and numerical junk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionError {
    MissingAdmission(MissingAdmissionError),
    MultipleAdmissions(MultipleAdmissionsError),
    MissingStayRoom(MissingStayRoomError),
    MissingCoverage(MissingCoverageError),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::MissingAdmission(e) => write!(f, "{}", e),
            ExtractionError::MultipleAdmissions(e) => write!(f, "{}", e),
            ExtractionError::MissingStayRoom(e) => write!(f, "{}", e),
            ExtractionError::MissingCoverage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExtractionError {}

impl From<MissingAdmissionError> for ExtractionError {
    fn from(e: MissingAdmissionError) -> Self {
        Self::MissingAdmission(e)
    }
}

impl From<MultipleAdmissionsError> for ExtractionError {
    fn from(e: MultipleAdmissionsError) -> Self {
        Self::MultipleAdmissions(e)
    }
}

impl From<MissingStayRoomError> for ExtractionError {
    fn from(e: MissingStayRoomError) -> Self {
        Self::MissingStayRoom(e)
    }
}

impl From<MissingCoverageError> for ExtractionError {
    fn from(e: MissingCoverageError) -> Self {
        Self::MissingCoverage(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverError {
    Extraction(ExtractionError),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::Extraction(e) => write!(f, "extraction error: {}", e),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<ExtractionError> for SolverError {
    fn from(e: ExtractionError) -> Self {
        Self::Extraction(e)
    }
}
