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

pub mod err;

use crate::common::{Day, Delay};
use crate::problem::{nurse::Nurse, prob::Problem, room::RoomIdentifier};
use crate::solution::sol::Schedule;
use crate::validation::err::{
    CapacityExceededError, DelayMismatchError, ForeignStayError, IncompatibleRoomError,
    MissingStayError, NurseOffDutyError, NurseOverloadedError, ScheduleValidationError,
    SpuriousCoverageError, StayOutsideHorizonError, StayOutsideWindowError, UncoveredRoomError,
};
use std::collections::BTreeMap;

/// Checks a solved [`Schedule`] against every rule of the instance it
/// claims to solve. The solver only ever emits schedules that pass, so
/// this is the independent referee for tests and for schedules loaded
/// from elsewhere.
#[derive(Debug, Clone)]
pub struct ScheduleValidator;

impl ScheduleValidator {
    /// Every patient of the problem has exactly one stay, and every stay
    /// belongs to a patient of the problem.
    pub fn validate_stays_complete(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        for patient in problem.patients().iter() {
            if schedule.stay(patient.id()).is_none() {
                return Err(MissingStayError::new(patient.id()))?;
            }
        }
        for stay in schedule.iter_stays() {
            if !problem.patients().contains_id(stay.patient()) {
                return Err(ForeignStayError::new(stay.patient()))?;
            }
        }
        Ok(())
    }

    /// Each stay starts inside its patient's admission window, runs for
    /// the patient's full length of stay and ends within the horizon.
    pub fn validate_stay_windows(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        let end = problem.end_day();
        for stay in schedule.iter_stays() {
            let Some(patient) = problem.patient(stay.patient()) else {
                return Err(ForeignStayError::new(stay.patient()))?;
            };
            let earliest = patient.release_date();
            let latest = patient.latest_admission_date();
            if stay.admission() < earliest
                || stay.admission() > latest
                || stay.length() != patient.length_of_stay()
            {
                return Err(StayOutsideWindowError::new(
                    patient.id(),
                    stay.admission(),
                    earliest,
                    latest,
                ))?;
            }
            if stay.departure() > end || stay.admission() < Day::zero() {
                return Err(StayOutsideHorizonError::new(
                    patient.id(),
                    stay.departure(),
                    end,
                ))?;
            }
        }
        Ok(())
    }

    /// No room holds more patients than it has beds, on any day.
    pub fn validate_capacities(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        for room in problem.rooms().iter() {
            for day in problem.days() {
                let occupancy = schedule.occupancy_on(room.id(), day);
                if occupancy > room.capacity() as usize {
                    return Err(CapacityExceededError::new(
                        room.id(),
                        day,
                        occupancy,
                        room.capacity(),
                    ))?;
                }
            }
        }
        Ok(())
    }

    /// No patient lies in a room they are incompatible with.
    pub fn validate_compatibilities(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        for stay in schedule.iter_stays() {
            if let Some(patient) = problem.patient(stay.patient())
                && !patient.is_room_compatible(stay.room())
            {
                return Err(IncompatibleRoomError::new(patient.id(), stay.room()))?;
            }
        }
        Ok(())
    }

    /// Exactly one nurse per occupied room-day, and none on empty ones.
    pub fn validate_coverage(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        for room in problem.rooms().iter() {
            for day in problem.days() {
                let occupied = schedule.is_room_occupied_on(room.id(), day);
                match schedule.nurse_on(room.id(), day) {
                    None if occupied => {
                        return Err(UncoveredRoomError::new(room.id(), day))?;
                    }
                    Some(nurse) if !occupied => {
                        return Err(SpuriousCoverageError::new(room.id(), day, nurse))?;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Nurses only cover rooms on their working days, and never more than
    /// [`Nurse::MAX_ROOMS_PER_DAY`] rooms on the same day.
    pub fn validate_nurse_duties(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        let mut load: BTreeMap<(crate::problem::nurse::NurseIdentifier, Day), Vec<RoomIdentifier>> =
            BTreeMap::new();
        for (room, day, nurse) in schedule.iter_coverage() {
            if problem.nurse(nurse).is_none_or(|n| n.is_off_on(day)) {
                return Err(NurseOffDutyError::new(nurse, day))?;
            }
            load.entry((nurse, day)).or_default().push(room);
        }
        for ((nurse, day), rooms) in load {
            if rooms.len() > Nurse::MAX_ROOMS_PER_DAY {
                return Err(NurseOverloadedError::new(
                    nurse,
                    day,
                    rooms.len(),
                    Nurse::MAX_ROOMS_PER_DAY,
                ))?;
            }
        }
        Ok(())
    }

    /// The reported total delay equals the sum of per-patient delays.
    pub fn validate_total_delay(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        let computed: Delay = schedule
            .iter_stays()
            .filter_map(|stay| {
                problem
                    .patient(stay.patient())
                    .map(|p| (stay.admission() - p.release_date()).value())
            })
            .sum();
        if computed != schedule.total_delay() {
            return Err(DelayMismatchError::new(schedule.total_delay(), computed))?;
        }
        Ok(())
    }

    /// Runs every check in rule order and returns the first violation.
    pub fn validate(
        problem: &Problem,
        schedule: &Schedule,
    ) -> Result<(), ScheduleValidationError> {
        Self::validate_stays_complete(problem, schedule)?;
        Self::validate_stay_windows(problem, schedule)?;
        Self::validate_capacities(problem, schedule)?;
        Self::validate_compatibilities(problem, schedule)?;
        Self::validate_coverage(problem, schedule)?;
        Self::validate_nurse_duties(problem, schedule)?;
        Self::validate_total_delay(problem, schedule)?;
        Ok(())
    }
}
