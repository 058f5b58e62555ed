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

//! End-to-end solves of small handcrafted wards through the real
//! backend, checked by the independent schedule validator.

use ward_alloc_model::prelude::*;
use ward_alloc_solver::prelude::*;

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

fn nurse_on_all_days(id: u32, horizon: i64) -> Nurse {
    Nurse::from_days(nid(id), (0..horizon).map(d))
}

fn solve(problem: &Problem) -> SolveOutcome {
    MilpScheduler::new(GoodLpBackend::new())
        .solve(problem)
        .unwrap()
}

#[test]
fn lone_patient_is_admitted_on_release_day() {
    let prob = ProblemBuilder::new(dc(5))
        .with_room(Room::new(rid(1), 1))
        .with_patient(Patient::new(pid(1), d(1), d(4), dc(2), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 5))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();

    let stay = schedule.stay(pid(1)).unwrap();
    assert_eq!(stay.admission(), d(1));
    assert_eq!(stay.departure(), d(3));
    assert_eq!(schedule.total_delay(), 0);
    assert_eq!(schedule.nurse_on(rid(1), d(1)), Some(nid(1)));
    assert_eq!(schedule.nurse_on(rid(1), d(2)), Some(nid(1)));
    assert_eq!(schedule.nurse_on(rid(1), d(0)), None);
}

#[test]
fn late_release_shifts_admission_without_delay() {
    // Beds are free from day 0, but the patient is only released on
    // day 2; admitting right then costs nothing.
    let prob = ProblemBuilder::new(dc(5))
        .with_room(Room::new(rid(1), 1))
        .with_patient(Patient::new(pid(1), d(2), d(4), dc(2), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 5))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();

    assert_eq!(schedule.stay(pid(1)).unwrap().admission(), d(2));
    assert_eq!(schedule.total_delay(), 0);
}

#[test]
fn bed_shortage_delays_the_second_patient_minimally() {
    // One bed, two patients who both want days 0 and 1. The optimum
    // staggers them at a total delay of 2.
    let prob = ProblemBuilder::new(dc(5))
        .with_room(Room::new(rid(1), 1))
        .with_patient(Patient::new(pid(1), d(0), d(4), dc(2), []).unwrap())
        .with_patient(Patient::new(pid(2), d(0), d(4), dc(2), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 5))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();

    assert_eq!(schedule.total_delay(), 2);
    let mut admissions: Vec<Day> = schedule.iter_stays().map(|s| s.admission()).collect();
    admissions.sort();
    assert_eq!(admissions, vec![d(0), d(2)]);
}

#[test]
fn incompatible_patient_takes_the_other_room() {
    let prob = ProblemBuilder::new(dc(2))
        .with_room(Room::new(rid(1), 1))
        .with_room(Room::new(rid(2), 1))
        .with_patient(Patient::new(pid(1), d(0), d(0), dc(1), [rid(1)]).unwrap())
        .with_patient(Patient::new(pid(2), d(0), d(0), dc(1), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 2))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();

    assert_eq!(schedule.stay(pid(1)).unwrap().room(), rid(2));
    assert_eq!(schedule.stay(pid(2)).unwrap().room(), rid(1));
    assert_eq!(schedule.total_delay(), 0);
}

#[test]
fn stay_without_any_nurse_is_infeasible() {
    // The patient must occupy day 0, but nobody works that day.
    let prob = ProblemBuilder::new(dc(2))
        .with_room(Room::new(rid(1), 1))
        .with_patient(Patient::new(pid(1), d(0), d(0), dc(1), []).unwrap())
        .with_nurse(Nurse::from_days(nid(1), [d(1)]))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Infeasible);
    assert!(outcome.schedule().is_none());
}

#[test]
fn patient_with_no_compatible_room_is_infeasible() {
    let prob = ProblemBuilder::new(dc(2))
        .with_room(Room::new(rid(1), 1))
        .with_patient(Patient::new(pid(1), d(0), d(1), dc(1), [rid(1)]).unwrap())
        .with_nurse(nurse_on_all_days(1, 2))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Infeasible);
}

#[test]
fn one_nurse_cannot_cover_four_rooms() {
    let mut builder = ProblemBuilder::new(dc(1));
    for i in 1..=4 {
        builder.add_room(Room::new(rid(i), 1));
        builder.add_patient(Patient::new(pid(i), d(0), d(0), dc(1), []).unwrap());
    }
    builder.add_nurse(Nurse::from_days(nid(1), [d(0)]));
    let prob = builder.build().unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Infeasible);
}

#[test]
fn second_nurse_unlocks_the_fourth_room() {
    let mut builder = ProblemBuilder::new(dc(1));
    for i in 1..=4 {
        builder.add_room(Room::new(rid(i), 1));
        builder.add_patient(Patient::new(pid(i), d(0), d(0), dc(1), []).unwrap());
    }
    builder.add_nurse(Nurse::from_days(nid(1), [d(0)]));
    builder.add_nurse(Nurse::from_days(nid(2), [d(0)]));
    let prob = builder.build().unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();
    assert_eq!(schedule.admitted_count(), 4);
}

#[test]
fn shared_room_needs_one_nurse_not_two() {
    // Two patients in the same two-bed room still need exactly one nurse.
    let prob = ProblemBuilder::new(dc(2))
        .with_room(Room::new(rid(1), 2))
        .with_patient(Patient::new(pid(1), d(0), d(1), dc(2), []).unwrap())
        .with_patient(Patient::new(pid(2), d(0), d(1), dc(2), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 2))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();

    assert_eq!(schedule.occupancy_on(rid(1), d(0)), 2);
    assert_eq!(schedule.nurse_on(rid(1), d(0)), Some(nid(1)));
    assert_eq!(schedule.total_delay(), 0);
}

#[test]
fn overlapping_windows_fit_across_two_rooms_without_delay() {
    let prob = ProblemBuilder::new(dc(6))
        .with_room(Room::new(rid(1), 1))
        .with_room(Room::new(rid(2), 1))
        .with_patient(Patient::new(pid(1), d(0), d(5), dc(3), []).unwrap())
        .with_patient(Patient::new(pid(2), d(1), d(5), dc(2), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 6))
        .with_nurse(nurse_on_all_days(2, 6))
        .build()
        .unwrap();

    let outcome = solve(&prob);
    assert_eq!(outcome.status(), SolveStatus::Optimal);
    let schedule = outcome.schedule().unwrap();
    ScheduleValidator::validate(&prob, schedule).unwrap();

    // Two rooms mean nobody waits; the stays overlap on days 1 and 2.
    assert_eq!(schedule.total_delay(), 0);
    assert_eq!(schedule.stay(pid(1)).unwrap().admission(), d(0));
    assert_eq!(schedule.stay(pid(2)).unwrap().admission(), d(1));
    assert_ne!(
        schedule.stay(pid(1)).unwrap().room(),
        schedule.stay(pid(2)).unwrap().room()
    );
}

#[test]
fn solving_twice_yields_the_same_schedule() {
    let prob = ProblemBuilder::new(dc(4))
        .with_room(Room::new(rid(1), 1))
        .with_room(Room::new(rid(2), 2))
        .with_patient(Patient::new(pid(1), d(0), d(3), dc(2), [rid(1)]).unwrap())
        .with_patient(Patient::new(pid(2), d(0), d(3), dc(2), []).unwrap())
        .with_patient(Patient::new(pid(3), d(1), d(3), dc(1), []).unwrap())
        .with_nurse(nurse_on_all_days(1, 4))
        .with_nurse(nurse_on_all_days(2, 4))
        .build()
        .unwrap();

    let first = solve(&prob);
    let second = solve(&prob);
    assert_eq!(first.status(), SolveStatus::Optimal);
    assert_eq!(first.schedule(), second.schedule());
    assert_eq!(first.objective_value(), second.objective_value());
}
