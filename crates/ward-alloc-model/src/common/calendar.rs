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

use num_traits::{CheckedAdd, CheckedSub, Zero};
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub, SubAssign},
};

/// Objective cost scalar: total admission delay in days.
pub type Delay = i64;

/// A calendar day of the planning horizon, indexed from zero.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(i64);

impl Day {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub fn checked_add(self, count: DayCount) -> Option<Self> {
        self.0.checked_add(count.0).map(Self)
    }

    #[inline]
    pub fn checked_sub(self, count: DayCount) -> Option<Self> {
        self.0.checked_sub(count.0).map(Self)
    }

    /// Iterates the half-open day range `[start, end)`.
    #[inline]
    pub fn range(start: Day, end: Day) -> impl Iterator<Item = Day> {
        (start.0..end.0).map(Day::new)
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day({})", self.0)
    }
}

impl Add<DayCount> for Day {
    type Output = Day;

    #[inline]
    fn add(self, rhs: DayCount) -> Self::Output {
        Day(self.0.checked_add(rhs.0).expect("error in Day + DayCount"))
    }
}

impl AddAssign<DayCount> for Day {
    fn add_assign(&mut self, rhs: DayCount) {
        self.0 = self.0.checked_add(rhs.0).expect("error in Day += DayCount");
    }
}

impl Sub<DayCount> for Day {
    type Output = Day;

    #[inline]
    fn sub(self, rhs: DayCount) -> Self::Output {
        Day(self.0.checked_sub(rhs.0).expect("error in Day - DayCount"))
    }
}

impl SubAssign<DayCount> for Day {
    fn sub_assign(&mut self, rhs: DayCount) {
        self.0 = self.0.checked_sub(rhs.0).expect("error in Day -= DayCount");
    }
}

impl Sub<Day> for Day {
    type Output = DayCount;

    #[inline]
    fn sub(self, rhs: Day) -> Self::Output {
        DayCount(self.0.checked_sub(rhs.0).expect("error in Day - Day"))
    }
}

/// A whole number of days: lengths of stay and admission delays.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayCount(i64);

impl DayCount {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DayCount({})", self.0)
    }
}

impl From<i64> for DayCount {
    #[inline]
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl Add for DayCount {
    type Output = DayCount;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DayCount(
            self.0
                .checked_add(rhs.0)
                .expect("error in DayCount + DayCount"),
        )
    }
}

impl Sub for DayCount {
    type Output = DayCount;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        DayCount(
            self.0
                .checked_sub(rhs.0)
                .expect("error in DayCount - DayCount"),
        )
    }
}

impl Mul<i64> for DayCount {
    type Output = DayCount;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        DayCount(self.0.checked_mul(rhs).expect("error in DayCount * scalar"))
    }
}

impl Zero for DayCount {
    #[inline]
    fn zero() -> Self {
        DayCount(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl CheckedAdd for DayCount {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(DayCount)
    }
}

impl CheckedSub for DayCount {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(DayCount)
    }
}

impl Sum for DayCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}
