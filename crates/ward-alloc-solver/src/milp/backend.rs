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

//! Solver-agnostic description of a binary MILP. The formulation layer
//! only ever talks to this surface, never to a concrete LP crate.

/// Handle to one binary variable of a [`MilpFormulation`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableHandle(pub usize);

/// A linear combination of variables plus a constant offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VariableHandle, f64)>,
    constant: f64,
}

impl LinearExpr {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn term(mut self, var: VariableHandle, coefficient: f64) -> Self {
        self.terms.push((var, coefficient));
        self
    }

    #[inline]
    pub fn add_term(&mut self, var: VariableHandle, coefficient: f64) -> &mut Self {
        self.terms.push((var, coefficient));
        self
    }

    #[inline]
    pub fn constant(mut self, value: f64) -> Self {
        self.constant += value;
        self
    }

    #[inline]
    pub fn iter_terms(&self) -> impl Iterator<Item = (VariableHandle, f64)> + '_ {
        self.terms.iter().copied()
    }

    #[inline]
    pub fn constant_value(&self) -> f64 {
        self.constant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of unit-coefficient terms, the common case for counting
    /// constraints.
    #[inline]
    pub fn sum<I: IntoIterator<Item = VariableHandle>>(vars: I) -> Self {
        let mut expr = Self::new();
        for v in vars {
            expr.add_term(v, 1.0);
        }
        expr
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    LessOrEqual,
}

/// `expr <relation> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    expr: LinearExpr,
    relation: Relation,
    rhs: f64,
}

impl LinearConstraint {
    #[inline]
    pub fn equal(expr: LinearExpr, rhs: f64) -> Self {
        Self {
            expr,
            relation: Relation::Equal,
            rhs,
        }
    }

    #[inline]
    pub fn at_most(expr: LinearExpr, rhs: f64) -> Self {
        Self {
            expr,
            relation: Relation::LessOrEqual,
            rhs,
        }
    }

    #[inline]
    pub fn expr(&self) -> &LinearExpr {
        &self.expr
    }

    #[inline]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    #[inline]
    pub fn rhs(&self) -> f64 {
        self.rhs
    }
}

/// A minimization problem over binary variables.
#[derive(Debug, Clone, Default)]
pub struct MilpFormulation {
    binary_count: usize,
    objective: LinearExpr,
    constraints: Vec<LinearConstraint>,
}

impl MilpFormulation {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_binary(&mut self) -> VariableHandle {
        let handle = VariableHandle(self.binary_count);
        self.binary_count += 1;
        handle
    }

    #[inline]
    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    #[inline]
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    #[inline]
    pub fn binary_count(&self) -> usize {
        self.binary_count
    }

    #[inline]
    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    #[inline]
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// Proven optimal assignment found.
    Optimal,
    /// Feasible assignment found without a proof of optimality.
    Feasible,
    /// The constraints admit no assignment.
    Infeasible,
    /// The objective is unbounded below.
    Unbounded,
    /// The backend gave up without a verdict.
    NoSolutionFound,
}

impl SolveStatus {
    #[inline]
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Feasible => "feasible",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded => "unbounded",
            SolveStatus::NoSolutionFound => "no solution found",
        };
        write!(f, "{s}")
    }
}

/// Values of every binary variable in a solved formulation.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpAssignment {
    values: Vec<f64>,
}

impl MilpAssignment {
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn value(&self, var: VariableHandle) -> f64 {
        self.values.get(var.0).copied().unwrap_or(0.0)
    }

    /// Whether a binary variable is set, with rounding slack for
    /// floating-point relaxations.
    #[inline]
    pub fn is_set(&self, var: VariableHandle) -> bool {
        self.value(var) >= 0.5
    }

    #[inline]
    pub fn evaluate(&self, expr: &LinearExpr) -> f64 {
        expr.iter_terms()
            .map(|(v, c)| c * self.value(v))
            .sum::<f64>()
            + expr.constant_value()
    }
}

/// Result of handing a formulation to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpOutcome {
    status: SolveStatus,
    assignment: Option<MilpAssignment>,
    objective_value: Option<f64>,
}

impl MilpOutcome {
    #[inline]
    pub fn solved(status: SolveStatus, assignment: MilpAssignment, objective_value: f64) -> Self {
        Self {
            status,
            assignment: Some(assignment),
            objective_value: Some(objective_value),
        }
    }

    #[inline]
    pub fn unsolved(status: SolveStatus) -> Self {
        Self {
            status,
            assignment: None,
            objective_value: None,
        }
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn assignment(&self) -> Option<&MilpAssignment> {
        self.assignment.as_ref()
    }

    #[inline]
    pub fn objective_value(&self) -> Option<f64> {
        self.objective_value
    }
}

/// Anything that can solve a binary minimization MILP.
pub trait MilpBackend {
    fn solve(&self, formulation: &MilpFormulation) -> MilpOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_dense() {
        let mut f = MilpFormulation::new();
        let a = f.add_binary();
        let b = f.add_binary();
        assert_eq!(a, VariableHandle(0));
        assert_eq!(b, VariableHandle(1));
        assert_eq!(f.binary_count(), 2);
    }

    #[test]
    fn test_expr_sum_builds_unit_terms() {
        let vars = [VariableHandle(0), VariableHandle(2)];
        let expr = LinearExpr::sum(vars);
        let terms: Vec<_> = expr.iter_terms().collect();
        assert_eq!(terms, vec![(VariableHandle(0), 1.0), (VariableHandle(2), 1.0)]);
        assert_eq!(expr.constant_value(), 0.0);
    }

    #[test]
    fn test_constraint_accessors() {
        let c = LinearConstraint::at_most(LinearExpr::sum([VariableHandle(1)]), 3.0);
        assert_eq!(c.relation(), Relation::LessOrEqual);
        assert_eq!(c.rhs(), 3.0);
        assert!(!c.expr().is_empty());
    }

    #[test]
    fn test_assignment_rounding() {
        let asg = MilpAssignment::new(vec![0.99, 0.01, 0.5]);
        assert!(asg.is_set(VariableHandle(0)));
        assert!(!asg.is_set(VariableHandle(1)));
        assert!(asg.is_set(VariableHandle(2)));
        assert!(!asg.is_set(VariableHandle(9)));
    }

    #[test]
    fn test_status_has_solution() {
        assert!(SolveStatus::Optimal.has_solution());
        assert!(SolveStatus::Feasible.has_solution());
        assert!(!SolveStatus::Infeasible.has_solution());
        assert!(!SolveStatus::NoSolutionFound.has_solution());
    }
}
