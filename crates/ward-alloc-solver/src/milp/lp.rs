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

use crate::milp::backend::{
    MilpAssignment, MilpBackend, MilpFormulation, MilpOutcome, Relation, SolveStatus,
};
use good_lp::{
    Expression, ResolutionError, Solution, SolverModel, default_solver, variable, variables,
};

/// [`MilpBackend`] on top of the `good_lp` solver facade. Branch and
/// bound proves optimality, so a successful solve always reports
/// [`SolveStatus::Optimal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpBackend;

impl GoodLpBackend {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl MilpBackend for GoodLpBackend {
    fn solve(&self, formulation: &MilpFormulation) -> MilpOutcome {
        let mut vars = variables!();
        let xs: Vec<_> = (0..formulation.binary_count())
            .map(|i| vars.add(variable().binary().name(format!("b{i}"))))
            .collect();

        let objective = formulation.objective().iter_terms().fold(
            Expression::from(formulation.objective().constant_value()),
            |acc, (v, c)| acc + c * xs[v.0],
        );

        let mut prob = vars.minimise(objective).using(default_solver);
        for constraint in formulation.constraints() {
            let expr = constraint.expr().iter_terms().fold(
                Expression::from(constraint.expr().constant_value()),
                |acc, (v, c)| acc + c * xs[v.0],
            );
            match constraint.relation() {
                Relation::Equal => {
                    prob.add_constraint(expr.eq(constraint.rhs()));
                }
                Relation::LessOrEqual => {
                    prob.add_constraint(expr.leq(constraint.rhs()));
                }
            }
        }

        match prob.solve() {
            Ok(solution) => {
                let values = xs.iter().map(|x| solution.value(*x)).collect();
                let assignment = MilpAssignment::new(values);
                let objective_value = assignment.evaluate(formulation.objective());
                MilpOutcome::solved(SolveStatus::Optimal, assignment, objective_value)
            }
            Err(ResolutionError::Infeasible) => MilpOutcome::unsolved(SolveStatus::Infeasible),
            Err(ResolutionError::Unbounded) => MilpOutcome::unsolved(SolveStatus::Unbounded),
            Err(err) => {
                tracing::warn!(error = %err, "backend failed without a verdict");
                MilpOutcome::unsolved(SolveStatus::NoSolutionFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milp::backend::{LinearConstraint, LinearExpr};

    // min a + 2b s.t. a + b == 1 => a = 1, b = 0.
    #[test]
    fn test_solves_tiny_selection() {
        let mut f = MilpFormulation::new();
        let a = f.add_binary();
        let b = f.add_binary();
        f.set_objective(LinearExpr::new().term(a, 1.0).term(b, 2.0));
        f.add_constraint(LinearConstraint::equal(LinearExpr::sum([a, b]), 1.0));

        let outcome = GoodLpBackend::new().solve(&f);
        assert_eq!(outcome.status(), SolveStatus::Optimal);
        let asg = outcome.assignment().unwrap();
        assert!(asg.is_set(a));
        assert!(!asg.is_set(b));
        assert!((outcome.objective_value().unwrap() - 1.0).abs() < 1e-6);
    }

    // a == 1 and a + b <= 0 cannot both hold for binaries.
    #[test]
    fn test_reports_infeasible() {
        let mut f = MilpFormulation::new();
        let a = f.add_binary();
        let b = f.add_binary();
        f.set_objective(LinearExpr::sum([a, b]));
        f.add_constraint(LinearConstraint::equal(LinearExpr::sum([a]), 1.0));
        f.add_constraint(LinearConstraint::at_most(LinearExpr::sum([a, b]), 0.0));

        let outcome = GoodLpBackend::new().solve(&f);
        assert_eq!(outcome.status(), SolveStatus::Infeasible);
        assert!(outcome.assignment().is_none());
    }

    #[test]
    fn test_unconstrained_variable_stays_unset() {
        let mut f = MilpFormulation::new();
        let a = f.add_binary();
        f.set_objective(LinearExpr::new().term(a, 5.0));

        let outcome = GoodLpBackend::new().solve(&f);
        assert_eq!(outcome.status(), SolveStatus::Optimal);
        assert!(!outcome.assignment().unwrap().is_set(a));
        assert_eq!(outcome.objective_value(), Some(0.0));
    }
}
