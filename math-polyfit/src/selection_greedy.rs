use ndarray::{Array1, ArrayView1};

use crate::argmin::rank;
use crate::objective::Objective;

/// Outcome of a parent/offspring comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Survivor {
    /// The vector that keeps the slot
    pub x: Array1<f64>,
    /// Its freshly computed fitness
    pub fitness: f64,
    /// `true` when the offspring replaced the parent
    pub replaced: bool,
    /// How many of the two evaluations were NaN or infinite
    pub non_finite: usize,
}

/// Greedy one-to-one selection.
///
/// Both fitness values are recomputed here rather than reused from earlier
/// evaluations. The offspring wins only with a strictly lower fitness; a
/// non-finite fitness ranks below every finite one.
pub fn greedy_selection(
    parent: ArrayView1<'_, f64>,
    offspring: Array1<f64>,
    objective: &Objective<'_>,
) -> Survivor {
    let parent_f = objective.fitness(parent);
    let offspring_f = objective.fitness(offspring.view());
    let non_finite = usize::from(!parent_f.is_finite()) + usize::from(!offspring_f.is_finite());

    if rank(offspring_f) < rank(parent_f) {
        Survivor {
            x: offspring,
            fitness: offspring_f,
            replaced: true,
            non_finite,
        }
    } else {
        Survivor {
            x: parent.to_owned(),
            fitness: parent_f,
            replaced: false,
            non_finite,
        }
    }
}
