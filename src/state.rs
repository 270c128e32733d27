//! Entry/exit orientation of the Hilbert curve within each sub-cell
//!
//! At each level of recursion, the Hilbert curve enters every sub-cell at one
//! corner and leaves it through another. Knowing these two corners for every
//! sub-cell of the Gray code ordering is what later allows us to tell how
//! coordinate axes must be reflected and exchanged when descending into it.

use crate::{bits::BitVector, NumBits};
use tracing::trace;

/// Corners through which the curve enters and exits a sub-cell
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    /// Corner through which the curve enters the sub-cell
    pub entry: BitVector,

    /// Corner through which the curve leaves the sub-cell
    pub exit: BitVector,
}

/// State table: one [`State`] per Gray code index
pub type StateTable = Box<[State]>;

/// Derive the state table associated with a Gray code
///
/// Each state depends on previously computed states, including "mirror"
/// states from the first half of the table when computing the second half,
/// so the table is built in increasing index order.
///
pub fn derive(gray: &[BitVector]) -> StateTable {
    let mut states = Vec::with_capacity(gray.len());
    for idx in 0..gray.len() {
        let state = state_at(idx, gray, &states);
        states.push(state);
    }
    states.into_boxed_slice()
}

/// Compute the state of Gray code index `idx`
///
/// `previous` must contain the states of all indices below `idx`.
///
pub fn state_at(idx: usize, gray: &[BitVector], previous: &[State]) -> State {
    let num_cells = gray.len();
    debug_assert!(num_cells.is_power_of_two() && num_cells >= 2);
    assert_eq!(
        previous.len(),
        idx,
        "States must be computed in increasing index order"
    );
    let dimension = gray[0].len();
    let half = num_cells >> 1;

    match idx {
        // Curve start: enter at the first Gray code corner and move along the
        // first Gray code step
        0 => {
            let entry = gray[0].clone();
            let exit = &entry ^ &(&gray[0] ^ &gray[1]);
            State { entry, exit }
        }

        // First half: enter where the previous sub-cell left, shifted by the
        // Gray code step that led us here
        _ if idx < half => {
            let entry = &previous[idx - 1].exit ^ &(&gray[idx - 1] ^ &gray[idx]);
            let step = &gray[idx] ^ &gray[idx + 1];
            let exit = if &entry & &step == &gray[idx] & &step {
                &entry ^ &step
            } else {
                // Several exits are compatible with the entry here. Any of them
                // gives a valid curve, take the first one in axis order so that
                // the output is reproducible.
                trace!(idx, %entry, %step, "ambiguous exit, picking first candidate axis");
                first_exit_candidate(dimension, &entry, &step)
            };
            State { entry, exit }
        }

        // Midpoint: mirror of the last state of the first half, crossing over
        // the top axis
        _ if idx == half => {
            let mirror = &previous[num_cells - idx - 1];
            let entry = &mirror.exit ^ &BitVector::unit(dimension, 0);
            let exit = &entry ^ &(&mirror.entry ^ &mirror.exit);
            State { entry, exit }
        }

        // Second half: built from mirror states of the first half
        _ => {
            let mirror = &previous[num_cells - idx];
            let prev_mirror = &previous[num_cells - idx - 1];
            let entry = &previous[idx - 1].exit ^ &(&mirror.entry ^ &prev_mirror.exit);
            let exit = &entry ^ &(&prev_mirror.entry ^ &prev_mirror.exit);
            State { entry, exit }
        }
    }
}

// Exit chosen when the Gray code step does not determine it: flip the first
// axis whose unit vector differs from the step
fn first_exit_candidate(dimension: NumBits, entry: &BitVector, step: &BitVector) -> BitVector {
    (0..dimension)
        .map(|axis| BitVector::unit(dimension, axis))
        .find(|unit| unit != step)
        .map(|unit| entry ^ &unit)
        .unwrap_or_else(|| unreachable!("Ambiguous exits only arise for dimension >= 2"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gray;

    fn packed(dimension: NumBits) -> Vec<[u32; 2]> {
        derive(&gray::build(dimension))
            .iter()
            .map(|state| [state.entry.pack(), state.exit.pack()])
            .collect()
    }

    #[test]
    fn worked_tables() {
        assert_eq!(packed(1), [[0, 1], [0, 1]]);
        assert_eq!(packed(2), [[0, 1], [0, 2], [0, 2], [3, 2]]);
        assert_eq!(
            packed(3),
            [
                [0, 1],
                [0, 2],
                [0, 4],
                [5, 7],
                [3, 1],
                [0, 4],
                [6, 4],
                [5, 4]
            ]
        );
        assert_eq!(
            packed(4),
            [
                [0, 1],
                [0, 2],
                [0, 8],
                [9, 13],
                [9, 1],
                [0, 8],
                [10, 2],
                [3, 11],
                [3, 11],
                [10, 2],
                [0, 8],
                [9, 1],
                [5, 1],
                [0, 8],
                [10, 8],
                [9, 8]
            ]
        );
    }

    // In 3D, index 2 goes through the ambiguous branch: entry 000, step 001
    #[test]
    fn tie_break() {
        let codes = gray::build(3);
        let states = derive(&codes);
        let entry = &states[2].entry;
        let step = &codes[2] ^ &codes[3];
        assert_ne!(entry & &step, &codes[2] & &step);
        assert_eq!(
            first_exit_candidate(3, entry, &step),
            BitVector::unit(3, 0)
        );
        assert_eq!(states[2].exit, BitVector::unit(3, 0));
    }

    #[test]
    fn per_index() {
        let codes = gray::build(4);
        let states = derive(&codes);
        for idx in 0..codes.len() {
            assert_eq!(state_at(idx, &codes, &states[..idx]), states[idx]);
        }
    }

    #[test]
    #[should_panic]
    fn out_of_order() {
        let codes = gray::build(2);
        state_at(2, &codes, &[]);
    }

    #[test]
    fn entry_differs_from_exit() {
        for dimension in 1..=10 {
            let codes = gray::build(dimension);
            for (idx, state) in derive(&codes).iter().enumerate() {
                assert_ne!(
                    state.entry, state.exit,
                    "State {idx} of dimension {dimension} enters and exits at the same corner"
                );
                assert_eq!(state.entry.len(), dimension);
            }
        }
    }

    #[test]
    fn deterministic() {
        for dimension in 1..=8 {
            let codes = gray::build(dimension);
            assert_eq!(derive(&codes), derive(&codes));
        }
    }
}
