//! Hand-tuned positional weights, one matrix per board size.
//!
//! Corners are worth the most; the cells next to them give the corner away and
//! are penalised. A black disc adds its cell's weight and a white disc subtracts it.

type Weights = &'static [&'static [i32]];

const WEIGHTS_3: Weights = &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]];

const WEIGHTS_4: Weights = &[
    &[10, -5, -5, 10],
    &[-5, -1, -1, -5],
    &[-5, -1, -1, -5],
    &[10, -5, -5, 10],
];

const WEIGHTS_5: Weights = &[
    &[30, -12, 0, -12, 30],
    &[-12, -15, -3, -15, -12],
    &[0, -3, 0, -3, 0],
    &[-12, -15, -3, -15, -12],
    &[30, -12, 0, -12, 30],
];

const WEIGHTS_6: Weights = &[
    &[30, -12, 0, 0, -12, 30],
    &[-12, -15, -3, -3, -15, -12],
    &[0, -3, -1, -1, -3, 0],
    &[0, -3, -1, -1, -3, 0],
    &[-12, -15, -3, -3, -15, -12],
    &[30, -12, 0, 0, -12, 30],
];

const WEIGHTS_7: Weights = &[
    &[30, -12, 0, -1, 0, -12, 30],
    &[-12, -15, -3, -3, -3, -15, -12],
    &[0, -3, 0, -1, 0, -3, 0],
    &[-1, -3, -1, -1, -1, -3, -1],
    &[0, -3, 0, -1, 0, -3, 0],
    &[-12, -15, -3, -3, -3, -15, -12],
    &[30, -12, 0, -1, 0, -12, 30],
];

const WEIGHTS_8: Weights = &[
    &[30, -12, 0, -1, -1, 0, -12, 30],
    &[-12, -15, -3, -3, -3, -3, -15, -12],
    &[0, -3, 0, -1, -1, 0, -3, 0],
    &[-1, -3, -1, -1, -1, -1, -3, -1],
    &[-1, -3, -1, -1, -1, -1, -3, -1],
    &[0, -3, 0, -1, -1, 0, -3, 0],
    &[-12, -15, -3, -3, -3, -3, -15, -12],
    &[30, -12, 0, -1, -1, 0, -12, 30],
];

/// The weight matrix for a board size, or `None` if the size is unsupported.
pub(crate) fn weights(edge_length: usize) -> Option<Weights> {
    match edge_length {
        3 => Some(WEIGHTS_3),
        4 => Some(WEIGHTS_4),
        5 => Some(WEIGHTS_5),
        6 => Some(WEIGHTS_6),
        7 => Some(WEIGHTS_7),
        8 => Some(WEIGHTS_8),
        _ => None,
    }
}
