//! Process-wide lookup tables, built lazily the first time each board size is used.

use crate::{MobilityTable, Topology, MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};
use once_cell::sync::OnceCell;

/// Everything a board of one size needs to look up, shared by every board of that size.
#[derive(Debug)]
pub struct Tables {
    pub topology: Topology,
    pub mobility: MobilityTable,
}

const NUM_SIZES: usize = MAX_EDGE_LENGTH - MIN_EDGE_LENGTH + 1;

#[allow(clippy::declare_interior_mutable_const)]
const UNINIT: OnceCell<Tables> = OnceCell::new();

static TABLES: [OnceCell<Tables>; NUM_SIZES] = [UNINIT; NUM_SIZES];

/// Get the tables for `edge_length`, building them on first use.
/// The caller must have checked that the size is supported.
pub(crate) fn tables(edge_length: usize) -> &'static Tables {
    TABLES[edge_length - MIN_EDGE_LENGTH].get_or_init(|| {
        log::debug!(
            "building lookup tables for {}x{} boards",
            edge_length,
            edge_length
        );
        Tables {
            topology: Topology::new(edge_length),
            mobility: MobilityTable::new(edge_length),
        }
    })
}
