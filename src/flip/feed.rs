// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Normalise the FEED subtable after a flip: all receptor angles become zero
//! under the new convention.

use std::path::Path;

use log::info;

use super::FlipError;
use crate::ms;

const RECEPTOR_ANGLE_COL: &str = "RECEPTOR_ANGLE";

/// Overwrite every receptor angle in the FEED subtable with 0 and mark the
/// column as flipped. This runs unconditionally; zeroing already-zeroed
/// angles changes nothing, so no marker check is needed beforehand.
pub(super) fn zero_receptor_angles(ms: &Path, dry_run: bool) -> Result<(), FlipError> {
    let mut feed_table = ms::open_table(ms, Some("FEED"))?;
    let n_rows = feed_table.n_rows();

    if dry_run {
        info!("{n_rows} rows of receptor angles in the FEED table would be zeroed.");
        return Ok(());
    }

    for row in 0..n_rows {
        let angles: Vec<f64> = feed_table.get_cell_as_vec(RECEPTOR_ANGLE_COL, row)?;
        feed_table.put_cell(RECEPTOR_ANGLE_COL, row, &vec![0.0; angles.len()])?;
    }
    ms::set_flip_marker(&mut feed_table, RECEPTOR_ANGLE_COL)?;

    info!("Zeroed the receptor angles of {n_rows} feeds.");
    Ok(())
}
