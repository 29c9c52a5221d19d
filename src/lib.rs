// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Flip the feed polarisation convention of a CASA measurement set in place.

For every visibility sample, the four correlation products `(XX, XY, YX, YY)`
are rewritten to `(YY, YX, XY, XX)`, and the receptor angles in the FEED
subtable are zeroed to match the new convention. Processed columns are marked
with a boolean column keyword so that re-running the tool is a no-op.
 */

pub mod cli;
mod flip;
mod ms;

pub use cli::FeedFlipError;

use crossbeam_utils::atomic::AtomicCell;

/// Are progress bars being drawn? This is only ever set at startup, from the
/// CLI arguments.
pub(crate) static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
