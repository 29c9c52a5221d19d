// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The feed-flip permutation itself.

use ndarray::prelude::*;

/// Rewrite every correlation tuple `(XX, XY, YX, YY)` in `chunk` to
/// `(YY, YX, XY, XX)`, in place. The trailing axis is the correlation axis
/// and the caller must have checked that its length is 4. The permutation is
/// self-inverse: applying it twice returns the original values.
pub(crate) fn apply_flip<T: Copy, D: Dimension>(mut chunk: ArrayViewMut<T, D>) {
    let corr_axis = Axis(chunk.ndim() - 1);
    for mut corrs in chunk.lanes_mut(corr_axis) {
        corrs.swap(0, 3);
        corrs.swap(1, 2);
    }
}
