// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors that can occur while flipping a measurement set.

use rubbl_casatables::GlueDataType;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum FlipError {
    #[error("The main table of the measurement set contains no rows!")]
    MainTableEmpty,

    #[error("The number of rows per chunk cannot be 0")]
    ZeroChunkRows,

    #[error("Column {col} is a scalar column; it cannot contain correlations to flip")]
    NotArrayColumn { col: String },

    #[error("Column {col} has {num} values on its last axis; four-correlation data is required for the feed flip")]
    NotFourCorrelations { col: String, num: usize },

    #[error("Column {col} has cells with more than two dimensions; this is not supported")]
    UnsupportedCellShape { col: String },

    #[error("Column {col} has unhandled data type {dtype:?}")]
    UnsupportedDataType { col: String, dtype: GlueDataType },

    #[error(transparent)]
    Ms(#[from] crate::ms::MsError),

    #[error(transparent)]
    Table(#[from] rubbl_casatables::TableError),

    #[error(transparent)]
    Casacore(#[from] rubbl_casatables::CasacoreError),
}
