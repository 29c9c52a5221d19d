// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with interacting with CASA measurement sets.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum MsError {
    #[error("Supplied path {0} does not exist!")]
    BadFile(PathBuf),

    #[error("Supplied path {0} is not a directory; a measurement set was expected")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Table(#[from] rubbl_casatables::TableError),

    #[error(transparent)]
    Casacore(#[from] rubbl_casatables::CasacoreError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
