// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to interface with CASA measurement sets.
//!
//! More info: https://casa.nrao.edu/Memos/229.html

mod error;

pub(crate) use error::MsError;

use std::path::{Path, PathBuf};

use log::debug;
use rubbl_casatables::{Table, TableOpenMode};

/// The boolean column keyword recording that the feed flip has already been
/// applied to a column. An absent keyword means the flip has not been applied.
pub(crate) const FLIP_KEYWORD: &str = "FEEDFLIP_APPLIED";

/// Validate a measurement-set path from the command line: it must exist and
/// be a directory. The returned path is absolute.
pub(crate) fn validate_ms_path(ms: &Path) -> Result<PathBuf, MsError> {
    if !ms.exists() {
        return Err(MsError::BadFile(ms.to_path_buf()));
    }
    if !ms.is_dir() {
        return Err(MsError::NotADirectory(ms.to_path_buf()));
    }
    Ok(ms.canonicalize()?)
}

/// Open a measurement set table for writing. If `table` is `None`, then open
/// the main table.
pub(crate) fn open_table(ms: &Path, table: Option<&str>) -> Result<Table, MsError> {
    debug!(
        "Opening table {}/{} read-write",
        ms.display(),
        table.unwrap_or("")
    );
    let t = Table::open(
        format!("{}/{}", ms.display(), table.unwrap_or("")),
        TableOpenMode::ReadWrite,
    )?;
    Ok(t)
}

/// Has the named column already been flipped? The marker keyword may be
/// absent, in which case the column has not been flipped; this is where that
/// convention is enforced.
pub(crate) fn flip_marker(table: &mut Table, col: &str) -> Result<bool, MsError> {
    let mut keywords = table.get_column_keyword_record(col)?;
    if !keywords.keyword_names()?.iter().any(|k| k == FLIP_KEYWORD) {
        return Ok(false);
    }
    Ok(keywords.get_field::<bool>(FLIP_KEYWORD)?)
}

/// Record that the named column has been flipped.
pub(crate) fn set_flip_marker(table: &mut Table, col: &str) -> Result<(), MsError> {
    table.put_column_keyword(col, FLIP_KEYWORD, &true)?;
    Ok(())
}
