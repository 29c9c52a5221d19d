// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Apply the feed flip to the correlation-bearing columns of a measurement
//! set, chunk by chunk, and record a marker keyword on each column so that
//! re-running is a no-op.

mod error;
mod feed;
mod kernel;

pub(crate) use error::FlipError;

use std::ops::Range;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info, warn};
use ndarray::prelude::*;
use rubbl_casatables::{CasaScalarData, Complex, GlueDataType, Table, TableError};

use crate::{ms, PROGRESS_BARS};

/// The columns flipped when the user doesn't name any.
pub(crate) const DEFAULT_COLUMNS: [&str; 3] = ["DATA", "WEIGHT_SPECTRUM", "FLAG"];

/// The number of rows read, transformed and written back at a time.
pub(crate) const DEFAULT_CHUNK_N_ROW: usize = 10000;

/// Everything needed to flip one measurement set. Constructed from the CLI
/// arguments after they have been validated.
pub(crate) struct FeedFlipParams {
    /// The absolute path to the measurement set to modify.
    pub(crate) ms: PathBuf,

    /// The columns to flip, in the order they are processed.
    pub(crate) columns: Vec<String>,

    /// How many rows to process per chunk.
    pub(crate) chunk_n_row: usize,

    /// Report what would be done without writing anything.
    pub(crate) dry_run: bool,
}

impl FeedFlipParams {
    /// Flip every target column, then zero the receptor angles in the FEED
    /// subtable. The table handles are dropped (closed) on all exit paths.
    pub(crate) fn run(&self) -> Result<(), FlipError> {
        if self.chunk_n_row == 0 {
            return Err(FlipError::ZeroChunkRows);
        }

        let mut main_table = ms::open_table(&self.ms, None)?;
        if main_table.n_rows() == 0 {
            return Err(FlipError::MainTableEmpty);
        }

        for col in &self.columns {
            flip_column(&mut main_table, col, self.chunk_n_row, self.dry_run)?;
        }
        drop(main_table);

        feed::zero_receptor_angles(&self.ms, self.dry_run)
    }
}

/// Flip a single column, unless its marker keyword says it has already been
/// flipped. The column's element type decides which monomorphised worker
/// does the chunked work.
fn flip_column(
    main_table: &mut Table,
    col: &str,
    chunk_n_row: usize,
    dry_run: bool,
) -> Result<(), FlipError> {
    if ms::flip_marker(main_table, col)? {
        warn!("Column {col} has already been flipped - skipping.");
        return Ok(());
    }

    let col_desc = main_table.get_col_desc(col)?;
    if col_desc.is_scalar() {
        return Err(FlipError::NotArrayColumn { col: col.to_string() });
    }

    match col_desc.data_type() {
        GlueDataType::TpBool => flip_column_cells::<bool>(main_table, col, chunk_n_row, dry_run),
        GlueDataType::TpInt => flip_column_cells::<i32>(main_table, col, chunk_n_row, dry_run),
        GlueDataType::TpFloat => flip_column_cells::<f32>(main_table, col, chunk_n_row, dry_run),
        GlueDataType::TpDouble => flip_column_cells::<f64>(main_table, col, chunk_n_row, dry_run),
        GlueDataType::TpComplex => {
            flip_column_cells::<Complex<f32>>(main_table, col, chunk_n_row, dry_run)
        }
        GlueDataType::TpDComplex => {
            flip_column_cells::<Complex<f64>>(main_table, col, chunk_n_row, dry_run)
        }
        dtype => Err(FlipError::UnsupportedDataType {
            col: col.to_string(),
            dtype,
        }),
    }?;

    if dry_run {
        return Ok(());
    }

    ms::set_flip_marker(main_table, col)?;
    info!("Successfully flipped column: {col}.");
    Ok(())
}

/// The chunked read-transform-write loop for one column whose elements are
/// `T`. The cell shape is found by sampling row 0; its trailing axis must
/// have length 4.
fn flip_column_cells<T: CasaScalarData + Copy + Default>(
    main_table: &mut Table,
    col: &str,
    chunk_n_row: usize,
    dry_run: bool,
) -> Result<(), FlipError> {
    let n_rows = main_table.n_rows();

    // Sample one row to learn the cell shape. Cells are either
    // [channel][correlation] or a bare correlation vector; try the 2D read
    // first, as most columns are 2D.
    let mut probed = None;
    main_table.for_each_row_in_range(0..1, |row| {
        match row.get_cell::<Array2<T>>(col) {
            Ok(exemplar) => {
                let (n_chan, n_corr) = exemplar.dim();
                probed = Some((true, n_chan, n_corr));
            }
            Err(TableError::DimensionMismatch(_)) => match row.get_cell::<Array1<T>>(col) {
                Ok(exemplar) => probed = Some((false, 1, exemplar.len())),
                Err(TableError::DimensionMismatch(_)) => (),
                Err(e) => return Err(e),
            },
            Err(e) => return Err(e),
        }
        Ok(())
    })?;
    let (cells_are_2d, n_chan, n_corr) = match probed {
        Some(p) => p,
        None => return Err(FlipError::UnsupportedCellShape { col: col.to_string() }),
    };

    if n_corr != 4 {
        return Err(FlipError::NotFourCorrelations {
            col: col.to_string(),
            num: n_corr,
        });
    }

    let n_chunks = (n_rows + chunk_n_row as u64 - 1) / chunk_n_row as u64;
    debug!("Column {col}: {n_rows} rows, {n_chan} channels, {n_chunks} chunks");

    if dry_run {
        info!("Column {col} would be flipped ({n_rows} rows in {n_chunks} chunks).");
        return Ok(());
    }

    // One buffer for the whole column; the tail chunk uses a slice of it.
    let buf_n_row = (chunk_n_row as u64).min(n_rows) as usize;
    let mut chunk = Array3::from_elem((buf_n_row, n_chan, 4), T::default());

    let progress = chunk_progress_bar(n_chunks, col);
    for rows in chunk_ranges(n_rows, chunk_n_row) {
        let n_chunk_rows = (rows.end - rows.start) as usize;
        let mut used = chunk.slice_mut(s![..n_chunk_rows, .., ..]);

        let mut i_row = 0;
        main_table.for_each_row_in_range(rows.clone(), |row| {
            if cells_are_2d {
                let cell: Array2<T> = row.get_cell(col)?;
                used.index_axis_mut(Axis(0), i_row).assign(&cell);
            } else {
                let cell: Array1<T> = row.get_cell(col)?;
                used.slice_mut(s![i_row, 0, ..]).assign(&cell);
            }
            i_row += 1;
            Ok(())
        })?;

        kernel::apply_flip(used.view_mut());

        for (i_row, row) in rows.enumerate() {
            if cells_are_2d {
                main_table.put_cell(col, row, &used.index_axis(Axis(0), i_row).to_owned())?;
            } else {
                main_table.put_cell(col, row, &used.slice(s![i_row, 0, ..]).to_owned())?;
            }
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(())
}

/// The start-row ranges of each chunk: every chunk covers `chunk_n_row` rows
/// except possibly the last.
fn chunk_ranges(n_rows: u64, chunk_n_row: usize) -> impl Iterator<Item = Range<u64>> {
    let chunk_n_row = chunk_n_row as u64;
    (0..n_rows)
        .step_by(chunk_n_row as usize)
        .map(move |start| start..(start + chunk_n_row).min(n_rows))
}

fn chunk_progress_bar(n_chunks: u64, col: &str) -> ProgressBar {
    ProgressBar::with_draw_target(
        Some(n_chunks),
        if PROGRESS_BARS.load() {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        },
    )
    .with_style(
        ProgressStyle::default_bar()
            .template("{msg:24}: [{wide_bar:.cyan}] {pos:4}/{len:4} chunks ({elapsed_precise}<{eta_precise})")
            .unwrap()
            .progress_chars("=> "),
    )
    .with_message(format!("Flipping {col}"))
}
