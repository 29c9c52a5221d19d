// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. Only 2 things should be public in this
//! module: `FeedFlipArgs` and `FeedFlipError`.

mod error;

pub use error::FeedFlipError;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::{
    flip::{FeedFlipParams, DEFAULT_CHUNK_N_ROW, DEFAULT_COLUMNS},
    ms, PROGRESS_BARS,
};

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Flip the feed polarisation convention of a CASA measurement set in place.

Every (XX, XY, YX, YY) correlation tuple of the targeted columns is rewritten
to (YY, YX, XY, XX), and the receptor angles in the FEED subtable are zeroed.
Flipped columns are marked with a keyword; re-running this tool skips them."
)]
#[clap(infer_long_args = true)]
pub struct FeedFlipArgs {
    /// Path to the measurement set to modify in place.
    #[clap(name = "MEASUREMENT_SET", parse(from_os_str))]
    ms: PathBuf,

    /// The column to which the feed flip should be applied. Can be specified
    /// multiple times. The default is DATA, WEIGHT_SPECTRUM and FLAG.
    #[clap(short, long = "column", multiple_occurrences(true))]
    columns: Vec<String>,

    /// The number of rows to read, flip and write back at a time.
    #[clap(long, default_value_t = DEFAULT_CHUNK_N_ROW)]
    chunk_rows: usize,

    /// Validate the measurement set and report what would be flipped, without
    /// writing anything.
    #[clap(long)]
    dry_run: bool,

    /// Don't draw progress bars.
    #[clap(long)]
    no_progress_bars: bool,

    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,
}

impl FeedFlipArgs {
    pub fn run(self) -> Result<(), FeedFlipError> {
        setup_logging(self.verbosity).expect("Failed to initialise logging.");
        if !self.no_progress_bars {
            PROGRESS_BARS.store(true);
        }
        info!("feedflip {}", env!("CARGO_PKG_VERSION"));

        let params = self.into_params()?;
        params.run()?;

        info!("feedflip complete.");
        Ok(())
    }

    /// Validate the arguments into parameters ready to run.
    fn into_params(self) -> Result<FeedFlipParams, FeedFlipError> {
        let ms = ms::validate_ms_path(&self.ms)?;
        debug!("Using measurement set: {}", ms.display());

        let columns = if self.columns.is_empty() {
            DEFAULT_COLUMNS.iter().map(|&c| c.to_string()).collect()
        } else {
            self.columns
        };

        Ok(FeedFlipParams {
            ms,
            columns,
            chunk_n_row: self.chunk_rows,
            dry_run: self.dry_run,
        })
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.init();

    Ok(())
}
