// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all feedflip-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use crate::{flip::FlipError, ms::MsError};

#[derive(Error, Debug)]
pub enum FeedFlipError {
    /// The arguments did not describe a usable measurement set.
    #[error("{0}")]
    InvalidArgs(String),

    /// An error that occurred while flipping.
    #[error("{0}")]
    Flip(String),
}

impl From<MsError> for FeedFlipError {
    fn from(e: MsError) -> Self {
        let s = e.to_string();
        match e {
            MsError::BadFile(_) | MsError::NotADirectory(_) => Self::InvalidArgs(s),
            MsError::Table(_) | MsError::Casacore(_) | MsError::IO(_) => Self::Flip(s),
        }
    }
}

impl From<FlipError> for FeedFlipError {
    fn from(e: FlipError) -> Self {
        let s = e.to_string();
        match e {
            FlipError::ZeroChunkRows => Self::InvalidArgs(s),
            _ => Self::Flip(s),
        }
    }
}
