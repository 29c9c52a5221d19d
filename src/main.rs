// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;

fn main() {
    // Parse the arguments and run. If an error occurs, print it to stderr and
    // exit with a non-zero code.
    if let Err(e) = feedflip::cli::FeedFlipArgs::parse().run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
