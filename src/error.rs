// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Failures the store surfaces to callers. Read-side problems (missing
/// file, malformed rows) are absorbed into an empty or partial load and
/// never appear here; only save failures do.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not save data file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("no entries recorded")]
    EmptyInput,
}

#[derive(Debug, Error)]
#[error("unrecognized month '{0}', expected Jan..Dec")]
pub struct ParseMonthError(pub String);
