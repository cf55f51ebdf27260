// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-runner: run one external command, drain its output, report one outcome.
//!
//! ```no_run
//! # async fn demo() {
//! use bm_runner::{CommandRunner, Invocation};
//!
//! let invocation = Invocation::new("bm", ".").with_args(["bmp", "logout"]);
//! match CommandRunner::new().run(&invocation).await {
//!     Ok(output) => println!("{}", output.stdout),
//!     Err(e) => eprintln!("{}", e.error_text()),
//! }
//! # }
//! ```

mod error;
mod invocation;
mod output;
mod runner;

pub use error::RunError;
pub use invocation::Invocation;
pub use output::{Outcome, RunOutput};
pub use runner::CommandRunner;

pub use tokio_util::sync::CancellationToken;
