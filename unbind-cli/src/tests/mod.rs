//! Shared test harness modules for the Unbind CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod coach_steps;
mod helpers;
