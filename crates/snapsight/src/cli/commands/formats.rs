//! Formats command implementation.

use snapsight_engine::imaging::{supported_load_extensions, supported_save_extensions};

use crate::output::Output;

pub fn run(output: &Output) -> anyhow::Result<()> {
    let load = supported_load_extensions();
    let save = supported_save_extensions();
    output.print_formats(&load, &save)
}
