// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides log initialization, reference
//! https://docs.rs/log4rs
//!
//! The library itself only emits through the log facade. Binaries that
//! embed the engine can call init_log once to collect those records in
//! a file.

use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::io;

/// init logs system, writing records at `level` and above to `file_path`
pub fn init_log(level: LevelFilter, file_path: &str) -> io::Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(io::Error::other)?;
    log4rs::init_config(config).map_err(io::Error::other)?;
    Ok(())
}
