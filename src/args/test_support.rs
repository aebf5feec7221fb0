use clap::Parser;

use crate::error::{AppError, AppResult};

use super::SweepArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<SweepArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    SweepArgs::try_parse_from(args).map_err(AppError::from)
}
