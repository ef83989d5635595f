// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Open `path_str` for appending, creating it if needed. The file is never rotated.
///
/// Note that if you wrap this up in a non blocking writer, the worker guard has to be
/// kept alive for as long as logging is needed, which a library can't do for its
/// caller. So it's used as a blocking writer.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!("Can't access parent folder of {}.", path.display())
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't access file name {}.", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
