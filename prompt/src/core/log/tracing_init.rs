// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPreference, TracingConfig, WriterConfig, file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the layers described by `tracing_config` as the global default subscriber.
/// Does nothing if the config is [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    if tracing_config.writer_config == WriterConfig::None {
        return Ok(());
    }

    let layers = try_create_layers(tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|err| miette::miette!("Failed to install tracing subscriber: {err}"))
}

/// Returns the layers. This does not initialize the tracing system. Use
/// [`try_initialize_logging_global`] for that, or install them yourself:
/// `tracing_subscriber::registry().with(layers).init()`.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Global level filter, so layers added later by the caller are filtered too.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// Returns a stdout or stderr layer, if `writer_config` asks for one.
///
/// # Errors
///
/// Never fails today. The signature matches [`try_create_file_layer`] so both compose
/// the same way.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// Returns a layer that appends to a log file, if `writer_config` asks for one. ANSI
/// colors are turned off for the file.
///
/// # Errors
///
/// Returns an error if the log file path is unusable.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = file_appender_impl::try_create(log_file_path.as_str())?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn temp_log_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("r3bl_prompt_log_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stderr),
            )
            .unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_no_display_layer_for_file_only() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::File("x.log".into()))
                .unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let file_path = temp_log_file("file_layer.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File(file_path.clone()))
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let file_path = temp_log_file("both_layers.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let tracing_config = TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                file_path.clone(),
            ),
            level_filter: LevelFilter::DEBUG,
        };

        let layers = try_create_layers(tracing_config).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_none_writer_only_has_level_filter() {
        let layers = try_create_layers(TracingConfig::default()).unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn test_initialize_with_none_is_a_no_op() {
        assert!(try_initialize_logging_global(TracingConfig::default()).is_ok());
    }
}
