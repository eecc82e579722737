use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Installs a logger printing messages of level `Info` and above on the standard error.
///
/// This function may be called several times; only the first call (of this function or [`init_logger_with_level`]) has an effect.
/// If another logger was already installed by the calling program, it is kept.
pub fn init_logger() {
    init_logger_with_level(log::LevelFilter::Info)
}

/// Installs a logger printing messages of the given level and above on the standard error.
///
/// Each line is made of the colored level, a timestamp and the message.
///
/// # Example
///
/// ```
/// crustabip::utils::init_logger_with_level(log::LevelFilter::Debug);
/// log::debug!("the logger is ready");
/// ```
pub fn init_logger_with_level(level: log::LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new()
            .info(fern::colors::Color::Cyan)
            .debug(fern::colors::Color::Magenta);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{:5}] {} {}: {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S%.3f]"),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()
            .unwrap_or(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_logger_with_level(log::LevelFilter::Trace);
        init_logger();
        log::trace!("logger initialized twice");
    }
}
