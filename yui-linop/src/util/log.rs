use simplelog::{Color, Config, ConfigBuilder, Level, LevelFilter};

fn config() -> Config {
    let mut cb = ConfigBuilder::new();
    cb.add_filter_allow_str("yui_linop");
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Debug, Some(Color::Cyan));
    cb.set_level_color(Level::Trace, Some(Color::Green));
    cb.build()
}

// only records from this crate are printed.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::{ColorChoice, TermLogger, TerminalMode};
    TermLogger::init(l, config(), TerminalMode::Stderr, ColorChoice::Auto)
}

// writes through the test harness, so the output is captured per test.
pub fn init_test_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    simplelog::TestLogger::init(l, config())
}
