use tracing::Level;
use crate::core::domain::Configuration;
use crate::core::library::OutputFormat;

// Installs the global subscriber. Logs go to stderr so that stdout only
// carries the listings.
pub fn setup_tracing(config: &Configuration) {
    let level = config.max_level().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr);
    let res = match config.log_format {
        OutputFormat::Json => builder.json().try_init(),
        OutputFormat::Text => builder.try_init(),
    };
    if let Err(err) = res {
        eprintln!("tracing already initialized: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::OutputFormat;
    use crate::utils::logs::setup_tracing;

    #[test]
    fn test_should_setup_tracing_twice() {
        let mut config = Configuration::new("test");
        config.log_format = OutputFormat::Json;
        setup_tracing(&config);
        setup_tracing(&Configuration::new("test"));
    }
}
