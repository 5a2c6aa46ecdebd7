use color_eyre::Result;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

const CRATES: [&str; 3] = ["server_survey", "server_survey_config", "server_survey_engine"];

/// Logs go to stderr so the report on stdout stays machine readable.
/// `RUST_LOG` replaces the default filter entirely.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;
    Ok(())
}

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verbose_raises_only_our_crates() {
        assert_eq!(
            default_directives(false),
            "warn,server_survey=info,server_survey_config=info,server_survey_engine=info"
        );
        assert_eq!(
            default_directives(true),
            "warn,server_survey=debug,server_survey_config=debug,server_survey_engine=debug"
        );
    }

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
