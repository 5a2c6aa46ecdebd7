use crate::SortKey;
use clap::{
    Parser,
    Subcommand,
};
use std::path::PathBuf;

/// Scatter-gather status survey of a server fleet
#[derive(Parser, Debug, Clone)]
#[command(author, version = version(), about, long_about = None)]
pub struct Args {
    /// Base URL of a server to survey. Repeat the flag or separate with commas.
    /// Replaces the list from the configuration file.
    #[clap(
        long = "server",
        value_name = "URL",
        env = "SERVER_SURVEY_SERVERS",
        value_delimiter = ','
    )]
    pub servers: Vec<url::Url>,

    /// How long to wait for replies, e.g. `2s` or `500ms`.
    #[clap(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Path requested on every server.
    #[clap(long = "status-path", value_name = "PATH")]
    pub status_path: Option<String>,

    /// Enables debug logging.
    #[clap(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List known servers
    #[command(alias = "list")]
    Ls(ListArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// How many servers to expect. With 0 the full timeout is awaited.
    #[clap(value_name = "EXPECT", default_value_t = 0)]
    pub expect: u32,

    /// Produce JSON output
    #[clap(short, long, action)]
    pub json: bool,

    /// Sort servers by a specific key. Passing it also ranks the JSON output.
    #[clap(long, value_enum, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Reverse sort servers. Numeric keys sort highest-first unless this is set.
    #[clap(short = 'R', long, action)]
    pub reverse: bool,

    /// Compact server names and hosts by dropping their shared domain suffix.
    #[clap(long, value_name = "BOOL")]
    pub compact: Option<bool>,

    /// Additionally write the JSON document to this file.
    #[clap(long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if !self.servers.is_empty() {
                cache.insert(
                    "servers".to_string(),
                    self.servers.iter().map(|url| url.to_string()).collect::<Vec<_>>().into(),
                );
            }
            if let Some(timeout) = &self.timeout {
                cache.insert("timeout".to_string(), timeout.clone().into());
            }
            if let Some(status_path) = &self.status_path {
                cache.insert("status_path".to_string(), status_path.clone().into());
            }
            match &self.command {
                Command::Ls(list) => {
                    if let Some(sort) = list.sort {
                        cache.insert("sort".to_string(), sort.to_string().into());
                    }
                    if let Some(compact) = list.compact {
                        cache.insert("compact".to_string(), compact.into());
                    }
                }
            }
            Ok(cache)
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let config_dir_path = crate::get_config_dir().display().to_string();
    let data_dir_path = crate::get_data_dir().display().to_string();

    format!(
        "{}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn list_flags_parse() {
        let args = Args::try_parse_from(["server-survey", "ls", "3", "--sort", "gw", "-R", "-j"]).unwrap();
        let Command::Ls(list) = args.command;
        assert_eq!(list.expect, 3);
        assert_eq!(list.sort, Some(SortKey::Gws));
        assert!(list.reverse);
        assert!(list.json);
        assert_eq!(list.compact, None);
    }

    #[test]
    fn list_alias_and_defaults() {
        let args = Args::try_parse_from(["server-survey", "list"]).unwrap();
        let Command::Ls(list) = args.command;
        assert_eq!(list.expect, 0);
        assert_eq!(list.sort, None);
        assert!(!list.reverse);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert!(Args::try_parse_from(["server-survey", "ls", "--sort", "latency"]).is_err());
    }

    #[test]
    fn explicit_arguments_become_overrides() {
        use config::Source as _;

        let args = Args::try_parse_from([
            "server-survey",
            "--server",
            "http://a.example:8222,http://b.example:8222",
            "--timeout",
            "750ms",
            "ls",
            "--sort",
            "mem",
            "--compact",
            "false",
        ])
        .unwrap();
        let overrides = args.collect().unwrap();

        assert_eq!(overrides["timeout"].clone().into_string().unwrap(), "750ms");
        assert_eq!(overrides["sort"].clone().into_string().unwrap(), "mem");
        assert!(!overrides["compact"].clone().into_bool().unwrap());
        assert_eq!(overrides["servers"].clone().into_array().unwrap().len(), 2);
        assert!(!overrides.contains_key("status_path"));
    }
}
