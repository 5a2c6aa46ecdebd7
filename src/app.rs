use color_eyre::Result;
use server_survey_config::{
    Args,
    Command,
    Config,
    ListArgs,
};
use server_survey_engine::{
    Collector,
    HttpTransport,
    ReplyCollector,
    SortOrder,
    Survey,
    SurveyOptions,
};

pub struct App {
    config: Config,
    command: Command,
}

impl App {
    pub fn new(args: Args) -> Result<Self> {
        let command = args.command.clone();
        Ok(Self::with_config(Config::new(args)?, command))
    }

    pub fn with_config(config: Config, command: Command) -> Self {
        Self { config, command }
    }

    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Command::Ls(list) => self.list(list).await,
        }
    }

    async fn list(&self, list: &ListArgs) -> Result<()> {
        let timeout = self.config.timeout()?;
        debug!(
            config_dir = %self.config.config_dir().display(),
            servers = self.config.servers.len(),
            ?timeout,
            "surveying servers"
        );
        let transport = HttpTransport::new(
            reqwest::Client::new(),
            &self.config.servers,
            &self.config.status_path,
            timeout,
        )?;
        let mut survey = Survey::new(
            ReplyCollector::new(Box::new(transport)),
            survey_options(&self.config, list),
        );

        survey.collect(list.expect as usize, timeout).await?;

        if list.json {
            println!("{}", serde_json::to_string_pretty(&survey.summary())?);
        } else {
            println!("{}", survey.format());
        }

        if let Some(output_file) = &list.output_file {
            let json_string = serde_json::to_string_pretty(&survey.summary())?;
            tokio::fs::write(output_file, json_string).await?;
            info!("Survey exported to {}", output_file.display());
        }

        Ok(())
    }
}

/// An explicit `--sort` wins over the configured key, and only then is the
/// JSON document ranked as well.
fn survey_options(config: &Config, list: &ListArgs) -> SurveyOptions {
    SurveyOptions {
        sort: list.sort.unwrap_or(config.sort),
        order: SortOrder::from_reverse_flag(list.reverse),
        compact: config.compact,
        rank_json: list.sort.is_some(),
    }
}
