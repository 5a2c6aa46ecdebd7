#[derive(thiserror::Error, Debug)]
pub enum SurveyError {
    #[error(
        "no results received, ensure the account used has system privileges and appropriate permissions to reach every server"
    )]
    NoResults,
    #[error("could not decode reply #{index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("no servers configured, pass --server or list them in config.yaml")]
    NoServers,
    #[error("sending the status request failed: {0}")]
    Transport(eyre::Report),
}
