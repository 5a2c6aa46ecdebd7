use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    Display,
    EnumIter,
    EnumString,
};

/// Column the server table is ordered by.
///
/// The short aliases (`conn`, `sub`, `route`, `gw`) are accepted wherever a
/// key is parsed: on the command line, in `config.yaml` and through
/// [`std::str::FromStr`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    #[strum(to_string = "conns", serialize = "conn")]
    #[serde(alias = "conn")]
    #[value(alias = "conn")]
    Conns,
    #[strum(to_string = "subs", serialize = "sub")]
    #[serde(alias = "sub")]
    #[value(alias = "sub")]
    Subs,
    #[strum(to_string = "routes", serialize = "route")]
    #[serde(alias = "route")]
    #[value(alias = "route")]
    Routes,
    #[strum(to_string = "gws", serialize = "gw")]
    #[serde(alias = "gw")]
    #[value(alias = "gw")]
    Gws,
    Mem,
    Cpu,
    Slow,
    Uptime,
    Rtt,
}
