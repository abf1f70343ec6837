use std::fmt;

use scraper::Html;
use serde::Serialize;

use crate::info::{self, InfoRecord};
use crate::profile;
use crate::search::{self, PlayerIdentity};
use crate::stats::{self, StatsTable};

/// Everything the scrape produced for one lookup. Each stage that came up
/// empty leaves its field `None`; construction itself never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Player {
    pub identity: Option<PlayerIdentity>,
    pub info: Option<InfoRecord>,
    pub bat_stats: Option<StatsTable>,
    pub bowl_stats: Option<StatsTable>,
}

impl Player {
    /// Run the full pipeline for a name: search, fetch the profile page,
    /// extract info and stats. Stages short-circuit on absence but the
    /// aggregate is always returned.
    pub fn build(name: &str) -> Player {
        let Some(identity) = search::lookup(name) else {
            return Player::default();
        };
        match profile::fetch_profile(&identity.id) {
            Some(document) => Player::from_document(identity, &document),
            None => Player {
                identity: Some(identity),
                ..Player::default()
            },
        }
    }

    /// Assemble a player from an already-fetched profile document.
    pub fn from_document(identity: PlayerIdentity, document: &Html) -> Player {
        let (bat_stats, bowl_stats) = stats::extract_stats(document);
        Player {
            identity: Some(identity),
            info: info::extract_info(document),
            bat_stats,
            bowl_stats,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, country) = match &self.identity {
            Some(identity) => (identity.name.as_str(), identity.country.as_str()),
            None => ("-", "-"),
        };
        writeln!(f, "Name: {name}")?;
        writeln!(f, "Country: {country}")?;
        match &self.info {
            Some(info) => writeln!(f, "Info: {info}")?,
            None => writeln!(f, "Info: -")?,
        }
        match &self.bat_stats {
            Some(table) => writeln!(f, "Batting Stats:\n{table}")?,
            None => writeln!(f, "Batting Stats: -")?,
        }
        match &self.bowl_stats {
            Some(table) => write!(f, "Bowling Stats:\n{table}"),
            None => write!(f, "Bowling Stats: -"),
        }
    }
}
