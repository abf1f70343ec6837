use std::fmt;

use scraper::{Html, Selector};
use serde::Serialize;

// Positional selector over the personal-information list. Document order
// yields: birth date, height, role, batting style, bowling style. Assumes a
// stable DOM shape; drift silently changes what lands in each slot.
const INFO_SELECTOR: &str = ".cb-lst-itm-sm:nth-child(13) , .cb-lst-itm-sm:nth-child(11) , .cb-lst-itm-sm:nth-child(9) , .cb-col-60:nth-child(7) , .cb-lst-itm-sm:nth-child(3)";

const M_TO_FT: f64 = 3.281;
const CM_PER_FT: f64 = 30.48;

/// Personal details scraped off the profile page. Height is always in feet,
/// whatever unit the page used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoRecord {
    pub age: Option<u32>,
    pub height_ft: Option<f64>,
    pub role: String,
    pub batting_style: String,
    pub bowling_style: String,
}

impl fmt::Display for InfoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.age {
            Some(age) => write!(f, "age: {age}")?,
            None => write!(f, "age: -")?,
        }
        match self.height_ft {
            Some(height) => write!(f, ", height: {height:.2} ft")?,
            None => write!(f, ", height: -")?,
        }
        write!(
            f,
            ", role: {}, batting style: {}, bowling style: {}",
            self.role, self.batting_style, self.bowling_style
        )
    }
}

/// Pull the five informational cells out of a profile document, or `None`
/// when fewer than four are present.
pub fn extract_info(document: &Html) -> Option<InfoRecord> {
    let selector = Selector::parse(INFO_SELECTOR).ok()?;
    let cells: Vec<String> = document
        .select(&selector)
        .map(|e| e.text().collect::<String>().to_lowercase())
        .collect();
    if cells.len() < 4 {
        log::debug!("info selector matched {} cells, need 4", cells.len());
        return None;
    }
    let bowling_style = if cells.len() == 5 {
        cells[4].trim().to_string()
    } else {
        String::new()
    };
    Some(InfoRecord {
        age: parse_age(&cells[0]),
        height_ft: parse_height(&cells[1]),
        role: cells[2].trim().to_string(),
        batting_style: cells[3].trim().to_string(),
        bowling_style,
    })
}

/// Age out of a birth-date cell like `may 05, 1988 (37 years)`: the token
/// after the date, parenthesis stripped. No parenthesis means no age.
pub fn parse_age(cell: &str) -> Option<u32> {
    if !cell.contains('(') {
        return None;
    }
    cell.split_whitespace()
        .nth(3)?
        .trim_start_matches('(')
        .parse()
        .ok()
}

/// Height in feet, keyed on the unit suffix of the cell's last token.
/// `5 ft 9 in` composes to the decimal `5.9`. Unknown suffixes fall through
/// to `None`, indistinguishable from an absent height.
pub fn parse_height(cell: &str) -> Option<f64> {
    let parts: Vec<&str> = cell.split_whitespace().collect();
    match *parts.last()? {
        "m" => parts[0].parse::<f64>().ok().map(|v| v * M_TO_FT),
        "cm" => parts[0].parse::<f64>().ok().map(|v| v / CM_PER_FT),
        "ft" => parts[0].parse::<f64>().ok(),
        "in" => format!("{}.{}", parts.first()?, parts.get(2)?).parse().ok(),
        _ => None,
    }
}
