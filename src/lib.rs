//! Scrape a cricket player's profile and T20I/IPL career stats off cricbuzz.
//!
//! One lookup is one [`Player::build`] call: a search request resolves the
//! name to a player id, the profile page is fetched and parsed, and the
//! personal-info and stats sections are sliced out of the markup. Every
//! stage fails soft; whatever could not be scraped is simply absent from the
//! returned aggregate.

pub mod http_client;
pub mod info;
pub mod player;
pub mod profile;
pub mod search;
pub mod stats;

pub use player::Player;
