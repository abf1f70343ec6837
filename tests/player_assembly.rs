use std::fs;
use std::path::PathBuf;

use cricbuzz_stats::Player;
use cricbuzz_stats::profile::parse_profile;
use cricbuzz_stats::search::PlayerIdentity;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn identity() -> PlayerIdentity {
    PlayerIdentity {
        id: "1413".to_string(),
        name: "Virat Kohli".to_string(),
        country: "India".to_string(),
    }
}

#[test]
fn assembles_all_fields_from_document() {
    let document = parse_profile(&read_fixture("profile.html"));
    let player = Player::from_document(identity(), &document);
    assert_eq!(player.identity, Some(identity()));
    assert!(player.info.is_some());
    assert!(player.bat_stats.is_some());
    assert!(player.bowl_stats.is_some());
}

#[test]
fn assembly_is_idempotent() {
    let document = parse_profile(&read_fixture("profile.html"));
    let first = Player::from_document(identity(), &document);
    let second = Player::from_document(identity(), &document);
    assert_eq!(first, second);
}

#[test]
fn empty_player_renders_dashes() {
    let rendered = Player::default().to_string();
    assert!(rendered.contains("Name: -"));
    assert!(rendered.contains("Country: -"));
    assert!(rendered.contains("Info: -"));
    assert!(rendered.contains("Batting Stats: -"));
    assert!(rendered.contains("Bowling Stats: -"));
}

#[test]
fn populated_player_renders_identity_and_tables() {
    let document = parse_profile(&read_fixture("profile.html"));
    let rendered = Player::from_document(identity(), &document).to_string();
    assert!(rendered.contains("Name: Virat Kohli"));
    assert!(rendered.contains("Country: India"));
    assert!(rendered.contains("age: 37"));
    assert!(rendered.contains("t20i"));
    assert!(rendered.contains("4188"));
    assert!(rendered.contains("2/25"));
}
