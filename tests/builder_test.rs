//! Tests for TeamBuilder

use standup::domain::format::{parse, serialize};
use standup::domain::{DomainError, ScriptedNames, TeamBuilder};

const DS9: &str = include_str!("resources/ds9.json");

#[test]
fn given_ds9_answers_when_building_then_matches_stored_team() {
    // Arrange
    let mut names = ScriptedNames::new([
        "Deep Space 9", "s",
        "Federation", "s",
        "Red", "m", "Benjamin Sisko", "Worf", "",
        "Yellow", "m", "Miles O'Brien", "",
        "Blue", "m", "Jadzia Dax", "Julian Bashir", "",
        "",
        "Bajor", "m", "Kira Nerys", "Odo", "",
        "",
    ]);

    // Act
    let team = TeamBuilder::new(&mut names).build().unwrap();

    // Assert
    assert_eq!(team, parse(DS9).unwrap());
    assert!(names.notices.is_empty());
}

#[test]
fn given_built_team_when_serialized_then_parses_back() {
    let mut names = ScriptedNames::new(["Bajor", "members", "Kira Nerys", "Odo", ""]);
    let team = TeamBuilder::new(&mut names).build().unwrap();

    assert_eq!(parse(&serialize(&team)).unwrap(), team);
}

#[test]
fn given_input_ends_mid_subteam_when_building_then_input_exhausted() {
    let mut names = ScriptedNames::new(["Deep Space 9", "s", "Bajor", "m", "Odo", ""]);

    let result = TeamBuilder::new(&mut names).build();

    // The root still waits for its next subteam name
    match result {
        Err(DomainError::InputExhausted { prompt }) => {
            assert!(prompt.contains("Subteam of Deep Space 9"), "prompt: {prompt}")
        }
        other => panic!("expected exhausted input, got {other:?}"),
    }
}

#[test]
fn given_no_input_when_building_then_input_exhausted_on_name() {
    let mut names = ScriptedNames::new(Vec::<String>::new());

    let result = TeamBuilder::new(&mut names).build();

    assert_eq!(
        result,
        Err(DomainError::InputExhausted {
            prompt: "Team name:".to_string()
        })
    );
}

#[test]
fn given_empty_member_list_when_building_then_asks_again() {
    let mut names = ScriptedNames::new(["Ops", "m", "", "", "O'Brien", ""]);

    let team = TeamBuilder::new(&mut names).build().unwrap();

    assert_eq!(team.member_count(), 1);
    assert_eq!(names.notices.len(), 2);
}
