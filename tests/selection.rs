use ytq::error::Error;
use ytq::menu::{parse_selection, select, Selection};

#[test]
fn quiet_mode_selects_first_entry() {
    assert_eq!(select(10, true).unwrap(), Selection::Play(0));
}

#[test]
fn numeric_selection_is_one_based() {
    assert_eq!(parse_selection("1", 5).unwrap(), Selection::Play(0));
    assert_eq!(parse_selection("5", 5).unwrap(), Selection::Play(4));
}

#[test]
fn quit_token_is_not_an_error() {
    assert_eq!(parse_selection("q\n", 5).unwrap(), Selection::Quit);
}

#[test]
fn single_bad_entry_is_terminal() {
    let err = parse_selection("6", 5).unwrap_err();
    assert!(matches!(err, Error::InvalidSelection(_)));
    assert_eq!(err.exit_code(), 2);
}
