//! A full round: hide a layout, guess it, compare

use orapa::command::{Command, CommandExecutor, Outcome};
use orapa::core::error::OrapaError;
use orapa::room::{BoardSide, RoomStore, Session};

fn run(session: &mut Session, line: &str) -> Result<Outcome, OrapaError> {
    CommandExecutor::execute(session, &Command::parse(line)?)
}

/// Moves that turn the starting board into a legal layout
const SETUP: &[&str] = &[
    "move y -2 -2",
    "move w -1 0",
    "move b 0 2",
    "move s -1 -3",
    "move r 3 0",
    "move t 2 -1",
    "move lb 7 -1",
];

#[test]
fn test_hide_guess_and_match() {
    let store = RoomStore::new();
    let mut hider = Session::new(store.join("GAME1").unwrap());
    let mut guesser = Session::new(store.join("GAME1").unwrap());

    for line in SETUP {
        run(&mut hider, line).unwrap();
    }
    match run(&mut hider, "check").unwrap() {
        Outcome::Verdict(v) => assert!(v.legal, "{}", v.message),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(run(&mut hider, "commit").unwrap(), Outcome::Committed(BoardSide::Own));
    assert!(matches!(run(&mut hider, "up y"), Err(OrapaError::BoardLocked(_))));

    assert_eq!(run(&mut guesser, "switch").unwrap(), Outcome::Switched(BoardSide::Opponent));
    for line in SETUP {
        run(&mut guesser, line).unwrap();
    }
    assert_eq!(run(&mut guesser, "match").unwrap(), Outcome::Match(false));
    run(&mut guesser, "commit").unwrap();
    assert_eq!(run(&mut guesser, "match").unwrap(), Outcome::Match(true));
    assert_eq!(run(&mut hider, "match").unwrap(), Outcome::Match(true));
}

#[test]
fn test_rooms_are_isolated() {
    let store = RoomStore::new();
    let mut first = Session::new(store.join("A").unwrap());
    let second = Session::new(store.join("B").unwrap());
    run(&mut first, "move lb 3 3").unwrap();

    let a = first.room().snapshot();
    let b = second.room().snapshot();
    assert_ne!(a.board(BoardSide::Own), b.board(BoardSide::Own));
}

#[test]
fn test_reset_reopens_committed_board() {
    let store = RoomStore::new();
    let mut session = Session::new(store.join("R").unwrap());
    for line in SETUP {
        run(&mut session, line).unwrap();
    }
    run(&mut session, "commit").unwrap();
    assert_eq!(run(&mut session, "reset").unwrap(), Outcome::Reset(BoardSide::Own));
    assert_eq!(
        run(&mut session, "right y").unwrap(),
        Outcome::Changed(orapa::spatial::ShapeId::Yellow)
    );
}
