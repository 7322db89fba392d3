//! Command execution against a session's current board

use crate::board::Arrangement;
use crate::command::Command;
use crate::core::error::Result;
use crate::room::{BoardSide, Session};
use crate::spatial::shapes::ShapeId;
use crate::spatial::validation::LayoutVerdict;

/// What a command did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The piece was moved, turned or mirrored
    Changed(ShapeId),
    /// The piece does not support the requested transform
    Unsupported(ShapeId),
    Verdict(LayoutVerdict),
    Board { side: BoardSide, arrangement: Arrangement, locked: bool },
    Switched(BoardSide),
    Committed(BoardSide),
    Match(bool),
    Reset(BoardSide),
    Help,
    Quit,
}

/// Executes commands on the board a session is looking at
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn execute(session: &mut Session, command: &Command) -> Result<Outcome> {
        let side = session.side();
        let outcome = match *command {
            Command::Move { shape, dx, dy } => session.room().with(|room| -> Result<Outcome> {
                room.board_mut(side)?.move_by(shape, dx, dy);
                Ok(Outcome::Changed(shape))
            })?,
            Command::Rotate { shape, rotation } => session.room().with(|room| -> Result<Outcome> {
                let changed = room.board_mut(side)?.rotate(shape, rotation);
                Ok(changed_or_unsupported(changed, shape))
            })?,
            Command::Flip { shape } => session.room().with(|room| -> Result<Outcome> {
                let changed = room.board_mut(side)?.flip(shape);
                Ok(changed_or_unsupported(changed, shape))
            })?,
            Command::Check => Outcome::Verdict(session.room().with(|room| room.check(side))),
            Command::Show => session.room().with(|room| Outcome::Board {
                side,
                arrangement: room.board(side).clone(),
                locked: room.is_locked(side),
            }),
            Command::Switch => Outcome::Switched(session.switch_board()),
            Command::Commit => session.room().with(|room| -> Result<Outcome> {
                room.commit(side)?;
                Ok(Outcome::Committed(side))
            })?,
            Command::Match => Outcome::Match(session.room().with(|room| room.guess_matches())),
            Command::Reset => {
                session.room().with(|room| room.reset(side));
                Outcome::Reset(side)
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}

fn changed_or_unsupported(changed: bool, shape: ShapeId) -> Outcome {
    if changed {
        Outcome::Changed(shape)
    } else {
        Outcome::Unsupported(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Verdict;
    use crate::core::error::OrapaError;
    use crate::room::RoomStore;

    fn run(session: &mut Session, line: &str) -> Result<Outcome> {
        CommandExecutor::execute(session, &Command::parse(line)?)
    }

    #[test]
    fn test_moves_apply_to_current_board() {
        let store = RoomStore::new();
        let mut session = Session::new(store.join("R1").unwrap());
        assert_eq!(run(&mut session, "right w").unwrap(), Outcome::Changed(ShapeId::White));
        run(&mut session, "switch").unwrap();
        run(&mut session, "up w").unwrap();

        let room = session.room().snapshot();
        assert_eq!(room.board(BoardSide::Own).placement(ShapeId::White).anchor.x, 4.0);
        assert_eq!(room.board(BoardSide::Opponent).placement(ShapeId::White).anchor.y, 6.0);
    }

    #[test]
    fn test_unsupported_transforms() {
        let store = RoomStore::new();
        let mut session = Session::new(store.join("R1").unwrap());
        assert_eq!(run(&mut session, "rotl lb").unwrap(), Outcome::Unsupported(ShapeId::LightBlue));
        assert_eq!(run(&mut session, "flip b").unwrap(), Outcome::Unsupported(ShapeId::Blue));
        assert_eq!(run(&mut session, "flip r").unwrap(), Outcome::Changed(ShapeId::Red));
    }

    #[test]
    fn test_check_caches_and_commit_refuses_illegal() {
        let store = RoomStore::new();
        let mut session = Session::new(store.join("R1").unwrap());
        match run(&mut session, "check").unwrap() {
            Outcome::Verdict(v) => assert!(!v.legal),
            other => panic!("unexpected outcome {:?}", other),
        }
        let verdict = session.room().with(|room| room.board(BoardSide::Own).verdict());
        assert_eq!(verdict, Verdict::Illegal);

        assert!(matches!(run(&mut session, "commit"), Err(OrapaError::IllegalLayout(_))));
        assert_eq!(run(&mut session, "match").unwrap(), Outcome::Match(false));
    }

    #[test]
    fn test_show_reports_lock_state() {
        let store = RoomStore::new();
        let mut session = Session::new(store.join("R1").unwrap());
        match run(&mut session, "show").unwrap() {
            Outcome::Board { side, locked, arrangement } => {
                assert_eq!(side, BoardSide::Own);
                assert!(!locked);
                assert_eq!(arrangement, Arrangement::new());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
