//! Keyed room store
//!
//! The map lock is held only to look up or insert an entry. Each room has
//! its own mutex, so mutations of one room are serialized without blocking
//! the others.

use super::Room;
use crate::core::error::{OrapaError, Result};
use ahash::AHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to one room
#[derive(Debug, Clone)]
pub struct RoomHandle {
    code: String,
    room: Arc<Mutex<Room>>,
}

impl RoomHandle {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Run `f` with exclusive access to the room
    pub fn with<R>(&self, f: impl FnOnce(&mut Room) -> R) -> R {
        let mut guard = lock(&self.room);
        f(&mut guard)
    }

    /// Copy of the room as it is now
    pub fn snapshot(&self) -> Room {
        lock(&self.room).clone()
    }
}

// A panic inside one caller leaves the room data intact; keep serving it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: Mutex<AHashMap<String, Arc<Mutex<Room>>>>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Room codes are trimmed; an empty code is refused
    pub fn normalize_code(code: &str) -> Result<String> {
        let code = code.trim();
        if code.is_empty() {
            return Err(OrapaError::EmptyRoomCode);
        }
        Ok(code.to_string())
    }

    /// Open a room, creating it with two fresh boards if needed
    pub fn join(&self, code: &str) -> Result<RoomHandle> {
        let code = Self::normalize_code(code)?;
        let mut rooms = lock(&self.rooms);
        let room = rooms
            .entry(code.clone())
            .or_insert_with(|| {
                tracing::info!("Created room {}", code);
                Arc::new(Mutex::new(Room::new(code.clone())))
            })
            .clone();
        Ok(RoomHandle { code, room })
    }

    pub fn get(&self, code: &str) -> Option<RoomHandle> {
        let code = Self::normalize_code(code).ok()?;
        let room = lock(&self.rooms).get(&code)?.clone();
        Some(RoomHandle { code, room })
    }

    /// Drop a room. Handles still held elsewhere keep working on their copy.
    pub fn remove(&self, code: &str) -> bool {
        match Self::normalize_code(code) {
            Ok(code) => {
                let removed = lock(&self.rooms).remove(&code).is_some();
                if removed {
                    tracing::info!("Closed room {}", code);
                }
                removed
            }
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.rooms).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = lock(&self.rooms).keys().cloned().collect();
        codes.sort();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::BoardSide;
    use crate::spatial::shapes::ShapeId;
    use std::thread;

    #[test]
    fn test_join_creates_once() {
        let store = RoomStore::new();
        let a = store.join("  ABC123 ").unwrap();
        let b = store.join("ABC123").unwrap();
        assert_eq!(a.code(), "ABC123");
        assert_eq!(store.len(), 1);

        a.with(|room| room.board_mut(BoardSide::Own).unwrap().move_by(ShapeId::Rhombus, 1.0, 0.0));
        let seen = b.with(|room| room.board(BoardSide::Own).placement(ShapeId::Rhombus).anchor.x);
        assert_eq!(seen, 7.0);
    }

    #[test]
    fn test_empty_code_rejected() {
        let store = RoomStore::new();
        assert!(matches!(store.join("   "), Err(OrapaError::EmptyRoomCode)));
        assert!(store.get("").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_and_codes() {
        let store = RoomStore::new();
        store.join("b").unwrap();
        store.join("a").unwrap();
        assert_eq!(store.codes(), vec!["a".to_string(), "b".to_string()]);
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert!(store.get("a").is_none());
        assert!(store.get("b").is_some());
    }

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let store = Arc::new(RoomStore::new());
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let handle = store.join("shared").unwrap();
                    for _ in 0..25 {
                        handle.with(|room| {
                            room.board_mut(BoardSide::Opponent)
                                .unwrap()
                                .move_by(ShapeId::Transparent, 0.01, 0.0)
                        });
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let room = store.get("shared").unwrap().snapshot();
        let x = room.board(BoardSide::Opponent).placement(ShapeId::Transparent).anchor.x;
        assert!((x - 4.0).abs() < 1e-6);
    }
}
