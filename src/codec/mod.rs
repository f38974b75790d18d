//! Snapshot encoding for external persistence and transport.
//!
//! The engine itself never stores or sends anything. Collaborators that do
//! use these helpers so every side agrees on one layout:
//! - `Board` as a 36-element row-major sequence of cell values
//! - `active_player` and `status` as scalar fields
//!
//! `encode`/`decode` produce compact bincode bytes. Any serde format works
//! on the same types for a self-describing form.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::core::{CodecError, GameState, Snapshot};

/// Encode any engine value as bincode bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serialize(value)?)
}

/// Decode bincode bytes produced by `encode`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Encode a read-only snapshot.
///
/// ```
/// use pentago_engine::codec;
/// use pentago_engine::game::TurnController;
///
/// let game = TurnController::default();
/// let bytes = codec::encode_snapshot(&game.inspect()).unwrap();
/// assert_eq!(codec::decode_snapshot(&bytes).unwrap(), game.inspect());
/// ```
#[instrument(level = "trace", skip_all)]
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, CodecError> {
    encode(snapshot)
}

/// Decode a snapshot, rejecting boards that do not hold exactly 36 cells.
#[instrument(level = "trace", skip_all, fields(len = bytes.len()))]
pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot, CodecError> {
    decode(bytes)
}

/// Encode a full state, including move history.
pub fn encode_state(state: &GameState) -> Result<Vec<u8>, CodecError> {
    encode(state)
}

/// Decode a full state.
pub fn decode_state(bytes: &[u8]) -> Result<GameState, CodecError> {
    decode(bytes)
}
