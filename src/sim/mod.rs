//! Seeded random playouts.
//!
//! Plays whole games by picking uniformly among legal moves. Used for
//! soak-testing the rules and for benchmarks; the same `SimConfig` always
//! yields the same game.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{GameRng, GameRngState, GameState, GameStatus, Move, SimConfig};
use crate::rules::{PentagoRules, RulesEngine};

/// Picks the next move for a playout.
pub trait MovePolicy<E: RulesEngine> {
    /// Choose a move among `engine.legal_moves(state)`.
    /// Returns `None` when there is nothing to play.
    fn choose(&self, engine: &E, state: &GameState, rng: &mut GameRng) -> Option<Move>;
}

/// Uniform random choice over legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl<E: RulesEngine> MovePolicy<E> for RandomPolicy {
    fn choose(&self, engine: &E, state: &GameState, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&engine.legal_moves(state)).copied()
    }
}

/// Summary of a finished (or capped) playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutReport {
    /// Seed the playout ran with.
    pub seed: u64,
    /// Final state, including full move history.
    pub final_state: GameState,
    /// Moves played.
    pub moves: u32,
    /// RNG position when the playout stopped. A capped playout resumes
    /// from here with `GameRng::from_state`.
    pub rng_state: GameRngState,
}

impl PlayoutReport {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.final_state.status
    }
}

/// Play one game from the initial state until it ends or hits
/// `config.max_moves`.
#[instrument(level = "debug", skip(engine, policy), fields(seed = config.seed))]
pub fn play_out<E, P>(engine: &E, policy: &P, config: &SimConfig) -> PlayoutReport
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    let mut rng = GameRng::new(config.seed);
    let mut state = engine.initial_state();
    let mut moves = 0u32;

    while engine.is_terminal(&state).is_none() {
        if config.max_moves > 0 && moves >= config.max_moves {
            break;
        }
        let Some(mv) = policy.choose(engine, &state, &mut rng) else {
            break;
        };
        match engine.apply_move(&state, mv) {
            Ok(next) => state = next,
            Err(err) => {
                debug!(%err, ?mv, "policy chose an illegal move");
                break;
            }
        }
        moves += 1;
    }

    debug!(moves, status = ?state.status, "playout finished");
    PlayoutReport {
        seed: config.seed,
        final_state: state,
        moves,
        rng_state: rng.state(),
    }
}

/// Random playout with standard rules built from `config.engine`.
///
/// ```
/// use pentago_engine::core::SimConfig;
/// use pentago_engine::sim::random_playout;
///
/// let report = random_playout(&SimConfig::default().with_seed(3));
/// assert!(report.status().is_terminal());
/// assert!(report.moves <= 36);
/// ```
pub fn random_playout(config: &SimConfig) -> PlayoutReport {
    let engine = PentagoRules::new(config.engine.clone());
    play_out(&engine, &RandomPolicy, config)
}

/// Play `games` random games, each seeded from a fork of `config.seed`.
///
/// The batch is reproducible from `config` alone, and every game gets its
/// own independent sequence.
#[instrument(level = "debug", fields(seed = config.seed))]
pub fn random_playouts(config: &SimConfig, games: usize) -> Vec<PlayoutReport> {
    let mut root = GameRng::new(config.seed);
    (0..games)
        .map(|_| {
            let game_config = config.clone().with_seed(root.fork().seed());
            random_playout(&game_config)
        })
        .collect()
}
