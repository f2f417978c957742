//! Strictly Mastermind - pure code-breaking game logic
//!
//! This library implements the engine for a mastermind-style guessing game:
//! a persistent sequence abstraction, a seedable secret-code generator, a
//! duplicate-safe scoring algorithm, a bounded guess builder, and a
//! phase-typed game state machine.
//!
//! # Architecture
//!
//! - **Sequence**: immutable cons list with shared tails
//! - **Rules**: pure scoring functions (exact/inexact match counting)
//! - **Typestate**: Setup → InProgress → Finished, consuming transitions
//! - **Wrapper**: [`AnyGame`] with a total command interface for renderers
//! - **Contracts & Invariants**: pre/postconditions around submission
//!
//! Rendering, input decoding, and event loops are external collaborators;
//! the engine is in-memory and ephemeral per run.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use strictly_mastermind::{AnyGame, Command, GameSetup, GameStatus};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let game = GameSetup::standard().start(&mut rng)?;
//! let mut game = AnyGame::from(game);
//!
//! // Pick the first four palette colors and submit.
//! for index in 1..=4 {
//!     game = game.apply(Command::AppendPeg(index));
//! }
//! game = game.apply(Command::SubmitGuess);
//!
//! assert_eq!(game.history().len(), 1);
//! assert!(matches!(game.status(), GameStatus::InProgress | GameStatus::Won));
//! # Ok::<(), strictly_mastermind::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod guess;
mod sequence;
mod types;
mod typestate;
mod wrapper;

// Public module declarations
pub mod contracts;
pub mod generator;
pub mod invariants;
pub mod rules;

// Crate-level exports - Commands and errors
pub use action::{Command, SubmitError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Guess builder
pub use guess::Guess;

// Crate-level exports - Persistent sequence
pub use sequence::{Iter, Sequence, SequenceError};

// Crate-level exports - Domain types
pub use types::{Palette, Peg};

// Crate-level exports - Scoring
pub use rules::Feedback;

// Crate-level exports - Typestate engine
pub use typestate::{GameFinished, GameInProgress, GameSetup, Outcome, Turn, TurnResult};

// Crate-level exports - Any-phase wrapper
pub use wrapper::{AnyGame, GameStatus};
