pub mod engine;

pub use engine::{
    calculate_score, rank_tips, MissingPartyError, PartyPoints, RankedTip, ScoreResult,
    SkippedTip, Standings, CLOSE_MARGIN, CLOSE_POINTS, EXACT_POINTS, MAX_SCORE,
};
