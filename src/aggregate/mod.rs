pub mod championships;
mod collection;

pub use championships::{
    apply_championships, build_championships, distribution, is_champion, top_champions, total_awarded,
    ChampionshipCounts,
};
pub use collection::{merge_aggregates, ScoreCollection, TournamentBatch};
