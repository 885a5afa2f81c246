use anyhow::Result;
use log::{info, warn};

use crate::adapter::{PlayerAdapter, Profile, ProfileKind, Record};
use crate::config::settings::AppConfig;
use crate::config::sheets::{ALL_PLAYERS_FILE, ALL_SCORES_FILE};
use crate::errors::ArchiveError;
use crate::services::championships::{ChampionshipService, ChampionshipUpdate};
use crate::store::JsonStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFixOutcome {
    pub converted: usize,
    /// Input already carried the profile's marker and was left untouched
    pub already_applied: bool,
    pub championships: Option<ChampionshipUpdate>,
}

/// Rewrites All Players.json into one downstream format
pub struct PlayerFormatService {
    config: AppConfig,
    store: JsonStore,
    adapter: PlayerAdapter,
}

impl PlayerFormatService {
    pub fn new(config: AppConfig, kind: ProfileKind) -> Result<Self> {
        let store = JsonStore::existing(&config.paths.output_dir);
        Ok(Self::with_store(config, store, kind))
    }

    pub fn with_store(config: AppConfig, store: JsonStore, kind: ProfileKind) -> Self {
        let adapter = PlayerAdapter::new(Profile::for_kind(kind, &config.adapter));
        Self { config, store, adapter }
    }

    pub fn run(&self) -> Result<PlayerFixOutcome> {
        let kind = self.adapter.profile().kind;
        info!("=== Fixing Player Data Format ({:?}) ===\n", kind);

        // Step 1: Load players
        let records = self.load_players()?;
        info!("  → Loaded {} players\n", records.len());

        if self.adapter.is_applied(&records) {
            warn!(
                "{} already has '{}', leaving it untouched",
                ALL_PLAYERS_FILE,
                self.adapter.profile().marker
            );
            return Ok(PlayerFixOutcome {
                already_applied: true,
                ..Default::default()
            });
        }

        // Step 2: Reshape
        info!("Step 2: Converting records...");
        let mut players = self.adapter.adapt_all(&records);
        info!("  → Converted {} players\n", players.len());

        // Step 3: Championships (app format only)
        let championships = match kind {
            ProfileKind::App => self.add_championships(&mut players)?,
            ProfileKind::Import => None,
        };

        // Step 4: Overwrite the file
        info!("Step 4: Saving {}...", ALL_PLAYERS_FILE);
        self.store.save(ALL_PLAYERS_FILE, &players)?;
        if let Some(first) = players.first() {
            info!("  Sample player: {}", serde_json::to_string(first)?);
        }

        info!("=== Player Format Complete ===");
        Ok(PlayerFixOutcome {
            converted: players.len(),
            already_applied: false,
            championships,
        })
    }

    fn load_players(&self) -> Result<Vec<Record>> {
        info!("Step 1: Loading {}...", ALL_PLAYERS_FILE);
        let path = self.store.path_for(ALL_PLAYERS_FILE);
        let records = self
            .store
            .load(ALL_PLAYERS_FILE)?
            .ok_or(ArchiveError::MissingInput(path))?;
        Ok(records)
    }

    fn add_championships(&self, players: &mut [Record]) -> Result<Option<ChampionshipUpdate>> {
        info!("Step 3: Adding championships from {}...", ALL_SCORES_FILE);

        if !self.store.exists(ALL_SCORES_FILE) {
            warn!("  {} not found, championship fields stay at 0", ALL_SCORES_FILE);
            return Ok(None);
        }

        let service = ChampionshipService::with_store(
            self.config.clone(),
            JsonStore::existing(self.store.dir()),
        );
        let counts = service.compute()?;
        let update = service.apply(players, &counts);
        info!("  → Updated {} of {} players\n", update.updated, update.players);
        Ok(Some(update))
    }
}
