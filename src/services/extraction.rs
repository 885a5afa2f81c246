use anyhow::Result;
use log::{info, warn};

use crate::aggregate::{ScoreCollection, TournamentBatch};
use crate::classify::{SheetClassifier, TournamentSheet, WorkbookLayout};
use crate::config::settings::AppConfig;
use crate::config::sheets::{AGGREGATE_FILES, ALL_PLAYERS_FILE, ALL_SCORES_FILE, CHAMPIONS_FILE};
use crate::domain::{SheetProgress, TournamentResult};
use crate::errors::ArchiveError;
use crate::extract::{
    extract_all_players, extract_champions, extract_score_rows, extract_sheet, extract_tournament_sheet,
};
use crate::store::JsonStore;
use crate::workbook::{ExcelWorkbook, SheetSource};

/// Counts printed at the end of an extraction run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionSummary {
    pub tournament_sheets: usize,
    pub tournament_files: usize,
    pub tournament_entries: usize,
    pub aggregate_files: usize,
    pub champions: usize,
    pub all_scores: usize,
    pub all_players: usize,
}

pub struct ExtractionService {
    config: AppConfig,
    store: JsonStore,
    classifier: SheetClassifier,
}

impl ExtractionService {
    /// The output directory is only created once a workbook has tournaments to write
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = JsonStore::existing(&config.paths.output_dir);
        Ok(Self {
            config,
            store,
            classifier: SheetClassifier::new()?,
        })
    }

    pub fn run(&self) -> Result<ExtractionSummary> {
        let mut workbook = ExcelWorkbook::open(&self.config.paths.workbook)?;
        self.extract_from(&mut workbook)
    }

    pub fn extract_from<S: SheetSource + ?Sized>(&self, source: &mut S) -> Result<ExtractionSummary> {
        info!("=== BOD Excel Data Extraction ===");
        info!("Excel file: {}", self.config.paths.workbook.display());
        info!("Output directory: {}\n", self.store.dir().display());

        // Step 1: Classify sheets
        let layout = self.classify(source)?;
        info!("  → Found {} tournament sheets\n", layout.tournaments.len());
        self.store.create_dir()?;

        // Step 2: One file per tournament sheet
        let collection = self.save_tournament_files(source, &layout.tournaments)?;
        info!(
            "  → Wrote {} tournament files ({} team entries)\n",
            collection.len(),
            collection.entry_count()
        );

        // Step 3: Aggregate files
        let mut summary = self.save_aggregate_files(source, &layout, collection)?;
        info!("  → Aggregate files written\n");

        // Step 4: Validate what landed on disk
        self.validate(&layout, &mut summary)?;

        info!("=== Extraction Complete ===");
        Ok(summary)
    }

    fn classify<S: SheetSource + ?Sized>(&self, source: &S) -> Result<WorkbookLayout> {
        info!("Step 1: Classifying sheets...");

        let sheet_names = source.sheet_names();
        info!("  Found {} sheets", sheet_names.len());

        let layout = self.classifier.classify_all(&sheet_names);
        if layout.tournaments.is_empty() {
            return Err(ArchiveError::NoTournamentSheets(self.config.paths.workbook.clone()).into());
        }
        if !layout.ignored.is_empty() {
            info!("  Ignoring {} unrecognised sheets", layout.ignored.len());
        }
        Ok(layout)
    }

    fn save_tournament_files<S: SheetSource + ?Sized>(
        &self,
        source: &mut S,
        tournaments: &[TournamentSheet],
    ) -> Result<ScoreCollection> {
        info!("Step 2: Extracting individual tournament files...");

        let mut progress = SheetProgress::new(tournaments.len());
        let mut collection = ScoreCollection::new();

        for tournament in tournaments {
            let results = extract_sheet(source, &tournament.name, |sheet| {
                extract_tournament_sheet(sheet, tournament)
            });

            if results.is_empty() {
                warn!("  No complete team rows in {}, skipping", tournament.name);
                progress.record_empty();
                continue;
            }

            self.store.save(&tournament.file_name(), &results)?;
            progress.record_written(results.len());
            collection.add(TournamentBatch {
                sheet: tournament.clone(),
                results,
            });
        }

        Ok(collection)
    }

    fn save_aggregate_files<S: SheetSource + ?Sized>(
        &self,
        source: &mut S,
        layout: &WorkbookLayout,
        collection: ScoreCollection,
    ) -> Result<ExtractionSummary> {
        info!("Step 3: Saving aggregate files...");

        let mut summary = ExtractionSummary {
            tournament_sheets: layout.tournaments.len(),
            tournament_entries: collection.entry_count(),
            ..Default::default()
        };

        if let Some(sheet_name) = &layout.champions {
            let champions = extract_sheet(source, sheet_name, extract_champions);
            summary.champions = champions.len();
            self.save_non_empty(CHAMPIONS_FILE, &champions)?;
        }

        if let Some(sheet_name) = &layout.all_players {
            let players = extract_sheet(source, sheet_name, extract_all_players);
            summary.all_players = players.len();
            self.save_non_empty(ALL_PLAYERS_FILE, &players)?;
        }

        let scores = self.all_scores(source, layout, collection);
        summary.all_scores = scores.len();
        self.save_non_empty(ALL_SCORES_FILE, &scores)?;

        Ok(summary)
    }

    /// The All Scores sheet, or every tournament's results when the sheet is unusable
    fn all_scores<S: SheetSource + ?Sized>(
        &self,
        source: &mut S,
        layout: &WorkbookLayout,
        collection: ScoreCollection,
    ) -> Vec<TournamentResult> {
        let from_sheet = layout
            .all_scores
            .as_deref()
            .map(|sheet_name| extract_sheet(source, sheet_name, extract_score_rows))
            .unwrap_or_default();

        if !from_sheet.is_empty() {
            return from_sheet;
        }

        warn!("  No usable All Scores sheet, merging tournament results instead");
        collection.into_merged()
    }

    fn save_non_empty<T: serde::Serialize>(&self, file_name: &str, records: &[T]) -> Result<()> {
        if records.is_empty() {
            warn!("  Nothing to write for {}", file_name);
            return Ok(());
        }
        self.store.save(file_name, records)?;
        Ok(())
    }

    fn validate(&self, layout: &WorkbookLayout, summary: &mut ExtractionSummary) -> Result<()> {
        info!("Step 4: Validating extraction...");

        let json_files = self.store.json_files()?;
        let tournament_files: Vec<&TournamentSheet> = layout
            .tournaments
            .iter()
            .filter(|sheet| json_files.contains(&sheet.file_name()))
            .collect();

        summary.tournament_files = tournament_files.len();
        summary.aggregate_files = json_files
            .iter()
            .filter(|name| AGGREGATE_FILES.contains(&name.as_str()))
            .count();

        info!("=== Validation Summary ===");
        info!("Tournament sheets processed: {}", summary.tournament_sheets);
        info!("Tournament JSON files created: {}", summary.tournament_files);
        info!("Aggregate files: {}", summary.aggregate_files);

        if let Some(sample) = tournament_files.first() {
            self.log_sample(&sample.file_name())?;
        }
        Ok(())
    }

    fn log_sample(&self, file_name: &str) -> Result<()> {
        let Some(entries) = self.store.load::<Vec<TournamentResult>>(file_name)? else {
            return Ok(());
        };

        info!("Sample validation ({}):", file_name);
        info!("  Teams in file: {}", entries.len());
        if let Some(entry) = entries.first() {
            info!("  Player 1: {}", entry.player_1);
            info!("  Player 2: {}", entry.player_2);
            info!("  Date: {}", entry.date.as_deref().unwrap_or("-"));
            info!("  Format: {}", entry.format.as_deref().unwrap_or("-"));
        }
        Ok(())
    }
}
