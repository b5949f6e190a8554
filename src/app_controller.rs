use anyhow::{anyhow, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::exporter::{self, ExportConfiguration};
use crate::file_utils::FileManager;
use crate::scanner::DirectoryScanner;
use crate::search;
use crate::subtitle::SubtitleEntry;

// @module: Application controller for the scan/search/export pipeline

/// Main application controller driving scan, search and export
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Build the subtitle corpus for the input path.
    ///
    /// A directory is scanned recursively with a progress bar; a single
    /// subtitle file is parsed directly and failures are fatal.
    pub async fn build_corpus(&self, input_path: &Path) -> Result<Vec<SubtitleEntry>> {
        let scanner = DirectoryScanner::new();

        if input_path.is_file() {
            return Ok(scanner.scan_file(input_path)?);
        }

        if !DirectoryScanner::validate_directory(input_path) {
            return Err(anyhow!("Input path is not a readable directory: {:?}", input_path));
        }

        let progress_bar = ProgressBar::new(100);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        let bar = progress_bar.clone();
        let entries = scanner
            .scan(input_path, move |progress| {
                bar.set_position((progress.fraction * 100.0) as u64);
                bar.set_message(progress.status.clone());
            })
            .await?;

        progress_bar.finish_and_clear();
        Ok(entries)
    }

    /// Run the full pipeline: scan, search, render, then write the report
    /// to `output` or print it to stdout.
    pub async fn run(&self, input_path: PathBuf, query: &str, output: Option<PathBuf>) -> Result<()> {
        let start_time = std::time::Instant::now();

        let corpus = self.build_corpus(&input_path).await?;
        info!("Indexed {} subtitle entr(ies) from {:?}", corpus.len(), input_path);

        let results = search::search(&corpus, query);
        if results.is_empty() {
            warn!("No matches for query: {}", query);
        } else {
            info!("Found {} matching entr(ies)", results.len());
        }

        let export_config = ExportConfiguration::new(
            self.config.export.max_results,
            self.config.export.interval,
            query,
        );
        let report = exporter::render(&results, &export_config);

        match output {
            Some(path) => {
                FileManager::write_to_file(&path, &report)?;
                info!("Report written to {:?}", path);
            }
            None => {
                println!("{}", report);
            }
        }

        info!("Done in {}", Self::format_duration(start_time.elapsed()));
        Ok(())
    }

    /// Format a duration for the completion log line
    fn format_duration(duration: std::time::Duration) -> String {
        let seconds = duration.as_secs();
        if seconds >= 60 {
            format!("{}m {}s", seconds / 60, seconds % 60)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
