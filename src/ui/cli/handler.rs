// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::engine::{FileReport, Inspector};
use crate::output::{JsonSerializer, ReportGenerator};
use crate::ui::progress::ProgressManager;
use crate::utils::logging;
use anyhow::Context;
use colored::Colorize;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<bool> {
        let config = self.effective_config(&args)?;
        self.setup_output(&args, &config);
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("Effective config: {:?}", config);

        let reports = self.inspect(&args, config.clone())?;
        let all_ok = !reports.iter().any(FileReport::is_failure);

        if config.json_output {
            let serializer = JsonSerializer::new();
            match &args.output {
                Some(path) => {
                    serializer.serialize_to_file(&reports, path)?;
                    println!("{} JSON written to {}", "[+]".green(), path.display());
                }
                None => println!("{}", serializer.serialize(&reports)?),
            }
        } else {
            print!("{}", ReportGenerator::new().with_fields(args.fields).render_all(&reports));
        }

        Ok(all_ok)
    }

    /// The config file (if any) with command-line flags layered on top.
    pub fn effective_config(&self, args: &Args) -> anyhow::Result<Config> {
        let base = match &args.config {
            Some(path) => Config::from_json_file(path).with_context(|| format!("loading config {:?}", path))?,
            None => Config::default(),
        };
        let config = args.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn setup_output(&self, args: &Args, config: &Config) {
        if !config.enable_color {
            colored::control::set_override(false);
        }
        logging::init(logging::level_from_str(&args.log_level), config.enable_color);
    }

    fn inspect(&self, args: &Args, config: Config) -> anyhow::Result<Vec<FileReport>> {
        let show_progress = config.enable_progress_bars && !config.json_output && args.files.len() > 1;
        let inspector = Inspector::new(config);
        let bar = ProgressManager::new()
            .with_enabled(show_progress)
            .file_bar(args.files.len() as u64, "Inspecting");

        let reports = inspector.inspect_all(&args.files, |report| {
            bar.set_message(report.path.display().to_string());
            bar.inc(1);
        })?;

        bar.finish_and_clear();
        Ok(reports)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
