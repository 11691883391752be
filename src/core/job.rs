use crate::core::scramble::TextScrambler;
use crate::core::{ConfigProvider, ScrambleReport, Storage};
use crate::utils::error::Result;
use crate::utils::validation::sanitize_filename;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Reads a text file, scrambles it and writes the result back through the
/// same storage.
pub struct ScrambleJob<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    scrambler: TextScrambler,
}

impl<S: Storage, C: ConfigProvider> ScrambleJob<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let scrambler = TextScrambler::new(config.min_word_length())?;
        Ok(Self {
            storage,
            config,
            scrambler,
        })
    }

    /// Output file name for `input`: `<stem><suffix>.<ext>`, `txt` when the
    /// input has no extension.
    pub fn output_name(&self, input: &str) -> String {
        let path = Path::new(input);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("input");
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("txt");

        sanitize_filename(&format!("{}{}.{}", stem, self.config.output_suffix(), ext))
    }

    fn rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub async fn scramble_file(&self, input: &str) -> Result<ScrambleReport> {
        tracing::debug!("Reading input file: {}", input);
        let bytes = self.storage.read_file(input).await?;
        let text = String::from_utf8(bytes)?;
        tracing::debug!("Read {} characters", text.chars().count());

        let scrambled = self.scrambler.scramble_text(&text, &mut self.rng());
        tracing::info!(
            "Scrambled {} of {} words",
            scrambled.scrambled_words,
            scrambled.words
        );

        Ok(ScrambleReport {
            output: None,
            words: scrambled.words,
            scrambled_words: scrambled.scrambled_words,
            text: scrambled.text,
        })
    }

    /// Scrambles `input` and writes it under the configured output path.
    pub async fn run(&self, input: &str) -> Result<ScrambleReport> {
        let mut report = self.scramble_file(input).await?;

        let output_name = self.output_name(input);
        self.storage
            .write_file(&output_name, report.text.as_bytes())
            .await?;

        let output = Path::new(self.config.output_path())
            .join(&output_name)
            .to_string_lossy()
            .into_owned();
        tracing::info!("Output saved to: {}", output);

        report.output = Some(output);
        Ok(report)
    }
}
