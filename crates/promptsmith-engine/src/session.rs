use std::path::{Path, PathBuf};

use anyhow::Result;
use promptsmith_contracts::batch::BatchSettings;
use promptsmith_contracts::events::{ComposeEvent, EventWriter};
use promptsmith_contracts::random::RandomSource;
use promptsmith_contracts::receipts::{build_receipt, prompt_fingerprint, write_receipt};
use promptsmith_contracts::request::{CompiledPrompt, ComposeRequest, RequestMode};
use serde_json::Value;
use tracing::info;

use crate::Composer;

/// A [`Composer`] bound to an event log. Every compile and sample is recorded
/// in `events.jsonl`; [`ComposeSession::finish`] optionally writes a receipt
/// for the last compiled request.
#[derive(Debug)]
pub struct ComposeSession {
    composer: Composer,
    events: EventWriter,
    last: Option<CompiledRun>,
    variants: Vec<String>,
}

#[derive(Debug, Clone)]
struct CompiledRun {
    request: ComposeRequest,
    compiled: CompiledPrompt,
    mode: RequestMode,
    request_text: String,
    warnings: Vec<String>,
}

impl ComposeSession {
    pub fn start(composer: Composer, events_path: impl Into<PathBuf>) -> Result<Self> {
        let events = EventWriter::for_new_session(events_path);
        events.emit(ComposeEvent::SessionStarted {
            default_world: composer.config().default_world.clone(),
            high_intensity_threshold: composer.config().high_intensity_threshold,
        })?;
        info!(session_id = events.session_id(), "compose session started");
        Ok(Self {
            composer,
            events,
            last: None,
            variants: Vec::new(),
        })
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn session_id(&self) -> &str {
        self.events.session_id()
    }

    pub fn events_path(&self) -> &Path {
        self.events.path()
    }

    /// Compiles `request` and renders the generation text for `mode`.
    pub fn compile(&mut self, request: &ComposeRequest, mode: RequestMode) -> Result<CompiledPrompt> {
        let compiled = self.composer.compile(request)?;
        let request_text = self.composer.render_request(&compiled, request.style, mode);
        let warnings = self.composer.warnings(request);
        self.events.emit(ComposeEvent::PromptCompiled {
            world: self.composer.world_for(request).to_string(),
            mode,
            fingerprint: prompt_fingerprint(&compiled.positive_prompt),
            positive_prompt: compiled.positive_prompt.clone(),
            negative_prompt: compiled.negative_prompt.clone(),
            references: request.references.len(),
            warnings: warnings.clone(),
        })?;
        self.last = Some(CompiledRun {
            request: request.clone(),
            compiled: compiled.clone(),
            mode,
            request_text,
            warnings,
        });
        self.variants.clear();
        Ok(compiled)
    }

    /// The rendered generation text for the last compiled request.
    pub fn request_text(&self) -> Option<&str> {
        self.last.as_ref().map(|run| run.request_text.as_str())
    }

    /// Compiles `request` as text-to-image and expands it into `count` batch
    /// items, logging each one.
    pub fn compile_batch<R: RandomSource + ?Sized>(
        &mut self,
        request: &ComposeRequest,
        settings: &BatchSettings,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let compiled = self.compile(request, RequestMode::TextToImage)?;
        let world = self.composer.world_for(request).to_string();
        let items = self
            .composer
            .expand_batch(&compiled.positive_prompt, &world, settings, count, rng)?;
        for (index, prompt) in items.iter().enumerate() {
            self.events.emit(ComposeEvent::VariantSampled {
                index,
                world: world.clone(),
                fingerprint: prompt_fingerprint(prompt),
                prompt: prompt.clone(),
            })?;
        }
        self.variants.extend(items.iter().cloned());
        Ok(items)
    }

    pub fn sample_instructions<R: RandomSource + ?Sized>(
        &mut self,
        settings: &BatchSettings,
        world: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(count);
        for index in 0..count {
            let instruction = self
                .composer
                .sample_image_to_image_instruction(settings, world, rng)?;
            self.events.emit(ComposeEvent::InstructionSampled {
                index,
                world: world.to_string(),
                instruction: instruction.clone(),
            })?;
            out.push(instruction);
        }
        Ok(out)
    }

    /// Emits `session_finished`; writes a receipt when `receipt_path` is given
    /// and something was compiled.
    pub fn finish(self, receipt_path: Option<&Path>) -> Result<Option<Value>> {
        let mut receipt = None;
        if let (Some(path), Some(run)) = (receipt_path, self.last.as_ref()) {
            let payload = build_receipt(
                &run.request,
                &run.compiled,
                run.mode,
                &run.request_text,
                &self.variants,
                &run.warnings,
            )?;
            write_receipt(path, &payload)?;
            receipt = Some(payload);
        }
        self.events.emit(ComposeEvent::SessionFinished {
            variants: self.variants.len(),
            receipt_path: receipt
                .as_ref()
                .and(receipt_path)
                .map(|path| path.display().to_string()),
        })?;
        Ok(receipt)
    }
}
