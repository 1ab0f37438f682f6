//! Multi-pass construction of a [`Hierarchy`] from raw API records.
//!
//! Passes run strictly in order, each over the whole tree:
//!
//! 1. ingest the raw forest and index every type under its native name
//! 2. bootstrap the runtime namespace, base interface and root object
//! 3. nest types under the classes their dotted names point at
//! 4. generate managed names
//! 5. nest enums (their names may be managed ones)
//! 6. synthesize interface invokers
//! 7. resolve base types
//! 8. attach custom attributes
//!
//! `InvalidIdentifier`, `TypeNotFound` and (under the strict policy)
//! `DuplicateIndexEntry` abort the build. Everything else is reported to the
//! [`DiagnosticSink`] and the build carries on.

mod attributes;
mod bootstrap;
mod ingest;
mod names;
mod nesting;
mod resolve;
mod synthesis;

pub use nesting::PlannedMoves;

use crate::config::BuilderConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
use crate::error::{BindscopeError, Result};
use crate::index::SymbolIndex;
use crate::model::Hierarchy;
use crate::naming::{NameTranslator, XamarinTranslator};
use bindscope_api::ApiElement;
use std::sync::Arc;
use std::time::Instant;

pub struct HierarchyBuilder {
    config: BuilderConfig,
    translator: Arc<dyn NameTranslator>,
    sink: Arc<dyn DiagnosticSink>,
}

impl HierarchyBuilder {
    /// A builder using the platform name translator and reporting
    /// diagnostics through `tracing`.
    pub fn new(config: BuilderConfig) -> Self {
        let translator = XamarinTranslator {
            upper_case_two_letter_segments: config.upper_case_two_letter_segments,
            preserve_dots: config.preserve_dots,
        };
        Self {
            config,
            translator: Arc::new(translator),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn NameTranslator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds a fresh hierarchy. Every call starts from an empty tree and
    /// index, so repeated builds over the same input are identical.
    pub fn build(&self, raw: &[ApiElement]) -> Result<Hierarchy> {
        if raw.is_empty() {
            return Err(BindscopeError::EmptyInput);
        }

        let start = Instant::now();
        tracing::info!(
            "Building hierarchy from {} raw elements (translator: {})",
            raw.len(),
            self.translator.name()
        );

        let mut ctx = BuildContext {
            config: &self.config,
            translator: self.translator.as_ref(),
            sink: self.sink.as_ref(),
            hierarchy: Hierarchy::new(),
            index: SymbolIndex::new(self.config.duplicate_policy, self.sink.clone()),
        };

        ctx.ingest(raw)?;
        ctx.bootstrap()?;
        ctx.nest_types()?;
        ctx.generate_managed_names()?;
        ctx.nest_enums()?;
        ctx.synthesize_invokers()?;
        ctx.resolve_base_types()?;
        ctx.add_custom_attributes();

        tracing::info!(
            "Hierarchy built: {} namespaces, {} elements, {} index entries in {:?}",
            ctx.hierarchy.namespaces().len(),
            ctx.hierarchy.len(),
            ctx.index.len(),
            start.elapsed()
        );
        Ok(ctx.hierarchy)
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

/// State owned by a single `build` call.
pub(crate) struct BuildContext<'a> {
    config: &'a BuilderConfig,
    translator: &'a dyn NameTranslator,
    sink: &'a dyn DiagnosticSink,
    hierarchy: Hierarchy,
    index: SymbolIndex,
}

impl BuildContext<'_> {
    fn warn(&self, kind: DiagnosticKind, message: String) {
        self.sink.emit(Diagnostic::new(kind, message));
    }
}
