use super::{
    classifier::LineClassifier,
    context::TransformContext,
    rules::{self, TransformRule},
};
use std::{
    sync::{
        OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

pub const DEFAULT_WORKERS: usize = 4;

/// M3U8 processor that rewrites lines on a small pool of worker threads.
///
/// Workers claim line indexes from a shared cursor and write each result
/// into that line's own slot, so output order always equals input order.
pub struct StreamProcessor {
    context: TransformContext,
    rules: Vec<Box<dyn TransformRule>>,
    workers: usize,
}

impl StreamProcessor {
    pub fn new(context: TransformContext, rules: Vec<Box<dyn TransformRule>>) -> Self {
        Self {
            context,
            rules,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Processor with the default rewrite rules.
    pub fn with_default_rules(context: TransformContext) -> Self {
        Self::new(context, rules::default_rules())
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Process entire playlist content and return transformed content.
    ///
    /// Returns once every line has been transformed; lines are rejoined with `\n`.
    pub fn process(&self, input: &str) -> String {
        let lines: Vec<&str> = input.split('\n').collect();
        let slots: Vec<OnceLock<String>> = lines.iter().map(|_| OnceLock::new()).collect();
        let cursor = AtomicUsize::new(0);

        let workers = self.workers.min(lines.len());
        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    loop {
                        let index = cursor.fetch_add(1, Ordering::Relaxed);
                        let Some(line) = lines.get(index) else {
                            break;
                        };
                        // The cursor hands out each index once, so every slot is set once.
                        let stored = slots[index].set(self.process_line(line));
                        debug_assert!(stored.is_ok());
                    }
                });
            }
        });

        slots
            .into_iter()
            .map(|slot| slot.into_inner().unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Process a single line and return the transformed line.
    pub fn process_line(&self, line: &str) -> String {
        let line_type = LineClassifier::classify(line, self.context.policy);

        if line_type.is_rewritable() {
            // Find first matching rule and apply it
            for rule in &self.rules {
                if rule.matches(&line_type, &self.context) {
                    return rule.transform(line, &self.context);
                }
            }
        }

        // Default: passthrough
        line.to_string()
    }
}
