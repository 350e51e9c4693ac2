/// Definition lookup for the secret word, shown once a game ends. Lookup is
/// strictly best-effort: a miss or a failing provider yields a placeholder
/// and never disturbs the game outcome.
use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use log::*;

/// Placeholder shown when no definition could be produced.
pub const NOT_FOUND: &str = "No definition found.";

/// A source of word definitions. Implementations may consult anything from a
/// bundled glossary to a remote dictionary service.
pub trait DefinitionProvider {
    fn define(&self, word: &str) -> anyhow::Result<Option<String>>;
}

/// Glossary is a definition provider backed by a JSON object mapping words
/// to definition strings.
#[derive(Debug, Default)]
pub struct Glossary {
    definitions: HashMap<String, String>,
}

impl Glossary {
    pub fn new(definitions: HashMap<String, String>) -> Glossary {
        Glossary { definitions }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Glossary> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Error reading glossary {}", path.display()))?;
        let definitions = serde_json::from_str(&contents)
            .with_context(|| format!("Error parsing glossary {}", path.display()))?;
        Ok(Glossary { definitions })
    }
}

impl DefinitionProvider for Glossary {
    fn define(&self, word: &str) -> anyhow::Result<Option<String>> {
        Ok(self.definitions.get(word).cloned())
    }
}

/// `best_effort` resolves a definition, degrading to the placeholder on a
/// miss or provider failure.
pub fn best_effort(provider: &dyn DefinitionProvider, word: &str) -> String {
    match provider.define(word) {
        Ok(Some(definition)) => definition,
        Ok(None) => NOT_FOUND.to_string(),
        Err(e) => {
            warn!("Error fetching definition for '{}': {}", word, e);
            NOT_FOUND.to_string()
        }
    }
}
