//! core::config::ini
//!
//! INI-style configuration document.
//!
//! The persisted format is `[section]` headers followed by `option = value`
//! lines. Sections and options keep their first-seen order across a
//! parse → mutate → serialize round trip, so rewriting the file never
//! reorders what was already there.

/// An ordered section → option → value document.
///
/// Order is part of the contract, so entries live in vectors rather than
/// maps; the recognized key sets are small enough that linear lookup is the
/// simpler choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl ConfigDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from file content.
    ///
    /// The parser is tolerant: blank lines and `#`/`;` comments are skipped,
    /// and malformed lines are ignored rather than rejected.
    pub fn parse(content: &str) -> Self {
        let mut document = ConfigDocument::new();
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim();
                if !name.is_empty() {
                    document.section_mut(name);
                    current = Some(name.to_string());
                }
                continue;
            }

            if let (Some(section), Some((key, value))) = (&current, split_key_value(line)) {
                let section = section.clone();
                document.set(&section, &key, &value);
            }
        }

        document
    }

    /// Serialize the document back to file content.
    ///
    /// Sections are emitted in document order, separated by a blank line.
    /// An empty document serializes to an empty string.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section.name));
            for (option, value) in &section.entries {
                out.push_str(&format!("{} = {}\n", option, value));
            }
        }
        out
    }

    /// Look up a value.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .entries
            .iter()
            .find(|(key, _)| key == option)
            .map(|(_, value)| value.as_str())
    }

    /// Set a value, creating the section if absent.
    pub fn set(&mut self, section: &str, option: &str, value: &str) {
        let section = self.section_mut(section);
        match section.entries.iter_mut().find(|(key, _)| key == option) {
            Some((_, existing)) => *existing = value.to_string(),
            None => section
                .entries
                .push((option.to_string(), value.to_string())),
        }
    }

    /// Remove an option from its section.
    ///
    /// Returns whether the option was present. Removing a missing option is
    /// a no-op; the section itself is kept even when emptied.
    pub fn unset(&mut self, section: &str, option: &str) -> bool {
        let Some(section) = self.sections.iter_mut().find(|s| s.name == section) else {
            return false;
        };
        let before = section.entries.len();
        section.entries.retain(|(key, _)| key != option);
        section.entries.len() < before
    }

    /// Iterate over every `(section, option, value)` triple in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections.iter().flat_map(|section| {
            section
                .entries
                .iter()
                .map(|(option, value)| (section.name.as_str(), option.as_str(), value.as_str()))
        })
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        if let Some(index) = self.sections.iter().position(|s| s.name == name) {
            return &mut self.sections[index];
        }
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.sections.last_mut().unwrap()
    }
}

/// Split an `option = value` line on the first `=`.
fn split_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}
