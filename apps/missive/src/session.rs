//! Per-run field cache. Parsed resume values only fill slots the user
//! has not already set, so explicit input always wins over extraction.

use crate::resume::ParsedFields;

/// Accumulated form fields for one generation run. Skills are held as
/// a single comma-joined string so the user can edit them as text.
#[derive(Debug, Clone, Default)]
pub struct FieldCache {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: String,
}

impl FieldCache {
    /// Merges parsed resume fields into the cache, writing only into
    /// empty slots. Empty parsed values never clear a filled slot.
    pub fn fill_if_empty(&mut self, parsed: &ParsedFields) {
        if self.name.is_empty() {
            self.name = parsed.name.clone();
        }
        if self.email.is_empty() {
            self.email = parsed.email.clone();
        }
        if self.phone.is_empty() {
            self.phone = parsed.phone.clone();
        }
        if self.skills.is_empty() {
            self.skills = parsed.skills.join(", ");
        }
        if self.experience.is_empty() {
            self.experience = parsed.experience.clone();
        }
    }
}
