//! Slot filling: map extracted entities onto a tool's arguments.
//!
//! Entities arrive highest score first and the first entity to claim an
//! argument keeps it. Symptom-sensitive tools get one more regex pass when
//! no entity filled the symptom argument.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use cv_protocol::ExtractedEntity;
use regex::Regex;

use crate::schema::missing_fields;
use crate::tables::NluTables;

/// Entity label whose values get the allergy-word cleanup.
const ALLERGEN_LABEL: &str = "allergen";

static RE_ALLERGY_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\b(?:allergy|allergies|allergic)\b\s*").unwrap());

/// Arguments filled for a tool and the required ones still missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotFill {
    pub filled_args: BTreeMap<String, String>,
    pub missing_fields: Vec<String>,
}

/// Strip allergy words from an allergen span: "nuts allergy" → "nuts".
pub fn clean_allergen(value: &str) -> String {
    RE_ALLERGY_WORDS.replace_all(value, " ").trim().to_string()
}

pub struct SlotFiller<'a> {
    tables: &'a NluTables,
}

impl<'a> SlotFiller<'a> {
    pub fn new(tables: &'a NluTables) -> Self {
        Self { tables }
    }

    pub fn fill(&self, tool: &str, entities: &[ExtractedEntity], text: &str) -> SlotFill {
        let mut filled = BTreeMap::new();

        if let Some(spec) = self.tables.tool(tool) {
            for entity in entities {
                let Some(argument) = spec.slots.get(&entity.label) else {
                    continue;
                };
                if filled.contains_key(argument) {
                    continue;
                }
                let value = if entity.label == ALLERGEN_LABEL {
                    clean_allergen(&entity.text)
                } else {
                    entity.text.clone()
                };
                filled.insert(argument.clone(), value);
            }
        }

        let symptoms = &self.tables.symptoms;
        if symptoms.applies_to(tool) && !filled.contains_key(symptoms.argument()) {
            if let Some(symptom) = symptoms.extract(text) {
                filled.insert(symptoms.argument().to_string(), symptom);
            }
        }

        let missing = missing_fields(self.tables, tool, &filled);
        tracing::info!(tool, filled = ?filled, missing = ?missing, "slots filled");

        SlotFill {
            filled_args: filled,
            missing_fields: missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(label: &str, text: &str, score: f64) -> ExtractedEntity {
        ExtractedEntity::new(label, text, score)
    }

    fn fill(tool: &str, entities: &[ExtractedEntity], text: &str) -> SlotFill {
        let tables = NluTables::builtin().unwrap();
        SlotFiller::new(&tables).fill(tool, entities, text)
    }

    #[test]
    fn routine_with_type_and_time_is_complete() {
        let entities = [
            entity("vital sign type", "blood pressure", 0.8),
            entity("time reference", "morning", 0.6),
        ];
        let result = fill("routine.create", &entities, "Create a morning routine to check my blood pressure");
        assert_eq!(result.filled_args["type"], "blood pressure");
        assert_eq!(result.filled_args["time"], "morning");
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn routine_without_time_is_missing_time() {
        let entities = [
            entity("frequency", "daily", 0.9),
            entity("medication name", "medication", 0.5),
        ];
        let result = fill("routine.create", &entities, "Set up a daily reminder to take my medication");
        assert_eq!(result.filled_args["frequency"], "daily");
        assert_eq!(result.missing_fields, vec!["time"]);
    }

    #[test]
    fn highest_scoring_entity_claims_argument() {
        let entities = [
            entity("doctor name", "Dr. Smith", 0.9),
            entity("doctor name", "Dr. Jones", 0.7),
        ];
        let result = fill("appointment.create", &entities, "Dr. Smith or Dr. Jones");
        assert_eq!(result.filled_args["provider_name"], "Dr. Smith");
        assert_eq!(result.missing_fields, vec!["start_time"]);
    }

    #[test]
    fn unmapped_labels_ignored() {
        let entities = [entity("meal type", "lunch", 0.9)];
        let result = fill("wifi.read", &entities, "lunch wifi");
        assert!(result.filled_args.is_empty());
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn symptom_heuristic_for_appointments() {
        let result = fill("appointment.create", &[], "I have a terrible headache, book a doctor");
        assert_eq!(result.filled_args["symptoms"], "a terrible headache");
        assert_eq!(result.missing_fields, vec!["provider_name", "start_time"]);
    }

    #[test]
    fn symptom_entity_beats_heuristic() {
        let entities = [entity("symptom or complaint", "headache", 0.6)];
        let result = fill("appointment.create", &entities, "I have a terrible headache");
        assert_eq!(result.filled_args["symptoms"], "headache");
    }

    #[test]
    fn heuristic_skipped_for_other_tools() {
        let result = fill("routine.read", &[], "I have a terrible headache");
        assert!(!result.filled_args.contains_key("symptoms"));
    }

    #[test]
    fn allergen_value_cleaned() {
        let entities = [entity("allergen", "Peanut Allergy", 0.8)];
        let result = fill("allergies.create", &entities, "add my peanut allergy");
        assert_eq!(result.filled_args["name"], "Peanut");
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn clean_allergen_words() {
        assert_eq!(clean_allergen("nuts allergy"), "nuts");
        assert_eq!(clean_allergen("allergic to shellfish"), "to shellfish");
        assert_eq!(clean_allergen("pollen allergies"), "pollen");
        assert_eq!(clean_allergen("penicillin"), "penicillin");
    }

    #[test]
    fn unknown_tool_fills_nothing() {
        let entities = [entity("frequency", "daily", 0.9)];
        let result = fill("teleport", &entities, "daily");
        assert_eq!(result, SlotFill::default());
    }
}
