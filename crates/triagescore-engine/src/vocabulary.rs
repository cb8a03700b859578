//! Fixed precompute vocabulary
//!
//! Curated list of common medical-problem phrases spanning all severity
//! tiers. Static configuration data consumed by the precompute pipeline, not
//! computed by it. A line-oriented file (one phrase per line, `#` comments)
//! can replace the built-in list.

use std::path::Path;

use triagescore_core::Result;

/// The built-in vocabulary.
pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect()
}

/// Load a vocabulary from a line-oriented file. Blank lines and `#` comment
/// lines are skipped; phrases are used verbatim (normalization happens in
/// the pipeline).
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

const DEFAULT_PHRASES: &[&str] = &[
    // Critical emergencies
    "heart attack",
    "cardiac arrest",
    "stroke",
    "severe bleeding",
    "unconscious",
    "not breathing",
    "severe chest pain",
    "severe burns",
    "severe trauma",
    "anaphylactic shock",
    "severe allergic reaction",
    "choking",
    "overdose",
    // High urgency
    "chest pain",
    "difficulty breathing",
    "shortness of breath",
    "severe pain",
    "high fever",
    "broken bone",
    "fracture",
    "severe headache",
    "migraine",
    "vomiting blood",
    "blood in stool",
    "severe abdominal pain",
    "appendicitis",
    "kidney stones",
    "gallstones",
    "pneumonia",
    "asthma attack",
    // Medium-high urgency
    "fever",
    "high temperature",
    "persistent headache",
    "back pain",
    "severe nausea",
    "persistent vomiting",
    "dehydration",
    "food poisoning",
    "urinary tract infection",
    "ear infection",
    "eye infection",
    "rash",
    "allergic reaction",
    "sprain",
    "minor fracture",
    "cut requiring stitches",
    // Medium urgency
    "cough",
    "cold symptoms",
    "flu symptoms",
    "sore throat",
    "runny nose",
    "muscle pain",
    "joint pain",
    "arthritis",
    "minor headache",
    "diarrhea",
    "constipation",
    "acid reflux",
    "heartburn",
    "minor burn",
    "bruise",
    "insect bite",
    "minor cut",
    "scrape",
    "skin irritation",
    // Low urgency
    "routine checkup",
    "physical exam",
    "vaccination",
    "immunization",
    "prescription refill",
    "medication review",
    "blood pressure check",
    "diabetes checkup",
    "cholesterol check",
    "annual exam",
    "preventive care",
    "minor fatigue",
    "tiredness",
    "mild anxiety",
    "sleep issues",
    // Specific conditions
    "diabetes",
    "hypertension",
    "high blood pressure",
    "low blood pressure",
    "depression",
    "anxiety",
    "panic attack",
    "stress",
    "insomnia",
    "chronic fatigue",
    "fibromyalgia",
    "chronic pain",
    "back problems",
    "neck pain",
    "shoulder pain",
    "knee pain",
    "hip pain",
    // Women's health
    "pregnancy symptoms",
    "morning sickness",
    "menstrual cramps",
    "irregular periods",
    "heavy bleeding",
    "pelvic pain",
    // Children's health
    "teething",
    "diaper rash",
    "cradle cap",
    "colic",
    "ear pain",
    "growing pains",
    "fever in child",
    "child not eating",
    // Respiratory
    "bronchitis",
    "sinusitis",
    "sinus infection",
    "laryngitis",
    "whooping cough",
    "tuberculosis",
    "lung infection",
    // Gastrointestinal
    "stomach ache",
    "indigestion",
    "bloating",
    "gas",
    "cramps",
    "irritable bowel syndrome",
    "gastritis",
    "ulcer",
    "hemorrhoids",
    // Skin conditions
    "eczema",
    "psoriasis",
    "acne",
    "warts",
    "moles",
    "skin cancer",
    "sunburn",
    "heat rash",
    "hives",
    "dermatitis",
    // Mental health
    "mood swings",
    "irritability",
    "concentration problems",
    "memory issues",
    "confusion",
    "dizziness",
    "vertigo",
    // Combinations and variations
    "severe headache with nausea",
    "chest pain with breathing difficulty",
    "fever with chills",
    "abdominal pain with vomiting",
    "back pain with numbness",
    "headache with vision problems",
    "chest pain radiating to arm",
    "difficulty swallowing",
    "persistent cough with blood",
    "severe fatigue with weight loss",
    "joint pain with swelling",
];
