use super::schema::ModelConfig;

/// Validate a model configuration before scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &ModelConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.min_words == 0 {
        errors.push("min_words: must be at least 1".to_string());
    }

    for (i, keyword) in config.required_keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            errors.push(format!("required_keywords[{}]: must not be blank", i));
        }
    }

    let confidence = config.max_transcription_confidence;
    if !(0.0..=1.0).contains(&confidence) {
        errors.push(format!(
            "max_transcription_confidence: must be between 0 and 1, got {}",
            confidence
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
