use super::config::EvaluationConfig;

/// Percentage of the reference tech stack found in the submitted one, truncated.
///
/// Matching ignores letter case. Each reference entry counts once no matter how often the
/// applicant repeats it, so the rate never exceeds 100.
pub fn similarity_rate(tech_stack: &[String], config: &EvaluationConfig) -> u8 {
    let reference = &config.reference_tech_stack;
    if reference.is_empty() {
        return 0;
    }

    let submitted: Vec<String> = tech_stack.iter().map(|entry| entry.to_lowercase()).collect();
    let matched = reference
        .iter()
        .filter(|entry| submitted.contains(&entry.to_lowercase()))
        .count();

    (matched * 100 / reference.len()) as u8
}
