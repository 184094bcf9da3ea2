use serde::Deserialize;

#[derive(Deserialize)]
struct RawRule {
    from: String,
    to: String,
}

#[derive(Deserialize)]
struct RawRuleConfig {
    consonants: Vec<RawRule>,
    central_vowel: Vec<RawRule>,
    foreign: Vec<RawRule>,
    digraphs: Vec<RawRule>,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rule set [[{0}]] is empty")]
    EmptySet(&'static str),
    #[error("empty pattern in rule set [[{0}]]")]
    EmptyPattern(&'static str),
    #[error("conflicting replacements for pattern {pattern:?} in rule set [[{set}]]")]
    Conflict { set: &'static str, pattern: String },
}

/// Ordered `(pattern, replacement)` pairs for the four rule sets.
#[derive(Debug)]
pub(crate) struct ParsedRules {
    pub consonants: Vec<(String, String)>,
    pub central_vowel: Vec<(String, String)>,
    pub foreign: Vec<(String, String)>,
    pub digraphs: Vec<(String, String)>,
}

/// Parse TOML rule tables into ordered rule lists.
///
/// Declaration order is preserved (arrays of tables, not maps) because later
/// rules may target output of earlier ones. Duplicate identical pairs are
/// collapsed keeping the first occurrence; the same pattern with two
/// different replacements is rejected.
pub(crate) fn parse_rules_toml(toml_str: &str) -> Result<ParsedRules, RulesConfigError> {
    let raw: RawRuleConfig =
        toml::from_str(toml_str).map_err(|e| RulesConfigError::Parse(e.to_string()))?;

    Ok(ParsedRules {
        consonants: validate_set("consonants", raw.consonants)?,
        central_vowel: validate_set("central_vowel", raw.central_vowel)?,
        foreign: validate_set("foreign", raw.foreign)?,
        digraphs: validate_set("digraphs", raw.digraphs)?,
    })
}

fn validate_set(
    name: &'static str,
    raw: Vec<RawRule>,
) -> Result<Vec<(String, String)>, RulesConfigError> {
    if raw.is_empty() {
        return Err(RulesConfigError::EmptySet(name));
    }

    let mut rules: Vec<(String, String)> = Vec::with_capacity(raw.len());
    for rule in raw {
        if rule.from.is_empty() {
            return Err(RulesConfigError::EmptyPattern(name));
        }
        match rules.iter().find(|(from, _)| *from == rule.from) {
            Some((_, to)) if *to == rule.to => continue, // redundant duplicate
            Some(_) => {
                return Err(RulesConfigError::Conflict {
                    set: name,
                    pattern: rule.from,
                })
            }
            None => rules.push((rule.from, rule.to)),
        }
    }
    Ok(rules)
}
