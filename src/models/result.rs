use serde_json::Value;

/// Outcome of a successful exchange with the instruct endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// The `result.alternatives` array, in the order the service returned it.
    Alternatives(Vec<Value>),
    /// The response carried no `result` or no `alternatives`.
    NoResult,
}

impl GenerationResult {
    pub fn is_empty_result(&self) -> bool {
        matches!(self, GenerationResult::NoResult)
    }

    pub fn alternatives(&self) -> Option<&[Value]> {
        match self {
            GenerationResult::Alternatives(items) => Some(items),
            GenerationResult::NoResult => None,
        }
    }

    pub fn into_alternatives(self) -> Option<Vec<Value>> {
        match self {
            GenerationResult::Alternatives(items) => Some(items),
            GenerationResult::NoResult => None,
        }
    }

    /// Generated texts, taken from each alternative's `text` field.
    pub fn texts(&self) -> Vec<&str> {
        self.alternatives()
            .unwrap_or_default()
            .iter()
            .filter_map(|alt| alt["text"].as_str())
            .collect()
    }
}

impl From<Option<Vec<Value>>> for GenerationResult {
    fn from(alternatives: Option<Vec<Value>>) -> Self {
        match alternatives {
            Some(items) => GenerationResult::Alternatives(items),
            None => GenerationResult::NoResult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_texts_skip_alternatives_without_text() {
        let result = GenerationResult::Alternatives(vec![
            json!({"text": "Bonjour", "score": -0.5, "num_tokens": "3"}),
            json!({"score": -1.0}),
            json!({"text": "Salut"}),
        ]);
        assert_eq!(result.texts(), vec!["Bonjour", "Salut"]);
        assert_eq!(result.alternatives().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_no_result() {
        let result = GenerationResult::from(None);
        assert!(result.is_empty_result());
        assert!(result.texts().is_empty());
        assert!(result.into_alternatives().is_none());
    }
}
