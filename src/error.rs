use thiserror::Error;

pub type ScResult<T> = Result<T, ScError>;

#[derive(Debug, Error)]
pub enum ScError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("json failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed csv at line {line}: {detail}")]
    Csv { line: usize, detail: String },

    #[error("missing required column `{column}` in header row")]
    MissingColumn { column: String },

    #[error("malformed pair at line {line}: {detail}")]
    MalformedPair { line: usize, detail: String },

    #[error("degenerate input for `{id}`: {detail}")]
    DegenerateInput { id: String, detail: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ScError {
    /// Stable, unique, machine-readable error code for every variant.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "SC-IO",
            Self::Json(_) => "SC-JSON",
            Self::Csv { .. } => "SC-CSV",
            Self::MissingColumn { .. } => "SC-MISSING-COLUMN",
            Self::MalformedPair { .. } => "SC-MALFORMED-PAIR",
            Self::DegenerateInput { .. } => "SC-DEGENERATE-INPUT",
            Self::InvalidRequest(_) => "SC-INVALID-REQUEST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScError;

    fn all_variants() -> Vec<ScError> {
        vec![
            ScError::Io(std::io::Error::other("disk fail")),
            ScError::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
            ScError::Csv {
                line: 3,
                detail: "unterminated quoted field".to_owned(),
            },
            ScError::MissingColumn {
                column: "reference".to_owned(),
            },
            ScError::MalformedPair {
                line: 7,
                detail: "row has 2 fields, expected at least 3".to_owned(),
            },
            ScError::DegenerateInput {
                id: "clip-004".to_owned(),
                detail: "reference is empty after tokenization".to_owned(),
            },
            ScError::InvalidRequest("bad flag combination".to_owned()),
        ]
    }

    #[test]
    fn display_messages_for_all_variants() {
        let expected = [
            "i/o failure",
            "json failure",
            "malformed csv at line 3",
            "missing required column `reference`",
            "malformed pair at line 7",
            "degenerate input for `clip-004`",
            "invalid request",
        ];
        let variants = all_variants();
        assert_eq!(
            variants.len(),
            expected.len(),
            "test should cover every ScError variant"
        );
        for (error, substring) in variants.iter().zip(expected) {
            let text = error.to_string();
            assert!(text.contains(substring), "expected `{substring}` in: {text}");
        }
    }

    #[test]
    fn error_codes_are_unique_and_well_formed() {
        let mut seen = std::collections::HashSet::new();
        for error in all_variants() {
            let code = error.error_code();
            assert!(seen.insert(code), "duplicate error_code detected: `{code}`");
            assert!(code.starts_with("SC-"), "code must start with SC-: `{code}`");
            let suffix = &code[3..];
            assert!(
                !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_uppercase() || c == '-'),
                "code suffix must match [A-Z-]+ but got `{suffix}` in `{code}`"
            );
        }
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sc_err: ScError = io_err.into();
        assert!(matches!(sc_err, ScError::Io(_)));
        assert!(sc_err.to_string().contains("file not found"));
    }

    #[test]
    fn degenerate_input_displays_pair_id_and_detail() {
        let err = ScError::DegenerateInput {
            id: "sample-17".to_owned(),
            detail: "reference is empty after tokenization".to_owned(),
        };
        let text = err.to_string();
        assert!(text.contains("sample-17"), "should include pair id: {text}");
        assert!(
            text.contains("empty after tokenization"),
            "should include detail: {text}"
        );
    }

    #[test]
    fn sc_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<ScError>();
        assert_sync::<ScError>();
    }
}
