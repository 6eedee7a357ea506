//! Field schema module - static declarations of target record shapes
//!
//! A `FieldSchema` declares, for one record type, the expected field
//! names, each field's kind, and its normalization and default rules.
//! Schemas are static configuration, never mutated at runtime; the four
//! record types the interview flow needs are declared at the bottom of
//! this module.

/// Kind of a declared field, with its normalization and default rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Scalar string, trimmed on bind
    Text {
        /// Value used when the field is absent, mistyped, or blank
        /// (blank only when `required` is set)
        default: &'static str,

        /// Replace an empty-after-trim value with the default
        required: bool,
    },

    /// Integer clamped into the closed interval `[min, max]`
    BoundedInt {
        /// Inclusive lower bound
        min: i64,

        /// Inclusive upper bound
        max: i64,

        /// Value used when the field is absent or mistyped
        default: i64,
    },

    /// Ordered list of strings; elements are trimmed and blanks dropped
    TextList,

    /// Ordered list of sub-records, each bound against a nested schema
    ItemList {
        /// Schema every element is bound against
        item: &'static FieldSchema,
    },
}

/// One declared field of a record type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// JSON key the field is read by (case-sensitive)
    pub key: &'static str,

    /// Kind and rules of the field
    pub kind: FieldKind,
}

/// Static declaration of one target record type
#[derive(Debug, PartialEq)]
pub struct FieldSchema {
    /// Short name used in logs and diagnostics
    pub name: &'static str,

    /// Declared fields, in output order
    pub fields: &'static [FieldSpec],
}

impl FieldSchema {
    /// Look up a declared field by key
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.key == key)
    }

    /// Validate the declaration
    ///
    /// Checks that keys are unique and non-empty, that bounded-integer
    /// ranges are ordered with the default inside them, and that nested
    /// item schemas are valid too.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("schema name must not be empty".to_string());
        }
        for (idx, spec) in self.fields.iter().enumerate() {
            if spec.key.is_empty() {
                return Err(format!("field {} of '{}' has an empty key", idx, self.name));
            }
            if self.fields[..idx].iter().any(|prior| prior.key == spec.key) {
                return Err(format!("duplicate key '{}' in '{}'", spec.key, self.name));
            }
            match spec.kind {
                FieldKind::BoundedInt { min, max, default } => {
                    if min > max {
                        return Err(format!(
                            "field '{}' of '{}': min {} exceeds max {}",
                            spec.key, self.name, min, max
                        ));
                    }
                    if default < min || default > max {
                        return Err(format!(
                            "field '{}' of '{}': default {} outside [{}, {}]",
                            spec.key, self.name, default, min, max
                        ));
                    }
                }
                FieldKind::ItemList { item } => item.validate()?,
                FieldKind::Text { .. } | FieldKind::TextList => {}
            }
        }
        Ok(())
    }
}

/// One question inside a question set
pub static QUESTION: FieldSchema = FieldSchema {
    name: "question",
    fields: &[
        FieldSpec {
            key: "id",
            kind: FieldKind::BoundedInt {
                min: 1,
                max: 999,
                default: 1,
            },
        },
        FieldSpec {
            key: "content",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "category",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
    ],
};

/// Generated interview questions: `{"questions": [{id, content, category}]}`
pub static QUESTION_SET: FieldSchema = FieldSchema {
    name: "question_set",
    fields: &[FieldSpec {
        key: "questions",
        kind: FieldKind::ItemList { item: &QUESTION },
    }],
};

/// Scored answer evaluation: `{"score": 1-10, "feedback", "suggestions"}`
///
/// Feedback and suggestions are required-non-blank; their defaults are
/// the coaching lines an evaluation falls back to when the model gives
/// no usable reply.
pub static EVALUATION: FieldSchema = FieldSchema {
    name: "evaluation",
    fields: &[
        FieldSpec {
            key: "score",
            kind: FieldKind::BoundedInt {
                min: 1,
                max: 10,
                default: 6,
            },
        },
        FieldSpec {
            key: "feedback",
            kind: FieldKind::Text {
                default: "The answer shows an understanding of the question, \
                          but more concrete examples would strengthen it.",
                required: true,
            },
        },
        FieldSpec {
            key: "suggestions",
            kind: FieldKind::Text {
                default: "Support your points with specific cases from past \
                          work, structured with the STAR method (situation, \
                          task, action, result).",
                required: true,
            },
        },
    ],
};

/// Structured fields of a parsed resume
///
/// Scalars may legitimately be blank: the extraction prompt asks the
/// model to return an empty string when the information is unavailable.
pub static RESUME_FIELDS: FieldSchema = FieldSchema {
    name: "resume_fields",
    fields: &[
        FieldSpec {
            key: "name",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "email",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "phone",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "education",
            kind: FieldKind::TextList,
        },
        FieldSpec {
            key: "experience",
            kind: FieldKind::TextList,
        },
        FieldSpec {
            key: "skills",
            kind: FieldKind::TextList,
        },
    ],
};

/// Structured fields of a parsed job description
pub static JD_FIELDS: FieldSchema = FieldSchema {
    name: "jd_fields",
    fields: &[
        FieldSpec {
            key: "title",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "company",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "description",
            kind: FieldKind::Text {
                default: "",
                required: false,
            },
        },
        FieldSpec {
            key: "requirements",
            kind: FieldKind::TextList,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schemas_are_valid() {
        for schema in [&QUESTION_SET, &EVALUATION, &RESUME_FIELDS, &JD_FIELDS] {
            assert!(schema.validate().is_ok(), "schema '{}' invalid", schema.name);
        }
    }

    #[test]
    fn test_field_lookup() {
        let spec = EVALUATION.field("score").unwrap();
        assert!(matches!(
            spec.kind,
            FieldKind::BoundedInt { min: 1, max: 10, .. }
        ));
        assert!(EVALUATION.field("Score").is_none()); // case-sensitive
        assert!(EVALUATION.field("missing").is_none());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        static BAD_RANGE: FieldSchema = FieldSchema {
            name: "bad",
            fields: &[FieldSpec {
                key: "n",
                kind: FieldKind::BoundedInt {
                    min: 10,
                    max: 1,
                    default: 5,
                },
            }],
        };
        assert!(BAD_RANGE.validate().is_err());
    }

    #[test]
    fn test_out_of_range_default_rejected() {
        static BAD_DEFAULT: FieldSchema = FieldSchema {
            name: "bad",
            fields: &[FieldSpec {
                key: "n",
                kind: FieldKind::BoundedInt {
                    min: 1,
                    max: 10,
                    default: 0,
                },
            }],
        };
        assert!(BAD_DEFAULT.validate().is_err());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        static DUPED: FieldSchema = FieldSchema {
            name: "duped",
            fields: &[
                FieldSpec {
                    key: "title",
                    kind: FieldKind::Text {
                        default: "",
                        required: false,
                    },
                },
                FieldSpec {
                    key: "title",
                    kind: FieldKind::TextList,
                },
            ],
        };
        assert!(DUPED.validate().is_err());
    }

    #[test]
    fn test_nested_item_schema_is_checked() {
        static BAD_ITEM: FieldSchema = FieldSchema {
            name: "bad_item",
            fields: &[FieldSpec {
                key: "n",
                kind: FieldKind::BoundedInt {
                    min: 2,
                    max: 1,
                    default: 1,
                },
            }],
        };
        static WRAPPER: FieldSchema = FieldSchema {
            name: "wrapper",
            fields: &[FieldSpec {
                key: "items",
                kind: FieldKind::ItemList { item: &BAD_ITEM },
            }],
        };
        assert!(WRAPPER.validate().is_err());
    }
}
