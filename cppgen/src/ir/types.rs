//! Type IR definitions.
//!
//! This module defines the type representation at the heart of the
//! intermediate representation. A field's source type string is classified
//! once, when the model is built, so that every emitter can branch on the
//! resulting [`TypeKind`] instead of re-inspecting type strings at each
//! emission site.

use serde::{Deserialize, Serialize};

/// Sequence container templates recognized by [`TypeIR::classify`].
const SEQUENCE_TEMPLATES: &[&str] = &["std::vector", "vector", "std::deque", "std::list"];

/// Type intermediate representation.
///
/// Pairs the canonical source type identifier with its structural
/// classification. Constructed via [`TypeIR::classify`] for source type
/// strings, or directly for hand-built schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeIR {
    /// Canonical source type identifier (e.g. `std::vector<int>`)
    pub name: String,

    /// Structural classification of this type
    pub kind: TypeKind,
}

/// Structural classification of a type.
///
/// Classification is a pure function of the type's shape and is shared by
/// every emitter; which kinds get special-cased code is each emitter's own
/// policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "element")]
pub enum TypeKind {
    /// A plain, non-parametrized type. Unrecognized plain names land here
    /// rather than failing.
    Scalar,

    /// A parametrized sequence container, carrying its element type.
    Sequence(Box<TypeIR>),

    /// A parametrized type that is not a recognized sequence. Emitters are
    /// expected to pass these through rather than reject them.
    Opaque,
}

impl TypeIR {
    /// Create a scalar type with the given name.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Scalar,
        }
    }

    /// Create a sequence type with the given name and element.
    pub fn sequence(name: impl Into<String>, element: TypeIR) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Sequence(Box::new(element)),
        }
    }

    /// Create an opaque type with the given name.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Opaque,
        }
    }

    /// Classify a source type string.
    ///
    /// A recognized sequence template (`std::vector<T>` and friends)
    /// becomes [`TypeKind::Sequence`] with the element classified
    /// recursively. Any other parametrized type becomes [`TypeKind::Opaque`].
    /// Plain names, recognized or not, are [`TypeKind::Scalar`].
    pub fn classify(source: &str) -> Self {
        let source = source.trim();

        if let Some((template, argument)) = split_template(source) {
            if SEQUENCE_TEMPLATES.contains(&template) {
                return Self::sequence(source, Self::classify(argument));
            }
            return Self::opaque(source);
        }

        Self::scalar(source)
    }

    /// The element type, when this is a sequence.
    pub fn element(&self) -> Option<&TypeIR> {
        match &self.kind {
            TypeKind::Sequence(element) => Some(element),
            TypeKind::Scalar | TypeKind::Opaque => None,
        }
    }

    /// Check if this is a sequence type.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, TypeKind::Sequence(_))
    }
}

impl TypeKind {
    /// Short lowercase label for error messages.
    pub fn label(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Sequence(_) => "sequence",
            TypeKind::Opaque => "opaque",
        }
    }
}

/// Split `Template<Argument>` into its head and argument text.
///
/// Returns `None` when the string is not a parametrized type. The argument
/// spans from the first `<` to the final `>`, so nested parameters stay
/// intact for recursive classification.
fn split_template(source: &str) -> Option<(&str, &str)> {
    let open = source.find('<')?;
    if !source.ends_with('>') {
        return None;
    }
    let template = source[..open].trim_end();
    let argument = &source[open + 1..source.len() - 1];
    Some((template, argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scalar() {
        let ty = TypeIR::classify("float");
        assert_eq!(ty.name, "float");
        assert_eq!(ty.kind, TypeKind::Scalar);
        assert!(ty.element().is_none());
    }

    #[test]
    fn test_classify_unknown_scalar_is_not_an_error() {
        let ty = TypeIR::classify("MyCustomType");
        assert_eq!(ty.kind, TypeKind::Scalar);
    }

    #[test]
    fn test_classify_vector() {
        let ty = TypeIR::classify("std::vector<int>");
        assert_eq!(ty.name, "std::vector<int>");
        assert!(ty.is_sequence());

        let element = ty.element().unwrap();
        assert_eq!(element.name, "int");
        assert_eq!(element.kind, TypeKind::Scalar);
    }

    #[test]
    fn test_classify_nested_vector() {
        let ty = TypeIR::classify("std::vector<std::vector<float>>");
        let inner = ty.element().unwrap();
        assert!(inner.is_sequence());
        assert_eq!(inner.element().unwrap().name, "float");
    }

    #[test]
    fn test_classify_unrecognized_template_is_opaque() {
        let ty = TypeIR::classify("std::map<int, std::string>");
        assert_eq!(ty.kind, TypeKind::Opaque);
        assert!(ty.element().is_none());
    }

    #[test]
    fn test_classify_custom_template_is_opaque() {
        let ty = TypeIR::classify("Wrapper<int>");
        assert_eq!(ty.kind, TypeKind::Opaque);
    }

    #[test]
    fn test_classify_trims_whitespace() {
        let ty = TypeIR::classify("  std::vector<int> ");
        assert!(ty.is_sequence());
        assert_eq!(ty.name, "std::vector<int>");
    }

    #[test]
    fn test_classify_sequence_of_opaque_element() {
        let ty = TypeIR::classify("std::vector<std::pair<int, int>>");
        assert!(ty.is_sequence());
        assert_eq!(ty.element().unwrap().kind, TypeKind::Opaque);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(TypeKind::Scalar.label(), "scalar");
        assert_eq!(TypeKind::Opaque.label(), "opaque");
        assert_eq!(
            TypeIR::classify("std::vector<int>").kind.label(),
            "sequence"
        );
    }

    #[test]
    fn test_split_template() {
        assert_eq!(
            split_template("std::vector<int>"),
            Some(("std::vector", "int"))
        );
        assert_eq!(split_template("float"), None);
        // Unbalanced input stays a plain name rather than a template
        assert_eq!(split_template("std::vector<int"), None);
    }

    #[test]
    fn test_serde_representation() {
        let ty = TypeIR::classify("std::vector<int>");
        let value = serde_json::to_value(&ty).unwrap();

        assert_eq!(value["name"], "std::vector<int>");
        assert_eq!(value["kind"]["category"], "Sequence");
        assert_eq!(value["kind"]["element"]["name"], "int");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Classification is total: any input resolves to exactly one
            /// kind, and only sequences carry an element.
            #[test]
            fn classification_is_total(source in "\\PC{0,40}") {
                let ty = TypeIR::classify(&source);
                match &ty.kind {
                    TypeKind::Sequence(_) => prop_assert!(ty.element().is_some()),
                    TypeKind::Scalar | TypeKind::Opaque => prop_assert!(ty.element().is_none()),
                }
            }

            #[test]
            fn sequence_templates_always_expose_their_element(inner in "[a-z]{1,8}") {
                let ty = TypeIR::classify(&format!("std::vector<{}>", inner));
                prop_assert!(ty.is_sequence());
                prop_assert_eq!(ty.element().unwrap().name.as_str(), inner.as_str());
            }
        }
    }
}
