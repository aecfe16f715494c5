use hw::core::error::HwError;
use hw::formats::{FormatHandler, FormatRegistry};
use std::path::Path;

#[test]
fn builtin_formats_round_trip_through_extension_inference() {
    let registry = FormatRegistry::builtin().unwrap();
    for id in ["markdown", "latex"] {
        let handler = registry.resolve(id).unwrap();
        let probe = format!("x.{}", handler.extension());
        let inferred = registry.infer(&probe).unwrap();
        assert_eq!(inferred.id(), id);
    }
}

#[test]
fn unknown_name_is_unknown_format() {
    let registry = FormatRegistry::builtin().unwrap();
    assert!(matches!(
        registry.resolve("docx"),
        Err(HwError::UnknownFormat(_))
    ));
}

#[test]
fn degenerate_filenames_are_unknown_format() {
    let registry = FormatRegistry::builtin().unwrap();
    for name in ["README", "archive.", "essay.docx", "", ".markdown."] {
        assert!(
            matches!(registry.infer(name), Err(HwError::UnknownFormat(_))),
            "expected UnknownFormat for {:?}",
            name
        );
    }
}

struct Shadow;

impl FormatHandler for Shadow {
    fn id(&self) -> &'static str {
        "shadow"
    }
    fn extension(&self) -> &'static str {
        "markdown"
    }
    fn default_body(&self, _title: &str, _class: &str) -> String {
        String::new()
    }
    fn print(&self, _path: &Path, _pdf: bool) -> Result<(), HwError> {
        Ok(())
    }
}

#[test]
fn duplicate_extension_is_a_registration_error() {
    let mut registry = FormatRegistry::builtin().unwrap();
    let err = registry.register(Box::new(Shadow)).unwrap_err();
    assert!(matches!(err, HwError::ValidationError(_)));
    // The failed registration must not shadow the original handler.
    assert_eq!(registry.infer("x.markdown").unwrap().id(), "markdown");
}

#[test]
fn duplicate_id_is_a_registration_error() {
    struct Clone2;
    impl FormatHandler for Clone2 {
        fn id(&self) -> &'static str {
            "markdown"
        }
        fn extension(&self) -> &'static str {
            "mdown"
        }
        fn default_body(&self, _title: &str, _class: &str) -> String {
            String::new()
        }
        fn print(&self, _path: &Path, _pdf: bool) -> Result<(), HwError> {
            Ok(())
        }
    }
    let mut registry = FormatRegistry::builtin().unwrap();
    assert!(registry.register(Box::new(Clone2)).is_err());
}

#[test]
fn markdown_default_body_has_title_and_class() {
    let registry = FormatRegistry::builtin().unwrap();
    let handler = registry.resolve("markdown").unwrap();
    assert_eq!(
        handler.default_body("Essay One", "Class 8"),
        "# Essay One\n#### Class 8\n\n"
    );
}

#[test]
fn latex_default_body_is_a_compilable_skeleton() {
    let registry = FormatRegistry::builtin().unwrap();
    let body = registry
        .resolve("latex")
        .unwrap()
        .default_body("Essay One", "Class 8");
    assert!(body.starts_with("\\documentclass{article}"));
    assert!(body.contains("\\title{Essay One}"));
    assert!(body.contains("\\author{Class 8}"));
    assert!(body.contains("\\end{document}"));
}

#[test]
fn printing_a_missing_source_is_a_render_failure() {
    let registry = FormatRegistry::builtin().unwrap();
    for id in ["markdown", "latex"] {
        let handler = registry.resolve(id).unwrap();
        let err = handler
            .print(Path::new("/nonexistent/Essay_One.any"), true)
            .unwrap_err();
        assert!(matches!(err, HwError::RenderFailure(_)));
    }
}
