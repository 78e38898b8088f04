/*!
 * Tests for error types
 */

use heatsheet::errors::{AppError, ExportError, ExtractError};

/// Test extract error display formatting
#[test]
fn test_extract_error_display_shouldIncludeDetail() {
    let err = ExtractError::Unreadable("program.pdf".to_string());
    assert_eq!(err.to_string(), "Input document is not readable: program.pdf");

    let err = ExtractError::ExtractionFailed("bad xref".to_string());
    assert!(err.to_string().contains("bad xref"));
}

/// Test export error display formatting
#[test]
fn test_export_error_display_shouldIncludePathAndMessage() {
    let err = ExportError::WriteFailed {
        path: "out.xlsx".to_string(),
        message: "permission denied".to_string(),
    };

    let rendered = err.to_string();
    assert!(rendered.contains("out.xlsx"));
    assert!(rendered.contains("permission denied"));
}

/// Test error conversions into the application error
#[test]
fn test_app_error_fromSourceErrors_shouldWrapVariants() {
    let app: AppError = ExtractError::Unreadable("x".to_string()).into();
    assert!(matches!(app, AppError::Extract(_)));

    let app: AppError = ExportError::WorkbookBuild("x".to_string()).into();
    assert!(matches!(app, AppError::Export(_)));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let app: AppError = io.into();
    assert!(matches!(app, AppError::File(_)));

    let any = anyhow::anyhow!("boom");
    let app: AppError = any.into();
    assert!(matches!(app, AppError::Unknown(_)));
}
