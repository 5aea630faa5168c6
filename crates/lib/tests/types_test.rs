//! # Core Type Tests
//!
//! Media type parsing and the on-disk naming of uploads, which must never let a
//! client-supplied name escape the upload directory.

use socialyze::types::{stored_name_for, MediaType, UploadedFile};
use std::path::Path;

#[test]
fn test_media_type_ignores_case_and_parameters() {
    assert_eq!(
        MediaType::from_mime("IMAGE/PNG; charset=x"),
        Some(MediaType::Png)
    );
    assert_eq!(
        MediaType::from_mime(" application/pdf "),
        Some(MediaType::Pdf)
    );
}

#[test]
fn test_media_type_accepts_jpg_alias() {
    assert_eq!(MediaType::from_mime("image/jpg"), Some(MediaType::Jpeg));
    assert_eq!(MediaType::from_mime("image/jpeg"), Some(MediaType::Jpeg));
    assert_eq!(MediaType::Jpeg.as_mime(), "image/jpeg");
}

#[test]
fn test_media_type_rejects_everything_else() {
    assert_eq!(MediaType::from_mime("text/plain"), None);
    assert_eq!(MediaType::from_mime("image/gif"), None);
    assert_eq!(MediaType::from_mime(""), None);
}

#[test]
fn test_only_pdf_is_a_document() {
    assert!(MediaType::Pdf.is_document());
    assert!(!MediaType::Png.is_document());
    assert!(!MediaType::Jpeg.is_document());
}

#[test]
fn test_stored_name_prefixes_timestamp() {
    assert_eq!(stored_name_for("flyer.pdf", 1_700_000_000_000), "1700000000000-flyer.pdf");
}

#[test]
fn test_stored_name_drops_directory_components() {
    assert_eq!(stored_name_for("../../etc/passwd", 1), "1-passwd");
    assert_eq!(stored_name_for("C:\\x\\y.png", 1), "1-y.png");
    assert_eq!(stored_name_for("nested/dir/poster.jpg", 1), "1-poster.jpg");
}

#[test]
fn test_stored_name_replaces_unusable_names() {
    assert_eq!(stored_name_for("..", 1), "1-upload");
    assert_eq!(stored_name_for("a/..", 1), "1-upload");
    assert_eq!(stored_name_for(".", 1), "1-upload");
    assert_eq!(stored_name_for("dir/", 1), "1-upload");
    assert_eq!(stored_name_for("", 1), "1-upload");
}

#[test]
fn test_uploaded_file_stays_inside_upload_dir() {
    let upload_dir = Path::new("/srv/uploads");
    let file = UploadedFile::new(upload_dir, "../../etc/passwd", MediaType::Png, 10, 42);

    assert_eq!(file.stored_name, "42-passwd");
    assert_eq!(file.path, upload_dir.join("42-passwd"));
    assert_eq!(file.path.parent(), Some(upload_dir));
    assert_eq!(file.original_name, "../../etc/passwd");
}
