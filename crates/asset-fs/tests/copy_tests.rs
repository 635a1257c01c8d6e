use assert_fs::prelude::*;
use asset_fs::{NormalizedPath, io};
use predicates::prelude::*;

#[test]
fn copy_into_nested_asset_dir() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("mindwave-logo.png");
    source.write_binary(b"\x89PNG\r\n\x1a\nlogo").unwrap();
    let dest = temp.child("public/binaural-assets/img/logo.png");

    let report = io::copy_file(
        &NormalizedPath::new(source.path()),
        &NormalizedPath::new(dest.path()),
    )
    .unwrap();

    dest.assert(predicate::path::is_file());
    dest.assert(b"\x89PNG\r\n\x1a\nlogo" as &[u8]);
    assert_eq!(report.bytes, 12);
}

#[test]
fn atomic_write_leaves_no_temp_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = temp.child("public/mindwave.html");

    io::write_text(&NormalizedPath::new(target.path()), "<html></html>").unwrap();

    target.assert("<html></html>");
    temp.child("public/.mindwave.html.tmp")
        .assert(predicate::path::missing());
    let entries: Vec<_> = std::fs::read_dir(temp.child("public").path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("mindwave.html")]);
}
