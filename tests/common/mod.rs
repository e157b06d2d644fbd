#![allow(dead_code)]

use assert_fs::TempDir;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use rstest::fixture;
use std::io::Write;
use std::path::{Path, PathBuf};

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Gitdir of a synthetic repository under `dir`, with the layout the
/// reader consumes (`objects/`, `refs/heads/`).
pub fn init_gitdir(dir: &Path) -> PathBuf {
    let gitdir = dir.join(".git");
    std::fs::create_dir_all(gitdir.join("objects")).expect("Failed to create objects dir");
    std::fs::create_dir_all(gitdir.join("refs").join("heads"))
        .expect("Failed to create refs dir");
    gitdir
}

/// Compress `"<object_type> <len>\0<body>"` and drop it into the store at
/// the path derived from `id`.
pub fn write_loose_object(gitdir: &Path, id: &str, object_type: &str, body: &[u8]) {
    let mut data = format!("{} {}\0", object_type, body.len()).into_bytes();
    data.extend_from_slice(body);
    write_raw_object(gitdir, id, &data);
}

/// Compress arbitrary bytes into the store, header included as given. Used
/// to craft objects whose header lies about the body size.
pub fn write_raw_object(gitdir: &Path, id: &str, data: &[u8]) {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("Failed to compress object");
    let compressed = encoder.finish().expect("Failed to finish compression");

    let object_dir = gitdir.join("objects").join(&id[..2]);
    std::fs::create_dir_all(&object_dir).expect("Failed to create object dir");
    std::fs::write(object_dir.join(&id[2..]), compressed).expect("Failed to write object");
}

pub fn write_ref(gitdir: &Path, branch: &str, content: &str) {
    let ref_path = gitdir.join("refs").join("heads").join(branch);
    std::fs::create_dir_all(ref_path.parent().expect("ref path has a parent"))
        .expect("Failed to create ref dir");
    std::fs::write(ref_path, content).expect("Failed to write ref");
}

/// A deterministic fake object id: `digit` repeated 40 times.
pub fn oid(digit: char) -> String {
    digit.to_string().repeat(40)
}

/// A commit body in wire format with a fixed author header.
pub fn commit_body(tree: &str, parents: &[&str], message: &str) -> Vec<u8> {
    let mut body = format!("tree {tree}\n");
    for parent in parents {
        body.push_str(&format!("parent {parent}\n"));
    }
    body.push_str("author A U Thor <author@example.com> 1700000000 +0000\n");
    body.push('\n');
    body.push_str(message);
    body.into_bytes()
}

/// One tree entry in wire format: `<mode> <name>\0` plus the raw hash.
pub fn tree_entry(mode: &str, name: &str, id: &str) -> Vec<u8> {
    let mut entry = format!("{mode} {name}\0").into_bytes();
    entry.extend_from_slice(&hex::decode(id).expect("valid hex id"));
    entry
}
