//! Fixture repositories built directly on disk
//!
//! Scenarios fabricate loose commit objects and branch ref files the
//! same way git lays them out, so the binary under test reads a real
//! `.git` directory without any git installation being involved.

use derive_new::new;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

/// Tree hash of the empty tree, shared by every fabricated commit
const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();

    RandomAuthor::new(name, email)
}

/// Lay out the skeleton of a `.git` directory with no commits yet
pub fn init_repo(dir: &Path) {
    let git_path = dir.join(".git");
    std::fs::create_dir_all(git_path.join("objects")).expect("Failed to create objects dir");
    std::fs::create_dir_all(git_path.join("refs/heads")).expect("Failed to create refs dir");
    std::fs::write(git_path.join("HEAD"), "ref: refs/heads/master\n")
        .expect("Failed to write HEAD");
}

/// Fabricate a loose commit object and return its hash
///
/// The commit gets the empty tree, the given parents in order, a random
/// author and the message; the object is zlib compressed into
/// `.git/objects` exactly like git stores it.
pub fn write_commit(dir: &Path, parents: &[&str], message: &str) -> String {
    let author = generate_random_author();

    let mut body = format!("tree {EMPTY_TREE_OID}\n");
    for parent in parents {
        body.push_str(&format!("parent {parent}\n"));
    }
    body.push_str(&format!(
        "author {} <{}> 1700000000 +0000\n",
        author.name, author.email
    ));
    body.push_str(&format!(
        "committer {} <{}> 1700000000 +0000\n",
        author.name, author.email
    ));
    body.push('\n');
    body.push_str(message);
    body.push('\n');

    let mut object = format!("commit {}\0", body.len()).into_bytes();
    object.extend_from_slice(body.as_bytes());

    let oid = {
        let mut hasher = Sha1::new();
        hasher.update(&object);
        format!("{:x}", hasher.finalize())
    };

    write_loose_object(dir, &oid, &object);
    oid
}

/// Store arbitrary bytes as the loose object for `oid`, for scenarios
/// that need something other than a well-formed commit on disk
pub fn write_object_raw(dir: &Path, oid: &str, content: &[u8]) {
    write_loose_object(dir, oid, content);
}

/// Point the branch `name` (nested names allowed) at `oid`
pub fn write_branch(dir: &Path, name: &str, oid: &str) {
    let branch_path = dir.join(".git/refs/heads").join(name);
    std::fs::create_dir_all(branch_path.parent().expect("branch path has a parent"))
        .expect("Failed to create branch parent dirs");
    std::fs::write(branch_path, format!("{oid}\n")).expect("Failed to write branch ref");
}

fn write_loose_object(dir: &Path, oid: &str, content: &[u8]) {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(content)
        .expect("Failed to compress object");
    let compressed = encoder.finish().expect("Failed to finish compression");

    let object_dir = dir.join(".git/objects").join(&oid[..2]);
    std::fs::create_dir_all(&object_dir).expect("Failed to create object dir");
    std::fs::write(object_dir.join(&oid[2..]), compressed).expect("Failed to write object");
}
