//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `basic_fs` package `README.md`.

use basic_fs::{DotfilePolicy, Filesystem};

fn main() {
    let scratch = std::env::temp_dir().join("basic_fs_readme_example");

    // Succeeds whether or not the directory is already there.
    if !basic_fs::create_directory(&scratch) {
        println!("Could not create {}", scratch.display());
        return;
    }

    std::fs::write(scratch.join("notes.txt"), "hello").unwrap();
    std::fs::write(scratch.join(".secret"), "hidden").unwrap();

    for entry in basic_fs::list_directory(&scratch) {
        println!(
            "{} (directory: {})",
            entry.name().to_string_lossy(),
            entry.is_directory()
        );
    }

    // Hidden entries can be included when needed.
    let filesystem = Filesystem::builder()
        .dotfile_policy(DotfilePolicy::ExcludeTraversal)
        .build();

    println!(
        "{} entries including hidden ones",
        filesystem.list_directory(&scratch).len()
    );

    println!("Exists: {}", basic_fs::path_exists(&scratch));

    std::fs::remove_dir_all(&scratch).unwrap();
}
