//! Module specifier resolution

use crate::core::file_system::FileSystem;
use crate::models::Reference;
use crate::utils::paths::join_paths;

/// Specifiers that always name a directory
const DIRECTORY_SPECIFIERS: [&str; 4] = [".", "..", "./", "../"];

/// Map a normalised relative specifier to the declaration file it names.
///
/// `lib/a` becomes `lib/a.d.ts` when that file exists and `lib/a/index.d.ts`
/// otherwise. The index fallback is returned without checking existence; a
/// missing file surfaces when it is read.
pub fn resolve_module<F: FileSystem + ?Sized>(specifier: &str, fs: &F) -> String {
    let dts = format!("{}.d.ts", specifier);
    if !DIRECTORY_SPECIFIERS.contains(&specifier) && fs.exists(&dts) {
        return dts;
    }

    let directory = specifier.strip_suffix('/').unwrap_or(specifier);
    let index = join_paths(directory, "index.d.ts");
    if index == "./index.d.ts" {
        "index.d.ts".to_string()
    } else {
        index
    }
}

/// File name a reference points at
pub fn resolve_reference<F: FileSystem + ?Sized>(reference: &Reference, fs: &F) -> String {
    if reference.exact {
        reference.text.clone()
    } else {
        resolve_module(&reference.text, fs)
    }
}
