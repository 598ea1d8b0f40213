use crate::models::{KeywordSet, Match};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, trace};

/// Bytes inspected for a NUL when deciding whether a file is binary
const BINARY_SNIFF_LEN: u64 = 8 * 1024;

/// Scan every path in parallel, keeping the input order in the output
///
/// A file that cannot be read contributes no matches.
pub fn scan_paths(root: &Path, paths: &[String], keywords: &KeywordSet) -> Vec<Match> {
    let matches: Vec<Match> = paths
        .par_iter()
        .map(|path| match scan_file(root, path, keywords) {
            Ok(found) => found,
            Err(err) => {
                trace!(path = %path, error = %err, "skipping unreadable file");
                Vec::new()
            }
        })
        .flatten()
        .collect();

    debug!(files = paths.len(), matches = matches.len(), "scan complete");
    matches
}

/// Scan a single file for marker lines
///
/// `path` is reported as given; it is read from `root.join(path)`.
pub fn scan_file(root: &Path, path: &str, keywords: &KeywordSet) -> io::Result<Vec<Match>> {
    let mut file = File::open(root.join(path))?;
    if !file.metadata()?.is_file() {
        return Ok(Vec::new());
    }

    if is_binary(&mut file)? {
        trace!(path = %path, "skipping binary file");
        return Ok(Vec::new());
    }
    file.seek(SeekFrom::Start(0))?;

    let reader = BufReader::new(file);
    let mut matches = Vec::new();

    for (line_num, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        // Non-UTF-8 bytes become U+FFFD; markers are ASCII and still match
        let line = String::from_utf8_lossy(&raw);

        if let Some(start) = keywords.find(&line) {
            matches.push(Match {
                path: path.to_string(),
                line_number: line_num + 1,
                fragment: line[start..].to_string(),
            });
        }
    }

    Ok(matches)
}

fn is_binary(file: &mut File) -> io::Result<bool> {
    let mut head = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    file.by_ref().take(BINARY_SNIFF_LEN).read_to_end(&mut head)?;
    Ok(head.contains(&0))
}
