//! Shortens display columns by dropping structure every entry shares.
//!
//! Entries are treated as dot-separated labels (`n1.east.example.net`). The
//! longest run of trailing labels common to every entry is removed, but the
//! first label of an entry is never touched. Removing the same suffix from
//! every entry cannot make two different entries equal; the result is still
//! checked and the input is returned unchanged if it ever would.
//!
//! Dots in an IP address are not domain labels, so a list holding any IP
//! literal is left alone.

use std::{
    collections::HashMap,
    net::IpAddr,
};

/// Compacts `strings`, returning one entry per input in the same order.
pub fn compact<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    let labels = strings
        .iter()
        .map(|s| s.as_ref().split('.').collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let unchanged = || strings.iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>();

    if strings.iter().any(|s| s.as_ref().parse::<IpAddr>().is_ok()) {
        return unchanged();
    }

    let Some(shortest) = labels.iter().map(Vec::len).min() else {
        return Vec::new();
    };

    let mut shared = 0;
    while shared + 1 < shortest {
        let label = labels[0][labels[0].len() - 1 - shared];
        if labels.iter().any(|l| l[l.len() - 1 - shared] != label) {
            break;
        }
        shared += 1;
    }
    if shared == 0 {
        return unchanged();
    }

    let compacted = labels
        .iter()
        .map(|l| l[..l.len() - shared].join("."))
        .collect::<Vec<_>>();

    if !keeps_entries_apart(strings, &compacted) {
        warn!(shared, "compaction would merge distinct entries, leaving them as is");
        return unchanged();
    }
    compacted
}

fn keeps_entries_apart<S: AsRef<str>>(original: &[S], compacted: &[String]) -> bool {
    let mut seen = HashMap::<&str, &str>::new();
    original.iter().zip(compacted).all(|(original, compacted)| {
        let original = original.as_ref();
        *seen.entry(compacted.as_str()).or_insert(original) == original
    })
}
