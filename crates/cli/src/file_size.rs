// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File size formatting for the census log and the report.

const KIB: u64 = 1024;

/// Format a byte count with thousands separators (e.g., "12,345").
pub fn group_thousands(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Size in kibibytes with two decimals (e.g., "1.50").
pub fn kibibytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / KIB as f64)
}

/// Census line format: `12,345 bytes (12.06 KiB)`.
pub fn human_size(bytes: u64) -> String {
    format!("{} bytes ({} KiB)", group_thousands(bytes), kibibytes(bytes))
}

#[cfg(test)]
#[path = "file_size_tests.rs"]
mod tests;
