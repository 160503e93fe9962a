// ABOUTME: `search` command listing geocoder candidates for a place name
// ABOUTME: An empty list means no match or an unavailable geocoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use super::CliContext;

/// Print up to five candidates
pub async fn search(context: &CliContext, query: &str) {
    let candidates = context.geocoder.search(query).await;
    if candidates.is_empty() {
        println!("No places found for \"{query}\"");
        return;
    }
    for (index, candidate) in candidates.iter().enumerate() {
        println!(
            "{:>2}. {}  ({:.4}, {:.4})",
            index + 1,
            candidate.display_name,
            candidate.latitude,
            candidate.longitude
        );
    }
}
