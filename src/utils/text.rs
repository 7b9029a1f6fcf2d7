// ABOUTME: Text helpers for human-readable tool output
// ABOUTME: Provides word-boundary title casing for food and exercise names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Title-case a name: a letter following a non-letter is upper-cased, every
/// other letter is lower-cased.
///
/// Applying it twice yields the same string as applying it once.
///
/// ```
/// use nutritionix_mcp_server::utils::text::title_case;
///
/// assert_eq!(title_case("greek yogurt"), "Greek Yogurt");
/// assert_eq!(title_case("BAGEL-with cream cheese"), "Bagel-With Cream Cheese");
/// ```
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                // Multi-char expansions (ß -> SS) keep only their first char upper-cased
                let mut upper = ch.to_uppercase();
                output.extend(upper.next());
                output.extend(upper.flat_map(char::to_lowercase));
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }

    output
}
