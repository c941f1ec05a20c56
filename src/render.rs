/**
Template rendering for description blocks.

A template line is raw grammar text: `{i}`-style placeholders indexed by the
block's id order, optional unit-conversion directive keywords, and bracketed
either/or phrases. Eg.
    +{0}% chance to [Critical|Critical Hit]
    2|# 0 # "Fires {0} [Projectile|Projectiles]"
    Base duration is {0} seconds milliseconds_to_seconds_2dp_if_required
*/
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::{
    numeric::{format_signed, format_value, round_dp},
    types::DescriptionBlock,
};

/// A unit-conversion keyword embedded in a template line.
struct Directive {
    keyword: &'static str,
    apply: fn(f64) -> f64,
    /// Render with an explicit sign and claim both placeholder forms
    signed: bool,
}

/// Later entries take precedence when a line stacks several keywords.
const DIRECTIVES: &[Directive] = &[
    Directive {
        keyword: "milliseconds_to_seconds_2dp_if_required",
        apply: |v| round_dp(v / 1000.0, 2),
        signed: false,
    },
    Directive {
        keyword: "per_minute_to_per_second",
        apply: |v| round_dp(v / 60.0, 1),
        signed: false,
    },
    Directive {
        keyword: "divide_by_ten_1dp_if_required",
        apply: |v| round_dp(v / 10.0, 1),
        signed: false,
    },
    Directive {
        keyword: "divide_by_one_hundred",
        apply: |v| round_dp(v / 100.0, 2),
        signed: true,
    },
];

/// Escaped grammar phrases rewritten verbatim, first occurrence only
const VERBATIM_PHRASES: &[(&str, &str)] = &[
    (
        "#|-1 \"0% reduced [Projectile] Speed\" negate 1",
        "0% reduced Projectile Speed",
    ),
    (
        "1|# \"0% increased [Projectile] Speed\"",
        "0% increased Projectile Speed",
    ),
    (
        "2|# 0 # \"Fires 6 [Projectile|Projectiles]\"",
        "Fires 6 Projectiles",
    ),
    ("2|# 1 # \"Fires 6 Arrows\"", "Fires 6 Arrows"),
];

/// Bracketed names that always resolve to the bare right-hand side
const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("[Critical|Critical Hit]", "Critical Hit"),
    ("[Chaos|Chaos]", "Chaos"),
    ("[Lightning]", "Lightning"),
    ("[Total]", "Total"),
    ("[Projectile]", "Projectile"),
    ("[Physical]", "Physical"),
    ("[Fire]", "Fire"),
];

/// Resolved by the first aligned value of the step
const PROJECTILE_PLURAL: &str = "[Projectile|Projectiles]";

/// Attack/cast-time phrases carry the millisecond base value baked in
const CAST_TIME_SINGULAR: &str = "[AddedAttackCastTime|+1000 second]";
const CAST_TIME_PLURAL: &str = "[AddedAttackCastTime|+1000 seconds]";

static SINGULAR_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"is (\d+) second").unwrap());
static PLURAL_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"is (\d+) seconds").unwrap());

/// Render every template of a block for one progression step. `columns` are
/// the aligned value sequences, one per block id.
pub fn render_step(block: &DescriptionBlock, columns: &[Vec<f64>], step: usize) -> Vec<String> {
    block
        .templates
        .iter()
        .map(|template| render_template(template, columns, step))
        .collect()
}

fn render_template(template: &str, columns: &[Vec<f64>], step: usize) -> String {
    let mut result = template.to_string();

    let directive = DIRECTIVES
        .iter()
        .filter(|directive| template.contains(directive.keyword))
        .last();

    for (idx, column) in columns.iter().enumerate() {
        let value = column.get(step).copied().unwrap_or(0.0);
        let placeholder = format!("{{{idx}}}");
        let placeholder_signed = format!("{{{idx}:+d}}");

        match directive {
            Some(directive) if directive.signed => {
                let text = format_signed((directive.apply)(value));
                result = result.replace(&placeholder_signed, &text);
                result = result.replace(&placeholder, &text);
            }
            _ if template.contains(&placeholder_signed) => {
                // Sign formatting always applies to the raw value
                result = result.replace(&placeholder_signed, &format_signed(value));
            }
            _ => {
                let text = match directive {
                    Some(directive) => format_value((directive.apply)(value)),
                    None => format_value(value),
                };
                result = result.replace(&placeholder, &text);
            }
        }

        // A raw value of exactly 1000ms selects the singular phrase; the
        // grammar then leaves a stray leading 1000 and a trailing 1 marker
        if value == 1000.0 {
            result = result.replacen(CAST_TIME_SINGULAR, "+1 second", 1);
            result = result.replacen("1000", "", 1);
            if result.ends_with('1') {
                result.pop();
            }
        } else {
            let seconds = format!("+{} seconds", format_value(value / 1000.0));
            result = result.replacen(CAST_TIME_PLURAL, &seconds, 1);
        }
    }

    apply_literal_phrases(&mut result, columns, step);

    cleanup(&result)
}

fn apply_literal_phrases(result: &mut String, columns: &[Vec<f64>], step: usize) {
    for &(find, replace) in VERBATIM_PHRASES {
        if result.contains(find) {
            *result = result.replacen(find, replace, 1);
        }
    }

    if result.contains(PROJECTILE_PLURAL) {
        let first = columns.first().and_then(|column| column.get(step));
        let word = if first == Some(&1.0) {
            "Projectile"
        } else {
            "Projectiles"
        };
        *result = result.replacen(PROJECTILE_PLURAL, word, 1);
    }

    for &(find, replace) in CATEGORY_NAMES {
        *result = result.replacen(find, replace, 1);
    }
}

/// Strip spent directive keywords and grammar escape artifacts, then
/// normalise whitespace
fn cleanup(result: &str) -> String {
    let mut out = result.to_string();
    for directive in DIRECTIVES {
        out = out.replace(directive.keyword, "");
    }
    out.retain(|c| c != '#' && c != '"');

    out.split_whitespace().join(" ")
}

/// Reduce the rendered candidates for one step to the variant(s) that apply.
///
/// A driving value of exactly 1000 always keeps the first candidate. A pair
/// of candidates carrying `is N second` / `is N seconds` counts keeps the
/// singular one only when its count is 1 and the plural count is not.
/// Anything else passes through unchanged.
pub fn collapse_step(mut candidates: Vec<String>, driving_value: f64) -> Vec<String> {
    if driving_value == 1000.0 {
        candidates.truncate(1);
        return candidates;
    }

    if candidates.len() == 2 {
        let singular = SINGULAR_SECONDS
            .captures(&candidates[0])
            .and_then(|caps| caps[1].parse::<u64>().ok());
        let plural = PLURAL_SECONDS
            .captures(&candidates[1])
            .and_then(|caps| caps[1].parse::<u64>().ok());

        if let (Some(singular), Some(plural)) = (singular, plural) {
            let keep = if singular == 1 && plural != 1 { 0 } else { 1 };
            return vec![candidates.swap_remove(keep)];
        }
    }

    candidates
}
