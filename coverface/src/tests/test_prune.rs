// Copyright 2026 the Coverface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conflict resolution and font selection of the pruner.

use super::utils::{ids, instance, priority, regular, set, variable};
use crate::{CodepointSet, ErrorKind, FamilyCoverage, FontRecord, PruneOptions, Pruner};
use alloc::string::String;
use alloc::vec::Vec;

const STATIC: PruneOptions = PruneOptions {
    variable: false,
    minimal: false,
};

/// Sorts, prunes and returns each surviving font id with its pruned set.
fn prune(
    fonts: &[FontRecord],
    families: &[&str],
    exclusions: &CodepointSet,
    options: PruneOptions,
) -> Vec<(String, CodepointSet)> {
    let sorted = priority(families).sort(fonts).unwrap();
    let coverage = FamilyCoverage::new(fonts);
    let pruner = Pruner::new(&coverage, exclusions);
    pruner
        .prune(&sorted, options)
        .fonts
        .iter()
        .map(|pruned| (pruned.font().id().into(), pruned.codepoints().clone()))
        .collect()
}

fn surviving_ids(fonts: &[FontRecord], families: &[&str], options: PruneOptions) -> Vec<String> {
    prune(fonts, families, &CodepointSet::new(), options)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

#[test]
fn sort_follows_priority_and_is_stable() {
    let fonts = [
        regular("B-Regular", "B", [1]),
        regular("A-Regular", "A", [2]),
        instance("B-Bold", "B", 700, false, [1]),
        instance("A-Bold", "A", 700, false, [2]),
    ];
    let sorted = priority(&["A", "B"]).sort(&fonts).unwrap();
    assert_eq!(
        ids(sorted),
        ["A-Regular", "A-Bold", "B-Regular", "B-Bold"],
        "fonts of one family keep their relative order"
    );
}

#[test]
fn unranked_family_aborts() {
    let fonts = [regular("A", "A", [1]), regular("Z", "Zapf", [2])];
    let err = priority(&["A"]).sort(&fonts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrankedFamily, "unexpected {err}");
    assert_eq!(err.subject(), "Zapf", "error names the family");
}

#[test]
fn higher_priority_family_wins() {
    let fonts = [
        regular("Low", "Low", 0x41..=0x50),
        regular("High", "High", 0x48..=0x5A),
    ];
    let pruned = prune(&fonts, &["High", "Low"], &CodepointSet::new(), STATIC);
    assert_eq!(pruned.len(), 2, "both families survive");
    assert_eq!(pruned[0].0, "High", "highest priority first");
    assert_eq!(pruned[0].1, set(0x48..=0x5A), "winner keeps its coverage");
    assert_eq!(pruned[1].1, set(0x41..=0x47), "loser keeps the rest");
}

#[test]
fn subset_family_is_pruned_away() {
    let fonts = [
        regular("Wide", "Wide", 0x41..=0x5A),
        regular("Narrow", "Narrow", 0x45..=0x48),
    ];
    let pruned = prune(&fonts, &["Wide", "Narrow"], &CodepointSet::new(), STATIC);
    assert_eq!(pruned.len(), 1, "subset family produces nothing");
    assert_eq!(pruned[0].0, "Wide", "only the wide family is left");
}

#[test]
fn identical_coverage_later_family_loses() {
    let fonts = [
        regular("First", "First", 0x41..=0x5A),
        regular("Second", "Second", 0x41..=0x5A),
    ];
    assert_eq!(
        surviving_ids(&fonts, &["Second", "First"], STATIC),
        ["Second"],
        "the family listed later loses entirely"
    );
}

#[test]
fn combining_marks_travel_with_every_family() {
    let exclusions = set([0x300, 0x301]);
    let fonts = [
        regular("Latin", "Latin", [0x41, 0x42, 0x300, 0x301]),
        regular("Greek", "Greek", [0x391, 0x392, 0x300]),
    ];
    let pruned = prune(&fonts, &["Latin", "Greek"], &exclusions, STATIC);
    assert_eq!(
        pruned[1].1,
        set([0x300, 0x391, 0x392]),
        "a claimed combining mark is granted again"
    );
    let shared = pruned[0].1.intersection(&pruned[1].1);
    assert!(shared.is_subset(&exclusions), "only marks are shared");
}

#[test]
fn uncovered_run_between_own_codepoints_is_absorbed() {
    let fonts = [
        regular("High", "High", [0x41]),
        regular("X", "X", [0x100, 0x105]),
    ];
    let pruned = prune(&fonts, &["High", "X"], &CodepointSet::new(), STATIC);
    assert_eq!(
        pruned[1].1,
        set(0x100..=0x105),
        "U+101-104 belongs to no font and is enclosed by X"
    );
    assert_eq!(pruned[0].1, set([0x41]), "High is not enclosing anything");
}

#[test]
fn run_with_one_foreign_neighbor_is_left_alone() {
    let fonts = [
        regular("X", "X", [0x100]),
        regular("Y", "Y", [0x105]),
    ];
    let pruned = prune(&fonts, &["X", "Y"], &CodepointSet::new(), STATIC);
    assert_eq!(pruned[0].1, set([0x100]), "X does not absorb");
    assert_eq!(pruned[1].1, set([0x105]), "Y does not absorb");
}

#[test]
fn run_between_neighbors_lost_to_higher_priority_is_left_alone() {
    // X covers both neighbors but loses U+105 to High.
    let fonts = [
        regular("High", "High", [0x105]),
        regular("X", "X", [0x100, 0x105]),
    ];
    let pruned = prune(&fonts, &["High", "X"], &CodepointSet::new(), STATIC);
    assert_eq!(pruned[1].1, set([0x100]), "no absorption across U+105");
}

#[test]
fn absorbed_run_is_not_granted_twice() {
    let fonts = [
        regular("A", "A", [0x100, 0x105]),
        regular("B", "B", [0x100, 0x105, 0x200]),
    ];
    let pruned = prune(&fonts, &["A", "B"], &CodepointSet::new(), STATIC);
    assert_eq!(pruned[0].1, set(0x100..=0x105), "A absorbs the run");
    assert_eq!(pruned[1].1, set([0x200]), "B only keeps what A lacks");
}

#[test]
fn weights_share_the_family_assignment() {
    let fonts = [
        regular("F-Regular", "F", [1, 2, 3]),
        instance("F-Bold", "F", 700, false, [1]),
    ];
    let pruned = prune(&fonts, &["F"], &CodepointSet::new(), STATIC);
    assert_eq!(pruned.len(), 2, "both weights are kept");
    assert_eq!(pruned[0].1, pruned[1].1, "weights share one pruned set");
    assert_eq!(pruned[1].1, set([1, 2, 3]), "family-level coverage");
}

#[test]
fn whole_family_coverage_counts_as_claimed() {
    let minimal = PruneOptions {
        variable: false,
        minimal: true,
    };
    // U+2 is only in the bold of A, which the minimal build skips.
    let fonts = [
        regular("A-Regular", "A", [1]),
        instance("A-Bold", "A", 700, false, [2]),
        regular("B-Regular", "B", [2, 3]),
    ];
    let pruned = prune(&fonts, &["A", "B"], &CodepointSet::new(), minimal);
    assert_eq!(pruned.len(), 2, "bold is filtered out");
    assert_eq!(pruned[1].1, set([3]), "U+2 was claimed by A");
}

#[test]
fn original_records_are_untouched() {
    let fonts = [
        regular("High", "High", [1, 2]),
        regular("Low", "Low", [2, 3]),
    ];
    let before = fonts.clone();
    let _ = prune(&fonts, &["High", "Low"], &CodepointSet::new(), STATIC);
    assert_eq!(fonts, before, "pruning must not modify the catalog");
}

fn family_with_variable_file() -> Vec<FontRecord> {
    let cps = || 0x41..=0x5A;
    Vec::from([
        instance("F-Regular", "F", 400, false, cps()),
        instance("F-Bold", "F", 700, false, cps()),
        instance("F-Italic", "F", 400, true, cps()),
        instance("F-BoldItalic", "F", 700, true, cps()),
        variable("F-VF", "F", false, cps()),
        variable("F-Italic-VF", "F", true, cps()),
        instance("G-Regular", "G", 400, false, [0x100]),
        instance("G-Bold", "G", 700, false, [0x100]),
    ])
}

#[test]
fn static_build_drops_variable_files() {
    let fonts = family_with_variable_file();
    assert_eq!(
        surviving_ids(&fonts, &["F", "G"], STATIC),
        [
            "F-Regular",
            "F-Bold",
            "F-Italic",
            "F-BoldItalic",
            "G-Regular",
            "G-Bold"
        ],
        "every static instance"
    );
}

#[test]
fn variable_build_prefers_variable_files() {
    let options = PruneOptions {
        variable: true,
        minimal: false,
    };
    let fonts = family_with_variable_file();
    assert_eq!(
        surviving_ids(&fonts, &["F", "G"], options),
        ["F-VF", "F-Italic-VF", "G-Regular", "G-Bold"],
        "statics of F are replaced, G has no variable file"
    );
}

#[test]
fn minimal_static_build_keeps_regular_only() {
    let options = PruneOptions {
        variable: false,
        minimal: true,
    };
    let fonts = family_with_variable_file();
    assert_eq!(
        surviving_ids(&fonts, &["F", "G"], options),
        ["F-Regular", "G-Regular"],
        "only default instances"
    );
}

#[test]
fn minimal_variable_build_keeps_upright_variable_file() {
    let options = PruneOptions {
        variable: true,
        minimal: true,
    };
    let fonts = family_with_variable_file();
    assert_eq!(
        surviving_ids(&fonts, &["F", "G"], options),
        ["F-VF", "G-Regular"],
        "upright variable file despite its weight class"
    );
}

#[test]
fn italic_only_variable_family_is_empty_in_minimal_build() {
    let options = PruneOptions {
        variable: true,
        minimal: true,
    };
    let fonts = [
        instance("H-Regular", "H", 400, false, [1]),
        variable("H-Italic-VF", "H", true, [1]),
        regular("K-Regular", "K", [2]),
    ];
    assert_eq!(
        surviving_ids(&fonts, &["H", "K"], options),
        ["K-Regular"],
        "H contributes nothing and is not an error"
    );
}
