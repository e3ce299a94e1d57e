mod common;

use std::collections::BTreeSet;

use coinboard_core::{sort_by, Asset, SortDirection, SortKey, SortState};
use common::{assets, ids};

fn shuffled() -> Vec<Asset> {
    let mut list = assets(12);
    list.reverse();
    list.swap(2, 7);
    list.swap(0, 5);
    list
}

#[test]
fn sorting_twice_by_same_key_reverses_order() {
    let list = shuffled();
    let (asc, state) = sort_by(&list, SortKey::PriceUsd, SortState::default());
    assert_eq!(state.key, SortKey::PriceUsd);
    assert_eq!(state.direction, SortDirection::Ascending);

    let (desc, state) = sort_by(&asc, SortKey::PriceUsd, state);
    assert_eq!(state.direction, SortDirection::Descending);

    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);

    let before: BTreeSet<_> = ids(&list).into_iter().collect();
    let after: BTreeSet<_> = ids(&desc).into_iter().collect();
    assert_eq!(before, after);
    assert_eq!(desc.len(), list.len());
}

#[test]
fn third_sort_restores_ascending_order() {
    let list = shuffled();
    let (asc, state) = sort_by(&list, SortKey::MarketCapUsd, SortState::default());
    let (desc, state) = sort_by(&asc, SortKey::MarketCapUsd, state);
    let (again, state) = sort_by(&desc, SortKey::MarketCapUsd, state);

    assert_eq!(state.direction, SortDirection::Ascending);
    assert_eq!(ids(&again), ids(&asc));
}

#[test]
fn new_key_always_starts_ascending() {
    let descending = SortState {
        key: SortKey::Name,
        direction: SortDirection::Descending,
    };
    let (_, state) = sort_by(&shuffled(), SortKey::Symbol, descending);

    assert_eq!(
        state,
        SortState {
            key: SortKey::Symbol,
            direction: SortDirection::Ascending,
        }
    );
}

#[test]
fn default_state_is_rank_ascending_so_first_rank_click_descends() {
    let (sorted, state) = sort_by(&assets(5), SortKey::Rank, SortState::default());

    assert_eq!(state.direction, SortDirection::Descending);
    assert_eq!(sorted[0].id, "coin-5");
}

#[test]
fn numeric_columns_compare_by_magnitude() {
    // "100.5" < "20.5" as text; numerically it is the largest.
    let list = vec![common::asset(10), common::asset(2), common::asset(1)];
    let (sorted, _) = sort_by(&list, SortKey::PriceUsd, SortState::default());

    assert_eq!(ids(&sorted), vec!["coin-1", "coin-2", "coin-10"]);
}

#[test]
fn negative_changes_sort_below_positive() {
    let list = assets(30);
    let (sorted, _) = sort_by(&list, SortKey::ChangePercent24Hr, SortState::default());

    assert_eq!(sorted.first().unwrap().id, "coin-1");
    assert_eq!(sorted.last().unwrap().id, "coin-30");
}

#[test]
fn text_columns_compare_lexicographically() {
    let named = |id: &str, name: &str| Asset {
        id: id.to_string(),
        name: name.to_string(),
        ..Asset::default()
    };
    let list = vec![named("b", "bitcoin"), named("a", "Aave"), named("c", "Cardano")];
    let (sorted, _) = sort_by(&list, SortKey::Name, SortState::default());

    // Byte order: uppercase letters sort before lowercase.
    assert_eq!(ids(&sorted), vec!["a", "c", "b"]);
}

#[test]
fn equal_keys_keep_relative_order_in_both_directions() {
    let tagged = |id: &str, symbol: &str| Asset {
        id: id.to_string(),
        symbol: symbol.to_string(),
        ..Asset::default()
    };
    let list = vec![
        tagged("first", "USD"),
        tagged("other", "BTC"),
        tagged("second", "USD"),
        tagged("third", "USD"),
    ];

    let (asc, state) = sort_by(&list, SortKey::Symbol, SortState::default());
    assert_eq!(ids(&asc), vec!["other", "first", "second", "third"]);

    let (desc, _) = sort_by(&asc, SortKey::Symbol, state);
    assert_eq!(ids(&desc), vec!["first", "second", "third", "other"]);
}

#[test]
fn sorting_empty_collection_is_noop() {
    let (sorted, state) = sort_by(&[], SortKey::Name, SortState::default());

    assert!(sorted.is_empty());
    assert_eq!(state.key, SortKey::Name);
}
