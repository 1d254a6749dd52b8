use std::collections::BTreeSet;

use chrono::NaiveDate;
use disaster_stories::data::loader;
use disaster_stories::data::{apply, DisasterDataset, DisasterEvent, FilterSelection, LoadError};

const TYPES: [&str; 4] = ["Flood", "Earthquake", "Wildfire", "Storm"];

/// A mixed, unsorted dataset spanning 2018..=2024.
fn dataset() -> DisasterDataset {
    let events = (0..200u32)
        .map(|i| {
            let year = 2018 + ((i * 7 + i / 3) % 7) as i32;
            let date = NaiveDate::from_ymd_opt(year, 1 + i % 12, 1 + i % 28).unwrap();
            let kind = TYPES[((i * 5 + 1) % 4) as usize];
            DisasterEvent::new(date, kind, f64::from(i % 48), u64::from(i % 13), 1.0, 10.0)
        })
        .collect();
    DisasterDataset::from_events(events, Vec::new())
}

fn selections() -> Vec<FilterSelection> {
    let mut out = Vec::new();
    for (lo, hi) in [(2018, 2024), (2019, 2021), (2022, 2022), (2010, 2030), (2023, 2019)] {
        out.push(FilterSelection::new(lo, hi, TYPES));
        out.push(FilterSelection::new(lo, hi, ["Flood"]));
        out.push(FilterSelection::new(lo, hi, ["Storm", "Wildfire", "Tsunami"]));
        out.push(FilterSelection::new(lo, hi, Vec::<String>::new()));
    }
    out
}

#[test]
fn pipeline_is_deterministic() {
    let ds = dataset();
    for sel in selections() {
        assert_eq!(apply(&ds, &sel), apply(&ds, &sel));
    }
}

#[test]
fn view_is_exactly_the_matching_rows_in_order() {
    let ds = dataset();
    for sel in selections() {
        let (view, _) = apply(&ds, &sel);

        let expected: Vec<usize> = ds
            .events()
            .iter()
            .enumerate()
            .filter(|(_, ev)| {
                sel.year_min <= ev.year()
                    && ev.year() <= sel.year_max
                    && sel.selected_types.contains(&ev.disaster_type)
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(view.indices(), expected.as_slice(), "{sel:?}");

        // Strictly increasing indices: a subsequence with no duplicates.
        assert!(view.indices().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn yearly_counts_agree_with_the_view() {
    let ds = dataset();
    for sel in selections() {
        let (view, yearly) = apply(&ds, &sel);
        assert_eq!(yearly.total(), view.len());

        let view_years: BTreeSet<i32> = view.events(&ds).map(DisasterEvent::year).collect();
        let count_years: BTreeSet<i32> = yearly.iter().map(|(y, _)| y).collect();
        assert_eq!(view_years, count_years);

        for (year, n) in yearly.iter() {
            assert!(n > 0);
            assert_eq!(n, view.events(&ds).filter(|e| e.year() == year).count());
        }

        let keys: Vec<i32> = yearly.iter().map(|(y, _)| y).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn empty_selection_law() {
    let ds = dataset();
    let (view, yearly) = apply(&ds, &FilterSelection::new(2018, 2024, Vec::<String>::new()));
    assert!(view.is_empty());
    assert!(yearly.is_empty());
}

#[test]
fn full_range_is_identity() {
    let ds = dataset();
    let sel = FilterSelection::everything(&ds);
    assert_eq!(ds.year_bounds(), Some((2018, 2024)));
    let (view, _) = apply(&ds, &sel);
    let all: Vec<usize> = (0..ds.len()).collect();
    assert_eq!(view.indices(), all.as_slice());
}

#[test]
fn scenario_from_a_csv_file() {
    let path = std::env::temp_dir().join(format!(
        "disaster-stories-scenario-{}.csv",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "date,disaster_type,response_time_hours,casualties,severity_index,recovery_days\n\
         2020-02-01,flood,5,1,2.0,10\n\
         2020-08-15,quake,3,9,6.5,90\n\
         2021-04-30,flood,7,0,1.5,12\n",
    )
    .unwrap();

    let loaded = loader::load_file(&path);
    std::fs::remove_file(&path).ok();
    let ds = loaded.unwrap();

    let (view, yearly) = apply(&ds, &FilterSelection::new(2020, 2020, ["flood"]));
    let rows: Vec<(i32, &str)> = view
        .events(&ds)
        .map(|e| (e.year(), e.disaster_type.as_str()))
        .collect();
    assert_eq!(rows, [(2020, "flood")]);
    assert_eq!(yearly.iter().collect::<Vec<_>>(), [(2020, 1)]);
}

#[test]
fn unreadable_source_fails_startup() {
    let path = std::env::temp_dir().join("disaster-stories-does-not-exist.csv");
    let err = loader::load_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::DataSourceUnavailable { .. }));
}
