use bump_chart_rs::core::{CATEGORY_COLOR_COUNT, Competitor, CompetitorPalette};

fn entrants(names: &[&str]) -> Vec<Competitor> {
    names
        .iter()
        .map(|name| Competitor::new(*name, Vec::new()))
        .collect()
}

#[test]
fn same_dataset_order_assigns_same_colors_across_builds() {
    let competitors = entrants(&["Kalle", "Ott", "Taka"]);

    let first = CompetitorPalette::from_competitors(&competitors);
    let second = CompetitorPalette::from_competitors(&competitors);

    for name in ["Kalle", "Ott", "Taka"] {
        assert_eq!(first.color_for(name), second.color_for(name));
        assert!(first.color_for(name).is_some());
    }
}

#[test]
fn distinct_names_within_scheme_size_get_distinct_colors() {
    let names: Vec<String> = (0..CATEGORY_COLOR_COUNT).map(|i| format!("c{i}")).collect();
    let competitors: Vec<Competitor> = names
        .iter()
        .map(|name| Competitor::new(name.clone(), Vec::new()))
        .collect();
    let palette = CompetitorPalette::from_competitors(&competitors);

    for (i, a) in names.iter().enumerate() {
        for b in names.iter().skip(i + 1) {
            assert_ne!(palette.color_for(a), palette.color_for(b));
        }
    }
}

#[test]
fn colors_repeat_cyclically_beyond_scheme_size() {
    let names: Vec<String> = (0..CATEGORY_COLOR_COUNT + 2)
        .map(|i| format!("c{i}"))
        .collect();
    let competitors: Vec<Competitor> = names
        .iter()
        .map(|name| Competitor::new(name.clone(), Vec::new()))
        .collect();
    let palette = CompetitorPalette::from_competitors(&competitors);

    assert_eq!(
        palette.color_for("c0"),
        palette.color_for(&format!("c{CATEGORY_COLOR_COUNT}"))
    );
    assert_eq!(
        palette.color_for("c1"),
        palette.color_for(&format!("c{}", CATEGORY_COLOR_COUNT + 1))
    );
}

#[test]
fn duplicate_names_keep_their_first_assignment() {
    let palette = CompetitorPalette::from_competitors(&entrants(&["Kalle", "Ott", "Kalle"]));
    assert_eq!(palette.len(), 2);
}

#[test]
fn unknown_name_has_no_color() {
    let palette = CompetitorPalette::from_competitors(&entrants(&["Kalle"]));
    assert!(palette.color_for("Ott").is_none());
}
