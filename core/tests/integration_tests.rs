use schoolmeal_core::{DayMenu, RawDayRecord, parse_batch, parse_day};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A listing shaped like a real API day, after `<br/>` normalization.
const FRIDAY_LISTING: &str = "\
*백미밥
계란국 (추가) (1.5.6.18)
돈육김치볶음 (9.10.13)

깍두기 (9.13)
요구르트(소) (2)
  ";

fn ids(menu: &DayMenu) -> Vec<usize> {
    menu.meals.iter().map(|dish| dish.id).collect()
}

// ---------------------------------------------------------------------------
// Single day
// ---------------------------------------------------------------------------

#[test]
fn test_realistic_day() {
    let menu = parse_day(&RawDayRecord::new("20240315", FRIDAY_LISTING)).unwrap();

    assert_eq!(menu.date, "2024-03-15");
    assert_eq!(ids(&menu), vec![1, 2, 3, 4, 5]);

    let names: Vec<&str> = menu.meals.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["*백미밥", "계란국", "돈육김치볶음", "깍두기", "요구르트"]);

    assert_eq!(menu.meals[0].code, None);
    assert_eq!(menu.meals[1].options, vec!["추가"]);
    assert_eq!(menu.meals[4].code.as_deref(), Some("2"));
    assert_eq!(menu.meals[4].options, vec!["소"]);
    assert_eq!(menu.meals[3].allergens(), vec![9, 13]);
}

#[test]
fn test_code_and_options_partition_groups() {
    let menu = parse_day(&RawDayRecord::new(
        "20240315",
        "A (x) (y) (1.2)\nB (x) (y)\nC (1.2) (x)\nD",
    ))
    .unwrap();

    let counts: Vec<(bool, usize)> = menu
        .meals
        .iter()
        .map(|d| (d.code.is_some(), d.options.len()))
        .collect();
    assert_eq!(counts, vec![(true, 2), (false, 2), (false, 2), (false, 0)]);
}

#[test]
fn test_names_never_contain_parens() {
    let listing = "a (b\nc) d\n((e))\nf ()\n(1.2)\n)(";
    let menu = parse_day(&RawDayRecord::new("20240101", listing)).unwrap();
    for dish in &menu.meals {
        assert!(!dish.name.contains('(') && !dish.name.contains(')'), "{:?}", dish.name);
    }
    assert_eq!(ids(&menu), (1..=6).collect::<Vec<_>>());
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

#[test]
fn test_batch_preserves_order_and_drops_malformed() {
    let records = vec![
        RawDayRecord::new("20240312", "월"),
        RawDayRecord::new("2024-15", "bad"),
        RawDayRecord::new("20240311", "화"),
        RawDayRecord::undated("none"),
        RawDayRecord::new("20240313", "\n"),
    ];

    let menus = parse_batch(&records);
    let dates: Vec<&str> = menus.iter().map(|m| m.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-12", "2024-03-11", "2024-03-13"]);
    assert!(menus[2].is_empty());
}

#[test]
fn test_batch_of_nothing() {
    assert!(parse_batch(&[]).is_empty());
}

#[test]
fn test_menu_json_round_trip() {
    let menu = parse_day(&RawDayRecord::new("20240315", FRIDAY_LISTING)).unwrap();
    let raw = serde_json::to_string(&menu).unwrap();
    let back: DayMenu = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, menu);
}
