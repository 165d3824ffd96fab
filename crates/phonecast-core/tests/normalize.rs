use phonecast_core::{
    extract_phones, find_phone_column, normalize_cell, normalize_phone, RawCell, Table,
};

fn normalized(raw: &str) -> Option<String> {
    normalize_phone(raw).map(|address| address.into_string())
}

#[test]
fn documented_examples_hold() {
    assert_eq!(normalized("966505815487").as_deref(), Some("+966505815487"));
    assert_eq!(normalized("0505815487").as_deref(), Some("+966505815487"));
    assert_eq!(normalized("505815487").as_deref(), Some("+966505815487"));
    assert_eq!(normalized("+966505815487").as_deref(), Some("+966505815487"));
    assert_eq!(normalized("+966-50-581-5487").as_deref(), Some("+966505815487"));
    assert_eq!(normalized("+96650581548"), None);
    assert_eq!(normalized(""), None);
    assert_eq!(normalized("   "), None);
    assert_eq!(normalize_cell(&RawCell::Missing), Ok(None));

    let column = find_phone_column(&["Name", "Phone Number", "Email"]).expect("column");
    assert_eq!(column.name, "Phone Number");
    let column = find_phone_column(&["Name", "Email"]).expect("column");
    assert_eq!(column.name, "Name");
    let empty: Vec<String> = Vec::new();
    assert!(find_phone_column(&empty).is_none());
}

#[test]
fn pipeline_keeps_first_of_equivalent_formats() {
    let table = Table::new(
        vec!["phone".to_string()],
        vec![
            vec![RawCell::from("0505815487")],
            vec![RawCell::from("+966505815487")],
            vec![RawCell::from("966 54 155 6250")],
        ],
    );
    let extraction = extract_phones(&table).expect("extract");
    let addresses: Vec<String> = extraction
        .addresses
        .into_iter()
        .map(|address| address.into_string())
        .collect();
    assert_eq!(addresses, vec!["+966505815487", "+966541556250"]);
}
