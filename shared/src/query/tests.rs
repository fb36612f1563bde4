use super::*;

fn all_values(state: &FilterState) -> Vec<String> {
    state.to_query_pairs().into_iter().map(|(_, v)| v).collect()
}

// =========================================================
// 空值省略
// =========================================================

#[test]
fn test_empty_state_produces_empty_query() {
    let state = FilterState::default();
    assert!(state.is_empty());
    assert_eq!(state.to_query_string(), "");
}

#[test]
fn test_blank_name_and_empty_categories_are_omitted() {
    let state = FilterState {
        name: Some("   ".to_string()),
        categories: vec![],
        ..Default::default()
    };
    assert_eq!(state.to_query_string(), "");
}

#[test]
fn test_no_pair_has_empty_value() {
    let states = [
        FilterState {
            name: Some("".to_string()),
            min_price: Some(0.0),
            ..Default::default()
        },
        FilterState {
            name: Some("taladro".to_string()),
            max_price: Some(f64::NAN),
            categories: vec![3],
            order: Some(SortOrder::NAME_DESC),
            ..Default::default()
        },
        FilterState {
            available: Some(true),
            ..Default::default()
        },
    ];
    for state in &states {
        assert!(all_values(state).iter().all(|v| !v.is_empty()), "{:?}", state);
        assert!(!state.to_query_string().contains("NaN"));
    }
}

// =========================================================
// 排序拆分
// =========================================================

#[test]
fn test_price_desc_is_split_into_two_params() {
    let state = FilterState {
        order: SortOrder::parse("price_desc"),
        ..Default::default()
    };
    assert_eq!(state.to_query_string(), "order_by=price&order_dir=desc");
}

#[test]
fn test_name_sorts_use_name_field() {
    for spec in ["name", "name_asc", "name_desc"] {
        let state = FilterState {
            order: SortOrder::parse(spec),
            ..Default::default()
        };
        let query = state.to_query_string();
        assert!(query.contains("order_by=name"), "{spec}: {query}");
        assert_eq!(query.matches("order_dir=").count(), 1);
    }
}

#[test]
fn test_composite_sort_key_is_never_emitted() {
    let state = FilterState {
        order: Some(SortOrder::PRICE_ASC),
        ..Default::default()
    };
    let query = state.to_query_string();
    assert!(!query.contains("order="));
    assert!(!query.contains("price_asc"));
}

#[test]
fn test_sort_parse_rejects_unknown_specs() {
    assert_eq!(SortOrder::parse("rating_desc"), None);
    assert_eq!(SortOrder::parse("price_sideways"), None);
    assert_eq!(SortOrder::parse(""), None);
    assert_eq!(SortOrder::parse("name"), Some(SortOrder::NAME_ASC));
    assert_eq!(SortOrder::PRICE_DESC.key(), "price_desc");
}

// =========================================================
// 规范化
// =========================================================

#[test]
fn test_equal_states_built_differently_serialize_identically() {
    let mut a = FilterState::default();
    a.max_price = Some(20.0);
    a.name = Some("sierra".to_string());
    a.order = Some(SortOrder::PRICE_ASC);
    a.categories = vec![2, 5];

    let b = FilterState {
        order: SortOrder::parse("price_asc"),
        categories: vec![2, 5],
        name: Some(" sierra ".to_string()),
        max_price: Some(20.0),
        ..Default::default()
    };

    assert_eq!(a.to_query_string(), b.to_query_string());
    assert_eq!(
        a.to_query_string(),
        "name=sierra&max_price=20&categories=2&categories=5&order_by=price&order_dir=asc"
    );
}

#[test]
fn test_negative_zero_price_serializes_like_zero() {
    let zero = FilterState {
        min_price: Some(0.0),
        max_price: Some(0.0),
        ..Default::default()
    };
    let negative_zero = FilterState {
        min_price: Some(-0.0),
        max_price: Some(-0.0),
        ..Default::default()
    };

    assert_eq!(zero, negative_zero);
    assert_eq!(zero.to_query_string(), negative_zero.to_query_string());
    assert_eq!(negative_zero.to_query_string(), "min_price=0&max_price=0");
}

#[test]
fn test_category_order_is_preserved() {
    let state = FilterState {
        categories: vec![9, 1, 4],
        ..Default::default()
    };
    assert_eq!(
        state.to_query_string(),
        "categories=9&categories=1&categories=4"
    );
}

#[test]
fn test_two_categories_and_max_price() {
    let mut state = FilterState::default();
    state.toggle_category(1);
    state.toggle_category(3);
    state.max_price = Some(12.5);

    let query = state.to_query_string();
    assert!(query.contains("categories=1"));
    assert!(query.contains("categories=3"));
    assert!(query.contains("max_price=12.5"));
}

#[test]
fn test_toggle_category_removes_existing() {
    let mut state = FilterState::default();
    state.toggle_category(4);
    state.toggle_category(7);
    state.toggle_category(4);
    assert_eq!(state.categories, vec![7]);
}

// =========================================================
// 编码
// =========================================================

#[test]
fn test_values_are_percent_encoded() {
    let state = FilterState {
        name: Some("taladro & broca".to_string()),
        ..Default::default()
    };
    assert_eq!(state.to_query_string(), "name=taladro%20%26%20broca");
}

#[test]
fn test_form_urlencode_login_body() {
    let body = form_urlencode([("username", "ana"), ("password", "p@ss w=rd")]);
    assert_eq!(body, "username=ana&password=p%40ss%20w%3Drd");
}

#[test]
fn test_with_query() {
    assert_eq!(with_query("/api/items/", ""), "/api/items/");
    assert_eq!(with_query("/api/items/", "name=a"), "/api/items/?name=a");
}
