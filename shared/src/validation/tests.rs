use super::*;

fn valid_draft() -> ItemDraft {
    ItemDraft {
        name: "Taladro Bosch 800 W".to_string(),
        description: "Incluye maletín y brocas".to_string(),
        price: "3,5".to_string(),
        categories: vec![1],
        image: None,
    }
}

// =========================================================
// 价格归一化
// =========================================================

#[test]
fn test_price_comma_and_dot_normalize() {
    assert_eq!(parse_price("3,5"), Some(3.5));
    assert_eq!(parse_price("3.50"), Some(3.5));
    assert_eq!(parse_price("12"), Some(12.0));
    assert_eq!(parse_price("7.25"), Some(7.25));
}

#[test]
fn test_price_rejects_bad_input() {
    for input in ["abc", "", "3.", ".5", "3.555", "-2", "1,2,3", "3 5", " 7.25 ", "7.25\n"] {
        assert_eq!(parse_price(input), None, "{input:?}");
    }
}

#[test]
fn test_invalid_price_fails_validation() {
    let draft = ItemDraft {
        price: "abc".to_string(),
        ..valid_draft()
    };
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.get(Field::Price), Some("Precio inválido"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_overflowing_price_is_invalid() {
    let huge = "9".repeat(400);
    assert_eq!(parse_price(&huge), None);

    let draft = ItemDraft {
        price: huge,
        ..valid_draft()
    };
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.get(Field::Price), Some("Precio inválido"));
}

#[test]
fn test_zero_price_is_rejected() {
    let draft = ItemDraft {
        price: "0,00".to_string(),
        ..valid_draft()
    };
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.get(Field::Price), Some("El precio debe ser mayor que 0"));
}

// =========================================================
// 字段规则
// =========================================================

#[test]
fn test_zero_categories_fails() {
    let draft = ItemDraft {
        categories: vec![],
        ..valid_draft()
    };
    let errors = validate(&draft).unwrap_err();
    assert_eq!(
        errors.get(Field::Categories),
        Some("Selecciona al menos una categoría")
    );
}

#[test]
fn test_name_length_bounds() {
    let short = ItemDraft {
        name: "  ab  ".to_string(),
        ..valid_draft()
    };
    assert_eq!(
        validate(&short).unwrap_err().get(Field::Name),
        Some("Mínimo 3 caracteres")
    );

    let long = ItemDraft {
        name: "x".repeat(NAME_MAX_CHARS + 1),
        ..valid_draft()
    };
    assert_eq!(
        validate(&long).unwrap_err().get(Field::Name),
        Some("Máximo 80 caracteres")
    );

    // 按字符计数，而不是字节
    let accented = ItemDraft {
        name: "ñañ".to_string(),
        ..valid_draft()
    };
    assert!(validate(&accented).is_ok());
}

#[test]
fn test_description_limit() {
    let draft = ItemDraft {
        description: "a".repeat(DESCRIPTION_MAX_CHARS + 1),
        ..valid_draft()
    };
    assert_eq!(
        validate(&draft).unwrap_err().get(Field::Description),
        Some("Máximo 500 caracteres")
    );
}

#[test]
fn test_image_rules() {
    let too_big = ItemDraft {
        image: Some(ImageMeta {
            size: IMAGE_MAX_BYTES,
            content_type: "image/png".to_string(),
        }),
        ..valid_draft()
    };
    assert_eq!(validate(&too_big).unwrap_err().get(Field::Image), Some("Máx. 5 MB"));

    let not_image = ItemDraft {
        image: Some(ImageMeta {
            size: 10,
            content_type: "application/pdf".to_string(),
        }),
        ..valid_draft()
    };
    assert_eq!(
        validate(&not_image).unwrap_err().get(Field::Image),
        Some("Solo se permiten imágenes")
    );

    let ok = ItemDraft {
        image: Some(ImageMeta {
            size: IMAGE_MAX_BYTES - 1,
            content_type: "image/jpeg".to_string(),
        }),
        ..valid_draft()
    };
    assert!(validate(&ok).is_ok());
}

#[test]
fn test_all_errors_are_collected() {
    let draft = ItemDraft::default();
    let errors = validate(&draft).unwrap_err();
    assert!(errors.get(Field::Name).is_some());
    assert!(errors.get(Field::Price).is_some());
    assert!(errors.get(Field::Categories).is_some());
    assert!(errors.get(Field::Description).is_none());
    assert!(errors.get(Field::Image).is_none());
}

// =========================================================
// 转换结果
// =========================================================

#[test]
fn test_valid_draft_is_normalized() {
    let draft = ItemDraft {
        name: "  Sierra circular ".to_string(),
        description: "   ".to_string(),
        price: "10,25".to_string(),
        categories: vec![2, 4],
        image: None,
    };
    let item = validate(&draft).unwrap();
    assert_eq!(item.name, "Sierra circular");
    assert_eq!(item.description, None);
    assert_eq!(item.price_per_h, 10.25);
    assert_eq!(item.categories, vec![2, 4]);

    let payload = item.into_payload(Some("http://localhost:8000/uploads/a.png".to_string()));
    assert_eq!(
        payload.image_url.as_deref(),
        Some("http://localhost:8000/uploads/a.png")
    );
}
