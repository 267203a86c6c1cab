use nutri_match::classification::{
    classify, ClassificationRule, ClassifierConfig, GroupClassifier, MacroFallback,
};
use nutri_match::text::Normalizer;
use nutri_match::types::{FoodRecord, FoodSource, ProfessionalGroup};

fn named(name: &str) -> FoodRecord {
    FoodRecord::new(FoodSource::TableA, 1, name)
}

#[test]
fn default_rules_cover_each_group() {
    let cases = [
        ("Frango, peito, sem pele, cru", ProfessionalGroup::Protein),
        ("Peito de frango grelhado", ProfessionalGroup::Protein),
        ("Ovo, de galinha, inteiro, cozido", ProfessionalGroup::Protein),
        ("Feijões, carioca, cozidos", ProfessionalGroup::Protein),
        ("Arroz, integral, cozido", ProfessionalGroup::Carbohydrate),
        ("Batata, inglesa, cozida", ProfessionalGroup::Carbohydrate),
        ("Pão, francês", ProfessionalGroup::Carbohydrate),
        ("Maçã, Fuji, com casca, crua", ProfessionalGroup::Fruit),
        ("Salada de frutas", ProfessionalGroup::Fruit),
        ("Alface, crespa, crua", ProfessionalGroup::Vegetable),
        ("Brócolis, cozido", ProfessionalGroup::Vegetable),
        ("Azeite de oliva extra virgem", ProfessionalGroup::Fat),
        ("Leite, de vaca, integral", ProfessionalGroup::Dairy),
        ("Iogurte natural", ProfessionalGroup::Dairy),
        ("Água mineral", ProfessionalGroup::Other),
        ("", ProfessionalGroup::Other),
    ];

    for (name, expected) in cases {
        assert_eq!(classify(&named(name)), expected, "wrong group for {name:?}");
    }
}

#[test]
fn rule_order_decides_overlapping_keywords() {
    // "soja" is a protein keyword, but oils are checked first
    assert_eq!(classify(&named("Óleo de soja")), ProfessionalGroup::Fat);
    assert_eq!(classify(&named("Soja, grão, cozida")), ProfessionalGroup::Protein);
}

#[test]
fn first_matching_rule_wins_in_custom_tables() {
    let fruit_first = ClassifierConfig {
        rules: vec![
            ClassificationRule::new(ProfessionalGroup::Fruit, &["banana"]),
            ClassificationRule::new(ProfessionalGroup::Carbohydrate, &["banana"]),
        ],
        negating_words: Vec::new(),
        macro_fallback: None,
    };
    let mut carb_first = fruit_first.clone();
    carb_first.rules.reverse();

    let a = GroupClassifier::new(Normalizer::default(), fruit_first);
    let b = GroupClassifier::new(Normalizer::default(), carb_first);

    assert_eq!(a.classify(&named("Banana, prata")), ProfessionalGroup::Fruit);
    assert_eq!(b.classify(&named("Banana, prata")), ProfessionalGroup::Carbohydrate);
}

#[test]
fn multi_word_keywords_match_as_phrases() {
    let config = ClassifierConfig {
        rules: vec![ClassificationRule::new(ProfessionalGroup::Protein, &["peito de frango"])],
        negating_words: Vec::new(),
        macro_fallback: None,
    };
    let classifier = GroupClassifier::new(Normalizer::default(), config);

    assert_eq!(classifier.classify(&named("Peito de frango assado")), ProfessionalGroup::Protein);
    assert_eq!(classifier.classify(&named("Frango, peito")), ProfessionalGroup::Other);
}

#[test]
fn category_text_is_considered() {
    let record = named("Mix XPTO").with_category("Frutas e derivados");
    assert_eq!(classify(&record), ProfessionalGroup::Fruit);

    let classifier = GroupClassifier::default();
    assert_eq!(
        classifier.classify_text("Mix XPTO", Some("Carnes e derivados")),
        ProfessionalGroup::Protein
    );
}

#[test]
fn invariant_classification_is_deterministic_and_total() {
    let names = [
        "Frango, peito, sem pele, cru",
        "Salada, Caesar, com molho, croutons, parmesão e filé de anchova",
        "???",
        "12345",
        "Abacate",
        "Leite de coco",
    ];
    let classifier = GroupClassifier::default();

    let first: Vec<ProfessionalGroup> = names.iter().map(|n| classifier.classify(&named(n))).collect();
    let reversed: Vec<ProfessionalGroup> = names
        .iter()
        .rev()
        .map(|n| classifier.classify(&named(n)))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    assert_eq!(first, reversed);
    for group in first {
        assert!(ProfessionalGroup::ALL.contains(&group));
    }
}

#[test]
fn macro_fallback_is_opt_in() {
    let lean = named("Produto XPTO").with_macros(135.0, 25.0, 2.0, 3.0);
    assert_eq!(classify(&lean), ProfessionalGroup::Other);

    let config = ClassifierConfig {
        macro_fallback: Some(MacroFallback { min_energy_share: 0.6 }),
        ..ClassifierConfig::v0()
    };
    let classifier = GroupClassifier::new(Normalizer::default(), config);

    assert_eq!(classifier.classify(&lean), ProfessionalGroup::Protein);

    // 40% protein, 30% carbohydrate, 30% fat by energy: no clear leader
    let mixed = named("Produto XPTO").with_macros(100.0, 10.0, 7.5, 10.0 / 3.0);
    assert_eq!(classifier.classify(&mixed), ProfessionalGroup::Other);

    // Missing macros read as zero
    assert_eq!(classifier.classify(&named("Produto XPTO")), ProfessionalGroup::Other);

    // Keywords still take precedence
    let apple = named("Maçã").with_macros(52.0, 40.0, 0.0, 0.0);
    assert_eq!(classifier.classify(&apple), ProfessionalGroup::Fruit);
}

#[test]
fn head_noun_outranks_preparation_and_preserving_medium() {
    let cases = [
        ("Carne, bovina, patinho, sem gordura, grelhado", ProfessionalGroup::Protein),
        ("Carne, bovina, alcatra, sem gordura, crua", ProfessionalGroup::Protein),
        ("Atum, conserva em óleo", ProfessionalGroup::Protein),
        ("Sardinha, conserva em óleo", ProfessionalGroup::Protein),
        ("Frango, peito, com pele, frito em óleo", ProfessionalGroup::Protein),
        ("Pão de queijo", ProfessionalGroup::Carbohydrate),
        ("Arroz, com manteiga", ProfessionalGroup::Carbohydrate),
        ("Óleo de soja", ProfessionalGroup::Fat),
        ("Manteiga, com sal", ProfessionalGroup::Dairy),
    ];

    for (name, expected) in cases {
        assert_eq!(classify(&named(name)), expected, "wrong group for {name:?}");
    }
}

#[test]
fn negated_keywords_do_not_route_the_food() {
    // No head match: only the text outside "sem ..." may decide
    let drink = named("Bebida vegetal, sem leite, de aveia");
    assert_eq!(classify(&drink), ProfessionalGroup::Carbohydrate);

    let config = ClassifierConfig {
        negating_words: Vec::new(),
        ..ClassifierConfig::v0()
    };
    let literal = GroupClassifier::new(Normalizer::default(), config);
    assert_eq!(literal.classify(&drink), ProfessionalGroup::Dairy);
}
