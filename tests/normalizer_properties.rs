use nutri_match::text::{normalize, normalize_to_text, Normalizer, NormalizerConfig};

fn radicals(text: &str) -> Vec<String> {
    normalize(text).into_iter().map(|t| t.radical).collect()
}

#[test]
fn scenario_chicken_breast_drops_stop_words() {
    let tokens = normalize("Frango, peito, sem pele, cru");

    let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
    assert_eq!(surfaces, vec!["frango", "peito", "pele", "cru"]);

    let normalizer = Normalizer::default();
    let expected: Vec<String> = ["frango", "peito", "pele", "cru"]
        .iter()
        .map(|w| normalizer.radical(w))
        .collect();
    assert_eq!(radicals("Frango, peito, sem pele, cru"), expected);
    assert!(!surfaces.contains(&"sem"), "stop word must be removed");
}

#[test]
fn invariant_accents_and_case_are_folded() {
    assert_eq!(radicals("FILÉ"), radicals("file"));
    assert_eq!(radicals("Pão"), vec!["pao"]);
    assert_eq!(radicals("Maçã"), vec!["maca"]);
    assert_eq!(normalize("Açaí")[0].surface, "acai");
}

#[test]
fn invariant_inflections_share_a_radical() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.radical("frangos"), normalizer.radical("frango"));
    assert_eq!(normalizer.radical("ovos"), normalizer.radical("ovo"));
    assert_eq!(normalizer.radical("feijões"), normalizer.radical("feijão"));
    assert_eq!(normalizer.radical("pães"), normalizer.radical("pão"));
    assert_eq!(normalizer.radical("grelhado"), normalizer.radical("grelhados"));
}

#[test]
fn invariant_radicals_are_capped() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.radical("integral"), "integr");
    assert!(normalize("requeijão cremoso").iter().all(|t| t.radical.chars().count() <= 6));
}

#[test]
fn parenthetical_content_is_tokenized() {
    let surfaces: Vec<String> = normalize("Salada, Caesar (com molho, croutons; parmesão)")
        .into_iter()
        .map(|t| t.surface)
        .collect();
    assert_eq!(surfaces, vec!["salada", "caesar", "molho", "croutons", "parmesao"]);
}

#[test]
fn short_tokens_are_dropped() {
    let surfaces: Vec<String> = normalize("a b c arroz 1 x")
        .into_iter()
        .map(|t| t.surface)
        .collect();
    assert_eq!(surfaces, vec!["arroz"]);
}

#[test]
fn empty_and_stop_word_only_inputs_yield_no_tokens() {
    assert!(normalize("").is_empty());
    assert!(normalize("   ,;() ").is_empty());
    assert!(normalize("de, com (e) sem").is_empty());
}

#[test]
fn invariant_normalization_is_idempotent() {
    let inputs = [
        "Frango, peito, sem pele, cru",
        "Salada, Caesar, com molho, croutons, parmesão e filé de anchova",
        "Feijões, carioca, cozidos",
        "Leite 2% (integral)",
        "PÃES DE QUEIJO",
        "",
        "de com sem",
    ];

    for input in inputs {
        let once = normalize(input);
        let twice = normalize(&normalize_to_text(&once));
        assert_eq!(once, twice, "normalization not idempotent for {input:?}");
    }
}

#[test]
fn custom_config_changes_radical_length_and_stop_words() {
    let config = NormalizerConfig {
        stop_words: vec!["cozido".to_string()],
        min_token_length: 3,
        radical_length: 3,
        strip_plurals: false,
    };
    let normalizer = Normalizer::new(config);

    let tokens = normalizer.tokens("Frangos de panela cozido");
    let radicals: Vec<&str> = tokens.iter().map(|t| t.radical.as_str()).collect();
    assert_eq!(radicals, vec!["fra", "pan"]);
}

#[test]
fn query_keeps_raw_text() {
    let query = Normalizer::default().query("Filé de Frango");
    assert_eq!(query.raw, "Filé de Frango");
    assert_eq!(query.text(), "file frango");
    assert!(!query.is_empty());
}
