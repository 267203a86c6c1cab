use serde::{Deserialize, Serialize};

use crate::types::{ConfigurationError, ProfessionalGroup};

/// One row of the ordered rule table: any keyword phrase matching the food
/// text routes it to `group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub group: ProfessionalGroup,
    pub keywords: Vec<String>,
}

impl ClassificationRule {
    pub fn new(group: ProfessionalGroup, keywords: &[&str]) -> Self {
        Self {
            group,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Classify by dominant macronutrient energy share when no keyword matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroFallback {
    /// Minimum share (0.0..=1.0) of macronutrient energy the leading
    /// macronutrient must supply.
    pub min_energy_share: f64,
}

/// Words that negate the rest of their comma-separated segment
/// ("sem gordura", "sem leite").
const DEFAULT_NEGATING_WORDS: &[&str] = &["sem"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Evaluated top to bottom; first match wins. A rule whose keyword opens
    /// the name is preferred over any rule matching further in.
    pub rules: Vec<ClassificationRule>,
    #[serde(default = "default_negating_words")]
    pub negating_words: Vec<String>,
    #[serde(default)]
    pub macro_fallback: Option<MacroFallback>,
}

impl ClassifierConfig {
    pub fn v0() -> Self {
        Self {
            rules: default_rules(),
            negating_words: default_negating_words(),
            macro_fallback: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Some(fallback) = &self.macro_fallback {
            let share = fallback.min_energy_share;
            if !share.is_finite() || !(0.0..=1.0).contains(&share) {
                return Err(ConfigurationError::InvalidValue {
                    field: "classifier.macro_fallback.min_energy_share",
                    value: share.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn default_negating_words() -> Vec<String> {
    DEFAULT_NEGATING_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_rules() -> Vec<ClassificationRule> {
    use ProfessionalGroup::*;

    vec![
        // Cuts whose names share words with broader rules
        ClassificationRule::new(
            Protein,
            &[
                "peito de frango", "filé de frango", "coxa de frango", "sobrecoxa de frango",
                "filé de peixe", "carne moída", "clara de ovo", "proteína de soja",
            ],
        ),
        ClassificationRule::new(
            Fat,
            &[
                "óleo", "azeite", "gordura", "banha", "margarina", "maionese", "toucinho",
                "bacon", "amendoim", "castanha", "nozes", "amêndoa", "avelã", "macadâmia",
                "pistache", "semente de girassol", "linhaça", "chia", "abacate",
            ],
        ),
        ClassificationRule::new(
            Dairy,
            &[
                "leite", "queijo", "iogurte", "requeijão", "ricota", "coalhada", "manteiga",
                "creme de leite", "nata", "muçarela", "mussarela", "parmesão", "cottage",
                "kefir",
            ],
        ),
        ClassificationRule::new(
            Protein,
            &[
                "frango", "galinha", "peru", "carne", "boi", "bovina", "vitela", "porco",
                "suína", "lombo", "pernil", "costela", "patinho", "alcatra", "acém", "maminha",
                "picanha", "músculo", "fígado", "coração", "peixe", "atum", "sardinha",
                "salmão", "tilápia", "merluza", "bacalhau", "pescada", "anchova", "camarão",
                "lula", "polvo", "marisco", "ovo", "omelete", "presunto", "linguiça",
                "salsicha", "peito", "tofu", "feijão", "lentilha", "grão de bico", "ervilha",
                "soja", "whey", "filé", "bife",
            ],
        ),
        ClassificationRule::new(
            Carbohydrate,
            &[
                "arroz", "macarrão", "massa", "espaguete", "lasanha", "pão", "torrada",
                "biscoito", "bolacha", "bolo", "aveia", "granola", "cereal", "milho", "fubá",
                "cuscuz", "tapioca", "farinha", "batata", "mandioca", "aipim", "macaxeira",
                "inhame", "cará", "quinoa", "trigo", "polenta", "panqueca", "açúcar", "mel",
            ],
        ),
        ClassificationRule::new(
            Fruit,
            &[
                "fruta", "maçã", "banana", "laranja", "mexerica", "tangerina", "limão", "uva",
                "pera", "pêssego", "ameixa", "manga", "mamão", "abacaxi", "melão", "melancia",
                "morango", "kiwi", "goiaba", "maracujá", "caqui", "figo", "acerola", "caju",
                "pitanga", "jabuticaba", "açaí", "cereja", "framboesa", "mirtilo", "coco",
                "graviola", "carambola", "tâmara", "uva passa",
            ],
        ),
        ClassificationRule::new(
            Vegetable,
            &[
                "alface", "rúcula", "agrião", "espinafre", "couve", "repolho", "brócolis",
                "couve-flor", "acelga", "chicória", "almeirão", "tomate", "pepino", "cenoura",
                "beterraba", "abobrinha", "abóbora", "berinjela", "chuchu", "quiabo", "vagem",
                "pimentão", "cebola", "alho", "jiló", "rabanete", "palmito", "cogumelo",
                "aspargo", "legumes", "verdura", "hortaliça",
            ],
        ),
    ]
}
