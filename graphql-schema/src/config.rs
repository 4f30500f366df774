use crate::field::GqlField;
use datamodel::Model;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A user-supplied transform hook with the same shape as the built-in
/// pipeline stages. Returning `Err` drops the field from the output.
pub type CustomRule = Arc<dyn Fn(GqlField, &Model) -> Result<GqlField, String> + Send + Sync>;

/// Optional hooks spliced into the field transform pipeline.
#[derive(Default, Clone)]
pub struct CustomRules {
    pub before_adding_type_modifiers: Option<CustomRule>,
    pub after_adding_type_modifiers: Option<CustomRule>,
}

impl fmt::Debug for CustomRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRules")
            .field(
                "before_adding_type_modifiers",
                &self.before_adding_type_modifiers.is_some(),
            )
            .field(
                "after_adding_type_modifiers",
                &self.after_adding_type_modifiers.is_some(),
            )
            .finish()
    }
}

/// Generator configuration: a flat string map plus optional custom
/// rules. Constructed once per generation call and read-only afterwards,
/// so it can be shared across concurrent generations.
#[derive(Debug, Default, Clone)]
pub struct GeneratorConfig {
    settings: IndexMap<String, String>,
    custom_rules: CustomRules,
}

impl GeneratorConfig {
    pub fn new(settings: IndexMap<String, String>) -> Self {
        GeneratorConfig {
            settings,
            custom_rules: CustomRules::default(),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::new(pairs.into_iter().collect())
    }

    pub fn with_custom_rules(mut self, custom_rules: CustomRules) -> Self {
        self.custom_rules = custom_rules;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    pub fn settings(&self) -> &IndexMap<String, String> {
        &self.settings
    }

    pub fn custom_rules(&self) -> &CustomRules {
        &self.custom_rules
    }

    /// Query emission is opt-in: absent or non-"true" values disable it.
    pub fn create_query(&self) -> bool {
        self.get("createQuery") == Some("true")
    }

    /// Mutation emission is opt-in, like [`Self::create_query`].
    pub fn create_mutation(&self) -> bool {
        self.get("createMutation") == Some("true")
    }
}

/// Rewrite the `createCRUD` shorthand into the two fine-grained toggles.
///
/// `"true"` enables both; any other value disables both. Unrelated keys
/// pass through untouched, and a config without the shorthand is
/// returned as-is.
pub fn convert_config(mut config: GeneratorConfig) -> GeneratorConfig {
    let Some(create_crud) = config.settings.shift_remove("createCRUD") else {
        return config;
    };

    let value = if create_crud == "true" { "true" } else { "false" };
    config
        .settings
        .insert("createQuery".to_owned(), value.to_owned());
    config
        .settings
        .insert("createMutation".to_owned(), value.to_owned());

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(config: &GeneratorConfig) -> Vec<(&str, &str)> {
        config
            .settings()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn create_crud_true_enables_queries_and_mutations() {
        let config = convert_config(GeneratorConfig::from_pairs([
            ("createCRUD".to_owned(), "true".to_owned()),
            ("someThing".to_owned(), "else".to_owned()),
        ]));

        assert_eq!(
            settings(&config),
            &[
                ("someThing", "else"),
                ("createQuery", "true"),
                ("createMutation", "true"),
            ]
        );
        assert!(config.create_query());
        assert!(config.create_mutation());
    }

    #[test]
    fn create_crud_anything_else_disables_both() {
        let config = convert_config(GeneratorConfig::from_pairs([(
            "createCRUD".to_owned(),
            "not true".to_owned(),
        )]));

        assert_eq!(
            settings(&config),
            &[("createQuery", "false"), ("createMutation", "false")]
        );
        assert!(!config.create_query());
        assert!(!config.create_mutation());
    }

    #[test]
    fn config_without_the_shorthand_is_untouched() {
        let config = convert_config(GeneratorConfig::from_pairs([(
            "createQuery".to_owned(),
            "true".to_owned(),
        )]));

        assert_eq!(settings(&config), &[("createQuery", "true")]);
        assert!(config.create_query());
        assert!(!config.create_mutation());
    }

    #[test]
    fn emission_defaults_to_disabled() {
        let config = GeneratorConfig::default();

        assert!(!config.create_query());
        assert!(!config.create_mutation());
    }
}
