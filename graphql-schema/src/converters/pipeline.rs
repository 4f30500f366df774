//! The per-field transform pipeline.
//!
//! An ordered list of named stages, resolved once from the config
//! before any field runs. Each stage is a pure transform over
//! `(field, model)`; a failing stage drops its field from the rendered
//! output without affecting the rest of the model.

use super::{convert_type::convert_type, type_modifiers::add_type_modifiers};
use crate::config::{CustomRule, GeneratorConfig};
use crate::field::GqlField;
use datamodel::Model;

/// Why a field was dropped, tagged with the stage that rejected it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldSkip {
    pub(crate) stage: &'static str,
    pub(crate) reason: String,
}

/// One stage of the pipeline, in running order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Stage {
    ConvertType,
    BeforeTypeModifiers,
    AddTypeModifiers,
    AfterTypeModifiers,
}

impl Stage {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Stage::ConvertType => "convert-type",
            Stage::BeforeTypeModifiers => "custom-rule-before-type-modifiers",
            Stage::AddTypeModifiers => "add-type-modifiers",
            Stage::AfterTypeModifiers => "custom-rule-after-type-modifiers",
        }
    }
}

/// Resolve the stage list for a config. Custom-rule stages are present
/// only when the config carries the matching hook; the decision is made
/// here, once, not per field.
pub(crate) fn stages(config: &GeneratorConfig) -> Vec<Stage> {
    let rules = config.custom_rules();
    let mut stages = vec![Stage::ConvertType];

    if rules.before_adding_type_modifiers.is_some() {
        stages.push(Stage::BeforeTypeModifiers);
    }

    stages.push(Stage::AddTypeModifiers);

    if rules.after_adding_type_modifiers.is_some() {
        stages.push(Stage::AfterTypeModifiers);
    }

    stages
}

/// Run a field through the stage list.
pub(crate) fn run(
    stages: &[Stage],
    field: GqlField,
    model: &Model,
    config: &GeneratorConfig,
) -> Result<GqlField, FieldSkip> {
    let rules = config.custom_rules();

    stages.iter().try_fold(field, |field, stage| match stage {
        Stage::ConvertType => Ok(convert_type(field, model)),
        Stage::AddTypeModifiers => Ok(add_type_modifiers(field, model)),
        Stage::BeforeTypeModifiers => {
            apply_rule(&rules.before_adding_type_modifiers, *stage, field, model)
        }
        Stage::AfterTypeModifiers => {
            apply_rule(&rules.after_adding_type_modifiers, *stage, field, model)
        }
    })
}

fn apply_rule(
    rule: &Option<CustomRule>,
    stage: Stage,
    field: GqlField,
    model: &Model,
) -> Result<GqlField, FieldSkip> {
    match rule {
        Some(rule) => rule(field, model).map_err(|reason| FieldSkip {
            stage: stage.name(),
            reason,
        }),
        None => Ok(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomRules;
    use datamodel::FieldArity;
    use std::sync::Arc;

    fn model() -> Model {
        Model {
            name: "Post".to_owned(),
            fields: Vec::new(),
            primary_key: None,
            unique_fields: Vec::new(),
        }
    }

    fn field(name: &str, field_type: &str, arity: FieldArity) -> GqlField {
        GqlField {
            name: name.to_owned(),
            field_type: field_type.to_owned(),
            arity,
            is_id: false,
        }
    }

    #[test]
    fn default_pipeline_converts_then_applies_modifiers() {
        let config = GeneratorConfig::default();
        let stages = stages(&config);

        assert_eq!(stages, &[Stage::ConvertType, Stage::AddTypeModifiers]);

        let rendered = run(
            &stages,
            field("tags", "String", FieldArity::List),
            &model(),
            &config,
        )
        .unwrap();

        assert_eq!(rendered.field_type, "[String!]!");
    }

    #[test]
    fn custom_rules_are_spliced_around_the_modifier_stage() {
        let rules = CustomRules {
            before_adding_type_modifiers: Some(Arc::new(|mut field, _| {
                field.field_type = format!("{}Snapshot", field.field_type);
                Ok(field)
            })),
            after_adding_type_modifiers: Some(Arc::new(|mut field, _| {
                field.name = format!("_{}", field.name);
                Ok(field)
            })),
        };
        let config = GeneratorConfig::default().with_custom_rules(rules);
        let resolved = stages(&config);

        assert_eq!(
            resolved,
            &[
                Stage::ConvertType,
                Stage::BeforeTypeModifiers,
                Stage::AddTypeModifiers,
                Stage::AfterTypeModifiers,
            ]
        );

        let rendered = run(
            &resolved,
            field("meta", "Json", FieldArity::Required),
            &model(),
            &config,
        )
        .unwrap();

        assert_eq!(rendered.name, "_meta");
        assert_eq!(rendered.field_type, "JsonSnapshot!");
    }

    #[test]
    fn a_failing_rule_drops_the_field_with_its_stage_name() {
        let rules = CustomRules {
            before_adding_type_modifiers: Some(Arc::new(|field, _| {
                Err(format!("no mapping for {}", field.field_type))
            })),
            after_adding_type_modifiers: None,
        };
        let config = GeneratorConfig::default().with_custom_rules(rules);

        let skip = run(
            &stages(&config),
            field("payload", "Bytes", FieldArity::Required),
            &model(),
            &config,
        )
        .unwrap_err();

        assert_eq!(skip.stage, "custom-rule-before-type-modifiers");
        assert_eq!(skip.reason, "no mapping for Bytes");
    }
}
