//! The transpiler: drives the field pipeline, derives operation
//! signatures and assembles the definition blocks into one schema
//! string.

use crate::{
    config::GeneratorConfig,
    converters::pipeline,
    error::GenerateError,
    extractors::extract_scalars,
    field::{GqlField, SkippedField},
    filters::query_input_fields,
    formatters::{DefinitionKind, format_definition, format_field, format_scalar},
    utils::{format_pascal, remove_exclamation},
};
use datamodel::{Datamodel, Model, QueryArg};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::warn;

const QUERY: &str = "Query";
const MUTATION: &str = "Mutation";

/// Produce the schema text for a datamodel.
///
/// Blocks are concatenated in a fixed order - query type, filter
/// inputs, mutation inputs, mutation type, scalars, enums, object
/// types - with the query and mutation families gated by the config.
/// The assembled text is round-tripped through the GraphQL grammar and
/// returned in its printed form; a failing round trip fails the whole
/// generation with no partial output.
pub fn transpile(
    datamodel: &Datamodel,
    config: &GeneratorConfig,
    query_args: &[QueryArg],
) -> Result<String, GenerateError> {
    let transpiler = Transpiler::new(datamodel, config, query_args);

    for skip in transpiler.skipped() {
        warn!(
            model = skip.model.as_str(),
            field = skip.field.as_str(),
            stage = skip.stage,
            reason = skip.reason.as_str(),
            "excluding field from the generated schema"
        );
    }

    canonical_sdl(&transpiler.assemble())
}

/// Parse-and-print round trip through the GraphQL grammar. The printed
/// form is what the generator returns.
fn canonical_sdl(schema: &str) -> Result<String, GenerateError> {
    let document = graphql_parser::parse_schema::<String>(schema)
        .map_err(|err| GenerateError::InvalidSchema(err.to_string()))?;

    Ok(document.to_string())
}

struct Transpiler<'a> {
    datamodel: &'a Datamodel,
    config: &'a GeneratorConfig,
    query_args: &'a [QueryArg],
    /// Pipeline output per model, in declaration order, with shadow
    /// fields already excluded.
    rendered: IndexMap<&'a str, Vec<GqlField>>,
    skipped: Vec<SkippedField>,
}

impl<'a> Transpiler<'a> {
    fn new(datamodel: &'a Datamodel, config: &'a GeneratorConfig, query_args: &'a [QueryArg]) -> Self {
        let stages = pipeline::stages(config);
        let mut rendered = IndexMap::new();
        let mut skipped = Vec::new();

        for (name, model) in &datamodel.models {
            let shadowed = shadowed_field_names(model);
            let mut fields = Vec::with_capacity(model.fields.len());

            for field in &model.fields {
                if shadowed.contains(field.name.as_str()) {
                    continue;
                }

                match pipeline::run(&stages, GqlField::from(field), model, config) {
                    Ok(field) => fields.push(field),
                    Err(skip) => skipped.push(SkippedField {
                        model: name.clone(),
                        field: field.name.clone(),
                        stage: skip.stage,
                        reason: skip.reason,
                    }),
                }
            }

            rendered.insert(name.as_str(), fields);
        }

        Transpiler {
            datamodel,
            config,
            query_args,
            rendered,
            skipped,
        }
    }

    fn skipped(&self) -> &[SkippedField] {
        &self.skipped
    }

    /// The argument used to address a single entity: the first rendered
    /// field typed as the ID scalar, or failing that a field literally
    /// named `id`.
    fn id_field_name(&self, model: &str) -> &str {
        self.rendered[model]
            .iter()
            .find(|field| is_id_type(&field.field_type))
            .map(|field| field.name.as_str())
            .unwrap_or("id")
    }

    fn query_block(&self) -> String {
        let mut fields = Vec::new();

        for name in self.rendered.keys() {
            let lowercased = name.to_lowercase();

            fields.push(format!(
                "{lowercased}({id}: ID!): {name}",
                id = self.id_field_name(name)
            ));

            let args: Vec<String> = self
                .query_args
                .iter()
                .filter(|arg| arg.name == *name)
                .map(|arg| {
                    format!(
                        "{field}: {lowercased}{pascal}QueryInput",
                        field = arg.field,
                        pascal = format_pascal(&arg.field)
                    )
                })
                .collect();
            let args = if args.is_empty() {
                String::new()
            } else {
                format!("({})", args.join(", "))
            };

            fields.push(format!("{lowercased}s{args}: [{name}!]!"));
        }

        format_definition(DefinitionKind::Type, QUERY, &fields)
    }

    fn filter_input_blocks(&self) -> String {
        self.query_args
            .iter()
            .map(|arg| {
                let name = format!(
                    "{}{}QueryInput",
                    arg.name.to_lowercase(),
                    format_pascal(&arg.field)
                );

                format_definition(DefinitionKind::Input, &name, &query_input_fields(&arg.r#type))
            })
            .collect()
    }

    fn mutation_block(&self) -> String {
        let mut fields = Vec::new();

        for name in self.rendered.keys() {
            let lowercased = name.to_lowercase();
            let pascal = format_pascal(name);

            fields.push(format!(
                "create{pascal}({lowercased}: {name}CreateInput!): {name}"
            ));
            fields.push(format!(
                "update{pascal}({lowercased}: {name}UpdateInput!): {name}"
            ));
            fields.push(format!(
                "delete{pascal}({id}: ID!): {name}",
                id = self.id_field_name(name)
            ));
        }

        format_definition(DefinitionKind::Type, MUTATION, &fields)
    }

    fn mutation_input_blocks(&self) -> String {
        let mut blocks = String::new();

        for (name, fields) in &self.rendered {
            let create_fields: Vec<String> = fields
                .iter()
                .filter(|field| !is_id_type(&field.field_type))
                .map(format_field)
                .collect();

            // On update everything becomes optional except the
            // identifier, which addresses the entity being updated.
            let update_fields: Vec<String> = fields
                .iter()
                .map(|field| {
                    let stripped = remove_exclamation(&field.field_type);
                    let field_type = if stripped == "ID" { "ID!" } else { stripped };

                    format!("{}: {field_type}", field.name)
                })
                .collect();

            blocks.push_str(&format_definition(
                DefinitionKind::Input,
                &format!("{name}CreateInput"),
                &create_fields,
            ));
            blocks.push_str(&format_definition(
                DefinitionKind::Input,
                &format!("{name}UpdateInput"),
                &update_fields,
            ));
        }

        blocks
    }

    fn scalar_block(&self) -> String {
        let scalars = extract_scalars(self.datamodel);

        if scalars.is_empty() {
            return String::new();
        }

        let mut block: String = scalars.into_iter().map(format_scalar).collect();
        block.push('\n');
        block
    }

    fn enum_blocks(&self) -> String {
        self.datamodel
            .enums
            .values()
            .map(|r#enum| {
                let values: Vec<String> =
                    r#enum.values.iter().map(|value| value.name.clone()).collect();

                format_definition(DefinitionKind::Enum, &r#enum.name, &values)
            })
            .collect()
    }

    fn model_blocks(&self) -> String {
        self.rendered
            .iter()
            .map(|(name, fields)| {
                let lines: Vec<String> = fields.iter().map(format_field).collect();

                format_definition(DefinitionKind::Type, name, &lines)
            })
            .collect()
    }

    fn assemble(&self) -> String {
        let mut schema = String::new();

        if self.config.create_query() {
            schema.push_str(&self.query_block());
            schema.push_str(&self.filter_input_blocks());
        }

        if self.config.create_mutation() {
            schema.push_str(&self.mutation_input_blocks());
            schema.push_str(&self.mutation_block());
        }

        schema.push_str(&self.scalar_block());
        schema.push_str(&self.enum_blocks());
        schema.push_str(&self.model_blocks());

        schema
    }
}

/// Fields named in a sibling's relation-backing list are foreign-key
/// shadows and never reach the pipeline.
fn shadowed_field_names(model: &Model) -> HashSet<&str> {
    model
        .fields
        .iter()
        .filter_map(|field| field.relation_from_fields.as_deref())
        .flatten()
        .map(String::as_str)
        .collect()
}

/// True if a rendered type is the ID scalar under any modifier nesting.
fn is_id_type(rendered: &str) -> bool {
    rendered.trim_matches(|c| matches!(c, '[' | ']' | '!')) == "ID"
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use indoc::indoc;

    const SCHEMA: &str = indoc! {r#"
        enum Role {
          USER
          ADMIN
        }

        model Post {
          authorId  Int? // @Query
          content   String? //@Query
          id        Int     @default(autoincrement()) @id
          published Boolean @default(false) //                 @Query
          author    User?   @relation(fields: [authorId], references: [id])
        }

        model User {
          email String  @unique
          id    Int     @default(autoincrement()) @id
          name  String?
          posts Post[]
        }
    "#};

    fn crud_config() -> GeneratorConfig {
        GeneratorConfig::from_pairs([
            ("createQuery".to_owned(), "true".to_owned()),
            ("createMutation".to_owned(), "true".to_owned()),
        ])
    }

    fn assembled(schema: &str, config: &GeneratorConfig) -> String {
        let datamodel = datamodel::parse_schema(schema).unwrap();
        let query_args = datamodel::scan_query_args(schema);

        Transpiler::new(&datamodel, config, &query_args).assemble()
    }

    #[test]
    fn assembles_the_full_schema_in_fixed_order() {
        let expected = expect![[r#"
            type Query {
              post(id: ID!): Post
              posts(authorId: postAuthoridQueryInput, content: postContentQueryInput, published: postPublishedQueryInput): [Post!]!
              user(id: ID!): User
              users: [User!]!
            }

            input postAuthoridQueryInput {
              _gt: Int
              _lt: Int
              _gte: Int
              _lte: Int
              _eq: Int
              _neq: Int
              _is_null: Boolean
            }

            input postContentQueryInput {
              _eq: String
              _contains: String
              _is_empty: Boolean
              _in: [String]
              _not_in: [String]
              _is_null: Boolean
            }

            input postPublishedQueryInput {
              _eq: String
              _contains: String
              _is_empty: Boolean
              _in: [String]
              _not_in: [String]
              _is_null: Boolean
            }

            input PostCreateInput {
              content: String
              published: Boolean!
              author: User
            }

            input PostUpdateInput {
              content: String
              id: ID!
              published: Boolean
              author: User
            }

            input UserCreateInput {
              email: String!
              name: String
              posts: [Post!]!
            }

            input UserUpdateInput {
              email: String
              id: ID!
              name: String
              posts: [Post!]
            }

            type Mutation {
              createPost(post: PostCreateInput!): Post
              updatePost(post: PostUpdateInput!): Post
              deletePost(id: ID!): Post
              createUser(user: UserCreateInput!): User
              updateUser(user: UserUpdateInput!): User
              deleteUser(id: ID!): User
            }

            enum Role {
              USER
              ADMIN
            }

            type Post {
              content: String
              id: ID!
              published: Boolean!
              author: User
            }

            type User {
              email: String!
              id: ID!
              name: String
              posts: [Post!]!
            }

        "#]];

        expected.assert_eq(&assembled(SCHEMA, &crud_config()));
    }

    #[test]
    fn shadow_fields_never_appear_in_rendered_blocks() {
        let schema = assembled(SCHEMA, &crud_config());

        for block_header in ["type Post {", "input PostCreateInput {", "input PostUpdateInput {"] {
            let block = schema
                .split(block_header)
                .nth(1)
                .unwrap()
                .split('}')
                .next()
                .unwrap();

            assert!(!block.contains("authorId"), "{block_header} leaks the shadow field");
        }

        // The queryability marker still surfaces the backing column as a
        // filter argument.
        assert!(schema.contains("authorId: postAuthoridQueryInput"));
    }

    #[test]
    fn disabled_toggles_leave_only_declarations() {
        let expected = expect![[r#"
            enum Role {
              USER
              ADMIN
            }

            type Post {
              content: String
              id: ID!
              published: Boolean!
              author: User
            }

            type User {
              email: String!
              id: ID!
              name: String
              posts: [Post!]!
            }

        "#]];

        expected.assert_eq(&assembled(SCHEMA, &GeneratorConfig::default()));
    }

    #[test]
    fn custom_scalars_are_declared_before_the_object_types() {
        let schema = indoc! {r#"
            model Post {
              id       Int   @id
              content1 Bytes
            }
        "#};

        let expected = expect![[r#"
            scalar Bytes

            type Post {
              id: ID!
              content1: Bytes
            }

        "#]];

        expected.assert_eq(&assembled(schema, &GeneratorConfig::default()));
    }

    #[test]
    fn id_lookup_falls_back_to_a_field_named_id() {
        let schema = indoc! {r#"
            model Session {
              id    String
              token String @unique
            }
        "#};
        let config = crud_config();

        let schema = assembled(schema, &config);

        assert!(schema.contains("session(id: ID!): Session"));
        assert!(schema.contains("deleteSession(id: ID!): Session"));
    }

    #[test]
    fn empty_models_render_braceless_headers() {
        let schema = assembled("model Empty {\n}", &GeneratorConfig::default());

        assert_eq!(schema, "type Empty\n\n");
    }

    #[test]
    fn round_trip_rejects_text_that_is_not_graphql() {
        let error = canonical_sdl("type {{{").unwrap_err();

        assert!(matches!(error, GenerateError::InvalidSchema(_)));
    }

    #[test]
    fn transpile_output_is_deterministic() {
        let datamodel = datamodel::parse_schema(SCHEMA).unwrap();
        let query_args = datamodel::scan_query_args(SCHEMA);
        let config = crud_config();

        let first = transpile(&datamodel, &config, &query_args).unwrap();
        let second = transpile(&datamodel, &config, &query_args).unwrap();

        assert_eq!(first, second);
    }
}
