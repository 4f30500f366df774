//! Extraction of queryable-field markers from raw schema text.
//!
//! Queryability is declared with a `// @Query` trailing comment rather
//! than an attribute, so this scan works on the source text, not on the
//! parsed datamodel. The scan is deliberately line-based and only ever
//! looks at the first `model ... {` block it finds; callers wanting more
//! models invoke it once per block. The transpiler only consumes the
//! resulting [`QueryArg`] list, so a structured extractor can replace
//! this one without touching it.

/// A `(field, base type, model name)` triple marking a field filterable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArg {
    pub field: String,
    pub r#type: String,
    /// The owning model's name.
    pub name: String,
}

/// Base types a query argument may have. Anything else marked with
/// `// @Query` is dropped silently.
const QUERYABLE_TYPES: &[&str] = &["String", "Int", "Boolean", "Float", "DateTime"];

/// Scan schema text for fields carrying a `// @Query` marker.
///
/// A schema without a model block, or a model block without markers,
/// yields an empty list, never an error.
pub fn scan_query_args(schema: &str) -> Vec<QueryArg> {
    let Some(after_keyword) = schema.split("model ").nth(1) else {
        return Vec::new();
    };
    let Some((model_name, rest)) = after_keyword.split_once(" {") else {
        return Vec::new();
    };
    let body = rest.split('}').next().unwrap_or("");

    let mut args = Vec::new();

    for line in body.lines().filter(|line| line.contains("@Query")) {
        let mut words = line.split_whitespace();
        let Some(field) = words.next() else { continue };
        let base_type: String = words
            .next()
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();

        if QUERYABLE_TYPES.contains(&base_type.as_str()) {
            args.push(QueryArg {
                field: field.to_owned(),
                r#type: base_type,
                name: model_name.to_owned(),
            });
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn arg(field: &str, r#type: &str, name: &str) -> QueryArg {
        QueryArg {
            field: field.to_owned(),
            r#type: r#type.to_owned(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn scans_marked_fields_of_the_first_model() {
        let args = scan_query_args(SCHEMA);

        assert_eq!(
            args,
            &[
                arg("authorId", "Int", "Post"),
                arg("content", "String", "Post"),
                arg("published", "Boolean", "Post"),
            ]
        );
    }

    #[test]
    fn optional_markers_are_stripped_to_the_base_type() {
        let args = scan_query_args("model A {\n  title String? // @Query\n}");

        assert_eq!(args, &[arg("title", "String", "A")]);
    }

    #[test]
    fn non_whitelisted_types_are_dropped() {
        let schema = indoc! {r#"
            model Post {
              payload Bytes // @Query
              meta    Json  // @Query
              title   String // @Query
            }
        "#};

        assert_eq!(scan_query_args(schema), &[arg("title", "String", "Post")]);
    }

    #[test]
    fn schema_without_model_block_yields_no_args() {
        assert_eq!(scan_query_args("enum Role { USER }"), &[]);
        assert_eq!(scan_query_args(""), &[]);
    }

    #[test]
    fn model_without_markers_yields_no_args() {
        assert_eq!(scan_query_args("model A {\n  id Int @id\n}"), &[]);
    }
}
