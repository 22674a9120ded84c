use indoc::indoc;
use typeport_core::{CommentGroup, Field, TypeExpr};

use super::test_utils::{count, decls, decls_with};
use super::{CaseStyle, Config, Emitter, UnknownTypes};

fn struct_fields(fields: &[Field], config: &Config) -> String {
    let mut unknown = UnknownTypes::new();
    let mut emitter = Emitter::new(config, &mut unknown);
    emitter.write_struct_fields(fields, 0);
    emitter.finish()
}

#[test]
fn pointer_fields_are_optional() {
    let output = decls(indoc! {"
        type User struct {
            Name string
            Email *string
            Tags []*string
        }
    "});
    insta::assert_snapshot!(output, @r"
    interface User {
      Name: string
      Email?: string
      Tags: Array<(string | undefined)>
    }
    ");
    assert!(!output.contains("Email: string | undefined"));
}

#[test]
fn unexported_and_embedded_fields_are_skipped() {
    let output = decls(indoc! {"
        type Account struct {
            Base
            *Audit
            ID int
            password string
            _ int
        }
    "});
    insta::assert_snapshot!(output, @r"
    interface Account {
      ID: number
    }
    ");
    assert_eq!(count(&output, '{'), count(&output, '}'));
}

#[test]
fn only_first_name_is_used() {
    let output = decls("type P struct {\n\tX, Y int\n}\n");
    insta::assert_snapshot!(output, @r"
    interface P {
      X: number
    }
    ");
}

#[test]
fn doc_and_line_comments() {
    let output = decls(indoc! {"
        type Item struct {
            // Name shown to users.
            //
            // Never empty.
            Name string // display name
            Count int //
            Price float64 /* in cents */
        }
    "});
    insta::assert_snapshot!(output, @r"
    interface Item {
      /**
       * Name shown to users.
       *
       * Never empty.
       */
      Name: string // display name
      Count: number
      Price: number // in cents
    }
    ");
}

#[test]
fn doc_of_skipped_member_is_dropped() {
    let output = decls(indoc! {"
        type T struct {
            // hidden
            hidden int
        }
    "});
    assert_eq!(output, "interface T {\n}\n");
}

#[test]
fn formatter_runs_after_export_check() {
    let config = Config::new().field_name_formatter(CaseStyle::CamelCase);
    let (output, _) = decls_with("type T struct {\n\tUserID int\n\tcreated int\n}\n", &config);
    insta::assert_snapshot!(output, @r"
    interface T {
      userID: number
    }
    ");
}

#[test]
fn invalid_names_are_quoted_reserved_words_are_not() {
    let config = Config::new().field_name_formatter(|name: &str| match name {
        "Default" => "default".to_string(),
        "AB" => "a-b".to_string(),
        "Quote" => "it's".to_string(),
        other => other.to_string(),
    });
    let fields = vec![
        Field::named("Default", TypeExpr::ident("int")),
        Field::named("AB", TypeExpr::ident("int")),
        Field::named("Quote", TypeExpr::ident("int")),
    ];
    assert_eq!(
        struct_fields(&fields, &config),
        "  default: number\n  'a-b': number\n  'it\\'s': number\n"
    );
}

#[test]
fn field_optionality_does_not_rewrite_the_tree() {
    let fields = vec![Field::named("Next", TypeExpr::pointer(TypeExpr::ident("Node")))];
    let before = fields.clone();
    let output = struct_fields(&fields, &Config::default());
    assert_eq!(output, "  Next?: Node\n");
    assert_eq!(fields, before);
}

#[test]
fn multi_line_line_comment_stays_on_one_line() {
    let field = Field::named("Size", TypeExpr::ident("int"))
        .with_comment(CommentGroup::from_text("bytes\nrounded up"));
    let output = struct_fields(&[field], &Config::default());
    assert_eq!(output, "  Size: number // bytes rounded up\n");
}

#[test]
fn interface_members() {
    let output = decls(indoc! {"
        type Store interface {
            io.Closer
            // Get loads one record.
            Get(ctx context.Context, id string) (*Record, error)
            List() ([]Record, int, error)
            flush() error
        }
    "});
    insta::assert_snapshot!(output, @r"
    interface Store {
      /**
       * Get loads one record.
       */
      Get(ctx: context.Context, id: string): (Record)
      List(): [Array<Record>, number]
    }
    ");
}

#[test]
fn method_formatter() {
    let config = Config::new().method_name_formatter(CaseStyle::LowerFirst);
    let (output, _) = decls_with(
        "type Runner interface {\n\tRunAll(n int) error\n}\n",
        &config,
    );
    insta::assert_snapshot!(output, @r"
    interface Runner {
      runAll(n: number): void
    }
    ");
}

#[test]
fn constraint_elements_are_skipped() {
    let output = decls("type Number interface {\n\t~int | ~float64\n}\n");
    assert_eq!(output, "interface Number {\n}\n");
}
