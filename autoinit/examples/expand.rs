//! Expands `@AutoInit` on a sample declaration and prints the result.
//!
//! Run with: `cargo run --example expand`
//! Or with a host-supplied declaration: `cargo run --example expand -- decl.json`
//! Set `RUST_LOG=debug` to see skipped bindings.

use autoinit::prelude::*;
use autoinit::syntax::AccessorBlock;
use std::error::Error;

fn sample() -> RecordDeclaration {
    RecordDeclaration::structure("Complex")
        .with_modifier(Modifier::new("public"))
        .with_variable(VariableDecl::var(
            PatternBinding::identifier("name").with_type(TypeSyntax::named("String")),
        ))
        .with_variable(VariableDecl::var(
            PatternBinding::identifier("count")
                .with_type(TypeSyntax::named("Int"))
                .with_initializer("10"),
        ))
        .with_variable(VariableDecl::var(
            PatternBinding::identifier("onChange").with_type(TypeSyntax::function(
                vec![TypeSyntax::named("Int")],
                TypeSyntax::void(),
            )),
        ))
        .with_variable(VariableDecl::var(
            PatternBinding::identifier("email").with_type(TypeSyntax::named("String").optional()),
        ))
        .with_variable(VariableDecl::immutable(
            PatternBinding::identifier("version").with_initializer("\"1.0.0\""),
        ))
        .with_variable(VariableDecl::var(
            PatternBinding::identifier("label")
                .with_type(TypeSyntax::named("String"))
                .with_accessor_block(AccessorBlock::Getter {
                    body: "\"\\(name) (\\(count))\"".to_string(),
                }),
        ))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let record = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => sample(),
    };
    let attribute = AttributeSyntax::new(AutoInitMacro::NAME, SourceLocation::new(1, 1));

    match AutoInitMacro::new().expand_to_source(&attribute, &record, &[]) {
        Ok(members) => {
            for member in members {
                println!("{}", member);
            }
        }
        Err(err) => eprintln!("{}", err.diagnostic()),
    }

    Ok(())
}
