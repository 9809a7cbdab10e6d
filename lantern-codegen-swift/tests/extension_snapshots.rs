//! Snapshot tests for extension emission.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use lantern_ast::{
    Declaration, Expression, Extension, FunctionDefinition, GenericConstraint, Parameter,
    TypeDefinition, TypeKind, TypeRef, Variable,
};
use lantern_codegen::Indent;
use lantern_codegen_swift::{CodeGenerator, Configuration, NameRenderer};

fn render(value: &Extension) -> String {
    render_with(value, &Configuration::default())
}

fn render_with(value: &Extension, configuration: &Configuration) -> String {
    let mut generator = CodeGenerator::new(configuration);
    generator.generate_extension(value);
    generator.into_source()
}

fn person_record_extension() -> Extension {
    Extension::new("Person")
        .public()
        .type_definition(
            TypeDefinition::new("ID")
                .public()
                .conformance("Hashable")
                .variable(Variable::new("rawValue").public().ty("Int64")),
        )
        .type_variable(
            Variable::constant("tableName", Expression::string("person"))
                .comment("The SQL table name."),
        )
        .type_variable(Variable::constant("columnCount", Expression::Integer(3)))
        .type_function(
            FunctionDefinition::new("fetch")
                .public()
                .inlinable()
                .param(Parameter::unlabeled("db", "OpaquePointer"))
                .param(Parameter::new("limit", "Int?").default_value(Expression::Nil))
                .throws()
                .returns("[Person]")
                .body_line("return []"),
        )
        .function(
            FunctionDefinition::new("describe")
                .returns("String")
                .body_line("return \"\\(name)\""),
        )
}

#[test]
fn test_scenario_public_without_conformances() {
    assert_eq!(
        render(&Extension::new("Foo").public()),
        "public extension Foo {\n}\n"
    );
}

#[test]
fn test_scenario_conformance_drops_public() {
    let source = render(&Extension::new("Foo").public().conformance("Equatable"));
    assert!(!source.contains("public"));
    assert!(source.contains(" : Equatable {"));
    assert_eq!(source, "extension Foo : Equatable {\n}\n");
}

#[test]
fn test_scenario_nested_guards_order() {
    let value = Extension::new("Foo")
        .minimum_swift_version(5, 5)
        .required_import("_Concurrency");
    let source = render(&value);
    let lines: Vec<&str> = source.lines().collect();
    assert_eq!(
        lines,
        vec![
            "#if swift(>=5.5)",
            "#if canImport(_Concurrency)",
            "@available(macOS 10.15, iOS 13, tvOS 13, watchOS 6, *)",
            "extension Foo {",
            "}",
            "#endif // required canImports",
            "#endif // swift(>=5.5)",
        ]
    );
}

#[test]
fn test_public_keyword_iff_public_without_conformances() {
    for public in [false, true] {
        for conformances in [Vec::new(), vec!["Equatable"], vec!["Equatable", "Hashable"]] {
            let mut value = Extension::new("Foo");
            value.public = public;
            for conformance in &conformances {
                value = value.conformance(*conformance);
            }
            let source = render(&value);
            let header = source.lines().next().unwrap();
            assert_eq!(
                header.starts_with("public "),
                public && conformances.is_empty(),
                "header: {header}"
            );
        }
    }
}

#[test]
fn test_brace_placement_follows_constraints() {
    let without = render(&Extension::new("Array"));
    assert_eq!(without.lines().next(), Some("extension Array {"));

    let with = render(
        &Extension::new("Array").constraint(GenericConstraint::conformance("Element", "Codable")),
    );
    let lines: Vec<&str> = with.lines().collect();
    assert_eq!(lines, vec!["extension Array", "  where Element : Codable", "{", "}"]);
}

#[test]
fn test_capability_close_precedes_version_close() {
    let value = Extension::new("Foo")
        .minimum_swift_version(5, 9)
        .required_import("SQLite3")
        .required_import("Foundation")
        .function(FunctionDefinition::new("open"));
    let source = render(&value);
    let brace = source.rfind("\n}\n").unwrap();
    let imports = source.find("#endif // required canImports").unwrap();
    let version = source.find("#endif // swift(>=5.9)").unwrap();
    assert!(brace < imports && imports < version);
    assert!(source.contains("#if canImport(SQLite3) && canImport(Foundation)\n"));
}

#[test]
fn test_rendering_is_deterministic() {
    let value = person_record_extension();
    assert_eq!(render(&value), render(&value));
}

#[test]
fn test_record_extension_snapshot() {
    insta::assert_snapshot!(render(&person_record_extension()), @r###"
public extension Person {

  struct ID : Hashable {

    public let rawValue : Int64
  }

  /// The SQL table name.
  static let tableName = "person"

  static let columnCount = 3

  @inlinable
  static func fetch(_ db: OpaquePointer, limit: Int? = nil) throws -> [Person] {
    return []
  }

  func describe() -> String {
    return "\(name)"
  }
}
"###);
}

#[test]
fn test_gated_generic_extension_snapshot() {
    let value = Extension::new(TypeRef::named("SQLDatabaseAsyncFetchOperations"))
        .public()
        .constraint(GenericConstraint::same_type("RecordTypes", "Schema.RecordTypes"))
        .minimum_swift_version(5, 5)
        .required_import("_Concurrency")
        .type_definition(
            TypeDefinition::new("Columns")
                .kind(TypeKind::Enum)
                .public()
                .type_variable(Variable::constant("id", Expression::string("id")).public()),
        )
        .function(
            FunctionDefinition::new("fetchPeople")
                .public()
                .async_()
                .throws()
                .returns("[Person]")
                .body_line("try await fetch(Person.self)"),
        );

    insta::assert_snapshot!(render(&value), @r###"
#if swift(>=5.5)
#if canImport(_Concurrency)
@available(macOS 10.15, iOS 13, tvOS 13, watchOS 6, *)
public extension SQLDatabaseAsyncFetchOperations
  where RecordTypes == Schema.RecordTypes
{

  enum Columns {

    public static let id = "id"
  }

  func fetchPeople() async throws -> [Person] {
    try await fetch(Person.self)
  }
}
#endif // required canImports
#endif // swift(>=5.5)
"###);
}

#[test]
fn test_custom_separators_and_indent() {
    let configuration = Configuration::default()
        .type_conformance_separator(": ")
        .identifier_list_separator(",")
        .indent(Indent::Spaces(4));
    let value = Extension::new("Person")
        .conformance("Equatable")
        .conformance("Hashable")
        .constraint(GenericConstraint::conformance("T", "Codable"))
        .function(FunctionDefinition::new("open"));
    assert_eq!(
        render_with(&value, &configuration),
        "extension Person: Equatable,Hashable\n    where T: Codable\n{\n\n    func open() {\n    }\n}\n"
    );
}

#[test]
fn test_six_space_indent() {
    let configuration = Configuration::default().indent(Indent::Spaces(6));
    let value = Extension::new("Foo").constraint(GenericConstraint::conformance("T", "P"));
    assert_eq!(
        render_with(&value, &configuration),
        "extension Foo\n      where T : P\n{\n}\n"
    );
}

/// Qualifies every named type with a module prefix.
struct ModuleQualified(&'static str);

impl NameRenderer for ModuleQualified {
    fn type_name(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Name(name) => format!("{}.{}", self.0, name),
            other => other.to_string(),
        }
    }

    fn identifier(&self, name: &str) -> String {
        name.to_string()
    }
}

#[test]
fn test_name_renderer_is_used_for_every_type() {
    let configuration = Configuration::default().names(ModuleQualified("Northwind"));
    let value = Extension::new("Person")
        .conformance("Identifiable")
        .constraint(GenericConstraint::conformance("T", "Record"))
        .type_variable(Variable::new("count").ty("Int"));
    assert_eq!(
        render_with(&value, &configuration),
        "extension Northwind.Person : Northwind.Identifiable\n\
         \x20 where T : Northwind.Record\n\
         {\n\
         \n  static let count : Northwind.Int\n\
         }\n"
    );
}

#[test]
fn test_consecutive_extensions_share_one_buffer() {
    let configuration = Configuration::default();
    let mut generator = CodeGenerator::new(&configuration);
    let declarations: Vec<Declaration> = vec![
        Extension::new("Person").into(),
        Extension::new("Address").public().into(),
    ];
    generator.generate_all(&declarations);
    assert_eq!(
        generator.into_source(),
        "extension Person {\n}\n\npublic extension Address {\n}\n"
    );
}
