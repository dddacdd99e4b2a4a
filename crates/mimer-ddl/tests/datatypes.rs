//! End-to-end DDL fixtures for the Mimer SQL dialect.

use mimer_ddl::{
    AbstractType, Column, DdlCompiler, DdlError, DdlLayout, DialectConfig, IntervalType,
    IntervalUnit, MimerDialect, SchemaFile, Table,
};

fn compiler() -> DdlCompiler {
    DdlCompiler::default()
}

fn types_test() -> Table {
    Table::new(
        "types_test",
        vec![
            Column::new("id", AbstractType::integer())
                .primary_key()
                .identity(),
            Column::new("val_int", AbstractType::integer()),
            Column::new("val_float", AbstractType::float(None)),
            Column::new("val_date", AbstractType::Date),
            Column::new("val_ts", AbstractType::Timestamp),
            Column::new("val_time", AbstractType::Time),
            Column::new("val_str", AbstractType::varchar(Some(40))),
            Column::new("val_uuid", AbstractType::Uuid),
        ],
    )
}

fn interval(fields: &str, precision: Option<i32>, second_precision: Option<i32>) -> AbstractType {
    AbstractType::interval(IntervalType::from_fields(fields, precision, second_precision).unwrap())
}

fn datatype_table() -> Table {
    Table::new(
        "datatype_table",
        vec![
            Column::new("id", AbstractType::integer())
                .primary_key()
                .identity(),
            Column::new("big_val", AbstractType::big_integer()),
            Column::new("small_val", AbstractType::small_integer()),
            Column::new("numeric_val", AbstractType::decimal(10, Some(2))),
            Column::new("numeric_no_scale", AbstractType::decimal(12, None)),
            Column::new("float_precise", AbstractType::float(Some(10))),
            Column::new("float_double", AbstractType::float(Some(54))),
            Column::new("string_val", AbstractType::varchar(Some(120))),
            Column::new("string_default", AbstractType::varchar(None)),
            Column::new("char_val", AbstractType::FixedChar { length: 3 }),
            Column::new("text_val", AbstractType::Text),
            Column::new("unicode_val", AbstractType::NationalVarChar { length: 100 }),
            Column::new("unicode_text_val", AbstractType::NationalText),
            Column::new("binary_val", AbstractType::Blob),
            Column::new("fixed_binary_val", AbstractType::FixedBinary { length: 16 }),
            Column::new("varbinary_val", AbstractType::VarBinary { length: 32 }),
            Column::new("boolean_val", AbstractType::Boolean),
            Column::new("date_val", AbstractType::Date),
            Column::new("time_val", AbstractType::Time),
            Column::new("datetime_val", AbstractType::Timestamp),
            Column::new(
                "interval_day_5",
                AbstractType::interval(IntervalType::day_to_second(Some(5), None)),
            ),
            Column::new(
                "interval_second_4",
                AbstractType::interval(IntervalType::day_to_second(None, Some(4))),
            ),
            Column::new(
                "interval_day_5_to_second_2",
                AbstractType::interval(IntervalType::day_to_second(Some(5), Some(2))),
            ),
            Column::new("interval_year", interval("YEAR", None, None)),
            Column::new("interval_year_2", interval("YEAR", Some(2), None)),
            Column::new("interval_year_to_month", interval("YEAR TO MONTH", None, None)),
            Column::new("interval_day_to_second", interval("DAY TO SECOND", None, Some(5))),
            Column::new("uuid_val", AbstractType::Uuid),
        ],
    )
}

const TYPES_TEST_DDL: &str = "CREATE TABLE types_test ( \
    id INTEGER DEFAULT NEXT VALUE FOR types_test_id_autoinc_seq, \
    val_int INTEGER, \
    val_float DOUBLE PRECISION, \
    val_date DATE, \
    val_ts TIMESTAMP, \
    val_time TIME, \
    val_str VARCHAR(40), \
    val_uuid BUILTIN.UUID, \
    PRIMARY KEY (id) )";

const DATATYPE_TABLE_DDL: &str = "CREATE TABLE datatype_table ( \
    id INTEGER DEFAULT NEXT VALUE FOR datatype_table_id_autoinc_seq, \
    big_val BIGINT, \
    small_val SMALLINT, \
    numeric_val DECIMAL(10,2), \
    numeric_no_scale DECIMAL(12), \
    float_precise FLOAT(10), \
    float_double DOUBLE PRECISION, \
    string_val VARCHAR(120), \
    string_default VARCHAR(255), \
    char_val CHAR(3), \
    text_val CLOB, \
    unicode_val NVARCHAR(100), \
    unicode_text_val NCLOB, \
    binary_val BLOB, \
    fixed_binary_val BINARY(16), \
    varbinary_val VARBINARY(32), \
    boolean_val BOOLEAN, \
    date_val DATE, \
    time_val TIME, \
    datetime_val TIMESTAMP, \
    interval_day_5 INTERVAL DAY(5), \
    interval_second_4 INTERVAL SECOND(4), \
    interval_day_5_to_second_2 INTERVAL DAY(5) TO SECOND(2), \
    interval_year INTERVAL YEAR, \
    interval_year_2 INTERVAL YEAR(2), \
    interval_year_to_month INTERVAL YEAR TO MONTH, \
    interval_day_to_second INTERVAL DAY TO SECOND(5), \
    uuid_val BUILTIN.UUID, \
    PRIMARY KEY (id) )";

fn normalize(sql: &str) -> String {
    sql.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("( ", "(")
        .replace(" )", ")")
}

#[test]
fn test_types_test_table() {
    let sql = compiler().compile_create_table(&types_test()).unwrap();
    assert_eq!(sql, TYPES_TEST_DDL);
}

#[test]
fn test_datatype_table() {
    let sql = compiler().compile_create_table(&datatype_table()).unwrap();
    assert_eq!(sql, DATATYPE_TABLE_DDL);
}

#[test]
fn test_datatype_table_sequence_statements() {
    let compiled = compiler().compile(&datatype_table()).unwrap();
    assert_eq!(
        compiled.create_sequences,
        vec!["CREATE SEQUENCE datatype_table_id_autoinc_seq".to_string()]
    );
    assert_eq!(compiled.drop_table, "DROP TABLE datatype_table");
    assert_eq!(
        compiled.drop_sequences,
        vec!["DROP SEQUENCE datatype_table_id_autoinc_seq".to_string()]
    );
}

#[test]
fn test_compilation_is_deterministic() {
    let c = compiler();
    let table = datatype_table();
    let first = c.compile(&table).unwrap();
    for _ in 0..5 {
        assert_eq!(c.compile(&table).unwrap(), first);
    }
}

#[test]
fn test_pretty_layout_matches_compact() {
    let pretty = DdlCompiler::new(
        MimerDialect::with_config(DialectConfig {
            layout: DdlLayout::Pretty,
            ..Default::default()
        })
        .unwrap(),
    );
    let sql = pretty.compile_create_table(&datatype_table()).unwrap();
    assert!(sql.contains("\n\tuuid_val BUILTIN.UUID,\n"));
    assert_eq!(normalize(&sql), normalize(DATATYPE_TABLE_DDL));
}

#[test]
fn test_composite_primary_key_order() {
    let table = Table::new(
        "order_lines",
        vec![
            Column::new("line_no", AbstractType::small_integer()).primary_key(),
            Column::new("order_id", AbstractType::big_integer()).primary_key(),
            Column::new("sku", AbstractType::FixedChar { length: 8 }).not_null(),
        ],
    );
    assert_eq!(
        compiler().compile_create_table(&table).unwrap(),
        "CREATE TABLE order_lines ( line_no SMALLINT, order_id BIGINT, sku CHAR(8) NOT NULL, \
         PRIMARY KEY (line_no, order_id) )"
    );
}

#[test]
fn test_two_identity_columns_rejected() {
    let table = Table::new(
        "twice",
        vec![
            Column::new("a", AbstractType::integer()).identity(),
            Column::new("b", AbstractType::integer()).identity(),
        ],
    );
    let err = compiler().compile_create_table(&table).unwrap_err();
    assert!(matches!(err, DdlError::MultipleIdentityColumns { .. }));
    assert_eq!(err.exit_code(), mimer_ddl::error::EXIT_SCHEMA_ERROR);
}

#[test]
fn test_reversed_interval_rejected() {
    let table = Table::new(
        "backwards",
        vec![Column::new(
            "span",
            AbstractType::interval(IntervalType::range(
                IntervalUnit::Second,
                None,
                IntervalUnit::Year,
                None,
            )),
        )],
    );
    assert!(matches!(
        compiler().compile_create_table(&table),
        Err(DdlError::TypeSpecification(_))
    ));
}

#[test]
fn test_uuid_without_native_type() {
    let legacy = DdlCompiler::new(
        MimerDialect::with_config(DialectConfig {
            native_uuid: false,
            ..Default::default()
        })
        .unwrap(),
    );
    let err = legacy.compile_create_table(&types_test()).unwrap_err();
    assert!(matches!(err, DdlError::UnsupportedType { .. }));
}

#[test]
fn test_schema_file_fixture() {
    let yaml = r#"
tables:
  - name: types_test
    columns:
      - { name: id, type: { kind: integer }, primary_key: true, identity: true }
      - { name: val_int, type: { kind: integer } }
      - { name: val_float, type: { kind: float } }
      - { name: val_date, type: { kind: date } }
      - { name: val_ts, type: { kind: timestamp } }
      - { name: val_time, type: { kind: time } }
      - { name: val_str, type: { kind: varchar, length: 40 } }
      - { name: val_uuid, type: { kind: uuid } }
  - name: spans
    columns:
      - { name: ym, type: { kind: interval, fields: "YEAR(2) TO MONTH" } }
      - { name: ds, type: { kind: interval, fields: "DAY(5) TO SECOND(2)" } }
"#;
    let schema = SchemaFile::from_yaml(yaml).unwrap();
    let c = compiler();

    assert_eq!(
        c.compile_create_table(&schema.tables[0]).unwrap(),
        TYPES_TEST_DDL
    );
    assert_eq!(
        c.compile_create_table(&schema.tables[1]).unwrap(),
        "CREATE TABLE spans ( ym INTERVAL YEAR(2) TO MONTH, ds INTERVAL DAY(5) TO SECOND(2) )"
    );
}
