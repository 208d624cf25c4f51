//! JSON file formats for queries, tables and results.
//!
//! Query files look like:
//!
//! ```json
//! {
//!   "select": [{"name": "n", "source": {"name": "name", "table": "u"}}],
//!   "from":   [{"name": "u", "source": "users"}],
//!   "where":  [{"op": "=", "left": {"column": {"name": "id"}}, "right": {"literal": 1}}]
//! }
//! ```
//!
//! Table and result files are a JSON array: the column list first, then one
//! array per row.

use crate::error::CliError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use sqeval_core::schema::{ColumnDef, Table};
use sqeval_core::{Row, SqlType, Value};
use sqeval_query::ast::{CmpOp, ColumnRef, Condition, Query, Selector, TableDecl, Term};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

// ============================================================================
// JSON Structures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonValue {
    Int(i64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonColumnDef {
    pub name: String,
    #[serde(rename = "type", with = "sql_type_name")]
    pub sql_type: SqlType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonColumnRef {
    pub name: String,
    #[serde(default)]
    pub table: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonTerm {
    Column(JsonColumnRef),
    Literal(JsonValue),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonCondition {
    #[serde(deserialize_with = "op_symbol")]
    pub op: CmpOp,
    pub left: JsonTerm,
    pub right: JsonTerm,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonSelector {
    pub name: String,
    pub source: JsonColumnRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonTableDecl {
    pub name: String,
    pub source: String,
}

/// Root query document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonQuery {
    pub select: Vec<JsonSelector>,
    pub from: Vec<JsonTableDecl>,
    #[serde(rename = "where", default)]
    pub where_clause: Vec<JsonCondition>,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Int(i) => Value::Int(i),
            JsonValue::Str(s) => Value::Str(s),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Int(i) => JsonValue::Int(*i),
            Value::Str(s) => JsonValue::Str(s.clone()),
        }
    }
}

/// Column types are written by their external names, `int` and `str`.
mod sql_type_name {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use sqeval_core::SqlType;

    pub fn serialize<S: Serializer>(sql_type: &SqlType, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(sql_type.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SqlType, D::Error> {
        let name = String::deserialize(deserializer)?;
        SqlType::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown column type \"{}\"", name)))
    }
}

fn op_symbol<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CmpOp, D::Error> {
    let symbol = String::deserialize(deserializer)?;
    CmpOp::from_symbol(&symbol)
        .ok_or_else(|| D::Error::custom(format!("unknown operator \"{}\"", symbol)))
}

impl From<JsonColumnRef> for ColumnRef {
    fn from(c: JsonColumnRef) -> Self {
        ColumnRef::new(c.table, c.name)
    }
}

impl From<JsonTerm> for Term {
    fn from(t: JsonTerm) -> Self {
        match t {
            JsonTerm::Column(c) => Term::Column(c.into()),
            JsonTerm::Literal(v) => Term::Literal(v.into()),
        }
    }
}

impl From<JsonQuery> for Query {
    fn from(q: JsonQuery) -> Self {
        Query {
            select: q
                .select
                .into_iter()
                .map(|s| Selector::new(s.name, s.source.into()))
                .collect(),
            from: q
                .from
                .into_iter()
                .map(|t| TableDecl::new(t.name, t.source))
                .collect(),
            where_clause: q
                .where_clause
                .into_iter()
                .map(|c| Condition::new(c.left.into(), c.op, c.right.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Parses a query document.
pub fn parse_query(json: &str) -> serde_json::Result<Query> {
    serde_json::from_str::<JsonQuery>(json).map(Query::from)
}

/// Reads a query file.
pub fn read_query(path: &Path) -> Result<Query, CliError> {
    let file = File::open(path).map_err(|e| CliError::io(path, e))?;
    let query: JsonQuery =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| CliError::json(path, e))?;
    Ok(query.into())
}

/// Parses a table document. `path` is only used for error messages.
pub fn parse_table(json: &str, path: &Path) -> Result<Table, CliError> {
    let elements: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| CliError::json(path, e))?;
    table_from_elements(elements, path)
}

/// Reads a table file.
pub fn read_table(path: &Path) -> Result<Table, CliError> {
    let file = File::open(path).map_err(|e| CliError::io(path, e))?;
    let elements: Vec<serde_json::Value> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| CliError::json(path, e))?;
    table_from_elements(elements, path)
}

fn table_from_elements(elements: Vec<serde_json::Value>, path: &Path) -> Result<Table, CliError> {
    let mut elements = elements.into_iter();
    let header = elements
        .next()
        .ok_or_else(|| CliError::schema(path, "missing column list"))?;
    let columns: Vec<JsonColumnDef> =
        serde_json::from_value(header).map_err(|e| CliError::json(path, e))?;
    let columns = columns
        .into_iter()
        .map(|c| ColumnDef::new(c.name, c.sql_type))
        .collect();

    let rows = elements
        .map(|element| {
            let values: Vec<JsonValue> =
                serde_json::from_value(element).map_err(|e| CliError::json(path, e))?;
            Ok(Row::new(values.into_iter().map(Value::from).collect()))
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    Table::new(columns, rows).map_err(|e| CliError::schema(path, e))
}

// ============================================================================
// Writing
// ============================================================================

fn header(table: &Table) -> Vec<JsonColumnDef> {
    table
        .columns()
        .iter()
        .map(|c| JsonColumnDef {
            name: c.name().to_string(),
            sql_type: c.sql_type(),
        })
        .collect()
}

fn row_values(row: &Row) -> Vec<JsonValue> {
    row.values().iter().map(JsonValue::from).collect()
}

/// Writes a table as a JSON array, one element per line.
pub fn write_table<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    out.write_all(b"[\n    ")?;
    serde_json::to_writer(&mut *out, &header(table))?;
    for row in table.rows() {
        out.write_all(b",\n    ")?;
        serde_json::to_writer(&mut *out, &row_values(row))?;
    }
    out.write_all(b"\n]\n")
}

/// Writes a table as one pretty-printed JSON document.
pub fn write_table_pretty<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    let mut document = Vec::with_capacity(table.row_count() + 1);
    document.push(serde_json::to_value(header(table))?);
    for row in table.rows() {
        document.push(serde_json::to_value(row_values(row))?);
    }
    serde_json::to_writer_pretty(&mut *out, &document)?;
    out.write_all(b"\n")
}

/// Writes a result table to `path`.
pub fn write_table_file(path: &Path, table: &Table, pretty: bool) -> Result<(), CliError> {
    let file = File::create(path).map_err(|e| CliError::io(path, e))?;
    let mut out = BufWriter::new(file);
    let written = if pretty {
        write_table_pretty(&mut out, table)
    } else {
        write_table(&mut out, table)
    };
    written
        .and_then(|_| out.flush())
        .map_err(|e| CliError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqeval_core::schema::TableBuilder;

    #[test]
    fn test_parse_query() {
        let query = parse_query(
            r#"{
                "select": [
                    {"name": "n", "source": {"name": "name", "table": "u"}},
                    {"name": "a", "source": {"name": "amt"}}
                ],
                "from": [{"name": "u", "source": "users"}, {"name": "o", "source": "orders"}],
                "where": [
                    {"op": ">=", "left": {"column": {"name": "amt", "table": null}}, "right": {"literal": 10}},
                    {"op": "!=", "left": {"literal": "x"}, "right": {"column": {"name": "name", "table": "u"}}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            query.select,
            vec![
                Selector::new("n", ColumnRef::qualified("u", "name")),
                Selector::new("a", ColumnRef::unqualified("amt")),
            ]
        );
        assert_eq!(query.from[1], TableDecl::new("o", "orders"));
        assert_eq!(
            query.where_clause,
            vec![
                Condition::new(Term::unqualified("amt"), CmpOp::Ge, Term::literal(10i64)),
                Condition::new(Term::literal("x"), CmpOp::Ne, Term::column("u", "name")),
            ]
        );
    }

    #[test]
    fn test_parse_query_without_where() {
        let query = parse_query(r#"{"select": [], "from": [{"name": "t", "source": "t"}]}"#).unwrap();
        assert!(query.where_clause.is_empty());
    }

    #[test]
    fn test_parse_query_rejects_unknown_operator() {
        let result = parse_query(
            r#"{"select": [], "from": [], "where": [
                {"op": "<>", "left": {"literal": 1}, "right": {"literal": 2}}
            ]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_table() {
        let table = parse_table(
            r#"[
                [{"name": "id", "type": "int"}, {"name": "name", "type": "str"}],
                [1, "a"],
                [2, "b"]
            ]"#,
            Path::new("users.table.json"),
        )
        .unwrap();

        assert_eq!(
            table.columns(),
            &[ColumnDef::new("id", SqlType::Int), ColumnDef::new("name", SqlType::Str)]
        );
        assert_eq!(table.rows()[1].values(), &[Value::Int(2), Value::Str("b".into())]);
    }

    #[test]
    fn test_parse_table_errors() {
        let path = Path::new("t.table.json");
        assert!(matches!(parse_table("[]", path), Err(CliError::Schema { .. })));
        assert!(matches!(parse_table("{", path), Err(CliError::Json { .. })));
        assert!(matches!(
            parse_table(r#"[[{"name": "id", "type": "float"}]]"#, path),
            Err(CliError::Json { .. })
        ));
        assert!(matches!(
            parse_table(r#"[[{"name": "id", "type": "int"}], ["one"]]"#, path),
            Err(CliError::Schema { .. })
        ));
        assert!(matches!(
            parse_table(r#"[[{"name": "id", "type": "int"}], [1, 2]]"#, path),
            Err(CliError::Schema { .. })
        ));
    }

    #[test]
    fn test_unknown_column_type_message() {
        match parse_table(r#"[[{"name": "id", "type": "float"}]]"#, Path::new("t")) {
            Err(CliError::Json { message, .. }) => {
                assert!(message.contains("unknown column type \"float\""))
            }
            other => panic!("expected json error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_table() {
        let table = TableBuilder::new()
            .add_column("n", SqlType::Str)
            .unwrap()
            .add_column("c", SqlType::Int)
            .unwrap()
            .add_row(vec![Value::Str("b".into()), Value::Int(-2)])
            .unwrap()
            .build();

        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n    [{\"name\":\"n\",\"type\":\"str\"},{\"name\":\"c\",\"type\":\"int\"}],\n    [\"b\",-2]\n]\n"
        );
    }

    #[test]
    fn test_write_empty_table() {
        let table = TableBuilder::new()
            .add_column("n", SqlType::Str)
            .unwrap()
            .build();

        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\n    [{\"name\":\"n\",\"type\":\"str\"}]\n]\n"
        );
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let table = TableBuilder::new()
            .add_column("id", SqlType::Int)
            .unwrap()
            .add_row(vec![Value::Int(7)])
            .unwrap()
            .build();

        let mut out = Vec::new();
        write_table_pretty(&mut out, &table).unwrap();
        let parsed = parse_table(std::str::from_utf8(&out).unwrap(), Path::new("out")).unwrap();
        assert_eq!(parsed, table);
    }
}
