//! Cross product (Cartesian join) of the FROM tables.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use sqeval_core::schema::{ColumnDef, Table};
use sqeval_core::Row;

/// A FROM table paired with its alias, in declaration order.
pub type FromTable<'a> = (&'a str, &'a Table);

/// The contiguous block of columns one FROM table occupies in a [`CrossSchema`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableBlock {
    alias: String,
    offset: usize,
    width: usize,
}

impl TableBlock {
    /// Returns the FROM alias of this block.
    #[inline]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the index of the block's first column in the combined schema.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of columns in the block.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Combined column list of all FROM tables plus the per-alias column offsets.
#[derive(Clone, Debug, Default)]
pub struct CrossSchema {
    columns: Vec<ColumnDef>,
    blocks: Vec<TableBlock>,
    /// Alias to index into `blocks`.
    by_alias: HashMap<String, usize>,
}

impl CrossSchema {
    /// Builds the combined schema. Column order follows `tables` order.
    ///
    /// Aliases must be unique; callers check this before building the schema.
    pub fn new(tables: &[FromTable<'_>]) -> Self {
        let width = tables.iter().map(|(_, t)| t.column_count()).sum();
        let mut columns = Vec::with_capacity(width);
        let mut blocks = Vec::with_capacity(tables.len());
        let mut by_alias = HashMap::with_capacity(tables.len());

        for (alias, table) in tables {
            // Offset is recorded before the table's columns are appended.
            let block = TableBlock {
                alias: String::from(*alias),
                offset: columns.len(),
                width: table.column_count(),
            };
            let previous = by_alias.insert(block.alias.clone(), blocks.len());
            debug_assert!(previous.is_none(), "duplicate FROM alias {:?}", alias);
            blocks.push(block);
            columns.extend(table.columns().iter().cloned());
        }

        Self {
            columns,
            blocks,
            by_alias,
        }
    }

    /// Returns the combined columns.
    #[inline]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the total number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the table blocks in FROM order.
    #[inline]
    pub fn blocks(&self) -> &[TableBlock] {
        &self.blocks
    }

    /// Returns the block of `alias`.
    pub fn block(&self, alias: &str) -> Option<&TableBlock> {
        self.by_alias.get(alias).map(|&i| &self.blocks[i])
    }

    /// Returns the offset of the first column of `alias`.
    pub fn table_offset(&self, alias: &str) -> Option<usize> {
        self.block(alias).map(TableBlock::offset)
    }

    /// Returns the index in the combined schema of column `name` of table `alias`.
    ///
    /// The scan is bounded to the table's own block.
    pub fn column_index(&self, alias: &str, name: &str) -> Option<usize> {
        let block = self.block(alias)?;
        self.columns[block.offset..block.offset + block.width]
            .iter()
            .position(|c| c.name() == name)
            .map(|i| block.offset + i)
    }
}

/// The materialized cross product: combined schema and combined rows.
#[derive(Clone, Debug)]
pub struct CrossProduct {
    pub schema: CrossSchema,
    pub rows: Vec<Row>,
}

/// Builds the cross product of `tables`, in order. Aliases must be unique.
pub fn build_cross_product(tables: &[FromTable<'_>]) -> CrossProduct {
    CrossProduct {
        schema: CrossSchema::new(tables),
        rows: cross_rows(tables),
    }
}

/// Computes the combined rows of `tables` by iterative pairwise multiplication.
///
/// For each new table, every accumulated row (outer loop) is concatenated with
/// every row of the new table (inner loop). An empty table anywhere yields no rows.
pub fn cross_rows(tables: &[FromTable<'_>]) -> Vec<Row> {
    let mut iter = tables.iter();
    let mut accumulated: Vec<Row> = match iter.next() {
        Some((_, first)) => first.rows().to_vec(),
        None => return Vec::new(),
    };

    for (alias, table) in iter {
        let mut next = Vec::with_capacity(accumulated.len().saturating_mul(table.row_count()));
        for left in &accumulated {
            for right in table.rows() {
                next.push(Row::concat(left, right));
            }
        }
        tracing::trace!(table = *alias, rows = next.len(), "multiplied table into cross product");
        accumulated = next;
    }

    accumulated
}
