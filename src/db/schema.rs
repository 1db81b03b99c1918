//! SQL DDL for the entities this service knows about.
//! Every statement is guarded with `IF NOT EXISTS`, so applying it twice is a no-op.

use super::models::TestRow;

/// Backing table of one entity plus the DDL that creates it.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub table: &'static str,
    pub ddl: &'static str,
}

impl EntitySchema {
    /// Individual statements of `ddl`, in order.
    pub fn statements(&self) -> impl Iterator<Item = &'static str> {
        self.ddl.split(';').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// `test_table`:
/// - `id` SERIAL PRIMARY KEY, with an explicit index
/// - `name` VARCHAR(100) NOT NULL
/// - `description` TEXT NULL
/// - `created_at` / `updated_at` TIMESTAMP defaulting to `now()`
pub const TEST_TABLE: EntitySchema = EntitySchema {
    table: TestRow::TABLE,
    ddl: r#"
CREATE TABLE IF NOT EXISTS test_table (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    description TEXT NULL,
    created_at TIMESTAMP NULL DEFAULT now(),
    updated_at TIMESTAMP NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS ix_test_table_id ON test_table (id);
"#,
};

/// Entities whose tables `Database::create_schema` ensures.
pub const REGISTERED: &[EntitySchema] = &[TEST_TABLE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_statement_is_idempotent() {
        for entity in REGISTERED {
            for stmt in entity.statements() {
                assert!(stmt.contains("IF NOT EXISTS"), "{}: {stmt}", entity.table);
            }
        }
    }

    #[test]
    fn test_table_splits_into_table_then_index() {
        let stmts: Vec<_> = TEST_TABLE.statements().collect();
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("CREATE TABLE IF NOT EXISTS test_table"));
        assert!(stmts[1].starts_with("CREATE INDEX IF NOT EXISTS ix_test_table_id"));
    }
}
