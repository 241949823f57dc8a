//! Renders a [`VendorTable`] as a single-transaction SQL script.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::WriteError;
use crate::table::VendorTable;

const BEGIN: &str = "start transaction;\n";
const INSERT: &str = "insert into vendor(prefix, name) values\n";
const END: &str = "end transaction;\n";

/// Doubles single quotes. Nothing else is escaped.
pub fn escape(name: &str) -> Cow<'_, str> {
    if name.contains('\'') {
        Cow::Owned(name.replace('\'', "''"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Renders the whole script. Prefixes are lowercased, rows keep table order.
///
/// An empty table yields a transaction with no insert statement.
pub fn render(table: &VendorTable) -> String {
    let mut out = String::from(BEGIN);

    if !table.is_empty() {
        out.push_str(INSERT);
        let last = table.len() - 1;
        for (idx, (prefix, name)) in table.iter().enumerate() {
            let terminator = if idx == last { ';' } else { ',' };
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "\t('{}', '{}'){}",
                prefix.to_lowercase(),
                escape(name),
                terminator
            );
        }
    }

    out.push_str(END);
    out
}

/// Writes `script` to `path`, replacing any existing file.
pub fn write_script(path: &Path, script: &str) -> Result<(), WriteError> {
    std::fs::write(path, script).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &[(&str, &str)]) -> VendorTable {
        let mut table = VendorTable::new();
        for (prefix, name) in rows {
            table.insert(prefix.to_string(), name.to_string());
        }
        table
    }

    #[test]
    fn escape_doubles_single_quotes() {
        assert_eq!(escape("O'Brien's Networking"), "O''Brien''s Networking");
    }

    #[test]
    fn escape_leaves_other_characters() {
        let name = "Foo \"Bar\" \\ Baz; --";
        assert!(matches!(escape(name), Cow::Borrowed(_)));
        assert_eq!(escape(name), name);
    }

    #[test]
    fn render_multiple_rows() {
        let sql = render(&table(&[
            ("00:00:0C", "Cisco Systems, Inc"),
            ("00:55:DA:0", "O'Brien's Networking"),
        ]));

        assert_eq!(
            sql,
            "start transaction;\n\
             insert into vendor(prefix, name) values\n\
             \t('00:00:0c', 'Cisco Systems, Inc'),\n\
             \t('00:55:da:0', 'O''Brien''s Networking');\n\
             end transaction;\n"
        );
    }

    #[test]
    fn render_single_row_ends_with_semicolon() {
        let sql = render(&table(&[("00:00:0C/2", "Cisco Special")]));

        let rows: Vec<&str> = sql.lines().filter(|l| l.starts_with('\t')).collect();
        assert_eq!(rows, vec!["\t('00:00:0c/2', 'Cisco Special');"]);
    }

    #[test]
    fn render_empty_table_has_no_insert() {
        assert_eq!(render(&VendorTable::new()), "start transaction;\nend transaction;\n");
    }

    #[test]
    fn render_skips_removed_entries() {
        let mut t = table(&[("00:55:DA", "IeeeRegi"), ("00:55:DA:0", "Nanoleaf")]);
        t.remove("00:55:DA");

        let sql = render(&t);
        assert!(!sql.contains("'00:55:da'"));
        assert!(sql.contains("\t('00:55:da:0', 'Nanoleaf');\n"));
    }

    #[test]
    fn write_script_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendor.sql");
        std::fs::write(&path, "old contents that are much longer than the new ones").unwrap();

        write_script(&path, "start transaction;\nend transaction;\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "start transaction;\nend transaction;\n"
        );
    }

    #[test]
    fn write_script_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("vendor.sql");

        let err = write_script(&path, "").unwrap_err();
        assert_eq!(err.path, path);
    }
}
