use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

/// Render a header plus rows as a left-aligned text table.
pub(crate) fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let columns = header.len();
    let mut widths: Vec<usize> =
        header.iter().map(|cell| cell.width()).collect();
    for row in rows {
        for (index, cell) in row.iter().take(columns).enumerate() {
            widths[index] = widths[index].max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header, &widths);
    let rule: Vec<String> =
        widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, &rule, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.width());
        let _ = write!(line, "{cell}{}  ", " ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_owned()).collect()
    }

    #[test]
    fn render_table_aligns_columns() {
        let header = strings(&["Samples", "Calls"]);
        let rows = vec![strings(&["frame", "1"]), strings(&["a_long_name", "12"])];

        let table = render_table(&header, &rows);

        assert_eq!(
            table,
            "Samples      Calls\n\
             -----------  -----\n\
             frame        1\n\
             a_long_name  12\n"
        );
    }

    #[test]
    fn render_table_handles_no_rows() {
        let table = render_table(&strings(&["Samples"]), &[]);
        assert_eq!(table, "Samples\n-------\n");
    }
}
