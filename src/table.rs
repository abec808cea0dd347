// src/table.rs
//! HTML table rendering.
//!
//! The markup mirrors the dashboard's inline-styled tables. Labels, text
//! cells and the header color are HTML-escaped; formatted numbers never
//! need it.

use crate::data_types::{Align, CellFormat, CellValue, Column, Row};
use crate::format::{format_currency, format_percent};
use crate::ui::TABLE_THEME;

/// Header background used when the caller does not pass one.
pub const DEFAULT_HEADER_COLOR: &str = "#667eea";

/// Renders `rows` as an HTML table with one `<td>` per column.
///
/// Body rows alternate `#f9f9f9` / `white`, starting with `#f9f9f9`.
/// A key missing from a row renders an empty cell.
pub fn build_table(rows: &[Row], columns: &[Column], header_color: Option<&str>) -> String {
    let header_color = header_color.unwrap_or(TABLE_THEME.header_bg);

    let mut table = String::from(r#"<table style="width: 100%; border-collapse: collapse;">"#);
    table.push_str(&format!(
        r#"<thead><tr style="background: {}; color: {};">"#,
        escape_html(header_color),
        TABLE_THEME.header_fg
    ));

    for col in columns {
        table.push_str(&format!(
            r#"<th style="padding: 1rem; text-align: {};">{}</th>"#,
            alignment(col),
            escape_html(&col.label)
        ));
    }

    table.push_str("</tr></thead><tbody>");

    for (i, row) in rows.iter().enumerate() {
        let bg = if i % 2 == 0 {
            TABLE_THEME.row_even_bg
        } else {
            TABLE_THEME.row_odd_bg
        };
        table.push_str(&format!(r#"<tr style="background: {};">"#, bg));

        for col in columns {
            table.push_str(&format!(
                r#"<td style="padding: 1rem; text-align: {};">{}</td>"#,
                alignment(col),
                render_cell(row.get(&col.key), col.format)
            ));
        }

        table.push_str("</tr>");
    }

    table.push_str("</tbody></table>");
    table
}

fn alignment(col: &Column) -> &'static str {
    col.align.unwrap_or(Align::Left).as_css()
}

fn render_cell(value: Option<&CellValue>, format: Option<CellFormat>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match (format, value.as_number()) {
        (Some(CellFormat::Currency), Some(n)) => format_currency(n),
        (Some(CellFormat::Percent), Some(n)) => {
            let color = if n >= 0.0 {
                TABLE_THEME.positive_fg
            } else {
                TABLE_THEME.negative_fg
            };
            format!(
                r#"<span style="color: {}; font-weight: bold;">{}</span>"#,
                color,
                format_percent(n)
            )
        }
        // unformatted columns and non-numeric values in formatted ones
        _ => escape_html(&value.to_string()),
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
