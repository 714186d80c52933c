//! HTML size chart rendered into the product description

use super::dataset::Row;

/// Garment sizes that can appear in the size chart, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    S,
    M,
    L,
    XL,
    XXL,
}

/// The measurement columns of one size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementColumns {
    pub shoulder_width: &'static str,
    pub chest_width: &'static str,
    pub length: &'static str,
    pub sleeve_length: &'static str,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn label(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }

    pub fn columns(self) -> MeasurementColumns {
        match self {
            Size::S => MeasurementColumns {
                shoulder_width: "Sサイズ肩幅",
                chest_width: "Sサイズ身幅",
                length: "Sサイズ着丈",
                sleeve_length: "Sサイズ袖丈",
            },
            Size::M => MeasurementColumns {
                shoulder_width: "Mサイズ肩幅",
                chest_width: "Mサイズ身幅",
                length: "Mサイズ着丈",
                sleeve_length: "Mサイズ袖丈",
            },
            Size::L => MeasurementColumns {
                shoulder_width: "Lサイズ肩幅",
                chest_width: "Lサイズ身幅",
                length: "Lサイズ着丈",
                sleeve_length: "Lサイズ袖丈",
            },
            Size::XL => MeasurementColumns {
                shoulder_width: "XLサイズ肩幅",
                chest_width: "XLサイズ身幅",
                length: "XLサイズ着丈",
                sleeve_length: "XLサイズ袖丈",
            },
            Size::XXL => MeasurementColumns {
                shoulder_width: "XXLサイズ肩幅",
                chest_width: "XXLサイズ身幅",
                length: "XXLサイズ着丈",
                sleeve_length: "XXLサイズ袖丈",
            },
        }
    }
}

/// Measurements of one size as read from a row. Missing cells are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMeasurements<'a> {
    pub size: Size,
    pub shoulder_width: &'a str,
    pub chest_width: &'a str,
    pub length: &'a str,
    pub sleeve_length: &'a str,
}

/// Sizes to show for this row.
///
/// A size is listed when its shoulder width is non-empty ("0" counts);
/// its other measurements may still be blank.
pub fn measured_sizes(row: &Row) -> Vec<SizeMeasurements<'_>> {
    Size::ALL
        .iter()
        .filter_map(|&size| {
            let cols = size.columns();
            let shoulder_width = row.value(cols.shoulder_width)?;
            Some(SizeMeasurements {
                size,
                shoulder_width,
                chest_width: row.get(cols.chest_width).unwrap_or(""),
                length: row.get(cols.length).unwrap_or(""),
                sleeve_length: row.get(cols.sleeve_length).unwrap_or(""),
            })
        })
        .collect()
}

const CELL_OPEN: &str = "<td style='padding:6px 12px;'>";

fn table_row(label: &str, cells: impl Iterator<Item = String>) -> String {
    let mut out = format!("<tr>{CELL_OPEN}{label}</td>");
    for cell in cells {
        out.push_str(&format!("{CELL_OPEN}{cell}</td>"));
    }
    out.push_str("</tr>");
    out
}

/// Render the size chart for a row.
///
/// The caption and the five label rows are always present, even when no
/// size qualifies. Values are inserted verbatim, without HTML escaping.
pub fn render_size_table(row: &Row) -> String {
    let sizes = measured_sizes(row);

    let rows = [
        table_row("", sizes.iter().map(|m| m.size.label().to_string())),
        table_row("肩幅", sizes.iter().map(|m| m.shoulder_width.to_string())),
        table_row("身幅", sizes.iter().map(|m| m.chest_width.to_string())),
        table_row("着丈", sizes.iter().map(|m| m.length.to_string())),
        table_row("袖丈", sizes.iter().map(|m| m.sleeve_length.to_string())),
    ];

    let mut html = String::new();
    html.push_str("<p style='font-size:9pt;'>サイズ表：(CM)</p>\n");
    html.push_str("<table style=\"border-collapse:collapse; font-size:9pt; line-height:2.2;\">\n");
    for row in rows {
        html.push_str("  ");
        html.push_str(&row);
        html.push('\n');
    }
    html.push_str("</table>");
    html
}
