//! XLSX constants and default preset factories.

use tasksheet_io_md::EnumTaskField;

use crate::spec::{SpecCellFormat, SpecTaskColumn, SpecTaskSheetFormats, SpecTaskSheetLayout};

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Excel column width upper bound (character units).
pub const N_WIDTH_EXCEL_COLUMN_MAX: f64 = 255.0;

/// Default output workbook, resolved relative to the working directory.
pub const C_FILE_XLSX_DEFAULT: &str = "repartition_taches.xlsx";
/// Name of the single task sheet.
pub const C_SHEET_NAME_DEFAULT: &str = "Tâches";
/// Header row height in points.
pub const N_HEIGHT_HEADER_ROW: f64 = 30.0;
/// Header fill color.
pub const C_COLOR_HEADER_BG: &str = "#4472C4";
/// Header font color.
pub const C_COLOR_HEADER_FONT: &str = "#FFFFFF";

/// Column widths in field order: two categorical columns, the wide
/// description column, then the short tag/assignee/estimate columns.
pub const TUP_WIDTH_COLUMNS: [f64; 6] = [18.0, 18.0, 50.0, 15.0, 12.0, 12.0];

/// Build default header/body formats used by [`crate::writer::TaskSheetWriter`].
pub fn derive_default_task_formats() -> SpecTaskSheetFormats {
    let cfg_base_fmt_spec = SpecCellFormat {
        valign: Some("vcenter".to_string()),
        text_wrap: Some(true),
        ..Default::default()
    };

    SpecTaskSheetFormats {
        header: cfg_base_fmt_spec.with_(SpecCellFormat {
            font_size: Some(12),
            bold: Some(true),
            font_color: Some(C_COLOR_HEADER_FONT.to_string()),
            bg_color: Some(C_COLOR_HEADER_BG.to_string()),
            align: Some("center".to_string()),
            ..Default::default()
        }),
        body: cfg_base_fmt_spec.with_(SpecCellFormat {
            align: Some("left".to_string()),
            border: Some(1),
            ..Default::default()
        }),
    }
}

/// Build default sheet layout: one column per task field.
pub fn derive_default_task_layout() -> SpecTaskSheetLayout {
    SpecTaskSheetLayout {
        sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
        height_header: N_HEIGHT_HEADER_ROW,
        columns: EnumTaskField::ALL
            .iter()
            .zip(TUP_WIDTH_COLUMNS)
            .map(|(field, width)| SpecTaskColumn {
                field: *field,
                width,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_widths_by_field() {
        let layout = derive_default_task_layout();
        assert_eq!(layout.sheet_name, "Tâches");
        assert_eq!(layout.height_header, 30.0);

        let l_pairs: Vec<(&str, f64)> = layout
            .columns
            .iter()
            .map(|col| (col.field.label(), col.width))
            .collect();
        assert_eq!(
            l_pairs,
            vec![
                ("Catégorie", 18.0),
                ("Module", 18.0),
                ("Tâches", 50.0),
                ("Type", 15.0),
                ("Qui", 12.0),
                ("Estimation", 12.0),
            ]
        );
    }

    #[test]
    fn test_default_formats() {
        let formats = derive_default_task_formats();

        assert_eq!(formats.header.bold, Some(true));
        assert_eq!(formats.header.font_size, Some(12));
        assert_eq!(formats.header.font_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(formats.header.bg_color.as_deref(), Some("#4472C4"));
        assert_eq!(formats.header.align.as_deref(), Some("center"));
        assert_eq!(formats.header.valign.as_deref(), Some("vcenter"));
        assert_eq!(formats.header.text_wrap, Some(true));
        assert_eq!(formats.header.border, None);

        assert_eq!(formats.body.bold, None);
        assert_eq!(formats.body.align.as_deref(), Some("left"));
        assert_eq!(formats.body.valign.as_deref(), Some("vcenter"));
        assert_eq!(formats.body.text_wrap, Some(true));
        assert_eq!(formats.body.border, Some(1));
    }
}
