//! Stateless helper utilities used by the XLSX writer kernel.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

use crate::conf::{N_LEN_EXCEL_SHEET_NAME_MAX, N_WIDTH_EXCEL_COLUMN_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::{SpecCellFormat, SpecTaskSheetLayout, XlsxWriteError};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Check that a layout can be rendered.
pub fn validate_layout(layout: &SpecTaskSheetLayout) -> Result<(), XlsxWriteError> {
    if layout.columns.is_empty() {
        return Err(XlsxWriteError::InvalidLayout(
            "layout.columns must not be empty.".to_string(),
        ));
    }
    if !(layout.height_header > 0.0 && layout.height_header.is_finite()) {
        return Err(XlsxWriteError::InvalidLayout(format!(
            "layout.height_header must be > 0, got {}.",
            layout.height_header
        )));
    }
    for (n_idx, col) in layout.columns.iter().enumerate() {
        if !(col.width > 0.0 && col.width <= N_WIDTH_EXCEL_COLUMN_MAX) {
            return Err(XlsxWriteError::InvalidLayout(format!(
                "column {n_idx} ({}) width must be in (0, {N_WIDTH_EXCEL_COLUMN_MAX}], got {}.",
                col.field.label(),
                col.width
            )));
        }
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FormatConversion

/// Convert a [`SpecCellFormat`] into a `rust_xlsxwriter` format.
pub fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(align) = spec.align.as_deref().and_then(derive_format_align) {
        format = format.set_align(align);
    }
    if let Some(align) = spec.valign.as_deref().and_then(derive_format_align) {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &spec.font_color {
        format = format.set_font_color(val.as_str());
    }

    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }

    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

/// Map a border index to [`FormatBorder`]: `1` is the thin task-cell border,
/// anything else is none.
pub fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        _ => FormatBorder::None,
    }
}

/// Map alignment keyword (`left`, `center`, `vcenter`, ...) to [`FormatAlign`].
pub fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "justify" => Some(FormatAlign::Justify),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexCasting

pub(crate) fn cast_row_num(value: usize) -> Result<u32, XlsxWriteError> {
    u32::try_from(value).map_err(|_| XlsxWriteError::RowLimit {
        n_rows: value,
        n_rows_max: u32::MAX as usize,
    })
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, XlsxWriteError> {
    u16::try_from(value)
        .map_err(|_| XlsxWriteError::InvalidLayout(format!("column index overflow: {value}")))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use tasksheet_io_md::EnumTaskField;

    use super::*;
    use crate::conf::{derive_default_task_formats, derive_default_task_layout};
    use crate::spec::SpecTaskColumn;

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Tâches", "_"), "Tâches");
        assert_eq!(sanitize_sheet_name("a/b:c", "_"), "a_b_c");
        assert_eq!(sanitize_sheet_name("   ", "_"), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40), "_").chars().count(), 31);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(&derive_default_task_layout()).is_ok());

        let mut layout = derive_default_task_layout();
        layout.columns.clear();
        assert!(matches!(
            validate_layout(&layout),
            Err(XlsxWriteError::InvalidLayout(_))
        ));

        let mut layout = derive_default_task_layout();
        layout.columns.push(SpecTaskColumn {
            field: EnumTaskField::Who,
            width: 0.0,
        });
        assert!(validate_layout(&layout).is_err());

        let mut layout = derive_default_task_layout();
        layout.height_header = -1.0;
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_derive_format_align_and_border() {
        assert_eq!(derive_format_align(" Left "), Some(FormatAlign::Left));
        assert_eq!(derive_format_align("vcenter"), Some(FormatAlign::VerticalCenter));
        assert_eq!(derive_format_align("sideways"), None);
        assert_eq!(derive_format_border(0), FormatBorder::None);
        assert_eq!(derive_format_border(1), FormatBorder::Thin);
        assert_eq!(derive_format_border(99), FormatBorder::None);
    }

    #[test]
    fn test_derive_rust_xlsx_format_header() {
        let formats = derive_default_task_formats();
        let expected = Format::new()
            .set_font_size(12)
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_background_color("#4472C4")
            .set_font_color("#FFFFFF")
            .set_text_wrap();
        assert_eq!(derive_rust_xlsx_format(&formats.header), expected);
    }

    #[test]
    fn test_derive_rust_xlsx_format_body() {
        let formats = derive_default_task_formats();
        let expected = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_text_wrap();
        assert_eq!(derive_rust_xlsx_format(&formats.body), expected);
        assert_ne!(derive_rust_xlsx_format(&formats.body), Format::new().set_text_wrap());
    }

    #[test]
    fn test_cast_indices() {
        assert_eq!(cast_row_num(5).unwrap(), 5);
        assert_eq!(cast_col_num(5).unwrap(), 5);
        assert!(cast_col_num(70_000).is_err());
    }
}
