use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Sheet {
    /// Load a named worksheet from an Excel file.
    ///
    /// The format (`.xlsx` or legacy `.xls`) is detected from the file
    /// contents, so callers do not need to try both.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the worksheet does
    /// not exist, or the range cannot be read.
    pub fn from_workbook_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        let mut workbook =
            open_workbook_auto(path.as_ref()).map_err(|e| SheetError::Workbook(e.to_string()))?;

        if !workbook.sheet_names().iter().any(|n| n == sheet_name) {
            return Err(SheetError::WorksheetNotFound {
                name: sheet_name.to_string(),
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| SheetError::Workbook(e.to_string()))?;

        let mut data: Vec<Vec<CellValue>> = Vec::new();
        for row in range.rows() {
            let row_data: Vec<CellValue> = row.iter().map(data_to_cell_value).collect();
            data.push(row_data);
        }

        let mut sheet = Sheet::with_name(sheet_name);
        *sheet.data_mut() = data;
        Ok(sheet)
    }

    /// Save the sheet to an `.xlsx` file under its own name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet
            .set_name(self.name())
            .map_err(|e| SheetError::Workbook(e.to_string()))?;

        for (row_idx, row) in self.data().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let row_num = u32::try_from(row_idx)
                    .map_err(|_| SheetError::Workbook("Row index overflow".to_string()))?;
                let col_num = u16::try_from(col_idx)
                    .map_err(|_| SheetError::Workbook("Column index overflow".to_string()))?;

                match cell {
                    CellValue::Null => {} // Leave empty
                    CellValue::Bool(b) => {
                        worksheet
                            .write_boolean(row_num, col_num, *b)
                            .map_err(|e| SheetError::Workbook(e.to_string()))?;
                    }
                    CellValue::Int(i) => {
                        // Excel stores all numbers as f64
                        worksheet
                            .write_number(row_num, col_num, *i as f64)
                            .map_err(|e| SheetError::Workbook(e.to_string()))?;
                    }
                    CellValue::Float(f) => {
                        worksheet
                            .write_number(row_num, col_num, *f)
                            .map_err(|e| SheetError::Workbook(e.to_string()))?;
                    }
                    CellValue::String(s) => {
                        worksheet
                            .write_string(row_num, col_num, s)
                            .map_err(|e| SheetError::Workbook(e.to_string()))?;
                    }
                }
            }
        }

        workbook
            .save(path.as_ref())
            .map_err(|e| SheetError::Workbook(e.to_string()))?;

        Ok(())
    }
}
