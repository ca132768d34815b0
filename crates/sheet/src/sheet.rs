use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::collections::HashMap;

/// A sheet representing a 2D grid of cells (row-major storage)
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    column_names: Option<Vec<String>>,
    column_index: Option<HashMap<String, usize>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            column_names: None,
            column_index: None,
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
            column_names: None,
            column_index: None,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Get an entire row by index (0-based)
    pub fn row(&self, index: usize) -> Result<&Vec<CellValue>> {
        self.data.get(index).ok_or(SheetError::RowIndexOutOfBounds {
            index,
            count: self.row_count(),
        })
    }

    /// Remove and return a row, shifting later rows up
    pub fn drop_row(&mut self, index: usize) -> Result<Vec<CellValue>> {
        if index >= self.row_count() {
            return Err(SheetError::RowIndexOutOfBounds {
                index,
                count: self.row_count(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Get an entire column by index (0-based)
    ///
    /// Short rows are padded with `CellValue::Null`.
    pub fn column(&self, index: usize) -> Result<Vec<CellValue>> {
        if index >= self.col_count() {
            return Err(SheetError::ColumnIndexOutOfBounds {
                index,
                count: self.col_count(),
            });
        }

        Ok(self
            .data
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or(CellValue::Null))
            .collect())
    }

    /// Get an entire column by name
    pub fn column_by_name(&self, name: &str) -> Result<Vec<CellValue>> {
        let index = self.column_index_by_name(name)?;
        self.column(index)
    }

    /// Use the specified row as column headers
    ///
    /// # Errors
    ///
    /// Returns `SheetError::DuplicateColumnName` if the header row contains
    /// duplicate names.
    pub fn name_columns_by_row(&mut self, row_index: usize) -> Result<()> {
        let header_row = self.row(row_index)?;
        let names: Vec<String> = header_row.iter().map(|c| c.as_str()).collect();

        let mut index_map = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if index_map.contains_key(name) {
                return Err(SheetError::DuplicateColumnName { name: name.clone() });
            }
            index_map.insert(name.clone(), i);
        }

        self.column_names = Some(names);
        self.column_index = Some(index_map);
        Ok(())
    }

    /// Get column names (if set)
    #[must_use]
    pub fn column_names(&self) -> Option<&Vec<String>> {
        self.column_names.as_ref()
    }

    /// Check whether all of the given column names are present
    #[must_use]
    pub fn has_columns(&self, names: &[&str]) -> bool {
        match &self.column_index {
            Some(index) => names.iter().all(|name| index.contains_key(*name)),
            None => false,
        }
    }

    /// Get internal data reference
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get mutable internal data reference
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    /// Get the column index by name
    fn column_index_by_name(&self, name: &str) -> Result<usize> {
        self.column_index
            .as_ref()
            .ok_or_else(|| {
                SheetError::ColumnsNotNamed("Call name_columns_by_row() first".to_string())
            })?
            .get(name)
            .copied()
            .ok_or_else(|| SheetError::ColumnNotFound {
                name: name.to_string(),
            })
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Sheet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_sheet() -> Sheet {
        Sheet::from_data(vec![
            vec![
                CellValue::from("Valor N.F."),
                CellValue::from("Situacao"),
                CellValue::from("Operacao"),
            ],
            vec![
                CellValue::Float(150.0),
                CellValue::from("Emitida"),
                CellValue::from("Saida"),
            ],
            vec![
                CellValue::Float(80.0),
                CellValue::from("Ativa"),
                CellValue::from("Entrada"),
            ],
        ])
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.col_count(), 0);
        assert!(sheet.column_names().is_none());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let sheet = report_sheet();
        assert!(sheet.get(10, 0).is_err());
        assert!(sheet.get(0, 10).is_err());
        assert!(matches!(sheet.get(0, 0).unwrap(), CellValue::String(_)));
    }

    #[test]
    fn test_name_columns_by_row() {
        let mut sheet = report_sheet();
        sheet.name_columns_by_row(0).unwrap();

        let names = sheet.column_names().unwrap();
        assert_eq!(names, &["Valor N.F.", "Situacao", "Operacao"]);
        assert!(sheet.has_columns(&["Valor N.F.", "Situacao", "Operacao"]));
        assert!(!sheet.has_columns(&["Valor N.F.", "Missing"]));
    }

    #[test]
    fn test_name_columns_duplicate() {
        let mut sheet = Sheet::from_data(vec![vec!["A", "A"], vec!["1", "2"]]);
        let err = sheet.name_columns_by_row(0).unwrap_err();
        assert!(matches!(err, SheetError::DuplicateColumnName { name } if name == "A"));
    }

    #[test]
    fn test_column_by_name() {
        let mut sheet = report_sheet();
        sheet.name_columns_by_row(0).unwrap();

        let amounts = sheet.column_by_name("Valor N.F.").unwrap();
        // Column access includes the header row until it is dropped.
        assert_eq!(amounts.len(), 3);
        assert_eq!(amounts[1], CellValue::Float(150.0));
    }

    #[test]
    fn test_drop_row_reindexes() {
        let mut sheet = report_sheet();
        sheet.name_columns_by_row(0).unwrap();
        let header = sheet.drop_row(0).unwrap();

        assert_eq!(header[0].as_str(), "Valor N.F.");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.get(0, 0).unwrap(), &CellValue::Float(150.0));
    }

    #[test]
    fn test_column_pads_short_rows() {
        let mut sheet = Sheet::new();
        *sheet.data_mut() = vec![
            vec![CellValue::from("a"), CellValue::from("b")],
            vec![CellValue::from("c")],
        ];
        let col = sheet.column(1).unwrap();
        assert_eq!(col, vec![CellValue::from("b"), CellValue::Null]);
    }

    #[test]
    fn test_columns_not_named() {
        let sheet = report_sheet();
        let err = sheet.column_by_name("Situacao").unwrap_err();
        assert!(matches!(err, SheetError::ColumnsNotNamed(_)));
    }
}
