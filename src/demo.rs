use crate::error::Result;
use crate::sheets::SpreadsheetOps;
use google_sheets4::FieldMask;
use google_sheets4::api::{CellFormat, Color, GridRange};
use serde_json::json;
use tracing::info;

/// Fixed sequence of calls exercising every operation once. Strictly
/// sequential; the first error aborts the run.
pub async fn run_demo(ops: &impl SpreadsheetOps, sheet_name: &str) -> Result<()> {
    let sheet_id = ops.sheet_id(sheet_name).await?;

    ops.update(
        "A1",
        vec![
            vec![json!("aaa"), json!("bbb")],
            vec![json!("ccc"), json!("ddd")],
        ],
    )
    .await?;

    ops.append(sheet_name, vec![vec![json!("1")]]).await?;

    let range = GridRange {
        sheet_id: Some(sheet_id),
        start_row_index: Some(2),
        end_row_index: Some(4),
        start_column_index: Some(1),
        end_column_index: Some(3),
    };

    ops.format(
        range.clone(),
        CellFormat {
            background_color: Some(Color {
                red: Some(1.0),
                ..Default::default()
            }),
            ..Default::default()
        },
        FieldMask::new(&["userEnteredFormat.backgroundColor"]),
    )
    .await?;

    let rows = ops.get(&format!("'{}'!A1:B1", sheet_name)).await?;
    for row in &rows {
        info!(?row, "Read row");
    }

    ops.set_list_validation(range, &["○".to_string(), "×".to_string()])
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Mutex;

    /// In-memory stand-in for the remote spreadsheet: one grid per fake, a
    /// title table for id lookups, and a call log to assert on ordering.
    #[derive(Default)]
    struct FakeSheets {
        titles: Vec<(String, i32)>,
        grid: Mutex<Vec<Vec<Value>>>,
        calls: Mutex<Vec<&'static str>>,
        formats: Mutex<Vec<(GridRange, CellFormat, FieldMask)>>,
        validations: Mutex<Vec<(GridRange, Vec<String>)>>,
        fail_on: Option<&'static str>,
    }

    impl FakeSheets {
        fn with_sheet(title: &str, id: i32) -> Self {
            FakeSheets {
                titles: vec![(title.to_string(), id)],
                ..Default::default()
            }
        }

        fn record(&self, op: &'static str) -> Result<()> {
            self.calls.lock().unwrap().push(op);
            if self.fail_on == Some(op) {
                return Err(AppError::Sheets(format!("injected failure in {}", op)));
            }
            Ok(())
        }
    }

    // A1 helpers so the fake honours real range semantics (zero-based
    // internally, inclusive ends in the notation).
    fn parse_cell(cell: &str) -> (usize, usize) {
        let split = cell
            .find(|c: char| c.is_ascii_digit())
            .expect("cell reference has no row number");
        let (letters, digits) = cell.split_at(split);
        let col = letters
            .chars()
            .fold(0, |acc, c| acc * 26 + (c as usize - 'A' as usize + 1))
            - 1;
        let row = digits.parse::<usize>().unwrap() - 1;
        (row, col)
    }

    fn parse_range(range: &str) -> ((usize, usize), Option<(usize, usize)>) {
        let cells = range.rsplit('!').next().unwrap();
        match cells.split_once(':') {
            Some((start, end)) => (parse_cell(start), Some(parse_cell(end))),
            None => (parse_cell(cells), None),
        }
    }

    #[async_trait]
    impl SpreadsheetOps for FakeSheets {
        async fn get(&self, range: &str) -> Result<Vec<Vec<Value>>> {
            self.record("get")?;
            let ((start_row, start_col), end) = parse_range(range);
            let (end_row, end_col) = end.unwrap_or((start_row, start_col));

            let grid = self.grid.lock().unwrap();
            let rows = grid
                .iter()
                .skip(start_row)
                .take(end_row - start_row + 1)
                .map(|row| {
                    row.iter()
                        .skip(start_col)
                        .take(end_col - start_col + 1)
                        .cloned()
                        .collect()
                })
                .collect();
            Ok(rows)
        }

        async fn update(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<()> {
            self.record("update")?;
            let ((start_row, start_col), _) = parse_range(range);

            let mut grid = self.grid.lock().unwrap();
            for (i, row) in rows.into_iter().enumerate() {
                while grid.len() <= start_row + i {
                    grid.push(Vec::new());
                }
                let target = &mut grid[start_row + i];
                for (j, cell) in row.into_iter().enumerate() {
                    while target.len() <= start_col + j {
                        target.push(Value::Null);
                    }
                    target[start_col + j] = cell;
                }
            }
            Ok(())
        }

        async fn append(&self, _sheet_name: &str, rows: Vec<Vec<Value>>) -> Result<()> {
            self.record("append")?;
            self.grid.lock().unwrap().extend(rows);
            Ok(())
        }

        async fn format(
            &self,
            range: GridRange,
            format: CellFormat,
            fields: FieldMask,
        ) -> Result<()> {
            self.record("format")?;
            self.formats.lock().unwrap().push((range, format, fields));
            Ok(())
        }

        async fn sheet_id(&self, title: &str) -> Result<i32> {
            self.record("sheet_id")?;
            self.titles
                .iter()
                .find(|(name, _)| name == title)
                .map(|(_, id)| *id)
                .ok_or_else(|| AppError::SheetNotFound(title.to_string()))
        }

        async fn set_list_validation(&self, range: GridRange, values: &[String]) -> Result<()> {
            self.record("set_list_validation")?;
            self.validations
                .lock()
                .unwrap()
                .push((range, values.to_vec()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_demo_sequence() {
        let fake = FakeSheets::with_sheet("Sheet1", 99);

        run_demo(&fake, "Sheet1").await.unwrap();

        assert_eq!(
            *fake.calls.lock().unwrap(),
            vec![
                "sheet_id",
                "update",
                "append",
                "format",
                "get",
                "set_list_validation",
            ]
        );

        let grid = fake.grid.lock().unwrap();
        assert_eq!(grid[0], vec![json!("aaa"), json!("bbb")]);
        assert_eq!(grid[1], vec![json!("ccc"), json!("ddd")]);
        assert_eq!(grid[2], vec![json!("1")]);

        let formats = fake.formats.lock().unwrap();
        let (range, format, fields) = &formats[0];
        assert_eq!(range.sheet_id, Some(99));
        assert_eq!(format.background_color.as_ref().unwrap().red, Some(1.0));
        assert_eq!(
            *fields,
            FieldMask::new(&["userEnteredFormat.backgroundColor"])
        );

        let validations = fake.validations.lock().unwrap();
        let (range, values) = &validations[0];
        assert_eq!(range.sheet_id, Some(99));
        assert_eq!(*values, vec!["○".to_string(), "×".to_string()]);
    }

    #[tokio::test]
    async fn test_demo_aborts_on_first_failure() {
        let fake = FakeSheets {
            fail_on: Some("update"),
            ..FakeSheets::with_sheet("Sheet1", 99)
        };

        let result = run_demo(&fake, "Sheet1").await;

        assert!(matches!(result, Err(AppError::Sheets(_))));
        assert_eq!(*fake.calls.lock().unwrap(), vec!["sheet_id", "update"]);
    }

    #[tokio::test]
    async fn test_demo_unknown_sheet() {
        let fake = FakeSheets::with_sheet("Sheet1", 99);

        let result = run_demo(&fake, "Sheet3").await;

        assert!(matches!(result, Err(AppError::SheetNotFound(name)) if name == "Sheet3"));
    }

    #[tokio::test]
    async fn test_update_then_get_round_trip() {
        let fake = FakeSheets::with_sheet("Sheet1", 1);
        let rows = vec![
            vec![json!("plain"), json!("strings")],
            vec![json!("round"), json!("trip")],
        ];

        fake.update("A1", rows.clone()).await.unwrap();

        assert_eq!(fake.get("A1:B2").await.unwrap(), rows);
    }

    #[tokio::test]
    async fn test_append_never_overwrites() {
        let fake = FakeSheets::with_sheet("Sheet1", 1);
        fake.update("A1", vec![vec![json!("a")], vec![json!("b")]])
            .await
            .unwrap();

        fake.append("Sheet1", vec![vec![json!("x")]]).await.unwrap();

        let grid = fake.grid.lock().unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], vec![json!("a")]);
        assert_eq!(grid[1], vec![json!("b")]);
        assert_eq!(grid[2], vec![json!("x")]);
    }
}
